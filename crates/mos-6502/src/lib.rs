//! Cycle-counted MOS 6502 interpreter.
//!
//! Covers the load and subroutine core of the instruction set: LDA in five
//! addressing modes and JSR. Each step runs one whole instruction and
//! reports its cycle cost; [`emu_core::Cpu::execute`] runs steps against a
//! cycle budget.
//!
//! ```
//! use emu_core::{Cpu, MemoryBank};
//! use mos_6502::Mos6502;
//!
//! let mut cpu = Mos6502::new();
//! let mut mem = MemoryBank::new();
//! cpu.reset(&mut mem);
//!
//! // LDA $42
//! mem[0xFFFC] = 0xA5;
//! mem[0xFFFD] = 0x42;
//! mem[0x0042] = 0x84;
//!
//! assert_eq!(cpu.execute(&mut mem, 3), Ok(3));
//! assert_eq!(cpu.regs.a, 0x84);
//! assert!(cpu.regs.p.negative());
//! ```
//!
//! Deliberate departures from the NMOS 6502:
//! - Reset starts execution at `$FFFC` itself; no vector is read.
//! - JSR writes its return address as one little-endian word at SP and
//!   moves SP *up* by two.
//! - Absolute,X charges its page-cross cycle per [`PageCrossRule`], which
//!   defaults to a magnitude check rather than a high-byte comparison.

mod addressing;
mod config;
mod cpu;
mod error;
pub mod flags;
pub mod opcode;
mod registers;

pub use addressing::Mode;
pub use config::{CpuConfig, PageCrossRule};
pub use cpu::Mos6502;
pub use error::Fault;
pub use flags::Status;
pub use registers::Registers;
