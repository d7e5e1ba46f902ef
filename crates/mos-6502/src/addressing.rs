//! Addressing modes.
//!
//! Every mode resolves to an effective address. Immediate resolves to the
//! operand byte itself (the address under PC), so loads treat all modes the
//! same way: read one byte at the effective address.
//!
//! | Mode        | Syntax     | Cycles to resolve                 |
//! |-------------|------------|-----------------------------------|
//! | Immediate   | `#$nn`     | 0                                 |
//! | Zero Page   | `$nn`      | 1 fetch                           |
//! | Zero Page,X | `$nn,X`    | 1 fetch + 1 add (wraps in page 0) |
//! | Absolute    | `$nnnn`    | 2 fetches                         |
//! | Absolute,X  | `$nnnn,X`  | 2 fetches (+1 on page cross)      |

use emu_core::{Bus, BusError};

use crate::Mos6502;

/// Operand addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Immediate,
    ZeroPage,
    ZeroPageX,
    Absolute,
    AbsoluteX,
}

impl Mode {
    /// Cycles spent resolving the effective address, excluding any
    /// page-cross penalty.
    #[must_use]
    pub const fn cycles(self) -> u8 {
        match self {
            Self::Immediate => 0,
            Self::ZeroPage => 1,
            Self::ZeroPageX => 2,
            Self::Absolute | Self::AbsoluteX => 2,
        }
    }
}

/// A resolved operand address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Effective {
    /// Not clipped to 16 bits: `$FFFF,X` lands past the end of memory.
    pub address: u32,
    pub page_crossed: bool,
}

impl Effective {
    const fn at(address: u32) -> Self {
        Self {
            address,
            page_crossed: false,
        }
    }
}

impl Mos6502 {
    /// Fetch the next byte at PC and increment PC.
    pub(crate) fn fetch<B: Bus>(&mut self, bus: &B) -> Result<u8, BusError> {
        let pc = self.regs.advance_pc();
        bus.read(u32::from(pc))
    }

    /// Fetch a 16-bit word (little-endian) at PC.
    pub(crate) fn fetch_word<B: Bus>(&mut self, bus: &B) -> Result<u16, BusError> {
        let low = self.fetch(bus)?;
        let high = self.fetch(bus)?;
        Ok(u16::from_le_bytes([low, high]))
    }

    /// Resolve the effective address for `mode`, consuming operand bytes.
    pub(crate) fn resolve<B: Bus>(&mut self, bus: &B, mode: Mode) -> Result<Effective, BusError> {
        let effective = match mode {
            Mode::Immediate => Effective::at(u32::from(self.regs.advance_pc())),
            Mode::ZeroPage => Effective::at(u32::from(self.fetch(bus)?)),
            Mode::ZeroPageX => {
                let base = self.fetch(bus)?;
                Effective::at(u32::from(base.wrapping_add(self.regs.x)))
            }
            Mode::Absolute => Effective::at(u32::from(self.fetch_word(bus)?)),
            Mode::AbsoluteX => {
                let base = self.fetch_word(bus)?;
                let address = u32::from(base) + u32::from(self.regs.x);
                Effective {
                    address,
                    page_crossed: self.config.page_cross.crossed(base, address),
                }
            }
        };
        Ok(effective)
    }
}
