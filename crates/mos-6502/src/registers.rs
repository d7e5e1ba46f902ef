//! 6502 CPU registers.

use crate::Status;

/// 6502 CPU register set.
///
/// - A: 8-bit accumulator
/// - X, Y: 8-bit index registers
/// - SP: stack pointer, held as a full 16-bit address (page base included)
/// - PC: 16-bit program counter
/// - P: processor status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Stack pointer. JSR stores its return address here and moves it up.
    pub sp: u16,
    /// Program counter.
    pub pc: u16,
    /// Processor status flags.
    pub p: Status,
}

impl Registers {
    /// Registers in reset state: PC and SP as given, everything else zero.
    #[must_use]
    pub const fn new(pc: u16, sp: u16) -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp,
            pc,
            p: Status::new(),
        }
    }

    /// Advance PC, wrapping at $FFFF, and return its previous value.
    pub(crate) fn advance_pc(&mut self) -> u16 {
        let pc = self.pc;
        self.pc = pc.wrapping_add(1);
        pc
    }

    /// Reserve a word on the stack, return the address to write it at.
    ///
    /// The stack grows upwards: the word goes at SP and SP moves up by two.
    pub(crate) fn push_word(&mut self) -> u16 {
        let addr = self.sp;
        self.sp = self.sp.wrapping_add(2);
        addr
    }
}
