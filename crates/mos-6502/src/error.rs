//! Faults that stop the interpreter.

use emu_core::BusError;
use thiserror::Error;

/// A decode or memory fault raised by one instruction.
///
/// `pc` is the address of the faulting instruction's opcode byte. When a
/// fault is returned the CPU registers are exactly as they were before that
/// opcode was fetched, and memory is unchanged by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// The fetched byte has no entry in the opcode table.
    #[error("unknown opcode ${opcode:02X} at ${pc:04X}")]
    UnknownOpcode { opcode: u8, pc: u16 },

    /// An operand resolved to an address outside the 64 KiB space.
    #[error("address ${address:X} out of range in instruction at ${pc:04X}")]
    AddressOutOfRange { address: u32, pc: u16 },
}

impl Fault {
    /// Address of the faulting instruction.
    #[must_use]
    pub const fn pc(&self) -> u16 {
        match *self {
            Self::UnknownOpcode { pc, .. } | Self::AddressOutOfRange { pc, .. } => pc,
        }
    }

    pub(crate) const fn from_bus(error: BusError, pc: u16) -> Self {
        match error {
            BusError::AddressOutOfRange { address } => Self::AddressOutOfRange { address, pc },
        }
    }
}
