//! Memory bus interface.

use thiserror::Error;

/// Size of a 16-bit address space in bytes.
pub const ADDRESS_SPACE: u32 = 0x1_0000;

/// A failed bus access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BusError {
    /// The address lies outside the bus's address space.
    #[error("address ${address:X} is outside the 64 KiB address space")]
    AddressOutOfRange { address: u32 },
}

/// Memory bus interface.
///
/// CPUs access memory through this trait. Addresses are `u32` so that an
/// address computed from a malformed operand (e.g. `$FFFF + X`) reaches the
/// bus unclipped and can be rejected, rather than silently wrapping.
///
/// Bus accesses do not advance time. The CPU owns cycle accounting.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&self, address: u32) -> Result<u8, BusError>;

    /// Write a byte to the given address.
    fn write(&mut self, address: u32, value: u8) -> Result<(), BusError>;

    /// Return every byte to its power-on value.
    fn initialize(&mut self);

    /// Read a 16-bit little-endian word.
    fn read_word(&self, address: u32) -> Result<u16, BusError> {
        let low = self.read(address)?;
        let high = self.read(address + 1)?;
        Ok(u16::from_le_bytes([low, high]))
    }

    /// Write a 16-bit word little-endian: low byte at `address`, high byte
    /// at `address + 1`.
    ///
    /// Both addresses are checked before either byte is written, so a failed
    /// call leaves memory untouched.
    fn write_word(&mut self, address: u32, value: u16) -> Result<(), BusError> {
        if address >= ADDRESS_SPACE {
            return Err(BusError::AddressOutOfRange { address });
        }
        let high_address = address + 1;
        if high_address >= ADDRESS_SPACE {
            return Err(BusError::AddressOutOfRange {
                address: high_address,
            });
        }
        let [low, high] = value.to_le_bytes();
        self.write(address, low)?;
        self.write(high_address, high)
    }
}
