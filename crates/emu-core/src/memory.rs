//! Flat 64 KiB RAM.

use std::ops::{Index, IndexMut};

use thiserror::Error;

use crate::bus::{ADDRESS_SPACE, Bus, BusError};

const SIZE: usize = ADDRESS_SPACE as usize;

/// Length of the load-address header at the front of a PRG image.
const PRG_HEADER_LEN: usize = 2;

/// A program image that could not be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The image holds no bytes beyond its two-byte load address.
    #[error("program image of {len} bytes has no data after its load address")]
    TooShort { len: usize },

    /// The image body runs past `$FFFF`.
    #[error(transparent)]
    Bus(#[from] BusError),
}

/// A flat, zero-initialised 64 KiB memory bank.
///
/// Every address in `$0000-$FFFF` is plain RAM. Bus accesses outside that
/// range fail with [`BusError::AddressOutOfRange`]. Hosts seeding a program
/// image can index with a `u16`, which is always in range.
pub struct MemoryBank {
    data: Box<[u8; SIZE]>,
}

impl Default for MemoryBank {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBank {
    /// Number of addressable bytes.
    pub const SIZE: usize = SIZE;

    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Box::new([0; SIZE]),
        }
    }

    /// Copy `bytes` into memory starting at `address`.
    ///
    /// Fails without writing anything if the image would run past `$FFFF`.
    pub fn load(&mut self, address: u16, bytes: &[u8]) -> Result<(), BusError> {
        let start = usize::from(address);
        let end = start + bytes.len();
        if end > SIZE {
            return Err(BusError::AddressOutOfRange {
                address: end as u32 - 1,
            });
        }
        self.data[start..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Load a PRG image: a little-endian load address followed by the bytes
    /// to place there. Returns the load address.
    ///
    /// Nothing is written if the image is too short or would run past `$FFFF`.
    pub fn load_prg(&mut self, image: &[u8]) -> Result<u16, LoadError> {
        if image.len() <= PRG_HEADER_LEN {
            return Err(LoadError::TooShort { len: image.len() });
        }
        let (header, body) = image.split_at(PRG_HEADER_LEN);
        let address = u16::from_le_bytes([header[0], header[1]]);
        self.load(address, body)?;
        Ok(address)
    }

    /// Read a byte without going through the bus.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.data[usize::from(address)]
    }

    /// The whole memory image.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    fn index_of(address: u32) -> Result<usize, BusError> {
        if address < ADDRESS_SPACE {
            Ok(address as usize)
        } else {
            Err(BusError::AddressOutOfRange { address })
        }
    }
}

impl Bus for MemoryBank {
    fn read(&self, address: u32) -> Result<u8, BusError> {
        Ok(self.data[Self::index_of(address)?])
    }

    fn write(&mut self, address: u32, value: u8) -> Result<(), BusError> {
        self.data[Self::index_of(address)?] = value;
        Ok(())
    }

    /// Zero-fill the whole bank.
    fn initialize(&mut self) {
        self.data.fill(0);
    }
}

impl Index<u16> for MemoryBank {
    type Output = u8;

    fn index(&self, address: u16) -> &u8 {
        &self.data[usize::from(address)]
    }
}

impl IndexMut<u16> for MemoryBank {
    fn index_mut(&mut self, address: u16) -> &mut u8 {
        &mut self.data[usize::from(address)]
    }
}

impl std::fmt::Debug for MemoryBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.data.iter().filter(|&&b| b != 0).count();
        f.debug_struct("MemoryBank")
            .field("size", &SIZE)
            .field("non_zero_bytes", &used)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_bank_is_zeroed() {
        let mem = MemoryBank::new();
        assert!(mem.as_slice().iter().all(|&b| b == 0));
        assert_eq!(mem.as_slice().len(), MemoryBank::SIZE);
        assert_eq!(MemoryBank::SIZE, 65536);
    }

    #[test]
    fn read_write_bounds() {
        let mut mem = MemoryBank::new();
        mem.write(0xFFFF, 0x12).expect("last byte is addressable");
        assert_eq!(mem.read(0xFFFF), Ok(0x12));
        assert_eq!(
            mem.read(0x1_0000),
            Err(BusError::AddressOutOfRange { address: 0x1_0000 })
        );
        assert_eq!(
            mem.write(0x1_0000, 0),
            Err(BusError::AddressOutOfRange { address: 0x1_0000 })
        );
    }

    #[test]
    fn write_word_is_little_endian() {
        let mut mem = MemoryBank::new();
        mem.write_word(0x0100, 0xFFFE).expect("in range");
        assert_eq!(mem[0x0100], 0xFE);
        assert_eq!(mem[0x0101], 0xFF);
        assert_eq!(mem.read_word(0x0100), Ok(0xFFFE));
    }

    #[test]
    fn write_word_straddling_the_top_writes_nothing() {
        let mut mem = MemoryBank::new();
        assert_eq!(
            mem.write_word(0xFFFF, 0xABCD),
            Err(BusError::AddressOutOfRange { address: 0x1_0000 })
        );
        assert_eq!(mem[0xFFFF], 0);
    }

    #[test]
    fn initialize_clears_everything() {
        let mut mem = MemoryBank::new();
        mem.load(0x0200, &[1, 2, 3]).expect("fits");
        mem[0xFFFC] = 0xA9;
        mem.initialize();
        assert!(mem.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn load_rejects_overflowing_image() {
        let mut mem = MemoryBank::new();
        assert!(mem.load(0xFFFE, &[1, 2, 3]).is_err());
        assert_eq!(mem.peek(0xFFFE), 0);
        mem.load(0xFFFD, &[1, 2, 3]).expect("ends at $FFFF");
        assert_eq!(mem.peek(0xFFFF), 3);
    }

    #[test]
    fn load_prg_uses_header_as_load_address() {
        let mut mem = MemoryBank::new();
        let address = mem.load_prg(&[0x00, 0x10, 0xA9, 0x42]).expect("valid image");
        assert_eq!(address, 0x1000);
        assert_eq!(mem.peek(0x1000), 0xA9);
        assert_eq!(mem.peek(0x1001), 0x42);
        assert_eq!(mem.peek(0x1002), 0);
    }

    #[test]
    fn load_prg_rejects_short_images() {
        let mut mem = MemoryBank::new();
        assert_eq!(mem.load_prg(&[]), Err(LoadError::TooShort { len: 0 }));
        assert_eq!(mem.load_prg(&[0x00]), Err(LoadError::TooShort { len: 1 }));
        assert_eq!(
            mem.load_prg(&[0x00, 0x10]),
            Err(LoadError::TooShort { len: 2 })
        );
        assert!(mem.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn load_prg_rejects_image_past_top_of_memory() {
        let mut mem = MemoryBank::new();
        assert_eq!(
            mem.load_prg(&[0xFE, 0xFF, 1, 2, 3]),
            Err(LoadError::Bus(BusError::AddressOutOfRange { address: 0x1_0000 }))
        );
        assert!(mem.as_slice().iter().all(|&b| b == 0), "nothing written");

        assert_eq!(mem.load_prg(&[0xFE, 0xFF, 1, 2]), Ok(0xFFFE));
        assert_eq!(mem.peek(0xFFFF), 2);
    }

    proptest! {
        #[test]
        fn word_write_reads_back(address in 0u32..0xFFFF, value: u16) {
            let mut mem = MemoryBank::new();
            mem.write_word(address, value).expect("in range");
            prop_assert_eq!(mem.read(address), Ok(value as u8));
            prop_assert_eq!(mem.read(address + 1), Ok((value >> 8) as u8));
        }

        #[test]
        fn out_of_range_reads_fail(address in 0x1_0000u32..=u32::MAX) {
            let mem = MemoryBank::new();
            prop_assert_eq!(mem.read(address), Err(BusError::AddressOutOfRange { address }));
        }
    }
}
