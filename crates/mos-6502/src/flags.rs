//! 6502 processor status register (P).
//!
//! Seven independent condition flags packed into one byte in the hardware
//! bit order `NV-BDIZC`. Bit 5 has no flag and is always stored as 0.

/// Carry flag - set if operation resulted in carry/borrow.
pub const C: u8 = 0x01;

/// Zero flag - set if result is zero.
pub const Z: u8 = 0x02;

/// Interrupt disable.
pub const I: u8 = 0x04;

/// Decimal mode.
pub const D: u8 = 0x08;

/// Break.
pub const B: u8 = 0x10;

/// Overflow flag - set if signed arithmetic overflowed.
pub const V: u8 = 0x40;

/// Negative flag - set if result has bit 7 set.
pub const N: u8 = 0x80;

/// Every defined flag bit.
pub const ALL: u8 = C | Z | I | D | B | V | N;

/// Processor status register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status(u8);

impl Status {
    /// All flags clear.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create status from a packed byte. Bit 5 is dropped.
    #[must_use]
    pub const fn from_byte(value: u8) -> Self {
        Self(value & ALL)
    }

    /// Packed `NV-BDIZC` byte.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Check if a flag is set.
    #[must_use]
    pub const fn is_set(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// Set or clear a flag based on condition.
    pub fn set_if(&mut self, flag: u8, condition: bool) {
        if condition {
            self.0 |= flag & ALL;
        } else {
            self.0 &= !flag;
        }
    }

    /// Update N and Z flags based on a value.
    pub fn update_nz(&mut self, value: u8) {
        self.set_if(N, value & 0x80 != 0);
        self.set_if(Z, value == 0);
    }

    #[must_use]
    pub const fn carry(self) -> bool {
        self.is_set(C)
    }

    #[must_use]
    pub const fn zero(self) -> bool {
        self.is_set(Z)
    }

    #[must_use]
    pub const fn interrupt_disable(self) -> bool {
        self.is_set(I)
    }

    #[must_use]
    pub const fn decimal(self) -> bool {
        self.is_set(D)
    }

    #[must_use]
    pub const fn break_flag(self) -> bool {
        self.is_set(B)
    }

    #[must_use]
    pub const fn overflow(self) -> bool {
        self.is_set(V)
    }

    #[must_use]
    pub const fn negative(self) -> bool {
        self.is_set(N)
    }
}
