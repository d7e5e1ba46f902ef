//! Reset-time configuration.

/// How Absolute,X decides whether indexing crossed a page and costs an
/// extra cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PageCrossRule {
    /// Penalise when `effective - base >= $FF`.
    ///
    /// Only an index of `$FF` qualifies, so most real crossings
    /// (`$10FF + 1`) go unpenalised.
    #[default]
    Magnitude,
    /// Penalise when the high byte of the effective address differs from the
    /// high byte of the base, as the NMOS 6502 does.
    HighByte,
}

impl PageCrossRule {
    /// Whether indexing `base` to `effective` costs the extra cycle.
    #[must_use]
    pub const fn crossed(self, base: u16, effective: u32) -> bool {
        match self {
            Self::Magnitude => effective.saturating_sub(base as u32) >= 0xFF,
            Self::HighByte => (base as u32 & 0xFF00) != (effective & 0xFF00),
        }
    }
}

/// CPU configuration applied on every reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CpuConfig {
    /// PC after reset. Execution starts here; no vector is read.
    pub reset_pc: u16,
    /// SP after reset.
    pub stack_base: u16,
    /// Absolute,X page-cross rule.
    pub page_cross: PageCrossRule,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            reset_pc: 0xFFFC,
            stack_base: 0x0100,
            page_cross: PageCrossRule::Magnitude,
        }
    }
}
