//! Read-only inspection of component state.
//!
//! Hosts report registers and flags through string paths, so a debugger or
//! test harness can dump state without knowing the concrete CPU type.
//! Queries never affect emulation state.

use std::fmt;

/// A dynamically-typed value for state queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// Boolean value (flags).
    Bool(bool),
    /// 8-bit register.
    U8(u8),
    /// 16-bit register or address.
    U16(u16),
    /// Counter.
    U64(u64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "${v:02X}"),
            Value::U16(v) => write!(f, "${v:04X}"),
            Value::U64(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

/// A component whose state can be inspected.
pub trait Observable {
    /// Query a specific property by path.
    ///
    /// Paths are hierarchical, separated by dots:
    /// - `pc` - Program counter
    /// - `a` - Accumulator
    /// - `flags.z` - Zero flag
    ///
    /// Returns `None` if the path is not recognised.
    fn query(&self, path: &str) -> Option<Value>;

    /// List all available query paths.
    fn query_paths(&self) -> &'static [&'static str];

    /// Render every path as `path=value`, one per line.
    fn dump(&self) -> String {
        let mut out = String::new();
        for path in self.query_paths() {
            if let Some(value) = self.query(path) {
                out.push_str(path);
                out.push('=');
                out.push_str(&value.to_string());
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_render_as_hex() {
        assert_eq!(Value::U8(0x84).to_string(), "$84");
        assert_eq!(Value::U16(0xFFFC).to_string(), "$FFFC");
        assert_eq!(Value::U64(3).to_string(), "3");
        assert_eq!(Value::from(true).to_string(), "true");
    }
}
