//! Access kinds and reset values as documented in the TRM register tables.

use std::fmt;

/// How a register responds to reads and writes, per its TRM table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    ReadWrite,
    WriteOnly,
    ReadOnly,
    /// Per-field behavior differs within the register.
    Mixed,
    ClearOnWrite,
    WriteToClear,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AccessKind::ReadWrite => "rw",
            AccessKind::WriteOnly => "wo",
            AccessKind::ReadOnly => "ro",
            AccessKind::Mixed => "mixed",
            AccessKind::ClearOnWrite => "clronwr",
            AccessKind::WriteToClear => "wtc",
        };
        f.write_str(text)
    }
}

/// Reset value column. A handful of registers come up with strapping-pin or
/// silicon-dependent contents the TRM lists as `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetValue {
    Value(u32),
    Undefined,
}

impl fmt::Display for ResetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResetValue::Value(value) => write!(f, "0x{value:08X}"),
            ResetValue::Undefined => f.write_str("x"),
        }
    }
}
