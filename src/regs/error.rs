use std::fmt;

pub type LookupResult<T> = Result<T, LookupError>;

/// Non-fatal resolution failures from the catalog and registry. Callers are
/// expected to record the diagnostic and keep going; nothing here aborts a
/// compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    UnknownBlock {
        block: String,
    },
    UnknownEntry {
        block: String,
        entry: String,
    },
    UnknownField {
        block: String,
        entry: String,
        field: String,
    },
    InstanceOutOfRange {
        block: String,
        instance: usize,
        count: usize,
    },
    UnmappedAddress {
        address: u32,
    },
    NoEntryAtAddress {
        block: String,
        address: u32,
    },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::UnknownBlock { block } => {
                write!(f, "register block '{block}' not found")
            }
            LookupError::UnknownEntry { block, entry } => {
                write!(f, "entry '{entry}' not found in block '{block}'")
            }
            LookupError::UnknownField {
                block,
                entry,
                field,
            } => {
                write!(f, "field '{field}' not found on '{block}.{entry}'")
            }
            LookupError::InstanceOutOfRange {
                block,
                instance,
                count,
            } => {
                write!(
                    f,
                    "block '{block}' has {count} instance(s); index {instance} is out of range"
                )
            }
            LookupError::UnmappedAddress { address } => {
                write!(f, "address 0x{address:08X} doesn't belong to any register block")
            }
            LookupError::NoEntryAtAddress { block, address } => {
                write!(f, "address 0x{address:08X} is not a register of block '{block}'")
            }
        }
    }
}

impl std::error::Error for LookupError {}
