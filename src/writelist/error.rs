use std::fmt;

pub type ListResult<T> = Result<T, ListError>;

/// Fatal precondition violations inside the write-list transforms. These mean
/// corrupted catalog data or a caller bug rather than a recoverable lookup
/// miss, so the whole transform aborts instead of producing a wrong
/// instruction stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// A write op reached the bit-index computation with an empty mask.
    ZeroMask { address: u32 },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::ZeroMask { address } => write!(
                f,
                "write to 0x{address:08X} carries an empty mask; no field shift can be derived"
            ),
        }
    }
}

impl std::error::Error for ListError {}
