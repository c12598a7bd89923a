//! A single compiled write operation and its symbolic provenance.

use bitflags::bitflags;
use smallvec::SmallVec;

use super::error::{ListError, ListResult};

bitflags! {
    /// Modifiers accepted by [`WriteList::add`](super::WriteList::add).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WriteFlags: u8 {
        /// Wait until the masked bits match the value instead of writing.
        const POLL = 1 << 0;
        /// Target the whole register: the mask is forced to all ones and the
        /// field-mask lookup is bypassed.
        const FULL_REG = 1 << 1;
    }
}

/// Symbolic origin of one contribution to a write op, kept for the comment
/// lines in emitted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub block: String,
    pub entry: String,
    /// Field name as given by the caller, or the literal `"fullreg"` for
    /// whole-register writes.
    pub field: String,
    /// Caller-supplied value, before any shifting.
    pub value: u32,
}

/// One compiled operation.
///
/// `data` is kept bit-0 relative: the field value has not been moved into
/// its mask slot; rendering applies the shift. Created by `add`, combined at
/// most once by `merge`, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOp {
    pub address: u32,
    pub mask: u32,
    pub data: u32,
    pub poll: bool,
    pub provenance: SmallVec<[Provenance; 1]>,
}

impl WriteOp {
    /// Bit position of the mask's lowest set bit. An empty mask has no field
    /// slot; that is a precondition violation, not a lookup miss.
    pub(crate) fn shift(&self) -> ListResult<u32> {
        if self.mask == 0 {
            return Err(ListError::ZeroMask {
                address: self.address,
            });
        }
        Ok(self.mask.trailing_zeros())
    }
}
