//! Register-space metadata and init write-list compilation for the Zynq-7000
//! processing system.
//!
//! The PS register pages are modeled as an explicit [`regs::DeviceRegistry`]
//! value: catalog data lives in [`regs::zynq7000`], and field masks are
//! attached from vendor-generated init source by [`loader`]. Ordered lists of
//! symbolic register/field writes are then compiled by
//! [`writelist::WriteList`] into either of the two bring-up encodings, the
//! `ps7_init.c` `EMIT_*` array entries or XSDB/Tcl command scripts.
//!
//! ```
//! use ps7gen::regs::zynq7000;
//! use ps7gen::writelist::{EmitFormat, WriteFlags, WriteList};
//!
//! let mut registry = zynq7000::device_registry();
//! registry.insert(0xF800_0008, "UNLOCK_KEY", 0x0000_FFFF).unwrap();
//!
//! let mut unlock = WriteList::new();
//! unlock.add(&registry, "slcr", "slcr_unlock", "unlock_key", 0xDF0D, WriteFlags::empty());
//! let unlock = unlock.merge().unwrap();
//! assert_eq!(
//!     unlock.emit(EmitFormat::Tcl, false).unwrap(),
//!     "mask_write 0XF8000008 0x0000FFFF 0x0000DF0D\n"
//! );
//! ```

pub mod loader;
pub mod regs;
pub mod writelist;
