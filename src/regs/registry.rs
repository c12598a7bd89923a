//! Aggregation point for the register catalog: physical-address and symbolic
//! resolution across all blocks, plus the setup-time field attachment pass.
//!
//! The registry is an explicitly constructed value (see
//! [`zynq7000::device_registry`](super::zynq7000::device_registry)) passed by
//! reference to every consumer. It is mutated only by [`insert`] before any
//! write list is built, and shared immutably from then on.
//!
//! [`insert`]: DeviceRegistry::insert

use std::fmt;

use ahash::AHashMap;

use super::block::{RegisterBlock, RegisterDescriptor, key};
use super::error::{LookupError, LookupResult};

/// A resolved `(block, entry, field)` reference: the absolute register
/// address for the requested instance and the field's bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef {
    pub address: u32,
    pub mask: u32,
}

/// The whole device's register space.
///
/// Invariant: block address ranges are disjoint, so any physical address
/// belongs to at most one block.
pub struct DeviceRegistry {
    blocks: Vec<RegisterBlock>,
    by_name: AHashMap<String, usize>,
}

impl DeviceRegistry {
    pub fn new(blocks: Vec<RegisterBlock>) -> Self {
        let mut by_name = AHashMap::with_capacity(blocks.len());
        for (idx, block) in blocks.iter().enumerate() {
            by_name.entry(key(block.name())).or_insert(idx);
        }
        Self { blocks, by_name }
    }

    pub fn blocks(&self) -> &[RegisterBlock] {
        &self.blocks
    }

    /// Case-insensitive block lookup, without instance-suffix handling.
    pub fn block(&self, name: &str) -> Option<&RegisterBlock> {
        self.by_name.get(&key(name)).map(|&idx| &self.blocks[idx])
    }

    /// Resolves a physical address to the descriptor that owns it, if some
    /// block decodes the page and the offset lands exactly on a register.
    pub fn resolve_by_address(&self, addr: u32) -> Option<&RegisterDescriptor> {
        self.blocks
            .iter()
            .find(|block| block.belongs_to(addr))?
            .resolve_by_address(addr)
    }

    /// Attaches a field discovered in vendor init source to the descriptor
    /// that owns `addr`. Unresolved addresses are reported, not fatal; the
    /// caller counts them and moves on.
    pub fn insert(&mut self, addr: u32, field: &str, mask: u32) -> LookupResult<()> {
        let block = self
            .blocks
            .iter_mut()
            .find(|block| block.belongs_to(addr))
            .ok_or(LookupError::UnmappedAddress { address: addr })?;
        match block.resolve_by_address_mut(addr) {
            Some(reg) => {
                reg.insert_field(field, mask);
                Ok(())
            }
            None => Err(LookupError::NoEntryAtAddress {
                block: block.name().to_owned(),
                address: addr,
            }),
        }
    }

    /// Resolves a symbolic `(block, entry, field)` triple to the field's
    /// absolute address and mask.
    ///
    /// The block name may carry one trailing instance digit (`"uart1"`); no
    /// digit selects instance 0. A field that was never attached is
    /// [`LookupError::UnknownField`], distinct from a field attached with a
    /// zero mask.
    pub fn find(&self, block: &str, entry: &str, field: &str) -> LookupResult<FieldRef> {
        let (block, reg, address) = self.resolve(block, entry)?;
        let mask = reg
            .field_mask(field)
            .ok_or_else(|| LookupError::UnknownField {
                block: block.name().to_owned(),
                entry: reg.name().to_owned(),
                field: field.to_owned(),
            })?;
        Ok(FieldRef { address, mask })
    }

    /// Entry address without a field lookup; full-register writes use this.
    pub fn resolve_entry(&self, block: &str, entry: &str) -> LookupResult<u32> {
        let (_, _, address) = self.resolve(block, entry)?;
        Ok(address)
    }

    fn resolve(
        &self,
        block_ref: &str,
        entry: &str,
    ) -> LookupResult<(&RegisterBlock, &RegisterDescriptor, u32)> {
        let (name, instance) = split_instance(block_ref);
        let block = self.block(name).ok_or_else(|| LookupError::UnknownBlock {
            block: block_ref.to_owned(),
        })?;
        let base = block
            .base(instance)
            .ok_or_else(|| LookupError::InstanceOutOfRange {
                block: block.name().to_owned(),
                instance,
                count: block.instances(),
            })?;
        let reg = block
            .resolve_by_name(entry)
            .ok_or_else(|| LookupError::UnknownEntry {
                block: block.name().to_owned(),
                entry: entry.to_owned(),
            })?;
        Ok((block, reg, base + reg.offset()))
    }
}

impl fmt::Display for DeviceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            write!(f, "{block}")?;
        }
        Ok(())
    }
}

/// Splits a trailing instance digit off a block reference (`"uart1"` into
/// `("uart", 1)`). No suffix selects instance 0.
fn split_instance(block_ref: &str) -> (&str, usize) {
    match block_ref.as_bytes().last() {
        Some(&last) if last.is_ascii_digit() => {
            (&block_ref[..block_ref.len() - 1], usize::from(last - b'0'))
        }
        _ => (block_ref, 0),
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use crate::regs::access::{AccessKind, ResetValue};

    use super::*;

    fn reg(name: &str, offset: u32) -> RegisterDescriptor {
        RegisterDescriptor::new(
            name,
            offset,
            32,
            AccessKind::ReadWrite,
            ResetValue::Value(0),
            "",
        )
    }

    fn sample_registry() -> DeviceRegistry {
        let mut ctrl = reg("CTRL", 0x0000_0000);
        ctrl.insert_field("EN", 0x0000_0001);
        let serial = RegisterBlock::new(
            "serial",
            0xFFFF_F000,
            smallvec![0xE000_0000, 0xE000_1000],
            vec![ctrl, reg("BAUD", 0x0000_0018)],
        );
        let sys = RegisterBlock::new(
            "sys",
            0xFFFF_F000,
            smallvec![0xF800_0000],
            vec![reg("UNLOCK", 0x0000_0008)],
        );
        DeviceRegistry::new(vec![serial, sys])
    }

    #[test]
    fn find_resolves_default_instance() {
        let registry = sample_registry();
        let field = registry.find("serial", "ctrl", "en").expect("resolves");
        assert_eq!(field.address, 0xE000_0000, "no suffix selects instance 0");
        assert_eq!(field.mask, 0x0000_0001);
    }

    #[test]
    fn find_honors_trailing_instance_digit() {
        let registry = sample_registry();
        let field = registry.find("serial1", "CTRL", "EN").expect("resolves");
        assert_eq!(
            field.address, 0xE000_1000,
            "trailing digit selects the second base"
        );
    }

    #[test]
    fn find_rejects_instance_beyond_base_count() {
        let registry = sample_registry();
        assert_eq!(
            registry.find("serial7", "CTRL", "EN"),
            Err(LookupError::InstanceOutOfRange {
                block: "serial".to_owned(),
                instance: 7,
                count: 2,
            })
        );
    }

    #[test]
    fn find_reports_each_unresolved_step() {
        let registry = sample_registry();
        assert!(matches!(
            registry.find("nope", "CTRL", "EN"),
            Err(LookupError::UnknownBlock { .. })
        ));
        assert!(matches!(
            registry.find("serial", "nope", "EN"),
            Err(LookupError::UnknownEntry { .. })
        ));
        assert!(matches!(
            registry.find("serial", "CTRL", "nope"),
            Err(LookupError::UnknownField { .. })
        ));
    }

    #[test]
    fn insert_attaches_field_for_later_find() {
        let mut registry = sample_registry();
        registry
            .insert(0xE000_1018, "BDIV", 0x0000_FFFF)
            .expect("address belongs to serial instance 1");
        // attachment is per descriptor, so both instances observe the field
        let field = registry.find("serial", "baud", "bdiv").expect("attached");
        assert_eq!(field, FieldRef {
            address: 0xE000_0018,
            mask: 0x0000_FFFF,
        });
    }

    #[test]
    fn insert_rejects_foreign_and_unaligned_addresses() {
        let mut registry = sample_registry();
        assert_eq!(
            registry.insert(0x1000_0000, "F", 1),
            Err(LookupError::UnmappedAddress {
                address: 0x1000_0000
            })
        );
        assert_eq!(
            registry.insert(0xE000_0004, "F", 1),
            Err(LookupError::NoEntryAtAddress {
                block: "serial".to_owned(),
                address: 0xE000_0004,
            }),
            "an in-page address between registers attaches nowhere"
        );
    }

    #[test]
    fn registry_address_resolution_spans_blocks() {
        let registry = sample_registry();
        assert_eq!(
            registry.resolve_by_address(0xF800_0008).expect("sys hit").name(),
            "UNLOCK"
        );
        assert!(registry.resolve_by_address(0xF800_000C).is_none());
    }
}
