//! Catalog leaf: one register block (a page of same-purpose registers,
//! replicated once per hardware instance) and its register descriptors.
//!
//! Blocks are immutable after construction except for the setup-time field
//! attachment pass driven by the registry. Name and offset indices are built
//! once so lookups stay hashed byte comparisons.

use std::fmt;

use ahash::AHashMap;
use smallvec::SmallVec;

use super::access::{AccessKind, ResetValue};

/// Uppercases a symbolic name once; all catalog keys live in this form.
pub(crate) fn key(name: &str) -> String {
    name.to_ascii_uppercase()
}

/// One register inside a block: the TRM table row plus the field masks
/// attached from vendor init source.
#[derive(Debug, Clone)]
pub struct RegisterDescriptor {
    name: String,
    offset: u32,
    width: u8,
    access: AccessKind,
    reset: ResetValue,
    description: String,
    fields: AHashMap<String, u32>,
}

impl RegisterDescriptor {
    pub fn new(
        name: &str,
        offset: u32,
        width: u8,
        access: AccessKind,
        reset: ResetValue,
        description: &str,
    ) -> Self {
        Self {
            name: name.to_owned(),
            offset,
            width,
            access,
            reset,
            description: description.to_owned(),
            fields: AHashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Offset from the owning block's instance base.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn access(&self) -> AccessKind {
        self.access
    }

    pub fn reset(&self) -> ResetValue {
        self.reset
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Attaches (or overwrites) a named field mask.
    pub fn insert_field(&mut self, name: &str, mask: u32) {
        self.fields.insert(key(name), mask);
    }

    /// Case-insensitive field lookup. `None` means the field was never
    /// attached; a field that genuinely covers zero bits comes back as
    /// `Some(0)` and the caller decides what that means.
    pub fn field_mask(&self, name: &str) -> Option<u32> {
        self.fields.get(&key(name)).copied()
    }

    /// Attached fields under their normalized names, in no particular order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, u32)> {
        self.fields.iter().map(|(name, &mask)| (name.as_str(), mask))
    }
}

/// A named group of registers sharing one layout, present at one base
/// address per hardware instance. An address decodes into the block iff its
/// page bits (under `decode_mask`) equal one of the bases.
#[derive(Debug, Clone)]
pub struct RegisterBlock {
    name: String,
    decode_mask: u32,
    bases: SmallVec<[u32; 2]>,
    regs: Vec<RegisterDescriptor>,
    by_name: AHashMap<String, usize>,
    by_offset: AHashMap<u32, usize>,
}

impl RegisterBlock {
    /// Builds the block and its lookup indices. Register offsets must be
    /// unique within a block; on a duplicate the first descriptor wins.
    pub fn new(
        name: &str,
        decode_mask: u32,
        bases: SmallVec<[u32; 2]>,
        regs: Vec<RegisterDescriptor>,
    ) -> Self {
        let mut by_name = AHashMap::with_capacity(regs.len());
        let mut by_offset = AHashMap::with_capacity(regs.len());
        for (idx, reg) in regs.iter().enumerate() {
            by_name.entry(key(reg.name())).or_insert(idx);
            by_offset.entry(reg.offset()).or_insert(idx);
        }
        Self {
            name: name.to_owned(),
            decode_mask,
            bases,
            regs,
            by_name,
            by_offset,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn decode_mask(&self) -> u32 {
        self.decode_mask
    }

    /// Instance bases in hardware order.
    pub fn bases(&self) -> &[u32] {
        &self.bases
    }

    pub fn base(&self, instance: usize) -> Option<u32> {
        self.bases.get(instance).copied()
    }

    pub fn instances(&self) -> usize {
        self.bases.len()
    }

    pub fn registers(&self) -> &[RegisterDescriptor] {
        &self.regs
    }

    /// True iff the page bits of `addr` decode to one of the instance bases.
    pub fn belongs_to(&self, addr: u32) -> bool {
        self.bases.iter().any(|&base| addr & self.decode_mask == base)
    }

    /// Exact-address resolution: `addr` must equal `base + offset` for some
    /// instance and some descriptor. Partial or unaligned addresses do not
    /// resolve.
    pub fn resolve_by_address(&self, addr: u32) -> Option<&RegisterDescriptor> {
        let idx = self.index_by_address(addr)?;
        Some(&self.regs[idx])
    }

    pub(crate) fn resolve_by_address_mut(&mut self, addr: u32) -> Option<&mut RegisterDescriptor> {
        let idx = self.index_by_address(addr)?;
        Some(&mut self.regs[idx])
    }

    /// Case-insensitive exact-name lookup.
    pub fn resolve_by_name(&self, name: &str) -> Option<&RegisterDescriptor> {
        self.by_name.get(&key(name)).map(|&idx| &self.regs[idx])
    }

    fn index_by_address(&self, addr: u32) -> Option<usize> {
        self.bases.iter().find_map(|&base| {
            let offset = addr.checked_sub(base)?;
            self.by_offset.get(&offset).copied()
        })
    }
}

impl fmt::Display for RegisterBlock {
    /// Catalog dump: block header (one line per instance when replicated),
    /// then one offset line per register and one mask line per field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bases.as_slice() {
            [base] => writeln!(f, "{}: 0x{base:08X}", self.name)?,
            bases => {
                for (idx, base) in bases.iter().enumerate() {
                    writeln!(f, "{}{idx}: 0x{base:08X}", self.name)?;
                }
            }
        }
        for reg in &self.regs {
            writeln!(f, "\t{}, 0x{:08x}", reg.name(), reg.offset())?;
            // hashed storage has no stable order
            let mut fields: Vec<_> = reg.fields().collect();
            fields.sort_unstable_by(|a, b| a.0.cmp(b.0));
            for (field, mask) in fields {
                writeln!(f, "\t\t{field}, 0x{mask:08x}")?;
            }
        }
        Ok(())
    }
}
