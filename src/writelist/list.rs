//! Ordered write-list construction, adjacent-op coalescing, and rendering.

use smallvec::smallvec;

use crate::regs::{DeviceRegistry, LookupError};

use super::error::ListResult;
use super::format::EmitFormat;
use super::op::{Provenance, WriteFlags, WriteOp};

/// An ordered list of register writes compiled from symbolic references.
///
/// Build with [`add`](Self::add), optionally coalesce adjacent same-address
/// writes with [`merge`](Self::merge), then render with [`emit`](Self::emit).
/// Caller-determined order is preserved throughout.
#[derive(Debug, Default)]
pub struct WriteList {
    ops: Vec<WriteOp>,
    diagnostics: Vec<LookupError>,
}

impl WriteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one write (or poll) resolved from a symbolic reference.
    ///
    /// `value` is taken bit-0 relative; it is moved into the field's mask
    /// slot at render time. Returns `false` and appends nothing when the
    /// reference does not resolve; the failure is kept in
    /// [`diagnostics`](Self::diagnostics) and compilation continues.
    pub fn add(
        &mut self,
        registry: &DeviceRegistry,
        block: &str,
        entry: &str,
        field: &str,
        value: u32,
        flags: WriteFlags,
    ) -> bool {
        let resolved = if flags.contains(WriteFlags::FULL_REG) {
            registry
                .resolve_entry(block, entry)
                .map(|address| (address, u32::MAX, "fullreg"))
        } else {
            registry
                .find(block, entry, field)
                .map(|field_ref| (field_ref.address, field_ref.mask, field))
        };
        match resolved {
            Ok((address, mask, field)) => {
                self.ops.push(WriteOp {
                    address,
                    mask,
                    data: value,
                    poll: flags.contains(WriteFlags::POLL),
                    provenance: smallvec![Provenance {
                        block: block.to_owned(),
                        entry: entry.to_owned(),
                        field: field.to_owned(),
                        value,
                    }],
                });
                true
            }
            Err(err) => {
                self.diagnostics.push(err);
                false
            }
        }
    }

    /// Coalesces runs of adjacent ops targeting the same address with the
    /// same poll flag, ORing masks and data and concatenating provenance in
    /// contribution order.
    ///
    /// Three phases, each producing a fresh sequence: field values are
    /// shifted into their mask slots, adjacent runs are folded, then values
    /// are shifted back relative to the (possibly widened) merged mask so the
    /// stored form stays bit-0 relative and [`emit`](Self::emit) behaves the
    /// same whether or not a merge ran. Ops separated by a write to a
    /// different address are never folded together, even when they share an
    /// address; the emitted stream keeps caller order.
    ///
    /// Consumes the list: the transform changes what each stored value means
    /// mid-flight, so it must run at most once over a given sequence. An
    /// empty mask on any op aborts with [`ListError::ZeroMask`].
    ///
    /// [`ListError::ZeroMask`]: super::ListError::ZeroMask
    pub fn merge(self) -> ListResult<Self> {
        let Self { ops, diagnostics } = self;

        let mut shifted = Vec::with_capacity(ops.len());
        for op in ops {
            let shift = op.shift()?;
            shifted.push(WriteOp {
                data: op.data << shift,
                ..op
            });
        }

        let mut folded: Vec<WriteOp> = Vec::with_capacity(shifted.len());
        for op in shifted {
            match folded.last_mut() {
                Some(prev) if prev.address == op.address && prev.poll == op.poll => {
                    prev.mask |= op.mask;
                    prev.data |= op.data;
                    prev.provenance.extend(op.provenance);
                }
                _ => folded.push(op),
            }
        }

        let mut ops = Vec::with_capacity(folded.len());
        for op in folded {
            let shift = op.shift()?;
            ops.push(WriteOp {
                data: op.data >> shift,
                ..op
            });
        }

        Ok(Self { ops, diagnostics })
    }

    /// Renders the list in the requested encoding. Pure: the list is left
    /// untouched and can be rendered again in the other encoding.
    ///
    /// Poll ops render as the wait-until-match instruction, all-ones masks as
    /// an unconditional write, everything else as a read-modify-write. With
    /// `comments` set, one comment line per provenance tuple precedes each
    /// instruction, in contribution order.
    pub fn emit(&self, format: EmitFormat, comments: bool) -> ListResult<String> {
        let mut out = String::new();
        for op in &self.ops {
            if comments {
                for p in &op.provenance {
                    out.push_str(&format.comment(p));
                }
            }
            let line = if op.poll {
                format.poll(op.address, op.mask)
            } else if op.mask == u32::MAX {
                format.full_write(op.address, op.data)
            } else {
                format.masked_write(op.address, op.mask, op.data << op.shift()?)
            };
            out.push_str(&line);
        }
        Ok(out)
    }

    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    /// Lookup failures recorded by [`add`](Self::add) calls that returned
    /// `false`, in call order.
    pub fn diagnostics(&self) -> &[LookupError] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use crate::regs::{AccessKind, RegisterBlock, RegisterDescriptor, ResetValue};
    use crate::writelist::ListError;

    use super::*;

    /// One block at 0x40000000 with CFG (three fields, one zero-width) at
    /// offset 0 and STAT at offset 4.
    fn sample_registry() -> DeviceRegistry {
        let mut cfg = RegisterDescriptor::new(
            "CFG",
            0x0000_0000,
            32,
            AccessKind::ReadWrite,
            ResetValue::Value(0),
            "",
        );
        cfg.insert_field("LO", 0x0000_00FF);
        cfg.insert_field("HI", 0x0000_FF00);
        cfg.insert_field("GONE", 0x0000_0000);
        let mut stat = RegisterDescriptor::new(
            "STAT",
            0x0000_0004,
            32,
            AccessKind::ReadOnly,
            ResetValue::Value(0),
            "",
        );
        stat.insert_field("READY", 0x0000_0001);
        let block = RegisterBlock::new(
            "ctl",
            0xFFFF_F000,
            smallvec![0x4000_0000],
            vec![cfg, stat],
        );
        DeviceRegistry::new(vec![block])
    }

    #[test]
    fn merge_folds_adjacent_fields_of_one_register() {
        let registry = sample_registry();
        let mut list = WriteList::new();
        assert!(list.add(&registry, "ctl", "CFG", "LO", 0x12, WriteFlags::empty()));
        assert!(list.add(&registry, "ctl", "CFG", "HI", 0x34, WriteFlags::empty()));
        let list = list.merge().expect("no empty masks");

        assert_eq!(list.len(), 1, "adjacent same-address writes fold into one");
        let op = &list.ops()[0];
        assert_eq!(op.mask, 0x0000_FFFF, "masks OR together");
        assert_eq!(
            op.data,
            0x12 | (0x34 << 8),
            "merged data holds each field at its slot, relative to the widened mask"
        );
        let fields: Vec<&str> = op.provenance.iter().map(|p| p.field.as_str()).collect();
        assert_eq!(fields, ["LO", "HI"], "provenance concatenates in call order");
    }

    #[test]
    fn merge_never_reaches_across_other_addresses() {
        let registry = sample_registry();
        let mut list = WriteList::new();
        list.add(&registry, "ctl", "CFG", "LO", 0x1, WriteFlags::empty());
        list.add(&registry, "ctl", "STAT", "READY", 0x1, WriteFlags::empty());
        list.add(&registry, "ctl", "CFG", "HI", 0x2, WriteFlags::empty());
        let list = list.merge().expect("no empty masks");
        assert_eq!(
            list.len(),
            3,
            "same-address ops separated by another address stay separate"
        );
    }

    #[test]
    fn merge_keeps_polls_apart_from_writes() {
        let registry = sample_registry();
        let mut list = WriteList::new();
        list.add(&registry, "ctl", "STAT", "READY", 0x1, WriteFlags::empty());
        list.add(&registry, "ctl", "STAT", "READY", 0x1, WriteFlags::POLL);
        let list = list.merge().expect("no empty masks");
        assert_eq!(list.len(), 2, "a poll never folds into a write");
        assert!(!list.ops()[0].poll);
        assert!(list.ops()[1].poll);
    }

    #[test]
    fn merge_rejects_zero_width_masks() {
        let registry = sample_registry();
        let mut list = WriteList::new();
        assert!(
            list.add(&registry, "ctl", "CFG", "GONE", 0x1, WriteFlags::empty()),
            "a zero-width field still resolves"
        );
        assert_eq!(
            list.merge().unwrap_err(),
            ListError::ZeroMask {
                address: 0x4000_0000
            },
            "a zero mask reaching the shift is a precondition violation"
        );
    }

    #[test]
    fn merge_of_empty_list_is_empty() {
        let list = WriteList::new().merge().expect("nothing to shift");
        assert!(list.is_empty());
    }

    #[test]
    fn failed_add_appends_nothing_and_records_the_failure() {
        let registry = sample_registry();
        let mut list = WriteList::new();
        assert!(!list.add(&registry, "ctl", "CFG", "MISSING", 0x1, WriteFlags::empty()));
        assert!(list.is_empty(), "a failed add must not grow the list");
        assert_eq!(
            list.diagnostics(),
            [LookupError::UnknownField {
                block: "ctl".to_owned(),
                entry: "CFG".to_owned(),
                field: "MISSING".to_owned(),
            }]
        );
    }

    #[test]
    fn full_reg_bypasses_field_lookup_and_forces_all_ones() {
        let registry = sample_registry();
        let mut list = WriteList::new();
        assert!(
            list.add(&registry, "ctl", "CFG", "MISSING", 0x17, WriteFlags::FULL_REG),
            "full-register writes resolve without consulting the field table"
        );
        let op = &list.ops()[0];
        assert_eq!(op.mask, u32::MAX);
        assert_eq!(op.provenance[0].field, "fullreg");
        assert_eq!(
            list.emit(EmitFormat::C, false).expect("render"),
            "EMIT_WRITE(0X40000000, 0x00000017U),\n",
            "an all-ones mask renders as an unconditional write"
        );
    }

    #[test]
    fn emit_shifts_values_into_their_slots() {
        let mut registry = sample_registry();
        registry
            .insert(0x4000_0000, "MID", 0x00FF_0000)
            .expect("attach");
        let mut list = WriteList::new();
        list.add(&registry, "ctl", "CFG", "MID", 0x5, WriteFlags::empty());
        assert_eq!(
            list.emit(EmitFormat::C, false).expect("render"),
            "EMIT_MASKWRITE(0X40000000, 0x00FF0000U, 0x00050000U),\n"
        );
        assert_eq!(
            list.emit(EmitFormat::Tcl, false).expect("render"),
            "mask_write 0X40000000 0x00FF0000 0x00050000\n"
        );
    }

    #[test]
    fn poll_renders_the_poll_variant_in_both_encodings() {
        let registry = sample_registry();
        let mut list = WriteList::new();
        list.add(&registry, "ctl", "STAT", "READY", 0x1, WriteFlags::POLL);
        assert_eq!(
            list.emit(EmitFormat::C, false).expect("render"),
            "EMIT_MASKPOLL(0X40000004, 0x00000001U),\n"
        );
        assert_eq!(
            list.emit(EmitFormat::Tcl, false).expect("render"),
            "mask_poll 0X40000004 0x00000001\n"
        );
    }

    #[test]
    fn emit_is_unchanged_by_a_merge_that_folds_nothing() {
        let registry = sample_registry();
        let mut list = WriteList::new();
        list.add(&registry, "ctl", "CFG", "HI", 0x34, WriteFlags::empty());
        list.add(&registry, "ctl", "STAT", "READY", 0x1, WriteFlags::empty());
        let before = list.emit(EmitFormat::C, true).expect("render");
        let list = list.merge().expect("no empty masks");
        assert_eq!(
            list.emit(EmitFormat::C, true).expect("render"),
            before,
            "the unshift phase restores the bit-0 relative form"
        );
    }

    #[test]
    fn emit_comments_follow_contribution_order() {
        let registry = sample_registry();
        let mut list = WriteList::new();
        list.add(&registry, "ctl", "CFG", "LO", 0x12, WriteFlags::empty());
        list.add(&registry, "ctl", "CFG", "HI", 0x34, WriteFlags::empty());
        let list = list.merge().expect("no empty masks");
        assert_eq!(
            list.emit(EmitFormat::Tcl, true).expect("render"),
            "puts \"ctl CFG LO: 0x12\"\n\
             puts \"ctl CFG HI: 0x34\"\n\
             mask_write 0X40000000 0x0000FFFF 0x00003412\n"
        );
    }
}
