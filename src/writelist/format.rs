//! The two output encodings: C `EMIT_*` array entries and XSDB/Tcl commands.
//!
//! Line layouts are byte-compatible with vendor-generated init files:
//! addresses carry a `0X` prefix, masks and data a `0x` prefix (plus a `U`
//! suffix in the C form), all as eight uppercase hex digits. Comment values
//! render as minimal-width lowercase hex.

use super::op::Provenance;

/// Output encoding selector for [`WriteList::emit`](super::WriteList::emit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitFormat {
    /// `EMIT_WRITE` / `EMIT_MASKWRITE` / `EMIT_MASKPOLL` entries for a
    /// `ps7_init.c` style instruction array.
    C,
    /// `mwr -force` / `mask_write` / `mask_poll` lines for an XSDB/Tcl init
    /// script.
    Tcl,
}

impl EmitFormat {
    pub(crate) fn comment(self, p: &Provenance) -> String {
        match self {
            EmitFormat::C => {
                format!("// {} {} {}: {:#x}\n", p.block, p.entry, p.field, p.value)
            }
            EmitFormat::Tcl => {
                format!("puts \"{} {} {}: {:#x}\"\n", p.block, p.entry, p.field, p.value)
            }
        }
    }

    /// Unconditional 32-bit write of `data` to `address`.
    pub(crate) fn full_write(self, address: u32, data: u32) -> String {
        match self {
            EmitFormat::C => format!("EMIT_WRITE(0X{address:08X}, 0x{data:08X}U),\n"),
            EmitFormat::Tcl => format!("mwr -force 0X{address:08X} 0x{data:08X}\n"),
        }
    }

    /// Read-modify-write limited to the bits set in `mask`.
    pub(crate) fn masked_write(self, address: u32, mask: u32, data: u32) -> String {
        match self {
            EmitFormat::C => {
                format!("EMIT_MASKWRITE(0X{address:08X}, 0x{mask:08X}U, 0x{data:08X}U),\n")
            }
            EmitFormat::Tcl => {
                format!("mask_write 0X{address:08X} 0x{mask:08X} 0x{data:08X}\n")
            }
        }
    }

    /// Wait until the bits under `mask` match.
    pub(crate) fn poll(self, address: u32, mask: u32) -> String {
        match self {
            EmitFormat::C => format!("EMIT_MASKPOLL(0X{address:08X}, 0x{mask:08X}U),\n"),
            EmitFormat::Tcl => format!("mask_poll 0X{address:08X} 0x{mask:08X}\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_lines_match_vendor_layout() {
        assert_eq!(
            EmitFormat::C.full_write(0xE000_0000, 0x0000_0017),
            "EMIT_WRITE(0XE0000000, 0x00000017U),\n"
        );
        assert_eq!(
            EmitFormat::C.masked_write(0xF800_0008, 0x0000_FFFF, 0x0000_DF0D),
            "EMIT_MASKWRITE(0XF8000008, 0x0000FFFFU, 0x0000DF0DU),\n"
        );
        assert_eq!(
            EmitFormat::C.poll(0xF800_010C, 0x0000_0001),
            "EMIT_MASKPOLL(0XF800010C, 0x00000001U),\n"
        );
    }

    #[test]
    fn tcl_lines_match_vendor_layout() {
        assert_eq!(
            EmitFormat::Tcl.full_write(0xE000_0000, 0x0000_0017),
            "mwr -force 0XE0000000 0x00000017\n"
        );
        assert_eq!(
            EmitFormat::Tcl.masked_write(0xF800_0008, 0x0000_FFFF, 0x0000_DF0D),
            "mask_write 0XF8000008 0x0000FFFF 0x0000DF0D\n"
        );
        assert_eq!(
            EmitFormat::Tcl.poll(0xF800_010C, 0x0000_0001),
            "mask_poll 0XF800010C 0x00000001\n"
        );
    }

    #[test]
    fn comment_values_render_minimal_lowercase_hex() {
        let p = Provenance {
            block: "slcr".to_owned(),
            entry: "slcr_unlock".to_owned(),
            field: "unlock_key".to_owned(),
            value: 0xDF0D,
        };
        assert_eq!(
            EmitFormat::C.comment(&p),
            "// slcr slcr_unlock unlock_key: 0xdf0d\n"
        );
        assert_eq!(
            EmitFormat::Tcl.comment(&p),
            "puts \"slcr slcr_unlock unlock_key: 0xdf0d\"\n"
        );
    }
}
