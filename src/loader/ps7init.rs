//! Scanner for vendor-generated `ps7_init_gpl.c` sources.
//!
//! The generator leaves a three-line comment idiom above every register
//! assignment it performs:
//!
//! ```text
//! // .. .. PLL_RES = 0x2
//! // .. .. ==> 0XF8000110[7:4] = 0x00000002U
//! // .. .. ==> MASK : 0x000000F0U    VAL : 0x00000020U
//! ```
//!
//! Each match yields an `(address, field, mask)` triple that is attached to
//! the registry. Scanning stops at the first older-silicon data section,
//! which repeats the idiom for registers the leading section already covers.

use std::fs;
use std::io;
use std::path::Path;

use crate::regs::DeviceRegistry;

/// First older-silicon data section; everything before it covers the current
/// revision exactly once.
const DATA_SECTION_MARKER: &str = "unsigned long ps7_pll_init_data_2_0";

/// Counters from one load pass. Nothing in the scan is fatal; rejected
/// triples are counted so callers can report coverage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Triples attached to a descriptor.
    pub attached: usize,
    /// Triples whose address no block or descriptor owns.
    pub unresolved: usize,
    /// Assignment lines whose neighbor lines don't follow the idiom.
    pub malformed: usize,
}

/// Reads `path` and attaches every discovered field to `registry`. Only I/O
/// failures propagate.
pub fn load_fields(
    path: impl AsRef<Path>,
    registry: &mut DeviceRegistry,
) -> io::Result<LoadStats> {
    let source = fs::read_to_string(path)?;
    Ok(scan_fields(&source, registry))
}

/// The same scan over in-memory source.
pub fn scan_fields(source: &str, registry: &mut DeviceRegistry) -> LoadStats {
    let mut stats = LoadStats::default();
    let lines: Vec<&str> = source
        .lines()
        .take_while(|line| !line.contains(DATA_SECTION_MARKER))
        .collect();
    for (idx, line) in lines.iter().enumerate() {
        let Some(address) = assignment_address(line) else {
            continue;
        };
        let field = idx.checked_sub(1).and_then(|prev| field_name(lines[prev]));
        let mask = lines.get(idx + 1).and_then(|next| mask_value(next));
        let (Some(field), Some(mask)) = (field, mask) else {
            stats.malformed += 1;
            continue;
        };
        match registry.insert(address, field, mask) {
            Ok(()) => stats.attached += 1,
            Err(_) => stats.unresolved += 1,
        }
    }
    stats
}

/// `// .. .. ==> 0XF8000110[7:4] = 0x00000002U` yields the register address.
/// The assigned value must parse too, or the line is not an assignment.
fn assignment_address(line: &str) -> Option<u32> {
    let rest = &line[line.rfind("==> ")? + 4..];
    let rest = rest.strip_prefix("0X")?;
    let bracket = rest.find('[')?;
    let address = u32::from_str_radix(&rest[..bracket], 16).ok()?;
    let value = rest[bracket..].split_once("] = 0x")?.1;
    let digits = value.split_once('U')?.0;
    u32::from_str_radix(digits, 16).ok()?;
    Some(address)
}

/// `// .. .. PLL_RES = 0x2` yields `PLL_RES`: the text after the last `".. "`
/// marker and before a `" = "` that introduces a numeric value.
fn field_name(line: &str) -> Option<&str> {
    let (head, value) = line.rsplit_once(" = ")?;
    if !value.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let name = &head[head.rfind(".. ")? + 3..];
    (!name.is_empty()).then_some(name)
}

/// `// .. .. ==> MASK : 0x000000F0U    VAL : 0x00000020U` yields the mask.
fn mask_value(line: &str) -> Option<u32> {
    let digits = line.split_once("==> MASK : 0x")?.1.split_once('U')?.0;
    u32::from_str_radix(digits, 16).ok()
}
