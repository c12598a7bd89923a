//! Whole-catalog invariants and the end-to-end compile pipeline against the
//! real Zynq-7000 table.

use ps7gen::loader;
use ps7gen::regs::zynq7000;
use ps7gen::writelist::{EmitFormat, WriteFlags, WriteList};

#[test]
fn every_descriptor_resolves_through_every_instance_base() {
    let registry = zynq7000::device_registry();
    for block in registry.blocks() {
        for &base in block.bases() {
            for reg in block.registers() {
                let addr = base + reg.offset();
                let hit = registry
                    .resolve_by_address(addr)
                    .unwrap_or_else(|| panic!("0x{addr:08X} should resolve in '{}'", block.name()));
                assert_eq!(
                    hit.name(),
                    reg.name(),
                    "0x{addr:08X} resolved to the wrong descriptor in '{}'",
                    block.name()
                );
            }
        }
    }
}

#[test]
fn catalog_pages_are_disjoint() {
    let registry = zynq7000::device_registry();
    for block in registry.blocks() {
        for &base in block.bases() {
            let owners: Vec<&str> = registry
                .blocks()
                .iter()
                .filter(|other| other.belongs_to(base))
                .map(|other| other.name())
                .collect();
            assert_eq!(
                owners,
                [block.name()],
                "page 0x{base:08X} must decode into exactly one block"
            );
        }
    }
}

#[test]
fn replicated_peripherals_resolve_per_instance() {
    let registry = zynq7000::device_registry();
    let uart0 = registry
        .resolve_entry("uart", "XUARTPS_CR_OFFSET")
        .expect("default instance");
    let uart1 = registry
        .resolve_entry("uart1", "XUARTPS_CR_OFFSET")
        .expect("second instance");
    assert_eq!(uart0, 0xE000_0000);
    assert_eq!(uart1, 0xE000_1000);
    assert!(
        registry.resolve_entry("uart2", "XUARTPS_CR_OFFSET").is_err(),
        "the SoC has two uarts"
    );
}

#[test]
fn compile_pipeline_renders_both_encodings() {
    let mut registry = zynq7000::device_registry();
    let fragment = "\
    // .. UNLOCK_KEY = 0xDF0D\n\
    // .. ==> 0XF8000008[15:0] = 0x0000DF0DU\n\
    // .. ==> MASK : 0x0000FFFFU    VAL : 0x0000DF0DU\n\
    // .. PLL_FDIV = 0x28\n\
    // .. ==> 0XF8000110[18:12] = 0x00000028U\n\
    // .. ==> MASK : 0x0007F000U    VAL : 0x00028000U\n\
    // .. PLL_CP = 0x2\n\
    // .. ==> 0XF8000110[11:8] = 0x00000002U\n\
    // .. ==> MASK : 0x00000F00U    VAL : 0x00000200U\n\
    // .. PLL_STATUS_ARM_PLL_LOCK = 1\n\
    // .. ==> 0XF800010C[0:0] = 0x00000001U\n\
    // .. ==> MASK : 0x00000001U    VAL : 0x00000001U\n";
    let stats = loader::scan_fields(fragment, &mut registry);
    assert_eq!(stats.attached, 4, "all four fragment triples attach");

    let mut list = WriteList::new();
    assert!(list.add(
        &registry,
        "slcr",
        "slcr_unlock",
        "unlock_key",
        0xDF0D,
        WriteFlags::empty(),
    ));
    assert!(list.add(
        &registry,
        "slcr",
        "arm_pll_cfg",
        "pll_fdiv",
        0x28,
        WriteFlags::empty(),
    ));
    assert!(list.add(
        &registry,
        "slcr",
        "arm_pll_cfg",
        "pll_cp",
        0x2,
        WriteFlags::empty(),
    ));
    assert!(list.add(
        &registry,
        "slcr",
        "pll_status",
        "pll_status_arm_pll_lock",
        1,
        WriteFlags::POLL,
    ));
    assert!(list.add(
        &registry,
        "uart1",
        "XUARTPS_CR_OFFSET",
        "",
        0x17,
        WriteFlags::FULL_REG,
    ));
    assert!(
        !list.add(&registry, "slcr", "arm_pll_cfg", "no_such_field", 1, WriteFlags::empty()),
        "an unresolved reference reports failure and emits nothing"
    );

    let list = list.merge().expect("no empty masks in the fragment");
    assert_eq!(list.len(), 4, "the two pll_cfg fields coalesce");
    assert_eq!(list.diagnostics().len(), 1);

    assert_eq!(
        list.emit(EmitFormat::C, true).expect("render"),
        "// slcr slcr_unlock unlock_key: 0xdf0d\n\
         EMIT_MASKWRITE(0XF8000008, 0x0000FFFFU, 0x0000DF0DU),\n\
         // slcr arm_pll_cfg pll_fdiv: 0x28\n\
         // slcr arm_pll_cfg pll_cp: 0x2\n\
         EMIT_MASKWRITE(0XF8000110, 0x0007FF00U, 0x00028200U),\n\
         // slcr pll_status pll_status_arm_pll_lock: 0x1\n\
         EMIT_MASKPOLL(0XF800010C, 0x00000001U),\n\
         // uart1 XUARTPS_CR_OFFSET fullreg: 0x17\n\
         EMIT_WRITE(0XE0001000, 0x00000017U),\n"
    );
    assert_eq!(
        list.emit(EmitFormat::Tcl, false).expect("render"),
        "mask_write 0XF8000008 0x0000FFFF 0x0000DF0D\n\
         mask_write 0XF8000110 0x0007FF00 0x00028200\n\
         mask_poll 0XF800010C 0x00000001\n\
         mwr -force 0XE0001000 0x00000017\n"
    );
}

#[test]
fn catalog_dump_lists_blocks_in_registry_order() {
    let registry = zynq7000::device_registry();
    let dump = registry.to_string();
    assert!(dump.starts_with("slcr: 0xF8000000\n"));
    assert!(dump.contains("uart0: 0xE0000000\nuart1: 0xE0001000\n"));
    assert!(dump.contains("sdio0: 0xE0100000\nsdio1: 0xE0101000\n"));
    assert!(dump.contains("\tARM_PLL_CTRL, 0x00000100\n"));
}
