//! Zynq-7000 PS register catalog, transcribed from UG585 (the TRM register
//! reference, page 1632 for the per-register tables and page 832 for the base
//! address list). Peripherals that exist twice on the SoC (uart, sdio) carry
//! both instance bases; instance selection is handled by the registry.
//!
//! Pure configuration: nothing here beyond constructing the registry value.
//! Field masks are not part of the TRM transcription; they are attached later
//! from vendor-generated init source via [`DeviceRegistry::insert`].

use smallvec::smallvec;

use super::access::{AccessKind, ResetValue};
use super::block::{RegisterBlock, RegisterDescriptor};
use super::registry::DeviceRegistry;

/// Decode mask shared by every 4 KiB PS register page.
pub const PAGE_DECODE_MASK: u32 = 0xFFFF_F000;

/// Builds the full PS catalog. Callers own the returned registry and pass it
/// by reference; attach fields with [`DeviceRegistry::insert`] before building
/// write lists.
pub fn device_registry() -> DeviceRegistry {
    DeviceRegistry::new(vec![slcr(), ddrc(), devcfg(), uart(), qspi(), sdio()])
}

fn reg(
    name: &str,
    offset: u32,
    width: u8,
    access: AccessKind,
    reset: ResetValue,
    description: &str,
) -> RegisterDescriptor {
    RegisterDescriptor::new(name, offset, width, access, reset, description)
}

fn slcr() -> RegisterBlock {
    use AccessKind::*;
    use ResetValue::{Undefined, Value};
    #[rustfmt::skip]
    let regs = vec![
        reg("SCL", 0x00000000, 32, ReadWrite, Value(0x00000000), "Secure Configuration Lock"),
        reg("SLCR_LOCK", 0x00000004, 32, WriteOnly, Value(0x00000000), "SLCR Write Protection Lock"),
        reg("SLCR_UNLOCK", 0x00000008, 32, WriteOnly, Value(0x00000000), "SLCR Write Protection Unlock"),
        reg("SLCR_LOCKSTA", 0x0000000C, 32, ReadOnly, Value(0x00000001), "SLCR Write Protection Status"),
        reg("ARM_PLL_CTRL", 0x00000100, 32, ReadWrite, Value(0x0001A008), "Arm PLL Control"),
        reg("DDR_PLL_CTRL", 0x00000104, 32, ReadWrite, Value(0x0001A008), "DDR PLL Control"),
        reg("IO_PLL_CTRL", 0x00000108, 32, ReadWrite, Value(0x0001A008), "IO PLL Control"),
        reg("PLL_STATUS", 0x0000010C, 32, ReadOnly, Value(0x0000003F), "PLL Status"),
        reg("ARM_PLL_CFG", 0x00000110, 32, ReadWrite, Value(0x00177EA0), "Arm PLL Configuration"),
        reg("DDR_PLL_CFG", 0x00000114, 32, ReadWrite, Value(0x00177EA0), "DDR PLL Configuration"),
        reg("IO_PLL_CFG", 0x00000118, 32, ReadWrite, Value(0x00177EA0), "IO PLL Configuration"),
        reg("ARM_CLK_CTRL", 0x00000120, 32, ReadWrite, Value(0x1F000400), "CPU Clock Control"),
        reg("DDR_CLK_CTRL", 0x00000124, 32, ReadWrite, Value(0x18400003), "DDR Clock Control"),
        reg("DCI_CLK_CTRL", 0x00000128, 32, ReadWrite, Value(0x01E03201), "DCI clock control"),
        reg("APER_CLK_CTRL", 0x0000012C, 32, ReadWrite, Value(0x01FFCCCD), "AMBA Peripheral Clock Control"),
        reg("USB0_CLK_CTRL", 0x00000130, 32, ReadWrite, Value(0x00101941), "USB 0 ULPI Clock Control"),
        reg("USB1_CLK_CTRL", 0x00000134, 32, ReadWrite, Value(0x00101941), "USB 1 ULPI Clock Control"),
        reg("GEM0_RCLK_CTRL", 0x00000138, 32, ReadWrite, Value(0x00000001), "GigE 0 Rx Clock and Rx Signals Select"),
        reg("GEM1_RCLK_CTRL", 0x0000013C, 32, ReadWrite, Value(0x00000001), "GigE 1 Rx Clock and Rx Signals Select"),
        reg("GEM0_CLK_CTRL", 0x00000140, 32, ReadWrite, Value(0x00003C01), "GigE 0 Ref Clock Control"),
        reg("GEM1_CLK_CTRL", 0x00000144, 32, ReadWrite, Value(0x00003C01), "GigE 1 Ref Clock Control"),
        reg("SMC_CLK_CTRL", 0x00000148, 32, ReadWrite, Value(0x00003C21), "SMC Ref Clock Control"),
        reg("LQSPI_CLK_CTRL", 0x0000014C, 32, ReadWrite, Value(0x00002821), "Quad SPI Ref Clock Control"),
        reg("SDIO_CLK_CTRL", 0x00000150, 32, ReadWrite, Value(0x00001E03), "SDIO Ref Clock Control"),
        reg("UART_CLK_CTRL", 0x00000154, 32, ReadWrite, Value(0x00003F03), "UART Ref Clock Control"),
        reg("SPI_CLK_CTRL", 0x00000158, 32, ReadWrite, Value(0x00003F03), "SPI Ref Clock Control"),
        reg("CAN_CLK_CTRL", 0x0000015C, 32, ReadWrite, Value(0x00501903), "CAN Ref Clock Control"),
        reg("CAN_MIOCLK_CTRL", 0x00000160, 32, ReadWrite, Value(0x00000000), "CAN MIO Clock Control"),
        reg("DBG_CLK_CTRL", 0x00000164, 32, ReadWrite, Value(0x00000F03), "SoC Debug Clock Control"),
        reg("PCAP_CLK_CTRL", 0x00000168, 32, ReadWrite, Value(0x00000F01), "PCAP Clock Control"),
        reg("TOPSW_CLK_CTRL", 0x0000016C, 32, ReadWrite, Value(0x00000000), "Central Interconnect Clock Control"),
        reg("FPGA0_CLK_CTRL", 0x00000170, 32, ReadWrite, Value(0x00101800), "PL Clock 0 Output control"),
        reg("FPGA0_THR_CTRL", 0x00000174, 32, ReadWrite, Value(0x00000000), "PL Clock 0 Throttle control"),
        reg("FPGA0_THR_CNT", 0x00000178, 32, ReadWrite, Value(0x00000000), "PL Clock 0 Throttle Count control"),
        reg("FPGA0_THR_STA", 0x0000017C, 32, ReadOnly, Value(0x00010000), "PL Clock 0 Throttle Status read"),
        reg("FPGA1_CLK_CTRL", 0x00000180, 32, ReadWrite, Value(0x00101800), "PL Clock 1 Output control"),
        reg("FPGA1_THR_CTRL", 0x00000184, 32, ReadWrite, Value(0x00000000), "PL Clock 1 Throttle control"),
        reg("FPGA1_THR_CNT", 0x00000188, 32, ReadWrite, Value(0x00000000), "PL Clock 1 Throttle Count"),
        reg("FPGA1_THR_STA", 0x0000018C, 32, ReadOnly, Value(0x00010000), "PL Clock 1 Throttle Status control"),
        reg("FPGA2_CLK_CTRL", 0x00000190, 32, ReadWrite, Value(0x00101800), "PL Clock 2 output control"),
        reg("FPGA2_THR_CTRL", 0x00000194, 32, ReadWrite, Value(0x00000000), "PL Clock 2 Throttle Control"),
        reg("FPGA2_THR_CNT", 0x00000198, 32, ReadWrite, Value(0x00000000), "PL Clock 2 Throttle Count"),
        reg("FPGA2_THR_STA", 0x0000019C, 32, ReadOnly, Value(0x00010000), "PL Clock 2 Throttle Status"),
        reg("FPGA3_CLK_CTRL", 0x000001A0, 32, ReadWrite, Value(0x00101800), "PL Clock 3 output control"),
        reg("FPGA3_THR_CTRL", 0x000001A4, 32, ReadWrite, Value(0x00000000), "PL Clock 3 Throttle Control"),
        reg("FPGA3_THR_CNT", 0x000001A8, 32, ReadWrite, Value(0x00000000), "PL Clock 3 Throttle Count"),
        reg("FPGA3_THR_STA", 0x000001AC, 32, ReadOnly, Value(0x00010000), "PL Clock 3 Throttle Status"),
        reg("CLK_621_TRUE", 0x000001C4, 32, ReadWrite, Value(0x00000001), "CPU Clock Ratio Mode select"),
        reg("PSS_RST_CTRL", 0x00000200, 32, ReadWrite, Value(0x00000000), "PS Software Reset Control"),
        reg("DDR_RST_CTRL", 0x00000204, 32, ReadWrite, Value(0x00000000), "DDR Software Reset Control"),
        reg("TOPSW_RST_CTRL", 0x00000208, 32, ReadWrite, Value(0x00000000), "Central Interconnect Reset Control"),
        reg("DMAC_RST_CTRL", 0x0000020C, 32, ReadWrite, Value(0x00000000), "DMAC Software Reset Control"),
        reg("USB_RST_CTRL", 0x00000210, 32, ReadWrite, Value(0x00000000), "USB Software Reset Control"),
        reg("GEM_RST_CTRL", 0x00000214, 32, ReadWrite, Value(0x00000000), "Gigabit Ethernet SW Reset Control"),
        reg("SDIO_RST_CTRL", 0x00000218, 32, ReadWrite, Value(0x00000000), "SDIO Software Reset Control"),
        reg("SPI_RST_CTRL", 0x0000021C, 32, ReadWrite, Value(0x00000000), "SPI Software Reset Control"),
        reg("CAN_RST_CTRL", 0x00000220, 32, ReadWrite, Value(0x00000000), "CAN Software Reset Control"),
        reg("I2C_RST_CTRL", 0x00000224, 32, ReadWrite, Value(0x00000000), "I2C Software Reset Control"),
        reg("UART_RST_CTRL", 0x00000228, 32, ReadWrite, Value(0x00000000), "UART Software Reset Control"),
        reg("GPIO_RST_CTRL", 0x0000022C, 32, ReadWrite, Value(0x00000000), "GPIO Software Reset Control"),
        reg("LQSPI_RST_CTRL", 0x00000230, 32, ReadWrite, Value(0x00000000), "Quad SPI Software Reset Control"),
        reg("SMC_RST_CTRL", 0x00000234, 32, ReadWrite, Value(0x00000000), "SMC Software Reset Control"),
        reg("OCM_RST_CTRL", 0x00000238, 32, ReadWrite, Value(0x00000000), "OCM Software Reset Control"),
        reg("FPGA_RST_CTRL", 0x00000240, 32, ReadWrite, Value(0x01F33F0F), "FPGA Software Reset Control"),
        reg("A9_CPU_RST_CTRL", 0x00000244, 32, ReadWrite, Value(0x00000000), "CPU Reset and Clock control"),
        reg("RS_AWDT_CTRL", 0x0000024C, 32, ReadWrite, Value(0x00000000), "Watchdog Timer Reset Control"),
        reg("REBOOT_STATUS", 0x00000258, 32, ReadWrite, Value(0x00400000), "Reboot Status, persistent"),
        reg("BOOT_MODE", 0x0000025C, 32, Mixed, Undefined, "Boot Mode Strapping Pins"),
        reg("APU_CTRL", 0x00000300, 32, ReadWrite, Value(0x00000000), "APU Control"),
        reg("WDT_CLK_SEL", 0x00000304, 32, ReadWrite, Value(0x00000000), "SWDT clock source select"),
        reg("TZ_DMA_NS", 0x00000440, 32, ReadWrite, Value(0x00000000), "DMAC TrustZone Config"),
        reg("TZ_DMA_IRQ_NS", 0x00000444, 32, ReadWrite, Value(0x00000000), "DMAC TrustZone Config for Interrupts"),
        reg("TZ_DMA_PERIPH_NS", 0x00000448, 32, ReadWrite, Value(0x00000000), "DMAC TrustZone Config for Peripherals"),
        reg("PSS_IDCODE", 0x00000530, 32, ReadOnly, Undefined, "PS IDCODE"),
        reg("DDR_URGENT", 0x00000600, 32, ReadWrite, Value(0x00000000), "DDR Urgent Control"),
        reg("DDR_CAL_START", 0x0000060C, 32, Mixed, Value(0x00000000), "DDR Calibration Start Triggers"),
        reg("DDR_REF_START", 0x00000614, 32, Mixed, Value(0x00000000), "DDR Refresh Start Triggers"),
        reg("DDR_CMD_STA", 0x00000618, 32, Mixed, Value(0x00000000), "DDR Command Store Status"),
        reg("DDR_URGENT_SEL", 0x0000061C, 32, ReadWrite, Value(0x00000000), "DDR Urgent Select"),
        reg("DDR_DFI_STATUS", 0x00000620, 32, Mixed, Value(0x00000000), "DDR DFI status"),
        reg("MIO_PIN_00", 0x00000700, 32, ReadWrite, Value(0x00001601), "MIO Pin 0 Control"),
        reg("MIO_PIN_01", 0x00000704, 32, ReadWrite, Value(0x00001601), "MIO Pin 1 Control"),
        reg("MIO_PIN_02", 0x00000708, 32, ReadWrite, Value(0x00000601), "MIO Pin 2 Control"),
        reg("MIO_PIN_03", 0x0000070C, 32, ReadWrite, Value(0x00000601), "MIO Pin 3 Control"),
        reg("MIO_PIN_04", 0x00000710, 32, ReadWrite, Value(0x00000601), "MIO Pin 4 Control"),
        reg("MIO_PIN_05", 0x00000714, 32, ReadWrite, Value(0x00000601), "MIO Pin 5 Control"),
        reg("MIO_PIN_06", 0x00000718, 32, ReadWrite, Value(0x00000601), "MIO Pin 6 Control"),
        reg("MIO_PIN_07", 0x0000071C, 32, ReadWrite, Value(0x00000601), "MIO Pin 7 Control"),
        reg("MIO_PIN_08", 0x00000720, 32, ReadWrite, Value(0x00000601), "MIO Pin 8 Control"),
        reg("MIO_PIN_09", 0x00000724, 32, ReadWrite, Value(0x00001601), "MIO Pin 9 Control"),
        reg("MIO_PIN_10", 0x00000728, 32, ReadWrite, Value(0x00001601), "MIO Pin 10 Control"),
        reg("MIO_PIN_11", 0x0000072C, 32, ReadWrite, Value(0x00001601), "MIO Pin 11 Control"),
        reg("MIO_PIN_12", 0x00000730, 32, ReadWrite, Value(0x00001601), "MIO Pin 12 Control"),
        reg("MIO_PIN_13", 0x00000734, 32, ReadWrite, Value(0x00001601), "MIO Pin 13 Control"),
        reg("MIO_PIN_14", 0x00000738, 32, ReadWrite, Value(0x00001601), "MIO Pin 14 Control"),
        reg("MIO_PIN_15", 0x0000073C, 32, ReadWrite, Value(0x00001601), "MIO Pin 15 Control"),
        reg("MIO_PIN_16", 0x00000740, 32, ReadWrite, Value(0x00001601), "MIO Pin 16 Control"),
        reg("MIO_PIN_17", 0x00000744, 32, ReadWrite, Value(0x00001601), "MIO Pin 17 Control"),
        reg("MIO_PIN_18", 0x00000748, 32, ReadWrite, Value(0x00001601), "MIO Pin 18 Control"),
        reg("MIO_PIN_19", 0x0000074C, 32, ReadWrite, Value(0x00001601), "MIO Pin 19 Control"),
        reg("MIO_PIN_20", 0x00000750, 32, ReadWrite, Value(0x00001601), "MIO Pin 20 Control"),
        reg("MIO_PIN_21", 0x00000754, 32, ReadWrite, Value(0x00001601), "MIO Pin 21 Control"),
        reg("MIO_PIN_22", 0x00000758, 32, ReadWrite, Value(0x00001601), "MIO Pin 22 Control"),
        reg("MIO_PIN_23", 0x0000075C, 32, ReadWrite, Value(0x00001601), "MIO Pin 23 Control"),
        reg("MIO_PIN_24", 0x00000760, 32, ReadWrite, Value(0x00001601), "MIO Pin 24 Control"),
        reg("MIO_PIN_25", 0x00000764, 32, ReadWrite, Value(0x00001601), "MIO Pin 25 Control"),
        reg("MIO_PIN_26", 0x00000768, 32, ReadWrite, Value(0x00001601), "MIO Pin 26 Control"),
        reg("MIO_PIN_27", 0x0000076C, 32, ReadWrite, Value(0x00001601), "MIO Pin 27 Control"),
        reg("MIO_PIN_28", 0x00000770, 32, ReadWrite, Value(0x00001601), "MIO Pin 28 Control"),
        reg("MIO_PIN_29", 0x00000774, 32, ReadWrite, Value(0x00001601), "MIO Pin 29 Control"),
        reg("MIO_PIN_30", 0x00000778, 32, ReadWrite, Value(0x00001601), "MIO Pin 30 Control"),
        reg("MIO_PIN_31", 0x0000077C, 32, ReadWrite, Value(0x00001601), "MIO Pin 31 Control"),
        reg("MIO_PIN_32", 0x00000780, 32, ReadWrite, Value(0x00001601), "MIO Pin 32 Control"),
        reg("MIO_PIN_33", 0x00000784, 32, ReadWrite, Value(0x00001601), "MIO Pin 33 Control"),
        reg("MIO_PIN_34", 0x00000788, 32, ReadWrite, Value(0x00001601), "MIO Pin 34 Control"),
        reg("MIO_PIN_35", 0x0000078C, 32, ReadWrite, Value(0x00001601), "MIO Pin 35 Control"),
        reg("MIO_PIN_36", 0x00000790, 32, ReadWrite, Value(0x00001601), "MIO Pin 36 Control"),
        reg("MIO_PIN_37", 0x00000794, 32, ReadWrite, Value(0x00001601), "MIO Pin 37 Control"),
        reg("MIO_PIN_38", 0x00000798, 32, ReadWrite, Value(0x00001601), "MIO Pin 38 Control"),
        reg("MIO_PIN_39", 0x0000079C, 32, ReadWrite, Value(0x00001601), "MIO Pin 39 Control"),
        reg("MIO_PIN_40", 0x000007A0, 32, ReadWrite, Value(0x00001601), "MIO Pin 40 Control"),
        reg("MIO_PIN_41", 0x000007A4, 32, ReadWrite, Value(0x00001601), "MIO Pin 41 Control"),
        reg("MIO_PIN_42", 0x000007A8, 32, ReadWrite, Value(0x00001601), "MIO Pin 42 Control"),
        reg("MIO_PIN_43", 0x000007AC, 32, ReadWrite, Value(0x00001601), "MIO Pin 43 Control"),
        reg("MIO_PIN_44", 0x000007B0, 32, ReadWrite, Value(0x00001601), "MIO Pin 44 Control"),
        reg("MIO_PIN_45", 0x000007B4, 32, ReadWrite, Value(0x00001601), "MIO Pin 45 Control"),
        reg("MIO_PIN_46", 0x000007B8, 32, ReadWrite, Value(0x00001601), "MIO Pin 46 Control"),
        reg("MIO_PIN_47", 0x000007BC, 32, ReadWrite, Value(0x00001601), "MIO Pin 47 Control"),
        reg("MIO_PIN_48", 0x000007C0, 32, ReadWrite, Value(0x00001601), "MIO Pin 48 Control"),
        reg("MIO_PIN_49", 0x000007C4, 32, ReadWrite, Value(0x00001601), "MIO Pin 49 Control"),
        reg("MIO_PIN_50", 0x000007C8, 32, ReadWrite, Value(0x00001601), "MIO Pin 50 Control"),
        reg("MIO_PIN_51", 0x000007CC, 32, ReadWrite, Value(0x00001601), "MIO Pin 51 Control"),
        reg("MIO_PIN_52", 0x000007D0, 32, ReadWrite, Value(0x00001601), "MIO Pin 52 Control"),
        reg("MIO_PIN_53", 0x000007D4, 32, ReadWrite, Value(0x00001601), "MIO Pin 53 Control"),
        reg("MIO_LOOPBACK", 0x00000804, 32, ReadWrite, Value(0x00000000), "Loopback function within MIO"),
        reg("MIO_MST_TRI0", 0x0000080C, 32, ReadWrite, Value(0xFFFFFFFF), "MIO pin Tri-state Enables, 31:0"),
        reg("MIO_MST_TRI1", 0x00000810, 32, ReadWrite, Value(0x003FFFFF), "MIO pin Tri-state Enables, 53:32"),
        reg("SD0_WP_CD_SEL", 0x00000830, 32, ReadWrite, Value(0x00000000), "SDIO 0 WP CD select"),
        reg("SD1_WP_CD_SEL", 0x00000834, 32, ReadWrite, Value(0x00000000), "SDIO 1 WP CD select"),
        reg("LVL_SHFTR_EN", 0x00000900, 32, ReadWrite, Value(0x00000000), "Level Shifters Enable"),
        reg("OCM_CFG", 0x00000910, 32, ReadWrite, Value(0x00000000), "OCM Address Mapping"),
        reg("Reserved", 0x00000A1C, 32, ReadWrite, Value(0x00010101), "Reserved"),
        reg("GPIOB_CTRL", 0x00000B00, 32, ReadWrite, Value(0x00000000), "PS IO Buffer Control"),
        reg("GPIOB_CFG_CMOS18", 0x00000B04, 32, ReadWrite, Value(0x00000000), "MIO GPIOB CMOS 1.8V config"),
        reg("GPIOB_CFG_CMOS25", 0x00000B08, 32, ReadWrite, Value(0x00000000), "MIO GPIOB CMOS 2.5V config"),
        reg("GPIOB_CFG_CMOS33", 0x00000B0C, 32, ReadWrite, Value(0x00000000), "MIO GPIOB CMOS 3.3V config"),
        reg("GPIOB_CFG_HSTL", 0x00000B14, 32, ReadWrite, Value(0x00000000), "MIO GPIOB HSTL config"),
        reg("GPIOB_DRVR_BIAS_CTRL", 0x00000B18, 32, Mixed, Value(0x00000000), "MIO GPIOB Driver Bias Control"),
        reg("DDRIOB_ADDR0", 0x00000B40, 32, ReadWrite, Value(0x00000800), "DDR IOB Config for ARegister(14:0), CKE and DRST_B"),
        reg("DDRIOB_ADDR1", 0x00000B44, 32, ReadWrite, Value(0x00000800), "DDR IOB Config for BARegister(2:0), ODT, CS_B, WE_B, RAS_B and CAS_B"),
        reg("DDRIOB_DATA0", 0x00000B48, 32, ReadWrite, Value(0x00000800), "DDR IOB Config for Data 15:0"),
        reg("DDRIOB_DATA1", 0x00000B4C, 32, ReadWrite, Value(0x00000800), "DDR IOB Config for Data 31:16"),
        reg("DDRIOB_DIFF0", 0x00000B50, 32, ReadWrite, Value(0x00000800), "DDR IOB Config for DQS 1:0"),
        reg("DDRIOB_DIFF1", 0x00000B54, 32, ReadWrite, Value(0x00000800), "DDR IOB Config for DQS 3:2"),
        reg("DDRIOB_CLOCK", 0x00000B58, 32, ReadWrite, Value(0x00000800), "DDR IOB Config for Clock Output"),
        reg("DDRIOB_DRIVE_SLEW_ADDR", 0x00000B5C, 32, ReadWrite, Value(0x00000000), "Drive and Slew controls for Address and Command pins of the DDR Interface"),
        reg("DDRIOB_DRIVE_SLEW_DATA", 0x00000B60, 32, ReadWrite, Value(0x00000000), "Drive and Slew controls for DQ pins of the DDR Interface"),
        reg("DDRIOB_DRIVE_SLEW_DIFF", 0x00000B64, 32, ReadWrite, Value(0x00000000), "Drive and Slew controls for DQS pins of the DDR Interface"),
        reg("DDRIOB_DRIVE_SLEW_CLOCK", 0x00000B68, 32, ReadWrite, Value(0x00000000), "Drive and Slew controls for Clock pins of the DDR Interface"),
        reg("DDRIOB_DDR_CTRL", 0x00000B6C, 32, ReadWrite, Value(0x00000000), "DDR IOB Buffer Control"),
        reg("DDRIOB_DCI_CTRL", 0x00000B70, 32, ReadWrite, Value(0x00000020), "DDR IOB DCI Config"),
        reg("DDRIOB_DCI_STATUS", 0x00000B74, 32, Mixed, Value(0x00000000), "DDR IO Buffer DCI Status"),
    ];
    RegisterBlock::new("slcr", PAGE_DECODE_MASK, smallvec![0xF8000000], regs)
}

fn ddrc() -> RegisterBlock {
    use AccessKind::*;
    use ResetValue::{Undefined, Value};
    #[rustfmt::skip]
    let regs = vec![
        reg("ddrc_ctrl", 0x00000000, 32, ReadWrite, Value(0x00000200), "DDRC Control"),
        reg("Two_rank_cfg", 0x00000004, 29, ReadWrite, Value(0x000C1076), "Two Rank Configuration"),
        reg("HPR_reg", 0x00000008, 26, ReadWrite, Value(0x03C0780F), "HPR Queue control"),
        reg("LPR_reg", 0x0000000C, 26, ReadWrite, Value(0x03C0780F), "LPR Queue control"),
        reg("WR_reg", 0x00000010, 26, ReadWrite, Value(0x0007F80F), "WR Queue control"),
        reg("DRAM_param_reg0", 0x00000014, 21, ReadWrite, Value(0x00041016), "DRAM Parameters 0"),
        reg("DRAM_param_reg1", 0x00000018, 32, ReadWrite, Value(0x351B48D9), "DRAM Parameters 1"),
        reg("DRAM_param_reg2", 0x0000001C, 32, ReadWrite, Value(0x83015904), "DRAM Parameters 2"),
        reg("DRAM_param_reg3", 0x00000020, 32, Mixed, Value(0x250882D0), "DRAM Parameters 3"),
        reg("DRAM_param_reg4", 0x00000024, 28, Mixed, Value(0x0000003C), "DRAM Parameters 4"),
        reg("DRAM_init_param", 0x00000028, 14, ReadWrite, Value(0x00002007), "DRAM Initialization Parameters"),
        reg("DRAM_EMR_reg", 0x0000002C, 32, ReadWrite, Value(0x00000008), "DRAM EMR2, EMR3 access"),
        reg("DRAM_EMR_MR_reg", 0x00000030, 32, ReadWrite, Value(0x00000940), "DRAM EMR, MR access"),
        reg("DRAM_burst8_rdwr", 0x00000034, 29, Mixed, Value(0x00020034), "DRAM Burst 8 read/write"),
        reg("DRAM_disable_DQ", 0x00000038, 13, Mixed, Value(0x00000000), "DRAM Disable DQ"),
        reg("DRAM_addr_map_bank", 0x0000003C, 20, ReadWrite, Value(0x00000F77), "Row/Column address bits"),
        reg("DRAM_addr_map_col", 0x00000040, 32, ReadWrite, Value(0xFFF00000), "Column address bits"),
        reg("DRAM_addr_map_row", 0x00000044, 28, ReadWrite, Value(0x0FF55555), "Select DRAM row address bits"),
        reg("DRAM_ODT_reg", 0x00000048, 30, ReadWrite, Value(0x00000249), "DRAM ODT control"),
        reg("phy_dbg_reg", 0x0000004C, 20, ReadOnly, Value(0x00000000), "PHY debug"),
        reg("phy_cmd_timeout_rddata_cpt", 0x00000050, 32, Mixed, Value(0x00010200), "PHY command time out and read data capture FIFO"),
        reg("mode_sts_reg", 0x00000054, 21, ReadOnly, Value(0x00000000), "Controller operation mode status"),
        reg("DLL_calib", 0x00000058, 17, ReadWrite, Value(0x00000101), "DLL calibration"),
        reg("ODT_delay_hold", 0x0000005C, 16, ReadWrite, Value(0x00000023), "ODT delay and ODT hold"),
        reg("ctrl_reg1", 0x00000060, 13, Mixed, Value(0x0000003E), "Controller 1"),
        reg("ctrl_reg2", 0x00000064, 18, Mixed, Value(0x00020000), "Controller 2"),
        reg("ctrl_reg3", 0x00000068, 26, ReadWrite, Value(0x00284027), "Controller 3"),
        reg("ctrl_reg4", 0x0000006C, 16, ReadWrite, Value(0x00001610), "Controller 4"),
        reg("ctrl_reg5", 0x00000078, 32, Mixed, Value(0x00455111), "Controller register 5"),
        reg("ctrl_reg6", 0x0000007C, 32, Mixed, Value(0x00032222), "Controller register 6"),
        reg("CHE_REFRESH_TIMER01", 0x000000A0, 24, ReadWrite, Value(0x00008000), "CHE_REFRESH_TIMER01"),
        reg("CHE_T_ZQ", 0x000000A4, 32, ReadWrite, Value(0x10300802), "ZQ parameters"),
        reg("CHE_T_ZQ_Short_Interval_Reg", 0x000000A8, 28, ReadWrite, Value(0x0020003A), "Misc parameters"),
        reg("deep_pwrdwn_reg", 0x000000AC, 9, ReadWrite, Value(0x00000000), "Deep powerdown (LPDDR2)"),
        reg("reg_2c", 0x000000B0, 29, Mixed, Value(0x00000000), "Training control"),
        reg("reg_2d", 0x000000B4, 11, ReadWrite, Value(0x00000200), "Misc Debug"),
        reg("dfi_timing", 0x000000B8, 25, ReadWrite, Value(0x00200067), "DFI timing"),
        reg("CHE_ECC_CONTROL_REG_OFFSET", 0x000000C4, 2, ReadWrite, Value(0x00000000), "ECCerror clear"),
        reg("CHE_CORR_ECC_LOG_REG_OFFSET", 0x000000C8, 8, Mixed, Value(0x00000000), "ECCerror correction"),
        reg("CHE_CORR_ECC_ADDR_REG_OFFSET", 0x000000CC, 31, ReadOnly, Value(0x00000000), "ECC error correction address log"),
        reg("CHE_CORR_ECC_DATA_31_0_REG_OFFSET", 0x000000D0, 32, ReadOnly, Value(0x00000000), "ECC error correction data log low"),
        reg("CHE_CORR_ECC_DATA_63_32_REG_OFFSET", 0x000000D4, 32, ReadOnly, Value(0x00000000), "ECC error correction data log mid"),
        reg("CHE_CORR_ECC_DATA_71_64_REG_OFFSET", 0x000000D8, 8, ReadOnly, Value(0x00000000), "ECCerror correction data log high"),
        reg("CHE_UNCORR_ECC_LOG_REG_OFFSET", 0x000000DC, 1, ClearOnWrite, Value(0x00000000), "ECC unrecoverable error status"),
        reg("CHE_UNCORR_ECC_ADDR_REG_OFFSET", 0x000000E0, 31, ReadOnly, Value(0x00000000), "ECC unrecoverable error address"),
        reg("CHE_UNCORR_ECC_DATA_31_0_REG_OFFSET", 0x000000E4, 32, ReadOnly, Value(0x00000000), "ECC unrecoverable error data low"),
        reg("CHE_UNCORR_ECC_DATA_63_32_REG_OFFSET", 0x000000E8, 32, ReadOnly, Value(0x00000000), "ECC unrecoverable error data middle"),
        reg("CHE_UNCORR_ECC_DATA_71_64_REG_OFFSET", 0x000000EC, 8, ReadOnly, Value(0x00000000), "ECC unrecoverable error data high"),
        reg("CHE_ECC_STATS_REG_OFFSET", 0x000000F0, 16, ClearOnWrite, Value(0x00000000), "ECC error count"),
        reg("ECC_scrub", 0x000000F4, 4, ReadWrite, Value(0x00000008), "ECC mode/scrub"),
        reg("CHE_ECC_CORR_BIT_MASK_31_0_REG_OFFSET", 0x000000F8, 32, ReadOnly, Value(0x00000000), "ECC data mask low"),
        reg("CHE_ECC_CORR_BIT_MASK_63_32_REG_OFFSET", 0x000000FC, 32, ReadOnly, Value(0x00000000), "ECC data mask high"),
        reg("phy_rcvr_enable", 0x00000114, 8, ReadWrite, Value(0x00000000), "Phyreceiver enable register"),
        reg("PHY_Config0", 0x00000118, 31, ReadWrite, Value(0x40000001), "PHY configuration register for data slice 0."),
        reg("PHY_Config1", 0x0000011C, 31, ReadWrite, Value(0x40000001), "PHY configuration register for data slice 1."),
        reg("PHY_Config2", 0x00000120, 31, ReadWrite, Value(0x40000001), "PHY configuration register for data slice 2."),
        reg("PHY_Config3", 0x00000124, 31, ReadWrite, Value(0x40000001), "PHY configuration register for data slice 3."),
        reg("phy_init_ratio0", 0x0000012C, 20, ReadWrite, Value(0x00000000), "PHY init ratio register for data slice 0."),
        reg("phy_init_ratio1", 0x00000130, 20, ReadWrite, Value(0x00000000), "PHY init ratio register for data slice 1."),
        reg("phy_init_ratio2", 0x00000134, 20, ReadWrite, Value(0x00000000), "PHY init ratio register for data slice 2."),
        reg("phy_init_ratio3", 0x00000138, 20, ReadWrite, Value(0x00000000), "PHY init ratio register for data slice 3."),
        reg("phy_rd_dqs_cfg0", 0x00000140, 20, ReadWrite, Value(0x00000040), "PHY read DQS configuration register for data slice 0."),
        reg("phy_rd_dqs_cfg1", 0x00000144, 20, ReadWrite, Value(0x00000040), "PHY read DQS configuration register for data slice 1."),
        reg("phy_rd_dqs_cfg2", 0x00000148, 20, ReadWrite, Value(0x00000040), "PHY read DQS configuration register for data slice 2."),
        reg("phy_rd_dqs_cfg3", 0x0000014C, 20, ReadWrite, Value(0x00000040), "PHY read DQS configuration register for data slice 3."),
        reg("phy_wr_dqs_cfg0", 0x00000154, 20, ReadWrite, Value(0x00000000), "PHY write DQS configuration register for data slice 0."),
        reg("phy_wr_dqs_cfg1", 0x00000158, 20, ReadWrite, Value(0x00000000), "PHY write DQS configuration register for data slice 1."),
        reg("phy_wr_dqs_cfg2", 0x0000015C, 20, ReadWrite, Value(0x00000000), "PHY write DQS configuration register for data slice 2."),
        reg("phy_wr_dqs_cfg3", 0x00000160, 20, ReadWrite, Value(0x00000000), "PHY write DQS configuration register for data slice 3."),
        reg("phy_we_cfg0", 0x00000168, 21, ReadWrite, Value(0x00000040), "PHY FIFO write enable configuration for data slice 0."),
        reg("phy_we_cfg1", 0x0000016C, 21, ReadWrite, Value(0x00000040), "PHY FIFO write enable configuration for data slice 1."),
        reg("phy_we_cfg2", 0x00000170, 21, ReadWrite, Value(0x00000040), "PHY FIFO write enable configuration for data slice 2."),
        reg("phy_we_cfg3", 0x00000174, 21, ReadWrite, Value(0x00000040), "PHY FIFO write enable configuration for data slice 3."),
        reg("wr_data_slv0", 0x0000017C, 20, ReadWrite, Value(0x00000080), "PHY write data slave ratio config for data slice 0."),
        reg("wr_data_slv1", 0x00000180, 20, ReadWrite, Value(0x00000080), "PHY write data slave ratio config for data slice 1."),
        reg("wr_data_slv2", 0x00000184, 20, ReadWrite, Value(0x00000080), "PHY write data slave ratio config for data slice 2."),
        reg("wr_data_slv3", 0x00000188, 20, ReadWrite, Value(0x00000080), "PHY write data slave ratio config for data slice 3."),
        reg("reg_64", 0x00000190, 32, ReadWrite, Value(0x10020000), "Training control 2"),
        reg("reg_65", 0x00000194, 20, ReadWrite, Value(0x00000000), "Training control 3"),
        reg("reg69_6a0", 0x000001A4, 29, ReadOnly, Value(0x00070000), "Training results for data slice 0."),
        reg("reg69_6a1", 0x000001A8, 29, ReadOnly, Value(0x00060200), "Training results for data slice 1."),
        reg("reg6c_6d2", 0x000001B0, 28, ReadOnly, Value(0x00040600), "Training results for data slice 2."),
        reg("reg6c_6d3", 0x000001B4, 28, ReadOnly, Value(0x00000E00), "Training results for data slice 3."),
        reg("reg6e_710", 0x000001B8, 30, ReadOnly, Undefined, "Training results (2) for data slice 0."),
        reg("reg6e_711", 0x000001BC, 30, ReadOnly, Undefined, "Training results (2) for data slice 1."),
        reg("reg6e_712", 0x000001C0, 30, ReadOnly, Undefined, "Training results (2) for data slice 2."),
        reg("reg6e_713", 0x000001C4, 30, ReadOnly, Undefined, "Training results (2) for data slice 3."),
        reg("phy_dll_sts0", 0x000001CC, 27, ReadOnly, Value(0x00000000), "Slave DLL results for data slice 0."),
        reg("phy_dll_sts1", 0x000001D0, 27, ReadOnly, Value(0x00000000), "Slave DLL results for data slice 1."),
        reg("phy_dll_sts2", 0x000001D4, 27, ReadOnly, Value(0x00000000), "Slave DLL results for data slice 2."),
        reg("phy_dll_sts3", 0x000001D8, 27, ReadOnly, Value(0x00000000), "Slave DLL results for data slice 3."),
        reg("dll_lock_sts", 0x000001E0, 24, ReadOnly, Value(0x00F00000), "DLL Lock Status, read"),
        reg("phy_ctrl_sts", 0x000001E4, 30, ReadOnly, Undefined, "PHY Control status, read"),
        reg("phy_ctrl_sts_reg2", 0x000001E8, 27, ReadOnly, Value(0x00000013), "PHY Control status (2), read"),
        reg("axi_id", 0x00000200, 26, ReadOnly, Value(0x00153042), "ID and revision information"),
        reg("page_mask", 0x00000204, 32, ReadWrite, Value(0x00000000), "Page mask"),
        reg("axi_priority_wr_port0", 0x00000208, 20, Mixed, Value(0x000803FF), "AXI Priority control for write port 0."),
        reg("axi_priority_wr_port1", 0x0000020C, 20, Mixed, Value(0x000803FF), "AXI Priority control for write port 1."),
        reg("axi_priority_wr_port2", 0x00000210, 20, Mixed, Value(0x000803FF), "AXI Priority control for write port 2."),
        reg("axi_priority_wr_port3", 0x00000214, 20, Mixed, Value(0x000803FF), "AXI Priority control for write port 3."),
        reg("axi_priority_rd_port0", 0x00000218, 20, Mixed, Value(0x000003FF), "AXI Priority control for read port 0."),
        reg("axi_priority_rd_port1", 0x0000021C, 20, Mixed, Value(0x000003FF), "AXI Priority control for read port 1."),
        reg("axi_priority_rd_port2", 0x00000220, 20, Mixed, Value(0x000003FF), "AXI Priority control for read port 2."),
        reg("axi_priority_rd_port3", 0x00000224, 20, Mixed, Value(0x000003FF), "AXI Priority control for read port 3."),
        reg("excl_access_cfg0", 0x00000294, 18, ReadWrite, Value(0x00000000), "Exclusive access configuration for port 0."),
        reg("excl_access_cfg1", 0x00000298, 18, ReadWrite, Value(0x00000000), "Exclusive access configuration for port 1."),
        reg("excl_access_cfg2", 0x0000029C, 18, ReadWrite, Value(0x00000000), "Exclusive access configuration for port 2."),
        reg("excl_access_cfg3", 0x000002A0, 18, ReadWrite, Value(0x00000000), "Exclusive access configuration for port 3."),
        reg("mode_reg_read", 0x000002A4, 32, ReadOnly, Value(0x00000000), "Mode register read data"),
        reg("lpddr_ctrl0", 0x000002A8, 12, ReadWrite, Value(0x00000000), "LPDDR2 Control 0"),
        reg("lpddr_ctrl1", 0x000002AC, 32, ReadWrite, Value(0x00000000), "LPDDR2 Control 1"),
        reg("lpddr_ctrl2", 0x000002B0, 22, ReadWrite, Value(0x003C0015), "LPDDR2 Control 2"),
        reg("lpddr_ctrl3", 0x000002B4, 18, ReadWrite, Value(0x00000601), "LPDDR2 Control 3"),
    ];
    RegisterBlock::new("ddrc", PAGE_DECODE_MASK, smallvec![0xF8006000], regs)
}

fn devcfg() -> RegisterBlock {
    use AccessKind::*;
    use ResetValue::{Undefined, Value};
    #[rustfmt::skip]
    let regs = vec![
        reg("XDCFG_CTRL_OFFSET", 0x00000000, 32, Mixed, Value(0x0C006000), "Control Register"),
        reg("XDCFG_LOCK_OFFSET", 0x00000004, 32, Mixed, Value(0x00000000), "Locks for the Control Register."),
        reg("XDCFG_CFG_OFFSET", 0x00000008, 32, ReadWrite, Value(0x00000508), "Configuration Register: This register contains configuration information for the AXI transfers, and other general setup."),
        reg("XDCFG_INT_STS_OFFSET", 0x0000000C, 32, Mixed, Value(0x00000000), "Interrupt Status"),
        reg("XDCFG_INT_MASK_OFFSET", 0x00000010, 32, ReadWrite, Value(0xFFFFFFFF), "Interrupt Mask."),
        reg("XDCFG_STATUS_OFFSET", 0x00000014, 32, Mixed, Value(0x40000820), "Miscellaneous Status."),
        reg("XDCFG_DMA_SRC_ADDR_OFFSET", 0x00000018, 32, ReadWrite, Value(0x00000000), "DMA Source Address."),
        reg("XDCFG_DMA_DEST_ADDR_OFFSET", 0x0000001C, 32, ReadWrite, Value(0x00000000), "DMA Destination Address."),
        reg("XDCFG_DMA_SRC_LEN_OFFSET", 0x00000020, 32, ReadWrite, Value(0x00000000), "DMA Source Transfer Length."),
        reg("XDCFG_DMA_DEST_LEN_OFFSET", 0x00000024, 32, ReadWrite, Value(0x00000000), "DMA Destination Transfer Length."),
        reg("XDCFG_MULTIBOOT_ADDR_OFFSET", 0x0000002C, 13, ReadWrite, Value(0x00000000), "Multi-Boot Address Pointer."),
        reg("XDCFG_UNLOCK_OFFSET", 0x00000034, 32, ReadWrite, Value(0x00000000), "Unlock Control."),
        reg("XDCFG_MCTRL_OFFSET", 0x00000080, 32, Mixed, Undefined, "Miscellaneous Control."),
        reg("XADCIF_CFG", 0x00000100, 32, ReadWrite, Value(0x00001114), "XADC Interface Configuration."),
        reg("XADCIF_INT_STS", 0x00000104, 32, Mixed, Value(0x00000200), "XADC Interface Interrupt Status."),
        reg("XADCIF_INT_MASK", 0x00000108, 32, ReadWrite, Value(0xFFFFFFFF), "XADC Interface Interrupt Mask."),
        reg("XADCIF_MSTS", 0x0000010C, 32, ReadOnly, Value(0x00000500), "XADC Interface Miscellaneous Status."),
        reg("XADCIF_CMDFIFO", 0x00000110, 32, WriteOnly, Value(0x00000000), "XADC Interface Command FIFO Data Port"),
        reg("XADCIF_RDFIFO", 0x00000114, 32, ReadOnly, Value(0x00000000), "XADC Interface Data FIFO Data Port"),
        reg("XADCIF_MCTL", 0x00000118, 32, ReadWrite, Value(0x00000010), "XADC Interface Miscellaneous Control."),
    ];
    RegisterBlock::new("devcfg", PAGE_DECODE_MASK, smallvec![0xF8007000], regs)
}

fn uart() -> RegisterBlock {
    use AccessKind::*;
    use ResetValue::{Undefined, Value};
    #[rustfmt::skip]
    let regs = vec![
        reg("XUARTPS_CR_OFFSET", 0x00000000, 32, Mixed, Value(0x00000128), "UART Control Register"),
        reg("XUARTPS_MR_OFFSET", 0x00000004, 32, Mixed, Value(0x00000000), "UART Mode Register"),
        reg("XUARTPS_IER_OFFSET", 0x00000008, 32, Mixed, Value(0x00000000), "Interrupt Enable Register"),
        reg("XUARTPS_IDR_OFFSET", 0x0000000C, 32, Mixed, Value(0x00000000), "Interrupt Disable Register"),
        reg("XUARTPS_IMR_OFFSET", 0x00000010, 32, ReadOnly, Value(0x00000000), "Interrupt Mask Register"),
        reg("XUARTPS_ISR_OFFSET", 0x00000014, 32, WriteToClear, Value(0x00000000), "Channel Interrupt Status Register"),
        reg("XUARTPS_BAUDGEN_OFFSET", 0x00000018, 32, Mixed, Value(0x0000028B), "Baud Rate Generator Register."),
        reg("XUARTPS_RXTOUT_OFFSET", 0x0000001C, 32, Mixed, Value(0x00000000), "Receiver Timeout Register"),
        reg("XUARTPS_RXWM_OFFSET", 0x00000020, 32, Mixed, Value(0x00000020), "Receiver FIFO Trigger Level Register"),
        reg("XUARTPS_MODEMCR_OFFSET", 0x00000024, 32, Mixed, Value(0x00000000), "Modem Control Register"),
        reg("XUARTPS_MODEMSR_OFFSET", 0x00000028, 32, Mixed, Undefined, "Modem Status Register"),
        reg("XUARTPS_SR_OFFSET", 0x0000002C, 32, ReadOnly, Value(0x00000000), "Channel Status Register"),
        reg("XUARTPS_FIFO_OFFSET", 0x00000030, 32, Mixed, Value(0x00000000), "Transmit and Receive FIFO"),
        reg("Baud_rate_divider_reg0", 0x00000034, 32, Mixed, Value(0x0000000F), "Baud Rate Divider Register"),
        reg("Flow_delay_reg0", 0x00000038, 32, Mixed, Value(0x00000000), "Flow Control Delay Register"),
        reg("Tx_FIFO_trigger_level0", 0x00000044, 32, Mixed, Value(0x00000020), "Transmitter FIFO Trigger Level Register"),
    ];
    RegisterBlock::new("uart", PAGE_DECODE_MASK, smallvec![0xE0000000, 0xE0001000], regs)
}

fn qspi() -> RegisterBlock {
    use AccessKind::*;
    use ResetValue::{Undefined, Value};
    #[rustfmt::skip]
    let regs = vec![
        reg("XQSPIPS_CR_OFFSET", 0x00000000, 32, Mixed, Value(0x80020000), "QSPI configuration register"),
        reg("XQSPIPS_SR_OFFSET", 0x00000004, 32, Mixed, Value(0x00000004), "QSPI interrupt status register"),
        reg("XQSPIPS_IER_OFFSET", 0x00000008, 32, Mixed, Value(0x00000000), "Interrupt Enable register."),
        reg("XQSPIPS_IDR_OFFSET", 0x0000000C, 32, Mixed, Value(0x00000000), "Interrupt disable register."),
        reg("XQSPIPS_IMR_OFFSET", 0x00000010, 32, ReadOnly, Value(0x00000000), "Interrupt mask register"),
        reg("XQSPIPS_ER_OFFSET", 0x00000014, 32, Mixed, Value(0x00000000), "SPI_Enable Register"),
        reg("XQSPIPS_DR_OFFSET", 0x00000018, 32, ReadWrite, Value(0x00000000), "Delay Register"),
        reg("XQSPIPS_TXD_00_OFFSET", 0x0000001C, 32, WriteOnly, Value(0x00000000), "Transmit Data Register. Keyhole addresses for the Transmit data FIFO. See also TXD1-3."),
        reg("XQSPIPS_RXD_OFFSET", 0x00000020, 32, ReadOnly, Value(0x00000000), "Receive Data Register"),
        reg("XQSPIPS_SICR_OFFSET", 0x00000024, 32, Mixed, Value(0x000000FF), "Slave Idle Count Register"),
        reg("XQSPIPS_TXWR_OFFSET", 0x00000028, 32, ReadWrite, Value(0x00000001), "TX_FIFO Threshold Register"),
        reg("RX_thres_REG", 0x0000002C, 32, ReadWrite, Value(0x00000001), "RX FIFO Threshold Register"),
        reg("GPIO", 0x00000030, 32, ReadWrite, Value(0x00000001), "General Purpose Inputs and Outputs Register for the Quad-SPI Controller core"),
        reg("LPBK_DLY_ADJ", 0x00000038, 32, ReadWrite, Value(0x0000002D), "Loopback Master Clock Delay Adjustment Register"),
        reg("XQSPIPS_TXD_01_OFFSET", 0x00000080, 32, WriteOnly, Value(0x00000000), "Transmit Data Register. Keyhole addresses for the Transmit data FIFO."),
        reg("XQSPIPS_TXD_10_OFFSET", 0x00000084, 32, WriteOnly, Value(0x00000000), "Transmit Data Register. Keyhole addresses for the Transmit data FIFO."),
        reg("XQSPIPS_TXD_11_OFFSET", 0x00000088, 32, WriteOnly, Value(0x00000000), "Transmit Data Register. Keyhole addresses for the Transmit data FIFO."),
        reg("XQSPIPS_LQSPI_CR_OFFSET", 0x000000A0, 32, ReadWrite, Undefined, "Configuration Register specifically for the Linear Quad-SPI Controller"),
        reg("XQSPIPS_LQSPI_SR_OFFSET", 0x000000A4, 9, ReadWrite, Value(0x00000000), "Status Register specifically for the Linear Quad-SPI Controller"),
        reg("MOD_ID", 0x000000FC, 32, ReadWrite, Value(0x01090101), "Module Identification register"),
    ];
    RegisterBlock::new("qspi", PAGE_DECODE_MASK, smallvec![0xE000D000], regs)
}

fn sdio() -> RegisterBlock {
    RegisterBlock::new("sdio", PAGE_DECODE_MASK, smallvec![0xE0100000, 0xE0101000], Vec::new())
}
