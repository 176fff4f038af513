//! Decimal mode tests for ADC and SBC.
//!
//! Results follow the NMOS 6502: Z reflects the binary result of ADC, N and
//! V the partially corrected sum, and SBC keeps all flags binary.

use cpu6502::{CpuConfig, FlatMemory, MemoryBus, Variant, CPU};

fn setup_cpu(variant: Variant) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::with_config(memory, CpuConfig::default().with_variant(variant)).unwrap()
}

/// Runs `SED; CLC/SEC; LDA #a; ADC/SBC #b` and returns the CPU.
fn run(variant: Variant, carry: bool, a: u8, op: u8, b: u8) -> CPU<FlatMemory> {
    let mut cpu = setup_cpu(variant);
    let carry_op = if carry { 0x38 } else { 0x18 };
    cpu.memory_mut()
        .load(0x8000, &[0xF8, carry_op, 0xA9, a, op, b]);

    for _ in 0..4 {
        cpu.step_instruction();
    }
    cpu
}

const ADC: u8 = 0x69;
const SBC: u8 = 0xE9;

#[test]
fn test_adc_bcd_results() {
    let cases = [
        // (a, b, carry in, result, carry out)
        (0x00, 0x00, false, 0x00, false),
        (0x09, 0x01, false, 0x10, false),
        (0x12, 0x34, false, 0x46, false),
        (0x15, 0x26, false, 0x41, false),
        (0x81, 0x92, false, 0x73, true),
        (0x99, 0x00, true, 0x00, true),
        (0x50, 0x50, true, 0x01, true),
    ];

    for (a, b, carry, result, carry_out) in cases {
        let cpu = run(Variant::Nmos6502, carry, a, ADC, b);
        assert_eq!(cpu.a(), result, "{:02X} + {:02X} + {}", a, b, carry);
        assert_eq!(cpu.flag_c(), carry_out, "{:02X} + {:02X} + {}", a, b, carry);
    }
}

#[test]
fn test_sbc_bcd_results() {
    let cases = [
        // (a, b, carry in, result, carry out)
        (0x00, 0x00, true, 0x00, true),
        (0x10, 0x01, true, 0x09, true),
        (0x46, 0x12, true, 0x34, true),
        (0x40, 0x13, true, 0x27, true),
        (0x21, 0x34, true, 0x87, false),
        (0x00, 0x01, true, 0x99, false),
        (0x10, 0x00, false, 0x09, true),
    ];

    for (a, b, carry, result, carry_out) in cases {
        let cpu = run(Variant::Nmos6502, carry, a, SBC, b);
        assert_eq!(cpu.a(), result, "{:02X} - {:02X} (C={})", a, b, carry);
        assert_eq!(cpu.flag_c(), carry_out, "{:02X} - {:02X} (C={})", a, b, carry);
    }
}

#[test]
fn test_adc_zero_flag_from_binary_sum() {
    // 0x99 + 0x01 = 0x00 in BCD, 0x9A in binary
    let cpu = run(Variant::Nmos6502, false, 0x99, ADC, 0x01);

    assert_eq!(cpu.a(), 0x00);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_sbc_flags_from_binary_difference() {
    let cpu = run(Variant::Nmos6502, true, 0x00, SBC, 0x01);

    assert_eq!(cpu.a(), 0x99);
    // Binary 0x00 - 0x01 = 0xFF
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
}

#[test]
fn test_ricoh_ignores_decimal_flag() {
    let cpu = run(Variant::Ricoh2A03, false, 0x09, ADC, 0x01);

    assert!(cpu.flag_d());
    assert_eq!(cpu.a(), 0x0A);

    let cpu = run(Variant::Ricoh2A03, true, 0x10, SBC, 0x01);
    assert_eq!(cpu.a(), 0x0F);
}

#[test]
fn test_cld_returns_to_binary() {
    let mut cpu = setup_cpu(Variant::Nmos6502);
    // SED; CLD; CLC; LDA #$09; ADC #$01
    cpu.memory_mut()
        .load(0x8000, &[0xF8, 0xD8, 0x18, 0xA9, 0x09, 0x69, 0x01]);

    for _ in 0..5 {
        cpu.step_instruction();
    }

    assert!(!cpu.flag_d());
    assert_eq!(cpu.a(), 0x0A);
}
