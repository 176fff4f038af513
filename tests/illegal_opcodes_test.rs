//! Tests for the undocumented opcodes under both policies.

use cpu6502::{
    CpuConfig, FlatMemory, IllegalOpcodes, MemoryBus, CPU, ILLEGAL_NOP_CYCLES, OPCODE_TABLE,
};

fn setup_cpu(policy: IllegalOpcodes) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let config = CpuConfig::default().with_illegal_opcodes(policy);
    CPU::with_config(memory, config).unwrap()
}

// ========== Nop policy ==========

#[test]
fn test_every_illegal_opcode_is_a_two_cycle_nop_by_default() {
    for (opcode, meta) in OPCODE_TABLE.iter().enumerate() {
        if !meta.illegal {
            continue;
        }

        let mut cpu = setup_cpu(IllegalOpcodes::Nop);
        cpu.set_a(0x55);
        cpu.memory_mut().load(0x8000, &[opcode as u8, 0x10, 0x20]);
        let status = cpu.status();

        assert_eq!(
            cpu.step_instruction(),
            ILLEGAL_NOP_CYCLES as u64,
            "opcode 0x{:02X}",
            opcode
        );
        assert_eq!(cpu.pc(), 0x8001, "opcode 0x{:02X}", opcode);
        assert_eq!(cpu.a(), 0x55);
        assert_eq!(cpu.status(), status);
        assert!(!cpu.is_jammed());
    }
}

// ========== Emulate policy ==========

#[test]
fn test_lax_zero_page() {
    let mut cpu = setup_cpu(IllegalOpcodes::Emulate);
    cpu.memory_mut().write(0x0010, 0x8F);

    // LAX $10
    cpu.memory_mut().load(0x8000, &[0xA7, 0x10]);

    assert_eq!(cpu.step_instruction(), 3);
    assert_eq!(cpu.a(), 0x8F);
    assert_eq!(cpu.x(), 0x8F);
    assert!(cpu.flag_n());
}

#[test]
fn test_lax_absolute_y_page_penalty() {
    let mut cpu = setup_cpu(IllegalOpcodes::Emulate);
    cpu.set_y(0x01);

    // LAX $20FF,Y
    cpu.memory_mut().load(0x8000, &[0xBF, 0xFF, 0x20]);

    assert_eq!(cpu.step_instruction(), 5);
}

#[test]
fn test_sax_absolute() {
    let mut cpu = setup_cpu(IllegalOpcodes::Emulate);
    cpu.set_a(0xF0);
    cpu.set_x(0x3C);

    // SAX $0300
    cpu.memory_mut().load(0x8000, &[0x8F, 0x00, 0x03]);

    assert_eq!(cpu.step_instruction(), 4);
    assert_eq!(cpu.memory().peek(0x0300), 0x30);
}

#[test]
fn test_dcp_indexed_indirect_timing() {
    let mut cpu = setup_cpu(IllegalOpcodes::Emulate);
    cpu.memory_mut().load(0x0020, &[0x00, 0x03]);
    cpu.memory_mut().write(0x0300, 0x05);
    cpu.set_a(0x04);

    // DCP ($20,X)
    cpu.memory_mut().load(0x8000, &[0xC3, 0x20]);

    assert_eq!(cpu.step_instruction(), 8);
    assert_eq!(cpu.memory().peek(0x0300), 0x04);
    assert!(cpu.flag_z());
}

#[test]
fn test_isc_absolute_x_no_penalty() {
    let mut cpu = setup_cpu(IllegalOpcodes::Emulate);
    cpu.set_x(0x01);
    cpu.set_a(0x10);
    cpu.set_flag(cpu6502::StatusFlags::CARRY, true);

    // ISC $20FF,X
    cpu.memory_mut().load(0x8000, &[0xFF, 0xFF, 0x20]);

    assert_eq!(cpu.step_instruction(), 7);
    assert_eq!(cpu.memory().peek(0x2100), 0x01);
    assert_eq!(cpu.a(), 0x0F);
}

#[test]
fn test_undocumented_nop_skips_operand() {
    let mut cpu = setup_cpu(IllegalOpcodes::Emulate);

    // NOP $1234,X (0x1C)
    cpu.memory_mut().load(0x8000, &[0x1C, 0x34, 0x12]);

    assert_eq!(cpu.step_instruction(), 4);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_sbc_alias_eb() {
    let mut cpu = setup_cpu(IllegalOpcodes::Emulate);
    cpu.set_a(0x05);
    cpu.set_flag(cpu6502::StatusFlags::CARRY, true);

    // SBC #$02 via the 0xEB alias
    cpu.memory_mut().load(0x8000, &[0xEB, 0x02]);

    assert_eq!(cpu.step_instruction(), 2);
    assert_eq!(cpu.a(), 0x03);
}

#[test]
fn test_jam_halts_until_reset() {
    let mut cpu = setup_cpu(IllegalOpcodes::Emulate);

    // JAM
    cpu.memory_mut().load(0x8000, &[0x02]);

    cpu.step_instruction();
    assert!(cpu.is_jammed());
    assert_eq!(cpu.pc(), 0x8000);

    // Interrupts other than reset are ignored
    cpu.nmi();
    for _ in 0..10 {
        cpu.step();
    }
    assert_eq!(cpu.pc(), 0x8000);
    assert!(cpu.is_jammed());

    cpu.memory_mut().write(0x8000, 0xEA);
    cpu.reset();
    assert_eq!(cpu.step_instruction(), 7);
    assert!(!cpu.is_jammed());

    assert_eq!(cpu.step_instruction(), 2);
    assert_eq!(cpu.pc(), 0x8001);
}
