//! Tests for JMP, JSR/RTS, BRK/RTI and NOP.

use cpu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

// ========== JMP ==========

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();

    // JMP $1234
    cpu.memory_mut().load(0x8000, &[0x4C, 0x34, 0x12]);

    assert_eq!(cpu.step_instruction(), 3);
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x0120, &[0xFC, 0xBA]);

    // JMP ($0120)
    cpu.memory_mut().load(0x8000, &[0x6C, 0x20, 0x01]);

    assert_eq!(cpu.step_instruction(), 5);
    assert_eq!(cpu.pc(), 0xBAFC);
}

#[test]
fn test_jmp_indirect_page_wrap_bug() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x30FF, 0x80);
    cpu.memory_mut().write(0x3000, 0x50);
    cpu.memory_mut().write(0x3100, 0x40);

    // JMP ($30FF): high byte comes from $3000, not $3100
    cpu.memory_mut().load(0x8000, &[0x6C, 0xFF, 0x30]);
    cpu.step_instruction();

    assert_eq!(cpu.pc(), 0x5080);
}

// ========== JSR / RTS ==========

#[test]
fn test_jsr_pushes_return_address_minus_one() {
    let mut cpu = setup_cpu();

    // JSR $9000
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]);

    assert_eq!(cpu.step_instruction(), 6);
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFB);
    assert_eq!(cpu.memory().peek(0x01FD), 0x80);
    assert_eq!(cpu.memory().peek(0x01FC), 0x02);
}

#[test]
fn test_jsr_rts_round_trip() {
    let mut cpu = setup_cpu();

    // JSR $9000 ... RTS
    cpu.memory_mut().load(0x8000, &[0x20, 0x00, 0x90]);
    cpu.memory_mut().write(0x9000, 0x60);

    let sp = cpu.sp();
    cpu.step_instruction();
    assert_eq!(cpu.step_instruction(), 6);

    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), sp);
}

// ========== BRK / RTI ==========

#[test]
fn test_brk_pushes_pc_plus_two_and_break() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0xFFFE, &[0x00, 0xA0]);
    cpu.set_status(0x00);

    // BRK; padding byte
    cpu.memory_mut().load(0x8000, &[0x00, 0xFF]);

    assert_eq!(cpu.step_instruction(), 7);
    assert_eq!(cpu.pc(), 0xA000);
    assert!(cpu.flag_i());
    assert_eq!(cpu.memory().peek(0x01FD), 0x80);
    assert_eq!(cpu.memory().peek(0x01FC), 0x02);
    // B and bit 5 set in the pushed copy only
    assert_eq!(cpu.memory().peek(0x01FB), 0x30);
    assert!(!cpu.flag_b());
}

#[test]
fn test_brk_then_rti_restores_state() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0xFFFE, &[0x00, 0xA0]);
    cpu.memory_mut().write(0xA000, 0x40); // RTI
    cpu.set_status(0xC3);

    // BRK; padding; NOP
    cpu.memory_mut().load(0x8000, &[0x00, 0xFF, 0xEA]);

    cpu.step_instruction();
    assert_eq!(cpu.step_instruction(), 6);

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.status(), 0xE3);
}

#[test]
fn test_rti_ignores_pulled_break_bit() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0xFA);
    cpu.memory_mut().load(0x01FB, &[0xFF, 0x34, 0x12]);

    // RTI
    cpu.memory_mut().load(0x8000, &[0x40]);
    cpu.step_instruction();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.status(), 0xEF);
    assert!(!cpu.flag_b());
}

// ========== NOP ==========

#[test]
fn test_nop() {
    let mut cpu = setup_cpu();
    let before = *cpu.registers();

    // NOP
    cpu.memory_mut().load(0x8000, &[0xEA]);

    assert_eq!(cpu.step_instruction(), 2);
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.a(), before.a);
    assert_eq!(cpu.status(), before.p.bits());
}
