//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to check invariants that must hold for every
//! operand and register combination.

use cpu6502::{FlatMemory, MemoryBus, StatusFlags, CPU};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Immediate-mode opcodes whose result lands in A.
const ACCUMULATOR_OPS: [u8; 6] = [
    0x69, // ADC
    0xE9, // SBC
    0x29, // AND
    0x09, // ORA
    0x49, // EOR
    0xA9, // LDA
];

proptest! {
    /// Property: Z is set iff A is zero, N equals bit 7 of A
    #[test]
    fn prop_zn_follow_accumulator(
        op_index in 0usize..ACCUMULATOR_OPS.len(),
        a in any::<u8>(),
        operand in any::<u8>(),
        carry in any::<bool>(),
    ) {
        let mut cpu = setup_cpu();
        cpu.set_a(a);
        cpu.set_flag(StatusFlags::CARRY, carry);
        cpu.memory_mut().load(0x8000, &[ACCUMULATOR_OPS[op_index], operand]);

        cpu.step_instruction();

        prop_assert_eq!(cpu.flag_z(), cpu.a() == 0);
        prop_assert_eq!(cpu.flag_n(), cpu.a() & 0x80 != 0);
    }

    /// Property: INC/DEC on memory set Z/N from the stored byte and keep C
    #[test]
    fn prop_inc_dec_keep_carry(value in any::<u8>(), carry in any::<bool>(), inc in any::<bool>()) {
        let mut cpu = setup_cpu();
        cpu.set_flag(StatusFlags::CARRY, carry);
        cpu.memory_mut().write(0x0010, value);

        // INC $10 / DEC $10
        let opcode = if inc { 0xE6 } else { 0xC6 };
        cpu.memory_mut().load(0x8000, &[opcode, 0x10]);
        cpu.step_instruction();

        let stored = cpu.memory().peek(0x0010);
        let expected = if inc { value.wrapping_add(1) } else { value.wrapping_sub(1) };
        prop_assert_eq!(stored, expected);
        prop_assert_eq!(cpu.flag_z(), stored == 0);
        prop_assert_eq!(cpu.flag_n(), stored & 0x80 != 0);
        prop_assert_eq!(cpu.flag_c(), carry);
    }

    /// Property: binary ADC matches 9-bit integer addition
    #[test]
    fn prop_binary_adc(a in any::<u8>(), b in any::<u8>(), carry in any::<bool>()) {
        let mut cpu = setup_cpu();
        cpu.set_a(a);
        cpu.set_flag(StatusFlags::CARRY, carry);
        cpu.memory_mut().load(0x8000, &[0x69, b]);
        cpu.step_instruction();

        let sum = a as u16 + b as u16 + carry as u16;
        let signed = a as i8 as i16 + b as i8 as i16 + carry as i16;
        prop_assert_eq!(cpu.a(), sum as u8);
        prop_assert_eq!(cpu.flag_c(), sum > 0xFF);
        prop_assert_eq!(cpu.flag_v(), !(-128..=127).contains(&signed));
    }

    /// Property: PHP then PLP restores the six real flags
    #[test]
    fn prop_php_plp_round_trip(status in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_status(status);
        let before = cpu.flags();

        // PHP; PLP
        cpu.memory_mut().load(0x8000, &[0x08, 0x28]);
        cpu.step_instruction();

        let pushed = cpu.memory().peek(0x01FD);
        prop_assert_eq!(pushed & 0x30, 0x30);

        cpu.step_instruction();

        let real = !StatusFlags::STACK_ONLY;
        prop_assert_eq!(cpu.flags() & real, before & real);
        prop_assert_eq!(cpu.sp(), 0xFD);
    }

    /// Property: JSR then RTS returns to the byte after the JSR
    #[test]
    fn prop_jsr_rts_round_trip(target in 0x0200u16..0x7FFF, sp in 0x02u8..=0xFF) {
        let mut cpu = setup_cpu();
        cpu.set_sp(sp);
        cpu.memory_mut().load(0x8000, &[0x20, target as u8, (target >> 8) as u8]);
        cpu.memory_mut().write(target, 0x60);

        cpu.step_instruction();
        prop_assert_eq!(cpu.pc(), target);

        cpu.step_instruction();
        prop_assert_eq!(cpu.pc(), 0x8003);
        prop_assert_eq!(cpu.sp(), sp);
    }

    /// Property: step() always advances the cycle counter by exactly one
    #[test]
    fn prop_step_is_one_cycle(program in proptest::collection::vec(any::<u8>(), 16), steps in 1usize..64) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &program);

        for i in 0..steps {
            cpu.step();
            prop_assert_eq!(cpu.cycles(), i as u64 + 1);
        }
    }
}
