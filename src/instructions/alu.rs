//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - BIT: Bit test
//! - CMP, CPX, CPY: Compare register with memory
//!
//! ## Decimal mode
//!
//! With D set (and a variant that honors it) ADC and SBC treat both operands
//! as packed BCD. Flags follow the NMOS part as measured in Bruce Clark's
//! "Decimal Mode" tutorial on 6502.org:
//! - ADC: Z from the binary sum; N and V from the sum after the low digit is
//!   corrected but before the high digit is; C from the fully corrected sum.
//! - SBC: every flag from the binary difference; only A is corrected.

use crate::addressing::Operand;
use crate::registers::StatusFlags;
use crate::{MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Flags affected: C, Z, V, N
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    add_with_carry(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Carry clear means borrow. Flags affected: C, Z, V, N
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    subtract_with_borrow(cpu, value);
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.a &= value;
    cpu.regs.set_zn(cpu.regs.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.a |= value;
    cpu.regs.set_zn(cpu.regs.a);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.a ^= value;
    cpu.regs.set_zn(cpu.regs.a);
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A & M; N and V are copied from bits 7 and 6 of M.
/// The accumulator is not modified.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.set_flag(StatusFlags::ZERO, cpu.regs.a & value == 0);
    cpu.regs.set_flag(StatusFlags::NEGATIVE, value & 0x80 != 0);
    cpu.regs.set_flag(StatusFlags::OVERFLOW, value & 0x40 != 0);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let register = cpu.regs.a;
    compare(cpu, register, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let register = cpu.regs.x;
    compare(cpu, register, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let register = cpu.regs.y;
    compare(cpu, register, value);
}

/// `register - value` without storing: C if register >= value (unsigned),
/// Z if equal, N from bit 7 of the difference.
pub(crate) fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    cpu.regs.set_flag(StatusFlags::CARRY, register >= value);
    cpu.regs.set_zn(result);
}

fn decimal_active<M: MemoryBus>(cpu: &CPU<M>) -> bool {
    cpu.regs.flag(StatusFlags::DECIMAL) && cpu.config.variant.decimal_enabled()
}

/// A + value + C into A, binary or BCD depending on the D flag.
pub(crate) fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let carry_in = cpu.regs.flag(StatusFlags::CARRY) as u16;
    let binary = a as u16 + value as u16 + carry_in;

    if !decimal_active(cpu) {
        let result = binary as u8;
        cpu.regs.set_flag(StatusFlags::CARRY, binary > 0xFF);
        // Both inputs share a sign that the result does not
        cpu.regs
            .set_flag(StatusFlags::OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);
        cpu.regs.set_zn(result);
        cpu.regs.a = result;
        return;
    }

    let mut low = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in;
    if low >= 0x0A {
        low = ((low + 0x06) & 0x0F) + 0x10;
    }

    let mut sum = (a & 0xF0) as u16 + (value & 0xF0) as u16 + low;
    let signed = (a & 0xF0) as i8 as i16 + (value & 0xF0) as i8 as i16 + low as i16;

    cpu.regs.set_flag(StatusFlags::ZERO, binary & 0xFF == 0);
    cpu.regs.set_flag(StatusFlags::NEGATIVE, sum & 0x80 != 0);
    cpu.regs
        .set_flag(StatusFlags::OVERFLOW, !(-128..=127).contains(&signed));

    if sum >= 0xA0 {
        sum += 0x60;
    }

    cpu.regs.set_flag(StatusFlags::CARRY, sum >= 0x100);
    cpu.regs.a = sum as u8;
}

/// A - value - !C into A. Binary SBC is ADC of the one's complement.
pub(crate) fn subtract_with_borrow<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let carry_in = cpu.regs.flag(StatusFlags::CARRY);

    let inverted = !value;
    let binary = a as u16 + inverted as u16 + carry_in as u16;
    let result = binary as u8;

    cpu.regs.set_flag(StatusFlags::CARRY, binary > 0xFF);
    cpu.regs
        .set_flag(StatusFlags::OVERFLOW, (a ^ result) & (inverted ^ result) & 0x80 != 0);
    cpu.regs.set_zn(result);

    if !decimal_active(cpu) {
        cpu.regs.a = result;
        return;
    }

    let borrow = !carry_in as i16;
    let mut low = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    if low < 0 {
        low = ((low - 0x06) & 0x0F) - 0x10;
    }

    let mut difference = (a & 0xF0) as i16 - (value & 0xF0) as i16 + low;
    if difference < 0 {
        difference -= 0x60;
    }

    cpu.regs.a = difference as u8;
}
