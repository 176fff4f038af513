//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through Carry
//! - ROR: Rotate Right through Carry
//!
//! Each works on the accumulator (Accumulator mode) or on memory. The bit
//! shifted out lands in Carry; the rotates feed the old Carry into the
//! vacated bit. Z and N follow the result.

use crate::addressing::Operand;
use crate::registers::StatusFlags;
use crate::{MemoryBus, CPU};

pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    read_modify_write(cpu, operand, shift_left);
}

pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    read_modify_write(cpu, operand, shift_right);
}

pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    read_modify_write(cpu, operand, rotate_left);
}

pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    read_modify_write(cpu, operand, rotate_right);
}

/// Applies `op` to the operand in place and returns the new value.
pub(crate) fn read_modify_write<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operand: Operand,
    op: fn(&mut StatusFlags, u8) -> u8,
) -> u8 {
    let value = cpu.read_operand(operand);
    let result = op(&mut cpu.regs.p, value);
    cpu.write_operand(operand, result);
    cpu.regs.set_zn(result);
    result
}

pub(crate) fn shift_left(p: &mut StatusFlags, value: u8) -> u8 {
    p.set(StatusFlags::CARRY, value & 0x80 != 0);
    value << 1
}

pub(crate) fn shift_right(p: &mut StatusFlags, value: u8) -> u8 {
    p.set(StatusFlags::CARRY, value & 0x01 != 0);
    value >> 1
}

pub(crate) fn rotate_left(p: &mut StatusFlags, value: u8) -> u8 {
    let carry_in = p.contains(StatusFlags::CARRY) as u8;
    p.set(StatusFlags::CARRY, value & 0x80 != 0);
    (value << 1) | carry_in
}

pub(crate) fn rotate_right(p: &mut StatusFlags, value: u8) -> u8 {
    let carry_in = p.contains(StatusFlags::CARRY) as u8;
    p.set(StatusFlags::CARRY, value & 0x01 != 0);
    (value >> 1) | (carry_in << 7)
}
