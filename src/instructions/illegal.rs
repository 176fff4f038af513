//! # Undocumented NMOS Opcodes
//!
//! Only reached when the CPU is configured with `IllegalOpcodes::Emulate`.
//! Most of these are two documented operations fused onto one decode (a
//! read-modify-write followed by an ALU op, or a load into two registers).
//!
//! - SLO, RLA, SRE, RRA: shift/rotate memory, then ORA/AND/EOR/ADC
//! - DCP, ISC: DEC then CMP, INC then SBC
//! - SAX, LAX: store A & X, load A and X
//! - ANC, ALR, ARR, SBX: immediate AND combined with a shift or subtract
//! - LAS: A = X = SP = M & SP
//! - ANE, LXA: unstable on real parts; modelled with the common magic 0xEE
//! - SHA, SHX, SHY, TAS: store a register ANDed with (base high byte + 1)
//! - JAM: halts the CPU until reset
//!
//! Behaviour follows the "NMOS 6510 Unintended Opcodes" reference.

use crate::addressing::{crosses_page, Operand};
use crate::instructions::alu::{add_with_carry, compare, subtract_with_borrow};
use crate::instructions::shifts::{
    read_modify_write, rotate_left, rotate_right, shift_left, shift_right,
};
use crate::registers::StatusFlags;
use crate::{MemoryBus, CPU};

/// Value the unstable ANE/LXA opcodes OR into A before masking.
pub const UNSTABLE_MAGIC: u8 = 0xEE;

pub(crate) fn slo<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let shifted = read_modify_write(cpu, operand, shift_left);
    cpu.regs.a |= shifted;
    cpu.regs.set_zn(cpu.regs.a);
}

pub(crate) fn rla<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let rotated = read_modify_write(cpu, operand, rotate_left);
    cpu.regs.a &= rotated;
    cpu.regs.set_zn(cpu.regs.a);
}

pub(crate) fn sre<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let shifted = read_modify_write(cpu, operand, shift_right);
    cpu.regs.a ^= shifted;
    cpu.regs.set_zn(cpu.regs.a);
}

/// ROR memory, then ADC it (carry-in is the bit rotated out).
pub(crate) fn rra<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let rotated = read_modify_write(cpu, operand, rotate_right);
    add_with_carry(cpu, rotated);
}

pub(crate) fn sax<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.regs.a & cpu.regs.x;
    cpu.write_operand(operand, value);
}

pub(crate) fn lax<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.a = value;
    cpu.regs.x = value;
    cpu.regs.set_zn(value);
}

pub(crate) fn dcp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand).wrapping_sub(1);
    cpu.write_operand(operand, value);
    let a = cpu.regs.a;
    compare(cpu, a, value);
}

pub(crate) fn isc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand).wrapping_add(1);
    cpu.write_operand(operand, value);
    subtract_with_borrow(cpu, value);
}

/// AND immediate; Carry copies the resulting N.
pub(crate) fn anc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.a &= value;
    cpu.regs.set_zn(cpu.regs.a);
    cpu.regs
        .set_flag(StatusFlags::CARRY, cpu.regs.a & 0x80 != 0);
}

/// AND immediate, then LSR A.
pub(crate) fn alr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = shift_right(&mut cpu.regs.p, cpu.regs.a & value);
    cpu.regs.a = result;
    cpu.regs.set_zn(result);
}

/// AND immediate, then ROR A with flags from the adder path.
///
/// Binary: C = bit 6, V = bit 6 ^ bit 5 of the result. In decimal mode the
/// NMOS part also applies a BCD fix-up to each nibble.
pub(crate) fn arr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let and = cpu.regs.a & value;
    let carry_in = cpu.regs.flag(StatusFlags::CARRY) as u8;
    let mut result = (and >> 1) | (carry_in << 7);

    let decimal =
        cpu.regs.flag(StatusFlags::DECIMAL) && cpu.config.variant.decimal_enabled();

    if !decimal {
        cpu.regs.set_zn(result);
        cpu.regs.set_flag(StatusFlags::CARRY, result & 0x40 != 0);
        cpu.regs
            .set_flag(StatusFlags::OVERFLOW, ((result >> 6) ^ (result >> 5)) & 0x01 != 0);
        cpu.regs.a = result;
        return;
    }

    cpu.regs.set_zn(result);
    cpu.regs
        .set_flag(StatusFlags::OVERFLOW, (and ^ result) & 0x40 != 0);

    let low = and & 0x0F;
    let high = and >> 4;

    if low + (low & 0x01) > 5 {
        result = (result & 0xF0) | (result.wrapping_add(6) & 0x0F);
    }

    let carry = high + (high & 0x01) > 5;
    if carry {
        result = result.wrapping_add(0x60);
    }

    cpu.regs.set_flag(StatusFlags::CARRY, carry);
    cpu.regs.a = result;
}

pub(crate) fn ane<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.a = (cpu.regs.a | UNSTABLE_MAGIC) & cpu.regs.x & value;
    cpu.regs.set_zn(cpu.regs.a);
}

pub(crate) fn lxa<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = (cpu.regs.a | UNSTABLE_MAGIC) & value;
    cpu.regs.a = result;
    cpu.regs.x = result;
    cpu.regs.set_zn(result);
}

/// X = (A & X) - imm, with CMP-style flags and no borrow-in.
pub(crate) fn sbx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let and = cpu.regs.a & cpu.regs.x;
    compare(cpu, and, value);
    cpu.regs.x = and.wrapping_sub(value);
}

pub(crate) fn las<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand) & cpu.regs.sp;
    cpu.regs.a = value;
    cpu.regs.x = value;
    cpu.regs.sp = value;
    cpu.regs.set_zn(value);
}

pub(crate) fn tas<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.regs.sp = cpu.regs.a & cpu.regs.x;
    let (value, index) = (cpu.regs.sp, cpu.regs.y);
    store_and_high(cpu, operand, value, index);
}

pub(crate) fn sha<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let (value, index) = (cpu.regs.a & cpu.regs.x, cpu.regs.y);
    store_and_high(cpu, operand, value, index);
}

pub(crate) fn shx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let (value, index) = (cpu.regs.x, cpu.regs.y);
    store_and_high(cpu, operand, value, index);
}

pub(crate) fn shy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let (value, index) = (cpu.regs.y, cpu.regs.x);
    store_and_high(cpu, operand, value, index);
}

/// Stores `value & (H + 1)`, H being the high byte of the unindexed base.
///
/// When indexing crossed a page the stored value also replaces the high byte
/// of the target address.
fn store_and_high<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, value: u8, index: u8) {
    let Operand::Address(addr) = operand else {
        return;
    };

    let base = addr.wrapping_sub(index as u16);
    let high = (base >> 8) as u8;
    let stored = value & high.wrapping_add(1);

    let target = if crosses_page(base, addr) {
        ((stored as u16) << 8) | (addr & 0x00FF)
    } else {
        addr
    };

    cpu.memory.write(target, stored);
}

/// Halts the CPU. PC stays on the JAM opcode.
pub(crate) fn jam<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.pc = cpu.regs.pc.wrapping_sub(1);
    cpu.jammed = true;
}
