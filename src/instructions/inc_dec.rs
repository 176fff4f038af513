//! # Increment and Decrement Instructions
//!
//! - INC / DEC: memory
//! - INX / INY / DEX / DEY: index registers
//!
//! All wrap at 0xFF/0x00, update Z and N, and never touch Carry.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand).wrapping_add(1);
    cpu.write_operand(operand, value);
    cpu.regs.set_zn(value);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand).wrapping_sub(1);
    cpu.write_operand(operand, value);
    cpu.regs.set_zn(value);
}

pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.set_zn(cpu.regs.x);
}

pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.set_zn(cpu.regs.y);
}

pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.set_zn(cpu.regs.x);
}

pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.set_zn(cpu.regs.y);
}
