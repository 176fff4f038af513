//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads set Z and N from the loaded value. Stores affect no flags and never
//! pay the indexed page-crossing penalty (it is already in their base cost).

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.a = value;
    cpu.regs.set_zn(value);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.x = value;
    cpu.regs.set_zn(value);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    cpu.regs.y = value;
    cpu.regs.set_zn(value);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.regs.a;
    cpu.write_operand(operand, value);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.regs.x;
    cpu.write_operand(operand, value);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.regs.y;
    cpu.write_operand(operand, value);
}
