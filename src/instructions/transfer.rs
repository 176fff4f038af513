//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! All update Z and N from the copied value except TXS, which affects no flags.

use crate::{MemoryBus, CPU};

pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.a;
    cpu.regs.set_zn(cpu.regs.x);
}

pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.y = cpu.regs.a;
    cpu.regs.set_zn(cpu.regs.y);
}

pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.a = cpu.regs.x;
    cpu.regs.set_zn(cpu.regs.a);
}

pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.a = cpu.regs.y;
    cpu.regs.set_zn(cpu.regs.a);
}

pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.x = cpu.regs.sp;
    cpu.regs.set_zn(cpu.regs.x);
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Unlike the other transfers, TXS leaves every flag alone.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.sp = cpu.regs.x;
}
