//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.

use crate::{MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.regs.a;
    cpu.push(value);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy always has Break and bit 5 set.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.regs.p.pushed_by_instruction();
    cpu.push(status);
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull();
    cpu.regs.a = value;
    cpu.regs.set_zn(value);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// The six real flags are restored verbatim; Break and bit 5 of the pulled
/// byte are ignored.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let pulled = cpu.pull();
    cpu.regs.p = cpu.regs.p.restored_from(pulled);
}
