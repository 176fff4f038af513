//! # Status Flag Manipulation Instructions
//!
//! - CLC / SEC: Carry
//! - CLI / SEI: Interrupt disable
//! - CLD / SED: Decimal mode
//! - CLV: Overflow (there is no SEV)
//!
//! These use implied addressing, take 2 cycles and touch nothing but their flag.

use crate::registers::StatusFlags;
use crate::{MemoryBus, CPU};

pub(crate) fn clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(StatusFlags::CARRY, false);
}

pub(crate) fn sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(StatusFlags::CARRY, true);
}

pub(crate) fn cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(StatusFlags::INTERRUPT_DISABLE, false);
}

pub(crate) fn sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(StatusFlags::INTERRUPT_DISABLE, true);
}

pub(crate) fn cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(StatusFlags::DECIMAL, false);
}

pub(crate) fn sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(StatusFlags::DECIMAL, true);
}

pub(crate) fn clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.set_flag(StatusFlags::OVERFLOW, false);
}
