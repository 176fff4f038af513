//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump (absolute, or indirect with the NMOS $xxFF page-wrap bug,
//!   which the resolver reproduces)
//! - JSR / RTS: Call and return
//! - RTI: Return from interrupt
//! - BRK: Force interrupt
//! - NOP: No operation
//!
//! JSR pushes the address of its own last byte (return address - 1), high
//! byte first; RTS pulls it and adds one.
//!
//! BRK is a software interrupt that:
//! 1. Pushes PC+2 to the stack (high byte first, then low byte)
//! 2. Pushes processor status to stack with B flag set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F

use log::debug;

use crate::addressing::Operand;
use crate::interrupts::IRQ_VECTOR;
use crate::registers::StatusFlags;
use crate::{MemoryBus, CPU};

/// Executes the JMP (Jump) instruction. No flags are affected.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address(target) = operand {
        cpu.regs.pc = target;
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    // PC already points past the two operand bytes
    let return_address = cpu.regs.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    jmp(cpu, operand);
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.regs.pc = cpu.pull_word().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls status (ignoring Break and bit 5) then PC. Unlike RTS the pulled PC
/// is used as is.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let pulled = cpu.pull();
    cpu.regs.p = cpu.regs.p.restored_from(pulled);
    cpu.regs.pc = cpu.pull_word();
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK is one byte long but skips a padding byte: the pushed return address
/// is the opcode address + 2.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    let return_address = cpu.regs.pc.wrapping_add(1);
    cpu.push_word(return_address);

    let status = cpu.regs.p.pushed_by_instruction();
    cpu.push(status);

    cpu.regs.set_flag(StatusFlags::INTERRUPT_DISABLE, true);
    cpu.regs.pc = cpu.read_word(IRQ_VECTOR);

    debug!(
        "BRK: return ${:04X}, handler ${:04X}",
        return_address, cpu.regs.pc
    );
}

/// Executes NOP.
///
/// The undocumented NOPs with an operand still read it, as the hardware does.
pub(crate) fn nop<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Operand::Address(_) = operand {
        cpu.read_operand(operand);
    }
}
