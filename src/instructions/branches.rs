//! # Branch Instructions
//!
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC and BVS each test one flag (the
//! dispatcher evaluates the condition) and share one implementation.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! measured from the instruction that follows the branch.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::addressing::{crosses_page, Operand};
use crate::{MemoryBus, CPU};

/// Branches if `condition` holds and returns the cycles owed on top of the
/// base 2.
pub(crate) fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand, condition: bool) -> u8 {
    // The resolver has already stepped PC past the offset byte
    let offset = cpu.read_operand(operand) as i8;

    if !condition {
        return 0;
    }

    let next = cpu.regs.pc;
    let target = next.wrapping_add_signed(offset as i16);
    cpu.regs.pc = target;

    if crosses_page(next, target) {
        2
    } else {
        1
    }
}
