//! # Interrupt Sequences
//!
//! The 6502 has three externally triggered sequences, each of which loads the
//! program counter from a fixed little-endian vector:
//!
//! | Sequence | Vector        | Maskable by I |
//! |----------|---------------|---------------|
//! | NMI      | 0xFFFA/0xFFFB | no            |
//! | Reset    | 0xFFFC/0xFFFD | no            |
//! | IRQ      | 0xFFFE/0xFFFF | yes           |
//!
//! Requests are latched and only acted on at an instruction boundary, in
//! priority order reset, NMI, IRQ. IRQ and NMI push PC (high byte first) and
//! the status register with Break clear and bit 5 set, set I, and jump
//! through their vector. BRK shares the IRQ vector but is an instruction; see
//! `instructions::control`.
//!
//! Besides the latched `irq()` request the CPU samples the bus's
//! level-sensitive IRQ line (`MemoryBus::irq_active`) at every boundary.

use log::debug;

use crate::registers::{Registers, StatusFlags};
use crate::{MemoryBus, CPU};

/// NMI vector (low byte; high byte follows).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector (low byte; high byte follows).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector (low byte; high byte follows).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles taken by the reset, NMI and IRQ sequences.
pub const INTERRUPT_CYCLES: u8 = 7;

/// An externally triggered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    Reset,
    Nmi,
    Irq,
}

impl Interrupt {
    /// Address of the vector this sequence jumps through.
    pub const fn vector(self) -> u16 {
        match self {
            Interrupt::Reset => RESET_VECTOR,
            Interrupt::Nmi => NMI_VECTOR,
            Interrupt::Irq => IRQ_VECTOR,
        }
    }
}

/// Requests waiting for the next instruction boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PendingInterrupts {
    pub reset: bool,
    pub nmi: bool,
    pub irq: bool,
}

impl<M: MemoryBus> CPU<M> {
    /// Requests a reset once the current instruction completes.
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x90);
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.set_pc(0x1234);
    /// cpu.reset();
    /// cpu.step_instruction();
    ///
    /// assert_eq!(cpu.pc(), 0x9000);
    /// assert!(cpu.flag_i());
    /// ```
    pub fn reset(&mut self) {
        self.pending.reset = true;
    }

    /// Requests a maskable interrupt once the current instruction completes.
    ///
    /// The request is dropped if the I flag is set when the boundary is reached.
    pub fn irq(&mut self) {
        self.pending.irq = true;
    }

    /// Requests a non-maskable interrupt once the current instruction completes.
    pub fn nmi(&mut self) {
        self.pending.nmi = true;
    }

    /// Picks the sequence to run at this boundary, consuming its request.
    pub(crate) fn next_interrupt(&mut self) -> Option<Interrupt> {
        if self.pending.reset {
            self.pending = PendingInterrupts::default();
            return Some(Interrupt::Reset);
        }

        // A jammed CPU ignores everything but reset
        if self.jammed {
            return None;
        }

        if self.pending.nmi {
            self.pending.nmi = false;
            return Some(Interrupt::Nmi);
        }

        let irq = self.pending.irq || self.memory.irq_active();
        self.pending.irq = false;
        if irq && !self.regs.flag(StatusFlags::INTERRUPT_DISABLE) {
            return Some(Interrupt::Irq);
        }

        None
    }

    /// Runs `interrupt` and returns its cycle cost.
    pub(crate) fn service_interrupt(&mut self, interrupt: Interrupt) -> u8 {
        match interrupt {
            Interrupt::Reset => {
                let pc = self.read_word(RESET_VECTOR);
                self.regs = Registers::power_on(pc);
                self.jammed = false;
            }
            Interrupt::Nmi | Interrupt::Irq => {
                self.push_word(self.regs.pc);
                let status = self.regs.p.pushed_by_interrupt();
                self.push(status);
                self.regs.set_flag(StatusFlags::INTERRUPT_DISABLE, true);
                self.regs.pc = self.read_word(interrupt.vector());
            }
        }

        debug!(
            "{:?} sequence: PC=${:04X} SP=${:02X} P=${:02X}",
            interrupt,
            self.regs.pc,
            self.regs.sp,
            self.regs.p.bits()
        );

        INTERRUPT_CYCLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.load(NMI_VECTOR, &[0x00, 0xA0, 0x00, 0x80, 0x00, 0x90]);
        mem.load(0x8000, &[0xEA; 8]);
        CPU::new(mem)
    }

    #[test]
    fn test_vectors() {
        assert_eq!(Interrupt::Nmi.vector(), 0xFFFA);
        assert_eq!(Interrupt::Reset.vector(), 0xFFFC);
        assert_eq!(Interrupt::Irq.vector(), 0xFFFE);
    }

    #[test]
    fn test_reset_has_priority() {
        let mut cpu = setup_cpu();
        cpu.nmi();
        cpu.reset();

        assert_eq!(cpu.next_interrupt(), Some(Interrupt::Reset));
        // Reset discards the other requests
        assert_eq!(cpu.next_interrupt(), None);
    }

    #[test]
    fn test_nmi_before_irq() {
        let mut cpu = setup_cpu();
        cpu.set_flag(StatusFlags::INTERRUPT_DISABLE, false);
        cpu.irq();
        cpu.nmi();

        assert_eq!(cpu.next_interrupt(), Some(Interrupt::Nmi));
    }

    #[test]
    fn test_masked_irq_is_dropped() {
        let mut cpu = setup_cpu();
        cpu.irq();

        assert_eq!(cpu.next_interrupt(), None);
        cpu.set_flag(StatusFlags::INTERRUPT_DISABLE, false);
        assert_eq!(cpu.next_interrupt(), None);
    }

    #[test]
    fn test_irq_sequence_pushes_state() {
        let mut cpu = setup_cpu();
        cpu.set_flag(StatusFlags::INTERRUPT_DISABLE, false);
        cpu.set_flag(StatusFlags::CARRY, true);
        cpu.irq();

        assert_eq!(cpu.step_instruction(), 7);
        assert_eq!(cpu.pc(), 0x9000);
        assert_eq!(cpu.sp(), 0xFA);
        assert_eq!(cpu.memory().peek(0x01FD), 0x80);
        assert_eq!(cpu.memory().peek(0x01FC), 0x00);
        assert_eq!(cpu.memory().peek(0x01FB), 0b0010_0001);
        assert!(cpu.flag_i());
    }
}
