//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the clock-driven fetch-decode-execute loop.
//!
//! ## Execution Model
//!
//! The host drives the CPU one clock pulse at a time with [`CPU::step`]. On
//! the pulse that starts an instruction the whole instruction executes
//! atomically and the CPU records how many cycles it costs; the following
//! pulses only count that cost down. A host sampling registers or the bus
//! between pulses therefore sees the same total elapsed time as the real part,
//! which is what cycle-counted peripherals rely on.
//!
//! - `step()`: advance one clock pulse
//! - `step_instruction()`: run to the end of the current instruction
//! - `run_for_cycles()`: run whole instructions until a cycle budget is spent
//!
//! Interrupt requests (`reset()`, `irq()`, `nmi()`) are latched and taken at
//! the next instruction boundary; see the `interrupts` module.

use log::{trace, warn};

use crate::addressing::Operand;
use crate::config::{ConfigError, CpuConfig, IllegalOpcodes};
use crate::instructions;
use crate::interrupts::{PendingInterrupts, RESET_VECTOR};
use crate::opcodes::{validate_table, OPCODE_TABLE};
use crate::registers::{Registers, StatusFlags};
use crate::MemoryBus;

/// Cycles charged for an undocumented opcode when they are treated as NOPs.
pub const ILLEGAL_NOP_CYCLES: u8 = 2;

/// 6502 CPU state and execution context.
///
/// The CPU is generic over the memory implementation via the `MemoryBus`
/// trait. Pass `&mut bus` instead of `bus` to keep ownership on the host side.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
///
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i()); // Interrupt disable set on reset
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Programmer-visible registers
    pub(crate) regs: Registers,

    /// Variant and undocumented-opcode policy
    pub(crate) config: CpuConfig,

    /// Total clock pulses since construction
    pub(crate) cycles: u64,

    /// Pulses still owed by the instruction or interrupt sequence in flight
    pub(crate) remaining: u8,

    /// Latched interrupt requests
    pub(crate) pending: PendingInterrupts,

    /// Set by a JAM opcode; only reset clears it
    pub(crate) jammed: bool,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new NMOS 6502 with the default configuration.
    ///
    /// The power-on reset is applied immediately: PC is loaded from the reset
    /// vector at 0xFFFC/0xFFFD, SP is 0xFD, only I (and the unused bit) are set
    /// in P, A/X/Y are zero, and no cycles have elapsed.
    pub fn new(memory: M) -> Self {
        debug_assert!(validate_table().is_ok());
        Self::build(memory, CpuConfig::default())
    }

    /// Creates a CPU with an explicit configuration.
    ///
    /// The opcode table is checked before the CPU is built.
    ///
    /// ```
    /// use cpu6502::{CPU, CpuConfig, FlatMemory, Variant};
    ///
    /// let config = CpuConfig::default().with_variant(Variant::Ricoh2A03);
    /// let cpu = CPU::with_config(FlatMemory::new(), config).unwrap();
    /// assert_eq!(cpu.config().variant, Variant::Ricoh2A03);
    /// ```
    pub fn with_config(memory: M, config: CpuConfig) -> Result<Self, ConfigError> {
        validate_table()?;
        Ok(Self::build(memory, config))
    }

    fn build(mut memory: M, config: CpuConfig) -> Self {
        let pc_low = memory.read(RESET_VECTOR) as u16;
        let pc_high = memory.read(RESET_VECTOR.wrapping_add(1)) as u16;

        Self {
            regs: Registers::power_on((pc_high << 8) | pc_low),
            config,
            cycles: 0,
            remaining: 0,
            pending: PendingInterrupts::default(),
            jammed: false,
            memory,
        }
    }

    /// Advances the CPU by one clock pulse.
    ///
    /// If an instruction is still in flight the pulse only counts down its
    /// remaining cycles. Otherwise a pending interrupt sequence starts, or the
    /// next instruction is fetched and executed.
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFD, 0x80);
    /// mem.load(0x8000, &[0xA9, 0x05]); // LDA #$05 (2 cycles)
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.step();
    /// assert_eq!(cpu.a(), 0x05);
    /// assert!(!cpu.is_instruction_boundary());
    /// cpu.step();
    /// assert!(cpu.is_instruction_boundary());
    /// ```
    pub fn step(&mut self) {
        self.cycles += 1;

        if self.remaining > 0 {
            self.remaining -= 1;
            return;
        }

        let total = self.begin_next();
        self.remaining = total.saturating_sub(1);
    }

    /// Runs clock pulses until the instruction in flight has finished.
    ///
    /// At a boundary this executes exactly one instruction (or interrupt
    /// sequence). Returns the number of cycles consumed.
    pub fn step_instruction(&mut self) -> u64 {
        let start = self.cycles;

        self.step();
        while self.remaining > 0 {
            self.step();
        }

        self.cycles - start
    }

    /// Runs whole instructions until at least `cycle_budget` cycles elapse.
    ///
    /// Returns the actual number of cycles consumed, which may overshoot the
    /// budget by part of an instruction. Useful for frame-locked hosts (e.g.
    /// 29780 cycles per NTSC NES frame).
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start = self.cycles;
        let target = start + cycle_budget;

        while self.cycles < target {
            self.step_instruction();
        }

        self.cycles - start
    }

    /// Starts whatever comes next at an instruction boundary and returns its
    /// total cycle cost.
    fn begin_next(&mut self) -> u8 {
        if let Some(interrupt) = self.next_interrupt() {
            return self.service_interrupt(interrupt);
        }

        if self.jammed {
            return 1;
        }

        self.execute_next_instruction()
    }

    fn execute_next_instruction(&mut self) -> u8 {
        let pc = self.regs.pc;
        let opcode = self.fetch_byte();
        let metadata = OPCODE_TABLE[opcode as usize];

        trace!(
            "{:04X}  {:02X}  {} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            pc,
            opcode,
            metadata.mnemonic,
            self.regs.a,
            self.regs.x,
            self.regs.y,
            self.regs.p.bits(),
            self.regs.sp,
            self.cycles - 1
        );

        if metadata.illegal && self.config.illegal_opcodes == IllegalOpcodes::Nop {
            return ILLEGAL_NOP_CYCLES;
        }

        let resolved = self.resolve(metadata.addressing_mode);
        let extra = instructions::execute(self, metadata.mnemonic, resolved.operand);

        if self.jammed {
            warn!("CPU jammed by opcode 0x{:02X} at ${:04X}", opcode, pc);
        }

        let mut total = metadata.base_cycles + extra;
        if metadata.page_penalty && resolved.page_crossed {
            total += 1;
        }
        total
    }

    // ========== Bus Helpers ==========

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC past it.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian word (vectors live at fixed, non-wrapping addresses).
    pub(crate) fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    pub(crate) fn read_operand(&mut self, operand: Operand) -> u8 {
        match operand {
            Operand::Address(addr) => self.memory.read(addr),
            Operand::Accumulator | Operand::Implied => self.regs.a,
        }
    }

    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Address(addr) => self.memory.write(addr, value),
            Operand::Accumulator | Operand::Implied => self.regs.a = value,
        }
    }

    pub(crate) fn push(&mut self, value: u8) {
        let addr = self.regs.stack_address();
        self.memory.write(addr, value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let addr = self.regs.stack_address();
        self.memory.read(addr)
    }

    /// Pushes high byte first, so the word reads little-endian on the stack.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// let cpu = CPU::new(FlatMemory::new());
    /// // I flag set (bit 2), bit 5 always 1
    /// assert_eq!(cpu.status(), 0b0010_0100);
    /// ```
    pub fn status(&self) -> u8 {
        self.regs.p.bits()
    }

    /// Returns the status register as flags.
    pub fn flags(&self) -> StatusFlags {
        self.regs.p
    }

    /// Returns true if every bit of `flag` is set.
    pub fn flag(&self, flag: StatusFlags) -> bool {
        self.regs.flag(flag)
    }

    /// Snapshot of the whole register file.
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    /// Returns the total number of clock pulses since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Pulses still owed by the instruction in flight.
    pub fn remaining_cycles(&self) -> u8 {
        self.remaining
    }

    /// True when the next `step()` will start a new instruction or interrupt.
    pub fn is_instruction_boundary(&self) -> bool {
        self.remaining == 0
    }

    /// True after a JAM opcode halted the CPU. Only `reset()` recovers.
    pub fn is_jammed(&self) -> bool {
        self.jammed
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.flag(StatusFlags::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.flag(StatusFlags::OVERFLOW)
    }

    /// Returns true if the Break flag is set in the live register.
    pub fn flag_b(&self) -> bool {
        self.regs.flag(StatusFlags::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.flag(StatusFlags::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.flag(StatusFlags::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.flag(StatusFlags::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.flag(StatusFlags::CARRY)
    }

    // ========== Setters (debuggers and test harnesses) ==========

    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Replaces the status register. Bit 5 stays set.
    pub fn set_status(&mut self, value: u8) {
        self.regs.p = StatusFlags::from_bits_retain(value) | StatusFlags::UNUSED;
    }

    /// Sets or clears the bits in `flag`.
    pub fn set_flag(&mut self, flag: StatusFlags, value: bool) {
        self.regs.set_flag(flag, value);
    }

    // ========== Memory Access ==========

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands the bus back.
    pub fn into_memory(self) -> M {
        self.memory
    }
}
