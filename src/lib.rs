//! # 6502 CPU Emulator Core
//!
//! A cycle-counted NMOS 6502 CPU emulator with a trait-based memory bus.
//!
//! The crate emulates the MOS Technology 6502 (and the Ricoh 2A03 variant used
//! in the NES): all 151 documented opcodes, the undocumented NMOS opcodes on
//! request, decimal mode, page-crossing penalties and the reset/IRQ/NMI
//! sequences. The host owns the clock and drives the CPU one pulse at a time.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//!
//! // Reset vector -> 0x8000
//! memory.write(0xFFFC, 0x00);
//! memory.write(0xFFFD, 0x80);
//!
//! // LDA #$05; ADC #$03
//! memory.load(0x8000, &[0xA9, 0x05, 0x69, 0x03]);
//!
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//! assert!(cpu.flag_i());
//!
//! for _ in 0..4 {
//!     cpu.step();
//! }
//!
//! assert_eq!(cpu.a(), 0x08);
//! assert_eq!(cpu.pc(), 0x8004);
//! assert_eq!(cpu.cycles(), 4);
//! assert!(cpu.is_instruction_boundary());
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the clock-driven execution loop
//! - `registers` - Register file and status flags
//! - `addressing` - Addressing modes and effective address resolution
//! - `opcodes` - The 256-entry opcode metadata table
//! - `interrupts` - Reset, IRQ and NMI sequences
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `config` - CPU variant and undocumented-opcode policy
//!
//! ## Logging
//!
//! The core logs through the `log` facade: every executed instruction at
//! `trace`, interrupt sequences and BRK at `debug`, and a JAM at `warn`. The
//! host picks the logger.

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand, Resolved};
pub use config::{ConfigError, CpuConfig, IllegalOpcodes, Variant};
pub use cpu::{CPU, ILLEGAL_NOP_CYCLES};
pub use interrupts::{Interrupt, INTERRUPT_CYCLES, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{validate_table, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use registers::{Registers, StatusFlags};
