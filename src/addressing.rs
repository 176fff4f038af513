//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns the operand bytes following an opcode into an
//! effective address.
//!
//! Every resolver consumes its operand bytes from the program counter
//! (advancing it) and reports whether index arithmetic crossed a page, which
//! is what the engine charges the extra read cycle for.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Where an instruction's operand lives once its addressing mode is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand at all.
    Implied,
    /// The accumulator is the operand (shifts and rotates).
    Accumulator,
    /// A byte in memory. For Relative mode this is the offset byte itself.
    Address(u16),
}

/// Output of the resolver: the operand plus whether a page was crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub operand: Operand,
    pub page_crossed: bool,
}

impl Resolved {
    fn at(addr: u16) -> Self {
        Self {
            operand: Operand::Address(addr),
            page_crossed: false,
        }
    }

    fn indexed(base: u16, index: u8) -> Self {
        let addr = base.wrapping_add(index as u16);
        Self {
            operand: Operand::Address(addr),
            page_crossed: crosses_page(base, addr),
        }
    }
}

/// True if `a` and `b` lie in different 256-byte pages.
pub fn crosses_page(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

/// Reads a little-endian pointer whose high byte wraps within the pointer's page.
///
/// This is both the JMP ($xxFF) bug and the zero-page pointer wrap of the
/// (zp,X) and (zp),Y modes.
pub(crate) fn read_word_page_wrapped<M: MemoryBus>(memory: &mut M, ptr: u16) -> u16 {
    let lo = memory.read(ptr) as u16;
    let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
    let hi = memory.read(hi_addr) as u16;
    (hi << 8) | lo
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves `mode` against the bytes at the program counter.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> Resolved {
        match mode {
            AddressingMode::Implicit => Resolved {
                operand: Operand::Implied,
                page_crossed: false,
            },
            AddressingMode::Accumulator => Resolved {
                operand: Operand::Accumulator,
                page_crossed: false,
            },
            AddressingMode::Immediate | AddressingMode::Relative => self.resolve_immediate(),
            AddressingMode::ZeroPage => self.resolve_zero_page(0),
            AddressingMode::ZeroPageX => self.resolve_zero_page(self.regs.x),
            AddressingMode::ZeroPageY => self.resolve_zero_page(self.regs.y),
            AddressingMode::Absolute => {
                let addr = self.fetch_word();
                Resolved::at(addr)
            }
            AddressingMode::AbsoluteX => self.resolve_absolute_indexed(self.regs.x),
            AddressingMode::AbsoluteY => self.resolve_absolute_indexed(self.regs.y),
            AddressingMode::Indirect => self.resolve_indirect(),
            AddressingMode::IndirectX => self.resolve_indexed_indirect(),
            AddressingMode::IndirectY => self.resolve_indirect_indexed(),
        }
    }

    /// The operand byte itself is the effective address.
    fn resolve_immediate(&mut self) -> Resolved {
        let addr = self.regs.pc;
        self.regs.pc = self.regs.pc.wrapping_add(1);
        Resolved::at(addr)
    }

    /// Zero page, optionally indexed. The sum wraps inside page 0.
    fn resolve_zero_page(&mut self, index: u8) -> Resolved {
        let zp = self.fetch_byte().wrapping_add(index);
        Resolved::at(zp as u16)
    }

    fn resolve_absolute_indexed(&mut self, index: u8) -> Resolved {
        let base = self.fetch_word();
        Resolved::indexed(base, index)
    }

    /// JMP ($xxxx), including the NMOS page-wrap bug on $xxFF pointers.
    fn resolve_indirect(&mut self) -> Resolved {
        let ptr = self.fetch_word();
        let target = read_word_page_wrapped(&mut self.memory, ptr);
        Resolved::at(target)
    }

    /// ($zp,X): pointer = (zp + X) mod 256, read from zero page.
    fn resolve_indexed_indirect(&mut self) -> Resolved {
        let ptr = self.fetch_byte().wrapping_add(self.regs.x);
        let addr = read_word_page_wrapped(&mut self.memory, ptr as u16);
        Resolved::at(addr)
    }

    /// ($zp),Y: base read from zero page, then Y added across the full range.
    fn resolve_indirect_indexed(&mut self) -> Resolved {
        let ptr = self.fetch_byte();
        let base = read_word_page_wrapped(&mut self.memory, ptr as u16);
        Resolved::indexed(base, self.regs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn cpu_at(pc: u16, bytes: &[u8]) -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.load(pc, bytes);
        let mut cpu = CPU::new(mem);
        cpu.set_pc(pc);
        cpu
    }

    #[test]
    fn test_operand_bytes() {
        assert_eq!(AddressingMode::Implicit.operand_bytes(), 0);
        assert_eq!(AddressingMode::IndirectY.operand_bytes(), 1);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
    }

    #[test]
    fn test_immediate_points_at_operand_byte() {
        let mut cpu = cpu_at(0x0200, &[0x42]);
        let r = cpu.resolve(AddressingMode::Immediate);
        assert_eq!(r.operand, Operand::Address(0x0200));
        assert_eq!(cpu.pc(), 0x0201);
    }

    #[test]
    fn test_zero_page_x_wraps() {
        let mut cpu = cpu_at(0x0200, &[0xF0]);
        cpu.set_x(0x20);
        let r = cpu.resolve(AddressingMode::ZeroPageX);
        assert_eq!(r.operand, Operand::Address(0x0010));
        assert!(!r.page_crossed);
    }

    #[test]
    fn test_absolute_x_page_cross() {
        let mut cpu = cpu_at(0x0200, &[0xFF, 0x20]);
        cpu.set_x(0x01);
        let r = cpu.resolve(AddressingMode::AbsoluteX);
        assert_eq!(r.operand, Operand::Address(0x2100));
        assert!(r.page_crossed);
        assert_eq!(cpu.pc(), 0x0202);
    }

    #[test]
    fn test_indirect_page_wrap_bug() {
        let mut cpu = cpu_at(0x0200, &[0xFF, 0x30]);
        cpu.memory_mut().write(0x30FF, 0x34);
        cpu.memory_mut().write(0x3000, 0x12);
        cpu.memory_mut().write(0x3100, 0x99);

        let r = cpu.resolve(AddressingMode::Indirect);
        assert_eq!(r.operand, Operand::Address(0x1234));
    }

    #[test]
    fn test_indexed_indirect_pointer_wraps_in_zero_page() {
        let mut cpu = cpu_at(0x0200, &[0xFE]);
        cpu.set_x(0x01);
        cpu.memory_mut().write(0x00FF, 0x00);
        cpu.memory_mut().write(0x0000, 0x40);

        let r = cpu.resolve(AddressingMode::IndirectX);
        assert_eq!(r.operand, Operand::Address(0x4000));
    }

    #[test]
    fn test_indirect_indexed_page_cross() {
        let mut cpu = cpu_at(0x0200, &[0x10]);
        cpu.set_y(0x10);
        cpu.memory_mut().write(0x0010, 0xF8);
        cpu.memory_mut().write(0x0011, 0x40);

        let r = cpu.resolve(AddressingMode::IndirectY);
        assert_eq!(r.operand, Operand::Address(0x4108));
        assert!(r.page_crossed);
    }
}
