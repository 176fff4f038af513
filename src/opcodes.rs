//! # Opcode Metadata Table
//!
//! The complete 256-entry opcode table: the single source of truth for what
//! every opcode byte means.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 undocumented opcodes** - The NMOS "illegal" set, flagged `illegal`
//!
//! Each entry records the mnemonic, the addressing mode, the base cycle cost
//! and whether an indexed page crossing costs an extra cycle. Instruction
//! length is derived from the addressing mode.

use crate::addressing::AddressingMode;
use crate::config::ConfigError;
use std::fmt;

/// Every instruction the NMOS 6502 decodes, documented or not.
#[allow(clippy::upper_case_acronyms)]
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    // Documented
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS, CLC,
    CLD, CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX, INY, JMP,
    JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA, PLP, ROL, ROR, RTI,
    RTS, SBC, SEC, SED, SEI, STA, STX, STY, TAX, TAY, TSX, TXA, TXS, TYA,

    // Undocumented
    /// ASL then ORA
    SLO,
    /// ROL then AND
    RLA,
    /// LSR then EOR
    SRE,
    /// ROR then ADC
    RRA,
    /// Store A & X
    SAX,
    /// Load A and X
    LAX,
    /// DEC then CMP
    DCP,
    /// INC then SBC
    ISC,
    /// AND, carry from bit 7
    ANC,
    /// AND then LSR
    ALR,
    /// AND then ROR with odd flags
    ARR,
    /// (A | magic) & X & imm (unstable)
    ANE,
    /// A = X = (A | magic) & imm (unstable)
    LXA,
    /// X = (A & X) - imm
    SBX,
    /// A = X = SP = mem & SP
    LAS,
    /// SP = A & X, store SP & (H + 1)
    TAS,
    /// Store A & X & (H + 1)
    SHA,
    /// Store X & (H + 1)
    SHX,
    /// Store Y & (H + 1)
    SHY,
    /// Halts the processor
    JAM,
}

impl Mnemonic {
    /// Three-letter assembler name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mnemonic::ADC => "ADC",
            Mnemonic::AND => "AND",
            Mnemonic::ASL => "ASL",
            Mnemonic::BCC => "BCC",
            Mnemonic::BCS => "BCS",
            Mnemonic::BEQ => "BEQ",
            Mnemonic::BIT => "BIT",
            Mnemonic::BMI => "BMI",
            Mnemonic::BNE => "BNE",
            Mnemonic::BPL => "BPL",
            Mnemonic::BRK => "BRK",
            Mnemonic::BVC => "BVC",
            Mnemonic::BVS => "BVS",
            Mnemonic::CLC => "CLC",
            Mnemonic::CLD => "CLD",
            Mnemonic::CLI => "CLI",
            Mnemonic::CLV => "CLV",
            Mnemonic::CMP => "CMP",
            Mnemonic::CPX => "CPX",
            Mnemonic::CPY => "CPY",
            Mnemonic::DEC => "DEC",
            Mnemonic::DEX => "DEX",
            Mnemonic::DEY => "DEY",
            Mnemonic::EOR => "EOR",
            Mnemonic::INC => "INC",
            Mnemonic::INX => "INX",
            Mnemonic::INY => "INY",
            Mnemonic::JMP => "JMP",
            Mnemonic::JSR => "JSR",
            Mnemonic::LDA => "LDA",
            Mnemonic::LDX => "LDX",
            Mnemonic::LDY => "LDY",
            Mnemonic::LSR => "LSR",
            Mnemonic::NOP => "NOP",
            Mnemonic::ORA => "ORA",
            Mnemonic::PHA => "PHA",
            Mnemonic::PHP => "PHP",
            Mnemonic::PLA => "PLA",
            Mnemonic::PLP => "PLP",
            Mnemonic::ROL => "ROL",
            Mnemonic::ROR => "ROR",
            Mnemonic::RTI => "RTI",
            Mnemonic::RTS => "RTS",
            Mnemonic::SBC => "SBC",
            Mnemonic::SEC => "SEC",
            Mnemonic::SED => "SED",
            Mnemonic::SEI => "SEI",
            Mnemonic::STA => "STA",
            Mnemonic::STX => "STX",
            Mnemonic::STY => "STY",
            Mnemonic::TAX => "TAX",
            Mnemonic::TAY => "TAY",
            Mnemonic::TSX => "TSX",
            Mnemonic::TXA => "TXA",
            Mnemonic::TXS => "TXS",
            Mnemonic::TYA => "TYA",
            Mnemonic::SLO => "SLO",
            Mnemonic::RLA => "RLA",
            Mnemonic::SRE => "SRE",
            Mnemonic::RRA => "RRA",
            Mnemonic::SAX => "SAX",
            Mnemonic::LAX => "LAX",
            Mnemonic::DCP => "DCP",
            Mnemonic::ISC => "ISC",
            Mnemonic::ANC => "ANC",
            Mnemonic::ALR => "ALR",
            Mnemonic::ARR => "ARR",
            Mnemonic::ANE => "ANE",
            Mnemonic::LXA => "LXA",
            Mnemonic::SBX => "SBX",
            Mnemonic::LAS => "LAS",
            Mnemonic::TAS => "TAS",
            Mnemonic::SHA => "SHA",
            Mnemonic::SHX => "SHX",
            Mnemonic::SHY => "SHY",
            Mnemonic::JAM => "JAM",
        }
    }

    /// True for the eight conditional branches.
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Mnemonic::BCC
                | Mnemonic::BCS
                | Mnemonic::BEQ
                | Mnemonic::BNE
                | Mnemonic::BMI
                | Mnemonic::BPL
                | Mnemonic::BVC
                | Mnemonic::BVS
        )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::LDA);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    pub base_cycles: u8,

    /// Whether an indexed page crossing adds one cycle.
    ///
    /// True for reads through AbsoluteX/AbsoluteY/IndirectY. Stores and
    /// read-modify-write instructions always pay the worst case in
    /// `base_cycles` instead.
    pub page_penalty: bool,

    /// Whether this is one of the undocumented NMOS opcodes.
    pub illegal: bool,
}

impl OpcodeMetadata {
    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.addressing_mode.operand_bytes()
    }

    const fn page_penalty(mut self) -> Self {
        self.page_penalty = true;
        self
    }

    const fn illegal(mut self) -> Self {
        self.illegal = true;
        self
    }
}

const fn op(mnemonic: Mnemonic, addressing_mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        page_penalty: false,
        illegal: false,
    }
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// ```
/// use cpu6502::{Mnemonic, OPCODE_TABLE};
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, Mnemonic::BRK);
/// assert_eq!(brk.base_cycles, 7);
///
/// let slo = &OPCODE_TABLE[0x07];
/// assert!(slo.illegal);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = {
    use AddressingMode::*;
    use Mnemonic::*;
    [
        op(BRK, Implicit, 7), // 0x00
        op(ORA, IndirectX, 6), // 0x01
        op(JAM, Implicit, 2).illegal(), // 0x02
        op(SLO, IndirectX, 8).illegal(), // 0x03
        op(NOP, ZeroPage, 3).illegal(), // 0x04
        op(ORA, ZeroPage, 3), // 0x05
        op(ASL, ZeroPage, 5), // 0x06
        op(SLO, ZeroPage, 5).illegal(), // 0x07
        op(PHP, Implicit, 3), // 0x08
        op(ORA, Immediate, 2), // 0x09
        op(ASL, Accumulator, 2), // 0x0A
        op(ANC, Immediate, 2).illegal(), // 0x0B
        op(NOP, Absolute, 4).illegal(), // 0x0C
        op(ORA, Absolute, 4), // 0x0D
        op(ASL, Absolute, 6), // 0x0E
        op(SLO, Absolute, 6).illegal(), // 0x0F
        op(BPL, Relative, 2), // 0x10
        op(ORA, IndirectY, 5).page_penalty(), // 0x11
        op(JAM, Implicit, 2).illegal(), // 0x12
        op(SLO, IndirectY, 8).illegal(), // 0x13
        op(NOP, ZeroPageX, 4).illegal(), // 0x14
        op(ORA, ZeroPageX, 4), // 0x15
        op(ASL, ZeroPageX, 6), // 0x16
        op(SLO, ZeroPageX, 6).illegal(), // 0x17
        op(CLC, Implicit, 2), // 0x18
        op(ORA, AbsoluteY, 4).page_penalty(), // 0x19
        op(NOP, Implicit, 2).illegal(), // 0x1A
        op(SLO, AbsoluteY, 7).illegal(), // 0x1B
        op(NOP, AbsoluteX, 4).page_penalty().illegal(), // 0x1C
        op(ORA, AbsoluteX, 4).page_penalty(), // 0x1D
        op(ASL, AbsoluteX, 7), // 0x1E
        op(SLO, AbsoluteX, 7).illegal(), // 0x1F
        op(JSR, Absolute, 6), // 0x20
        op(AND, IndirectX, 6), // 0x21
        op(JAM, Implicit, 2).illegal(), // 0x22
        op(RLA, IndirectX, 8).illegal(), // 0x23
        op(BIT, ZeroPage, 3), // 0x24
        op(AND, ZeroPage, 3), // 0x25
        op(ROL, ZeroPage, 5), // 0x26
        op(RLA, ZeroPage, 5).illegal(), // 0x27
        op(PLP, Implicit, 4), // 0x28
        op(AND, Immediate, 2), // 0x29
        op(ROL, Accumulator, 2), // 0x2A
        op(ANC, Immediate, 2).illegal(), // 0x2B
        op(BIT, Absolute, 4), // 0x2C
        op(AND, Absolute, 4), // 0x2D
        op(ROL, Absolute, 6), // 0x2E
        op(RLA, Absolute, 6).illegal(), // 0x2F
        op(BMI, Relative, 2), // 0x30
        op(AND, IndirectY, 5).page_penalty(), // 0x31
        op(JAM, Implicit, 2).illegal(), // 0x32
        op(RLA, IndirectY, 8).illegal(), // 0x33
        op(NOP, ZeroPageX, 4).illegal(), // 0x34
        op(AND, ZeroPageX, 4), // 0x35
        op(ROL, ZeroPageX, 6), // 0x36
        op(RLA, ZeroPageX, 6).illegal(), // 0x37
        op(SEC, Implicit, 2), // 0x38
        op(AND, AbsoluteY, 4).page_penalty(), // 0x39
        op(NOP, Implicit, 2).illegal(), // 0x3A
        op(RLA, AbsoluteY, 7).illegal(), // 0x3B
        op(NOP, AbsoluteX, 4).page_penalty().illegal(), // 0x3C
        op(AND, AbsoluteX, 4).page_penalty(), // 0x3D
        op(ROL, AbsoluteX, 7), // 0x3E
        op(RLA, AbsoluteX, 7).illegal(), // 0x3F
        op(RTI, Implicit, 6), // 0x40
        op(EOR, IndirectX, 6), // 0x41
        op(JAM, Implicit, 2).illegal(), // 0x42
        op(SRE, IndirectX, 8).illegal(), // 0x43
        op(NOP, ZeroPage, 3).illegal(), // 0x44
        op(EOR, ZeroPage, 3), // 0x45
        op(LSR, ZeroPage, 5), // 0x46
        op(SRE, ZeroPage, 5).illegal(), // 0x47
        op(PHA, Implicit, 3), // 0x48
        op(EOR, Immediate, 2), // 0x49
        op(LSR, Accumulator, 2), // 0x4A
        op(ALR, Immediate, 2).illegal(), // 0x4B
        op(JMP, Absolute, 3), // 0x4C
        op(EOR, Absolute, 4), // 0x4D
        op(LSR, Absolute, 6), // 0x4E
        op(SRE, Absolute, 6).illegal(), // 0x4F
        op(BVC, Relative, 2), // 0x50
        op(EOR, IndirectY, 5).page_penalty(), // 0x51
        op(JAM, Implicit, 2).illegal(), // 0x52
        op(SRE, IndirectY, 8).illegal(), // 0x53
        op(NOP, ZeroPageX, 4).illegal(), // 0x54
        op(EOR, ZeroPageX, 4), // 0x55
        op(LSR, ZeroPageX, 6), // 0x56
        op(SRE, ZeroPageX, 6).illegal(), // 0x57
        op(CLI, Implicit, 2), // 0x58
        op(EOR, AbsoluteY, 4).page_penalty(), // 0x59
        op(NOP, Implicit, 2).illegal(), // 0x5A
        op(SRE, AbsoluteY, 7).illegal(), // 0x5B
        op(NOP, AbsoluteX, 4).page_penalty().illegal(), // 0x5C
        op(EOR, AbsoluteX, 4).page_penalty(), // 0x5D
        op(LSR, AbsoluteX, 7), // 0x5E
        op(SRE, AbsoluteX, 7).illegal(), // 0x5F
        op(RTS, Implicit, 6), // 0x60
        op(ADC, IndirectX, 6), // 0x61
        op(JAM, Implicit, 2).illegal(), // 0x62
        op(RRA, IndirectX, 8).illegal(), // 0x63
        op(NOP, ZeroPage, 3).illegal(), // 0x64
        op(ADC, ZeroPage, 3), // 0x65
        op(ROR, ZeroPage, 5), // 0x66
        op(RRA, ZeroPage, 5).illegal(), // 0x67
        op(PLA, Implicit, 4), // 0x68
        op(ADC, Immediate, 2), // 0x69
        op(ROR, Accumulator, 2), // 0x6A
        op(ARR, Immediate, 2).illegal(), // 0x6B
        op(JMP, Indirect, 5), // 0x6C
        op(ADC, Absolute, 4), // 0x6D
        op(ROR, Absolute, 6), // 0x6E
        op(RRA, Absolute, 6).illegal(), // 0x6F
        op(BVS, Relative, 2), // 0x70
        op(ADC, IndirectY, 5).page_penalty(), // 0x71
        op(JAM, Implicit, 2).illegal(), // 0x72
        op(RRA, IndirectY, 8).illegal(), // 0x73
        op(NOP, ZeroPageX, 4).illegal(), // 0x74
        op(ADC, ZeroPageX, 4), // 0x75
        op(ROR, ZeroPageX, 6), // 0x76
        op(RRA, ZeroPageX, 6).illegal(), // 0x77
        op(SEI, Implicit, 2), // 0x78
        op(ADC, AbsoluteY, 4).page_penalty(), // 0x79
        op(NOP, Implicit, 2).illegal(), // 0x7A
        op(RRA, AbsoluteY, 7).illegal(), // 0x7B
        op(NOP, AbsoluteX, 4).page_penalty().illegal(), // 0x7C
        op(ADC, AbsoluteX, 4).page_penalty(), // 0x7D
        op(ROR, AbsoluteX, 7), // 0x7E
        op(RRA, AbsoluteX, 7).illegal(), // 0x7F
        op(NOP, Immediate, 2).illegal(), // 0x80
        op(STA, IndirectX, 6), // 0x81
        op(NOP, Immediate, 2).illegal(), // 0x82
        op(SAX, IndirectX, 6).illegal(), // 0x83
        op(STY, ZeroPage, 3), // 0x84
        op(STA, ZeroPage, 3), // 0x85
        op(STX, ZeroPage, 3), // 0x86
        op(SAX, ZeroPage, 3).illegal(), // 0x87
        op(DEY, Implicit, 2), // 0x88
        op(NOP, Immediate, 2).illegal(), // 0x89
        op(TXA, Implicit, 2), // 0x8A
        op(ANE, Immediate, 2).illegal(), // 0x8B
        op(STY, Absolute, 4), // 0x8C
        op(STA, Absolute, 4), // 0x8D
        op(STX, Absolute, 4), // 0x8E
        op(SAX, Absolute, 4).illegal(), // 0x8F
        op(BCC, Relative, 2), // 0x90
        op(STA, IndirectY, 6), // 0x91
        op(JAM, Implicit, 2).illegal(), // 0x92
        op(SHA, IndirectY, 6).illegal(), // 0x93
        op(STY, ZeroPageX, 4), // 0x94
        op(STA, ZeroPageX, 4), // 0x95
        op(STX, ZeroPageY, 4), // 0x96
        op(SAX, ZeroPageY, 4).illegal(), // 0x97
        op(TYA, Implicit, 2), // 0x98
        op(STA, AbsoluteY, 5), // 0x99
        op(TXS, Implicit, 2), // 0x9A
        op(TAS, AbsoluteY, 5).illegal(), // 0x9B
        op(SHY, AbsoluteX, 5).illegal(), // 0x9C
        op(STA, AbsoluteX, 5), // 0x9D
        op(SHX, AbsoluteY, 5).illegal(), // 0x9E
        op(SHA, AbsoluteY, 5).illegal(), // 0x9F
        op(LDY, Immediate, 2), // 0xA0
        op(LDA, IndirectX, 6), // 0xA1
        op(LDX, Immediate, 2), // 0xA2
        op(LAX, IndirectX, 6).illegal(), // 0xA3
        op(LDY, ZeroPage, 3), // 0xA4
        op(LDA, ZeroPage, 3), // 0xA5
        op(LDX, ZeroPage, 3), // 0xA6
        op(LAX, ZeroPage, 3).illegal(), // 0xA7
        op(TAY, Implicit, 2), // 0xA8
        op(LDA, Immediate, 2), // 0xA9
        op(TAX, Implicit, 2), // 0xAA
        op(LXA, Immediate, 2).illegal(), // 0xAB
        op(LDY, Absolute, 4), // 0xAC
        op(LDA, Absolute, 4), // 0xAD
        op(LDX, Absolute, 4), // 0xAE
        op(LAX, Absolute, 4).illegal(), // 0xAF
        op(BCS, Relative, 2), // 0xB0
        op(LDA, IndirectY, 5).page_penalty(), // 0xB1
        op(JAM, Implicit, 2).illegal(), // 0xB2
        op(LAX, IndirectY, 5).page_penalty().illegal(), // 0xB3
        op(LDY, ZeroPageX, 4), // 0xB4
        op(LDA, ZeroPageX, 4), // 0xB5
        op(LDX, ZeroPageY, 4), // 0xB6
        op(LAX, ZeroPageY, 4).illegal(), // 0xB7
        op(CLV, Implicit, 2), // 0xB8
        op(LDA, AbsoluteY, 4).page_penalty(), // 0xB9
        op(TSX, Implicit, 2), // 0xBA
        op(LAS, AbsoluteY, 4).page_penalty().illegal(), // 0xBB
        op(LDY, AbsoluteX, 4).page_penalty(), // 0xBC
        op(LDA, AbsoluteX, 4).page_penalty(), // 0xBD
        op(LDX, AbsoluteY, 4).page_penalty(), // 0xBE
        op(LAX, AbsoluteY, 4).page_penalty().illegal(), // 0xBF
        op(CPY, Immediate, 2), // 0xC0
        op(CMP, IndirectX, 6), // 0xC1
        op(NOP, Immediate, 2).illegal(), // 0xC2
        op(DCP, IndirectX, 8).illegal(), // 0xC3
        op(CPY, ZeroPage, 3), // 0xC4
        op(CMP, ZeroPage, 3), // 0xC5
        op(DEC, ZeroPage, 5), // 0xC6
        op(DCP, ZeroPage, 5).illegal(), // 0xC7
        op(INY, Implicit, 2), // 0xC8
        op(CMP, Immediate, 2), // 0xC9
        op(DEX, Implicit, 2), // 0xCA
        op(SBX, Immediate, 2).illegal(), // 0xCB
        op(CPY, Absolute, 4), // 0xCC
        op(CMP, Absolute, 4), // 0xCD
        op(DEC, Absolute, 6), // 0xCE
        op(DCP, Absolute, 6).illegal(), // 0xCF
        op(BNE, Relative, 2), // 0xD0
        op(CMP, IndirectY, 5).page_penalty(), // 0xD1
        op(JAM, Implicit, 2).illegal(), // 0xD2
        op(DCP, IndirectY, 8).illegal(), // 0xD3
        op(NOP, ZeroPageX, 4).illegal(), // 0xD4
        op(CMP, ZeroPageX, 4), // 0xD5
        op(DEC, ZeroPageX, 6), // 0xD6
        op(DCP, ZeroPageX, 6).illegal(), // 0xD7
        op(CLD, Implicit, 2), // 0xD8
        op(CMP, AbsoluteY, 4).page_penalty(), // 0xD9
        op(NOP, Implicit, 2).illegal(), // 0xDA
        op(DCP, AbsoluteY, 7).illegal(), // 0xDB
        op(NOP, AbsoluteX, 4).page_penalty().illegal(), // 0xDC
        op(CMP, AbsoluteX, 4).page_penalty(), // 0xDD
        op(DEC, AbsoluteX, 7), // 0xDE
        op(DCP, AbsoluteX, 7).illegal(), // 0xDF
        op(CPX, Immediate, 2), // 0xE0
        op(SBC, IndirectX, 6), // 0xE1
        op(NOP, Immediate, 2).illegal(), // 0xE2
        op(ISC, IndirectX, 8).illegal(), // 0xE3
        op(CPX, ZeroPage, 3), // 0xE4
        op(SBC, ZeroPage, 3), // 0xE5
        op(INC, ZeroPage, 5), // 0xE6
        op(ISC, ZeroPage, 5).illegal(), // 0xE7
        op(INX, Implicit, 2), // 0xE8
        op(SBC, Immediate, 2), // 0xE9
        op(NOP, Implicit, 2), // 0xEA
        op(SBC, Immediate, 2).illegal(), // 0xEB
        op(CPX, Absolute, 4), // 0xEC
        op(SBC, Absolute, 4), // 0xED
        op(INC, Absolute, 6), // 0xEE
        op(ISC, Absolute, 6).illegal(), // 0xEF
        op(BEQ, Relative, 2), // 0xF0
        op(SBC, IndirectY, 5).page_penalty(), // 0xF1
        op(JAM, Implicit, 2).illegal(), // 0xF2
        op(ISC, IndirectY, 8).illegal(), // 0xF3
        op(NOP, ZeroPageX, 4).illegal(), // 0xF4
        op(SBC, ZeroPageX, 4), // 0xF5
        op(INC, ZeroPageX, 6), // 0xF6
        op(ISC, ZeroPageX, 6).illegal(), // 0xF7
        op(SED, Implicit, 2), // 0xF8
        op(SBC, AbsoluteY, 4).page_penalty(), // 0xF9
        op(NOP, Implicit, 2).illegal(), // 0xFA
        op(ISC, AbsoluteY, 7).illegal(), // 0xFB
        op(NOP, AbsoluteX, 4).page_penalty().illegal(), // 0xFC
        op(SBC, AbsoluteX, 4).page_penalty(), // 0xFD
        op(INC, AbsoluteX, 7), // 0xFE
        op(ISC, AbsoluteX, 7).illegal(), // 0xFF
    ]
};

/// Checks every table entry for internal consistency.
///
/// Run once when a CPU is built with [`crate::CPU::with_config`]; a failure
/// means the table itself is wrong, never the program being executed.
pub fn validate_table() -> Result<(), ConfigError> {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        let opcode = opcode as u8;
        let fail = |reason: &'static str| ConfigError::MalformedOpcodeTable { opcode, reason };

        let max_cycles = if entry.illegal { 8 } else { 7 };
        if entry.base_cycles < 2 || entry.base_cycles > max_cycles {
            return Err(fail("base cycle count out of range"));
        }

        if entry.page_penalty
            && !matches!(
                entry.addressing_mode,
                AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectY
            )
        {
            return Err(fail("page penalty on a non-indexed addressing mode"));
        }

        if (entry.addressing_mode == AddressingMode::Relative) != entry.mnemonic.is_branch() {
            return Err(fail("relative addressing must be used by branches only"));
        }

        if entry.addressing_mode == AddressingMode::Indirect && entry.mnemonic != Mnemonic::JMP {
            return Err(fail("indirect addressing is only used by JMP"));
        }
    }

    Ok(())
}
