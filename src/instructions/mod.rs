//! # 6502 Instruction Implementations
//!
//! One function per instruction, organized by category. Each takes the CPU
//! and the already-resolved operand; the engine has consumed the operand
//! bytes and charges the base cycle cost, so handlers only perform the
//! instruction's effect on registers, flags and memory.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)
//! - **illegal**: The undocumented NMOS opcodes

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod illegal;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::addressing::Operand;
use crate::opcodes::Mnemonic;
use crate::registers::StatusFlags;
use crate::{MemoryBus, CPU};

/// Executes `mnemonic` on `operand` and returns cycles owed beyond the base
/// cost (only taken branches owe any).
pub(crate) fn execute<M: MemoryBus>(cpu: &mut CPU<M>, mnemonic: Mnemonic, operand: Operand) -> u8 {
    let c = cpu.regs.flag(StatusFlags::CARRY);
    let z = cpu.regs.flag(StatusFlags::ZERO);
    let v = cpu.regs.flag(StatusFlags::OVERFLOW);
    let n = cpu.regs.flag(StatusFlags::NEGATIVE);

    match mnemonic {
        // Loads and stores
        Mnemonic::LDA => load_store::lda(cpu, operand),
        Mnemonic::LDX => load_store::ldx(cpu, operand),
        Mnemonic::LDY => load_store::ldy(cpu, operand),
        Mnemonic::STA => load_store::sta(cpu, operand),
        Mnemonic::STX => load_store::stx(cpu, operand),
        Mnemonic::STY => load_store::sty(cpu, operand),

        // Transfers
        Mnemonic::TAX => transfer::tax(cpu),
        Mnemonic::TAY => transfer::tay(cpu),
        Mnemonic::TXA => transfer::txa(cpu),
        Mnemonic::TYA => transfer::tya(cpu),
        Mnemonic::TSX => transfer::tsx(cpu),
        Mnemonic::TXS => transfer::txs(cpu),

        // Arithmetic and logic
        Mnemonic::ADC => alu::adc(cpu, operand),
        Mnemonic::SBC => alu::sbc(cpu, operand),
        Mnemonic::AND => alu::and(cpu, operand),
        Mnemonic::ORA => alu::ora(cpu, operand),
        Mnemonic::EOR => alu::eor(cpu, operand),
        Mnemonic::BIT => alu::bit(cpu, operand),
        Mnemonic::CMP => alu::cmp(cpu, operand),
        Mnemonic::CPX => alu::cpx(cpu, operand),
        Mnemonic::CPY => alu::cpy(cpu, operand),

        // Shifts and rotates
        Mnemonic::ASL => shifts::asl(cpu, operand),
        Mnemonic::LSR => shifts::lsr(cpu, operand),
        Mnemonic::ROL => shifts::rol(cpu, operand),
        Mnemonic::ROR => shifts::ror(cpu, operand),

        // Increments and decrements
        Mnemonic::INC => inc_dec::inc(cpu, operand),
        Mnemonic::DEC => inc_dec::dec(cpu, operand),
        Mnemonic::INX => inc_dec::inx(cpu),
        Mnemonic::INY => inc_dec::iny(cpu),
        Mnemonic::DEX => inc_dec::dex(cpu),
        Mnemonic::DEY => inc_dec::dey(cpu),

        // Branches
        Mnemonic::BCC => return branches::branch_if(cpu, operand, !c),
        Mnemonic::BCS => return branches::branch_if(cpu, operand, c),
        Mnemonic::BNE => return branches::branch_if(cpu, operand, !z),
        Mnemonic::BEQ => return branches::branch_if(cpu, operand, z),
        Mnemonic::BPL => return branches::branch_if(cpu, operand, !n),
        Mnemonic::BMI => return branches::branch_if(cpu, operand, n),
        Mnemonic::BVC => return branches::branch_if(cpu, operand, !v),
        Mnemonic::BVS => return branches::branch_if(cpu, operand, v),

        // Jumps, calls and returns
        Mnemonic::JMP => control::jmp(cpu, operand),
        Mnemonic::JSR => control::jsr(cpu, operand),
        Mnemonic::RTS => control::rts(cpu),
        Mnemonic::RTI => control::rti(cpu),
        Mnemonic::BRK => control::brk(cpu),
        Mnemonic::NOP => control::nop(cpu, operand),

        // Stack
        Mnemonic::PHA => stack::pha(cpu),
        Mnemonic::PHP => stack::php(cpu),
        Mnemonic::PLA => stack::pla(cpu),
        Mnemonic::PLP => stack::plp(cpu),

        // Flags
        Mnemonic::CLC => flags::clc(cpu),
        Mnemonic::SEC => flags::sec(cpu),
        Mnemonic::CLI => flags::cli(cpu),
        Mnemonic::SEI => flags::sei(cpu),
        Mnemonic::CLD => flags::cld(cpu),
        Mnemonic::SED => flags::sed(cpu),
        Mnemonic::CLV => flags::clv(cpu),

        // Undocumented
        Mnemonic::SLO => illegal::slo(cpu, operand),
        Mnemonic::RLA => illegal::rla(cpu, operand),
        Mnemonic::SRE => illegal::sre(cpu, operand),
        Mnemonic::RRA => illegal::rra(cpu, operand),
        Mnemonic::SAX => illegal::sax(cpu, operand),
        Mnemonic::LAX => illegal::lax(cpu, operand),
        Mnemonic::DCP => illegal::dcp(cpu, operand),
        Mnemonic::ISC => illegal::isc(cpu, operand),
        Mnemonic::ANC => illegal::anc(cpu, operand),
        Mnemonic::ALR => illegal::alr(cpu, operand),
        Mnemonic::ARR => illegal::arr(cpu, operand),
        Mnemonic::ANE => illegal::ane(cpu, operand),
        Mnemonic::LXA => illegal::lxa(cpu, operand),
        Mnemonic::SBX => illegal::sbx(cpu, operand),
        Mnemonic::LAS => illegal::las(cpu, operand),
        Mnemonic::TAS => illegal::tas(cpu, operand),
        Mnemonic::SHA => illegal::sha(cpu, operand),
        Mnemonic::SHX => illegal::shx(cpu, operand),
        Mnemonic::SHY => illegal::shy(cpu, operand),
        Mnemonic::JAM => illegal::jam(cpu),
    }

    0
}
