//! # Instruction Implementations
//!
//! Operation bodies, organized by functional group. Each operation is a free
//! function taking a mutable reference to the CPU and the decoded operand;
//! [`dispatch`] routes an [`Operation`] to its body.
//!
//! ## Groups
//!
//! - **alu**: arithmetic, logic and compares (ADC, SBC, AND, ORA, EOR, BIT,
//!   CMP, CPX, CPY)
//! - **bits**: W65C02S bit manipulation and bit branches (TSB, TRB, RMBn,
//!   SMBn, BBRn, BBSn)
//! - **branches**: conditional branches and BRA
//! - **control**: control flow (JMP, JSR, RTS, BRK, RTI, NOP, STP, DBG)
//! - **flags**: status flag set/clear
//! - **inc_dec**: increments and decrements
//! - **load_store**: loads and stores
//! - **shifts**: shifts and rotates
//! - **stack**: pushes and pulls
//! - **transfer**: register transfers

pub(crate) mod alu;
pub(crate) mod bits;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

use crate::cpu::{Cpu, Operand, StepOutcome};
use crate::memory::MemoryBus;
use crate::opcodes::Operation;

/// Routes an operation kind to its implementation.
pub(crate) fn dispatch<M: MemoryBus>(
    cpu: &mut Cpu<M>,
    operation: Operation,
    operand: Operand,
) -> StepOutcome {
    match operation {
        Operation::Adc => alu::adc(cpu, operand),
        Operation::And => alu::and(cpu, operand),
        Operation::Asl => shifts::asl(cpu, operand),
        Operation::Bbr(bit) => bits::bbr(cpu, operand, bit),
        Operation::Bbs(bit) => bits::bbs(cpu, operand, bit),
        Operation::Bcc => branches::bcc(cpu, operand),
        Operation::Bcs => branches::bcs(cpu, operand),
        Operation::Beq => branches::beq(cpu, operand),
        Operation::Bit => alu::bit(cpu, operand),
        Operation::BitImmediate => alu::bit_immediate(cpu, operand),
        Operation::Bmi => branches::bmi(cpu, operand),
        Operation::Bne => branches::bne(cpu, operand),
        Operation::Bpl => branches::bpl(cpu, operand),
        Operation::Bra => branches::bra(cpu, operand),
        Operation::Brk => control::brk(cpu),
        Operation::Bvc => branches::bvc(cpu, operand),
        Operation::Bvs => branches::bvs(cpu, operand),
        Operation::Clc => flags::clc(cpu),
        Operation::Cld => flags::cld(cpu),
        Operation::Cli => flags::cli(cpu),
        Operation::Clv => flags::clv(cpu),
        Operation::Cmp => alu::cmp(cpu, operand),
        Operation::Cpx => alu::cpx(cpu, operand),
        Operation::Cpy => alu::cpy(cpu, operand),
        Operation::Dbg => control::dbg(cpu),
        Operation::Dec => inc_dec::dec(cpu, operand),
        Operation::Dex => inc_dec::dex(cpu),
        Operation::Dey => inc_dec::dey(cpu),
        Operation::Eor => alu::eor(cpu, operand),
        Operation::Inc => inc_dec::inc(cpu, operand),
        Operation::Inx => inc_dec::inx(cpu),
        Operation::Iny => inc_dec::iny(cpu),
        Operation::Jmp => control::jmp(cpu, operand),
        Operation::Jsr => control::jsr(cpu, operand),
        Operation::Lda => load_store::lda(cpu, operand),
        Operation::Ldx => load_store::ldx(cpu, operand),
        Operation::Ldy => load_store::ldy(cpu, operand),
        Operation::Lsr => shifts::lsr(cpu, operand),
        Operation::Nop => control::nop(cpu),
        Operation::Ora => alu::ora(cpu, operand),
        Operation::Pha => stack::pha(cpu),
        Operation::Php => stack::php(cpu),
        Operation::Phx => stack::phx(cpu),
        Operation::Phy => stack::phy(cpu),
        Operation::Pla => stack::pla(cpu),
        Operation::Plp => stack::plp(cpu),
        Operation::Plx => stack::plx(cpu),
        Operation::Ply => stack::ply(cpu),
        Operation::Rmb(bit) => bits::rmb(cpu, operand, bit),
        Operation::Rol => shifts::rol(cpu, operand),
        Operation::Ror => shifts::ror(cpu, operand),
        Operation::Rti => control::rti(cpu),
        Operation::Rts => control::rts(cpu),
        Operation::Sbc => alu::sbc(cpu, operand),
        Operation::Sec => flags::sec(cpu),
        Operation::Sed => flags::sed(cpu),
        Operation::Sei => flags::sei(cpu),
        Operation::Smb(bit) => bits::smb(cpu, operand, bit),
        Operation::Sta => load_store::sta(cpu, operand),
        Operation::Stp => control::stp(cpu),
        Operation::Stx => load_store::stx(cpu, operand),
        Operation::Sty => load_store::sty(cpu, operand),
        Operation::Stz => load_store::stz(cpu, operand),
        Operation::Tax => transfer::tax(cpu),
        Operation::Tay => transfer::tay(cpu),
        Operation::Trb => bits::trb(cpu, operand),
        Operation::Tsb => bits::tsb(cpu, operand),
        Operation::Tsx => transfer::tsx(cpu),
        Operation::Txa => transfer::txa(cpu),
        Operation::Txs => transfer::txs(cpu),
        Operation::Tya => transfer::tya(cpu),
    }
}
