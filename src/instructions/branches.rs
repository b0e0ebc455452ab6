//! Conditional branch instructions, plus the unconditional BRA.
//!
//! The addressing-mode decoder has already turned the signed offset into an
//! absolute target address; a taken branch just installs it.

use crate::cpu::{Cpu, Operand, StepOutcome};
use crate::memory::MemoryBus;
use crate::status::Flag;

fn branch<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand, taken: bool) -> StepOutcome {
    if !taken {
        return StepOutcome::Ok;
    }

    let Operand::Address(target) = operand else {
        unreachable!("branch decoded without a target address");
    };

    cpu.pc = target;
    StepOutcome::PcModified
}

pub(crate) fn bpl<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let taken = !cpu.flag(Flag::Negative);
    branch(cpu, operand, taken)
}

pub(crate) fn bmi<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let taken = cpu.flag(Flag::Negative);
    branch(cpu, operand, taken)
}

pub(crate) fn bvc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let taken = !cpu.flag(Flag::Overflow);
    branch(cpu, operand, taken)
}

pub(crate) fn bvs<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let taken = cpu.flag(Flag::Overflow);
    branch(cpu, operand, taken)
}

pub(crate) fn bcc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let taken = !cpu.flag(Flag::Carry);
    branch(cpu, operand, taken)
}

pub(crate) fn bcs<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let taken = cpu.flag(Flag::Carry);
    branch(cpu, operand, taken)
}

pub(crate) fn bne<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let taken = !cpu.flag(Flag::Zero);
    branch(cpu, operand, taken)
}

pub(crate) fn beq<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let taken = cpu.flag(Flag::Zero);
    branch(cpu, operand, taken)
}

/// BRA branches unconditionally.
pub(crate) fn bra<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    branch(cpu, operand, true)
}
