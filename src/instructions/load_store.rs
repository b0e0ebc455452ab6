//! Load and store instructions.
//!
//! Loads update Z and N via the standard post-write rule; stores change no
//! flags at all.

use crate::cpu::{Cpu, Operand, StepOutcome};
use crate::memory::MemoryBus;

pub(crate) fn lda<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    cpu.a = cpu.read_operand(operand);
    cpu.p.update_nz(cpu.a);

    StepOutcome::Ok
}

pub(crate) fn ldx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    cpu.x = cpu.read_operand(operand);
    cpu.p.update_nz(cpu.x);

    StepOutcome::Ok
}

pub(crate) fn ldy<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    cpu.y = cpu.read_operand(operand);
    cpu.p.update_nz(cpu.y);

    StepOutcome::Ok
}

pub(crate) fn sta<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    cpu.write_operand(operand, cpu.a);

    StepOutcome::Ok
}

pub(crate) fn stx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    cpu.write_operand(operand, cpu.x);

    StepOutcome::Ok
}

pub(crate) fn sty<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    cpu.write_operand(operand, cpu.y);

    StepOutcome::Ok
}

/// STZ stores a zero.
pub(crate) fn stz<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    cpu.write_operand(operand, 0x00);

    StepOutcome::Ok
}
