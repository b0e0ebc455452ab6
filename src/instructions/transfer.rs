//! Register transfer instructions.
//!
//! Every transfer updates Z and N on the copied value except TXS, which
//! moves X into the stack pointer without touching a single flag.

use crate::cpu::{Cpu, StepOutcome};
use crate::memory::MemoryBus;

pub(crate) fn tax<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.x = cpu.a;
    cpu.p.update_nz(cpu.x);

    StepOutcome::Ok
}

pub(crate) fn tay<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.y = cpu.a;
    cpu.p.update_nz(cpu.y);

    StepOutcome::Ok
}

pub(crate) fn txa<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.a = cpu.x;
    cpu.p.update_nz(cpu.a);

    StepOutcome::Ok
}

pub(crate) fn tya<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.a = cpu.y;
    cpu.p.update_nz(cpu.a);

    StepOutcome::Ok
}

pub(crate) fn tsx<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.x = cpu.s;
    cpu.p.update_nz(cpu.x);

    StepOutcome::Ok
}

pub(crate) fn txs<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.s = cpu.x;

    StepOutcome::Ok
}
