//! Increment and decrement instructions.
//!
//! All of them wrap modulo 256 and update only Z and N.

use crate::cpu::{Cpu, Operand, StepOutcome};
use crate::memory::MemoryBus;

/// INC on the accumulator or a memory cell.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let value = cpu.read_operand(operand).wrapping_add(1);
    cpu.write_operand(operand, value);
    cpu.p.update_nz(value);

    StepOutcome::Ok
}

/// DEC on the accumulator or a memory cell.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let value = cpu.read_operand(operand).wrapping_sub(1);
    cpu.write_operand(operand, value);
    cpu.p.update_nz(value);

    StepOutcome::Ok
}

pub(crate) fn inx<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.update_nz(cpu.x);

    StepOutcome::Ok
}

pub(crate) fn iny<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.update_nz(cpu.y);

    StepOutcome::Ok
}

pub(crate) fn dex<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.update_nz(cpu.x);

    StepOutcome::Ok
}

pub(crate) fn dey<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.update_nz(cpu.y);

    StepOutcome::Ok
}
