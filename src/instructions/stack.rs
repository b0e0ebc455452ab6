//! Stack push and pull instructions.
//!
//! PHP pushes the status byte with the break bit forced high; PLP restores
//! the status byte while the fixed unused bit stays high. Register pulls
//! leave the flags alone.

use crate::cpu::{Cpu, StepOutcome};
use crate::memory::MemoryBus;
use crate::status::Flag;

pub(crate) fn pha<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    let a = cpu.a;
    cpu.push(a);

    StepOutcome::Ok
}

pub(crate) fn phx<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    let x = cpu.x;
    cpu.push(x);

    StepOutcome::Ok
}

pub(crate) fn phy<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    let y = cpu.y;
    cpu.push(y);

    StepOutcome::Ok
}

pub(crate) fn pla<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.a = cpu.pop();

    StepOutcome::Ok
}

pub(crate) fn plx<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.x = cpu.pop();

    StepOutcome::Ok
}

pub(crate) fn ply<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.y = cpu.pop();

    StepOutcome::Ok
}

pub(crate) fn php<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    let mut pushed = cpu.p;
    pushed.set(Flag::Break, true);
    cpu.push(pushed.byte());

    StepOutcome::Ok
}

pub(crate) fn plp<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    let value = cpu.pop();
    cpu.p.set_byte(value);

    StepOutcome::Ok
}
