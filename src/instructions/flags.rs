//! Status flag set/clear instructions.
//!
//! The decimal flag is stored faithfully, but no arithmetic path honors it;
//! ADC and SBC stay binary.

use crate::cpu::{Cpu, StepOutcome};
use crate::memory::MemoryBus;
use crate::status::Flag;

pub(crate) fn clc<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.p.set(Flag::Carry, false);
    StepOutcome::Ok
}

pub(crate) fn sec<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.p.set(Flag::Carry, true);
    StepOutcome::Ok
}

pub(crate) fn cli<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.p.set(Flag::InterruptDisable, false);
    StepOutcome::Ok
}

pub(crate) fn sei<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.p.set(Flag::InterruptDisable, true);
    StepOutcome::Ok
}

pub(crate) fn clv<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.p.set(Flag::Overflow, false);
    StepOutcome::Ok
}

pub(crate) fn cld<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.p.set(Flag::DecimalMode, false);
    StepOutcome::Ok
}

pub(crate) fn sed<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.p.set(Flag::DecimalMode, true);
    StepOutcome::Ok
}
