//! Shift and rotate instructions.
//!
//! Each works on the accumulator or a memory cell through the operand
//! abstraction. ASL and ROL move the old bit 7 into carry; LSR and ROR move
//! the old bit 0. Rotates feed the old carry into the vacated bit. All four
//! update Z and N on the result (a logical right shift can never produce a
//! negative byte, so LSR's N ends up clear).

use crate::cpu::{Cpu, Operand, StepOutcome};
use crate::memory::MemoryBus;
use crate::status::Flag;

pub(crate) fn asl<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let value = cpu.read_operand(operand);
    let result = value << 1;

    cpu.p.set(Flag::Carry, value & 0x80 != 0);
    cpu.write_operand(operand, result);
    cpu.p.update_nz(result);

    StepOutcome::Ok
}

pub(crate) fn lsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let value = cpu.read_operand(operand);
    let result = value >> 1;

    cpu.p.set(Flag::Carry, value & 0x01 != 0);
    cpu.write_operand(operand, result);
    cpu.p.update_nz(result);

    StepOutcome::Ok
}

pub(crate) fn rol<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let value = cpu.read_operand(operand);
    let carry_in = cpu.p.get(Flag::Carry) as u8;
    let result = (value << 1) | carry_in;

    cpu.p.set(Flag::Carry, value & 0x80 != 0);
    cpu.write_operand(operand, result);
    cpu.p.update_nz(result);

    StepOutcome::Ok
}

pub(crate) fn ror<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let value = cpu.read_operand(operand);
    let carry_in = cpu.p.get(Flag::Carry) as u8;
    let result = (value >> 1) | (carry_in << 7);

    cpu.p.set(Flag::Carry, value & 0x01 != 0);
    cpu.write_operand(operand, result);
    cpu.p.update_nz(result);

    StepOutcome::Ok
}
