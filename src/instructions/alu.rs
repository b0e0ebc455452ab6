//! Arithmetic, logic and compare instructions.
//!
//! ADC and SBC are binary-only: the decimal flag can be set and cleared, but
//! neither operation honors it.

use crate::cpu::{Cpu, Operand, StepOutcome};
use crate::memory::MemoryBus;
use crate::status::Flag;

/// ADC: A <- A + operand + C.
///
/// Carry is the unsigned overflow out of bit 7. Overflow is set when both
/// inputs share a sign and the result has the opposite one.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let value = cpu.read_operand(operand);
    let a = cpu.a;
    let carry_in = cpu.p.get(Flag::Carry) as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.p.set(Flag::Carry, sum > 0xFF);
    cpu.p.set(Flag::Overflow, (a ^ result) & (value ^ result) & 0x80 != 0);

    cpu.a = result;
    cpu.p.update_nz(result);

    StepOutcome::Ok
}

/// SBC: A <- A - operand - (1 - C).
///
/// Carry means "no borrow": it stays set when A was large enough to cover
/// the operand plus the incoming borrow.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let value = cpu.read_operand(operand);
    let a = cpu.a;
    let borrow = !cpu.p.get(Flag::Carry) as u8;

    let result = a.wrapping_sub(value).wrapping_sub(borrow);

    cpu.p.set(Flag::Carry, a as u16 >= value as u16 + borrow as u16);
    cpu.p.set(Flag::Overflow, (a ^ result) & (a ^ value) & 0x80 != 0);

    cpu.a = result;
    cpu.p.update_nz(result);

    StepOutcome::Ok
}

pub(crate) fn and<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    cpu.a &= cpu.read_operand(operand);
    cpu.p.update_nz(cpu.a);

    StepOutcome::Ok
}

pub(crate) fn ora<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    cpu.a |= cpu.read_operand(operand);
    cpu.p.update_nz(cpu.a);

    StepOutcome::Ok
}

pub(crate) fn eor<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    cpu.a ^= cpu.read_operand(operand);
    cpu.p.update_nz(cpu.a);

    StepOutcome::Ok
}

/// BIT: Z from A & operand, N and V copied from bits 7 and 6 of the operand.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let value = cpu.read_operand(operand);

    cpu.p.set(Flag::Zero, cpu.a & value == 0);
    cpu.p.set(Flag::Negative, value & 0x80 != 0);
    cpu.p.set(Flag::Overflow, value & 0x40 != 0);

    StepOutcome::Ok
}

/// BIT with an immediate operand updates only Z.
pub(crate) fn bit_immediate<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let value = cpu.read_operand(operand);

    cpu.p.set(Flag::Zero, cpu.a & value == 0);

    StepOutcome::Ok
}

/// Shared compare: C = no borrow, Z and N from the difference. The register
/// itself is untouched.
fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, register: u8, operand: Operand) -> StepOutcome {
    let value = cpu.read_operand(operand);
    let result = register.wrapping_sub(value);

    cpu.p.set(Flag::Carry, register >= value);
    cpu.p.set(Flag::Zero, result == 0);
    cpu.p.set(Flag::Negative, result & 0x80 != 0);

    StepOutcome::Ok
}

pub(crate) fn cmp<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let a = cpu.a;
    compare(cpu, a, operand)
}

pub(crate) fn cpx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let x = cpu.x;
    compare(cpu, x, operand)
}

pub(crate) fn cpy<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let y = cpu.y;
    compare(cpu, y, operand)
}
