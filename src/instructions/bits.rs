//! W65C02S bit-manipulation instructions.
//!
//! TSB/TRB test the accumulator mask against a memory cell and then set or
//! clear those bits. RMBn/SMBn clear or set a single bit of a zero-page
//! cell without touching any flag. BBRn/BBSn are the three-byte bit
//! branches: opcode, zero-page address, then a signed offset relative to
//! the following instruction.

use crate::cpu::{Cpu, Operand, StepOutcome};
use crate::memory::MemoryBus;
use crate::status::Flag;

/// TSB: Z from `mem & A`, then set the accumulator's bits in memory.
pub(crate) fn tsb<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let value = cpu.read_operand(operand);

    cpu.p.set(Flag::Zero, value & cpu.a == 0);
    cpu.write_operand(operand, value | cpu.a);

    StepOutcome::Ok
}

/// TRB: Z from `mem & A`, then clear the accumulator's bits in memory.
pub(crate) fn trb<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let value = cpu.read_operand(operand);

    cpu.p.set(Flag::Zero, value & cpu.a == 0);
    cpu.write_operand(operand, value & !cpu.a);

    StepOutcome::Ok
}

pub(crate) fn rmb<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand, bit: u8) -> StepOutcome {
    let value = cpu.read_operand(operand);
    cpu.write_operand(operand, value & !(1 << bit));

    StepOutcome::Ok
}

pub(crate) fn smb<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand, bit: u8) -> StepOutcome {
    let value = cpu.read_operand(operand);
    cpu.write_operand(operand, value | (1 << bit));

    StepOutcome::Ok
}

/// Computes the branch target of a bit branch: the offset lives in the third
/// instruction byte, relative to the instruction after it.
fn bit_branch_target<M: MemoryBus>(cpu: &Cpu<M>) -> u16 {
    let offset = cpu.memory.read(cpu.pc.wrapping_add(2)) as i8;

    cpu.pc.wrapping_add(3).wrapping_add(offset as u16)
}

/// BBRn: branch when bit `n` of the zero-page operand is clear.
pub(crate) fn bbr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand, bit: u8) -> StepOutcome {
    let value = cpu.read_operand(operand);

    if value & (1 << bit) == 0 {
        let target = bit_branch_target(cpu);
        cpu.pc = target;
        return StepOutcome::PcModified;
    }

    StepOutcome::Ok
}

/// BBSn: branch when bit `n` of the zero-page operand is set.
pub(crate) fn bbs<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand, bit: u8) -> StepOutcome {
    let value = cpu.read_operand(operand);

    if value & (1 << bit) != 0 {
        let target = bit_branch_target(cpu);
        cpu.pc = target;
        return StepOutcome::PcModified;
    }

    StepOutcome::Ok
}
