//! Control flow: jumps, subroutine linkage, software interrupt, halt and the
//! debug trap.

use crate::cpu::{Cpu, Operand, StepOutcome, BREAK_VECTOR_HIGH, BREAK_VECTOR_LOW};
use crate::memory::MemoryBus;
use crate::status::Flag;

pub(crate) fn jmp<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let Operand::Address(target) = operand else {
        unreachable!("jump decoded without a target address");
    };

    cpu.pc = target;
    StepOutcome::PcModified
}

/// JSR pushes the address of the last byte of the 3-byte instruction
/// (PC+2), high byte first; RTS adds one to resume after it.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) -> StepOutcome {
    let Operand::Address(target) = operand else {
        unreachable!("jump decoded without a target address");
    };

    let return_address = cpu.pc.wrapping_add(2);
    cpu.push((return_address >> 8) as u8);
    cpu.push(return_address as u8);

    cpu.pc = target;
    StepOutcome::PcModified
}

pub(crate) fn rts<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    let low = cpu.pop();
    let high = cpu.pop();

    cpu.pc = u16::from_le_bytes([low, high]).wrapping_add(1);
    StepOutcome::PcModified
}

/// BRK pushes PC high, PC low, then P with B set, and vectors through
/// 0xFFFE/0xFFFF.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    let pc = cpu.pc;
    cpu.push((pc >> 8) as u8);
    cpu.push(pc as u8);

    let mut pushed = cpu.p;
    pushed.set(Flag::Break, true);
    cpu.push(pushed.byte());

    cpu.p.set(Flag::Break, true);

    cpu.pc = u16::from_le_bytes([
        cpu.memory.read(BREAK_VECTOR_LOW),
        cpu.memory.read(BREAK_VECTOR_HIGH),
    ]);

    StepOutcome::PcModified
}

/// RTI pops P (the unused bit stays high), then the return address, and
/// restores the PC exactly as pushed.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    let status = cpu.pop();
    cpu.p.set_byte(status);

    let low = cpu.pop();
    let high = cpu.pop();
    cpu.pc = u16::from_le_bytes([low, high]);

    StepOutcome::PcModified
}

pub(crate) fn nop<M: MemoryBus>(_cpu: &mut Cpu<M>) -> StepOutcome {
    StepOutcome::Ok
}

/// STP halts the machine.
pub(crate) fn stp<M: MemoryBus>(_cpu: &mut Cpu<M>) -> StepOutcome {
    StepOutcome::Stop
}

/// The debug trap drops into the monitor when debug mode is on; otherwise it
/// behaves like a NOP.
pub(crate) fn dbg<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    if cpu.is_debug() {
        return StepOutcome::EnterDebugger;
    }

    StepOutcome::Ok
}
