//! Tests for the conditional branches, BRA and the BBRn/BBSn bit branches.

use w65c02::{Cpu, Flag, Memory, MemoryBus, StepOutcome};

fn setup(origin: u16, program: &[u8]) -> Cpu<Memory> {
    let mut memory = Memory::new();
    memory.write(0xFFFC, origin as u8);
    memory.write(0xFFFD, (origin >> 8) as u8);
    for (i, byte) in program.iter().enumerate() {
        memory.write(origin + i as u16, *byte);
    }
    Cpu::new(memory)
}

#[test]
fn test_counted_loop() {
    // LDX #3; loop: DEX; BNE loop; STP
    let mut cpu = setup(0x8000, &[0xA2, 0x03, 0xCA, 0xD0, 0xFD, 0xDB]);

    assert_eq!(cpu.execute(), StepOutcome::Stop);

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.p().get(Flag::Zero));
}

#[test]
fn test_branch_taken_target() {
    // BEQ +0x10 from 0x8000 lands at 0x8012.
    let mut cpu = setup(0x8000, &[0xF0, 0x10]);
    cpu.p_mut().set(Flag::Zero, true);

    assert_eq!(cpu.step(), StepOutcome::PcModified);
    assert_eq!(cpu.pc(), 0x8012);
}

#[test]
fn test_branch_not_taken_advances_two() {
    let mut cpu = setup(0x8000, &[0xF0, 0x10]);
    cpu.p_mut().set(Flag::Zero, false);

    assert_eq!(cpu.step(), StepOutcome::Ok);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_backward_branch() {
    // BRA -2 loops onto itself.
    let mut cpu = setup(0x8000, &[0x80, 0xFE]);

    assert_eq!(cpu.step(), StepOutcome::PcModified);
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_all_branch_conditions() {
    // Each tuple: (opcode, flag, branch taken when flag set?).
    let cases = [
        (0x10u8, Flag::Negative, false), // BPL
        (0x30, Flag::Negative, true),    // BMI
        (0x50, Flag::Overflow, false),   // BVC
        (0x70, Flag::Overflow, true),    // BVS
        (0x90, Flag::Carry, false),      // BCC
        (0xB0, Flag::Carry, true),       // BCS
        (0xD0, Flag::Zero, false),       // BNE
        (0xF0, Flag::Zero, true),        // BEQ
    ];

    for (opcode, flag, taken_when_set) in cases {
        for value in [false, true] {
            let mut cpu = setup(0x8000, &[opcode, 0x04]);
            cpu.p_mut().set(flag, value);

            let outcome = cpu.step();

            if value == taken_when_set {
                assert_eq!(outcome, StepOutcome::PcModified, "opcode 0x{:02X}", opcode);
                assert_eq!(cpu.pc(), 0x8006);
            } else {
                assert_eq!(outcome, StepOutcome::Ok, "opcode 0x{:02X}", opcode);
                assert_eq!(cpu.pc(), 0x8002);
            }
        }
    }
}

// ========== Bit branches ==========

#[test]
fn test_bbr_taken_when_bit_clear() {
    // BBR3 $40, +5 -- three-byte encoding: opcode, zp, offset.
    let mut cpu = setup(0x8000, &[0x3F, 0x40, 0x05]);
    cpu.memory_mut().write(0x0040, 0b0000_0000);

    assert_eq!(cpu.step(), StepOutcome::PcModified);
    assert_eq!(cpu.pc(), 0x8008); // 0x8000 + 3 + 5
}

#[test]
fn test_bbr_not_taken_when_bit_set() {
    let mut cpu = setup(0x8000, &[0x3F, 0x40, 0x05]);
    cpu.memory_mut().write(0x0040, 0b0000_1000);

    assert_eq!(cpu.step(), StepOutcome::Ok);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_bbs_tests_its_own_bit() {
    // BBS6 must look at bit 6, not bit 0.
    let mut cpu = setup(0x8000, &[0xEF, 0x40, 0x02]); // BBS6 $40, +2
    cpu.memory_mut().write(0x0040, 0b0100_0000);

    assert_eq!(cpu.step(), StepOutcome::PcModified);
    assert_eq!(cpu.pc(), 0x8005);

    let mut cpu = setup(0x8000, &[0xEF, 0x40, 0x02]);
    cpu.memory_mut().write(0x0040, 0b0000_0001); // only bit 0 set

    assert_eq!(cpu.step(), StepOutcome::Ok);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_bit_branch_backward_offset() {
    let mut cpu = setup(0x8000, &[0x0F, 0x40, 0xFB]); // BBR0 $40, -5
    cpu.memory_mut().write(0x0040, 0x00);

    assert_eq!(cpu.step(), StepOutcome::PcModified);
    assert_eq!(cpu.pc(), 0x7FFE); // 0x8000 + 3 - 5
}

#[test]
fn test_bit_branch_leaves_flags_alone() {
    let mut cpu = setup(0x8000, &[0x8F, 0x40, 0x02]); // BBS0 $40, +2
    cpu.memory_mut().write(0x0040, 0x01);
    let p_before = cpu.p().byte();

    cpu.step();

    assert_eq!(cpu.p().byte(), p_before);
}
