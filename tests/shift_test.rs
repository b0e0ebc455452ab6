//! Tests for the shift and rotate instructions, on the accumulator and on
//! memory.

use w65c02::{Cpu, Flag, Memory, MemoryBus};

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
fn test_asl_accumulator() {
    let mut cpu = setup(0x8000, &[0x0A]);
    cpu.set_a(0b1100_0001);

    cpu.step();

    assert_eq!(cpu.a(), 0b1000_0010);
    assert!(cpu.p().get(Flag::Carry)); // old bit 7
    assert!(cpu.p().get(Flag::Negative));
    assert!(!cpu.p().get(Flag::Zero));
}

#[test]
fn test_asl_memory_updates_flags() {
    let mut cpu = setup(0x8000, &[0x06, 0x40]); // ASL $40
    cpu.memory_mut().write(0x0040, 0b1000_0000);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0040), 0x00);
    assert!(cpu.p().get(Flag::Carry));
    assert!(cpu.p().get(Flag::Zero));
    assert!(!cpu.p().get(Flag::Negative));
}

#[test]
fn test_lsr_clears_negative() {
    let mut cpu = setup(0x8000, &[0x4A]);
    cpu.set_a(0b1000_0011);
    cpu.p_mut().set(Flag::Negative, true);

    cpu.step();

    assert_eq!(cpu.a(), 0b0100_0001);
    assert!(cpu.p().get(Flag::Carry)); // old bit 0
    assert!(!cpu.p().get(Flag::Negative)); // a right shift can't go negative
}

#[test]
fn test_lsr_zero_result() {
    let mut cpu = setup(0x8000, &[0x46, 0x40]); // LSR $40
    cpu.memory_mut().write(0x0040, 0x01);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0040), 0x00);
    assert!(cpu.p().get(Flag::Carry));
    assert!(cpu.p().get(Flag::Zero));
}

#[test]
fn test_rol_feeds_carry_into_bit_zero() {
    let mut cpu = setup(0x8000, &[0x2A]);
    cpu.set_a(0b0100_0000);
    cpu.p_mut().set(Flag::Carry, true);

    cpu.step();

    assert_eq!(cpu.a(), 0b1000_0001);
    assert!(!cpu.p().get(Flag::Carry)); // old bit 7 was clear
    assert!(cpu.p().get(Flag::Negative));
}

#[test]
fn test_ror_feeds_carry_into_bit_seven() {
    let mut cpu = setup(0x8000, &[0x6A]);
    cpu.set_a(0b0000_0010);
    cpu.p_mut().set(Flag::Carry, true);

    cpu.step();

    assert_eq!(cpu.a(), 0b1000_0001);
    assert!(!cpu.p().get(Flag::Carry)); // old bit 0 was clear
    assert!(cpu.p().get(Flag::Negative));
}

#[test]
fn test_ror_carry_out() {
    let mut cpu = setup(0x8000, &[0x66, 0x40]); // ROR $40
    cpu.memory_mut().write(0x0040, 0x01);

    cpu.step();

    assert_eq!(cpu.memory().read(0x0040), 0x00);
    assert!(cpu.p().get(Flag::Carry));
    assert!(cpu.p().get(Flag::Zero));
}

#[test]
fn test_rotate_round_trip_through_carry() {
    // ROL then ROR with the same carry restores the byte.
    let mut cpu = setup(0x8000, &[0x2A, 0x6A]);
    cpu.set_a(0b1010_0101);
    cpu.p_mut().set(Flag::Carry, false);

    cpu.step();
    cpu.step();

    assert_eq!(cpu.a(), 0b1010_0101);
    assert!(!cpu.p().get(Flag::Carry));
}

#[test]
fn test_shift_absolute_indexed() {
    let mut cpu = setup(0x8000, &[0x1E, 0x00, 0x20]); // ASL $2000,X
    cpu.set_x(0x05);
    cpu.memory_mut().write(0x2005, 0x21);

    cpu.step();

    assert_eq!(cpu.memory().read(0x2005), 0x42);
    assert!(!cpu.p().get(Flag::Carry));
}
