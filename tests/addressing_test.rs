//! Tests for effective-address computation across the addressing modes,
//! exercised through LDA/STA/JMP so the whole fetch-decode path is covered.

use w65c02::{Cpu, Memory, MemoryBus};

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
fn test_absolute() {
    let mut cpu = setup(0x8000, &[0xAD, 0x34, 0x12]); // LDA $1234
    cpu.memory_mut().write(0x1234, 0x99);

    cpu.step();

    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_absolute_indexed() {
    let mut cpu = setup(0x8000, &[0xBD, 0x00, 0x20, 0xB9, 0x00, 0x20]);
    cpu.set_x(0x10);
    cpu.set_y(0x20);
    cpu.memory_mut().write(0x2010, 0x11);
    cpu.memory_mut().write(0x2020, 0x22);

    cpu.step(); // LDA $2000,X
    assert_eq!(cpu.a(), 0x11);

    cpu.step(); // LDA $2000,Y
    assert_eq!(cpu.a(), 0x22);
}

#[test]
fn test_absolute_indexed_wraps_past_top() {
    let mut cpu = setup(0x8000, &[0xBD, 0xFF, 0xFF]); // LDA $FFFF,X
    cpu.set_x(0x02);
    cpu.memory_mut().write(0x0001, 0x77); // 0xFFFF + 2 wraps to 0x0001

    cpu.step();

    assert_eq!(cpu.a(), 0x77);
}

#[test]
fn test_zero_page() {
    let mut cpu = setup(0x8000, &[0xA5, 0x42]); // LDA $42
    cpu.memory_mut().write(0x0042, 0x55);

    cpu.step();

    assert_eq!(cpu.a(), 0x55);
}

#[test]
fn test_zero_page_indexed_wraps_in_page() {
    let mut cpu = setup(0x8000, &[0xB5, 0xF0]); // LDA $F0,X
    cpu.set_x(0x20);
    cpu.memory_mut().write(0x0010, 0x66); // (0xF0 + 0x20) mod 256
    cpu.memory_mut().write(0x0110, 0xEE); // must NOT be read

    cpu.step();

    assert_eq!(cpu.a(), 0x66);
}

#[test]
fn test_zero_page_indexed_y() {
    let mut cpu = setup(0x8000, &[0xB6, 0x80]); // LDX $80,Y
    cpu.set_y(0x05);
    cpu.memory_mut().write(0x0085, 0x44);

    cpu.step();

    assert_eq!(cpu.x(), 0x44);
}

#[test]
fn test_zero_page_indexed_indirect() {
    // LDA ($20,X) with X=4: pointer read from $24/$25.
    let mut cpu = setup(0x8000, &[0xA1, 0x20]);
    cpu.set_x(0x04);
    cpu.memory_mut().write(0x0024, 0x00);
    cpu.memory_mut().write(0x0025, 0x30);
    cpu.memory_mut().write(0x3000, 0xAB);

    cpu.step();

    assert_eq!(cpu.a(), 0xAB);
}

#[test]
fn test_zero_page_indexed_indirect_pointer_wraps() {
    // Pointer lands on $FF; its high byte comes from $00, not $100.
    let mut cpu = setup(0x8000, &[0xA1, 0xFF]);
    cpu.set_x(0x00);
    cpu.memory_mut().write(0x00FF, 0x00);
    cpu.memory_mut().write(0x0000, 0x40);
    cpu.memory_mut().write(0x4000, 0xCD);

    cpu.step();

    assert_eq!(cpu.a(), 0xCD);
}

#[test]
fn test_zero_page_indirect_indexed_y() {
    // LDA ($20),Y: base from $20/$21, plus Y.
    let mut cpu = setup(0x8000, &[0xB1, 0x20]);
    cpu.set_y(0x10);
    cpu.memory_mut().write(0x0020, 0xF8);
    cpu.memory_mut().write(0x0021, 0x2F);
    cpu.memory_mut().write(0x3008, 0x5E); // 0x2FF8 + 0x10 crosses the page

    cpu.step();

    assert_eq!(cpu.a(), 0x5E);
}

#[test]
fn test_zero_page_indirect() {
    let mut cpu = setup(0x8000, &[0xD2, 0x20]); // CMP ($20)
    cpu.set_a(0x42);
    cpu.memory_mut().write(0x0020, 0x00);
    cpu.memory_mut().write(0x0021, 0x30);
    cpu.memory_mut().write(0x3000, 0x42);

    cpu.step();

    assert!(cpu.p().get(w65c02::Flag::Zero)); // matched via the pointer
}

#[test]
fn test_immediate_reads_operand_byte() {
    let mut cpu = setup(0x8000, &[0xA9, 0x7F]);

    cpu.step();

    assert_eq!(cpu.a(), 0x7F);
}

#[test]
fn test_indirect_jump_vector_split() {
    // JMP ($30FF): pointer bytes at $30FF and $3100 (no page-wrap quirk).
    let mut cpu = setup(0x8000, &[0x6C, 0xFF, 0x30]);
    cpu.memory_mut().write(0x30FF, 0x00);
    cpu.memory_mut().write(0x3100, 0x40);

    cpu.step();

    assert_eq!(cpu.pc(), 0x4000);
}
