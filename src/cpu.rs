//! # CPU State and Execution
//!
//! This module contains the [`Cpu`] struct representing the W65C02S
//! processor state and the fetch-decode-execute loop.
//!
//! ## CPU state
//!
//! - **Registers**: accumulator (A), index registers (X, Y)
//! - **Stack pointer** (S): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Program counter** (PC): 16-bit address of the next opcode
//! - **Status register** (P): packed condition flags, see [`Status`]
//!
//! ## Execution model
//!
//! [`Cpu::step`] executes exactly one instruction and reports a
//! [`StepOutcome`]; [`Cpu::execute`] free-runs until the program counter
//! leaves the populated image, a STP opcode stops the machine, or an unknown
//! opcode is fetched. There is no timing model: a step is the atomic unit and
//! nothing can interrupt it.

use log::{error, trace, warn};

use crate::addressing::AddressingMode;
use crate::instructions;
use crate::memory::{MemoryBus, ADDRESSABLE_RANGE};
use crate::opcodes::OPCODE_TABLE;
use crate::status::{Flag, Status};

/// Low byte of the reset vector.
pub const RESET_VECTOR_LOW: u16 = 0xFFFC;
/// High byte of the reset vector.
pub const RESET_VECTOR_HIGH: u16 = 0xFFFD;
/// Low byte of the BRK/interrupt vector.
pub const BREAK_VECTOR_LOW: u16 = 0xFFFE;
/// High byte of the BRK/interrupt vector.
pub const BREAK_VECTOR_HIGH: u16 = 0xFFFF;

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;
/// Stack pointer value after reset.
pub const INITIAL_STACK_POINTER: u8 = 0xFF;

/// Banner printed when a STP opcode halts the machine.
pub const STOP_BANNER: &str = "== ENCOUNTERED STP, terminating... ==";

/// Result of executing one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Instruction completed; the PC advances by the encoded length.
    Ok,
    /// Instruction took control of the PC (jumps, taken branches, returns);
    /// the step loop must not advance it.
    PcModified,
    /// Reserved for software-interrupt signalling; never produced.
    SiRaised,
    /// The fetched opcode has no table entry. The run stops cleanly.
    UnknownInstruction,
    /// The debug trap opcode was hit with debug mode enabled.
    EnterDebugger,
    /// A STP opcode halted the machine.
    Stop,
}

/// An instruction operand as produced by the addressing-mode decoder.
///
/// Operations read and write their target through this abstraction, so a
/// single ASL implementation serves both `ASL A` and `ASL $1234`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (implied and stack modes).
    None,
    /// The accumulator register is the target.
    Accumulator,
    /// Effective memory address of the operand.
    Address(u16),
}

/// W65C02S processor state and execution context.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait.
///
/// # Examples
///
/// ```
/// use w65c02::{Cpu, Memory, MemoryBus, StepOutcome};
///
/// let mut memory = Memory::new();
///
/// // Reset vector -> 0x0600, program: LDA #$42; STP
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x06);
/// memory.write(0x0600, 0xA9);
/// memory.write(0x0601, 0x42);
/// memory.write(0x0602, 0xDB);
///
/// let mut cpu = Cpu::new(memory);
/// assert_eq!(cpu.pc(), 0x0600);
///
/// assert_eq!(cpu.step(), StepOutcome::Ok);
/// assert_eq!(cpu.a(), 0x42);
/// assert_eq!(cpu.step(), StepOutcome::Stop);
/// ```
pub struct Cpu<M: MemoryBus> {
    pub(crate) a: u8,
    pub(crate) x: u8,
    pub(crate) y: u8,
    pub(crate) s: u8,
    pub(crate) pc: u16,
    pub(crate) p: Status,
    pub(crate) memory: M,
    debug: bool,
}

impl<M: MemoryBus> Cpu<M> {
    /// Creates a CPU and performs the reset sequence.
    ///
    /// The program counter is loaded from the little-endian reset vector at
    /// 0xFFFC/0xFFFD. A vector whose halves are both 0x00 or both 0xFF is
    /// almost certainly unset; that earns a warning but execution proceeds.
    /// S starts at 0xFF, A/X/Y at zero and P at its power-on value.
    pub fn new(memory: M) -> Self {
        if memory.size() > ADDRESSABLE_RANGE {
            // The PC is 16 bits, so the tail can never be reached.
            warn!("memory size is over the addressable limit of the CPU");
        }

        let low = memory.read(RESET_VECTOR_LOW);
        let high = memory.read(RESET_VECTOR_HIGH);

        if (low == 0x00 && high == 0x00) || (low == 0xFF && high == 0xFF) {
            warn!("reset vector appears not to be set");
        }

        Cpu {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            s: INITIAL_STACK_POINTER,
            pc: u16::from_le_bytes([low, high]),
            p: Status::new(),
            memory,
            debug: false,
        }
    }

    /// Executes one instruction.
    ///
    /// Fetches the opcode at PC, looks it up in the opcode table, computes
    /// the effective operand per the addressing mode, runs the operation and
    /// finally advances the PC by the encoded instruction length. When the
    /// operation reports [`StepOutcome::PcModified`], the PC is left exactly
    /// where the operation put it.
    ///
    /// An opcode without a table entry is diagnosed and reported as
    /// [`StepOutcome::UnknownInstruction`]; the PC is left pointing at it.
    pub fn step(&mut self) -> StepOutcome {
        let opcode = self.memory.read(self.pc);

        let entry = match OPCODE_TABLE[opcode as usize] {
            Some(entry) => entry,
            None => {
                error!("unknown opcode 0x{:02X} at PC 0x{:04X}", opcode, self.pc);
                return StepOutcome::UnknownInstruction;
            }
        };

        trace!("{} (0x{:02X})  PC: 0x{:04X}", entry.mnemonic, opcode, self.pc);

        let operand = self.operand(entry.mode);
        let outcome = instructions::dispatch(self, entry.operation, operand);

        if outcome != StepOutcome::PcModified {
            self.pc = self.pc.wrapping_add(entry.size as u16);
        }

        outcome
    }

    /// Free-runs the CPU until it halts.
    ///
    /// Steps repeatedly while the PC stays inside the populated image.
    /// A STP opcode prints the termination banner and returns
    /// [`StepOutcome::Stop`]; an unknown opcode ends the run with
    /// [`StepOutcome::UnknownInstruction`]. Falling off the end of memory
    /// returns [`StepOutcome::Ok`].
    pub fn execute(&mut self) -> StepOutcome {
        while (self.pc as usize) < self.memory.size() {
            match self.step() {
                StepOutcome::Stop => {
                    println!("\n{}", STOP_BANNER);
                    return StepOutcome::Stop;
                }
                StepOutcome::UnknownInstruction => return StepOutcome::UnknownInstruction,
                _ => {}
            }
        }

        StepOutcome::Ok
    }

    // ========== Stack ==========

    /// Pushes a byte: writes to `0x0100 | S`, then decrements S.
    ///
    /// The stack pointer wraps modulo 256; overflow is not a fault.
    pub fn push(&mut self, value: u8) {
        self.memory.write(STACK_PAGE | self.s as u16, value);
        self.s = self.s.wrapping_sub(1);
    }

    /// Pops a byte: increments S, then reads `0x0100 | S`.
    ///
    /// The stack pointer wraps modulo 256; underflow is not a fault.
    pub fn pop(&mut self) -> u8 {
        self.s = self.s.wrapping_add(1);
        self.memory.read(STACK_PAGE | self.s as u16)
    }

    // ========== Operand decoding ==========

    /// Computes the operand for the given addressing mode with the PC still
    /// pointing at the opcode byte. Operand bytes start at PC+1.
    fn operand(&self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Absolute => Operand::Address(self.operand_word()),
            AddressingMode::AbsoluteIndexedIndirect => {
                let pointer = self.operand_word().wrapping_add(self.x as u16);
                Operand::Address(self.read_word(pointer))
            }
            AddressingMode::AbsoluteIndexedX => {
                Operand::Address(self.operand_word().wrapping_add(self.x as u16))
            }
            AddressingMode::AbsoluteIndexedY => {
                Operand::Address(self.operand_word().wrapping_add(self.y as u16))
            }
            AddressingMode::AbsoluteIndirect => {
                Operand::Address(self.read_word(self.operand_word()))
            }
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Address(self.pc.wrapping_add(1)),
            AddressingMode::Implied | AddressingMode::Stack => Operand::None,
            AddressingMode::PCRelative => {
                let offset = self.operand_byte(1) as i8;
                Operand::Address(self.pc.wrapping_add(2).wrapping_add(offset as u16))
            }
            AddressingMode::ZeroPage => Operand::Address(self.operand_byte(1) as u16),
            AddressingMode::ZeroPageIndexedIndirect => {
                let pointer = self.operand_byte(1).wrapping_add(self.x);
                Operand::Address(self.read_word_zero_page(pointer))
            }
            AddressingMode::ZeroPageIndexedX => {
                Operand::Address(self.operand_byte(1).wrapping_add(self.x) as u16)
            }
            AddressingMode::ZeroPageIndexedY => {
                Operand::Address(self.operand_byte(1).wrapping_add(self.y) as u16)
            }
            AddressingMode::ZeroPageIndirect => {
                Operand::Address(self.read_word_zero_page(self.operand_byte(1)))
            }
            AddressingMode::ZeroPageIndirectIndexedY => {
                let base = self.read_word_zero_page(self.operand_byte(1));
                Operand::Address(base.wrapping_add(self.y as u16))
            }
            // The zero-page cell is the operand; the branch offset in the
            // third instruction byte is read by the bit-branch operation.
            AddressingMode::ZeroPageRelative => Operand::Address(self.operand_byte(1) as u16),
        }
    }

    fn operand_byte(&self, index: u16) -> u8 {
        self.memory.read(self.pc.wrapping_add(index))
    }

    fn operand_word(&self) -> u16 {
        u16::from_le_bytes([self.operand_byte(1), self.operand_byte(2)])
    }

    fn read_word(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.memory.read(addr), self.memory.read(addr.wrapping_add(1))])
    }

    /// Reads a little-endian word from page zero; the pointer's second byte
    /// wraps within the page.
    fn read_word_zero_page(&self, pointer: u8) -> u16 {
        u16::from_le_bytes([
            self.memory.read(pointer as u16),
            self.memory.read(pointer.wrapping_add(1) as u16),
        ])
    }

    /// Reads the byte an operand refers to.
    ///
    /// Panics on [`Operand::None`]: only implied/stack-mode operations
    /// receive it, and none of them read an operand.
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Accumulator => self.a,
            Operand::Address(addr) => self.memory.read(addr),
            Operand::None => unreachable!("implied operand has no value to read"),
        }
    }

    /// Writes the byte an operand refers to. See [`Cpu::read_operand`].
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.a = value,
            Operand::Address(addr) => self.memory.write(addr, value),
            Operand::None => unreachable!("implied operand has no target to write"),
        }
    }

    // ========== Register access ==========

    /// Returns the accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Returns the X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Returns the Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Returns the stack pointer. The full stack address is `0x0100 | S`.
    pub fn s(&self) -> u8 {
        self.s
    }

    /// Sets the stack pointer.
    pub fn set_s(&mut self, value: u8) {
        self.s = value;
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Returns a copy of the status register.
    pub fn p(&self) -> Status {
        self.p
    }

    /// Returns a mutable handle on the status register.
    pub fn p_mut(&mut self) -> &mut Status {
        &mut self.p
    }

    /// Convenience for the standard Z/N update after a data write.
    pub fn update_flags(&mut self, value: u8) {
        self.p.update_nz(value);
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Enables or disables the debug trap (the 0x02 opcode).
    pub fn set_debug(&mut self, value: bool) {
        self.debug = value;
    }

    /// Returns whether the debug trap is enabled.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub(crate) fn flag(&self, flag: Flag) -> bool {
        self.p.get(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Memory;

    fn cpu_with_program(origin: u16, program: &[u8]) -> Cpu<Memory> {
        let mut memory = Memory::new();
        memory.write(RESET_VECTOR_LOW, origin as u8);
        memory.write(RESET_VECTOR_HIGH, (origin >> 8) as u8);
        for (i, byte) in program.iter().enumerate() {
            memory.write(origin.wrapping_add(i as u16), *byte);
        }
        Cpu::new(memory)
    }

    #[test]
    fn test_reset_state() {
        let cpu = cpu_with_program(0x8000, &[]);

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.s(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert!(cpu.p().get(Flag::InterruptDisable));
        assert!(cpu.p().get(Flag::Unused));
    }

    #[test]
    fn test_unknown_opcode_leaves_pc() {
        let mut cpu = cpu_with_program(0x8000, &[0x03]);

        assert_eq!(cpu.step(), StepOutcome::UnknownInstruction);
        assert_eq!(cpu.pc(), 0x8000);
    }

    #[test]
    fn test_stack_roundtrip_and_wrap() {
        let mut cpu = cpu_with_program(0x8000, &[]);

        cpu.push(0x42);
        assert_eq!(cpu.s(), 0xFE);
        assert_eq!(cpu.memory().read(0x01FF), 0x42);
        assert_eq!(cpu.pop(), 0x42);
        assert_eq!(cpu.s(), 0xFF);

        // Wrap on overflow.
        cpu.set_s(0x00);
        cpu.push(0x99);
        assert_eq!(cpu.s(), 0xFF);
        assert_eq!(cpu.memory().read(0x0100), 0x99);
    }

    #[test]
    fn test_zero_page_pointer_wrap() {
        // A ($FF) pointer is split across the page-zero boundary: its high
        // byte comes from $00, not $100.
        let mut cpu = cpu_with_program(0x8000, &[0xD2, 0xFF]); // CMP ($FF)
        cpu.memory_mut().write(0x00FF, 0x34);
        cpu.memory_mut().write(0x0000, 0x12);

        assert_eq!(
            cpu.operand(AddressingMode::ZeroPageIndirect),
            Operand::Address(0x1234)
        );
    }

    #[test]
    fn test_pc_relative_operand() {
        let mut cpu = cpu_with_program(0x8000, &[0xD0, 0xFD]); // BNE -3
        assert_eq!(cpu.operand(AddressingMode::PCRelative), Operand::Address(0x7FFF));

        cpu.memory_mut().write(0x8001, 0x10);
        assert_eq!(cpu.operand(AddressingMode::PCRelative), Operand::Address(0x8012));
    }

    #[test]
    fn test_immediate_operand_is_its_own_address() {
        let cpu = cpu_with_program(0x8000, &[0xA9, 0x7B]);
        assert_eq!(cpu.operand(AddressingMode::Immediate), Operand::Address(0x8001));
    }
}
