//! # W65C02S CPU Emulator
//!
//! A deterministic, instruction-stepped emulator for a W65C02S-class 8-bit
//! microprocessor: fetch, decode, execute, repeat until the program halts.
//! A memory-mapped byte sink acts as a character output device and a small
//! line-oriented monitor allows post-mortem inspection and single stepping.
//!
//! ## Quick start
//!
//! ```rust
//! use w65c02::{Cpu, Memory, MemoryBus, StepOutcome};
//!
//! let mut memory = Memory::new();
//!
//! // Reset vector -> 0x8000
//! memory.write(0xFFFC, 0x00);
//! memory.write(0xFFFD, 0x80);
//!
//! // LDA #$42; STA $1000; STP
//! for (i, byte) in [0xA9, 0x42, 0x8D, 0x00, 0x10, 0xDB].into_iter().enumerate() {
//!     memory.write(0x8000 + i as u16, byte);
//! }
//!
//! let mut cpu = Cpu::new(memory);
//! assert_eq!(cpu.execute(), StepOutcome::Stop);
//! assert_eq!(cpu.memory().read(0x1000), 0x42);
//! ```
//!
//! ## Architecture
//!
//! - **Table-driven decode**: a fixed 256-entry [`OPCODE_TABLE`] maps every
//!   opcode to an operation kind and addressing mode; instruction sizes fall
//!   out of the mode.
//! - **Orthogonal execution**: one function per operation kind, reading and
//!   writing its target through a small operand abstraction that hides
//!   whether the target is the accumulator or memory.
//! - **Trait-based memory**: the CPU is generic over [`MemoryBus`], so tests
//!   and embedders can substitute their own bus.
//! - **Single-threaded and synchronous**: [`Cpu::step`] is the atomic unit;
//!   nothing interrupts it and the free-run loop checks for termination only
//!   between instructions.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, operand decoding and the step/execute loop
//! - `memory` - `MemoryBus` trait and the flat image with the print device
//! - `status` - processor status register
//! - `opcodes` - operation kinds and the decode table
//! - `addressing` - addressing mode enumeration
//! - `monitor` - the interactive inspection console

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod monitor;
pub mod opcodes;
pub mod status;

// Operation bodies (not part of the public API).
mod instructions;

// Re-export the public API.
pub use addressing::AddressingMode;
pub use cpu::{
    Cpu, Operand, StepOutcome, BREAK_VECTOR_HIGH, BREAK_VECTOR_LOW, INITIAL_STACK_POINTER,
    RESET_VECTOR_HIGH, RESET_VECTOR_LOW, STACK_PAGE, STOP_BANNER,
};
pub use memory::{Memory, MemoryBus, ADDRESSABLE_RANGE, DEFAULT_PRINT_DEVICE};
pub use monitor::{Monitor, MonitorExit, BREAKPOINT_BANNER};
pub use opcodes::{OpcodeEntry, Operation, OPCODE_TABLE};
pub use status::{Flag, Status, INITIAL_STATUS};

/// Fatal start-up errors.
///
/// Runtime instruction flow never produces these; it is reported through
/// [`StepOutcome`] instead.
#[derive(Error, Debug)]
pub enum EmulatorError {
    /// The binary image could not be read.
    #[error("could not open {}: {}. Make sure the assembled binary is there.", path.display(), source)]
    Load {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
