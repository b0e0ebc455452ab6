//! # Inspection Console
//!
//! A line-oriented monitor that sits on top of a running CPU. The binary
//! uses it as its main loop: the CPU free-runs until a debug trap drops into
//! the console, where the user can dump registers, inspect memory, single
//! step, resume, or leave.
//!
//! The console holds a mutable borrow of the CPU but only ever touches it
//! through the CPU's public interface, and only while the CPU is not
//! stepping. Input and output are generic so tests can script a session
//! through in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::cpu::{Cpu, StepOutcome, STOP_BANNER};
use crate::memory::MemoryBus;

/// Prompt shown for every console line.
pub const PROMPT: &str = "> ";

/// Banner printed when a debug trap pauses execution.
pub const BREAKPOINT_BANNER: &str = "== BREAKPOINT REACHED ==";

const UNKNOWN_COMMAND_MSG: &str = "Unknown command (type help for more info).";

const HELP_MSG: &str = "Available commands:\n\
    \x20 d/dump - dump registers\n\
    \x20 g/get <address> - get value at address\n\
    \x20 g/get <start> <count> - get <count> values starting at <start>\n\
    \x20 s/step - step one instruction\n\
    \x20 c/continue - continue execution\n\
    \x20 h/help - show this help message\n\
    \x20 q/exit - quit";

/// Why [`Monitor::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorExit {
    /// A STP opcode halted the machine.
    Stopped,
    /// The program counter ran past the populated image.
    EndOfMemory,
    /// An unknown opcode ended the run.
    UnknownInstruction,
    /// The user asked to leave (or input reached end of file).
    UserExit,
}

enum ConsoleOutcome {
    Resume,
    Finished,
    Exit,
}

enum CommandName {
    Dump,
    Get,
    Step,
    Continue,
    Help,
    Exit,
}

struct Command {
    name: CommandName,
    args: Vec<String>,
}

impl Command {
    fn parse(line: &str) -> Option<Command> {
        let mut parts = line.split_whitespace();

        let name = match parts.next()? {
            "dump" | "d" => CommandName::Dump,
            "get" | "g" => CommandName::Get,
            "step" | "s" => CommandName::Step,
            "continue" | "c" => CommandName::Continue,
            "help" | "h" => CommandName::Help,
            "exit" | "e" | "q" => CommandName::Exit,
            _ => return None,
        };

        Some(Command {
            name,
            args: parts.map(String::from).collect(),
        })
    }
}

fn parse_hex(text: &str) -> Option<u16> {
    let digits = text.trim_start_matches("0x").trim_start_matches('$');

    u16::from_str_radix(digits, 16).ok()
}

/// The interactive monitor.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use w65c02::{Cpu, Memory, MemoryBus, Monitor, MonitorExit};
///
/// let mut memory = Memory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x06);
/// memory.write(0x0600, 0xDB); // STP
///
/// let mut cpu = Cpu::new(memory);
/// let mut monitor = Monitor::new(&mut cpu);
///
/// let mut input = Cursor::new(Vec::new());
/// let mut output = Vec::new();
/// let exit = monitor.run(&mut input, &mut output).unwrap();
/// assert_eq!(exit, MonitorExit::Stopped);
/// ```
pub struct Monitor<'a, M: MemoryBus> {
    cpu: &'a mut Cpu<M>,
}

impl<'a, M: MemoryBus> Monitor<'a, M> {
    /// Creates a monitor around an existing CPU.
    pub fn new(cpu: &'a mut Cpu<M>) -> Self {
        Monitor { cpu }
    }

    /// Free-runs the CPU, dropping into the console on debug traps.
    ///
    /// Runs until the machine stops, the PC leaves the populated image, an
    /// unknown opcode is hit, or the user exits from the console.
    pub fn run(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> io::Result<MonitorExit> {
        while (self.cpu.pc() as usize) < self.cpu.memory().size() {
            match self.cpu.step() {
                StepOutcome::EnterDebugger => {
                    writeln!(output, "\n{}", BREAKPOINT_BANNER)?;

                    match self.console(input, output)? {
                        ConsoleOutcome::Resume => {}
                        ConsoleOutcome::Finished => return Ok(MonitorExit::Stopped),
                        ConsoleOutcome::Exit => return Ok(MonitorExit::UserExit),
                    }
                }
                StepOutcome::Stop => {
                    writeln!(output, "\n{}", STOP_BANNER)?;
                    return Ok(MonitorExit::Stopped);
                }
                StepOutcome::UnknownInstruction => return Ok(MonitorExit::UnknownInstruction),
                _ => {}
            }
        }

        Ok(MonitorExit::EndOfMemory)
    }

    /// The console loop proper. Returns how the session should proceed.
    fn console(
        &mut self,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> io::Result<ConsoleOutcome> {
        let mut line = String::new();

        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                // End of input behaves like an explicit exit.
                return Ok(ConsoleOutcome::Exit);
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let command = match Command::parse(trimmed) {
                Some(command) => command,
                None => {
                    writeln!(output, "{}", UNKNOWN_COMMAND_MSG)?;
                    continue;
                }
            };

            match command.name {
                CommandName::Dump => self.dump_registers(output)?,
                CommandName::Get => self.get(output, &command.args)?,
                CommandName::Step => match self.cpu.step() {
                    StepOutcome::EnterDebugger => {
                        writeln!(output, "\n{}", BREAKPOINT_BANNER)?;
                    }
                    StepOutcome::Stop => {
                        writeln!(output, "\n{}", STOP_BANNER)?;
                        return Ok(ConsoleOutcome::Finished);
                    }
                    _ => {}
                },
                CommandName::Continue => return Ok(ConsoleOutcome::Resume),
                CommandName::Help => writeln!(output, "{}", HELP_MSG)?,
                CommandName::Exit => return Ok(ConsoleOutcome::Exit),
            }
        }
    }

    fn get(&self, output: &mut dyn Write, args: &[String]) -> io::Result<()> {
        match args {
            [] => writeln!(output, "Missing address."),
            [addr] => match parse_hex(addr) {
                Some(addr) => self.dump_memory(output, addr, 1),
                None => writeln!(output, "Invalid address: {}", addr),
            },
            [start, count] => match (parse_hex(start), parse_hex(count)) {
                (Some(start), Some(count)) => self.dump_memory(output, start, count as usize),
                _ => writeln!(output, "Invalid address: {} {}", start, count),
            },
            _ => writeln!(output, "Too many arguments."),
        }
    }

    fn dump_registers(&self, output: &mut dyn Write) -> io::Result<()> {
        let cpu = &*self.cpu;

        writeln!(output, "format: HEX (UNSIGNED, SIGNED)")?;
        writeln!(
            output,
            "A:  {:02x} ({}, {})",
            cpu.a(),
            cpu.a(),
            cpu.a() as i8
        )?;
        writeln!(output, "X:  {:02x}", cpu.x())?;
        writeln!(output, "Y:  {:02x}", cpu.y())?;
        writeln!(output, "S:  {:02x}", cpu.s())?;
        writeln!(output, "PC: {:04x}", cpu.pc())?;
        writeln!(output, "P:  {:08b}", cpu.p().byte())?;
        writeln!(output, "    NV-BDIZC")
    }

    /// Hex dump: 16 bytes per row, a column separator after the 8th.
    fn dump_memory(&self, output: &mut dyn Write, start: u16, count: usize) -> io::Result<()> {
        for i in 0..count {
            let addr = start.wrapping_add(i as u16);
            let byte = self.cpu.memory().read(addr);

            if i % 16 == 0 {
                write!(output, "\n{:04x}: {:02x}", addr, byte)?;
            } else if i % 8 == 0 {
                write!(output, " | {:02x}", byte)?;
            } else {
                write!(output, " {:02x}", byte)?;
            }
        }

        writeln!(output)?;
        writeln!(output)
    }
}
