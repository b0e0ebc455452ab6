//! Command-line front end for the W65C02S emulator.
//!
//! Loads a raw binary image into memory, points the reset vector machinery
//! at it, and runs the CPU under the interactive monitor.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use w65c02::{
    Cpu, EmulatorError, Memory, Monitor, MonitorExit, ADDRESSABLE_RANGE, DEFAULT_PRINT_DEVICE,
};

#[derive(Parser)]
#[command(name = "w65c02")]
#[command(about = "Instruction-stepped W65C02S emulator")]
#[command(version)]
struct Args {
    /// Path to the assembled binary image, loaded at address 0
    #[arg(value_name = "BINARY")]
    image: PathBuf,

    /// Enable the debug trap (opcode 0x02 enters the monitor)
    #[arg(short, long)]
    debug: bool,

    /// Trace every executed instruction
    #[arg(short, long)]
    verbose: bool,

    /// Address of the print device (hex)
    #[arg(long, value_name = "ADDR", value_parser = parse_hex_u16)]
    print_device: Option<u16>,

    /// Memory size in bytes (hex); sizes below 0x10000 are padded up
    #[arg(long, value_name = "SIZE", value_parser = parse_hex_usize)]
    memory_size: Option<usize>,
}

fn parse_hex_u16(text: &str) -> Result<u16, String> {
    let digits = text.trim_start_matches("0x").trim_start_matches('$');

    u16::from_str_radix(digits, 16).map_err(|_| format!("Invalid address: {}", text))
}

fn parse_hex_usize(text: &str) -> Result<usize, String> {
    let digits = text.trim_start_matches("0x").trim_start_matches('$');

    usize::from_str_radix(digits, 16).map_err(|_| format!("Invalid size: {}", text))
}

fn load_image(memory: &mut Memory, path: &PathBuf) -> Result<usize, EmulatorError> {
    let file = File::open(path).map_err(|source| EmulatorError::Load {
        path: path.clone(),
        source,
    })?;

    memory
        .import(BufReader::new(file))
        .map_err(|source| EmulatorError::Load {
            path: path.clone(),
            source,
        })
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    let mut memory = Memory::with_size(args.memory_size.unwrap_or(ADDRESSABLE_RANGE));
    memory.set_print_device(args.print_device.unwrap_or(DEFAULT_PRINT_DEVICE));

    match load_image(&mut memory, &args.image) {
        Ok(bytes) => log::debug!("loaded {} bytes from {}", bytes, args.image.display()),
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    let mut cpu = Cpu::new(memory);
    cpu.set_debug(args.debug);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let mut monitor = Monitor::new(&mut cpu);
    match monitor.run(&mut input, &mut output) {
        Ok(MonitorExit::UnknownInstruction) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("console i/o failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
