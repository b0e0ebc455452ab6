//! # Memory Bus and Image
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from a
//! specific memory implementation, and [`Memory`], the flat 64KB image used
//! by the emulator binary.
//!
//! `Memory` carries the one peripheral this machine has: a *print device*, a
//! designated cell whose writes are also emitted as a character to the host
//! output sink. The device cell remains ordinary readable memory.
//!
//! ## Design principles
//!
//! Matching 6502 hardware behavior:
//! - No bus errors; reads and writes always succeed.
//! - Reads have no side effects.
//! - The addressable space is exactly covered, so out-of-range accesses
//!   cannot occur from the core's own code paths.

use std::io::{self, Read, Write};

use log::warn;

/// Number of addresses a 16-bit program counter can reach.
pub const ADDRESSABLE_RANGE: usize = 0x10000;

/// Default address of the memory-mapped print device.
pub const DEFAULT_PRINT_DEVICE: u16 = 0xFFFB;

/// Memory bus trait for CPU byte access.
///
/// Implementations provide the memory backend for the CPU; all fetches,
/// loads, stores and stack traffic go through this abstraction.
///
/// # Design
///
/// - `read(&self)`: immutable, side-effect free
/// - `write(&mut self)`: mutable, side effects explicit
/// - `size(&self)`: extent of the populated image; the execution loop stops
///   once the program counter runs past it. Reads beyond it must still be
///   legal (the flat image returns its zero padding).
///
/// # Examples
///
/// ```
/// use w65c02::{Memory, MemoryBus};
///
/// let mut mem = Memory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// assert_eq!(mem.size(), 0x10000);
/// ```
pub trait MemoryBus {
    /// Reads the byte at the given 16-bit address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the given 16-bit address.
    fn write(&mut self, addr: u16, value: u8);

    /// Returns the extent of the populated image.
    fn size(&self) -> usize;
}

/// Flat memory image with a memory-mapped character output device.
///
/// The image always covers the full 16-bit address space (a smaller requested
/// size is padded up, so the CPU can never index out of bounds). Writes to
/// the configured print device address store the byte *and* emit it to the
/// output sink, which defaults to standard output.
///
/// # Examples
///
/// ```
/// use w65c02::{Memory, MemoryBus, DEFAULT_PRINT_DEVICE};
///
/// let mut mem = Memory::new();
/// assert_eq!(mem.print_device(), DEFAULT_PRINT_DEVICE);
///
/// // Load a program image from any reader.
/// mem.import(&[0xA9u8, 0x42][..]).unwrap();
/// assert_eq!(mem.read(0x0000), 0xA9);
/// assert_eq!(mem.read(0x0001), 0x42);
/// assert_eq!(mem.read(0x0002), 0x00); // zero beyond the image
/// ```
pub struct Memory {
    data: Vec<u8>,
    /// Extent of the populated image: everything a fresh memory holds, or
    /// the byte count of the last [`Memory::import`]. The free-run loop
    /// treats the program counter passing this as falling off the program.
    populated: usize,
    print_device: u16,
    sink: Box<dyn Write>,
}

impl Memory {
    /// Creates a zeroed 64KB memory with the print device at its default
    /// address, writing device output to standard output.
    pub fn new() -> Self {
        Self::with_size(ADDRESSABLE_RANGE)
    }

    /// Creates a zeroed memory of at least `size` bytes.
    ///
    /// Sizes below the 16-bit addressable range are padded up to it so that
    /// every address the CPU can form stays in bounds. Larger sizes are kept
    /// as requested; the CPU warns about the unreachable tail at reset.
    pub fn with_size(size: usize) -> Self {
        let data = vec![0; size.max(ADDRESSABLE_RANGE)];
        let populated = data.len();

        Memory {
            data,
            populated,
            print_device: DEFAULT_PRINT_DEVICE,
            sink: Box::new(io::stdout()),
        }
    }

    /// Redirects print device output, e.g. into a buffer for tests.
    pub fn set_sink(&mut self, sink: Box<dyn Write>) {
        self.sink = sink;
    }

    /// Returns the current print device address.
    pub fn print_device(&self) -> u16 {
        self.print_device
    }

    /// Moves the print device to another cell.
    pub fn set_print_device(&mut self, addr: u16) {
        self.print_device = addr;
    }

    /// Copies a byte stream into memory starting at address 0 and returns the
    /// number of bytes imported.
    ///
    /// Bytes beyond the memory size are dropped with a warning. The rest of
    /// the image keeps its previous (zero) contents, and the populated extent
    /// reported by [`MemoryBus::size`] shrinks to the image length.
    pub fn import<R: Read>(&mut self, mut reader: R) -> io::Result<usize> {
        let mut image = Vec::new();
        reader.read_to_end(&mut image)?;

        let len = image.len().min(self.data.len());
        if len < image.len() {
            warn!(
                "image is {} bytes but memory holds {}; truncating",
                image.len(),
                self.data.len()
            );
        }

        self.data[..len].copy_from_slice(&image[..len]);
        self.populated = len;

        Ok(len)
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Memory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        if addr == self.print_device {
            if let Err(e) = self.sink.write_all(&[value]).and_then(|_| self.sink.flush()) {
                warn!("print device write failed: {}", e);
            }
        }

        self.data[addr as usize] = value;
    }

    fn size(&self) -> usize {
        self.populated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Write half of a shared buffer, so tests can capture device output.
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_read_write_roundtrip() {
        let mut mem = Memory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_small_size_padded_to_addressable_range() {
        let mem = Memory::with_size(0x400);

        assert_eq!(mem.size(), ADDRESSABLE_RANGE);
        assert_eq!(mem.read(0xFFFF), 0x00);
    }

    #[test]
    fn test_import_zero_pads() {
        let mut mem = Memory::new();
        let imported = mem.import(&[0x01u8, 0x02, 0x03][..]).unwrap();

        assert_eq!(imported, 3);
        assert_eq!(mem.read(0x0000), 0x01);
        assert_eq!(mem.read(0x0002), 0x03);
        assert_eq!(mem.read(0x0003), 0x00);

        // The populated extent is the image, but every address stays
        // readable thanks to the zero padding.
        assert_eq!(mem.size(), 3);
        assert_eq!(mem.read(0xFFFF), 0x00);
    }

    #[test]
    fn test_print_device_emits_and_stores() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let mut mem = Memory::new();
        mem.set_sink(Box::new(SharedSink(Arc::clone(&captured))));

        mem.write(DEFAULT_PRINT_DEVICE, b'H');
        mem.write(DEFAULT_PRINT_DEVICE, b'I');

        // Emitted to the sink...
        assert_eq!(*captured.lock().unwrap(), b"HI");
        // ...and stored like an ordinary cell.
        assert_eq!(mem.read(DEFAULT_PRINT_DEVICE), b'I');
    }

    #[test]
    fn test_print_device_relocation() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let mut mem = Memory::new();
        mem.set_sink(Box::new(SharedSink(Arc::clone(&captured))));
        mem.set_print_device(0x2000);

        mem.write(DEFAULT_PRINT_DEVICE, b'X'); // old address: plain store
        mem.write(0x2000, b'Y');

        assert_eq!(*captured.lock().unwrap(), b"Y");
    }

    #[test]
    fn test_reads_have_no_side_effects() {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let mut mem = Memory::new();
        mem.set_sink(Box::new(SharedSink(Arc::clone(&captured))));

        mem.write(DEFAULT_PRINT_DEVICE, b'A');
        let _ = mem.read(DEFAULT_PRINT_DEVICE);
        let _ = mem.read(DEFAULT_PRINT_DEVICE);

        assert_eq!(*captured.lock().unwrap(), b"A");
    }
}
