//! # Memory Bus Abstraction
//!
//! The CPU reaches RAM, ROM and devices only through the [`MemoryBus`] trait.
//! What sits behind an address (mirroring, banking, memory-mapped I/O) is the
//! bus implementation's business; the core only ever hands it 16-bit
//! addresses and bytes.
//!
//! Implementations should never panic: real hardware has no bus errors, so
//! an unmapped read returns whatever the implementation likes and a write to
//! ROM is dropped. Reads take `&mut self` because devices such as status
//! registers change state when read.

/// Byte-wide access to the CPU's 64KB address space.
///
/// ```
/// use cpu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// A bus with 2KB of RAM mirrored through 0x0000-0x1FFF and a status
/// register that clears on read:
///
/// ```
/// use cpu6502::MemoryBus;
///
/// struct MirroredBus {
///     ram: [u8; 0x0800],
///     status: u8,
/// }
///
/// impl MemoryBus for MirroredBus {
///     fn read(&mut self, addr: u16) -> u8 {
///         match addr {
///             0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize],
///             0x2002 => std::mem::take(&mut self.status),
///             _ => 0xFF,
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x2000 {
///             self.ram[(addr & 0x07FF) as usize] = value;
///         }
///     }
/// }
///
/// let mut bus = MirroredBus { ram: [0; 0x0800], status: 0x80 };
/// bus.write(0x0801, 0x33);
/// assert_eq!(bus.read(0x0001), 0x33);
/// assert_eq!(bus.read(0x2002), 0x80);
/// assert_eq!(bus.read(0x2002), 0x00);
/// ```
pub trait MemoryBus {
    /// Returns the byte at `addr`.
    ///
    /// Must never panic. Unmapped addresses may return any value.
    fn read(&mut self, addr: u16) -> u8;

    /// Stores `value` at `addr`.
    ///
    /// Must never panic. Read-only or unmapped addresses may drop the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Level of the IRQ line; true means asserted.
    ///
    /// The line is level-sensitive: the CPU samples it at every instruction
    /// boundary and services it while it stays asserted and the I flag is
    /// clear. Buses without interrupt-capable devices keep the default.
    ///
    /// ```
    /// use cpu6502::{MemoryBus, FlatMemory};
    ///
    /// let mem = FlatMemory::new();
    /// assert!(!mem.irq_active());
    /// ```
    fn irq_active(&self) -> bool {
        false
    }
}

/// A borrowed bus is a bus, so the CPU can drive memory the host keeps owning.
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0xFFFD, 0x80);
///
/// let cpu = CPU::new(&mut mem);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
impl<B: MemoryBus + ?Sized> MemoryBus for &mut B {
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }

    fn irq_active(&self) -> bool {
        (**self).irq_active()
    }
}

/// 64KB of plain RAM with no devices mapped.
///
/// Every address (0x0000-0xFFFF) is writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
/// memory.load(0x8000, &[0xA9, 0x05]); // LDA #$05
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// All 64KB zeroed.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping at 0xFFFF.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Reads without going through the bus trait (no `&mut` needed).
    pub fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&mut self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
