//! # Register File
//!
//! The programmer-visible state of the 6502: accumulator, the two index
//! registers, the stack pointer, the program counter and the packed status
//! register.
//!
//! The status register is a [`StatusFlags`] bit set rather than a collection
//! of loose booleans, so a flag can only ever be one of the eight hardware
//! bits and the packed byte pushed by PHP/BRK/IRQ falls out of the
//! representation directly.

use bitflags::bitflags;

/// Base address of the hardware stack page (0x0100-0x01FF).
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset.
pub const RESET_SP: u8 = 0xFD;

bitflags! {
    /// 6502 processor status register (NV-BDIZC).
    ///
    /// ```
    /// use cpu6502::StatusFlags;
    ///
    /// let p = StatusFlags::CARRY | StatusFlags::NEGATIVE;
    /// assert_eq!(p.bits(), 0b1000_0001);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusFlags: u8 {
        /// Carry (bit 0)
        const CARRY = 0b0000_0001;
        /// Zero (bit 1)
        const ZERO = 0b0000_0010;
        /// Interrupt disable (bit 2)
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Decimal mode (bit 3)
        const DECIMAL = 0b0000_1000;
        /// Break (bit 4). Only meaningful in copies pushed to the stack.
        const BREAK = 0b0001_0000;
        /// Unused (bit 5). Always reads as 1.
        const UNUSED = 0b0010_0000;
        /// Overflow (bit 6)
        const OVERFLOW = 0b0100_0000;
        /// Negative (bit 7)
        const NEGATIVE = 0b1000_0000;
    }
}

impl StatusFlags {
    /// Status register contents after reset: interrupts disabled, bit 5 set.
    pub const POWER_ON: StatusFlags =
        StatusFlags::INTERRUPT_DISABLE.union(StatusFlags::UNUSED);

    /// The two bits that exist only on the stack copy of the register.
    pub const STACK_ONLY: StatusFlags = StatusFlags::BREAK.union(StatusFlags::UNUSED);

    /// Byte pushed by PHP and BRK: Break and Unused forced to 1.
    pub fn pushed_by_instruction(self) -> u8 {
        (self | StatusFlags::STACK_ONLY).bits()
    }

    /// Byte pushed by a hardware interrupt: Break cleared, Unused forced to 1.
    pub fn pushed_by_interrupt(self) -> u8 {
        ((self - StatusFlags::BREAK) | StatusFlags::UNUSED).bits()
    }

    /// Merges a byte pulled by PLP/RTI into the live register.
    ///
    /// The six real flags come from `pulled`; Break and Unused keep their
    /// current values.
    pub fn restored_from(self, pulled: u8) -> StatusFlags {
        let pulled = StatusFlags::from_bits_retain(pulled) - StatusFlags::STACK_ONLY;
        pulled | (self & StatusFlags::STACK_ONLY)
    }
}

impl Default for StatusFlags {
    fn default() -> Self {
        StatusFlags::POWER_ON
    }
}

/// The 6502 register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Stack pointer (offset into page 0x01)
    pub sp: u8,
    /// Program counter
    pub pc: u16,
    /// Processor status
    pub p: StatusFlags,
}

impl Registers {
    /// Power-on register state with the program counter at `pc`.
    pub fn power_on(pc: u16) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sp: RESET_SP,
            pc,
            p: StatusFlags::POWER_ON,
        }
    }

    /// Returns true if every bit in `flag` is set.
    pub fn flag(&self, flag: StatusFlags) -> bool {
        self.p.contains(flag)
    }

    /// Sets or clears the bits in `flag`.
    pub fn set_flag(&mut self, flag: StatusFlags, value: bool) {
        self.p.set(flag, value);
    }

    /// Updates Zero and Negative from `value`.
    pub fn set_zn(&mut self, value: u8) {
        self.p.set(StatusFlags::ZERO, value == 0);
        self.p.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }

    /// Full stack address for the current stack pointer.
    pub fn stack_address(&self) -> u16 {
        STACK_BASE | self.sp as u16
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::power_on(0x0000)
    }
}
