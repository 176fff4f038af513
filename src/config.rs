//! # CPU Configuration
//!
//! Two knobs differ between real 6502 parts and between what hosts want:
//!
//! - [`Variant`]: whether the D flag switches ADC/SBC into BCD arithmetic. The
//!   NMOS 6502 honors it; the Ricoh 2A03 in the NES has the decimal circuitry
//!   cut and always adds in binary.
//! - [`IllegalOpcodes`]: whether the 105 undocumented opcode bytes run their
//!   NMOS side effects or fall back to a plain 2-cycle NOP.
//!
//! Both can be parsed from strings so a host can take them from a command line
//! or a config file. Anything malformed is reported as a [`ConfigError`] when
//! the CPU is built, never while it runs.

use std::fmt;
use std::str::FromStr;

/// Errors detected while building a CPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unrecognized CPU variant name.
    UnknownVariant(String),

    /// Unrecognized undocumented-opcode policy name.
    UnknownIllegalOpcodeMode(String),

    /// An opcode table entry failed its consistency check.
    MalformedOpcodeTable {
        /// The offending opcode byte
        opcode: u8,
        /// What was wrong with it
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::UnknownVariant(name) => {
                write!(f, "unknown CPU variant '{}' (expected nmos or 2a03)", name)
            }
            ConfigError::UnknownIllegalOpcodeMode(name) => {
                write!(
                    f,
                    "unknown illegal opcode mode '{}' (expected nop or emulate)",
                    name
                )
            }
            ConfigError::MalformedOpcodeTable { opcode, reason } => {
                write!(f, "opcode table entry 0x{:02X} is malformed: {}", opcode, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Which 6502 part is being emulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// MOS NMOS 6502 with decimal mode.
    #[default]
    Nmos6502,

    /// Ricoh 2A03/2A07: NMOS core with decimal mode disabled.
    Ricoh2A03,
}

impl Variant {
    /// Whether ADC/SBC honor the D flag.
    pub fn decimal_enabled(self) -> bool {
        matches!(self, Variant::Nmos6502)
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nmos" | "6502" | "nmos6502" => Ok(Variant::Nmos6502),
            "2a03" | "2a07" | "ricoh" | "nes" => Ok(Variant::Ricoh2A03),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

/// What the CPU does with undocumented opcode bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IllegalOpcodes {
    /// Treat every undocumented byte as a 1-byte, 2-cycle NOP.
    #[default]
    Nop,

    /// Reproduce the NMOS side effects, operand sizes and timings.
    Emulate,
}

impl FromStr for IllegalOpcodes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nop" | "off" => Ok(IllegalOpcodes::Nop),
            "emulate" | "on" => Ok(IllegalOpcodes::Emulate),
            _ => Err(ConfigError::UnknownIllegalOpcodeMode(s.to_string())),
        }
    }
}

/// Construction-time CPU configuration.
///
/// ```
/// use cpu6502::{CpuConfig, IllegalOpcodes, Variant};
///
/// let config = CpuConfig::default()
///     .with_variant("2a03".parse().unwrap())
///     .with_illegal_opcodes(IllegalOpcodes::Emulate);
///
/// assert_eq!(config.variant, Variant::Ricoh2A03);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuConfig {
    pub variant: Variant,
    pub illegal_opcodes: IllegalOpcodes,
}

impl CpuConfig {
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_illegal_opcodes(mut self, illegal_opcodes: IllegalOpcodes) -> Self {
        self.illegal_opcodes = illegal_opcodes;
        self
    }
}
