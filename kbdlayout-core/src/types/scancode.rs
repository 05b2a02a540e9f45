use std::fmt;
use std::str::FromStr;

/// Escape byte sent by the keyboard before some make codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScancodePrefix {
    None,
    E0,
    E1,
}

impl ScancodePrefix {
    pub const fn byte(self) -> u8 {
        match self {
            ScancodePrefix::None => 0x00,
            ScancodePrefix::E0 => 0xE0,
            ScancodePrefix::E1 => 0xE1,
        }
    }

    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(ScancodePrefix::None),
            0xE0 => Some(ScancodePrefix::E0),
            0xE1 => Some(ScancodePrefix::E1),
            _ => None,
        }
    }
}

/// Raw hardware identifier of a physical key position.
///
/// The high byte holds the escape prefix (`0x00`, `0xE0` or `0xE1`) and the
/// low byte the make code, so right control is `0xE01D`. Any `u16` is a
/// valid value; whether it maps to anything is up to the layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scancode(u16);

impl Scancode {
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn from_parts(prefix: ScancodePrefix, code: u8) -> Self {
        Self(((prefix.byte() as u16) << 8) | code as u16)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Make code without the prefix
    #[allow(clippy::cast_possible_truncation)] // truncating on purpose
    pub const fn code(self) -> u8 {
        self.0 as u8
    }

    /// Returns `None` when the high byte is not a known escape prefix
    pub const fn prefix(self) -> Option<ScancodePrefix> {
        ScancodePrefix::from_byte((self.0 >> 8) as u8)
    }

    pub const fn is_extended(self) -> bool {
        matches!(self.prefix(), Some(ScancodePrefix::E0 | ScancodePrefix::E1))
    }
}

impl From<u16> for Scancode {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Scancode> for u16 {
    fn from(scancode: Scancode) -> Self {
        scancode.0
    }
}

impl fmt::Display for Scancode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 <= 0xFF {
            write!(f, "0x{:02X}", self.0)
        } else {
            write!(f, "0x{:04X}", self.0)
        }
    }
}

/// Error returned when a scancode string is not a hexadecimal `u16`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid scancode: {0:?}")]
pub struct ParseScancodeError(pub String);

impl FromStr for Scancode {
    type Err = ParseScancodeError;

    /// Parses `1E`, `0x1E`, `E01D` or `0xE01D`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        u16::from_str_radix(digits, 16)
            .map(Scancode)
            .map_err(|_| ParseScancodeError(s.to_string()))
    }
}
