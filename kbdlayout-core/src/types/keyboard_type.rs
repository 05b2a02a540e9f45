use std::fmt;

use crate::error::ConfigurationError;

/// Keyboard type discriminant (`KBD_TYPE`).
///
/// Selects the column of `_NE` rows in a layout table. The recognized domain
/// is 1 through 6; 4 is the common 101/102-key enhanced keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyboardType(u8);

impl KeyboardType {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(value: u8) -> Result<Self, ConfigurationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigurationError::InvalidKeyboardType(value))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based column in an `_NE` row
    pub const fn column(self) -> usize {
        (self.0 - Self::MIN) as usize
    }

    /// Inverse of [`KeyboardType::column`]
    pub fn from_column(column: usize) -> Option<Self> {
        u8::try_from(column)
            .ok()
            .and_then(|c| c.checked_add(Self::MIN))
            .and_then(|value| Self::new(value).ok())
    }

    /// All recognized keyboard types in ascending order
    pub fn all() -> impl Iterator<Item = KeyboardType> {
        (Self::MIN..=Self::MAX).map(KeyboardType)
    }
}

impl Default for KeyboardType {
    fn default() -> Self {
        Self(4)
    }
}

impl TryFrom<u8> for KeyboardType {
    type Error = ConfigurationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for KeyboardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
