//! Error types for layout table construction and lookup

use thiserror::Error;

use crate::types::{KeyboardType, Scancode};

/// Table construction failures. Fatal to the layout being built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Duplicate scancode: {0}")]
    DuplicateScancode(Scancode),

    #[error("Scancode {scancode} has no virtual key for keyboard type {keyboard_type}")]
    UncoveredKeyboardType {
        scancode: Scancode,
        keyboard_type: KeyboardType,
    },

    #[error(
        "Invalid keyboard type: {0} (expected {min}..={max})",
        min = KeyboardType::MIN,
        max = KeyboardType::MAX
    )]
    InvalidKeyboardType(u8),
}

/// Lookup miss: the scancode has no entry in the table
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No virtual key mapped for scancode {0}")]
pub struct UnknownScancode(pub Scancode);

/// Either failure, for callers that build and look up in one place
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Layout configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    UnknownScancode(#[from] UnknownScancode),
}

pub type Result<T> = std::result::Result<T, Error>;
