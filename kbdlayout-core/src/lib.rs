pub mod types;
pub mod error;
pub mod layout;

pub use types::*;

// Re-export commonly used types
pub use layout::{LayoutTable, ScancodeEntry, VkVariants, qwerty_entries, key_name};
pub use error::{ConfigurationError, UnknownScancode, Error, Result};
