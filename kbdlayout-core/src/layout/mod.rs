pub mod entry;
pub mod table;
pub mod qwerty;
pub mod names;

pub use entry::{ScancodeEntry, VkVariants};
pub use table::LayoutTable;
pub use qwerty::{qwerty_entries, QWERTY};
pub use names::{key_name, KEY_NAMES};
