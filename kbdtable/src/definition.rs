use kbdlayout_core::{ConfigurationError, KeyboardType, LayoutTable, Scancode, ScancodeEntry};
use log::debug;

/// A layout definition with includes expanded and `#undef`s applied.
///
/// Entries keep their declaration order; redefinitions without a preceding
/// `#undef` are kept as-is so that [`LayoutTable::build`] reports them as
/// duplicates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutDefinition {
    /// Last `#define KBD_TYPE` seen, if any
    pub keyboard_type: Option<KeyboardType>,
    pub entries: Vec<ScancodeEntry>,
}

impl LayoutDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, entry: ScancodeEntry) {
        self.entries.push(entry);
    }

    /// Drops every earlier definition of `scancode`. Returns false if there was none.
    pub fn undefine(&mut self, scancode: Scancode) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.scancode != scancode);
        let removed = before != self.entries.len();
        if !removed {
            debug!("#undef of {} which was never defined", scancode);
        }
        removed
    }

    pub fn set_keyboard_type(&mut self, keyboard_type: KeyboardType) {
        if let Some(previous) = self.keyboard_type.replace(keyboard_type) {
            debug!("KBD_TYPE redefined from {} to {}", previous, keyboard_type);
        }
    }

    /// Builds the resolution table for `keyboard_type`
    pub fn build(&self, keyboard_type: KeyboardType) -> Result<LayoutTable, ConfigurationError> {
        LayoutTable::build(self.entries.iter().cloned(), keyboard_type)
    }
}
