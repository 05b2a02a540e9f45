use log::{debug, warn};

use super::entry::ScancodeEntry;
use super::qwerty::qwerty_entries;
use crate::error::{ConfigurationError, UnknownScancode};
use crate::types::{KeyMapping, KeyboardType, Scancode, VirtualKey};

/// Immutable scancode to virtual key table for one keyboard type.
///
/// Built once from an entry sequence and validated in full at construction,
/// so every lookup afterwards is a plain binary search. The table is never
/// mutated; switching layouts means building a new one and swapping the
/// reference (for example an `Arc<LayoutTable>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTable {
    /// Sorted by scancode
    entries: Vec<ScancodeEntry>,
    /// `resolved[i]` is the mapping of `entries[i]` under `keyboard_type`
    resolved: Vec<KeyMapping>,
    keyboard_type: KeyboardType,
}

impl LayoutTable {
    /// Validates `entries` for `keyboard_type` and builds the table.
    ///
    /// Fails on duplicate scancodes and on `_NE` entries that have no
    /// variant for the configured keyboard type.
    pub fn build<I>(entries: I, keyboard_type: KeyboardType) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = ScancodeEntry>,
    {
        let mut entries: Vec<ScancodeEntry> = entries.into_iter().collect();
        entries.sort_by_key(|entry| entry.scancode);

        if let Some(pair) = entries.windows(2).find(|pair| pair[0].scancode == pair[1].scancode) {
            return Err(ConfigurationError::DuplicateScancode(pair[0].scancode));
        }

        let resolved = entries
            .iter()
            .map(|entry| {
                entry
                    .mapping_for(keyboard_type)
                    .ok_or(ConfigurationError::UncoveredKeyboardType {
                        scancode: entry.scancode,
                        keyboard_type,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let table = Self {
            entries,
            resolved,
            keyboard_type,
        };

        for scancode in table.uniform_variant_entries() {
            warn!(
                "Scancode {} is declared per keyboard type but maps to the same key for every type",
                scancode
            );
        }
        debug!(
            "Built layout table with {} entries for keyboard type {}",
            table.len(),
            keyboard_type
        );

        Ok(table)
    }

    /// The built-in US qwerty table
    pub fn qwerty(keyboard_type: KeyboardType) -> Result<Self, ConfigurationError> {
        Self::build(qwerty_entries(), keyboard_type)
    }

    /// Rebuilds the same entries for another keyboard type
    pub fn with_keyboard_type(
        &self,
        keyboard_type: KeyboardType,
    ) -> Result<Self, ConfigurationError> {
        Self::build(self.entries.iter().cloned(), keyboard_type)
    }

    /// Resolves a scancode to its virtual key
    pub fn resolve(&self, scancode: impl Into<Scancode>) -> Result<VirtualKey, UnknownScancode> {
        self.resolve_mapping(scancode).map(|mapping| mapping.vk)
    }

    /// Resolves a scancode to its virtual key and driver flags
    pub fn resolve_mapping(
        &self,
        scancode: impl Into<Scancode>,
    ) -> Result<KeyMapping, UnknownScancode> {
        let scancode = scancode.into();
        self.position(scancode)
            .map(|index| self.resolved[index])
            .ok_or(UnknownScancode(scancode))
    }

    pub fn contains(&self, scancode: impl Into<Scancode>) -> bool {
        self.position(scancode.into()).is_some()
    }

    /// Every scancode that produces `vk` under the active keyboard type
    pub fn scancodes_for(&self, vk: VirtualKey) -> impl Iterator<Item = Scancode> + '_ {
        self.entries
            .iter()
            .zip(&self.resolved)
            .filter(move |(_, mapping)| mapping.vk == vk)
            .map(|(entry, _)| entry.scancode)
    }

    /// Scancodes of `_NE` entries whose variants are all identical
    pub fn uniform_variant_entries(&self) -> Vec<Scancode> {
        self.entries
            .iter()
            .filter(|entry| entry.has_uniform_variants())
            .map(|entry| entry.scancode)
            .collect()
    }

    pub fn keyboard_type(&self) -> KeyboardType {
        self.keyboard_type
    }

    /// Entries in scancode order
    pub fn entries(&self) -> &[ScancodeEntry] {
        &self.entries
    }

    /// Entries paired with their resolved mapping, in scancode order
    pub fn iter(&self) -> impl Iterator<Item = (Scancode, KeyMapping)> + '_ {
        self.entries
            .iter()
            .zip(&self.resolved)
            .map(|(entry, mapping)| (entry.scancode, *mapping))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, scancode: Scancode) -> Option<usize> {
        self.entries
            .binary_search_by_key(&scancode, |entry| entry.scancode)
            .ok()
    }
}
