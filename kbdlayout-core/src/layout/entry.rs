use std::collections::BTreeMap;

use crate::types::{KeyMapping, KeyboardType, Scancode};

/// The virtual key side of a table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VkVariants {
    /// `_EQ`: every keyboard type uses the same key
    Common(KeyMapping),
    /// `_NE`: the active keyboard type picks the key
    PerType(BTreeMap<KeyboardType, KeyMapping>),
}

/// One physical key position and the virtual key(s) it produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScancodeEntry {
    pub scancode: Scancode,
    pub variants: VkVariants,
}

impl ScancodeEntry {
    /// Type-invariant entry
    pub fn common(scancode: impl Into<Scancode>, mapping: impl Into<KeyMapping>) -> Self {
        Self {
            scancode: scancode.into(),
            variants: VkVariants::Common(mapping.into()),
        }
    }

    /// Entry whose virtual key depends on the keyboard type
    pub fn per_type<I, M>(scancode: impl Into<Scancode>, variants: I) -> Self
    where
        I: IntoIterator<Item = (KeyboardType, M)>,
        M: Into<KeyMapping>,
    {
        Self {
            scancode: scancode.into(),
            variants: VkVariants::PerType(
                variants.into_iter().map(|(t, m)| (t, m.into())).collect(),
            ),
        }
    }

    pub fn common_vkey(&self) -> Option<KeyMapping> {
        match &self.variants {
            VkVariants::Common(mapping) => Some(*mapping),
            VkVariants::PerType(_) => None,
        }
    }

    pub fn per_type_vkey(&self) -> Option<&BTreeMap<KeyboardType, KeyMapping>> {
        match &self.variants {
            VkVariants::Common(_) => None,
            VkVariants::PerType(map) => Some(map),
        }
    }

    /// The mapping this entry yields under `keyboard_type`, if covered
    pub fn mapping_for(&self, keyboard_type: KeyboardType) -> Option<KeyMapping> {
        match &self.variants {
            VkVariants::Common(mapping) => Some(*mapping),
            VkVariants::PerType(map) => map.get(&keyboard_type).copied(),
        }
    }

    /// True for a `_NE` entry whose variants never actually differ.
    ///
    /// Such an entry should have been written as `_EQ`; it resolves fine but
    /// usually points at a copy/paste mistake in the table data.
    pub fn has_uniform_variants(&self) -> bool {
        match &self.variants {
            VkVariants::Common(_) => false,
            VkVariants::PerType(map) => {
                let mut values = map.values();
                match values.next() {
                    Some(first) => values.all(|m| m == first),
                    None => false,
                }
            }
        }
    }
}
