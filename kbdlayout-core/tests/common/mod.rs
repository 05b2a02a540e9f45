use kbdlayout_core::{KeyMapping, KeyboardType, ScancodeEntry, VirtualKey};

/// Shorthand for a keyboard type known to be in range
pub fn kt(value: u8) -> KeyboardType {
    KeyboardType::new(value).expect("keyboard type in 1..=6")
}

/// `_NE` entry with one virtual key per column, keyboard types 1..6
#[allow(dead_code)]
pub fn ne_entry(scancode: u16, columns: [VirtualKey; 6]) -> ScancodeEntry {
    ScancodeEntry::per_type(
        scancode,
        columns
            .into_iter()
            .enumerate()
            .map(|(column, vk)| (kt(column as u8 + 1), KeyMapping::new(vk))),
    )
}

/// Small table mixing `_EQ` and `_NE` rows
#[allow(dead_code)]
pub fn sample_entries() -> Vec<ScancodeEntry> {
    vec![
        ScancodeEntry::common(0x1E, VirtualKey::KeyA),
        ScancodeEntry::common(0x1F, VirtualKey::KeyS),
        ScancodeEntry::per_type(0x29, [(kt(1), VirtualKey::Oem3), (kt(4), VirtualKey::Oem5)]),
        ne_entry(
            0x56,
            [
                VirtualKey::Oem102,
                VirtualKey::Oem102,
                VirtualKey::Oem102,
                VirtualKey::Oem102,
                VirtualKey::Oem5,
                VirtualKey::Oem102,
            ],
        ),
    ]
}
