//! Display names for keys that do not produce a character

use crate::types::Scancode;

/// Names shown by the OS for non-character keys, sorted by scancode
pub const KEY_NAMES: &[(u16, &str)] = &[
    (0x01, "Esc"),
    (0x0E, "Backspace"),
    (0x0F, "Tab"),
    (0x1C, "Enter"),
    (0x1D, "Ctrl"),
    (0x2A, "Shift"),
    (0x36, "Right Shift"),
    (0x37, "Num *"),
    (0x38, "Alt"),
    (0x39, "Space"),
    (0x3A, "Caps Lock"),
    (0x3B, "F1"),
    (0x3C, "F2"),
    (0x3D, "F3"),
    (0x3E, "F4"),
    (0x3F, "F5"),
    (0x40, "F6"),
    (0x41, "F7"),
    (0x42, "F8"),
    (0x43, "F9"),
    (0x44, "F10"),
    (0x45, "Pause"),
    (0x46, "Scroll Lock"),
    (0x47, "Num 7"),
    (0x48, "Num 8"),
    (0x49, "Num 9"),
    (0x4A, "Num -"),
    (0x4B, "Num 4"),
    (0x4C, "Num 5"),
    (0x4D, "Num 6"),
    (0x4E, "Num +"),
    (0x4F, "Num 1"),
    (0x50, "Num 2"),
    (0x51, "Num 3"),
    (0x52, "Num 0"),
    (0x53, "Num Del"),
    (0x54, "Sys Req"),
    (0x57, "F11"),
    (0x58, "F12"),
    (0x7C, "F13"),
    (0x7D, "F14"),
    (0x7E, "F15"),
    (0x7F, "F16"),
    (0x80, "F17"),
    (0x81, "F18"),
    (0x82, "F19"),
    (0x83, "F20"),
    (0x84, "F21"),
    (0x85, "F22"),
    (0x86, "F23"),
    (0x87, "F24"),
    // E0 prefix
    (0xE01C, "Num Enter"),
    (0xE01D, "Right Ctrl"),
    (0xE035, "Num /"),
    (0xE037, "Prnt Scrn"),
    (0xE038, "Right Alt"),
    (0xE045, "Num Lock"),
    (0xE046, "Break"),
    (0xE047, "Home"),
    (0xE048, "Up"),
    (0xE049, "Page Up"),
    (0xE04B, "Left"),
    (0xE04D, "Right"),
    (0xE04F, "End"),
    (0xE050, "Down"),
    (0xE051, "Page Down"),
    (0xE052, "Insert"),
    (0xE053, "Delete"),
    (0xE054, "<00>"),
    (0xE056, "Help"),
    (0xE05B, "Left Windows"),
    (0xE05C, "Right Windows"),
    (0xE05D, "Application"),
];

/// Name of the key at `scancode`, if it has one
pub fn key_name(scancode: impl Into<Scancode>) -> Option<&'static str> {
    let raw = scancode.into().raw();
    KEY_NAMES
        .binary_search_by_key(&raw, |&(code, _)| code)
        .ok()
        .map(|index| KEY_NAMES[index].1)
}
