//! Default US qwerty scancode table

use super::entry::ScancodeEntry;
use crate::types::{KeyMapping, Scancode, VirtualKey, VirtualKeyFlags};

const NONE: VirtualKeyFlags = VirtualKeyFlags::empty();
const EXT: VirtualKeyFlags = VirtualKeyFlags::EXT;
const MULTIVK: VirtualKeyFlags = VirtualKeyFlags::MULTIVK;
const EXT_MULTIVK: VirtualKeyFlags = VirtualKeyFlags::EXT.union(VirtualKeyFlags::MULTIVK);
// Cursor block on the numpad: the driver swaps in NUMPADn when NumLock is on
const NUMPAD_SPECIAL: VirtualKeyFlags = VirtualKeyFlags::NUMPAD.union(VirtualKeyFlags::SPECIAL);

/// Scancode, virtual key and flags of every key on a US 101/102-key board.
/// Sorted by scancode.
pub const QWERTY: &[(u16, VirtualKey, VirtualKeyFlags)] = &[
    (0x01, VirtualKey::Escape, NONE),
    (0x02, VirtualKey::Key1, NONE),
    (0x03, VirtualKey::Key2, NONE),
    (0x04, VirtualKey::Key3, NONE),
    (0x05, VirtualKey::Key4, NONE),
    (0x06, VirtualKey::Key5, NONE),
    (0x07, VirtualKey::Key6, NONE),
    (0x08, VirtualKey::Key7, NONE),
    (0x09, VirtualKey::Key8, NONE),
    (0x0A, VirtualKey::Key9, NONE),
    (0x0B, VirtualKey::Key0, NONE),
    (0x0C, VirtualKey::OemMinus, NONE),
    (0x0D, VirtualKey::OemPlus, NONE),
    (0x0E, VirtualKey::Back, NONE),
    (0x0F, VirtualKey::Tab, NONE),
    (0x10, VirtualKey::KeyQ, NONE),
    (0x11, VirtualKey::KeyW, NONE),
    (0x12, VirtualKey::KeyE, NONE),
    (0x13, VirtualKey::KeyR, NONE),
    (0x14, VirtualKey::KeyT, NONE),
    (0x15, VirtualKey::KeyY, NONE),
    (0x16, VirtualKey::KeyU, NONE),
    (0x17, VirtualKey::KeyI, NONE),
    (0x18, VirtualKey::KeyO, NONE),
    (0x19, VirtualKey::KeyP, NONE),
    (0x1A, VirtualKey::Oem4, NONE),
    (0x1B, VirtualKey::Oem6, NONE),
    (0x1C, VirtualKey::Return, NONE),
    (0x1D, VirtualKey::LControl, NONE),
    (0x1E, VirtualKey::KeyA, NONE),
    (0x1F, VirtualKey::KeyS, NONE),
    (0x20, VirtualKey::KeyD, NONE),
    (0x21, VirtualKey::KeyF, NONE),
    (0x22, VirtualKey::KeyG, NONE),
    (0x23, VirtualKey::KeyH, NONE),
    (0x24, VirtualKey::KeyJ, NONE),
    (0x25, VirtualKey::KeyK, NONE),
    (0x26, VirtualKey::KeyL, NONE),
    (0x27, VirtualKey::Oem1, NONE),
    (0x28, VirtualKey::Oem7, NONE),
    (0x29, VirtualKey::Oem3, NONE),
    (0x2A, VirtualKey::LShift, NONE),
    (0x2B, VirtualKey::Oem5, NONE),
    (0x2C, VirtualKey::KeyZ, NONE),
    (0x2D, VirtualKey::KeyX, NONE),
    (0x2E, VirtualKey::KeyC, NONE),
    (0x2F, VirtualKey::KeyV, NONE),
    (0x30, VirtualKey::KeyB, NONE),
    (0x31, VirtualKey::KeyN, NONE),
    (0x32, VirtualKey::KeyM, NONE),
    (0x33, VirtualKey::OemComma, NONE),
    (0x34, VirtualKey::OemPeriod, NONE),
    (0x35, VirtualKey::Oem2, NONE),
    (0x36, VirtualKey::RShift, EXT),
    (0x37, VirtualKey::Multiply, MULTIVK),
    (0x38, VirtualKey::LMenu, NONE),
    (0x39, VirtualKey::Space, NONE),
    (0x3A, VirtualKey::Capital, NONE),
    (0x3B, VirtualKey::F1, NONE),
    (0x3C, VirtualKey::F2, NONE),
    (0x3D, VirtualKey::F3, NONE),
    (0x3E, VirtualKey::F4, NONE),
    (0x3F, VirtualKey::F5, NONE),
    (0x40, VirtualKey::F6, NONE),
    (0x41, VirtualKey::F7, NONE),
    (0x42, VirtualKey::F8, NONE),
    (0x43, VirtualKey::F9, NONE),
    (0x44, VirtualKey::F10, NONE),
    (0x45, VirtualKey::NumLock, EXT_MULTIVK),
    (0x46, VirtualKey::Scroll, MULTIVK),
    (0x47, VirtualKey::Home, NUMPAD_SPECIAL),
    (0x48, VirtualKey::Up, NUMPAD_SPECIAL),
    (0x49, VirtualKey::Prior, NUMPAD_SPECIAL),
    (0x4A, VirtualKey::Subtract, NONE),
    (0x4B, VirtualKey::Left, NUMPAD_SPECIAL),
    (0x4C, VirtualKey::Clear, NUMPAD_SPECIAL),
    (0x4D, VirtualKey::Right, NUMPAD_SPECIAL),
    (0x4E, VirtualKey::Add, NONE),
    (0x4F, VirtualKey::End, NUMPAD_SPECIAL),
    (0x50, VirtualKey::Down, NUMPAD_SPECIAL),
    (0x51, VirtualKey::Next, NUMPAD_SPECIAL),
    (0x52, VirtualKey::Insert, NUMPAD_SPECIAL),
    (0x53, VirtualKey::Delete, NUMPAD_SPECIAL),
    (0x54, VirtualKey::Snapshot, NONE),
    (0x56, VirtualKey::Oem102, NONE),
    (0x57, VirtualKey::F11, NONE),
    (0x58, VirtualKey::F12, NONE),
    (0x59, VirtualKey::Clear, NONE),
    (0x5A, VirtualKey::OemWsCtrl, NONE),
    (0x5B, VirtualKey::OemFinish, NONE),
    (0x5C, VirtualKey::OemJump, NONE),
    (0x5D, VirtualKey::ErEof, NONE),
    (0x5E, VirtualKey::OemBackTab, NONE),
    (0x5F, VirtualKey::OemAuto, NONE),
    (0x62, VirtualKey::Zoom, NONE),
    (0x63, VirtualKey::Help, NONE),
    (0x64, VirtualKey::F13, NONE),
    (0x65, VirtualKey::F14, NONE),
    (0x66, VirtualKey::F15, NONE),
    (0x67, VirtualKey::F16, NONE),
    (0x68, VirtualKey::F17, NONE),
    (0x69, VirtualKey::F18, NONE),
    (0x6A, VirtualKey::F19, NONE),
    (0x6B, VirtualKey::F20, NONE),
    (0x6C, VirtualKey::F21, NONE),
    (0x6D, VirtualKey::F22, NONE),
    (0x6E, VirtualKey::F23, NONE),
    (0x6F, VirtualKey::OemPa3, NONE),
    (0x71, VirtualKey::OemReset, NONE),
    (0x73, VirtualKey::AbntC1, NONE),
    (0x76, VirtualKey::F24, NONE),
    (0x7B, VirtualKey::OemPa1, NONE),
    (0x7C, VirtualKey::Tab, NONE),
    (0x7E, VirtualKey::AbntC2, NONE),
    (0x7F, VirtualKey::OemPa2, NONE),
    // E0 prefix
    (0xE010, VirtualKey::MediaPrevTrack, EXT),
    (0xE019, VirtualKey::MediaNextTrack, EXT),
    (0xE01C, VirtualKey::Return, EXT),
    (0xE01D, VirtualKey::RControl, EXT),
    (0xE020, VirtualKey::VolumeMute, EXT),
    (0xE021, VirtualKey::LaunchApp2, EXT),
    (0xE022, VirtualKey::MediaPlayPause, EXT),
    (0xE024, VirtualKey::MediaStop, EXT),
    (0xE02E, VirtualKey::VolumeDown, EXT),
    (0xE030, VirtualKey::VolumeUp, EXT),
    (0xE032, VirtualKey::BrowserHome, EXT),
    (0xE035, VirtualKey::Divide, EXT),
    (0xE037, VirtualKey::Snapshot, EXT),
    (0xE038, VirtualKey::RMenu, EXT),
    (0xE046, VirtualKey::Cancel, EXT),
    (0xE047, VirtualKey::Home, EXT),
    (0xE048, VirtualKey::Up, EXT),
    (0xE049, VirtualKey::Prior, EXT),
    (0xE04B, VirtualKey::Left, EXT),
    (0xE04D, VirtualKey::Right, EXT),
    (0xE04F, VirtualKey::End, EXT),
    (0xE050, VirtualKey::Down, EXT),
    (0xE051, VirtualKey::Next, EXT),
    (0xE052, VirtualKey::Insert, EXT),
    (0xE053, VirtualKey::Delete, EXT),
    (0xE05B, VirtualKey::LWin, EXT),
    (0xE05C, VirtualKey::RWin, EXT),
    (0xE05D, VirtualKey::Apps, EXT),
    (0xE05F, VirtualKey::Sleep, EXT),
    (0xE065, VirtualKey::BrowserSearch, EXT),
    (0xE066, VirtualKey::BrowserFavorites, EXT),
    (0xE067, VirtualKey::BrowserRefresh, EXT),
    (0xE068, VirtualKey::BrowserStop, EXT),
    (0xE069, VirtualKey::BrowserForward, EXT),
    (0xE06A, VirtualKey::BrowserBack, EXT),
    (0xE06B, VirtualKey::LaunchApp1, EXT),
    (0xE06C, VirtualKey::LaunchMail, EXT),
    (0xE06D, VirtualKey::LaunchMediaSelect, EXT),
    // E1 prefix
    (0xE11D, VirtualKey::Pause, NONE),
];

/// The qwerty table as `_EQ` entries, in scancode order
pub fn qwerty_entries() -> Vec<ScancodeEntry> {
    QWERTY
        .iter()
        .map(|&(scancode, vk, flags)| {
            ScancodeEntry::common(Scancode::new(scancode), KeyMapping::with_flags(vk, flags))
        })
        .collect()
}
