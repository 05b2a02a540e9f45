use std::fmt;

use bitflags::bitflags;

use super::virtual_keys::VirtualKey;

bitflags! {
    /// Attribute bits a layout driver ORs into the high byte of a virtual key
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VirtualKeyFlags: u16 {
        /// Extended key, reported as `KEYEVENTF_EXTENDEDKEY`
        const EXT = 0x0100;
        const MULTIVK = 0x0200;
        const SPECIAL = 0x0400;
        const NUMPAD = 0x0800;
        const UNICODE = 0x1000;
        const INJECTEDVK = 0x2000;
        const MAPPEDVK = 0x4000;
        const BREAK = 0x8000;
    }
}

impl VirtualKeyFlags {
    /// Parses a single flag name, with or without the `KBD` prefix
    /// used by `kbd.h` (`KBDEXT`, `EXT`).
    pub fn parse_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix("KBD").unwrap_or(name);
        Self::from_name(name)
    }
}

impl fmt::Display for VirtualKeyFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                f.write_str(" | ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

/// A virtual key together with its driver attribute flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyMapping {
    pub vk: VirtualKey,
    pub flags: VirtualKeyFlags,
}

impl KeyMapping {
    pub const fn new(vk: VirtualKey) -> Self {
        Self {
            vk,
            flags: VirtualKeyFlags::empty(),
        }
    }

    pub const fn with_flags(vk: VirtualKey, flags: VirtualKeyFlags) -> Self {
        Self { vk, flags }
    }

    /// Driver table encoding: flags in the high byte, virtual key in the low byte
    pub fn to_u16(self) -> u16 {
        self.flags.bits() | self.vk as u16
    }

    /// Decodes the driver table encoding. Unknown flag bits are dropped;
    /// an unknown virtual key yields `None`.
    pub fn from_u16(value: u16) -> Option<Self> {
        let vk = VirtualKey::from_u8((value & 0x00FF) as u8)?;
        let flags = VirtualKeyFlags::from_bits_truncate(value & 0xFF00);
        Some(Self { vk, flags })
    }
}

impl From<VirtualKey> for KeyMapping {
    fn from(vk: VirtualKey) -> Self {
        Self::new(vk)
    }
}

impl fmt::Display for KeyMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flags.is_empty() {
            write!(f, "{}", self.vk)
        } else {
            write!(f, "{} | {}", self.vk, self.flags)
        }
    }
}
