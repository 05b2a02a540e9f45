use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

macro_rules! virtual_keys {
    ($( $variant:ident = $code:literal => $name:literal, )*) => {
        /// Windows virtual-key codes.
        ///
        /// Discriminants are the `VK_*` values, so `vk as u8` is the code a
        /// layout driver hands to the rest of the input pipeline.
        #[repr(u8)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum VirtualKey {
            $( $variant = $code, )*
        }

        impl VirtualKey {
            /// Every known virtual key, in code order
            pub const ALL: &'static [VirtualKey] = &[$( VirtualKey::$variant, )*];

            /// Looks up the virtual key for a raw code
            pub fn from_u8(code: u8) -> Option<Self> {
                match code {
                    $( $code => Some(VirtualKey::$variant), )*
                    _ => None,
                }
            }

            /// Canonical name without the `VK_` prefix
            pub fn name(self) -> &'static str {
                match self {
                    $( VirtualKey::$variant => $name, )*
                }
            }
        }
    };
}

virtual_keys! {
    // Mouse buttons
    LButton = 0x01 => "LBUTTON",
    RButton = 0x02 => "RBUTTON",
    Cancel = 0x03 => "CANCEL",
    MButton = 0x04 => "MBUTTON",
    XButton1 = 0x05 => "XBUTTON1",
    XButton2 = 0x06 => "XBUTTON2",

    // Control keys
    Back = 0x08 => "BACK",
    Tab = 0x09 => "TAB",
    Clear = 0x0C => "CLEAR",
    Return = 0x0D => "RETURN",
    Shift = 0x10 => "SHIFT",
    Control = 0x11 => "CONTROL",
    Menu = 0x12 => "MENU",
    Pause = 0x13 => "PAUSE",
    Capital = 0x14 => "CAPITAL",

    // IME keys
    Kana = 0x15 => "KANA",
    Junja = 0x17 => "JUNJA",
    Final = 0x18 => "FINAL",
    Kanji = 0x19 => "KANJI",
    Escape = 0x1B => "ESCAPE",
    Convert = 0x1C => "CONVERT",
    NonConvert = 0x1D => "NONCONVERT",
    Accept = 0x1E => "ACCEPT",
    ModeChange = 0x1F => "MODECHANGE",

    // Navigation
    Space = 0x20 => "SPACE",
    Prior = 0x21 => "PRIOR",
    Next = 0x22 => "NEXT",
    End = 0x23 => "END",
    Home = 0x24 => "HOME",
    Left = 0x25 => "LEFT",
    Up = 0x26 => "UP",
    Right = 0x27 => "RIGHT",
    Down = 0x28 => "DOWN",
    Select = 0x29 => "SELECT",
    Print = 0x2A => "PRINT",
    Execute = 0x2B => "EXECUTE",
    Snapshot = 0x2C => "SNAPSHOT",
    Insert = 0x2D => "INSERT",
    Delete = 0x2E => "DELETE",
    Help = 0x2F => "HELP",

    // Number row, same codes as ASCII '0'..'9'
    Key0 = 0x30 => "NUMBER0",
    Key1 = 0x31 => "NUMBER1",
    Key2 = 0x32 => "NUMBER2",
    Key3 = 0x33 => "NUMBER3",
    Key4 = 0x34 => "NUMBER4",
    Key5 = 0x35 => "NUMBER5",
    Key6 = 0x36 => "NUMBER6",
    Key7 = 0x37 => "NUMBER7",
    Key8 = 0x38 => "NUMBER8",
    Key9 = 0x39 => "NUMBER9",

    // Letters, same codes as ASCII 'A'..'Z'
    KeyA = 0x41 => "A",
    KeyB = 0x42 => "B",
    KeyC = 0x43 => "C",
    KeyD = 0x44 => "D",
    KeyE = 0x45 => "E",
    KeyF = 0x46 => "F",
    KeyG = 0x47 => "G",
    KeyH = 0x48 => "H",
    KeyI = 0x49 => "I",
    KeyJ = 0x4A => "J",
    KeyK = 0x4B => "K",
    KeyL = 0x4C => "L",
    KeyM = 0x4D => "M",
    KeyN = 0x4E => "N",
    KeyO = 0x4F => "O",
    KeyP = 0x50 => "P",
    KeyQ = 0x51 => "Q",
    KeyR = 0x52 => "R",
    KeyS = 0x53 => "S",
    KeyT = 0x54 => "T",
    KeyU = 0x55 => "U",
    KeyV = 0x56 => "V",
    KeyW = 0x57 => "W",
    KeyX = 0x58 => "X",
    KeyY = 0x59 => "Y",
    KeyZ = 0x5A => "Z",

    LWin = 0x5B => "LWIN",
    RWin = 0x5C => "RWIN",
    Apps = 0x5D => "APPS",
    Sleep = 0x5F => "SLEEP",

    // Numpad
    Numpad0 = 0x60 => "NUMPAD0",
    Numpad1 = 0x61 => "NUMPAD1",
    Numpad2 = 0x62 => "NUMPAD2",
    Numpad3 = 0x63 => "NUMPAD3",
    Numpad4 = 0x64 => "NUMPAD4",
    Numpad5 = 0x65 => "NUMPAD5",
    Numpad6 = 0x66 => "NUMPAD6",
    Numpad7 = 0x67 => "NUMPAD7",
    Numpad8 = 0x68 => "NUMPAD8",
    Numpad9 = 0x69 => "NUMPAD9",
    Multiply = 0x6A => "MULTIPLY",
    Add = 0x6B => "ADD",
    Separator = 0x6C => "SEPARATOR",
    Subtract = 0x6D => "SUBTRACT",
    Decimal = 0x6E => "DECIMAL",
    Divide = 0x6F => "DIVIDE",

    // Function keys
    F1 = 0x70 => "F1",
    F2 = 0x71 => "F2",
    F3 = 0x72 => "F3",
    F4 = 0x73 => "F4",
    F5 = 0x74 => "F5",
    F6 = 0x75 => "F6",
    F7 = 0x76 => "F7",
    F8 = 0x77 => "F8",
    F9 = 0x78 => "F9",
    F10 = 0x79 => "F10",
    F11 = 0x7A => "F11",
    F12 = 0x7B => "F12",
    F13 = 0x7C => "F13",
    F14 = 0x7D => "F14",
    F15 = 0x7E => "F15",
    F16 = 0x7F => "F16",
    F17 = 0x80 => "F17",
    F18 = 0x81 => "F18",
    F19 = 0x82 => "F19",
    F20 = 0x83 => "F20",
    F21 = 0x84 => "F21",
    F22 = 0x85 => "F22",
    F23 = 0x86 => "F23",
    F24 = 0x87 => "F24",

    NumLock = 0x90 => "NUMLOCK",
    Scroll = 0x91 => "SCROLL",

    // NEC PC-9800 and Fujitsu OEM keys
    OemNecEqual = 0x92 => "OEM_NEC_EQUAL",
    OemFjMasshou = 0x93 => "OEM_FJ_MASSHOU",
    OemFjTouroku = 0x94 => "OEM_FJ_TOUROKU",
    OemFjLoya = 0x95 => "OEM_FJ_LOYA",
    OemFjRoya = 0x96 => "OEM_FJ_ROYA",

    // Left/right modifier variants
    LShift = 0xA0 => "LSHIFT",
    RShift = 0xA1 => "RSHIFT",
    LControl = 0xA2 => "LCONTROL",
    RControl = 0xA3 => "RCONTROL",
    LMenu = 0xA4 => "LMENU",
    RMenu = 0xA5 => "RMENU",

    // Browser and media keys
    BrowserBack = 0xA6 => "BROWSER_BACK",
    BrowserForward = 0xA7 => "BROWSER_FORWARD",
    BrowserRefresh = 0xA8 => "BROWSER_REFRESH",
    BrowserStop = 0xA9 => "BROWSER_STOP",
    BrowserSearch = 0xAA => "BROWSER_SEARCH",
    BrowserFavorites = 0xAB => "BROWSER_FAVORITES",
    BrowserHome = 0xAC => "BROWSER_HOME",
    VolumeMute = 0xAD => "VOLUME_MUTE",
    VolumeDown = 0xAE => "VOLUME_DOWN",
    VolumeUp = 0xAF => "VOLUME_UP",
    MediaNextTrack = 0xB0 => "MEDIA_NEXT_TRACK",
    MediaPrevTrack = 0xB1 => "MEDIA_PREV_TRACK",
    MediaStop = 0xB2 => "MEDIA_STOP",
    MediaPlayPause = 0xB3 => "MEDIA_PLAY_PAUSE",
    LaunchMail = 0xB4 => "LAUNCH_MAIL",
    LaunchMediaSelect = 0xB5 => "LAUNCH_MEDIA_SELECT",
    LaunchApp1 = 0xB6 => "LAUNCH_APP1",
    LaunchApp2 = 0xB7 => "LAUNCH_APP2",

    // OEM keys, meaning varies per layout
    Oem1 = 0xBA => "OEM_1",
    OemPlus = 0xBB => "OEM_PLUS",
    OemComma = 0xBC => "OEM_COMMA",
    OemMinus = 0xBD => "OEM_MINUS",
    OemPeriod = 0xBE => "OEM_PERIOD",
    Oem2 = 0xBF => "OEM_2",
    Oem3 = 0xC0 => "OEM_3",
    AbntC1 = 0xC1 => "ABNT_C1",
    AbntC2 = 0xC2 => "ABNT_C2",
    Oem4 = 0xDB => "OEM_4",
    Oem5 = 0xDC => "OEM_5",
    Oem6 = 0xDD => "OEM_6",
    Oem7 = 0xDE => "OEM_7",
    Oem8 = 0xDF => "OEM_8",
    OemAx = 0xE1 => "OEM_AX",
    Oem102 = 0xE2 => "OEM_102",
    IcoHelp = 0xE3 => "ICO_HELP",
    Ico00 = 0xE4 => "ICO_00",
    ProcessKey = 0xE5 => "PROCESSKEY",
    IcoClear = 0xE6 => "ICO_CLEAR",
    Packet = 0xE7 => "PACKET",

    // Nokia/Ericsson OEM keys
    OemReset = 0xE9 => "OEM_RESET",
    OemJump = 0xEA => "OEM_JUMP",
    OemPa1 = 0xEB => "OEM_PA1",
    OemPa2 = 0xEC => "OEM_PA2",
    OemPa3 = 0xED => "OEM_PA3",
    OemWsCtrl = 0xEE => "OEM_WSCTRL",
    OemCuSel = 0xEF => "OEM_CUSEL",
    OemAttn = 0xF0 => "OEM_ATTN",
    OemFinish = 0xF1 => "OEM_FINISH",
    OemCopy = 0xF2 => "OEM_COPY",
    OemAuto = 0xF3 => "OEM_AUTO",
    OemEnlw = 0xF4 => "OEM_ENLW",
    OemBackTab = 0xF5 => "OEM_BACKTAB",

    Attn = 0xF6 => "ATTN",
    CrSel = 0xF7 => "CRSEL",
    ExSel = 0xF8 => "EXSEL",
    ErEof = 0xF9 => "EREOF",
    Play = 0xFA => "PLAY",
    Zoom = 0xFB => "ZOOM",
    NoName = 0xFC => "NONAME",
    Pa1 = 0xFD => "PA1",
    OemClear = 0xFE => "OEM_CLEAR",

    // Placeholder for "no virtual key" slots in driver tables
    Null = 0xFF => "NULL",
}

impl VirtualKey {
    /// Resolves a virtual key by name.
    ///
    /// Accepts canonical names (`OEM_3`), the `VK_`-prefixed form
    /// (`VK_OEM_3`) and the aliases Windows headers define for the same code
    /// (`HANGUL`, `HANJA`, `OEM_FJ_JISHO`, ...). Matching is case-sensitive,
    /// as it is in the C headers.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix("VK_").unwrap_or(name);
        vk_map().get(name).copied()
    }

    /// Resolves a character literal such as `'A'` or `'7'`.
    ///
    /// Only uppercase ASCII letters and digits have virtual keys equal to
    /// their character code.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'A'..='Z' | '0'..='9' => Self::from_u8(ch as u8),
            _ => None,
        }
    }
}

impl TryFrom<u8> for VirtualKey {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_u8(code).ok_or(code)
    }
}

impl From<VirtualKey> for u8 {
    fn from(vk: VirtualKey) -> Self {
        vk as u8
    }
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn vk_map() -> &'static HashMap<&'static str, VirtualKey> {
    static MAP: OnceLock<HashMap<&'static str, VirtualKey>> = OnceLock::new();
    MAP.get_or_init(create_vk_map)
}

/// Builds the name to virtual key table used by [`VirtualKey::from_name`]
pub fn create_vk_map() -> HashMap<&'static str, VirtualKey> {
    let mut map: HashMap<&'static str, VirtualKey> =
        VirtualKey::ALL.iter().map(|vk| (vk.name(), *vk)).collect();

    // Aliases sharing a code with a canonical name
    map.insert("HANGEUL", VirtualKey::Kana);
    map.insert("HANGUL", VirtualKey::Kana);
    map.insert("HANJA", VirtualKey::Kanji);
    map.insert("OEM_FJ_JISHO", VirtualKey::OemNecEqual);

    map
}
