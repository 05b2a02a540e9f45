use kbdlayout_core::{create_vk_map, KeyMapping, VirtualKey, VirtualKeyFlags};

#[test]
fn test_codes_match_windows_values() {
    assert_eq!(VirtualKey::Back as u8, 0x08);
    assert_eq!(VirtualKey::Return as u8, 0x0D);
    assert_eq!(VirtualKey::KeyA as u8, b'A');
    assert_eq!(VirtualKey::Key7 as u8, b'7');
    assert_eq!(VirtualKey::Oem3 as u8, 0xC0);
    assert_eq!(VirtualKey::Oem102 as u8, 0xE2);
    assert_eq!(VirtualKey::OemClear as u8, 0xFE);
}

#[test]
fn test_from_u8_roundtrips_known_codes() {
    for vk in VirtualKey::ALL {
        assert_eq!(VirtualKey::from_u8(*vk as u8), Some(*vk));
    }
    assert_eq!(VirtualKey::from_u8(0x00), None);
    assert_eq!(VirtualKey::from_u8(0x07), None);
    assert_eq!(VirtualKey::try_from(0x0Au8), Err(0x0A));
}

#[test]
fn test_name_lookup() {
    assert_eq!(VirtualKey::from_name("OEM_3"), Some(VirtualKey::Oem3));
    assert_eq!(VirtualKey::from_name("VK_OEM_3"), Some(VirtualKey::Oem3));
    assert_eq!(VirtualKey::from_name("A"), Some(VirtualKey::KeyA));
    assert_eq!(VirtualKey::from_name("NUMBER0"), Some(VirtualKey::Key0));
    assert_eq!(VirtualKey::from_name("oem_3"), None);
    assert_eq!(VirtualKey::from_name("BOGUS"), None);
}

#[test]
fn test_aliases() {
    assert_eq!(VirtualKey::from_name("HANGUL"), Some(VirtualKey::Kana));
    assert_eq!(VirtualKey::from_name("HANGEUL"), Some(VirtualKey::Kana));
    assert_eq!(VirtualKey::from_name("HANJA"), Some(VirtualKey::Kanji));
    assert_eq!(VirtualKey::from_name("OEM_FJ_JISHO"), Some(VirtualKey::OemNecEqual));
    assert_eq!(create_vk_map().len(), VirtualKey::ALL.len() + 4);
}

#[test]
fn test_char_literals() {
    assert_eq!(VirtualKey::from_char('Q'), Some(VirtualKey::KeyQ));
    assert_eq!(VirtualKey::from_char('0'), Some(VirtualKey::Key0));
    assert_eq!(VirtualKey::from_char('q'), None);
    assert_eq!(VirtualKey::from_char('`'), None);
}

#[test]
fn test_flag_names() {
    assert_eq!(VirtualKeyFlags::parse_name("KBDEXT"), Some(VirtualKeyFlags::EXT));
    assert_eq!(VirtualKeyFlags::parse_name("MULTIVK"), Some(VirtualKeyFlags::MULTIVK));
    assert_eq!(VirtualKeyFlags::parse_name("KBDBOGUS"), None);
}

#[test]
fn test_mapping_encoding() {
    let mapping = KeyMapping::with_flags(
        VirtualKey::Home,
        VirtualKeyFlags::NUMPAD | VirtualKeyFlags::SPECIAL,
    );
    assert_eq!(mapping.to_u16(), 0x0C24);
    assert_eq!(KeyMapping::from_u16(0x0C24), Some(mapping));
    assert_eq!(KeyMapping::from_u16(0x0100), None);
    assert_eq!(mapping.to_string(), "HOME | SPECIAL | NUMPAD");
    assert_eq!(KeyMapping::new(VirtualKey::KeyA).to_string(), "A");
}
