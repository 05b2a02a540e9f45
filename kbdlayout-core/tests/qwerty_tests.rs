use kbdlayout_core::{key_name, KeyboardType, LayoutTable, Scancode, VirtualKey, VirtualKeyFlags};
use kbdlayout_core::layout::QWERTY;
use pretty_assertions::assert_eq;

#[test]
fn test_qwerty_basic_keys() {
    let table = LayoutTable::qwerty(KeyboardType::default()).unwrap();

    assert_eq!(table.resolve(0x01), Ok(VirtualKey::Escape));
    assert_eq!(table.resolve(0x02), Ok(VirtualKey::Key1));
    assert_eq!(table.resolve(0x10), Ok(VirtualKey::KeyQ));
    assert_eq!(table.resolve(0x1E), Ok(VirtualKey::KeyA));
    assert_eq!(table.resolve(0x2C), Ok(VirtualKey::KeyZ));
    assert_eq!(table.resolve(0x29), Ok(VirtualKey::Oem3));
    assert_eq!(table.resolve(0x39), Ok(VirtualKey::Space));
}

#[test]
fn test_qwerty_prefixed_keys() {
    let table = LayoutTable::qwerty(KeyboardType::default()).unwrap();

    let rctrl = table.resolve_mapping(0xE01D).unwrap();
    assert_eq!(rctrl.vk, VirtualKey::RControl);
    assert_eq!(rctrl.flags, VirtualKeyFlags::EXT);

    assert_eq!(table.resolve(0xE038), Ok(VirtualKey::RMenu));
    assert_eq!(table.resolve(0xE11D), Ok(VirtualKey::Pause));
    assert!(table.resolve(0xE05E).is_err());
}

#[test]
fn test_qwerty_numpad_flags() {
    let table = LayoutTable::qwerty(KeyboardType::default()).unwrap();

    let home = table.resolve_mapping(0x47).unwrap();
    assert_eq!(home.vk, VirtualKey::Home);
    assert!(home.flags.contains(VirtualKeyFlags::NUMPAD | VirtualKeyFlags::SPECIAL));

    let numlock = table.resolve_mapping(0x45).unwrap();
    assert_eq!(numlock.flags, VirtualKeyFlags::EXT | VirtualKeyFlags::MULTIVK);
}

#[test]
fn test_qwerty_is_type_invariant() {
    let reference = LayoutTable::qwerty(KeyboardType::new(1).unwrap()).unwrap();
    for keyboard_type in KeyboardType::all() {
        let table = LayoutTable::qwerty(keyboard_type).unwrap();
        assert!(table.iter().eq(reference.iter()));
    }
    assert!(reference.uniform_variant_entries().is_empty());
}

#[test]
fn test_qwerty_source_sorted_and_unique() {
    assert!(QWERTY.windows(2).all(|pair| pair[0].0 < pair[1].0));
}

#[test]
fn test_key_names() {
    assert_eq!(key_name(0x01), Some("Esc"));
    assert_eq!(key_name(Scancode::new(0xE01D)), Some("Right Ctrl"));
    assert_eq!(key_name(0xE035), Some("Num /"));
    assert_eq!(key_name(0x1E), None);
}
