mod common;

use common::*;
use kbdtable::{select_keyboard_type, Config, ConfigurationError, KeyboardType};
use std::path::PathBuf;

fn kt(value: u8) -> KeyboardType {
    KeyboardType::new(value).unwrap()
}

#[test]
fn test_parse_config() {
    let config = Config::from_toml_str(
        r#"
keyboard_type = 2
include_dirs = ["/usr/share/kbdtable", "layouts"]
"#,
    )
    .unwrap();

    assert_eq!(config.keyboard_type, Some(2));
    assert_eq!(
        config.include_dirs,
        vec![PathBuf::from("/usr/share/kbdtable"), PathBuf::from("layouts")]
    );
}

#[test]
fn test_empty_config_uses_defaults() {
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
fn test_config_rejects_bad_values() {
    assert!(Config::from_toml_str("keyboard_type = 7").is_err());
    assert!(Config::from_toml_str("keyboard_typo = 4").is_err());
}

#[test]
fn test_load_config_file() {
    let dir = temp_dir("config");
    let path = write_file(&dir, "kbdtable.toml", "keyboard_type = 1\n");

    assert_eq!(Config::load(&path).unwrap().keyboard_type, Some(1));
    assert!(Config::load(&dir.join("missing.toml")).is_err());

    cleanup(&dir);
}

#[test]
fn test_keyboard_type_precedence() {
    let config = Config {
        keyboard_type: Some(2),
        include_dirs: Vec::new(),
    };

    assert_eq!(select_keyboard_type(Some(6), Some(kt(1)), &config), Ok(kt(6)));
    assert_eq!(select_keyboard_type(None, Some(kt(1)), &config), Ok(kt(1)));
    assert_eq!(select_keyboard_type(None, None, &config), Ok(kt(2)));
    assert_eq!(select_keyboard_type(None, None, &Config::default()), Ok(kt(4)));
    assert_eq!(
        select_keyboard_type(Some(0), None, &config),
        Err(ConfigurationError::InvalidKeyboardType(0))
    );
}
