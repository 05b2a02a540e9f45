use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Fresh scratch directory under the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("kbdtable_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write definition file");
    path
}

#[allow(dead_code)]
pub fn cleanup(dir: &Path) {
    let _ = fs::remove_dir_all(dir);
}
