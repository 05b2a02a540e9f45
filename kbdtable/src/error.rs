use std::path::{Path, PathBuf};

use kbdlayout_core::ConfigurationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DefinitionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unknown virtual key at line {line}: {name}")]
    UnknownVirtualKey { line: usize, name: String },

    #[error("Unknown virtual key flag at line {line}: {name}")]
    UnknownFlag { line: usize, name: String },

    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<DefinitionError>,
    },

    #[error("Circular include detected: {}", .0.display())]
    CircularInclude(PathBuf),

    #[error("Include file not found: {0}")]
    IncludeNotFound(String),

    #[error("Layout configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl DefinitionError {
    /// Attaches the definition file a parse error came from
    pub fn in_file(self, path: &Path) -> Self {
        DefinitionError::InFile {
            path: path.to_path_buf(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DefinitionError>;
