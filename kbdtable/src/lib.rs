pub mod lexer;
pub mod parser;
pub mod definition;
pub mod include_processor;
pub mod config;
pub mod error;

pub use kbdlayout_core::{
    ConfigurationError, KeyMapping, KeyboardType, LayoutTable, Scancode, ScancodeEntry,
    UnknownScancode, VirtualKey, VirtualKeyFlags, VkVariants,
};
pub use definition::LayoutDefinition;
pub use include_processor::IncludeProcessor;
pub use config::{Config, select_keyboard_type};
pub use error::DefinitionError;

use std::path::Path;

/// Parse definition text; relative includes resolve against the current directory
pub fn parse_definition(input: &str) -> Result<LayoutDefinition, DefinitionError> {
    IncludeProcessor::new().process_string(input, None)
}

/// Read a definition file, expanding includes relative to it and then `include_dirs`
pub fn load_definition_file<P: AsRef<Path>>(
    input_path: &Path,
    include_dirs: &[P],
) -> Result<LayoutDefinition, DefinitionError> {
    IncludeProcessor::new()
        .with_include_dirs(include_dirs)
        .process_file(input_path)
}

/// Read a definition file and build its table in one step
pub fn compile_layout_file(
    input_path: &Path,
    keyboard_type: Option<KeyboardType>,
) -> Result<LayoutTable, DefinitionError> {
    let definition = load_definition_file::<&Path>(input_path, &[])?;
    let keyboard_type = keyboard_type
        .or(definition.keyboard_type)
        .unwrap_or_default();
    Ok(definition.build(keyboard_type)?)
}
