use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use kbdlayout_core::qwerty_entries;
use log::debug;

use crate::definition::LayoutDefinition;
use crate::error::DefinitionError;
use crate::parser::{DefinitionFile, Directive, Parser};

/// Include name that falls back to the built-in qwerty base table
pub const BUILTIN_BASE: &str = "kbd.h";

/// Expands `#include` directives and folds a definition file into a
/// [`LayoutDefinition`]
pub struct IncludeProcessor {
    /// Canonical paths of files currently being expanded, to detect cycles
    active_files: HashSet<PathBuf>,
    /// Searched after the including file's directory
    include_dirs: Vec<PathBuf>,
}

impl IncludeProcessor {
    pub fn new() -> Self {
        Self {
            active_files: HashSet::new(),
            include_dirs: Vec::new(),
        }
    }

    pub fn with_include_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.include_dirs
            .extend(dirs.into_iter().map(|dir| dir.as_ref().to_path_buf()));
        self
    }

    /// Process a definition file and all its includes
    pub fn process_file(&mut self, file_path: &Path) -> Result<LayoutDefinition, DefinitionError> {
        let mut definition = LayoutDefinition::new();
        self.process_file_into(file_path, &mut definition)?;
        Ok(definition)
    }

    /// Process definition text; relative includes resolve against `base_dir`
    /// (or the current directory)
    pub fn process_string(
        &mut self,
        content: &str,
        base_dir: Option<&Path>,
    ) -> Result<LayoutDefinition, DefinitionError> {
        let file = Parser::new(strip_bom(content)).parse()?;
        let dir = base_dir.unwrap_or_else(|| Path::new("."));

        let mut definition = LayoutDefinition::new();
        self.apply(file, dir, &mut definition)?;
        Ok(definition)
    }

    fn process_file_into(
        &mut self,
        file_path: &Path,
        definition: &mut LayoutDefinition,
    ) -> Result<(), DefinitionError> {
        let canonical_path = file_path.canonicalize()?;

        if !self.active_files.insert(canonical_path.clone()) {
            return Err(DefinitionError::CircularInclude(file_path.to_path_buf()));
        }

        debug!("Reading layout definition {}", file_path.display());
        let content = fs::read_to_string(file_path)?;
        let file = Parser::new(strip_bom(&content))
            .parse()
            .map_err(|e| e.in_file(file_path))?;

        let file_dir = file_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        let result = self.apply(file, &file_dir, definition);

        self.active_files.remove(&canonical_path);
        result
    }

    fn apply(
        &mut self,
        file: DefinitionFile,
        dir: &Path,
        definition: &mut LayoutDefinition,
    ) -> Result<(), DefinitionError> {
        for line in file.directives {
            match line.directive {
                Directive::KeyboardType(keyboard_type) => {
                    definition.set_keyboard_type(keyboard_type)
                }
                Directive::Define(entry) => definition.define(entry),
                Directive::Undef(scancode) => {
                    definition.undefine(scancode);
                }
                Directive::Include(name) => match self.resolve_include(&name, dir) {
                    Some(path) => self.process_file_into(&path, definition)?,
                    None if is_builtin_base(&name) => {
                        debug!("Using built-in qwerty table for #include \"{}\"", name);
                        for entry in qwerty_entries() {
                            definition.define(entry);
                        }
                    }
                    None => return Err(DefinitionError::IncludeNotFound(name)),
                },
            }
        }
        Ok(())
    }

    fn resolve_include(&self, name: &str, dir: &Path) -> Option<PathBuf> {
        let candidate = Path::new(name);
        if candidate.is_absolute() {
            return candidate.is_file().then(|| candidate.to_path_buf());
        }

        std::iter::once(dir)
            .chain(self.include_dirs.iter().map(PathBuf::as_path))
            .map(|base| base.join(candidate))
            .find(|path| path.is_file())
    }
}

impl Default for IncludeProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn is_builtin_base(name: &str) -> bool {
    Path::new(name)
        .file_name()
        .is_some_and(|file_name| file_name == BUILTIN_BASE)
}

fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{FEFF}').unwrap_or(content)
}
