use kbdlayout_core::{KeyboardType, Scancode, ScancodeEntry};

/// A parsed layout definition file, before includes are expanded
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DefinitionFile {
    pub directives: Vec<DirectiveLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveLine {
    pub line: usize,
    pub directive: Directive,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// `#define KBD_TYPE n`
    KeyboardType(KeyboardType),
    /// `#define T1E _EQ(A)` and friends
    Define(ScancodeEntry),
    /// `#undef T1E`
    Undef(Scancode),
    /// `#include "file"`
    Include(String),
}
