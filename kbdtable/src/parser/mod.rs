mod ast;
mod parser;

pub use ast::*;
pub use parser::{parse_scancode_name, Parser};
