use std::collections::BTreeMap;

use kbdlayout_core::{
    KeyMapping, KeyboardType, Scancode, ScancodeEntry, ScancodePrefix, VirtualKey,
    VirtualKeyFlags, VkVariants,
};

use super::ast::*;
use crate::error::DefinitionError;
use crate::lexer::{Lexer, Token};

/// Recursive-descent parser for kbd.h-style layout definitions
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Option<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            current: None,
        }
    }

    pub fn parse(&mut self) -> Result<DefinitionFile, DefinitionError> {
        let mut file = DefinitionFile::default();
        self.advance()?;

        while let Some(token) = &self.current {
            let line = self.lexer.current_line();
            let directive = match token {
                Token::Define => self.parse_define()?,
                Token::Undef => self.parse_undef()?,
                Token::Include => self.parse_include()?,
                other => {
                    return Err(self.error(format!(
                        "Expected #define, #undef or #include, found {:?}",
                        other
                    )))
                }
            };
            file.directives.push(DirectiveLine { line, directive });
        }

        Ok(file)
    }

    fn advance(&mut self) -> Result<(), DefinitionError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, expected: Token) -> Result<(), DefinitionError> {
        if self.current.as_ref() != Some(&expected) {
            return Err(self.error(format!("Expected {:?}, found {:?}", expected, self.current)));
        }
        self.advance()
    }

    fn error(&self, message: String) -> DefinitionError {
        DefinitionError::Parse {
            line: self.lexer.current_line(),
            message,
        }
    }

    fn expect_identifier(&mut self, what: &str) -> Result<String, DefinitionError> {
        match self.current.take() {
            Some(Token::Identifier(name)) => {
                self.advance()?;
                Ok(name)
            }
            other => {
                let message = format!("Expected {}, found {:?}", what, other);
                self.current = other;
                Err(self.error(message))
            }
        }
    }

    fn parse_define(&mut self) -> Result<Directive, DefinitionError> {
        self.expect(Token::Define)?;
        let name = self.expect_identifier("macro name after #define")?;

        if name == "KBD_TYPE" {
            return self.parse_keyboard_type();
        }

        let scancode = parse_scancode_name(&name)
            .ok_or_else(|| self.error(format!("Unsupported #define: {}", name)))?;

        let variants = match self.current {
            Some(Token::Eq) => self.parse_eq()?,
            Some(Token::Ne) => self.parse_ne()?,
            _ => {
                return Err(self.error(format!(
                    "Expected _EQ(...) or _NE(...) for {}, found {:?}",
                    name, self.current
                )))
            }
        };

        let flags = self.parse_flags()?;
        Ok(Directive::Define(ScancodeEntry {
            scancode,
            variants: apply_flags(variants, flags),
        }))
    }

    fn parse_keyboard_type(&mut self) -> Result<Directive, DefinitionError> {
        let value = match self.current {
            Some(Token::Number(value)) => value,
            _ => {
                return Err(self.error(format!(
                    "Expected keyboard type number, found {:?}",
                    self.current
                )))
            }
        };

        let keyboard_type = u8::try_from(value)
            .ok()
            .and_then(|value| KeyboardType::new(value).ok())
            .ok_or_else(|| {
                self.error(format!(
                    "Invalid keyboard type: {} (expected {}..={})",
                    value,
                    KeyboardType::MIN,
                    KeyboardType::MAX
                ))
            })?;

        self.advance()?;
        Ok(Directive::KeyboardType(keyboard_type))
    }

    fn parse_undef(&mut self) -> Result<Directive, DefinitionError> {
        self.expect(Token::Undef)?;
        let name = self.expect_identifier("scancode name after #undef")?;
        let scancode = parse_scancode_name(&name)
            .ok_or_else(|| self.error(format!("Unsupported #undef: {}", name)))?;
        Ok(Directive::Undef(scancode))
    }

    fn parse_include(&mut self) -> Result<Directive, DefinitionError> {
        self.expect(Token::Include)?;

        if let Some(Token::String(path)) = self.current.take() {
            self.advance()?;
            Ok(Directive::Include(path))
        } else {
            Err(self.error("Expected \"file\" or <file> after #include".to_string()))
        }
    }

    // _EQ(vk [| FLAG]*)
    fn parse_eq(&mut self) -> Result<VkVariants, DefinitionError> {
        self.expect(Token::Eq)?;
        self.expect(Token::LParen)?;
        let mapping = self.parse_mapping()?;
        self.expect(Token::RParen)?;
        Ok(VkVariants::Common(mapping))
    }

    // _NE(vk1 [| FLAG]*, vk2, ...), one column per keyboard type, `_` for none
    fn parse_ne(&mut self) -> Result<VkVariants, DefinitionError> {
        self.expect(Token::Ne)?;
        self.expect(Token::LParen)?;

        let mut variants = BTreeMap::new();
        let mut column = 0usize;
        loop {
            let keyboard_type = KeyboardType::from_column(column).ok_or_else(|| {
                self.error(format!("_NE takes at most {} columns", KeyboardType::MAX))
            })?;

            if self.current == Some(Token::Placeholder) {
                self.advance()?;
            } else {
                variants.insert(keyboard_type, self.parse_mapping()?);
            }
            column += 1;

            match self.current {
                Some(Token::Comma) => self.advance()?,
                Some(Token::RParen) => break,
                _ => {
                    return Err(self.error(format!(
                        "Expected ',' or ')' in _NE, found {:?}",
                        self.current
                    )))
                }
            }
        }
        self.expect(Token::RParen)?;

        if variants.is_empty() {
            return Err(self.error("_NE needs at least one mapped keyboard type".to_string()));
        }
        Ok(VkVariants::PerType(variants))
    }

    fn parse_mapping(&mut self) -> Result<KeyMapping, DefinitionError> {
        let vk = self.parse_virtual_key()?;
        let flags = self.parse_flags()?;
        Ok(KeyMapping::with_flags(vk, flags))
    }

    fn parse_virtual_key(&mut self) -> Result<VirtualKey, DefinitionError> {
        let line = self.lexer.current_line();
        let (vk, spelling) = match &self.current {
            Some(Token::Identifier(name)) => (VirtualKey::from_name(name), name.clone()),
            Some(Token::Char(ch)) => (VirtualKey::from_char(*ch), format!("'{}'", ch)),
            Some(Token::Number(code)) => (
                u8::try_from(*code).ok().and_then(VirtualKey::from_u8),
                format!("{:#04X}", code),
            ),
            _ => return Err(self.error(format!("Expected virtual key, found {:?}", self.current))),
        };

        let vk = vk.ok_or(DefinitionError::UnknownVirtualKey { line, name: spelling })?;
        self.advance()?;
        Ok(vk)
    }

    // | KBDEXT | KBDMULTIVK ...
    fn parse_flags(&mut self) -> Result<VirtualKeyFlags, DefinitionError> {
        let mut flags = VirtualKeyFlags::empty();
        while self.current == Some(Token::Pipe) {
            self.advance()?;
            let line = self.lexer.current_line();
            let name = self.expect_identifier("flag name after '|'")?;
            flags |= VirtualKeyFlags::parse_name(&name)
                .ok_or(DefinitionError::UnknownFlag { line, name })?;
        }
        Ok(flags)
    }
}

fn apply_flags(variants: VkVariants, flags: VirtualKeyFlags) -> VkVariants {
    if flags.is_empty() {
        return variants;
    }
    let with = |mapping: KeyMapping| KeyMapping::with_flags(mapping.vk, mapping.flags | flags);
    match variants {
        VkVariants::Common(mapping) => VkVariants::Common(with(mapping)),
        VkVariants::PerType(map) => {
            VkVariants::PerType(map.into_iter().map(|(t, m)| (t, with(m))).collect())
        }
    }
}

/// Parses kbd.h scancode macro names: `T1E` (no prefix), `X1C` (E0), `Y1D` (E1)
pub fn parse_scancode_name(name: &str) -> Option<Scancode> {
    let mut chars = name.chars();
    let prefix = match chars.next()? {
        'T' => ScancodePrefix::None,
        'X' => ScancodePrefix::E0,
        'Y' => ScancodePrefix::E1,
        _ => return None,
    };
    let digits = chars.as_str();
    if digits.len() != 2 {
        return None;
    }
    let code = u8::from_str_radix(digits, 16).ok()?;
    Some(Scancode::from_parts(prefix, code))
}
