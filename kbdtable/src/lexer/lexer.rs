use logos::{Logos, Lexer as LogosLexer};

use super::Token;
use crate::error::DefinitionError;

/// Token stream with line tracking for error messages
pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
    current_line: usize,
    pub input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
            current_line: 1,
            input,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, DefinitionError> {
        // Newlines in the previous token and in skipped content move the line counter
        let before_pos = self.inner.span().start;

        match self.inner.next() {
            Some(Ok(token)) => {
                let span_text = &self.input[before_pos..self.inner.span().start];
                self.current_line += span_text.chars().filter(|&c| c == '\n').count();
                Ok(Some(token))
            }
            Some(Err(())) => {
                let span = self.inner.span();
                let span_text = &self.input[before_pos..span.start];
                self.current_line += span_text.chars().filter(|&c| c == '\n').count();
                Err(DefinitionError::Parse {
                    line: self.current_line,
                    message: format!("Unexpected token: '{}'", &self.input[span]),
                })
            }
            None => Ok(None),
        }
    }

    /// Line of the token most recently returned
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn collect_all(mut self) -> Result<Vec<Token>, DefinitionError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_line_tracking() {
        let input = "#define KBD_TYPE 4\n\n/* two\nlines */\n#include \"kbd.h\"";
        let mut lexer = Lexer::new(input);

        assert_eq!(lexer.next_token().unwrap(), Some(Token::Define));
        assert_eq!(lexer.current_line(), 1);
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();

        assert_eq!(lexer.next_token().unwrap(), Some(Token::Include));
        assert_eq!(lexer.current_line(), 5);
    }

    #[test]
    fn test_error_reports_line() {
        let lexer = Lexer::new("#define T1E _EQ(A)\n#define T1F _EQ(S) $");
        match lexer.collect_all() {
            Err(DefinitionError::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("Unexpected token"));
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }
}
