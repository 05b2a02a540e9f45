use logos::Logos;

#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Comments, whitespace and line continuations (skipped)
    #[regex(r"//[^\n]*", logos::skip)]
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", logos::skip)]
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    #[regex(r"\\\r?\n", logos::skip)]
    Comment,

    // Preprocessor directives
    #[regex(r"#[ \t]*define")]
    Define,

    #[regex(r"#[ \t]*undef")]
    Undef,

    #[regex(r"#[ \t]*include")]
    Include,

    // Table row macros
    #[token("_EQ")]
    Eq,

    #[token("_NE")]
    Ne,

    // Delimiters
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token("|")]
    Pipe,

    // Empty `_NE` column
    #[token("_", priority = 10)]
    Placeholder,

    #[regex(r"0[xX][0-9a-fA-F]+", |lex| u32::from_str_radix(&lex.slice()[2..], 16).ok())]
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u32>().ok())]
    Number(u32),

    // 'A'
    #[regex(r"'[^'\\\n]'", |lex| lex.slice().chars().nth(1))]
    Char(char),

    // "path" or <path>
    #[regex(r#""[^"\n]*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    #[regex(r"<[^>\n]*>", |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    String(String),

    // Virtual key names, scancode names, flags
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos::Logos;

    #[test]
    fn test_define_row() {
        let input = "#define T29 _NE(OEM_3, _, 'A', 0xC0) | KBDEXT";
        let mut lex = Token::lexer(input);

        assert_eq!(lex.next(), Some(Ok(Token::Define)));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("T29".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Ne)));
        assert_eq!(lex.next(), Some(Ok(Token::LParen)));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("OEM_3".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Comma)));
        assert_eq!(lex.next(), Some(Ok(Token::Placeholder)));
        assert_eq!(lex.next(), Some(Ok(Token::Comma)));
        assert_eq!(lex.next(), Some(Ok(Token::Char('A'))));
        assert_eq!(lex.next(), Some(Ok(Token::Comma)));
        assert_eq!(lex.next(), Some(Ok(Token::Number(0xC0))));
        assert_eq!(lex.next(), Some(Ok(Token::RParen)));
        assert_eq!(lex.next(), Some(Ok(Token::Pipe)));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("KBDEXT".to_string()))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_lone_underscore_is_placeholder() {
        let mut lex = Token::lexer("_ _NE _x __");

        assert_eq!(lex.next(), Some(Ok(Token::Placeholder)));
        assert_eq!(lex.next(), Some(Ok(Token::Ne)));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("_x".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("__".to_string()))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_directives_and_paths() {
        let input = "# include \"kbd.h\"\n#include <customization.h>\n#undef X1C";
        let mut lex = Token::lexer(input);

        assert_eq!(lex.next(), Some(Ok(Token::Include)));
        assert_eq!(lex.next(), Some(Ok(Token::String("kbd.h".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Include)));
        assert_eq!(lex.next(), Some(Ok(Token::String("customization.h".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Undef)));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("X1C".to_string()))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_banner_comments_skipped() {
        let input = concat!(
            "/****** Module Header ******\\\n* layout\n\\*****/\n",
            "// note\n#define KBD_TYPE 4"
        );
        let mut lex = Token::lexer(input);

        assert_eq!(lex.next(), Some(Ok(Token::Define)));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("KBD_TYPE".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(4))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_eq_is_not_an_identifier() {
        let mut lex = Token::lexer("_EQ _EQUAL _");

        assert_eq!(lex.next(), Some(Ok(Token::Eq)));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("_EQUAL".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Placeholder)));
        assert_eq!(lex.next(), None);
    }
}
