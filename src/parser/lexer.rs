//! Lexer (scanner) for C- source code
//!
//! Converts raw source text into a stream of [`Token`]s pulled one at a time
//! by the parser. The scanner owns all lexical-level error policy: text that
//! forms no valid token is returned in-band as a [`TokenKind::Error`] token
//! rather than a Rust error, so the parser rejects it wherever it appears
//! through ordinary token matching.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// Source position of a token, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// All token classes produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords (matched case-insensitively)
    If,
    Else,
    While,
    Int,
    Float,
    Return,
    Void,
    Program,

    // Identifiers and numbers
    Ident,
    Num,

    // Operators
    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /
    Lt,    // <
    Le,    // <=
    Gt,    // >
    Ge,    // >=
    EqEq,  // ==
    NotEq, // !=
    Eq,    // =

    // Delimiters
    Semicolon, // ;
    Comma,     // ,
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    LBrace,    // {
    RBrace,    // }
    Dot,       // .

    // End of input and lexical errors
    Eof,
    Error,
}

/// A single scanned token: class, source spelling, and position.
///
/// The parser holds exactly one of these at a time; the grammar needs no
/// further lookahead.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: SmolStr,
    pub location: SourceLocation,
}

/// Scanner for C- source code.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    keywords: FxHashMap<&'static str, TokenKind>,
}

impl Lexer {
    /// Create a new scanner over the given source string.
    pub fn new(input: &str) -> Self {
        let mut keywords = FxHashMap::default();
        keywords.insert("if", TokenKind::If);
        keywords.insert("else", TokenKind::Else);
        keywords.insert("while", TokenKind::While);
        keywords.insert("int", TokenKind::Int);
        keywords.insert("float", TokenKind::Float);
        keywords.insert("return", TokenKind::Return);
        keywords.insert("void", TokenKind::Void);
        keywords.insert("program", TokenKind::Program);

        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            keywords,
        }
    }

    /// Scan and return the next token.
    ///
    /// Returns an endless stream of [`TokenKind::Eof`] tokens (lexeme
    /// `"EOF"`) once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        if let Some(error) = self.skip_whitespace_and_comments() {
            return error;
        }

        let location = self.current_location();

        let ch = match self.advance() {
            Some(ch) => ch,
            None => return self.token(TokenKind::Eof, "EOF", location),
        };

        match ch {
            '0'..='9' => self.number(ch, location),
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(ch, location),

            '+' => self.token(TokenKind::Plus, "+", location),
            '-' => self.token(TokenKind::Minus, "-", location),
            '*' => self.token(TokenKind::Star, "*", location),
            '/' => self.token(TokenKind::Slash, "/", location),
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.token(TokenKind::Le, "<=", location)
                } else {
                    self.token(TokenKind::Lt, "<", location)
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.token(TokenKind::Ge, ">=", location)
                } else {
                    self.token(TokenKind::Gt, ">", location)
                }
            }
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.token(TokenKind::EqEq, "==", location)
                } else {
                    self.token(TokenKind::Eq, "=", location)
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.token(TokenKind::NotEq, "!=", location)
                } else {
                    // A lone '!' starts no C- token.
                    self.token(TokenKind::Error, "!", location)
                }
            }

            ';' => self.token(TokenKind::Semicolon, ";", location),
            ',' => self.token(TokenKind::Comma, ",", location),
            '(' => self.token(TokenKind::LParen, "(", location),
            ')' => self.token(TokenKind::RParen, ")", location),
            '[' => self.token(TokenKind::LBracket, "[", location),
            ']' => self.token(TokenKind::RBracket, "]", location),
            '{' => self.token(TokenKind::LBrace, "{", location),
            '}' => self.token(TokenKind::RBrace, "}", location),
            '.' => self.token(TokenKind::Dot, ".", location),

            _ => Token {
                kind: TokenKind::Error,
                lexeme: SmolStr::new(ch.to_string()),
                location,
            },
        }
    }

    fn token(&self, kind: TokenKind, text: &str, location: SourceLocation) -> Token {
        Token {
            kind,
            lexeme: SmolStr::new(text),
            location,
        }
    }

    /// Scan a numeric literal: integer, decimal (a trailing dot is allowed),
    /// or scientific notation. A letter directly after the digits is not
    /// consumed (`12ab` scans as the number `12` followed by the identifier
    /// `ab`), but an exponent marker without digits (`2.3eX`, `1.5e+A`)
    /// turns everything consumed so far into an error token.
    fn number(&mut self, first_digit: char, location: SourceLocation) -> Token {
        let mut text = String::new();
        text.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if self.peek() == Some('.') {
            text.push('.');
            self.advance();

            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    text.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let digit_at = match self.peek_ahead(1) {
                Some('+') | Some('-') => 2,
                _ => 1,
            };
            let has_digits = matches!(self.peek_ahead(digit_at), Some(d) if d.is_ascii_digit());

            // Consume the marker and optional sign either way, so an error
            // token covers the text actually rejected.
            if let Some(marker) = self.advance() {
                text.push(marker);
            }
            if digit_at == 2 {
                if let Some(sign) = self.advance() {
                    text.push(sign);
                }
            }

            if !has_digits {
                return Token {
                    kind: TokenKind::Error,
                    lexeme: SmolStr::new(text),
                    location,
                };
            }

            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    text.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        Token {
            kind: TokenKind::Num,
            lexeme: SmolStr::new(text),
            location,
        }
    }

    /// Scan an identifier, then classify it as a keyword if its lowercased
    /// spelling is one. The token keeps the source spelling (`IF` scans as
    /// the `if` keyword with lexeme `IF`).
    fn identifier_or_keyword(&mut self, first_char: char, location: SourceLocation) -> Token {
        let mut text = String::new();
        text.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = self
            .keywords
            .get(text.to_ascii_lowercase().as_str())
            .copied()
            .unwrap_or(TokenKind::Ident);

        Token {
            kind,
            lexeme: SmolStr::new(text),
            location,
        }
    }

    /// Skip whitespace and `/* ... */` comments. Returns the error token for
    /// a comment still open at end of input.
    fn skip_whitespace_and_comments(&mut self) -> Option<Token> {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('/') if self.peek_ahead(1) == Some('*') => {
                    if let Some(error) = self.skip_block_comment() {
                        return Some(error);
                    }
                }
                _ => return None,
            }
        }
    }

    /// Skip one `/* ... */` comment. An unterminated comment yields an error
    /// token located at the opener.
    fn skip_block_comment(&mut self) -> Option<Token> {
        let start = self.current_location();
        self.advance(); // '/'
        self.advance(); // '*'

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance();
                self.advance();
                return None;
            }
            self.advance();
        }

        Some(Token {
            kind: TokenKind::Error,
            lexeme: SmolStr::new("/*"),
            location: start,
        })
    }

    /// Peek at the current character without consuming.
    fn peek(&self) -> Option<char> {
        if self.position < self.input.len() {
            Some(self.input[self.position])
        } else {
            None
        }
    }

    /// Peek ahead n characters.
    fn peek_ahead(&self, n: usize) -> Option<char> {
        let pos = self.position + n;
        if pos < self.input.len() {
            Some(self.input[pos])
        } else {
            None
        }
    }

    /// Advance to the next character.
    fn advance(&mut self) -> Option<char> {
        if self.position >= self.input.len() {
            return None;
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        let mut kinds = Vec::new();
        loop {
            let token = lexer.next_token();
            kinds.push(token.kind);
            if token.kind == TokenKind::Eof {
                break;
            }
        }
        kinds
    }

    #[test]
    fn test_simple_tokens() {
        assert_eq!(
            kinds("Program Main { int x; } ."),
            vec![
                TokenKind::Program,
                TokenKind::Ident,
                TokenKind::LBrace,
                TokenKind::Int,
                TokenKind::Ident,
                TokenKind::Semicolon,
                TokenKind::RBrace,
                TokenKind::Dot,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(
            kinds("IF Else WHILE int FLOAT Return VOID PROGRAM"),
            vec![
                TokenKind::If,
                TokenKind::Else,
                TokenKind::While,
                TokenKind::Int,
                TokenKind::Float,
                TokenKind::Return,
                TokenKind::Void,
                TokenKind::Program,
                TokenKind::Eof,
            ]
        );

        // The lexeme keeps the source spelling.
        let mut lexer = Lexer::new("IF");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::If);
        assert_eq!(token.lexeme, "IF");
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("< <= > >= == != = + - * /"),
            vec![
                TokenKind::Lt,
                TokenKind::Le,
                TokenKind::Gt,
                TokenKind::Ge,
                TokenKind::EqEq,
                TokenKind::NotEq,
                TokenKind::Eq,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_number_forms() {
        for text in ["123", "45.67", "89.", "1.23e10", "4.56E-3", "78e+2"] {
            let mut lexer = Lexer::new(text);
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::Num, "input {:?}", text);
            assert_eq!(token.lexeme, text);
            assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        }
    }

    #[test]
    fn test_number_then_identifier() {
        let mut lexer = Lexer::new("12ab");
        let num = lexer.next_token();
        assert_eq!(num.kind, TokenKind::Num);
        assert_eq!(num.lexeme, "12");
        let ident = lexer.next_token();
        assert_eq!(ident.kind, TokenKind::Ident);
        assert_eq!(ident.lexeme, "ab");
    }

    #[test]
    fn test_malformed_exponent() {
        let mut lexer = Lexer::new("2.3eX");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.lexeme, "2.3e");

        let mut lexer = Lexer::new("1.5e+A");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.lexeme, "1.5e+");
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("/* before */ int /* multi\nline */ x"),
            vec![TokenKind::Int, TokenKind::Ident, TokenKind::Eof]
        );
    }

    #[test]
    fn test_unterminated_comment() {
        let mut lexer = Lexer::new("int x /* no end");
        assert_eq!(lexer.next_token().kind, TokenKind::Int);
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);

        let error = lexer.next_token();
        assert_eq!(error.kind, TokenKind::Error);
        assert_eq!(error.lexeme, "/*");
        assert_eq!(error.location, SourceLocation::new(1, 7));

        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_invalid_characters() {
        let mut lexer = Lexer::new("@ !");
        let at = lexer.next_token();
        assert_eq!(at.kind, TokenKind::Error);
        assert_eq!(at.lexeme, "@");
        let bang = lexer.next_token();
        assert_eq!(bang.kind, TokenKind::Error);
        assert_eq!(bang.lexeme, "!");
    }

    #[test]
    fn test_locations_are_one_based() {
        let mut lexer = Lexer::new("int\n  x = 1");
        assert_eq!(lexer.next_token().location, SourceLocation::new(1, 1));
        assert_eq!(lexer.next_token().location, SourceLocation::new(2, 3));
        assert_eq!(lexer.next_token().location, SourceLocation::new(2, 5));
        assert_eq!(lexer.next_token().location, SourceLocation::new(2, 7));
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = Lexer::new("");
        let first = lexer.next_token();
        assert_eq!(first.kind, TokenKind::Eof);
        assert_eq!(first.lexeme, "EOF");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}
