//! SLC lexer: converts source text into tokens.
//!
//! Scanning is driven by a per-character classification. Numbers, strings
//! and words are scanned greedily; operator material is scanned as a maximal
//! run of symbol characters which is then shortened from the right until it
//! matches a known operator, so `<=` is one token while `);` is two.
//!
//! Names are refined by the token that follows them: a name directly before
//! `(` is a [`TokenKind::Function`], a name before any other operator or
//! punctuator is a [`TokenKind::Variable`].
mod tables;

use slc_syntax::error::{error_at, ErrorKind, Result};
use slc_syntax::token::{Token, TokenKind};

/// Tokenizer configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexerOptions {
    /// Let names continue with digits and `_` after the first letter.
    /// Off by default: `abc1` scans as the name `abc` followed by `1`.
    pub alphanumeric_identifiers: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    EndOfInput,
    Whitespace,
    Digit,
    Quote,
    Letter,
    Symbol,
    Unknown,
}

fn classify(c: Option<char>) -> CharClass {
    match c {
        None => CharClass::EndOfInput,
        Some(' ' | '\t' | '\r' | '\n') => CharClass::Whitespace,
        Some(c) if c.is_ascii_digit() => CharClass::Digit,
        Some('"') => CharClass::Quote,
        Some(c) if c.is_ascii_alphabetic() => CharClass::Letter,
        Some('!'..='/' | ':'..='@' | '['..='`' | '{'..='~') => CharClass::Symbol,
        Some(_) => CharClass::Unknown,
    }
}

/// Character scanner that produces positioned tokens.
pub struct Lexer {
    src: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
    options: LexerOptions,
    /// A name whose role depends on the next token.
    pending: Option<Token>,
}

impl Lexer {
    /// Create a new lexer over the given source string.
    pub fn new(input: &str) -> Self {
        Self::with_options(input, LexerOptions::default())
    }

    pub fn with_options(input: &str, options: LexerOptions) -> Self {
        Self {
            src: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            options,
            pending: None,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src.get(self.pos).copied();
        if let Some(c) = ch {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        ch
    }

    fn read_digits(&mut self, s: &mut String) {
        while classify(self.peek()) == CharClass::Digit {
            if let Some(c) = self.advance() {
                s.push(c);
            }
        }
    }

    fn read_number(&mut self) -> Result<Token> {
        let (line, col) = (self.line, self.col);
        let mut s = String::new();
        self.read_digits(&mut s);
        if self.peek() != Some('.') {
            return Ok(Token::new(TokenKind::Int, s, line, col));
        }
        self.advance();
        s.push('.');
        let before = s.len();
        self.read_digits(&mut s);
        if s.len() == before {
            return error_at(line, col, ErrorKind::MalformedNumber { lexeme: s });
        }
        Ok(Token::new(TokenKind::Double, s, line, col))
    }

    fn read_string(&mut self) -> Result<Token> {
        let (line, col) = (self.line, self.col);
        self.advance();
        let mut s = String::new();
        loop {
            match self.advance() {
                Some('"') => return Ok(Token::new(TokenKind::String, s, line, col)),
                Some(c) => s.push(c),
                None => return error_at(line, col, ErrorKind::UnterminatedString),
            }
        }
    }

    fn read_word(&mut self) -> Token {
        let (line, col) = (self.line, self.col);
        let mut s = String::new();
        while let Some(c) = self.peek() {
            let continues = c.is_ascii_alphabetic()
                || (self.options.alphanumeric_identifiers
                    && !s.is_empty()
                    && (c.is_ascii_digit() || c == '_'));
            if !continues {
                break;
            }
            s.push(c);
            self.advance();
        }
        let kind = tables::keyword(&s).unwrap_or(TokenKind::Identifier);
        Token::new(kind, s, line, col)
    }

    fn read_operator(&mut self) -> Result<Token> {
        let (line, col) = (self.line, self.col);
        let mut run: String = self.src[self.pos..]
            .iter()
            .take_while(|&&c| classify(Some(c)) == CharClass::Symbol)
            .take(tables::MAX_OPERATOR_LEN)
            .collect();
        // Longest match: give characters back until the prefix is known.
        let kind = loop {
            if let Some(kind) = tables::operator(&run) {
                break kind;
            }
            if run.pop().is_none() {
                let found = self.peek().unwrap_or('\0');
                return error_at(line, col, ErrorKind::Lex { found });
            }
        };
        for _ in 0..run.len() {
            self.advance();
        }
        Ok(Token::new(kind, run, line, col))
    }

    /// Append a token, resolving the pending name first.
    fn emit(&mut self, tokens: &mut Vec<Token>, tok: Token) {
        if let Some(mut name) = self.pending.take() {
            if tok.kind == TokenKind::LeftParen {
                name.kind = TokenKind::Function;
            } else if tables::is_operator(tok.kind) {
                name.kind = TokenKind::Variable;
            }
            tokens.push(name);
        }
        if tok.kind == TokenKind::Identifier {
            self.pending = Some(tok);
        } else {
            tokens.push(tok);
        }
    }

    /// Tokenize the entire input into a vector of tokens ending with
    /// [`TokenKind::EndOfInput`].
    pub fn scan(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let tk = match classify(self.peek()) {
                CharClass::EndOfInput => break,
                CharClass::Whitespace => {
                    self.advance();
                    continue;
                }
                CharClass::Digit => self.read_number()?,
                CharClass::Quote => self.read_string()?,
                CharClass::Letter => self.read_word(),
                CharClass::Symbol => self.read_operator()?,
                CharClass::Unknown => {
                    let found = self.peek().unwrap_or('\0');
                    return error_at(self.line, self.col, ErrorKind::Lex { found });
                }
            };
            self.emit(&mut tokens, tk);
        }
        if let Some(name) = self.pending.take() {
            tokens.push(name);
        }
        tokens.push(Token::new(TokenKind::EndOfInput, "", self.line, self.col));
        Ok(tokens)
    }
}

/// Scan `input` with default options.
pub fn scan(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).scan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use slc_syntax::error::Error;

    fn kinds(input: &str) -> Vec<TokenKind> {
        scan(input)
            .expect("Lexing should succeed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn lex_error(input: &str) -> Error {
        scan(input).expect_err("Lexing should fail")
    }

    #[test]
    fn test_arithmetic_tokens() {
        let tokens = scan("1+2*3").unwrap();
        let pairs: Vec<(TokenKind, &str)> =
            tokens.iter().map(|t| (t.kind, t.lexeme.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                (TokenKind::Int, "1"),
                (TokenKind::OpAdd, "+"),
                (TokenKind::Int, "2"),
                (TokenKind::OpMultiply, "*"),
                (TokenKind::Int, "3"),
                (TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_longest_match_operators() {
        assert_eq!(kinds("<="), vec![TokenKind::RelOpLessOrEqual, TokenKind::EndOfInput]);
        assert_eq!(kinds("=="), vec![TokenKind::RelOpEqual, TokenKind::EndOfInput]);
        assert_eq!(kinds("&&||"), vec![TokenKind::LogicOpAnd, TokenKind::LogicOpOr, TokenKind::EndOfInput]);
        assert_eq!(
            kinds(">=="),
            vec![TokenKind::RelOpGreaterOrEqual, TokenKind::Assignment, TokenKind::EndOfInput]
        );
    }

    #[test]
    fn test_adjacent_punctuators_split() {
        assert_eq!(
            kinds("();}"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Semicolon,
                TokenKind::RightBrace,
                TokenKind::EndOfInput,
            ]
        );
        assert_eq!(
            kinds("<-"),
            vec![TokenKind::RelOpLessThan, TokenKind::OpSubtract, TokenKind::EndOfInput]
        );
    }

    #[test]
    fn test_long_symbol_run() {
        let src = format!("x = {}1;", "-".repeat(5000));
        let tokens = scan(&src).unwrap();
        assert_eq!(tokens.len(), 5005);
        assert!(tokens[2..5002].iter().all(|t| t.kind == TokenKind::OpSubtract));
        assert_eq!(tokens[5002].kind, TokenKind::Int);
    }

    #[test]
    fn test_operator_table_bound() {
        for op in ["&&", "||", "==", "!=", "<=", ">="] {
            assert!(op.chars().count() <= tables::MAX_OPERATOR_LEN);
            assert!(tables::operator(op).is_some(), "{}", op);
        }
    }

    #[test]
    fn test_identifier_roles() {
        assert_eq!(
            kinds("foo(x)"),
            vec![
                TokenKind::Function,
                TokenKind::LeftParen,
                TokenKind::Variable,
                TokenKind::RightParen,
                TokenKind::EndOfInput,
            ]
        );
        assert_eq!(
            kinds("foo = 1;"),
            vec![
                TokenKind::Variable,
                TokenKind::Assignment,
                TokenKind::Int,
                TokenKind::Semicolon,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_unresolved_identifier_stays_plain() {
        assert_eq!(kinds("foo"), vec![TokenKind::Identifier, TokenKind::EndOfInput]);
        assert_eq!(
            kinds("a b ="),
            vec![
                TokenKind::Identifier,
                TokenKind::Variable,
                TokenKind::Assignment,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("int double string void bool return printf print elif"),
            vec![
                TokenKind::IntType,
                TokenKind::DoubleType,
                TokenKind::StringType,
                TokenKind::Void,
                TokenKind::BoolType,
                TokenKind::Return,
                TokenKind::Printf,
                TokenKind::Print,
                TokenKind::Elif,
                TokenKind::EndOfInput,
            ]
        );
        assert_eq!(kinds("null true false"), vec![TokenKind::Null, TokenKind::True, TokenKind::False, TokenKind::EndOfInput]);
    }

    #[test]
    fn test_numbers() {
        let tokens = scan("42 3.25").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Int);
        assert_eq!(tokens[0].lexeme, "42");
        assert_eq!(tokens[1].kind, TokenKind::Double);
        assert_eq!(tokens[1].lexeme, "3.25");
    }

    #[test]
    fn test_trailing_decimal_point_is_malformed() {
        let err = lex_error("1.");
        assert_eq!(err.kind, ErrorKind::MalformedNumber { lexeme: "1.".to_string() });
        assert_eq!((err.line, err.col), (1, 1));
        assert!(matches!(lex_error("x = 7.;").kind, ErrorKind::MalformedNumber { .. }));
    }

    #[test]
    fn test_strings_are_verbatim() {
        let tokens = scan(r#""a\n %d""#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, r"a\n %d");
    }

    #[test]
    fn test_unterminated_string() {
        let err = lex_error("x = \"oops");
        assert_eq!(err.kind, ErrorKind::UnterminatedString);
        assert_eq!((err.line, err.col), (1, 5));
    }

    #[test]
    fn test_unknown_characters() {
        let err = lex_error("int x = 1;\n  x ! 2");
        assert_eq!(err.kind, ErrorKind::Lex { found: '!' });
        assert_eq!((err.line, err.col), (2, 5));
        assert_eq!(lex_error("é").kind, ErrorKind::Lex { found: 'é' });
        assert_eq!(lex_error("#").kind, ErrorKind::Lex { found: '#' });
    }

    #[test]
    fn test_positions() {
        let tokens = scan("int x\n  = 5;").unwrap();
        let positions: Vec<(usize, usize)> = tokens.iter().map(|t| (t.line, t.col)).collect();
        assert_eq!(positions, vec![(1, 1), (1, 5), (2, 3), (2, 5), (2, 6), (2, 7)]);
    }

    #[test]
    fn test_identifier_options() {
        assert_eq!(
            kinds("abc1"),
            vec![TokenKind::Identifier, TokenKind::Int, TokenKind::EndOfInput]
        );
        let opts = LexerOptions { alphanumeric_identifiers: true };
        let tokens = Lexer::with_options("my_var2 = 1", opts).scan().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Variable);
        assert_eq!(tokens[0].lexeme, "my_var2");
    }
}
