//! Token definitions shared by the lexer and the parser.
//!
//! A [`Token`] pairs a [`TokenKind`] with the raw lexeme it was scanned from
//! and the position of its first character. Literal lexemes are kept as text;
//! converting `"42"` or `"3.5"` into numbers is the parser's job.
//!
//! # Token Categories
//!
//! - **Literals**: `null`, `true`, `false`, integers, doubles, strings
//! - **Type keywords**: `bool`, `int`, `double`, `string`, `void`
//! - **Keywords**: `return`, `for`, `while`, `if`, `elif`, `else`, `switch`,
//!   `case`, `default`, `break`, `continue`, `print`, `printf`
//! - **Identifier roles**: a name is scanned as [`TokenKind::Identifier`] and
//!   refined to [`TokenKind::Function`] or [`TokenKind::Variable`] by the
//!   token that follows it
//! - **Operators and punctuation**: `&& || == != < > <= >= + - * / % = . , : ; ( ) { } [ ]`
//! - **Special**: [`TokenKind::EndOfInput`]
//!
//! # Examples
//!
//! ```rust
//! use slc_syntax::{Token, TokenKind};
//!
//! let tok = Token::new(TokenKind::Int, "42", 1, 9);
//! assert_eq!(tok.lexeme, "42");
//! assert_eq!(tok.kind.name(), "Int");
//! assert_eq!(TokenKind::RelOpLessOrEqual.name(), "RelOpLessOrEqual");
//! ```

use std::fmt;

use serde::Serialize;

/// The closed set of token classifications.
///
/// Kinds carry no payload; the source text lives in [`Token::lexeme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // === Literals ===
    /// `null`
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// Integer literal, e.g. `42`
    Int,
    /// Decimal literal, e.g. `3.25`
    Double,
    /// String literal; the lexeme excludes the quotes
    String,

    // === Type keywords ===
    /// `bool`
    BoolType,
    /// `int`
    IntType,
    /// `double`
    DoubleType,
    /// `string`
    StringType,
    /// `void`, both a return type and the void literal
    Void,

    // === Identifier roles ===
    /// A name whose role has not been resolved
    Identifier,
    /// A name followed by an operator or punctuator other than `(`
    Variable,
    /// A name immediately followed by `(`
    Function,

    // === Keywords ===
    Return,
    For,
    While,
    If,
    Elif,
    Else,
    Switch,
    Case,
    Default,
    Break,
    Continue,
    Print,
    Printf,

    // === Operators ===
    /// `&&`
    LogicOpAnd,
    /// `||`
    LogicOpOr,
    /// `==`
    RelOpEqual,
    /// `!=`
    RelOpNotEqual,
    /// `<`
    RelOpLessThan,
    /// `>`
    RelOpGreaterThan,
    /// `<=`
    RelOpLessOrEqual,
    /// `>=`
    RelOpGreaterOrEqual,
    /// `+`
    OpAdd,
    /// `-`
    OpSubtract,
    /// `*`
    OpMultiply,
    /// `/`
    OpDivide,
    /// `%`
    OpModulo,
    /// `=`
    Assignment,

    // === Punctuation ===
    Period,
    Comma,
    Colon,
    Semicolon,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,

    /// Appended once after the last real token
    EndOfInput,
}

impl TokenKind {
    /// Stable name of the kind, used in token listings.
    pub fn name(self) -> String {
        format!("{:?}", self)
    }

    /// Any of the three identifier roles.
    pub fn is_name(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Variable | TokenKind::Function
        )
    }

    /// Keywords that may start a variable declaration or a function.
    pub fn is_type(self) -> bool {
        matches!(
            self,
            TokenKind::BoolType
                | TokenKind::IntType
                | TokenKind::DoubleType
                | TokenKind::StringType
                | TokenKind::Void
        )
    }
}

/// Human-readable form used in diagnostics: fixed spellings are quoted,
/// open classes are described.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Int => "integer literal",
            TokenKind::Double => "double literal",
            TokenKind::String => "string literal",
            TokenKind::Identifier | TokenKind::Variable | TokenKind::Function => "identifier",
            TokenKind::EndOfInput => "end of input",
            TokenKind::Null => "'null'",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::BoolType => "'bool'",
            TokenKind::IntType => "'int'",
            TokenKind::DoubleType => "'double'",
            TokenKind::StringType => "'string'",
            TokenKind::Void => "'void'",
            TokenKind::Return => "'return'",
            TokenKind::For => "'for'",
            TokenKind::While => "'while'",
            TokenKind::If => "'if'",
            TokenKind::Elif => "'elif'",
            TokenKind::Else => "'else'",
            TokenKind::Switch => "'switch'",
            TokenKind::Case => "'case'",
            TokenKind::Default => "'default'",
            TokenKind::Break => "'break'",
            TokenKind::Continue => "'continue'",
            TokenKind::Print => "'print'",
            TokenKind::Printf => "'printf'",
            TokenKind::LogicOpAnd => "'&&'",
            TokenKind::LogicOpOr => "'||'",
            TokenKind::RelOpEqual => "'=='",
            TokenKind::RelOpNotEqual => "'!='",
            TokenKind::RelOpLessThan => "'<'",
            TokenKind::RelOpGreaterThan => "'>'",
            TokenKind::RelOpLessOrEqual => "'<='",
            TokenKind::RelOpGreaterOrEqual => "'>='",
            TokenKind::OpAdd => "'+'",
            TokenKind::OpSubtract => "'-'",
            TokenKind::OpMultiply => "'*'",
            TokenKind::OpDivide => "'/'",
            TokenKind::OpModulo => "'%'",
            TokenKind::Assignment => "'='",
            TokenKind::Period => "'.'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
        };
        f.write_str(text)
    }
}

/// A classified lexeme with its source location.
///
/// `line` and `col` are 1-based and refer to the token's first character
/// (the opening quote for strings).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            col,
        }
    }
}
