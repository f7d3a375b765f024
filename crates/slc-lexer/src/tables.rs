//! Keyword and operator lookup tables, built once and shared by every scan.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use slc_syntax::token::TokenKind;

static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
/// Length in characters of the longest operator spelling.
pub const MAX_OPERATOR_LEN: usize = 2;

static OPERATORS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();

pub fn keyword(word: &str) -> Option<TokenKind> {
    KEYWORDS
        .get_or_init(|| {
            [
                ("null", TokenKind::Null),
                ("true", TokenKind::True),
                ("false", TokenKind::False),
                ("bool", TokenKind::BoolType),
                ("int", TokenKind::IntType),
                ("double", TokenKind::DoubleType),
                ("string", TokenKind::StringType),
                ("void", TokenKind::Void),
                ("return", TokenKind::Return),
                ("for", TokenKind::For),
                ("while", TokenKind::While),
                ("if", TokenKind::If),
                ("elif", TokenKind::Elif),
                ("else", TokenKind::Else),
                ("switch", TokenKind::Switch),
                ("case", TokenKind::Case),
                ("default", TokenKind::Default),
                ("break", TokenKind::Break),
                ("continue", TokenKind::Continue),
                ("print", TokenKind::Print),
                ("printf", TokenKind::Printf),
            ]
            .into_iter()
            .collect()
        })
        .get(word)
        .copied()
}

pub fn operator(text: &str) -> Option<TokenKind> {
    OPERATORS
        .get_or_init(|| {
            [
                ("&&", TokenKind::LogicOpAnd),
                ("||", TokenKind::LogicOpOr),
                ("==", TokenKind::RelOpEqual),
                ("!=", TokenKind::RelOpNotEqual),
                ("<", TokenKind::RelOpLessThan),
                (">", TokenKind::RelOpGreaterThan),
                ("<=", TokenKind::RelOpLessOrEqual),
                (">=", TokenKind::RelOpGreaterOrEqual),
                ("+", TokenKind::OpAdd),
                ("-", TokenKind::OpSubtract),
                ("*", TokenKind::OpMultiply),
                ("/", TokenKind::OpDivide),
                ("%", TokenKind::OpModulo),
                ("=", TokenKind::Assignment),
                (".", TokenKind::Period),
                (",", TokenKind::Comma),
                (":", TokenKind::Colon),
                (";", TokenKind::Semicolon),
                ("(", TokenKind::LeftParen),
                (")", TokenKind::RightParen),
                ("{", TokenKind::LeftBrace),
                ("}", TokenKind::RightBrace),
                ("[", TokenKind::LeftBracket),
                ("]", TokenKind::RightBracket),
            ]
            .into_iter()
            .collect()
        })
        .get(text)
        .copied()
}

/// True for kinds that come out of the operator table.
pub fn is_operator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::LogicOpAnd
            | TokenKind::LogicOpOr
            | TokenKind::RelOpEqual
            | TokenKind::RelOpNotEqual
            | TokenKind::RelOpLessThan
            | TokenKind::RelOpGreaterThan
            | TokenKind::RelOpLessOrEqual
            | TokenKind::RelOpGreaterOrEqual
            | TokenKind::OpAdd
            | TokenKind::OpSubtract
            | TokenKind::OpMultiply
            | TokenKind::OpDivide
            | TokenKind::OpModulo
            | TokenKind::Assignment
            | TokenKind::Period
            | TokenKind::Comma
            | TokenKind::Colon
            | TokenKind::Semicolon
            | TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::LeftBrace
            | TokenKind::RightBrace
            | TokenKind::LeftBracket
            | TokenKind::RightBracket
    )
}
