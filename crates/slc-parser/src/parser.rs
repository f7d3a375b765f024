//! Token cursor, the expectation primitive, and statement-level parsing.

use std::fmt;

use slc_syntax::ast::*;
use slc_syntax::error::{Error, ErrorKind, Result};
use slc_syntax::token::{Token, TokenKind};

/// Whether a missing token is an error or just a non-match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expectation {
    Mandatory,
    Optional,
}

/// What the next token has to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Want {
    Kind(TokenKind),
    /// Any identifier role.
    Name,
    /// A type keyword.
    Type,
}

impl Want {
    fn matches(self, kind: TokenKind) -> bool {
        match self {
            Want::Kind(k) => k == kind,
            Want::Name => kind.is_name(),
            Want::Type => kind.is_type(),
        }
    }
}

impl fmt::Display for Want {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Want::Kind(k) => write!(f, "{}", k),
            Want::Name => f.write_str("identifier"),
            Want::Type => f.write_str("type keyword"),
        }
    }
}

pub(crate) fn type_tag(kind: TokenKind) -> Option<TypeTag> {
    match kind {
        TokenKind::BoolType => Some(TypeTag::Bool),
        TokenKind::IntType => Some(TypeTag::Int),
        TokenKind::DoubleType => Some(TypeTag::Double),
        TokenKind::StringType => Some(TypeTag::String),
        TokenKind::Void => Some(TypeTag::Void),
        _ => None,
    }
}

/// How many expressions and statements may enclose one another.
const MAX_DEPTH: usize = 64;

/// Describe a token for the "found ..." half of a diagnostic.
fn describe(tok: &Token) -> String {
    match tok.kind {
        TokenKind::Int | TokenKind::Double => format!("{} '{}'", tok.kind, tok.lexeme),
        TokenKind::String => format!("string literal \"{}\"", tok.lexeme),
        k if k.is_name() => format!("identifier '{}'", tok.lexeme),
        k => k.to_string(),
    }
}

/// Recursive-descent parser over a scanned token list.
///
/// The cursor only moves forward and never steps past the trailing
/// [`TokenKind::EndOfInput`].
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Declared result of the function being parsed; decides whether
    /// `return;` is allowed.
    return_type: TypeTag,
    depth: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EndOfInput) {
            let (line, col) = tokens.last().map_or((1, 1), |t| (t.line, t.col));
            tokens.push(Token::new(TokenKind::EndOfInput, "", line, col));
        }
        Self {
            tokens,
            pos: 0,
            return_type: TypeTag::Void,
            depth: 0,
        }
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub(crate) fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].clone();
        if tok.kind != TokenKind::EndOfInput {
            self.pos += 1;
        }
        tok
    }

    pub(crate) fn error_here(&self, expected: impl Into<String>) -> Error {
        let tok = self.peek();
        Error::expected(expected, describe(tok), tok.line, tok.col)
    }

    /// The one place a token is checked against an expectation.
    ///
    /// On a match the token is consumed and returned. On a mismatch a
    /// mandatory expectation fails; an optional one returns `Ok(None)` and
    /// leaves the cursor where it was.
    pub(crate) fn expect(&mut self, want: Want, how: Expectation) -> Result<Option<Token>> {
        if want.matches(self.peek_kind()) {
            return Ok(Some(self.advance()));
        }
        match how {
            Expectation::Optional => Ok(None),
            Expectation::Mandatory => Err(self.error_here(want.to_string())),
        }
    }

    pub(crate) fn eat_want(&mut self, want: Want) -> Result<Token> {
        self.expect(want, Expectation::Mandatory)?
            .ok_or_else(|| self.error_here(want.to_string()))
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> Result<Token> {
        self.eat_want(Want::Kind(kind))
    }

    pub(crate) fn accept(&mut self, kind: TokenKind) -> Result<bool> {
        Ok(self.expect(Want::Kind(kind), Expectation::Optional)?.is_some())
    }

    /// Run `f` one nesting level deeper, failing past [`MAX_DEPTH`].
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            let tok = self.peek();
            return Err(Error::new(ErrorKind::TooDeep, tok.line, tok.col));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Consume the first operator from `table` that matches the next token.
    pub(crate) fn accept_op<T: Copy>(&mut self, table: &[(TokenKind, T)]) -> Result<Option<T>> {
        for &(kind, op) in table {
            if self.accept(kind)? {
                return Ok(Some(op));
            }
        }
        Ok(None)
    }

    fn parse_name(&mut self) -> Result<String> {
        Ok(self.eat_want(Want::Name)?.lexeme)
    }

    fn parse_type(&mut self) -> Result<TypeTag> {
        let tok = self.eat_want(Want::Type)?;
        type_tag(tok.kind).ok_or_else(|| Error::expected("type keyword", describe(&tok), tok.line, tok.col))
    }

    /// Parse a whole program: functions until end of input.
    pub fn parse_program(&mut self) -> Result<Program> {
        let mut functions = Vec::new();
        while self.peek_kind() != TokenKind::EndOfInput {
            functions.push(self.parse_function()?);
        }
        Ok(Program { functions })
    }

    fn parse_function(&mut self) -> Result<Function> {
        let return_type = self.parse_type()?;
        let name = self.parse_name()?;
        self.eat(TokenKind::LeftParen)?;
        let mut params = Vec::new();
        if !self.accept(TokenKind::RightParen)? {
            loop {
                let ty = match self.expect(Want::Type, Expectation::Optional)? {
                    Some(tok) => type_tag(tok.kind),
                    None => None,
                };
                let name = self.parse_name()?;
                params.push(Param { name, ty });
                if !self.accept(TokenKind::Comma)? {
                    break;
                }
            }
            self.eat(TokenKind::RightParen)?;
        }
        self.return_type = return_type;
        let body = self.parse_braced_block()?;
        Ok(Function {
            name,
            params,
            return_type,
            body,
        })
    }

    fn parse_braced_block(&mut self) -> Result<Block> {
        self.eat(TokenKind::LeftBrace)?;
        let block = self.parse_statements(&[TokenKind::RightBrace])?;
        self.eat(TokenKind::RightBrace)?;
        Ok(block)
    }

    /// Statements up to (not including) one of `terminators`.
    fn parse_statements(&mut self, terminators: &[TokenKind]) -> Result<Block> {
        let mut block = Vec::new();
        loop {
            let kind = self.peek_kind();
            if terminators.contains(&kind) {
                return Ok(block);
            }
            if kind == TokenKind::EndOfInput {
                let tok = self.peek();
                return Err(Error::new(ErrorKind::UnclosedBlock, tok.line, tok.col));
            }
            block.push(self.parse_stmt()?);
        }
    }

    /// Parse one statement, dispatching on its first token.
    pub fn parse_stmt(&mut self) -> Result<Stmt> {
        self.nested(Self::parse_stmt_inner)
    }

    fn parse_stmt_inner(&mut self) -> Result<Stmt> {
        match self.peek_kind() {
            k if k.is_type() => {
                let decl = self.parse_variable_decl()?;
                self.eat(TokenKind::Semicolon)?;
                Ok(Stmt::VariableDecl(decl))
            }
            TokenKind::Return => self.parse_return(),
            TokenKind::For => self.parse_for(),
            TokenKind::While => self.parse_while(),
            TokenKind::If => self.parse_if(),
            TokenKind::Switch => self.parse_switch(),
            TokenKind::Break => {
                self.advance();
                self.eat(TokenKind::Semicolon)?;
                Ok(Stmt::Break)
            }
            TokenKind::Continue => {
                self.advance();
                self.eat(TokenKind::Semicolon)?;
                Ok(Stmt::Continue)
            }
            TokenKind::Print | TokenKind::Printf => self.parse_print(),
            _ => {
                let expr = self.parse_expr()?;
                self.eat(TokenKind::Semicolon)?;
                Ok(Stmt::Expr(expr))
            }
        }
    }

    /// `type name = expr` without the trailing `;`.
    fn parse_variable_decl(&mut self) -> Result<VariableDecl> {
        let ty = self.parse_type()?;
        let name = self.parse_name()?;
        self.eat(TokenKind::Assignment)?;
        let init = self.parse_expr()?;
        Ok(VariableDecl { ty, name, init })
    }

    fn parse_return(&mut self) -> Result<Stmt> {
        self.eat(TokenKind::Return)?;
        if self.return_type == TypeTag::Void && self.accept(TokenKind::Semicolon)? {
            return Ok(Stmt::Return(None));
        }
        let value = self.parse_expr()?;
        self.eat(TokenKind::Semicolon)?;
        Ok(Stmt::Return(Some(value)))
    }

    fn parse_for(&mut self) -> Result<Stmt> {
        self.eat(TokenKind::For)?;
        self.eat(TokenKind::LeftParen)?;
        let init = if self.accept(TokenKind::Semicolon)? {
            None
        } else {
            let decl = self.parse_variable_decl()?;
            self.eat(TokenKind::Semicolon)?;
            Some(decl)
        };
        let cond = if self.accept(TokenKind::Semicolon)? {
            None
        } else {
            let cond = self.parse_expr()?;
            self.eat(TokenKind::Semicolon)?;
            Some(cond)
        };
        let step = self.parse_expr()?;
        self.eat(TokenKind::RightParen)?;
        let body = self.parse_braced_block()?;
        Ok(Stmt::For {
            init,
            cond,
            step,
            body,
        })
    }

    fn parse_condition(&mut self) -> Result<Expr> {
        self.eat(TokenKind::LeftParen)?;
        let cond = self.parse_expr()?;
        self.eat(TokenKind::RightParen)?;
        Ok(cond)
    }

    fn parse_while(&mut self) -> Result<Stmt> {
        self.eat(TokenKind::While)?;
        let cond = self.parse_condition()?;
        let body = self.parse_braced_block()?;
        Ok(Stmt::While { cond, body })
    }

    fn parse_if(&mut self) -> Result<Stmt> {
        self.eat(TokenKind::If)?;
        let mut branches = Vec::new();
        loop {
            let cond = self.parse_condition()?;
            let body = self.parse_braced_block()?;
            branches.push(IfBranch { cond, body });
            if !self.accept(TokenKind::Elif)? {
                break;
            }
        }
        let else_body = if self.accept(TokenKind::Else)? {
            Some(self.parse_braced_block()?)
        } else {
            None
        };
        Ok(Stmt::If {
            branches,
            else_body,
        })
    }

    fn parse_switch(&mut self) -> Result<Stmt> {
        const LABEL_END: [TokenKind; 3] = [TokenKind::Case, TokenKind::Default, TokenKind::RightBrace];

        self.eat(TokenKind::Switch)?;
        let scrutinee = self.parse_condition()?;
        self.eat(TokenKind::LeftBrace)?;
        let mut cases = Vec::new();
        let mut default = None;
        loop {
            if self.accept(TokenKind::Case)? {
                let value = self.parse_case_value()?;
                self.eat(TokenKind::Colon)?;
                let body = self.parse_statements(&LABEL_END)?;
                cases.push(SwitchCase { value, body });
            } else if default.is_none() && self.accept(TokenKind::Default)? {
                self.eat(TokenKind::Colon)?;
                default = Some(self.parse_statements(&LABEL_END)?);
            } else {
                break;
            }
        }
        if !self.accept(TokenKind::RightBrace)? {
            if let Some(end) = self.expect(Want::Kind(TokenKind::EndOfInput), Expectation::Optional)? {
                return Err(Error::new(ErrorKind::UnclosedBlock, end.line, end.col));
            }
            return Err(self.error_here("'case', 'default' or '}'"));
        }
        Ok(Stmt::Switch {
            scrutinee,
            cases,
            default,
        })
    }

    /// `case` labels take an integer literal with an optional leading `-`.
    fn parse_case_value(&mut self) -> Result<i64> {
        let negative = self.accept(TokenKind::OpSubtract)?;
        let tok = self.eat(TokenKind::Int)?;
        let text = if negative { format!("-{}", tok.lexeme) } else { tok.lexeme.clone() };
        text.parse::<i64>()
            .map_err(|_| Error::new(ErrorKind::InvalidLiteral { lexeme: text.clone() }, tok.line, tok.col))
    }

    fn parse_print(&mut self) -> Result<Stmt> {
        self.advance();
        self.eat(TokenKind::LeftParen)?;
        let format = self.eat(TokenKind::String)?.lexeme;
        let mut args = Vec::new();
        while self.accept(TokenKind::Comma)? {
            args.push(self.parse_expr()?);
        }
        self.eat(TokenKind::RightParen)?;
        self.eat(TokenKind::Semicolon)?;
        Ok(Stmt::Print { format, args })
    }
}

/// Parse a full token list into a [`Program`].
pub fn parse(tokens: Vec<Token>) -> Result<Program> {
    Parser::new(tokens).parse_program()
}
