//! Expression parsing by precedence climbing.
//!
//! Lowest to highest binding: assignment, `||`, `&&`, relational,
//! additive, multiplicative, unary, postfix indexing, primary. Every binary
//! level is a left fold over the next level up.

use slc_syntax::ast::*;
use slc_syntax::error::{Error, ErrorKind, Result};
use slc_syntax::token::{Token, TokenKind};

use crate::parser::{Expectation, Parser, Want};

const REL_OPS: [(TokenKind, RelOp); 6] = [
    (TokenKind::RelOpEqual, RelOp::Eq),
    (TokenKind::RelOpNotEqual, RelOp::Ne),
    (TokenKind::RelOpLessThan, RelOp::Lt),
    (TokenKind::RelOpGreaterThan, RelOp::Gt),
    (TokenKind::RelOpLessOrEqual, RelOp::Le),
    (TokenKind::RelOpGreaterOrEqual, RelOp::Ge),
];

const ADD_OPS: [(TokenKind, ArithOp); 2] = [
    (TokenKind::OpAdd, ArithOp::Add),
    (TokenKind::OpSubtract, ArithOp::Sub),
];

const MUL_OPS: [(TokenKind, ArithOp); 3] = [
    (TokenKind::OpMultiply, ArithOp::Mul),
    (TokenKind::OpDivide, ArithOp::Div),
    (TokenKind::OpModulo, ArithOp::Mod),
];

const UNARY_OPS: [(TokenKind, UnaryOp); 2] = [
    (TokenKind::OpAdd, UnaryOp::Plus),
    (TokenKind::OpSubtract, UnaryOp::Minus),
];

fn invalid_literal(tok: &Token) -> Error {
    Error::new(
        ErrorKind::InvalidLiteral {
            lexeme: tok.lexeme.clone(),
        },
        tok.line,
        tok.col,
    )
}

impl Parser {
    /// Parse one expression, including a trailing assignment.
    ///
    /// `name = value` and `target[index] = value` are right-associative;
    /// any other left-hand side before `=` is rejected.
    pub fn parse_expr(&mut self) -> Result<Expr> {
        self.nested(Self::parse_assignment)
    }

    fn parse_assignment(&mut self) -> Result<Expr> {
        let target = self.parse_or()?;
        let Some(eq) = self.expect(Want::Kind(TokenKind::Assignment), Expectation::Optional)? else {
            return Ok(target);
        };
        let value = Box::new(self.parse_expr()?);
        match target {
            Expr::GetVariable(name) => Ok(Expr::SetVariable { name, value }),
            Expr::GetElement { target, index } => Ok(Expr::SetElement {
                target,
                index,
                value,
            }),
            _ => Err(Error::expected(
                "variable or element before '='",
                "'='",
                eq.line,
                eq.col,
            )),
        }
    }

    fn parse_or(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_and()?;
        while self.accept(TokenKind::LogicOpOr)? {
            let rhs = self.parse_and()?;
            lhs = Expr::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_and(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_relational()?;
        while self.accept(TokenKind::LogicOpAnd)? {
            let rhs = self.parse_relational()?;
            lhs = Expr::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_relational(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_additive()?;
        while let Some(op) = self.accept_op(&REL_OPS)? {
            let rhs = self.parse_additive()?;
            lhs = Expr::Relational {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn parse_additive(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_multiplicative()?;
        while let Some(op) = self.accept_op(&ADD_OPS)? {
            let rhs = self.parse_multiplicative()?;
            lhs = Expr::Arithmetic {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_unary()?;
        while let Some(op) = self.accept_op(&MUL_OPS)? {
            let rhs = self.parse_unary()?;
            lhs = Expr::Arithmetic {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        if let Some(op) = self.accept_op(&UNARY_OPS)? {
            let operand = Box::new(self.nested(Self::parse_unary)?);
            return Ok(Expr::Unary { op, operand });
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<Expr> {
        let mut expr = self.parse_primary()?;
        while self.accept(TokenKind::LeftBracket)? {
            let index = self.parse_expr()?;
            self.eat(TokenKind::RightBracket)?;
            expr = Expr::GetElement {
                target: Box::new(expr),
                index: Box::new(index),
            };
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        match self.peek_kind() {
            TokenKind::Null => {
                self.advance();
                Ok(Expr::Null)
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::Bool(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::Bool(false))
            }
            TokenKind::Int => {
                let tok = self.advance();
                let n = tok.lexeme.parse::<i64>().map_err(|_| invalid_literal(&tok))?;
                Ok(Expr::Int(n))
            }
            TokenKind::Double => {
                let tok = self.advance();
                match tok.lexeme.parse::<f64>() {
                    Ok(d) if d.is_finite() => Ok(Expr::Double(d)),
                    _ => Err(invalid_literal(&tok)),
                }
            }
            TokenKind::String => Ok(Expr::String(self.advance().lexeme)),
            TokenKind::Void => {
                self.advance();
                Ok(Expr::Void)
            }
            TokenKind::LeftBracket => self.parse_array(),
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.eat(TokenKind::RightParen)?;
                Ok(inner)
            }
            k if k.is_name() => self.parse_name_or_call(),
            _ => Err(self.error_here("expression")),
        }
    }

    /// `[n]` with a positive integer size.
    fn parse_array(&mut self) -> Result<Expr> {
        self.eat(TokenKind::LeftBracket)?;
        let tok = self.eat(TokenKind::Int)?;
        let size = tok.lexeme.parse::<usize>().map_err(|_| invalid_literal(&tok))?;
        if size == 0 {
            return Err(Error::expected(
                "positive array size",
                format!("'{}'", tok.lexeme),
                tok.line,
                tok.col,
            ));
        }
        self.eat(TokenKind::RightBracket)?;
        Ok(Expr::Array(size))
    }

    fn parse_name_or_call(&mut self) -> Result<Expr> {
        let name = self.advance().lexeme;
        if !self.accept(TokenKind::LeftParen)? {
            return Ok(Expr::GetVariable(name));
        }
        let mut args = Vec::new();
        if !self.accept(TokenKind::RightParen)? {
            loop {
                args.push(self.parse_expr()?);
                if !self.accept(TokenKind::Comma)? {
                    break;
                }
            }
            self.eat(TokenKind::RightParen)?;
        }
        Ok(Expr::Call {
            callee: Box::new(Expr::GetVariable(name)),
            args,
        })
    }
}
