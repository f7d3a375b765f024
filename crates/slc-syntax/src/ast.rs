//! AST (abstract syntax tree) types for SLC programs.
//!
//! The tree is built once by the parser and never mutated afterwards. Every
//! node owns its children through `Box` or `Vec`, so dropping a [`Program`]
//! releases the whole tree.

use serde::Serialize;

/// Declared type of a variable, parameter or function result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeTag {
    Bool,
    Int,
    Double,
    String,
    Void,
}

impl TypeTag {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::Double => "double",
            TypeTag::String => "string",
            TypeTag::Void => "void",
        }
    }
}

/// `==`, `!=`, `<`, `>`, `<=`, `>=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl RelOp {
    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Eq => "==",
            RelOp::Ne => "!=",
            RelOp::Lt => "<",
            RelOp::Gt => ">",
            RelOp::Le => "<=",
            RelOp::Ge => ">=",
        }
    }
}

/// `+`, `-`, `*`, `/`, `%`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl ArithOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Mod => "%",
        }
    }
}

/// Prefix `+` and `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Plus,
    Minus,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
        }
    }
}

/// Expressions (literals, variable access, calls, operators).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Void,
    /// `[n]`: an array with `n` unpopulated slots.
    Array(usize),
    GetVariable(String),
    SetVariable {
        name: String,
        value: Box<Expr>,
    },
    GetElement {
        target: Box<Expr>,
        index: Box<Expr>,
    },
    SetElement {
        target: Box<Expr>,
        index: Box<Expr>,
        value: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Or(Box<Expr>, Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Relational {
        op: RelOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Arithmetic {
        op: ArithOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
}

/// An ordered list of statements between braces.
pub type Block = Vec<Stmt>;

/// `int x = expr`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDecl {
    pub ty: TypeTag,
    pub name: String,
    pub init: Expr,
}

/// One `if`/`elif` arm. Keeping the condition next to its block means the
/// two can never disagree in count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfBranch {
    pub cond: Expr,
    pub body: Block,
}

/// `case <int>:` and the statements up to the next label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchCase {
    pub value: i64,
    pub body: Block,
}

/// Statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    Expr(Expr),
    VariableDecl(VariableDecl),
    Return(Option<Expr>),
    For {
        init: Option<VariableDecl>,
        cond: Option<Expr>,
        step: Expr,
        body: Block,
    },
    While {
        cond: Expr,
        body: Block,
    },
    /// The first branch is the `if`, the rest are `elif`s in source order.
    If {
        branches: Vec<IfBranch>,
        else_body: Option<Block>,
    },
    Switch {
        scrutinee: Expr,
        cases: Vec<SwitchCase>,
        default: Option<Block>,
    },
    Break,
    Continue,
    Print {
        format: String,
        args: Vec<Expr>,
    },
}

/// Function parameter with optional type annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    pub name: String,
    pub ty: Option<TypeTag>,
}

/// Function definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: TypeTag,
    pub body: Block,
}

/// Entire program: functions in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Program {
    pub functions: Vec<Function>,
}
