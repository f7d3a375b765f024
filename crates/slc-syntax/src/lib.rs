pub mod ast;
pub mod error;
pub mod pretty;
pub mod token;

pub use ast::*;
pub use error::*;
pub use pretty::dump_program;
pub use token::*;
