/*!
# Rust Language Module

This Rust module provides lexical analysis of Grin source lines and builds
the statement sequence the machine executes.

*/

pub type LineNumber = Option<usize>;

#[macro_use]
mod error;
mod ident;
mod lex;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::is_identifier;
pub use lex::lex;
pub use parse::{parse, parse_program};

pub mod ast;
pub mod token;
