/*!
# Rust Language Module

This Rust module provides lexical analysis of Lox source text and the
error type shared by every stage of the pipeline.

*/

pub type LineNumber = usize;

#[macro_use]
mod error;
mod scan;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::Location;
pub use scan::lex;
pub use scan::Scanner;
pub use token::{Token, TokenKind};
