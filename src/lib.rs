//! # Lox Expressions
//!
//! A single-pass bytecode compiler and stack virtual machine for the
//! expression core of the Lox language.
//!
//! Install with `cargo install lox-lang`, then start the interactive
//! prompt by running `lox` with no arguments, or evaluate a file with
//! `lox script.lox`.
//! ```text
//! > (1 + 2) * -3
//! -9
//! > "foo" + "bar" == "foobar"
//! true
//! ```
//!
//! Embedding takes a [`mach::Vm`] and a source string:
//! ```
//! use lox::mach::{InterpretResult, Value, Vm};
//!
//! let mut vm = Vm::new();
//! match vm.interpret("2 + 3 * 4") {
//!     InterpretResult::Ok(value) => assert_eq!(value, Value::Number(14.0)),
//!     _ => unreachable!(),
//! }
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;
