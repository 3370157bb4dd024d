/*!
## Rust Machine Module

This Rust module is a single-pass compiler and virtual machine for Lox
expressions. Source text goes straight to bytecode; there is no syntax
tree in between.

*/

mod chunk;
mod compile;
mod config;
mod disassemble;
pub mod memory;
mod object;
mod opcode;
mod operation;
mod stack;
mod table;
mod value;
mod vm;

pub use chunk::{Chunk, LineRun};
pub use compile::{compile, compile_with_config};
pub use config::{Config, MAX_CONSTANTS, MAX_DEPTH};
pub use disassemble::{disassemble_chunk, disassemble_instruction};
pub use object::{hash_string, Heap, ObjString, Object, ValueDisplay};
pub use opcode::Opcode;
pub use operation::Operation;
pub use stack::Stack;
pub use table::Table;
pub use value::{ObjRef, Value};
pub use vm::{InterpretResult, Vm};
