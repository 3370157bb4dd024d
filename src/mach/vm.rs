use super::compile::compile_with_config;
use super::disassemble::disassemble_instruction;
use super::{Chunk, Config, Heap, Opcode, Operation, Stack, Value};
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum InterpretResult {
    Ok(Value),
    CompileError(Vec<Error>),
    RuntimeError(Error),
}

impl InterpretResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, InterpretResult::Ok(_))
    }
}

/// ## Stack virtual machine
///
/// Runs one chunk at a time to its `Return`. The heap outlives each
/// run so that strings interned by the compiler stay valid; every
/// object is freed when the machine is dropped.

pub struct Vm {
    config: Config,
    stack: Stack<Value>,
    heap: Heap,
    chunk: Chunk,
    ip: usize,
}

impl Default for Vm {
    fn default() -> Self {
        Vm::with_config(Config::default())
    }
}

impl Vm {
    pub fn new() -> Vm {
        Vm::default()
    }

    pub fn with_config(config: Config) -> Vm {
        Vm {
            stack: Stack::new(config.max_stack, "Stack overflow."),
            heap: Heap::new(),
            chunk: Chunk::new(),
            ip: 0,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    pub fn heap_mut(&mut self) -> &mut Heap {
        &mut self.heap
    }

    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    /// Compile `source` against this machine's heap.
    pub fn compile(&mut self, source: &str) -> std::result::Result<Chunk, Vec<Error>> {
        compile_with_config(source, &mut self.heap, &self.config)
    }

    pub fn interpret(&mut self, source: &str) -> InterpretResult {
        match self.compile(source) {
            Ok(chunk) => self.run(chunk),
            Err(errors) => InterpretResult::CompileError(errors),
        }
    }

    /// Execute a finished chunk. Constants in it must refer to this
    /// machine's heap.
    pub fn run(&mut self, chunk: Chunk) -> InterpretResult {
        self.chunk = chunk;
        self.ip = 0;
        self.stack.clear();
        match self.execute() {
            Ok(value) => InterpretResult::Ok(value),
            Err(error) => {
                let error = match self.chunk.line_for_offset(self.ip.saturating_sub(1)) {
                    Some(line) if error.line_number().is_none() => error.in_line_number(line),
                    _ => error,
                };
                log::debug!("runtime error at ip {}: {}", self.ip, error.text());
                self.reset();
                InterpretResult::RuntimeError(error)
            }
        }
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        self.ip = 0;
    }

    fn read_byte(&mut self) -> Result<u8> {
        match self.chunk.code().get(self.ip) {
            Some(byte) => {
                self.ip += 1;
                Ok(*byte)
            }
            None => Err(error!(InternalError; "Instruction pointer out of range.")),
        }
    }

    fn read_constant(&mut self) -> Result<Value> {
        let index = self.read_byte()?;
        match self.chunk.constant(index as usize) {
            Some(value) => Ok(value),
            None => Err(error!(InternalError; "Constant index out of range.")),
        }
    }

    fn binary(&mut self, op: fn(Value, Value) -> Result<Value>) -> Result<()> {
        let (lhs, rhs) = self.stack.pop_2()?;
        self.stack.push(op(lhs, rhs)?)
    }

    fn trace(&self) {
        let mut line = String::from("          ");
        for value in self.stack.iter() {
            line.push_str(&format!("[ {} ]", self.heap.display(*value)));
        }
        line.push('\n');
        disassemble_instruction(&self.chunk, self.ip, &self.heap, &mut line);
        log::trace!("{}", line.trim_end());
    }

    fn execute(&mut self) -> Result<Value> {
        loop {
            if log::log_enabled!(log::Level::Trace) && self.ip < self.chunk.len() {
                self.trace();
            }
            let byte = self.read_byte()?;
            let op = match Opcode::try_from(byte) {
                Ok(op) => op,
                Err(_) => return Err(error!(InternalError; "Unknown opcode.")),
            };
            match op {
                Opcode::Constant => {
                    let constant = self.read_constant()?;
                    self.stack.push(constant)?;
                }
                Opcode::Nil => self.stack.push(Value::Nil)?,
                Opcode::True => self.stack.push(Value::Bool(true))?,
                Opcode::False => self.stack.push(Value::Bool(false))?,
                Opcode::Equal => {
                    let (lhs, rhs) = self.stack.pop_2()?;
                    self.stack.push(Operation::equal(lhs, rhs))?;
                }
                Opcode::Greater => self.binary(Operation::greater)?,
                Opcode::Less => self.binary(Operation::less)?,
                Opcode::Add => {
                    let (lhs, rhs) = self.stack.pop_2()?;
                    let sum = Operation::sum(lhs, rhs, &mut self.heap)?;
                    self.stack.push(sum)?;
                }
                Opcode::Subtract => self.binary(Operation::subtract)?,
                Opcode::Multiply => self.binary(Operation::multiply)?,
                Opcode::Divide => self.binary(Operation::divide)?,
                Opcode::Not => {
                    let val = self.stack.pop()?;
                    self.stack.push(Operation::not(val))?;
                }
                Opcode::Negate => {
                    let val = self.stack.pop()?;
                    self.stack.push(Operation::negate(val)?)?;
                }
                Opcode::Return => return self.stack.pop(),
            }
        }
    }
}
