use super::memory::reserve_one;
use super::{Opcode, Value};
use crate::lang::LineNumber;

/// Consecutive instruction bytes compiled from one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRun {
    pub line: LineNumber,
    pub count: usize,
}

/// ## Compiled bytecode
///
/// Instruction bytes, the constant pool they index, and a run-length
/// encoded line table with one line per instruction byte.

#[derive(Debug, Default, Clone)]
pub struct Chunk {
    code: Vec<u8>,
    constants: Vec<Value>,
    lines: Vec<LineRun>,
}

impl Chunk {
    pub fn new() -> Chunk {
        Chunk::default()
    }

    pub fn write(&mut self, byte: u8, line: LineNumber) {
        reserve_one(&mut self.code);
        self.code.push(byte);
        match self.lines.last_mut() {
            Some(run) if run.line == line => run.count += 1,
            _ => {
                reserve_one(&mut self.lines);
                self.lines.push(LineRun { line, count: 1 });
            }
        }
    }

    pub fn write_op(&mut self, op: Opcode, line: LineNumber) {
        self.write(op.into(), line)
    }

    /// Index of the new constant. The caller checks it fits an operand.
    pub fn add_constant(&mut self, value: Value) -> usize {
        reserve_one(&mut self.constants);
        self.constants.push(value);
        self.constants.len() - 1
    }

    pub fn line_for_offset(&self, offset: usize) -> Option<LineNumber> {
        let mut end = 0;
        for run in &self.lines {
            end += run.count;
            if offset < end {
                return Some(run.line);
            }
        }
        None
    }

    pub fn code(&self) -> &[u8] {
        &self.code
    }

    pub fn constants(&self) -> &[Value] {
        &self.constants
    }

    pub fn constant(&self, index: usize) -> Option<Value> {
        self.constants.get(index).copied()
    }

    pub fn lines(&self) -> &[LineRun] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_runs() {
        let mut chunk = Chunk::new();
        chunk.write_op(Opcode::Constant, 123);
        chunk.write(0, 123);
        chunk.write_op(Opcode::Negate, 124);
        chunk.write_op(Opcode::Return, 123);
        assert_eq!(
            chunk.lines(),
            &[
                LineRun { line: 123, count: 2 },
                LineRun { line: 124, count: 1 },
                LineRun { line: 123, count: 1 },
            ]
        );
        assert_eq!(chunk.line_for_offset(0), Some(123));
        assert_eq!(chunk.line_for_offset(1), Some(123));
        assert_eq!(chunk.line_for_offset(2), Some(124));
        assert_eq!(chunk.line_for_offset(3), Some(123));
        assert_eq!(chunk.line_for_offset(4), None);
    }

    #[test]
    fn test_add_constant() {
        let mut chunk = Chunk::new();
        assert_eq!(chunk.add_constant(Value::Number(1.2)), 0);
        assert_eq!(chunk.add_constant(Value::Number(1.2)), 1);
        assert_eq!(chunk.constant(1), Some(Value::Number(1.2)));
        assert_eq!(chunk.constant(2), None);
    }
}
