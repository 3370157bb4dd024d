use super::{Chunk, Heap, Opcode};
use std::convert::TryFrom;
use std::fmt::Write;

/// ## Human readable chunk listings
///
/// ```text
/// == code ==
/// 0000    1 OP_CONSTANT         0 '1'
/// 0002    | OP_NEGATE
/// 0003    | OP_RETURN
/// ```

pub fn disassemble_chunk(chunk: &Chunk, name: &str, heap: &Heap) -> String {
    let mut out = format!("== {} ==\n", name);
    let mut offset = 0;
    while offset < chunk.len() {
        offset = disassemble_instruction(chunk, offset, heap, &mut out);
    }
    out
}

/// Append one instruction to `out` and return the offset of the next.
pub fn disassemble_instruction(chunk: &Chunk, offset: usize, heap: &Heap, out: &mut String) -> usize {
    let _ = write!(out, "{:04} ", offset);
    let line = chunk.line_for_offset(offset);
    if offset > 0 && line.is_some() && line == chunk.line_for_offset(offset - 1) {
        out.push_str("   | ");
    } else {
        match line {
            Some(line) => {
                let _ = write!(out, "{:4} ", line);
            }
            None => out.push_str("   ? "),
        }
    }
    let byte = match chunk.code().get(offset) {
        Some(byte) => *byte,
        None => {
            out.push_str("<end of chunk>\n");
            return offset + 1;
        }
    };
    match Opcode::try_from(byte) {
        Ok(Opcode::Constant) => constant_instruction(Opcode::Constant, chunk, offset, heap, out),
        Ok(op) => {
            let _ = writeln!(out, "{}", op);
            offset + 1
        }
        Err(byte) => {
            let _ = writeln!(out, "Unknown opcode {}", byte);
            offset + 1
        }
    }
}

fn constant_instruction(op: Opcode, chunk: &Chunk, offset: usize, heap: &Heap, out: &mut String) -> usize {
    let index = match chunk.code().get(offset + 1) {
        Some(index) => *index,
        None => {
            let _ = writeln!(out, "{} <missing operand>", op);
            return offset + 1;
        }
    };
    match chunk.constant(index as usize) {
        Some(value) => {
            let _ = writeln!(
                out,
                "{:<16} {:4} '{}'",
                op.to_string(),
                index,
                heap.display(value)
            );
        }
        None => {
            let _ = writeln!(out, "{:<16} {:4} <no constant>", op.to_string(), index);
        }
    }
    offset + 1 + op.operand_len()
}
