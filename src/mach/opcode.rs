use std::convert::TryFrom;

/// ## Virtual machine instruction set
///
/// The Lox virtual machine has no registers.
/// Every operation is performed on the stack, whose depth is fixed by
/// [`Config::max_stack`](super::Config). Pushing past it stops the run
/// with a `StackOverflow` runtime error.
///
/// For example: `-(1 + 2) * 3` compiles to
/// `[Constant(0), Constant(1), Add, Negate, Constant(2), Multiply, Return]`
///
/// Each instruction is a single byte. `Constant` is followed by a
/// one-byte index into the chunk's constant pool.

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** Stack manipulation
    /// Push the constant named by the operand byte.
    Constant,
    Nil,
    True,
    False,

    // *** Comparison
    /// Structural equality. Values of different kinds are never equal.
    Equal,
    Greater,
    Less,

    // *** Arithmetic
    /// Numbers add, strings concatenate.
    Add,
    Subtract,
    Multiply,
    Divide,
    Not,
    Negate,

    // *** Control
    /// Pop the result and halt.
    Return,
}

impl Opcode {
    /// Number of operand bytes following the opcode.
    pub fn operand_len(self) -> usize {
        match self {
            Opcode::Constant => 1,
            _ => 0,
        }
    }
}

impl From<Opcode> for u8 {
    fn from(op: Opcode) -> u8 {
        op as u8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        use Opcode::*;
        Ok(match byte {
            0 => Constant,
            1 => Nil,
            2 => True,
            3 => False,
            4 => Equal,
            5 => Greater,
            6 => Less,
            7 => Add,
            8 => Subtract,
            9 => Multiply,
            10 => Divide,
            11 => Not,
            12 => Negate,
            13 => Return,
            _ => return Err(byte),
        })
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Constant => write!(f, "OP_CONSTANT"),
            Nil => write!(f, "OP_NIL"),
            True => write!(f, "OP_TRUE"),
            False => write!(f, "OP_FALSE"),
            Equal => write!(f, "OP_EQUAL"),
            Greater => write!(f, "OP_GREATER"),
            Less => write!(f, "OP_LESS"),
            Add => write!(f, "OP_ADD"),
            Subtract => write!(f, "OP_SUBTRACT"),
            Multiply => write!(f, "OP_MULTIPLY"),
            Divide => write!(f, "OP_DIVIDE"),
            Not => write!(f, "OP_NOT"),
            Negate => write!(f, "OP_NEGATE"),
            Return => write!(f, "OP_RETURN"),
        }
    }
}
