//! Machine limits.
//!
//! Configuration specifies constraints only; the compiler and the VM
//! enforce them.

/// Largest number of constants a one-byte operand can address.
pub const MAX_CONSTANTS: usize = u8::MAX as usize + 1;

/// Default limit on nested prefix operators and parentheses.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum operand stack depth.
    pub max_stack: usize,

    /// Maximum constants per chunk. Clamped to [`MAX_CONSTANTS`].
    pub max_constants: usize,

    /// Maximum expression nesting the compiler accepts.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_stack: 256,
            max_constants: MAX_CONSTANTS,
            max_depth: MAX_DEPTH,
        }
    }
}

impl Config {
    pub fn constant_limit(&self) -> usize {
        self.max_constants.min(MAX_CONSTANTS)
    }
}
