//! # Lox
//!
//! Command line front end: an interactive prompt or a script runner.
//!

mod term;

fn main() {
    term::main()
}
