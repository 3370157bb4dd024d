#![allow(dead_code)]
use lox::mach::{Config, InterpretResult, Vm};

pub fn eval(source: &str) -> String {
    eval_in(&mut Vm::new(), source)
}

pub fn eval_with(config: Config, source: &str) -> String {
    eval_in(&mut Vm::with_config(config), source)
}

/// Render whatever the machine produced the way the prompt shows it.
pub fn eval_in(vm: &mut Vm, source: &str) -> String {
    match vm.interpret(source) {
        InterpretResult::Ok(value) => vm.heap().display(value).to_string(),
        InterpretResult::CompileError(errors) => {
            let mut s = String::new();
            for error in errors.iter() {
                s.push_str(&format!("{}\n", error));
            }
            s
        }
        InterpretResult::RuntimeError(error) => format!("{}\n", error),
    }
}
