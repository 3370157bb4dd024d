extern crate ansi_term;
extern crate linefeed;
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use log::LevelFilter;
use lox::lang::Error;
use lox::mach::{disassemble_chunk, InterpretResult, Vm};
use std::io::Write;
use std::process;

mod logger;

const EX_USAGE: i32 = 64;
const EX_DATAERR: i32 = 65;
const EX_SOFTWARE: i32 = 70;
const EX_IOERR: i32 = 74;

#[derive(Debug, Default)]
struct Options {
    log_level: Option<LevelFilter>,
    disassemble: bool,
    help: bool,
    path: Option<String>,
}

impl Options {
    fn parse<I: Iterator<Item = String>>(args: I) -> Result<Options, String> {
        let mut options = Options::default();
        for arg in args {
            match arg.as_str() {
                "--trace" => options.log_level = Some(LevelFilter::Trace),
                "--debug" => options.log_level = Some(LevelFilter::Debug),
                "--disassemble" => options.disassemble = true,
                "--help" | "-h" => options.help = true,
                s if s.starts_with('-') => return Err(format!("unknown option: {}", s)),
                s => {
                    if options.path.is_some() {
                        return Err("too many arguments".to_string());
                    }
                    options.path = Some(s.to_string());
                }
            }
        }
        Ok(options)
    }
}

pub fn main() {
    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            print_usage();
            process::exit(EX_USAGE);
        }
    };
    if options.help {
        print_usage();
        return;
    }
    logger::init(logger::level(options.log_level));
    let mut vm = Vm::new();
    let code = match &options.path {
        Some(path) => run_file(&mut vm, path, options.disassemble),
        None => match repl(&mut vm, options.disassemble) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("{}", error);
                EX_IOERR
            }
        },
    };
    if code != 0 {
        process::exit(code);
    }
}

fn print_usage() {
    println!("Usage:");
    println!("  lox                  Start the interactive prompt");
    println!("  lox <file>           Evaluate the expression in a file");
    println!();
    println!("Options:");
    println!("  --disassemble        Print bytecode before running");
    println!("  --debug              Log compiler output (or set LOX_LOG=debug)");
    println!("  --trace              Log every executed instruction");
    println!("  --help, -h           Show this help");
}

fn repl(vm: &mut Vm, disassemble: bool) -> std::io::Result<()> {
    let interface = Interface::new("lox")?;
    interface.set_prompt("> ")?;
    loop {
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if line.trim().is_empty() {
            continue;
        }
        match evaluate(vm, &line, disassemble) {
            Ok(s) => {
                interface.write_fmt(format_args!("{}\n", s))?;
                interface.add_history_unique(line);
            }
            Err(errors) => {
                for error in errors.iter() {
                    interface.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?;
                }
            }
        }
    }
    Ok(())
}

fn run_file(vm: &mut Vm, path: &str, disassemble: bool) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Could not read file \"{}\": {}", path, error);
            return EX_IOERR;
        }
    };
    match evaluate(vm, &source, disassemble) {
        Ok(s) => {
            let stdout = std::io::stdout();
            let _ = writeln!(stdout.lock(), "{}", s);
            0
        }
        Err(errors) => {
            for error in errors.iter() {
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
            }
            if errors.iter().any(Error::is_runtime) {
                EX_SOFTWARE
            } else {
                EX_DATAERR
            }
        }
    }
}

fn evaluate(vm: &mut Vm, source: &str, disassemble: bool) -> Result<String, Vec<Error>> {
    let result = if disassemble {
        let chunk = vm.compile(source)?;
        println!("{}", disassemble_chunk(&chunk, "code", vm.heap()));
        vm.run(chunk)
    } else {
        vm.interpret(source)
    };
    match result {
        InterpretResult::Ok(value) => Ok(vm.heap().display(value).to_string()),
        InterpretResult::CompileError(errors) => Err(errors),
        InterpretResult::RuntimeError(error) => Err(vec![error]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &[&str]) -> impl Iterator<Item = String> {
        s.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_options() {
        let o = Options::parse(args(&["--trace", "a.lox"])).unwrap();
        assert_eq!(o.log_level, Some(LevelFilter::Trace));
        assert_eq!(o.path.as_deref(), Some("a.lox"));
        assert!(Options::parse(args(&["a", "b"])).is_err());
        assert!(Options::parse(args(&["--nope"])).is_err());
    }

    #[test]
    fn test_evaluate() {
        let mut vm = Vm::new();
        assert_eq!(evaluate(&mut vm, "1 + 2", false), Ok("3".to_string()));
        let errors = evaluate(&mut vm, "-nil", false).unwrap_err();
        assert!(errors[0].is_runtime());
    }
}
