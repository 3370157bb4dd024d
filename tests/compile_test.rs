mod common;
use common::*;
use lox::lang::{ErrorCode, Location};
use lox::mach::{compile, compile_with_config, Config, Heap, Opcode, Value, Vm};

#[test]
fn test_syntax_errors() {
    assert_eq!(eval("(1+2"), "[line 1] Error at end: Expect ')' after expression.\n");
    assert_eq!(eval(""), "[line 1] Error at end: Expect expression.\n");
    assert_eq!(eval("1 2"), "[line 1] Error at '2': Expect end of expression.\n");
    assert_eq!(eval("1 +\n)"), "[line 2] Error at ')': Expect expression.\n");
    assert_eq!(eval("foo"), "[line 1] Error at 'foo': Expect expression.\n");
}

#[test]
fn test_scanner_errors() {
    assert_eq!(eval("\n\"abc"), "[line 2] Error: Unterminated string.\n");
    assert_eq!(eval("1 + @"), "[line 1] Error: Unexpected character.\n");
}

#[test]
fn test_one_error_per_compile() {
    let mut heap = Heap::new();
    let errors = compile(")(*", &mut heap).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].location(), &Location::Lexeme(")".to_string()));
    assert_eq!(errors[0].line_number(), Some(1));
}

#[test]
fn test_too_many_constants() {
    let source = vec!["1"; 257].join("+");
    let mut heap = Heap::new();
    let errors = compile(&source, &mut heap).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), ErrorCode::TooManyConstants);
    assert_eq!(
        errors[0].to_string(),
        "[line 1] Error at '1': Too many constants in one chunk."
    );
    let source = vec!["1"; 256].join("+");
    assert!(compile(&source, &mut heap).is_ok());
    assert_eq!(eval(&source), "256");
}

#[test]
fn test_configured_constant_limit() {
    let config = Config {
        max_constants: 2,
        ..Config::default()
    };
    let mut heap = Heap::new();
    assert!(compile_with_config("1 + 2", &mut heap, &config).is_ok());
    let errors = compile_with_config("1 + 2 + 3", &mut heap, &config).unwrap_err();
    assert_eq!(errors[0].code(), ErrorCode::TooManyConstants);
}

#[test]
fn test_emitted_bytecode() {
    use Opcode::*;
    let mut heap = Heap::new();
    let chunk = compile("1 + 2 * 3", &mut heap).unwrap();
    let expect: Vec<u8> = vec![
        Constant.into(),
        0,
        Constant.into(),
        1,
        Constant.into(),
        2,
        Multiply.into(),
        Add.into(),
        Return.into(),
    ];
    assert_eq!(chunk.code(), &expect[..]);
    assert_eq!(
        chunk.constants(),
        &[Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)][..]
    );
}

#[test]
fn test_fused_comparisons() {
    use Opcode::*;
    let mut heap = Heap::new();
    let code = |heap: &mut Heap, s: &str| compile(s, heap).unwrap().code().to_vec();
    let ge: Vec<u8> = vec![Constant.into(), 0, Constant.into(), 1, Less.into(), Not.into(), Return.into()];
    let le: Vec<u8> = vec![Constant.into(), 0, Constant.into(), 1, Greater.into(), Not.into(), Return.into()];
    let ne: Vec<u8> = vec![Constant.into(), 0, Constant.into(), 1, Equal.into(), Not.into(), Return.into()];
    assert_eq!(code(&mut heap, "1 >= 2"), ge);
    assert_eq!(code(&mut heap, "1 <= 2"), le);
    assert_eq!(code(&mut heap, "1 != 2"), ne);
}

#[test]
fn test_string_constants_are_interned() {
    let mut heap = Heap::new();
    let chunk = compile("\"a\" == \"a\"", &mut heap).unwrap();
    assert_eq!(heap.object_count(), 1);
    assert_eq!(chunk.constants()[0], chunk.constants()[1]);
    let obj = chunk.constants()[0].as_obj().unwrap();
    assert_eq!(heap.as_str(obj), Some("a"));
}

#[test]
fn test_lines_follow_tokens() {
    let mut heap = Heap::new();
    let chunk = compile("1\n+\n2", &mut heap).unwrap();
    assert_eq!(chunk.line_for_offset(0), Some(1));
    assert_eq!(chunk.line_for_offset(2), Some(3));
    assert_eq!(chunk.line_for_offset(4), Some(3));
    assert_eq!(chunk.line_for_offset(5), Some(3));
    assert_eq!(chunk.line_for_offset(6), None);
}

#[test]
fn test_deep_nesting_is_a_compile_error() {
    let mut vm = Vm::new();
    let negated = format!("{}1", "-".repeat(100_000));
    assert_eq!(
        eval_in(&mut vm, &negated),
        "[line 1] Error at '-': Expression nested too deeply.\n"
    );
    let grouped = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_eq!(
        eval_in(&mut vm, &grouped),
        "[line 1] Error at '(': Expression nested too deeply.\n"
    );
    assert_eq!(eval_in(&mut vm, "-(-(1))"), "1");
}

#[test]
fn test_configured_depth_limit() {
    let config = Config {
        max_depth: 3,
        ..Config::default()
    };
    let mut heap = Heap::new();
    assert!(compile_with_config("((1))", &mut heap, &config).is_ok());
    assert!(compile_with_config("!!1 + -2", &mut heap, &config).is_ok());
    let errors = compile_with_config("(((1)))", &mut heap, &config).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].text(), "Expression nested too deeply.");
    assert_eq!(errors[0].code(), ErrorCode::SyntaxError);
}
