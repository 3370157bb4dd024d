use super::disassemble::disassemble_chunk;
use super::{Chunk, Config, Heap, Opcode, Value};
use crate::error;
use crate::lang::{Error, Location, Scanner, Token, TokenKind};

/// Compile one expression into a chunk ending in `Return`.
///
/// On failure every diagnostic reported before panic mode set in is
/// returned and no chunk is produced.
pub fn compile(source: &str, heap: &mut Heap) -> Result<Chunk, Vec<Error>> {
    compile_with_config(source, heap, &Config::default())
}

pub fn compile_with_config(
    source: &str,
    heap: &mut Heap,
    config: &Config,
) -> Result<Chunk, Vec<Error>> {
    let mut parser = Parser::new(source, heap, config);
    parser.advance();
    parser.expression();
    parser.consume(TokenKind::Eof, "Expect end of expression.");
    parser.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    None,
    Assignment,
    Or,
    And,
    Equality,
    Comparison,
    Term,
    Factor,
    Unary,
    Call,
    Primary,
}

impl Precedence {
    fn next(self) -> Precedence {
        use Precedence::*;
        match self {
            None => Assignment,
            Assignment => Or,
            Or => And,
            And => Equality,
            Equality => Comparison,
            Comparison => Term,
            Term => Factor,
            Factor => Unary,
            Unary => Call,
            Call | Primary => Primary,
        }
    }
}

type ParseFn<'a, 'h> = fn(&mut Parser<'a, 'h>);

struct ParseRule<'a, 'h> {
    prefix: Option<ParseFn<'a, 'h>>,
    infix: Option<ParseFn<'a, 'h>>,
    precedence: Precedence,
}

struct Parser<'a, 'h> {
    scanner: Scanner<'a>,
    current: Token<'a>,
    previous: Token<'a>,
    had_error: bool,
    panic_mode: bool,
    errors: Vec<Error>,
    chunk: Chunk,
    heap: &'h mut Heap,
    constant_limit: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a, 'h> Parser<'a, 'h> {
    fn new(source: &'a str, heap: &'h mut Heap, config: &Config) -> Parser<'a, 'h> {
        let start = Token::new(TokenKind::Eof, "", 1);
        Parser {
            scanner: Scanner::new(source),
            current: start,
            previous: start,
            had_error: false,
            panic_mode: false,
            errors: vec![],
            chunk: Chunk::new(),
            heap,
            constant_limit: config.constant_limit(),
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    fn finish(mut self) -> Result<Chunk, Vec<Error>> {
        self.emit_op(Opcode::Return);
        if self.had_error {
            return Err(self.errors);
        }
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("\n{}", disassemble_chunk(&self.chunk, "code", self.heap));
        }
        Ok(self.chunk)
    }

    fn rule(kind: TokenKind) -> ParseRule<'a, 'h> {
        use TokenKind::*;
        let (prefix, infix, precedence): (Option<ParseFn>, Option<ParseFn>, _) = match kind {
            LeftParen => (Some(Parser::grouping), None, Precedence::None),
            Minus => (Some(Parser::unary), Some(Parser::binary), Precedence::Term),
            Plus => (None, Some(Parser::binary), Precedence::Term),
            Slash | Star => (None, Some(Parser::binary), Precedence::Factor),
            Bang => (Some(Parser::unary), None, Precedence::None),
            BangEqual | EqualEqual => (None, Some(Parser::binary), Precedence::Equality),
            Greater | GreaterEqual | Less | LessEqual => {
                (None, Some(Parser::binary), Precedence::Comparison)
            }
            String => (Some(Parser::string), None, Precedence::None),
            Number => (Some(Parser::number), None, Precedence::None),
            False | True | Nil => (Some(Parser::literal), None, Precedence::None),
            _ => (None, None, Precedence::None),
        };
        ParseRule {
            prefix,
            infix,
            precedence,
        }
    }

    fn advance(&mut self) {
        self.previous = self.current;
        loop {
            self.current = self.scanner.scan_token();
            if self.current.kind != TokenKind::Error {
                break;
            }
            let message = self.current.lexeme.to_string();
            self.error_at_current(message);
        }
    }

    fn consume(&mut self, kind: TokenKind, message: &'static str) {
        if self.current.kind == kind {
            self.advance();
            return;
        }
        self.error_at_current(message);
    }

    fn expression(&mut self) {
        self.parse_precedence(Precedence::Assignment);
    }

    fn parse_precedence(&mut self, precedence: Precedence) {
        if self.depth >= self.max_depth {
            self.error_at_current("Expression nested too deeply.");
            return;
        }
        self.depth += 1;
        self.parse_operand(precedence);
        self.depth -= 1;
    }

    fn parse_operand(&mut self, precedence: Precedence) {
        self.advance();
        match Parser::rule(self.previous.kind).prefix {
            Some(prefix) => prefix(self),
            None => {
                self.error("Expect expression.");
                return;
            }
        }
        while precedence <= Parser::rule(self.current.kind).precedence {
            self.advance();
            if let Some(infix) = Parser::rule(self.previous.kind).infix {
                infix(self);
            }
        }
    }

    fn grouping(&mut self) {
        self.expression();
        self.consume(TokenKind::RightParen, "Expect ')' after expression.");
    }

    fn number(&mut self) {
        match self.previous.lexeme.parse::<f64>() {
            Ok(n) => self.emit_constant(Value::Number(n)),
            Err(_) => self.error("Invalid number literal."),
        }
    }

    fn string(&mut self) {
        let lexeme = self.previous.lexeme;
        let chars = &lexeme[1..lexeme.len() - 1];
        let obj = self.heap.intern(chars);
        self.emit_constant(Value::Obj(obj));
    }

    fn literal(&mut self) {
        match self.previous.kind {
            TokenKind::False => self.emit_op(Opcode::False),
            TokenKind::True => self.emit_op(Opcode::True),
            TokenKind::Nil => self.emit_op(Opcode::Nil),
            _ => {}
        }
    }

    fn unary(&mut self) {
        let operator = self.previous.kind;
        self.parse_precedence(Precedence::Unary);
        match operator {
            TokenKind::Bang => self.emit_op(Opcode::Not),
            TokenKind::Minus => self.emit_op(Opcode::Negate),
            _ => {}
        }
    }

    fn binary(&mut self) {
        let operator = self.previous.kind;
        let rule = Parser::rule(operator);
        self.parse_precedence(rule.precedence.next());
        use Opcode::*;
        match operator {
            TokenKind::BangEqual => self.emit_ops(&[Equal, Not]),
            TokenKind::EqualEqual => self.emit_op(Equal),
            TokenKind::Greater => self.emit_op(Greater),
            // a >= b is !(a < b)
            TokenKind::GreaterEqual => self.emit_ops(&[Less, Not]),
            TokenKind::Less => self.emit_op(Less),
            // a <= b is !(a > b)
            TokenKind::LessEqual => self.emit_ops(&[Greater, Not]),
            TokenKind::Plus => self.emit_op(Add),
            TokenKind::Minus => self.emit_op(Subtract),
            TokenKind::Star => self.emit_op(Multiply),
            TokenKind::Slash => self.emit_op(Divide),
            _ => {}
        }
    }

    fn emit_byte(&mut self, byte: u8) {
        self.chunk.write(byte, self.previous.line);
    }

    fn emit_op(&mut self, op: Opcode) {
        self.emit_byte(op.into());
    }

    fn emit_ops(&mut self, ops: &[Opcode]) {
        for op in ops {
            self.emit_op(*op);
        }
    }

    fn emit_constant(&mut self, value: Value) {
        let constant = self.make_constant(value);
        self.emit_op(Opcode::Constant);
        self.emit_byte(constant);
    }

    fn make_constant(&mut self, value: Value) -> u8 {
        let index = self.chunk.add_constant(value);
        if index >= self.constant_limit {
            self.report(
                self.previous,
                error!(TooManyConstants; "Too many constants in one chunk."),
            );
            return 0;
        }
        index as u8
    }

    fn error(&mut self, message: &'static str) {
        self.report(self.previous, error!(SyntaxError; message));
    }

    fn error_at_current<S: Into<std::borrow::Cow<'static, str>>>(&mut self, message: S) {
        self.report(self.current, error!(SyntaxError; message));
    }

    fn report(&mut self, token: Token<'a>, error: Error) {
        if self.panic_mode {
            return;
        }
        self.panic_mode = true;
        self.had_error = true;
        let location = match token.kind {
            TokenKind::Eof => Location::End,
            TokenKind::Error => Location::Nowhere,
            _ => Location::Lexeme(token.lexeme.to_string()),
        };
        let error = error.in_line_number(token.line).at(location);
        log::debug!("{}", error);
        self.errors.push(error);
    }
}
