use lox::lang::{lex, Token, TokenKind};

fn kinds(s: &str) -> Vec<TokenKind> {
    lex(s).iter().map(|t| t.kind).collect()
}

#[test]
fn test_operators() {
    use TokenKind::*;
    assert_eq!(
        kinds("! != = == < <= > >= ( ) + - * /"),
        vec![
            Bang, BangEqual, Equal, EqualEqual, Less, LessEqual, Greater, GreaterEqual,
            LeftParen, RightParen, Plus, Minus, Star, Slash, Eof
        ]
    );
}

#[test]
fn test_keywords_and_identifiers() {
    use TokenKind::*;
    assert_eq!(kinds("nil true false"), vec![Nil, True, False, Eof]);
    assert_eq!(kinds("nile _true orchid"), vec![Identifier, Identifier, Identifier, Eof]);
    assert_eq!(kinds("and or class fun"), vec![And, Or, Class, Fun, Eof]);
}

#[test]
fn test_numbers() {
    let v = lex("12 3.25 4. .5");
    assert_eq!(v[0], Token::new(TokenKind::Number, "12", 1));
    assert_eq!(v[1], Token::new(TokenKind::Number, "3.25", 1));
    assert_eq!(v[2], Token::new(TokenKind::Number, "4", 1));
    assert_eq!(v[3], Token::new(TokenKind::Dot, ".", 1));
    assert_eq!(v[4], Token::new(TokenKind::Dot, ".", 1));
    assert_eq!(v[5], Token::new(TokenKind::Number, "5", 1));
}

#[test]
fn test_comments_and_lines() {
    let v = lex("1 // one\n// two\n  3");
    assert_eq!(v.len(), 3);
    assert_eq!(v[0].line, 1);
    assert_eq!(v[1], Token::new(TokenKind::Number, "3", 3));
    assert_eq!(v[2].kind, TokenKind::Eof);
    assert_eq!(v[2].line, 3);
}

#[test]
fn test_multiline_string_keeps_start_line() {
    let v = lex("\"a\nb\" 1");
    assert_eq!(v[0], Token::new(TokenKind::String, "\"a\nb\"", 1));
    assert_eq!(v[1].line, 2);
}

#[test]
fn test_error_tokens() {
    let v = lex("@ \"open\nended");
    assert_eq!(v[0].kind, TokenKind::Error);
    assert_eq!(v[0].lexeme, "Unexpected character.");
    assert_eq!(v[1].kind, TokenKind::Error);
    assert_eq!(v[1].lexeme, "Unterminated string.");
    assert_eq!(v[1].line, 1);
    assert!(v[2].is_eof());
}

#[test]
fn test_empty_source() {
    let v = lex("");
    assert_eq!(v.len(), 1);
    assert!(v[0].is_eof());
    assert_eq!(v[0].line, 1);
}
