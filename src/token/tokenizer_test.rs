use super::*;

use super::TokenKind::*;


fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| *token.kind()).collect()
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|token| token.text().as_str()).collect()
}

fn nest(mut v: Vec<TokenKind>) -> Vec<TokenKind> {
    v.insert(0, OpenParen);
    v.push(CloseParen);
    v
}

#[test]
fn application() {
    let tokens = tokenize("(+ 1 2 3)").unwrap();
    assert_eq!(
        kinds(&tokens),
        nest(vec![Symbol, Number, Number, Number])
    );
    assert_eq!(texts(&tokens), vec!["(", "+", "1", "2", "3", ")"]);
}

#[test]
fn nested() {
    let tokens = tokenize("(testing (this (out)))").unwrap();
    let mut expected = nest(vec![Symbol]);
    expected.insert(0, Symbol);
    expected = nest(expected);
    expected.insert(0, Symbol);
    expected = nest(expected);
    assert_eq!(kinds(&tokens), expected);
}

#[test]
fn trivia_dropped() {
    let tokens = tokenize("; leading comment\n  (a ; trailing\n b)  ").unwrap();
    assert_eq!(kinds(&tokens), nest(vec![Symbol, Symbol]));

    let all = Tokenizer::new("a ;c")
        .map(|t| *t.unwrap().kind())
        .collect::<Vec<_>>();
    assert_eq!(all, vec![Symbol, Whitespace, Comment]);
}

#[test]
fn numbers() {
    let tokens = tokenize("(1 -4 33. 128.128 -0.5)").unwrap();
    assert_eq!(
        kinds(&tokens),
        nest(vec![Number, Number, Number, Number, Number])
    );
    assert_eq!(
        texts(&tokens)[1..6].to_vec(),
        vec!["1", "-4", "33.", "128.128", "-0.5"]
    );
}

#[test]
fn minus_is_symbol_unless_before_digit() {
    let tokens = tokenize("(- 5 -x -5)").unwrap();
    assert_eq!(kinds(&tokens), nest(vec![Symbol, Number, Symbol, Number]));
    assert_eq!(texts(&tokens)[3], "-x");
}

#[test]
fn operators_are_symbols() {
    let tokens = tokenize("+ = < > not car").unwrap();
    assert_eq!(kinds(&tokens), vec![Symbol; 6]);
}

#[test]
fn strings() {
    let tokens = tokenize("(\"test.(est)\" \"hello world\" \"\")").unwrap();
    assert_eq!(kinds(&tokens), nest(vec![String, String, String]));
    assert_eq!(texts(&tokens)[1], "\"test.(est)\"");
    assert_eq!(texts(&tokens)[3], "\"\"");
}

#[test]
fn string_ends_symbol() {
    let tokens = tokenize("abc\"def\"").unwrap();
    assert_eq!(kinds(&tokens), vec![Symbol, String]);
}

#[test]
fn positions() {
    let tokens = tokenize("(a\n  bc)\n\n  d").unwrap();
    let positions = tokens
        .iter()
        .map(|token| (*token.line(), *token.column()))
        .collect::<Vec<_>>();
    assert_eq!(positions, vec![(1, 1), (1, 2), (2, 3), (2, 5), (4, 3)]);
}

#[test]
fn positions_after_multiline_string() {
    let tokens = tokenize("\"a\nbc\" x").unwrap();
    assert_eq!((*tokens[1].line(), *tokens[1].column()), (2, 5));
}

#[test]
fn unterminated_string() {
    let err = tokenize("(display \"oops)").unwrap_err();
    assert_eq!(*err.kind(), TokenizeErrorKind::UnterminatedString);
    assert_eq!((*err.line(), *err.column()), (1, 10));
    assert!(err.is_incomplete());
}

#[test]
fn unrecognized_character() {
    let err = tokenize("(a\n #b)").unwrap_err();
    assert_eq!(*err.kind(), TokenizeErrorKind::UnrecognizedCharacter('#'));
    assert_eq!((*err.line(), *err.column()), (2, 2));
    assert!(!err.is_incomplete());
    assert_eq!(err.to_string(), "Unrecognized character '#' at 2:2");
}

#[test]
fn empty_source() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("   ; nothing here").unwrap().is_empty());
}

#[test]
fn token_display() {
    let tokens = tokenize("\n  foo").unwrap();
    assert_eq!(tokens[0].to_string(), "Token(Symbol, \"foo\", 2:3)");
}
