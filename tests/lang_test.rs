mod common;

use snake_lisp::error::Error;
use snake_lisp::parser::{ParseErrorReason, MAX_DEPTH};
use snake_lisp::prelude::*;
use snake_lisp::token::TokenKind;
use snake_lisp::{parse, tokenize};


fn lang_err(err: Error) -> LangErr {
    match err {
        Error::Lang(err) => err,
        other => panic!("expected a runtime error, got {:?}", other),
    }
}


#[test]
fn tokenize_application() {
    let tokens = tokenize("(+ 1 2 3)").unwrap();
    let kinds = tokens.iter().map(|t| *t.kind()).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenParen,
            TokenKind::Symbol,
            TokenKind::Number,
            TokenKind::Number,
            TokenKind::Number,
            TokenKind::CloseParen,
        ]
    );
    assert_eq!(tokens[1].text(), "+");
}

#[test]
fn parse_successive_forms() {
    let tokens = tokenize("(+ 1 2) ; sum\n\"two\" -5").unwrap();

    let (first, pos) = parse(&tokens, 0).unwrap().unwrap();
    assert_eq!(
        first,
        Node::list(vec![Node::symbol("+"), Node::from(1), Node::from(2)])
    );
    let (second, pos) = parse(&tokens, pos).unwrap().unwrap();
    assert_eq!(second, Node::string("two"));
    let (third, pos) = parse(&tokens, pos).unwrap().unwrap();
    assert_eq!(third, Node::from(-5));
    assert!(parse(&tokens, pos).unwrap().is_none());
}

#[test]
fn parse_errors() {
    let tokens = tokenize("(+ 1").unwrap();
    let err = parse(&tokens, 0).unwrap_err();
    assert_eq!(err.reason(), ParseErrorReason::UnexpectedEndOfInput);

    let tokens = tokenize("\n  )").unwrap();
    let err = parse(&tokens, 0).unwrap_err();
    assert_eq!(err.reason(), ParseErrorReason::UnexpectedToken);
    let token = err.token().unwrap();
    assert_eq!((*token.line(), *token.column()), (2, 3));
}

#[test]
fn basic_arithmetic() {
    let (env, _) = common::setup();

    let results = common::results(&env, "(+ 1 2) (+ 2 2)");
    assert_eq!(results, vec![Value::from(3), Value::from(4)]);

    let results = common::results(
        &env,
        "(* (+ 1 1) 3)
         (* (+ 1 1) 3.)",
    );
    assert_eq!(results, vec![Value::from(6), Value::from(6.0)]);
    assert_eq!(results[1].to_string(), "6.0");

    let results = common::results(
        &env,
        "(/ (- 1 1) 2)
         (/ (+ 1 1) 2)
         (- 10 1 2 3)
         (- 4)",
    );
    assert_eq!(
        results,
        vec![
            Value::from(0.0),
            Value::from(1.0),
            Value::from(4),
            Value::from(-4)
        ]
    );
}

#[test]
fn sequences() {
    let (env, _) = common::setup();

    let results = common::results(
        &env,
        "(cons 1 (list 2 3))
         (car (list 1 2))
         (cdr (list 1 2 3))
         (car (list))
         (cdr (list))",
    );
    assert_eq!(
        results,
        vec![
            Value::List(vec![Value::from(1), Value::from(2), Value::from(3)]),
            Value::from(1),
            Value::List(vec![Value::from(2), Value::from(3)]),
            Value::Absent,
            Value::List(vec![]),
        ]
    );
    assert_eq!(results[0].to_string(), "[1, 2, 3]");

    let err = lang_err(common::results_with_errors(&env, "(cons 1 2)").unwrap_err());
    assert!(err.is_arity_or_type_error());
}

#[test]
fn comparison_and_truthiness() {
    let (env, _) = common::setup();

    let results = common::results(
        &env,
        "(= 1 1) (= 1 1.0) (< 1 2) (> 1 2) (not 0) (not (list)) (not (car (list)))",
    );
    let expected = [true, true, true, false, false, false, true];
    assert_eq!(
        results,
        expected.iter().map(|b| Value::from(*b)).collect::<Vec<_>>()
    );
    assert_eq!(results[0].to_string(), "True");
}

#[test]
fn empty_application() {
    let (env, _) = common::setup();
    assert_eq!(common::results(&env, "()"), vec![Value::Absent]);
}

#[test]
fn display_order() {
    let (env, output) = common::setup();

    let results = common::results(
        &env,
        "(display \"a\") (newline) (list (display 1) (display 2) (display (list 3 \"x\")))",
    );
    assert_eq!(results[0], Value::Absent);
    assert_eq!(
        results[2],
        Value::List(vec![Value::Absent, Value::Absent, Value::Absent])
    );
    assert_eq!(common::output(&output), "a\n12[3, \"x\"]");
}

#[test]
fn unbound_symbol() {
    let (env, _) = common::setup();

    let err = lang_err(common::results_with_errors(&env, "x").unwrap_err());
    assert!(matches!(err.kind(), ErrKind::UnboundSymbol(name) if name == "x"));
    assert_eq!(err.to_string(), "Unbound symbol: \"x\"");
}

#[test]
fn not_callable() {
    let (env, _) = common::setup();

    let err = lang_err(common::results_with_errors(&env, "(1 2 3)").unwrap_err());
    assert!(matches!(err.kind(), ErrKind::NotCallable(_)));
}

#[test]
fn division_by_zero() {
    let (env, _) = common::setup();

    let err = lang_err(common::results_with_errors(&env, "(/ 1 0)").unwrap_err());
    assert!(matches!(err.kind(), ErrKind::DivisionByZero));
}

#[test]
fn lex_errors() {
    let (env, _) = common::setup();

    match common::results_with_errors(&env, "(+ 1\n #t)") {
        Err(Error::Tokenize(err)) => {
            assert_eq!((*err.line(), *err.column()), (2, 2));
            assert!(!err.is_incomplete());
        }
        other => panic!("expected a tokenize error, got {:?}", other),
    }
    match common::results_with_errors(&env, "(display \"open") {
        Err(err) => assert!(err.is_incomplete()),
        Ok(results) => panic!("unexpected success: {:?}", results),
    }
}

#[test]
fn errors_do_not_poison_the_session() {
    let (env, _) = common::setup();

    assert!(common::results_with_errors(&env, "(car 1)").is_err());
    assert_eq!(common::results(&env, "(+ 1 1)"), vec![Value::from(2)]);
}

#[test]
fn procedures_from_the_host() {
    let (env, output) = common::setup();

    let square = Procedure::new(vec!["n"], "(* n n)".parse().unwrap(), &env);
    env.define("square", square.into());
    let show = Procedure::new(vec!["v"], "(display v)".parse().unwrap(), &env);
    env.define("show", show.into());

    let results = common::results(&env, "(square (square 3)) (show (list (square 2)))");
    assert_eq!(results, vec![Value::from(81), Value::Absent]);
    assert_eq!(common::output(&output), "[4]");
    assert_eq!(
        common::results(&env, "square")[0].to_string(),
        "<function (n)>"
    );

    // Both procedures capture the frame they are bound in.
    assert_eq!(env.handle_count(), 3);
    env.clear();
    assert_eq!(env.handle_count(), 1);
}

#[test]
fn closures_capture_by_reference() {
    let (env, _) = common::setup();

    let scope = Environment::with_parent(&env);
    let adder = Procedure::new(vec!["n"], "(+ n offset)".parse().unwrap(), &scope);
    env.define("add-offset", adder.into());

    assert!(common::results_with_errors(&env, "(add-offset 1)").is_err());
    scope.define("offset", Value::from(10));
    assert_eq!(common::results(&env, "(add-offset 1)"), vec![Value::from(11)]);
    scope.define("offset", Value::from(20));
    assert_eq!(common::results(&env, "(add-offset 1)"), vec![Value::from(21)]);
}

#[test]
fn scope_chain_depth() {
    let (root, _) = common::setup();
    root.define("x", Value::from("root"));

    let middle = Environment::with_parent(&root);
    let mut leaf = Environment::with_parent(&middle);
    for _ in 0..3 {
        leaf = Environment::with_parent(&leaf);
    }
    assert_eq!(leaf.hops_to("x"), Some(5));
    assert_eq!(leaf.lookup("x").unwrap(), Value::from("root"));

    middle.define("x", Value::from("middle"));
    assert_eq!(leaf.hops_to("x"), Some(4));
    assert_eq!(leaf.lookup("x").unwrap(), Value::from("middle"));
    assert_eq!(root.lookup("x").unwrap(), Value::from("root"));
}

#[test]
fn deep_nesting() {
    let (env, _) = common::setup();
    let nested = |depth: usize| format!("{}{}", "(list ".repeat(depth), ")".repeat(depth));

    match common::results_with_errors(&env, nested(2000)) {
        Err(Error::Parse(err)) => {
            assert_eq!(err.reason(), ParseErrorReason::TooDeep);
            assert!(!err.is_incomplete());
        }
        other => panic!("expected a parse error, got {:?}", other),
    }

    let results = common::results(&env, nested(MAX_DEPTH));
    assert_eq!(results[0].to_string().matches('[').count(), MAX_DEPTH);
    assert_eq!(common::results(&env, "(+ 1 1)"), vec![Value::from(2)]);
}
