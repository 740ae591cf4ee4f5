//! End-to-end tests driving the lexer and parser together over whole
//! programs, the way the binary does.

use std::{env, fs, path::PathBuf};

use nifty::{
    ast::nodes::Node,
    lexer::lexer::{tokenize, TokenStream},
    parser::parser::{parse, Parser},
};

fn parse_program(source: &str) -> (Parser<TokenStream>, Vec<Node>) {
    let tokens = tokenize(source.to_string()).unwrap();
    parse(TokenStream::new(tokens, Some("test.nifty".to_string())))
}

#[test]
fn test_full_program() {
    let source = r#"
package main;

fn add(a: s32, b: s32): s32 {
    return a + b;
}

fn main(): void {
    return;
}
"#;

    let (parser, nodes) = parse_program(source);

    assert!(!parser.finished_with_errors());
    assert_eq!(nodes.len(), 2);
    assert_eq!(parser.current_package(), "main");
    assert!(parser.packages().contains("main"));

    for node in &nodes {
        assert!(matches!(node, Node::Function { .. }));
    }

    match &nodes[0] {
        Node::Function { prototype, .. } => {
            assert_eq!(prototype.name, "add");
            assert_eq!(prototype.args.len(), 2);
        }
        other => panic!("expected a function, got {:?}", other),
    }
}

#[test]
fn test_block_with_expression_statements() {
    let source = "fn f() { 1; true; }";

    let (parser, nodes) = parse_program(source);

    assert!(!parser.finished_with_errors());
    assert_eq!(nodes.len(), 1);

    match &nodes[0] {
        Node::Function { body, .. } => match &**body {
            Node::Block { statements } => {
                assert_eq!(statements.len(), 2);
                assert!(matches!(statements[0], Node::NumberLiteral { .. }));
                assert!(matches!(statements[1], Node::BoolLiteral { .. }));
            }
            other => panic!("expected a block, got {:?}", other),
        },
        other => panic!("expected a function, got {:?}", other),
    }
}

#[test]
fn test_broken_program_sets_error_flag() {
    let (parser, nodes) = parse_program("fn broken( {}");

    assert!(parser.finished_with_errors());
    assert!(nodes.is_empty());
}

#[test]
fn test_partial_ast_survives_late_error() {
    let source = "package main; fn ok(): s32 { return 1; } fn bad(a s32) {}";

    let (parser, nodes) = parse_program(source);

    assert!(parser.finished_with_errors());
    assert_eq!(nodes.len(), 1);
    assert_eq!(parser.current_package(), "main");
}

#[test]
fn test_diagnostics_against_on_disk_source() {
    let path = env::temp_dir().join("nifty_integration_diag_test.nifty");
    let source = "fn f(a s32) {}\n";
    fs::write(&path, source).unwrap();

    let tokens = tokenize(source.to_string()).unwrap();
    let stream = TokenStream::new(tokens, Some("nifty_integration_diag_test.nifty".to_string()))
        .with_path(PathBuf::from(&path));
    let (parser, nodes) = parse(stream);

    assert!(parser.finished_with_errors());
    assert_eq!(parser.error_count(), 1);
    assert!(nodes.is_empty());

    fs::remove_file(&path).unwrap();
}
