//! Integration tests for the public lexer API and the interactive driver.
//!
//! These tests drive the crate the way the binary does: through
//! `tokenize`, `repl::start` with in-memory reader/writer, and `Config`.

use monkey::{
    config::{Config, DEFAULT_PROMPT},
    errors::errors::ErrorImpl,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    repl,
};
use pretty_assertions::assert_eq;
use std::{
    io::{self, BufReader, Cursor, Read},
    path::PathBuf,
};

fn run_repl(input: &str, config: &Config) -> String {
    let mut output = Vec::new();
    repl::start(Cursor::new(input.as_bytes()), &mut output, config).unwrap();
    String::from_utf8(output).unwrap()
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| arg.to_string()).collect()
}

#[test]
fn test_lexer_consumption_contract() {
    let mut lexer = Lexer::new("fn(a, b) { a != b }".to_string());
    let mut count = 0;

    while !lexer.next_token().is_eof() {
        count += 1;
    }

    assert_eq!(count, 11);
    assert!(lexer.at_eof());
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_matches_next_token() {
    let source = "let ten = 10;\nlet eq = ten == 10;";
    let mut lexer = Lexer::new(source.to_string());
    let mut streamed = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        streamed.push(token);
        if done {
            break;
        }
    }

    assert_eq!(tokenize(source.to_string()), streamed);
}

#[test]
fn test_independent_lexers() {
    let mut first = Lexer::new("let a".to_string());
    let mut second = Lexer::new("fn b".to_string());

    assert_eq!(first.next_token().kind, TokenKind::Let);
    assert_eq!(second.next_token().kind, TokenKind::Fn);
    assert_eq!(first.next_token().value, "a");
    assert_eq!(second.next_token().value, "b");
}

#[test]
fn test_repl_echoes_tokens_per_line() {
    let output = run_repl("let five = 5;\n@\n", &Config::default());

    assert_eq!(
        output,
        ">> {Type:LET Literal:let}\n{Type:IDENT Literal:five}\n{Type:= Literal:=}\n\
         {Type:INT Literal:5}\n{Type:; Literal:;}\n\
         >> {Type:ILLEGAL Literal:@}\n\
         >> "
    );
}

#[test]
fn test_repl_empty_input() {
    assert_eq!(run_repl("", &Config::default()), DEFAULT_PROMPT);
}

#[test]
fn test_repl_blank_line_prints_nothing() {
    assert_eq!(run_repl("   \n", &Config::default()), ">> >> ");
}

#[test]
fn test_repl_custom_prompt() {
    let config = Config {
        prompt: "monkey> ".to_string(),
        source_file: None,
    };

    assert_eq!(run_repl("x\n", &config), "monkey> {Type:IDENT Literal:x}\nmonkey> ");
}

#[test]
fn test_repl_invalid_utf8_keeps_session_alive() {
    let mut output = Vec::new();
    repl::start(Cursor::new(&b"caf\xe9\nlet x\n"[..]), &mut output, &Config::default()).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        ">> {Type:IDENT Literal:caf}\n{Type:ILLEGAL Literal:\u{e9}}\n\
         >> {Type:LET Literal:let}\n{Type:IDENT Literal:x}\n\
         >> "
    );
}

struct BrokenInput;

impl Read for BrokenInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "terminal went away"))
    }
}

#[test]
fn test_repl_read_failure_is_error() {
    let mut output = Vec::new();
    let result = repl::start(BufReader::new(BrokenInput), &mut output, &Config::default());

    let error = result.unwrap_err();
    assert!(matches!(error.kind(), ErrorImpl::ReadInput { .. }));
    assert_eq!(output, DEFAULT_PROMPT.as_bytes());
}

#[test]
fn test_run_file_missing() {
    let mut output = Vec::new();
    let result = repl::run_file(&PathBuf::from("tests/does_not_exist.mk"), &mut output);

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "ReadFile");
    assert!(error.get_tip().to_string().contains("does the file exist?"));
    assert!(output.is_empty());
}

#[test]
fn test_run_file_invalid_utf8() {
    let path = std::env::temp_dir().join(format!("monkey_latin1_{}.mk", std::process::id()));
    std::fs::write(&path, b"let x = caf\xe9;").unwrap();

    let mut output = Vec::new();
    let result = repl::run_file(&path, &mut output);
    std::fs::remove_file(&path).unwrap();

    result.unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "{Type:LET Literal:let}\n{Type:IDENT Literal:x}\n{Type:= Literal:=}\n\
         {Type:IDENT Literal:caf}\n{Type:ILLEGAL Literal:\u{e9}}\n{Type:; Literal:;}\n"
    );
}

#[test]
fn test_run_file() {
    let path = std::env::temp_dir().join(format!("monkey_run_file_{}.mk", std::process::id()));
    std::fs::write(&path, "let x = 1;\nx != 2").unwrap();

    let mut output = Vec::new();
    repl::run_file(&path, &mut output).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "{Type:LET Literal:let}\n{Type:IDENT Literal:x}\n{Type:= Literal:=}\n\
         {Type:INT Literal:1}\n{Type:; Literal:;}\n\
         {Type:IDENT Literal:x}\n{Type:!= Literal:!=}\n{Type:INT Literal:2}\n"
    );
}

#[test]
fn test_config_defaults() {
    let config = Config::from_args(args(&[])).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.prompt, ">> ");
}

#[test]
fn test_config_prompt_and_file() {
    let config = Config::from_args(args(&["--prompt", "$ ", "main.mk"])).unwrap();

    assert_eq!(config.prompt, "$ ");
    assert_eq!(config.source_file, Some(PathBuf::from("main.mk")));
}

#[test]
fn test_config_errors() {
    let error = Config::from_args(args(&["--prompt"])).unwrap_err();
    assert!(matches!(error.kind(), ErrorImpl::MissingArgumentValue { .. }));

    let error = Config::from_args(args(&["--verbose"])).unwrap_err();
    assert!(matches!(error.kind(), ErrorImpl::UnknownArgument { .. }));

    let error = Config::from_args(args(&["a.mk", "b.mk"])).unwrap_err();
    assert!(matches!(error.kind(), ErrorImpl::UnexpectedArgument { argument } if argument == "b.mk"));
}
