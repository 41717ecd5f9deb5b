use grin::lang::ast::*;
use grin::lang::{lex, parse, parse_program, ErrorCode};
use grin::mach::Program;

fn parse_str(s: &str) -> Statement {
    match parse(&lex(s)) {
        Ok(statement) => statement,
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

#[test]
fn test_every_statement() {
    let program = parse_program(
        r#"LET a 1
PRINT "hi"
INNUM a
INSTR s
ADD a -2
SUB a b
MULT s 3
DIV a 0.5
GOTO 1
GOSUB "sub" IF a <> b
RETURN
END
."#,
    )
    .unwrap();
    let opcodes: Vec<&Opcode> = program.iter().map(|s| s.opcode()).collect();
    assert_eq!(
        opcodes,
        vec![
            &Opcode::Let("a".into(), "1".into()),
            &Opcode::Print("\"hi\"".into()),
            &Opcode::Innum("a".into()),
            &Opcode::Instr("s".into()),
            &Opcode::Add("a".into(), "-2".into()),
            &Opcode::Sub("a".into(), "b".into()),
            &Opcode::Mult("s".into(), "3".into()),
            &Opcode::Div("a".into(), "0.5".into()),
            &Opcode::Goto("1".into(), None),
            &Opcode::Gosub("\"sub\"".into(), Some(Condition::new("a", "<>", "b"))),
            &Opcode::Return,
            &Opcode::End,
            &Opcode::Dot,
        ]
    );
}

#[test]
fn test_display_round_trips_source() {
    let source = "top: GOTO \"top\" IF i < 10";
    assert_eq!(parse_str(source).to_string(), source);
}

#[test]
fn test_syntax_errors() {
    for source in &[
        "PRINT",
        "LET 5 5",
        "GOTO",
        "GOTO 1 IF x",
        "GOTO 1 IF x ! 2",
        "print x",
        "ADD x 1 2",
        "IF x = 1",
        "LET x \"open",
    ] {
        match parse(&lex(source)) {
            Err(e) => assert_eq!(e.code(), ErrorCode::SyntaxError, "{}", source),
            Ok(s) => panic!("{} parsed as {}", source, s),
        }
    }
}

#[test]
fn test_syntax_error_reports_source_line() {
    let e = Program::from_source("PRINT 1\n\nPRINT\n.").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.line_number(), Some(2));
    assert!(e.to_string().starts_with("SYNTAX ERROR IN LINE 3"));
}

#[test]
fn test_duplicate_label() {
    let e = Program::from_source("a: PRINT 1\na: PRINT 2\n.").unwrap_err();
    assert_eq!(
        e.to_string(),
        "DUPLICATE LABEL IN LINE 2; 'a' already declared in line 1"
    );
}

#[test]
fn test_labels_are_collected() {
    let program = Program::from_source("first: PRINT 1\nPRINT 2\nlast: END\n.").unwrap();
    assert_eq!(program.len(), 4);
    assert_eq!(program.labels().get("first"), Some(0));
    assert_eq!(program.labels().get("last"), Some(2));
    assert_eq!(program.labels().get("middle"), None);
}
