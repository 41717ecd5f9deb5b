use super::ast::*;
use super::lex::lex;
use super::token::*;
use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Build one statement from the tokens of one source line.
pub fn parse(tokens: &[Token]) -> Result<Statement> {
    Parser::parse(tokens)
}

/// Build the statement sequence for a whole program. Blank lines are
/// skipped and a line holding only `.` ends the program. Errors carry
/// the zero based index of the offending source line.
pub fn parse_program(source: &str) -> Result<Vec<Statement>> {
    let mut statements = vec![];
    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let tokens = lex(line);
        let statement = parse(&tokens).map_err(|e| e.in_line_number(Some(index)))?;
        let done = *statement.opcode() == Opcode::Dot;
        statements.push(statement);
        if done {
            break;
        }
    }
    Ok(statements)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Statement> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
        };
        let label = parse.label();
        let opcode = parse.opcode()?;
        if let Some(t) = parse.next() {
            return Err(error!(SyntaxError; "UNEXPECTED {}", t));
        }
        Ok(match label {
            Some(label) => Statement::labeled(&label, opcode),
            None => Statement::new(opcode),
        })
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        self.token_stream.next()
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn label(&mut self) -> Option<String> {
        if let Some(Token::Ident(name)) = self.peek() {
            let name = name.clone();
            let mut ahead = self.token_stream.clone();
            if let Some(Token::Colon) = ahead.next() {
                self.next();
                self.next();
                return Some(name);
            }
        }
        None
    }

    fn opcode(&mut self) -> Result<Opcode> {
        match self.next() {
            Some(Token::Word(word)) => Opcode::for_word(self, *word),
            Some(Token::Dot) => Ok(Opcode::Dot),
            Some(t) => Err(error!(SyntaxError; "EXPECTED STATEMENT, FOUND {}", t)),
            None => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn ident(&mut self) -> Result<String> {
        match self.next() {
            Some(Token::Ident(i)) => Ok(i.clone()),
            _ => Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        }
    }

    fn value(&mut self) -> Result<String> {
        match self.next() {
            Some(t) => match t {
                Token::Ident(_) | Token::Literal(_) => Ok(t.to_string()),
                _ => Err(error!(SyntaxError; "EXPECTED VALUE, FOUND {}", t)),
            },
            None => Err(error!(SyntaxError; "EXPECTED VALUE")),
        }
    }

    fn target(&mut self) -> Result<String> {
        match self.next() {
            Some(t) => match t {
                Token::Ident(_)
                | Token::Literal(Literal::Integer(_))
                | Token::Literal(Literal::String(_)) => Ok(t.to_string()),
                _ => Err(error!(SyntaxError; "EXPECTED JUMP TARGET, FOUND {}", t)),
            },
            None => Err(error!(SyntaxError; "EXPECTED JUMP TARGET")),
        }
    }

    fn condition(&mut self) -> Result<Option<Condition>> {
        match self.peek() {
            Some(Token::Word(Word::If)) => {
                self.next();
            }
            _ => return Ok(None),
        }
        let left = self.value()?;
        let operator = match self.next() {
            Some(Token::Operator(op)) => op.to_string(),
            _ => return Err(error!(SyntaxError; "EXPECTED COMPARISON OPERATOR")),
        };
        let right = self.value()?;
        Ok(Some(Condition {
            left,
            operator,
            right,
        }))
    }
}

impl Opcode {
    fn for_word(parse: &mut Parser, word: Word) -> Result<Opcode> {
        use Word::*;
        match word {
            Let => Ok(Opcode::Let(parse.ident()?, parse.value()?)),
            Print => Ok(Opcode::Print(parse.value()?)),
            Innum => Ok(Opcode::Innum(parse.ident()?)),
            Instr => Ok(Opcode::Instr(parse.ident()?)),
            Add => Ok(Opcode::Add(parse.ident()?, parse.value()?)),
            Sub => Ok(Opcode::Sub(parse.ident()?, parse.value()?)),
            Mult => Ok(Opcode::Mult(parse.ident()?, parse.value()?)),
            Div => Ok(Opcode::Div(parse.ident()?, parse.value()?)),
            Goto => Ok(Opcode::Goto(parse.target()?, parse.condition()?)),
            Gosub => Ok(Opcode::Gosub(parse.target()?, parse.condition()?)),
            Return => Ok(Opcode::Return),
            End => Ok(Opcode::End),
            If => Err(error!(SyntaxError; "EXPECTED STATEMENT, FOUND IF")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn parse_str(s: &str) -> Statement {
        match parse(&lex(s)) {
            Ok(statement) => statement,
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    #[test]
    fn test_let() {
        assert_eq!(
            parse_str("LET name \"Boo\""),
            Statement::new(Opcode::Let("name".into(), "\"Boo\"".into()))
        );
    }

    #[test]
    fn test_labeled_add() {
        assert_eq!(
            parse_str("loop: ADD i 1"),
            Statement::labeled("loop", Opcode::Add("i".into(), "1".into()))
        );
    }

    #[test]
    fn test_conditional_gosub() {
        assert_eq!(
            parse_str("GOSUB -3 IF x >= 2.5"),
            Statement::new(Opcode::Gosub(
                "-3".into(),
                Some(Condition::new("x", ">=", "2.5"))
            ))
        );
    }

    #[test]
    fn test_trailing_tokens() {
        let e = parse(&lex("RETURN 5")).unwrap_err();
        assert_eq!(e.code(), ErrorCode::SyntaxError);
    }

    #[test]
    fn test_real_is_not_a_jump_target() {
        assert!(parse(&lex("GOTO 1.5")).is_err());
    }

    #[test]
    fn test_program_stops_at_dot() {
        let program = parse_program("LET x 1\n\nPRINT x\n.\nPRINT y\n").unwrap();
        assert_eq!(program.len(), 3);
        assert_eq!(*program[2].opcode(), Opcode::Dot);
    }

    #[test]
    fn test_program_error_line() {
        let e = parse_program("LET x 1\nLET 5 x\n").unwrap_err();
        assert_eq!(e.line_number(), Some(1));
    }
}
