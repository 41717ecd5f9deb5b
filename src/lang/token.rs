#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Ident(String),
    Colon,
    Dot,
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        if let Some(word) = Word::from_string(s) {
            return Some(Token::Word(word));
        }
        Operator::from_string(s).map(Token::Operator)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Colon => write!(f, ":"),
            Dot => write!(f, "."),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(String),
    Real(String),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Integer(s) => write!(f, "{}", s),
            Real(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Add,
    Div,
    End,
    Gosub,
    Goto,
    If,
    Innum,
    Instr,
    Let,
    Mult,
    Print,
    Return,
    Sub,
}

impl Word {
    pub fn from_string(s: &str) -> Option<Word> {
        use Word::*;
        Some(match s {
            "ADD" => Add,
            "DIV" => Div,
            "END" => End,
            "GOSUB" => Gosub,
            "GOTO" => Goto,
            "IF" => If,
            "INNUM" => Innum,
            "INSTR" => Instr,
            "LET" => Let,
            "MULT" => Mult,
            "PRINT" => Print,
            "RETURN" => Return,
            "SUB" => Sub,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Add => write!(f, "ADD"),
            Div => write!(f, "DIV"),
            End => write!(f, "END"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Innum => write!(f, "INNUM"),
            Instr => write!(f, "INSTR"),
            Let => write!(f, "LET"),
            Mult => write!(f, "MULT"),
            Print => write!(f, "PRINT"),
            Return => write!(f, "RETURN"),
            Sub => write!(f, "SUB"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    pub fn from_string(s: &str) -> Option<Operator> {
        use Operator::*;
        Some(match s {
            "=" => Equal,
            "<>" => NotEqual,
            "<" => Less,
            "<=" => LessEqual,
            ">" => Greater,
            ">=" => GreaterEqual,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}
