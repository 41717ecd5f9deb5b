/// ## Decoded statements
///
/// A statement is an opcode plus raw operand text. Operands are not
/// resolved to values here; the machine does that each time the
/// statement executes.

#[derive(Debug, PartialEq, Clone)]
pub struct Statement {
    label: Option<String>,
    opcode: Opcode,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Opcode {
    Let(String, String),
    Print(String),
    Innum(String),
    Instr(String),
    Add(String, String),
    Sub(String, String),
    Mult(String, String),
    Div(String, String),
    Goto(String, Option<Condition>),
    Gosub(String, Option<Condition>),
    Return,
    End,
    /// The `.` that marks the end of the source.
    Dot,
}

/// `left operator right`, kept as raw text.
#[derive(Debug, PartialEq, Clone)]
pub struct Condition {
    pub left: String,
    pub operator: String,
    pub right: String,
}

impl Condition {
    pub fn new(left: &str, operator: &str, right: &str) -> Condition {
        Condition {
            left: left.to_string(),
            operator: operator.to_string(),
            right: right.to_string(),
        }
    }
}

impl Statement {
    pub fn new(opcode: Opcode) -> Statement {
        Statement {
            label: None,
            opcode,
        }
    }

    pub fn labeled(label: &str, opcode: Opcode) -> Statement {
        Statement {
            label: Some(label.to_string()),
            opcode,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn opcode(&self) -> &Opcode {
        &self.opcode
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Let(var, val) => write!(f, "LET {} {}", var, val),
            Print(val) => write!(f, "PRINT {}", val),
            Innum(var) => write!(f, "INNUM {}", var),
            Instr(var) => write!(f, "INSTR {}", var),
            Add(var, val) => write!(f, "ADD {} {}", var, val),
            Sub(var, val) => write!(f, "SUB {} {}", var, val),
            Mult(var, val) => write!(f, "MULT {} {}", var, val),
            Div(var, val) => write!(f, "DIV {} {}", var, val),
            Goto(target, None) => write!(f, "GOTO {}", target),
            Goto(target, Some(cond)) => write!(f, "GOTO {} IF {}", target, cond),
            Gosub(target, None) => write!(f, "GOSUB {}", target),
            Gosub(target, Some(cond)) => write!(f, "GOSUB {} IF {}", target, cond),
            Return => write!(f, "RETURN"),
            End => write!(f, "END"),
            Dot => write!(f, "."),
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}: {}", label, self.opcode),
            None => write!(f, "{}", self.opcode),
        }
    }
}
