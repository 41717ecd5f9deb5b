use super::{Address, Labels};
use crate::lang::{ast::Statement, parse_program, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## A finished program
///
/// The statement sequence and its label table. Neither changes once the
/// program is built.

#[derive(Debug, Default, Clone)]
pub struct Program {
    statements: Vec<Statement>,
    labels: Labels,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Result<Program> {
        let labels = Labels::build(&statements)?;
        Ok(Program { statements, labels })
    }

    /// Build a program straight from Grin source text.
    pub fn from_source(source: &str) -> Result<Program> {
        Program::new(parse_program(source)?)
    }

    /// Number of statements. Reaching this address halts the program.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn get(&self, addr: Address) -> Option<&Statement> {
        self.statements.get(addr)
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
}
