use super::Address;
use crate::error;
use crate::lang::{ast::Statement, Error};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Label table
///
/// Built once from a finished statement sequence. A label may only be
/// declared once; a second declaration is an error naming both lines.

#[derive(Debug, Default, Clone)]
pub struct Labels {
    symbols: HashMap<String, Address>,
}

impl Labels {
    pub fn build(statements: &[Statement]) -> Result<Labels> {
        let mut symbols: HashMap<String, Address> = HashMap::new();
        for (addr, statement) in statements.iter().enumerate() {
            if let Some(label) = statement.label() {
                if let Some(first) = symbols.get(label) {
                    return Err(error!(DuplicateLabel, Some(addr);
                        "'{}' already declared in line {}", label, first + 1));
                }
                symbols.insert(label.to_string(), addr);
            }
        }
        Ok(Labels { symbols })
    }

    pub fn get(&self, label: &str) -> Option<Address> {
        self.symbols.get(label).copied()
    }

    pub fn resolve(&self, label: &str) -> Result<Address> {
        match self.get(label) {
            Some(addr) => Ok(addr),
            None => Err(error!(UndefinedLabel; "'{}'", label)),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ast::Opcode;
    use crate::lang::ErrorCode;

    #[test]
    fn test_build() {
        let statements = vec![
            Statement::new(Opcode::Print("1".into())),
            Statement::labeled("a", Opcode::Return),
            Statement::labeled("b", Opcode::End),
        ];
        let labels = Labels::build(&statements).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.get("a"), Some(1));
        assert_eq!(labels.resolve("b"), Ok(2));
        assert_eq!(
            labels.resolve("c").unwrap_err().code(),
            ErrorCode::UndefinedLabel
        );
    }

    #[test]
    fn test_duplicate_label() {
        let statements = vec![
            Statement::labeled("x", Opcode::End),
            Statement::labeled("x", Opcode::End),
        ];
        let e = Labels::build(&statements).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DuplicateLabel);
        assert_eq!(e.line_number(), Some(1));
        assert_eq!(
            e.to_string(),
            "DUPLICATE LABEL IN LINE 2; 'x' already declared in line 1"
        );
    }
}
