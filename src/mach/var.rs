use super::{Operand, Val};
use std::collections::HashMap;

/// ## Variable memory

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    /// Unset variables read as integer zero.
    pub fn fetch(&self, var_name: &str) -> Val {
        match self.vars.get(var_name) {
            Some(val) => val.clone(),
            None => Val::Integer(0),
        }
    }

    /// Like `fetch` but tells unset apart from zero.
    pub fn get(&self, var_name: &str) -> Option<&Val> {
        self.vars.get(var_name)
    }

    pub fn store(&mut self, var_name: &str, value: Val) {
        self.vars.insert(var_name.to_string(), value);
    }

    pub fn evaluate<T: Operand + ?Sized>(&self, token: &T) -> Val {
        token.evaluate(self)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
