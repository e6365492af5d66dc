//! Program container
//!
//! A Program is a named collection of variable bindings and an ordered
//! instruction sequence. Nothing here evaluates anything: execution is
//! driven externally, instruction by instruction, by the [`Evaluator`]
//! (`crate::evaluator::Evaluator`), so the surrounding shell controls
//! pacing and display between steps.

use crate::ast::Expr;
use crate::value::{EvalError, Literal};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named container of variable bindings and an instruction sequence.
///
/// Variable names are unique (map-backed); the instruction sequence changes
/// only through the explicit edit operations below. `BTreeMap` keeps
/// variable iteration and the serialized snapshot deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    name: String,
    /// Associated filename, set on first save and reused thereafter
    filename: Option<String>,
    variables: BTreeMap<String, Literal>,
    instructions: Vec<Expr>,
}

impl Program {
    /// Create an empty program with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: None,
            variables: BTreeMap::new(),
            instructions: Vec::new(),
        }
    }

    /// The program's immutable identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = Some(filename.into());
    }

    /// Bind a variable to an initial value (upsert, same as
    /// [`set_variable`](Self::set_variable)).
    pub fn add_variable(&mut self, name: impl Into<String>, initial: Literal) {
        self.variables.insert(name.into(), initial);
    }

    /// Look up a variable's current value.
    pub fn get_variable(&self, name: &str) -> Result<&Literal, EvalError> {
        self.variables.get(name).ok_or_else(|| EvalError::UndefinedVariable {
            name: name.to_string(),
        })
    }

    /// Set a variable's value, creating the binding if absent.
    pub fn set_variable(&mut self, name: impl Into<String>, value: Literal) {
        self.variables.insert(name.into(), value);
    }

    /// Variable bindings in name order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &Literal)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Append an instruction to the end of the sequence.
    pub fn append_instruction(&mut self, expr: Expr) {
        self.instructions.push(expr);
    }

    /// Remove and return the instruction at `index`, or `None` if out of range.
    pub fn remove_instruction(&mut self, index: usize) -> Option<Expr> {
        if index < self.instructions.len() {
            Some(self.instructions.remove(index))
        } else {
            None
        }
    }

    /// The ordered top-level instruction sequence.
    pub fn instructions(&self) -> &[Expr] {
        &self.instructions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOp;

    #[test]
    fn test_get_variable_unset_is_undefined() {
        let program = Program::new("p");
        assert_eq!(
            program.get_variable("x"),
            Err(EvalError::UndefinedVariable {
                name: "x".to_string(),
            })
        );
    }

    #[test]
    fn test_set_then_get_variable() {
        let mut program = Program::new("p");
        program.set_variable("x", Literal::Int(5));
        assert_eq!(program.get_variable("x"), Ok(&Literal::Int(5)));

        // upsert overwrites
        program.set_variable("x", Literal::string("now a string"));
        assert_eq!(program.get_variable("x"), Ok(&Literal::string("now a string")));
    }

    #[test]
    fn test_add_variable_is_upsert() {
        let mut program = Program::new("p");
        program.add_variable("n", Literal::Int(1));
        program.add_variable("n", Literal::Int(2));
        assert_eq!(program.get_variable("n"), Ok(&Literal::Int(2)));
    }

    #[test]
    fn test_instruction_editing() {
        let mut program = Program::new("p");
        let a = Expr::binary(BinaryOp::Mul, Expr::int(4), Expr::int(6));
        let b = Expr::print(vec![Expr::var("x")]);
        program.append_instruction(a.clone());
        program.append_instruction(b.clone());
        assert_eq!(program.instructions(), &[a.clone(), b.clone()]);

        assert_eq!(program.remove_instruction(0), Some(a));
        assert_eq!(program.instructions(), &[b]);
        assert_eq!(program.remove_instruction(5), None);
    }

    #[test]
    fn test_filename_starts_unset() {
        let mut program = Program::new("p");
        assert_eq!(program.filename(), None);
        program.set_filename("saved.json");
        assert_eq!(program.filename(), Some("saved.json"));
    }

    #[test]
    fn test_variables_iterate_in_name_order() {
        let mut program = Program::new("p");
        program.set_variable("b", Literal::Int(2));
        program.set_variable("a", Literal::Int(1));
        let names: Vec<&str> = program.variables().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
