//! Program registry
//!
//! The Interpreter owns every Program, keyed by name. It is a plain value —
//! callers pass it to whatever needs it, and tests can hold several
//! independent registries. It is also the unit of persistence: the snapshot
//! store (`crate::store`) serializes a whole registry at once.

use crate::program::Program;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Registry mutation error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A program with this name is already registered
    #[error("duplicate program: {name}")]
    DuplicateProgram { name: String },
}

/// Registry of Programs by name.
///
/// Lookup misses are not errors: `get_program` returns `None` so callers can
/// branch and re-prompt without exception-style control flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interpreter {
    programs: BTreeMap<String, Program>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a program by name.
    pub fn get_program(&self, name: &str) -> Option<&Program> {
        self.programs.get(name)
    }

    /// Look up a program by name for mutation or evaluation.
    pub fn get_program_mut(&mut self, name: &str) -> Option<&mut Program> {
        self.programs.get_mut(name)
    }

    /// Register a program under its own name.
    ///
    /// Fails with [`RegistryError::DuplicateProgram`] if the name is taken;
    /// the existing entry is left unchanged.
    pub fn add_program(&mut self, program: Program) -> Result<(), RegistryError> {
        if self.programs.contains_key(program.name()) {
            return Err(RegistryError::DuplicateProgram {
                name: program.name().to_string(),
            });
        }
        self.programs.insert(program.name().to_string(), program);
        Ok(())
    }

    /// Remove and return a program, or `None` if absent.
    pub fn remove_program(&mut self, name: &str) -> Option<Program> {
        self.programs.remove(name)
    }

    /// Registered program names in deterministic (sorted) order.
    pub fn program_names(&self) -> impl Iterator<Item = &str> {
        self.programs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Literal;

    #[test]
    fn test_lookup_miss_is_none() {
        let interpreter = Interpreter::new();
        assert!(interpreter.get_program("missing").is_none());
    }

    #[test]
    fn test_add_then_get() {
        let mut interpreter = Interpreter::new();
        interpreter.add_program(Program::new("demo")).unwrap();
        assert_eq!(interpreter.get_program("demo").unwrap().name(), "demo");
        assert_eq!(interpreter.len(), 1);
    }

    #[test]
    fn test_duplicate_program_leaves_existing_entry() {
        let mut interpreter = Interpreter::new();
        let mut original = Program::new("demo");
        original.set_variable("x", Literal::Int(1));
        interpreter.add_program(original.clone()).unwrap();

        let result = interpreter.add_program(Program::new("demo"));
        assert_eq!(
            result,
            Err(RegistryError::DuplicateProgram {
                name: "demo".to_string(),
            })
        );
        assert_eq!(interpreter.get_program("demo"), Some(&original));
    }

    #[test]
    fn test_remove_program() {
        let mut interpreter = Interpreter::new();
        interpreter.add_program(Program::new("demo")).unwrap();
        let removed = interpreter.remove_program("demo").unwrap();
        assert_eq!(removed.name(), "demo");
        assert!(interpreter.is_empty());
        assert!(interpreter.remove_program("demo").is_none());
    }

    #[test]
    fn test_program_names_sorted() {
        let mut interpreter = Interpreter::new();
        interpreter.add_program(Program::new("zeta")).unwrap();
        interpreter.add_program(Program::new("alpha")).unwrap();
        let names: Vec<&str> = interpreter.program_names().collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
