//! Literal value representation
//!
//! Shared value representation for the evaluation core.
//! - Int, Str: the language's primitive kinds, immutable once constructed
//! - Void: the designated "no value" result produced by Print, While, and
//!   an empty Seq
//!
//! Typed accessors fail with [`EvalError::TypeMismatch`] when the stored
//! kind does not match — values are never coerced silently.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// An immutable typed value produced by evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Literal {
    /// Integer value
    Int(i64),
    /// String value
    Str(String),
    /// No value (result of output and control-flow operations)
    Void,
}

impl Literal {
    /// Create a new string literal
    pub fn string(s: impl Into<String>) -> Self {
        Literal::Str(s.into())
    }

    /// Get the kind name of this literal (used in error messages)
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::Int(_) => "int",
            Literal::Str(_) => "string",
            Literal::Void => "void",
        }
    }

    /// Read this literal as an integer.
    pub fn int_value(&self) -> Result<i64, EvalError> {
        match self {
            Literal::Int(n) => Ok(*n),
            other => Err(EvalError::TypeMismatch {
                expected: "int",
                found: other.kind_name(),
            }),
        }
    }

    /// Read this literal as a string.
    pub fn string_value(&self) -> Result<&str, EvalError> {
        match self {
            Literal::Str(s) => Ok(s),
            other => Err(EvalError::TypeMismatch {
                expected: "string",
                found: other.kind_name(),
            }),
        }
    }

    /// Integer truth value: nonzero is true. Fails on non-integer kinds.
    pub fn truth_value(&self) -> Result<bool, EvalError> {
        Ok(self.int_value()? != 0)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Literal::Void)
    }
}

impl PartialOrd for Literal {
    /// Ordering is defined per kind only; comparing across kinds yields `None`.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Literal::Int(a), Literal::Int(b)) => Some(a.cmp(b)),
            (Literal::Str(a), Literal::Str(b)) => Some(a.cmp(b)),
            (Literal::Void, Literal::Void) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    /// Canonical text form used by Print: digits for integers, raw contents
    /// for strings, empty string for Void.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Str(s) => write!(f, "{}", s),
            Literal::Void => Ok(()),
        }
    }
}

/// Evaluation error.
///
/// Evaluation errors abort the current `eval` call chain and surface to the
/// caller of the top-level instruction; nothing is retried or defaulted
/// inside the core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A literal was read or used as the wrong kind
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// Lookup of an unbound variable name
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    /// Division or remainder by zero
    #[error("division by zero")]
    DivideByZero,
    /// Arithmetic result does not fit in an integer
    #[error("integer overflow")]
    Overflow,
    /// The caller-supplied step budget ran out (see `Evaluator::with_step_limit`)
    #[error("step limit of {limit} exceeded")]
    StepLimitExceeded { limit: u64 },
    /// The output sink reported a write failure
    #[error("output sink failure: {message}")]
    Sink { message: String },
}
