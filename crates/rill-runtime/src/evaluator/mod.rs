//! Tree-walking evaluation
//!
//! Direct evaluation of expression trees against a Program's variable state.
//! Strictly single-threaded and synchronous: a depth-first, left-to-right
//! recursive descent with no suspension points. The only I/O is the injected
//! output sink used by Print.
//!
//! Two evaluations must never run concurrently against the same Program
//! (variables are mutated in place); distinct Programs share nothing, so
//! evaluating them concurrently is safe by construction.

mod expr;

use crate::output::OutputSink;
use crate::program::Program;
use crate::value::{EvalError, Literal};

/// Evaluation driver.
///
/// Borrows the caller's output sink for its lifetime and optionally carries
/// a step budget. The core imposes no implicit loop limit: `new` evaluates
/// without bound, and a caller that wants runaway protection opts in with
/// [`with_step_limit`](Self::with_step_limit). Each While iteration charges
/// one step; the budget spans the evaluator's whole lifetime.
pub struct Evaluator<'a> {
    sink: &'a mut dyn OutputSink,
    step_limit: Option<u64>,
    steps: u64,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator with no step budget.
    pub fn new(sink: &'a mut dyn OutputSink) -> Self {
        Self {
            sink,
            step_limit: None,
            steps: 0,
        }
    }

    /// Create an evaluator that fails with [`EvalError::StepLimitExceeded`]
    /// once loop iterations exceed `limit`.
    pub fn with_step_limit(sink: &'a mut dyn OutputSink, limit: u64) -> Self {
        Self {
            sink,
            step_limit: Some(limit),
            steps: 0,
        }
    }

    /// Evaluate a program's stored instruction sequence in order.
    ///
    /// Yields the last instruction's result, or Void for an empty program.
    /// Errors abort at the failing instruction; earlier side effects stand.
    pub fn run(&mut self, program: &mut Program) -> Result<Literal, EvalError> {
        let mut last = Literal::Void;
        for i in 0..program.instructions().len() {
            // The instruction stays owned by the program; evaluate a clone
            // so the instruction body may mutate the program's variables.
            let instruction = program.instructions()[i].clone();
            last = self.eval(program, &instruction)?;
        }
        Ok(last)
    }

    /// Loop iterations consumed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn charge_step(&mut self) -> Result<(), EvalError> {
        self.steps += 1;
        if let Some(limit) = self.step_limit {
            if self.steps > limit {
                return Err(EvalError::StepLimitExceeded { limit });
            }
        }
        Ok(())
    }
}
