//! Per-node evaluation

use crate::ast::{AssignExpr, BinaryExpr, BinaryOp, Expr, UnaryExpr, UnaryOp, WhileExpr};
use crate::evaluator::Evaluator;
use crate::program::Program;
use crate::value::{EvalError, Literal};

impl Evaluator<'_> {
    /// Evaluate an expression against a program's variable state.
    ///
    /// Every call returns a fully computed literal before its caller
    /// proceeds; errors abort the whole call chain.
    pub fn eval(&mut self, program: &mut Program, expr: &Expr) -> Result<Literal, EvalError> {
        match expr {
            Expr::Literal(lit) => Ok(lit.clone()),
            Expr::Variable(name) => Ok(program.get_variable(name)?.clone()),
            Expr::Unary(unary) => self.eval_unary(program, unary),
            Expr::Binary(binary) => self.eval_binary(program, binary),
            Expr::Assign(assign) => self.eval_assign(program, assign),
            Expr::While(while_expr) => self.eval_while(program, while_expr),
            Expr::Seq(exprs) => self.eval_seq(program, exprs),
            Expr::Print(args) => self.eval_print(program, args),
        }
    }

    fn eval_unary(&mut self, program: &mut Program, unary: &UnaryExpr) -> Result<Literal, EvalError> {
        let operand = self.eval(program, &unary.expr)?;

        match unary.op {
            UnaryOp::Neg => operand
                .int_value()?
                .checked_neg()
                .map(Literal::Int)
                .ok_or(EvalError::Overflow),
            UnaryOp::Not => Ok(bool_literal(!operand.truth_value()?)),
        }
    }

    fn eval_binary(&mut self, program: &mut Program, binary: &BinaryExpr) -> Result<Literal, EvalError> {
        // Left before right: evaluation order is part of the contract, since
        // operands may carry side effects (assignments, variable reads).
        let left = self.eval(program, &binary.left)?;
        let right = self.eval(program, &binary.right)?;

        match binary.op {
            BinaryOp::Add => numeric_binary_op(left, right, i64::checked_add),
            BinaryOp::Sub => numeric_binary_op(left, right, i64::checked_sub),
            BinaryOp::Mul => numeric_binary_op(left, right, i64::checked_mul),
            BinaryOp::Div => {
                if right.int_value()? == 0 {
                    return Err(EvalError::DivideByZero);
                }
                numeric_binary_op(left, right, i64::checked_div)
            }
            BinaryOp::Mod => {
                if right.int_value()? == 0 {
                    return Err(EvalError::DivideByZero);
                }
                numeric_binary_op(left, right, i64::checked_rem)
            }
            BinaryOp::Eq => Ok(bool_literal(kind_equal(&left, &right)?)),
            BinaryOp::Ne => Ok(bool_literal(!kind_equal(&left, &right)?)),
            BinaryOp::Lt => numeric_comparison(left, right, |a, b| a < b),
            BinaryOp::Le => numeric_comparison(left, right, |a, b| a <= b),
            BinaryOp::Gt => numeric_comparison(left, right, |a, b| a > b),
            BinaryOp::Ge => numeric_comparison(left, right, |a, b| a >= b),
        }
    }

    fn eval_assign(&mut self, program: &mut Program, assign: &AssignExpr) -> Result<Literal, EvalError> {
        let value = self.eval(program, &assign.value)?;
        program.set_variable(&assign.name, value.clone());
        Ok(value)
    }

    fn eval_while(&mut self, program: &mut Program, while_expr: &WhileExpr) -> Result<Literal, EvalError> {
        // The condition is re-evaluated fresh before every pass, so variable
        // mutations inside the body affect the next check.
        while self.eval(program, &while_expr.cond)?.truth_value()? {
            self.charge_step()?;
            self.eval(program, &while_expr.body)?;
        }
        Ok(Literal::Void)
    }

    fn eval_seq(&mut self, program: &mut Program, exprs: &[Expr]) -> Result<Literal, EvalError> {
        let mut last = Literal::Void;
        for expr in exprs {
            last = self.eval(program, expr)?;
        }
        Ok(last)
    }

    fn eval_print(&mut self, program: &mut Program, args: &[Expr]) -> Result<Literal, EvalError> {
        let mut rendered = Vec::with_capacity(args.len());
        for arg in args {
            let value = self.eval(program, arg)?;
            rendered.push(value.to_string());
        }

        // Exactly one write per Print evaluation, even with zero arguments.
        self.sink
            .write(&rendered.join(" "))
            .map_err(|err| EvalError::Sink {
                message: err.message,
            })?;
        Ok(Literal::Void)
    }
}

/// Helper for checked integer arithmetic: both operands must be integers,
/// and a result outside the integer range is an error, not a value.
fn numeric_binary_op(
    left: Literal,
    right: Literal,
    op: fn(i64, i64) -> Option<i64>,
) -> Result<Literal, EvalError> {
    let a = left.int_value()?;
    let b = right.int_value()?;
    op(a, b).map(Literal::Int).ok_or(EvalError::Overflow)
}

/// Helper for numeric comparisons, yielding integer 0/1.
fn numeric_comparison<F>(left: Literal, right: Literal, op: F) -> Result<Literal, EvalError>
where
    F: FnOnce(i64, i64) -> bool,
{
    Ok(bool_literal(op(left.int_value()?, right.int_value()?)))
}

/// Equality is defined within a kind only; mixed kinds are a type mismatch,
/// never a silent `false`.
fn kind_equal(left: &Literal, right: &Literal) -> Result<bool, EvalError> {
    match (left, right) {
        (Literal::Int(a), Literal::Int(b)) => Ok(a == b),
        (Literal::Str(a), Literal::Str(b)) => Ok(a == b),
        _ => Err(EvalError::TypeMismatch {
            expected: left.kind_name(),
            found: right.kind_name(),
        }),
    }
}

/// Boolean-as-integer convention: 1 for true, 0 for false.
fn bool_literal(b: bool) -> Literal {
    Literal::Int(i64::from(b))
}
