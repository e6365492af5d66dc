//! Expression tree definitions
//!
//! Programs are trees of expressions: nullary leaves (constants, variable
//! references), unary and binary operator nodes, and variadic nodes (Seq,
//! Print). Children are owned directly by their parent (`Box`/`Vec`, no
//! back-pointers), so trees are acyclic by construction and each subtree has
//! exactly one owner.
//!
//! Every operator node carries a stable canonical operation name
//! ([`Expr::op_name`]) used for serialization and debug rendering; it is
//! inert to evaluation.

use crate::value::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryOp {
    /// Arithmetic negation
    Neg,
    /// Logical negation (integer truth value, yields 0/1)
    Not,
}

impl UnaryOp {
    /// Canonical operation name
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Neg => "neg",
            UnaryOp::Not => "not",
        }
    }

    fn label(self) -> &'static str {
        match self {
            UnaryOp::Neg => "Neg",
            UnaryOp::Not => "Not",
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinaryOp {
    /// Canonical operation name
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
            BinaryOp::Mod => "mod",
            BinaryOp::Eq => "eq",
            BinaryOp::Ne => "ne",
            BinaryOp::Lt => "lt",
            BinaryOp::Le => "le",
            BinaryOp::Gt => "gt",
            BinaryOp::Ge => "ge",
        }
    }

    /// True for comparison operators (which yield integer 0/1)
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge
        )
    }

    fn label(self) -> &'static str {
        match self {
            BinaryOp::Add => "Add",
            BinaryOp::Sub => "Sub",
            BinaryOp::Mul => "Mul",
            BinaryOp::Div => "Div",
            BinaryOp::Mod => "Mod",
            BinaryOp::Eq => "Eq",
            BinaryOp::Ne => "Ne",
            BinaryOp::Lt => "Lt",
            BinaryOp::Le => "Le",
            BinaryOp::Gt => "Gt",
            BinaryOp::Ge => "Ge",
        }
    }
}

/// Unary operator node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub expr: Box<Expr>,
}

/// Binary operator node. Operand order is significant: the left operand is
/// always evaluated before the right one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Variable assignment node. Evaluating it stores the value into the
/// enclosing Program and yields the assigned literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignExpr {
    pub name: String,
    pub value: Box<Expr>,
}

/// Loop node: re-evaluates `cond` before every pass; a nonzero integer
/// condition runs `body` once more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileExpr {
    pub cond: Box<Expr>,
    pub body: Box<Expr>,
}

/// An expression tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Constant literal
    Literal(Literal),
    /// Variable reference by name
    Variable(String),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Assign(AssignExpr),
    While(WhileExpr),
    /// Left-to-right sequencing; yields the last result (Void when empty)
    Seq(Vec<Expr>),
    /// Variadic output operation; yields Void
    Print(Vec<Expr>),
}

impl Expr {
    /// Constant integer literal
    pub fn int(n: i64) -> Self {
        Expr::Literal(Literal::Int(n))
    }

    /// Constant string literal
    pub fn string(s: impl Into<String>) -> Self {
        Expr::Literal(Literal::string(s))
    }

    /// Variable reference
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn unary(op: UnaryOp, expr: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            op,
            expr: Box::new(expr),
        })
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn assign(name: impl Into<String>, value: Expr) -> Self {
        Expr::Assign(AssignExpr {
            name: name.into(),
            value: Box::new(value),
        })
    }

    pub fn while_loop(cond: Expr, body: Expr) -> Self {
        Expr::While(WhileExpr {
            cond: Box::new(cond),
            body: Box::new(body),
        })
    }

    pub fn seq(exprs: Vec<Expr>) -> Self {
        Expr::Seq(exprs)
    }

    pub fn print(args: Vec<Expr>) -> Self {
        Expr::Print(args)
    }

    /// Canonical operation name, or `None` for the nullary leaf forms.
    pub fn op_name(&self) -> Option<&'static str> {
        match self {
            Expr::Literal(_) | Expr::Variable(_) => None,
            Expr::Unary(u) => Some(u.op.name()),
            Expr::Binary(b) => Some(b.op.name()),
            Expr::Assign(_) => Some("assign"),
            Expr::While(_) => Some("while"),
            Expr::Seq(_) => Some("seq"),
            Expr::Print(_) => Some("print"),
        }
    }

    /// First owned child, if this node has a fixed-arity first slot.
    ///
    /// Together with [`second_argument`](Self::second_argument) and
    /// [`arguments`](Self::arguments) this lets generic tree-walkers
    /// (pretty-printers, serializers, optimizers) traverse without knowing
    /// concrete operation kinds.
    pub fn first_argument(&self) -> Option<&Expr> {
        match self {
            Expr::Unary(u) => Some(&u.expr),
            Expr::Binary(b) => Some(&b.left),
            Expr::Assign(a) => Some(&a.value),
            Expr::While(w) => Some(&w.cond),
            _ => None,
        }
    }

    /// Second owned child, if this node has a fixed-arity second slot.
    pub fn second_argument(&self) -> Option<&Expr> {
        match self {
            Expr::Binary(b) => Some(&b.right),
            Expr::While(w) => Some(&w.body),
            _ => None,
        }
    }

    /// Ordered children of a variadic node; empty for all other forms.
    pub fn arguments(&self) -> &[Expr] {
        match self {
            Expr::Seq(args) | Expr::Print(args) => args,
            _ => &[],
        }
    }

    /// Deterministic, parenthesized, operator-prefixed rendering, e.g.
    /// `Mul(Ge(a, b), 3)`. Never evaluates anything.
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(Literal::Int(n)) => write!(f, "{}", n),
            Expr::Literal(Literal::Str(s)) => write!(f, "{:?}", s),
            Expr::Literal(Literal::Void) => write!(f, "void"),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Unary(u) => write!(f, "{}({})", u.op.label(), u.expr),
            Expr::Binary(b) => write!(f, "{}({}, {})", b.op.label(), b.left, b.right),
            Expr::Assign(a) => write!(f, "Assign({}, {})", a.name, a.value),
            Expr::While(w) => write!(f, "While({}, {})", w.cond, w.body),
            Expr::Seq(args) => write_variadic(f, "Seq", args),
            Expr::Print(args) => write_variadic(f, "Print", args),
        }
    }
}

fn write_variadic(f: &mut fmt::Formatter<'_>, label: &str, args: &[Expr]) -> fmt::Result {
    write!(f, "{}(", label)?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    write!(f, ")")
}
