//! The operation vocabulary: log entries and the symbol table.
//!
//! Operator kinds are fixed enumerations dispatched by exhaustive match
//! rather than closure-valued dictionary entries, so the evaluator's replay
//! switch is checked at compile time.

use serde::{Deserialize, Serialize};

/// A unary operator applied to the current operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Sqrt,
    Cos,
    Sin,
    Negate,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Sqrt => "√",
            UnaryOp::Cos => "cos",
            UnaryOp::Sin => "sin",
            UnaryOp::Negate => "±",
        }
    }

    pub fn apply(self, x: f64) -> f64 {
        match self {
            UnaryOp::Sqrt => x.sqrt(),
            UnaryOp::Cos => x.cos(),
            UnaryOp::Sin => x.sin(),
            UnaryOp::Negate => -x,
        }
    }

    /// Render the operand's visual wrapped in this operator, e.g. `√( 5 )`.
    pub fn render(self, operand: &str) -> String {
        format!("{}( {} )", self.symbol(), operand)
    }
}

/// A binary operator combining two operands left-to-right.
///
/// Division follows IEEE float semantics: dividing by zero yields an
/// infinity or NaN, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "×",
            BinaryOp::Div => "÷",
            BinaryOp::Pow => "^",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Pow => lhs.powf(rhs),
        }
    }
}

/// One entry in the formula log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// A literal value when `value` is `Some`, otherwise a named variable
    /// reference resolved against the host's variables at evaluation time.
    Constant { value: Option<f64>, label: String },
    Unary(UnaryOp),
    Binary(BinaryOp),
    Equals,
}

impl Operation {
    /// Resolve a button symbol to its operation. Unknown symbols yield `None`.
    pub fn from_symbol(symbol: &str) -> Option<Operation> {
        let operation = match symbol {
            "π" => Operation::Constant {
                value: Some(std::f64::consts::PI),
                label: symbol.to_string(),
            },
            "e" => Operation::Constant {
                value: Some(std::f64::consts::E),
                label: symbol.to_string(),
            },
            "√" => Operation::Unary(UnaryOp::Sqrt),
            "cos" => Operation::Unary(UnaryOp::Cos),
            "sin" => Operation::Unary(UnaryOp::Sin),
            "±" => Operation::Unary(UnaryOp::Negate),
            "+" => Operation::Binary(BinaryOp::Add),
            "-" => Operation::Binary(BinaryOp::Sub),
            "×" => Operation::Binary(BinaryOp::Mul),
            "÷" => Operation::Binary(BinaryOp::Div),
            "^" => Operation::Binary(BinaryOp::Pow),
            "=" => Operation::Equals,
            _ => return None,
        };
        Some(operation)
    }
}
