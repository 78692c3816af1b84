use crate::calc::types::{Operator, Outcome};

/// Apply `op` to the two operands.
///
/// Division by exactly zero (either sign) gives `Outcome::Error`; every
/// other case is plain IEEE double arithmetic.
pub fn evaluate(a: f64, b: f64, op: Operator) -> Outcome {
    match op {
        Operator::Add => Outcome::Value(a + b),
        Operator::Sub => Outcome::Value(a - b),
        Operator::Mul => Outcome::Value(a * b),
        Operator::Div if b == 0.0 => Outcome::Error,
        Operator::Div => Outcome::Value(a / b),
    }
}
