//! Calculator keys, operators and results

use std::fmt;

/// Binary operators offered by the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Glyph shown on the key
    pub fn label(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "\u{2212}",
            Operator::Mul => "\u{00d7}",
            Operator::Div => "\u{00f7}",
        }
    }
}

/// One calculator button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Point,
    Op(Operator),
    Equals,
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Key {
    pub fn label(self) -> &'static str {
        match self {
            Key::Digit(d) => DIGIT_LABELS.get(d as usize).copied().unwrap_or("?"),
            Key::Point => ".",
            Key::Op(op) => op.label(),
            Key::Equals => "=",
        }
    }
}

/// Keys in display order, four per row.
pub const KEYPAD: [Key; 16] = [
    Key::Digit(7),
    Key::Digit(8),
    Key::Digit(9),
    Key::Op(Operator::Div),
    Key::Digit(4),
    Key::Digit(5),
    Key::Digit(6),
    Key::Op(Operator::Mul),
    Key::Digit(1),
    Key::Digit(2),
    Key::Digit(3),
    Key::Op(Operator::Sub),
    Key::Digit(0),
    Key::Point,
    Key::Equals,
    Key::Op(Operator::Add),
];

pub const KEYPAD_COLUMNS: usize = 4;

/// Result of one binary operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Value(f64),
    /// Division by exactly zero
    Error,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(v) => write!(f, "{}", v),
            Outcome::Error => f.write_str("Error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("Not a number: {0:?}")]
    InvalidNumber(String),

    #[error("No such digit: {0}")]
    InvalidDigit(u8),
}
