//! Single-pending-operand calculator state machine
//!
//! Each operator press stores the typed number as the left operand; each
//! "=" applies that one pending operation to the newly typed number. There
//! is no precedence and no chaining.

use crate::calc::pure::{evaluate, parse_operand};
use crate::calc::types::{CalcError, Key, Operator};

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluator {
    pending_input: String,
    first_operand: Option<f64>,
    operation: Option<Operator>,
    display: String,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            pending_input: String::new(),
            first_operand: None,
            operation: None,
            display: "0".to_string(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    #[cfg(test)]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// Handle one button press.
    ///
    /// On error the state is left exactly as it was before the press.
    pub fn press(&mut self, key: Key) -> Result<(), CalcError> {
        match key {
            Key::Digit(d) => {
                let c = char::from_digit(u32::from(d), 10).ok_or(CalcError::InvalidDigit(d))?;
                self.push_input(c);
            }
            Key::Point => self.push_input('.'),
            Key::Op(op) => {
                let operand = if self.pending_input.is_empty() {
                    0.0
                } else {
                    parse_operand(&self.pending_input)?
                };
                self.first_operand = Some(operand);
                self.operation = Some(op);
                self.pending_input.clear();
            }
            Key::Equals => {
                let Some(op) = self.operation else {
                    return Ok(());
                };
                if self.pending_input.is_empty() {
                    return Ok(());
                }

                let rhs = parse_operand(&self.pending_input)?;
                let lhs = self.first_operand.unwrap_or(0.0);
                let result = evaluate(lhs, rhs, op).to_string();

                self.display = result.clone();
                self.pending_input = result;
                self.operation = None;
            }
        }
        Ok(())
    }

    fn push_input(&mut self, c: char) {
        self.pending_input.push(c);
        self.display = self.pending_input.clone();
    }
}
