use crate::calc::types::CalcError;

/// Numeric value of the typed input.
///
/// The keypad allows inputs like "1.2.3", and a failed division leaves
/// "Error" in the input, so this can fail.
pub fn parse_operand(input: &str) -> Result<f64, CalcError> {
    input
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(input.to_string()))
}
