pub mod evaluator;
pub mod pure;
pub mod types;

// Re-exports
pub use evaluator::Evaluator;
pub use types::{KEYPAD, KEYPAD_COLUMNS, Key};
