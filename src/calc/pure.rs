pub mod evaluate;
pub mod operand;

// Re-exports
pub use evaluate::evaluate;
pub use operand::parse_operand;
