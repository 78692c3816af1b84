pub mod operations;
pub mod types;

// Re-export types
pub use types::{ArcaConfig, CalculatorLayout, CliOptions, Rgb};

// Re-export operations
pub use operations::{load_cfg, parse_args, resolve_config};
