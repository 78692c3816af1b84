use crate::shell::Feature;

/// Failures the shell can recover from by logging and skipping the
/// affected feature or event.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Failed to initialize {feature}: {reason}")]
    Init { feature: Feature, reason: String },

    #[error("{handler} handler failed: {reason}")]
    Handler {
        handler: &'static str,
        reason: String,
    },

    #[error("Invalid settings: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    pub fn init(feature: Feature, reason: impl Into<String>) -> Self {
        ShellError::Init {
            feature,
            reason: reason.into(),
        }
    }

    pub fn handler(handler: &'static str, reason: impl ToString) -> Self {
        ShellError::Handler {
            handler,
            reason: reason.to_string(),
        }
    }
}

pub type ShellResult<T> = Result<T, ShellError>;
