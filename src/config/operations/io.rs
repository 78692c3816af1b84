use crate::config::types::ArcaConfig;
use crate::error::{ShellError, ShellResult};

use std::io::ErrorKind;
use std::path::Path;

/// Parse settings from JSON text. Missing fields take their defaults.
pub fn parse_cfg(text: &str) -> ShellResult<ArcaConfig> {
    serde_json::from_str(text).map_err(|e| ShellError::Config(e.to_string()))
}

/// Load settings from `path`.
///
/// Returns `Ok(None)` when the file does not exist, so callers can tell
/// "no settings" apart from "broken settings".
pub fn load_cfg(path: &Path) -> ShellResult<Option<ArcaConfig>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let config = parse_cfg(&text).map_err(|e| match e {
        ShellError::Config(reason) => ShellError::Config(format!("{}: {}", path.display(), reason)),
        other => other,
    })?;
    Ok(Some(config))
}
