use crate::config::types::{ArcaConfig, CliOptions};
use crate::error::ShellResult;

/// Settings to run with: the loaded file if it parsed, defaults otherwise,
/// with command-line overrides applied on top either way.
pub fn resolve_config(loaded: &ShellResult<Option<ArcaConfig>>, cli: &CliOptions) -> ArcaConfig {
    let mut config = match loaded {
        Ok(Some(config)) => config.clone(),
        Ok(None) | Err(_) => ArcaConfig::default(),
    };
    cli.apply(&mut config);
    config
}
