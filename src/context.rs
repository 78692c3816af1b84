use crate::config::{ArcaConfig, CliOptions, load_cfg, resolve_config};
use crate::logging::init_logging;
use crate::paths::default_settings_path;
use crate::session::DisplayServer;

use tracing::{debug, info, warn};

/// Process-wide state built once in `main` and handed to the shell window.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: ArcaConfig,
    pub display_server: DisplayServer,
}

impl AppContext {
    /// Load settings, start logging and detect the display server.
    pub fn init(cli: &CliOptions) -> Self {
        let settings_path = cli.config_path.clone().unwrap_or_else(default_settings_path);
        let loaded = load_cfg(&settings_path);

        let config = resolve_config(&loaded, cli);

        // Settings decide where the log goes, so report on them afterwards
        init_logging(&config.log_file);
        info!("arcadm v{} starting", env!("CARGO_PKG_VERSION"));
        match loaded {
            Ok(Some(_)) => info!("Loaded settings from {}", settings_path.display()),
            Ok(None) => debug!(
                "No settings at {}, using defaults",
                settings_path.display()
            ),
            Err(e) => warn!("{}, using defaults", e),
        }

        let display_server = DisplayServer::detect();
        info!("Detected display server: {}", display_server);

        AppContext {
            config,
            display_server,
        }
    }

    /// Context without touching the environment or the logger.
    #[cfg(test)]
    pub fn with_config(config: ArcaConfig, display_server: DisplayServer) -> Self {
        AppContext {
            config,
            display_server,
        }
    }
}
