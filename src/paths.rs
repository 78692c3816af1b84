use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Home directory, or the working directory when `HOME` is unset.
pub static PATH_HOME: LazyLock<PathBuf> = LazyLock::new(|| match env::var_os("HOME") {
    Some(home) => PathBuf::from(home),
    None => PathBuf::from("."),
});

pub static PATH_ARCA: LazyLock<PathBuf> = LazyLock::new(|| {
    if let Some(xdg_config_home) = env::var_os("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg_config_home).join("arcadm");
    }
    PATH_HOME.join(".config/arcadm")
});

pub fn default_settings_path() -> PathBuf {
    PATH_ARCA.join("settings.json")
}
