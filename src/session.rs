use std::env;
use std::fmt;

/// Display server the shell is running under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServer {
    Wayland,
    X11,
    Unknown,
}

impl DisplayServer {
    /// Detect from `XDG_SESSION_TYPE`, falling back to `WAYLAND_DISPLAY`.
    pub fn detect() -> Self {
        let session_type = env::var("XDG_SESSION_TYPE").ok();
        let wayland_display = env::var_os("WAYLAND_DISPLAY").is_some();
        Self::from_env(session_type.as_deref(), wayland_display)
    }

    pub fn from_env(session_type: Option<&str>, wayland_display: bool) -> Self {
        match session_type.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("wayland") => DisplayServer::Wayland,
            Some("x11") => DisplayServer::X11,
            Some("") | None if wayland_display => DisplayServer::Wayland,
            _ => DisplayServer::Unknown,
        }
    }

    pub fn is_wayland(self) -> bool {
        self == DisplayServer::Wayland
    }
}

impl fmt::Display for DisplayServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplayServer::Wayland => "wayland",
            DisplayServer::X11 => "x11",
            DisplayServer::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
