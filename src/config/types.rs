use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// RGB triple as stored in settings.json
pub type Rgb = [u8; 3];

/// How the calculator lays out its sixteen keys
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CalculatorLayout {
    #[default]
    Grid, // 4x4
    Row,
}

/// Shell settings. Read once at startup, never written back.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ArcaConfig {
    pub fullscreen: bool,
    /// Desktop background
    pub background: Rgb,
    pub taskbar_height: f32,
    pub taskbar_color: Rgb,
    pub launcher_label: String,
    pub launcher_width: f32,
    pub menu_color: Rgb,
    /// strftime pattern for the taskbar clock
    pub clock_format: String,
    pub clock_interval_ms: u64,
    /// Start menu entries in display order ("Calculator", "Quit")
    pub menu_entries: Vec<String>,
    pub calculator_layout: CalculatorLayout,
    pub log_file: PathBuf,
}

impl Default for ArcaConfig {
    fn default() -> Self {
        ArcaConfig {
            fullscreen: true,
            background: [0, 128, 255],
            taskbar_height: 40.0,
            taskbar_color: [0x33, 0x33, 0x33],
            launcher_label: "Start".to_string(),
            launcher_width: 100.0,
            menu_color: [0x44, 0x44, 0x44],
            clock_format: "%H:%M:%S".to_string(),
            clock_interval_ms: 1000,
            menu_entries: vec!["Calculator".to_string(), "Quit".to_string()],
            calculator_layout: CalculatorLayout::Grid,
            log_file: PathBuf::from("desktop_env.log"),
        }
    }
}

/// Command-line overrides, applied on top of settings.json
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CliOptions {
    pub help: bool,
    pub windowed: bool,
    pub config_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl CliOptions {
    pub fn apply(&self, config: &mut ArcaConfig) {
        if self.windowed {
            config.fullscreen = false;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = log_file.clone();
        }
    }
}
