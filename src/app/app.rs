// Shell window: owns the shell state and draws it every frame

mod eframe_impl;
mod helpers;

use crate::config::ArcaConfig;
use crate::context::AppContext;
use crate::shell::{Shell, ShellEvent};

use std::time::Instant;

pub struct ArcaDesktop {
    pub shell: Shell,
    pub options: ArcaConfig,

    /// Events produced while drawing, handled once the frame is laid out
    pub pending_events: Vec<ShellEvent>,
    pub launcher_hovered: bool,
    pub geometry_checked: bool,
}

impl ArcaDesktop {
    pub fn new(context: AppContext) -> Self {
        let shell = Shell::new(&context, Instant::now());
        ArcaDesktop {
            shell,
            options: context.config,
            pending_events: Vec::new(),
            launcher_hovered: false,
            geometry_checked: false,
        }
    }
}
