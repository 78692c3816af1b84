//! Helper methods for ArcaDesktop

use super::ArcaDesktop;
use crate::shell::ScreenRect;

use eframe::egui;
use tracing::debug;

impl ArcaDesktop {
    /// Cover the screen and move the window to its origin. Skipped (and
    /// logged) when the monitor size isn't available.
    pub(crate) fn apply_screen_geometry(&mut self, ctx: &egui::Context) {
        if !self.options.fullscreen {
            debug!("Windowed mode, leaving window geometry alone");
            return;
        }

        let screen_size = ctx.input(|i| i.viewport().monitor_size).map(|s| (s.x, s.y));
        if let Some(rect) = self.shell.apply_screen_size(screen_size) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(true));
            ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
                rect.x, rect.y,
            )));
        }
    }

    /// Where this window's content sits on screen
    pub fn window_rect(&self, ctx: &egui::Context) -> ScreenRect {
        let inner = ctx.input(|i| i.viewport().inner_rect);
        if let Some(r) = inner {
            return ScreenRect {
                x: r.min.x,
                y: r.min.y,
                width: r.width(),
                height: r.height(),
            };
        }

        self.shell.geometry().unwrap_or_else(|| {
            let r = ctx.screen_rect();
            ScreenRect {
                x: 0.0,
                y: 0.0,
                width: r.width(),
                height: r.height(),
            }
        })
    }
}
