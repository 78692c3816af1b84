//! eframe::App implementation for ArcaDesktop

use super::ArcaDesktop;
use crate::app::theme;
use crate::shell::ShellEvent;

use eframe::egui;
use std::time::Instant;
use tracing::info;

impl eframe::App for ArcaDesktop {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Screen size is only known once the window exists
        if !self.geometry_checked {
            self.geometry_checked = true;
            self.apply_screen_geometry(ctx);
        }

        self.shell.dispatch(ShellEvent::Tick(Instant::now()));

        egui::TopBottomPanel::bottom("taskbar")
            .exact_height(self.options.taskbar_height)
            .show_separator_line(false)
            .frame(
                egui::Frame::NONE
                    .fill(theme::rgb(self.options.taskbar_color))
                    .inner_margin(egui::Margin::symmetric(5, 0)),
            )
            .show(ctx, |ui| {
                self.display_taskbar(ui);
            });

        // Desktop area
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::rgb(self.options.background)))
            .show(ctx, |_ui| {});

        self.display_start_menu(ctx);
        self.display_calculators(ctx);

        for event in std::mem::take(&mut self.pending_events) {
            self.shell.dispatch(event);
        }

        if self.shell.take_quit_request() {
            info!("Closing shell window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if let Some(wait) = self.shell.until_next_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
