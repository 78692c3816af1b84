use crate::app::app::ArcaDesktop;
use crate::app::theme;
use crate::shell::{Feature, Point, ShellEvent};

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

impl ArcaDesktop {
    /// Launcher on the left, clock on the right
    pub fn display_taskbar(&mut self, ui: &mut Ui) {
        let button_height = (self.options.taskbar_height - 8.0).max(0.0);
        let menu_open = self.shell.menu().is_some_and(|menu| menu.is_open());

        ui.horizontal_centered(|ui| {
            let mut launcher = ui.add_sized(
                [self.options.launcher_width, button_height],
                egui::Button::new(
                    RichText::new(format!("{} {}", icons::LIST, self.options.launcher_label))
                        .color(theme::TEXT_PRIMARY),
                )
                .fill(theme::BUTTON_BG)
                .selected(menu_open),
            );
            if self.shell.is_degraded(Feature::StartMenu) {
                launcher = launcher.on_hover_text("Start menu unavailable, see the log");
            }
            self.launcher_hovered = launcher.contains_pointer();

            if launcher.clicked() {
                let corner = launcher.rect.left_bottom();
                let anchor = self
                    .window_rect(ui.ctx())
                    .to_global(Point::new(corner.x, corner.y));
                self.pending_events
                    .push(ShellEvent::LauncherClicked { anchor });
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(self.shell.clock_text())
                        .monospace()
                        .color(theme::TEXT_PRIMARY),
                );
            });
        });
    }
}
