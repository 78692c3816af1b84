use crate::app::app::ArcaDesktop;
use crate::app::theme;
use crate::shell::{MenuEntry, ShellEvent};

use eframe::egui::{self, RichText};
use egui_phosphor::regular as icons;

const MENU_WIDTH: f32 = 160.0;

fn entry_icon(entry: MenuEntry) -> &'static str {
    match entry {
        MenuEntry::Calculator => icons::CALCULATOR,
        MenuEntry::Quit => icons::POWER,
    }
}

impl ArcaDesktop {
    /// Popup menu at its anchor, if open. A press anywhere else closes it.
    pub fn display_start_menu(&mut self, ctx: &egui::Context) {
        let Some(menu) = self.shell.menu() else {
            return;
        };
        let Some(anchor) = menu.anchor() else {
            return;
        };
        let entries = menu.entries().to_vec();
        let local = self.window_rect(ctx).to_local(anchor);
        let fill = theme::rgb(self.options.menu_color);

        let mut selected = None;
        let area = egui::Area::new(egui::Id::new("start_menu"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(local.x, local.y))
            .constrain(true)
            .show(ctx, |ui| {
                egui::Frame::menu(ui.style()).fill(fill).show(ui, |ui| {
                    ui.set_min_width(MENU_WIDTH);
                    for entry in entries {
                        let text = RichText::new(format!("{} {}", entry_icon(entry), entry.label()))
                            .color(theme::TEXT_PRIMARY);
                        let button = egui::Button::new(text)
                            .frame(false)
                            .min_size(egui::vec2(MENU_WIDTH, 26.0));
                        if ui.add(button).clicked() {
                            selected = Some(entry);
                        }
                    }
                });
            });

        if let Some(entry) = selected {
            self.pending_events.push(ShellEvent::MenuSelected(entry));
        } else if ctx.input(|i| i.pointer.any_pressed())
            && !area.response.contains_pointer()
            && !self.launcher_hovered
        {
            self.pending_events.push(ShellEvent::MenuDismissed);
        }
    }
}
