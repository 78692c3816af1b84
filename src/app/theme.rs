use crate::config::Rgb;

use eframe::egui::{self, Color32};

pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const BUTTON_BG: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
pub const OPERATOR_BG: Color32 = Color32::from_rgb(0x6a, 0x5a, 0x3a);
pub const WINDOW_BG: Color32 = Color32::from_rgb(0x2b, 0x2b, 0x2b);
pub const DISPLAY_BG: Color32 = Color32::WHITE;
pub const DISPLAY_TEXT: Color32 = Color32::BLACK;

pub fn rgb(c: Rgb) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.window_fill = WINDOW_BG;
    visuals.panel_fill = WINDOW_BG;
    visuals.widgets.inactive.weak_bg_fill = BUTTON_BG;
    ctx.set_visuals(visuals);
}
