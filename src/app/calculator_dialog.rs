//! Calculator dialogs
//!
//! Each dialog is an egui window drawn from the shell's `CalculatorWindow`
//! state. Button clicks become `ShellEvent::CalculatorKey` events.

use crate::app::app::ArcaDesktop;
use crate::app::theme;
use crate::calc::{KEYPAD, KEYPAD_COLUMNS, Key};
use crate::config::CalculatorLayout;
use crate::shell::geometry::centered;
use crate::shell::{CalculatorId, CalculatorWindow, ShellEvent};

use eframe::egui::{self, RichText, Ui};

const DIALOG_SIZE: egui::Vec2 = egui::Vec2::new(300.0, 400.0);
const KEY_SIZE: f32 = 60.0;
const CASCADE_STEP: f32 = 24.0;

impl ArcaDesktop {
    pub fn display_calculators(&mut self, ctx: &egui::Context) {
        let layout = self.options.calculator_layout;
        let mut events = Vec::new();
        for window in self.shell.calculators() {
            display_calculator(ctx, window, layout, &mut events);
        }
        self.pending_events.extend(events);
    }
}

fn display_calculator(
    ctx: &egui::Context,
    window: &CalculatorWindow,
    layout: CalculatorLayout,
    events: &mut Vec<ShellEvent>,
) {
    let id = window.id;
    let screen = ctx.screen_rect();
    let start = centered(DIALOG_SIZE.x, DIALOG_SIZE.y, screen.width(), screen.height());
    let offset = CASCADE_STEP * (id % 8) as f32;

    let mut open = true;
    let shown = egui::Window::new("Calculator")
        .id(egui::Id::new(("calculator", id)))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .fixed_size(DIALOG_SIZE)
        .default_pos(egui::pos2(start.x + offset, start.y + offset))
        .show(ctx, |ui| {
            let evaluator = &window.evaluator;
            let pending = match (evaluator.first_operand(), evaluator.operation()) {
                (Some(lhs), Some(op)) => format!("{} {}", lhs, op.label()),
                _ => String::new(),
            };
            display_readout(ui, &pending, evaluator.display());
            ui.add_space(8.0);
            match layout {
                CalculatorLayout::Grid => keypad_grid(ui, id, events),
                CalculatorLayout::Row => keypad_row(ui, id, events),
            }
        });

    if window.raise_pending {
        if let Some(shown) = shown {
            ctx.move_to_top(shown.response.layer_id);
            shown.response.request_focus();
        }
        events.push(ShellEvent::CalculatorShown(id));
    }
    if !open {
        events.push(ShellEvent::CalculatorClosed(id));
    }
}

/// Right-aligned display, with the pending operation in small print above
fn display_readout(ui: &mut Ui, pending: &str, text: &str) {
    egui::Frame::NONE
        .fill(theme::DISPLAY_BG)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                ui.label(RichText::new(pending).small().color(egui::Color32::GRAY));
                ui.label(RichText::new(text).size(24.0).color(theme::DISPLAY_TEXT));
            });
        });
}

fn keypad_grid(ui: &mut Ui, id: CalculatorId, events: &mut Vec<ShellEvent>) {
    egui::Grid::new(("calculator_keys", id))
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            for row in KEYPAD.chunks(KEYPAD_COLUMNS) {
                for &key in row {
                    key_button(ui, id, key, events);
                }
                ui.end_row();
            }
        });
}

// Every key on one line
fn keypad_row(ui: &mut Ui, id: CalculatorId, events: &mut Vec<ShellEvent>) {
    egui::ScrollArea::horizontal().show(ui, |ui| {
        ui.horizontal(|ui| {
            for &key in KEYPAD.iter() {
                key_button(ui, id, key, events);
            }
        });
    });
}

fn key_button(ui: &mut Ui, id: CalculatorId, key: Key, events: &mut Vec<ShellEvent>) {
    let fill = match key {
        Key::Op(_) | Key::Equals => theme::OPERATOR_BG,
        Key::Digit(_) | Key::Point => theme::BUTTON_BG,
    };
    let button = egui::Button::new(RichText::new(key.label()).size(20.0).color(theme::TEXT_PRIMARY))
        .fill(fill);
    if ui.add_sized([KEY_SIZE, KEY_SIZE], button).clicked() {
        events.push(ShellEvent::CalculatorKey { id, key });
    }
}
