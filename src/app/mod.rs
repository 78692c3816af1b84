mod app;
mod app_panels;
mod calculator_dialog;
pub mod theme;

pub use app::ArcaDesktop;
