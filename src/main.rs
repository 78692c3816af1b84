mod app;
mod calc;
mod config;
mod context;
mod error;
mod logging;
mod paths;
mod session;
mod shell;

use crate::app::ArcaDesktop;
use crate::config::parse_args;
use crate::context::AppContext;

use std::process::ExitCode;
use tracing::{error, info};

const WINDOW_TITLE: &str = "Arca Desktop Manager";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("[arcadm] {}", e);
            eprintln!("{}", USAGE_TEXT);
            return ExitCode::from(2);
        }
    };

    if cli.help {
        println!("{}", USAGE_TEXT);
        return ExitCode::SUCCESS;
    }

    let context = AppContext::init(&cli);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([320.0, 240.0])
            .with_fullscreen(context.config.fullscreen),
        ..Default::default()
    };

    info!("Starting event loop");

    let result = eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| {
            crate::app::theme::apply_theme(&cc.egui_ctx);
            Ok(Box::new(ArcaDesktop::new(context)))
        }),
    );

    match result {
        Ok(()) => {
            info!("Shell window closed, shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Event loop failed: {}", e);
            eprintln!("[arcadm] Event loop failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

static USAGE_TEXT: &str = r#"
Usage: arcadm [OPTIONS]

Options:
    --windowed            Start in a normal window instead of full screen
    --config <path>       Read settings from <path> instead of ~/.config/arcadm/settings.json
    --log-file <path>     Append log lines to <path> (default: desktop_env.log)
    --help                Show this message
"#;
