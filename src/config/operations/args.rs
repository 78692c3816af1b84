use crate::config::types::CliOptions;
use crate::error::{ShellError, ShellResult};

use std::path::PathBuf;

/// Parse command-line arguments (without the program name).
pub fn parse_args(args: &[String]) -> ShellResult<CliOptions> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => options.help = true,
            "--windowed" => options.windowed = true,
            "--config" => options.config_path = Some(path_value(arg, iter.next())?),
            "--log-file" => options.log_file = Some(path_value(arg, iter.next())?),
            other => return Err(ShellError::Config(format!("Unknown argument: {}", other))),
        }
    }

    Ok(options)
}

fn path_value(flag: &str, value: Option<&String>) -> ShellResult<PathBuf> {
    match value {
        Some(value) if !value.starts_with("--") => Ok(PathBuf::from(value)),
        _ => Err(ShellError::Config(format!("{} requires a path", flag))),
    }
}
