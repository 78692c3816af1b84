mod args;
mod io;
mod resolve;

pub use args::parse_args;
pub use io::load_cfg;
pub use resolve::resolve_config;
