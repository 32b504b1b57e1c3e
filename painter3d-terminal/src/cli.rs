use std::path::PathBuf;

use clap::ValueHint;

/// Environment variable holding the log filter
pub const LOG_FILTER_ENV: &str = "PAINTER3D_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn,painter3d_core=info,painter3d_terminal=info";

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Wavefront OBJ file to display instead of the built-in cube
    #[arg(value_hint = ValueHint::FilePath)]
    pub mesh: Option<PathBuf>,
}

/// Send log output to stderr, filtered by `PAINTER3D_LOG`
pub fn initialize_tracing() {
    let filter = std::env::var(LOG_FILTER_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_owned());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .compact()
        .init();
}
