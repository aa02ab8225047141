//! Tracing subscriber setup
//!
//! Logs go to a file, never stdout: the terminal itself is the UI.
//! Filtering honors `RUST_LOG` with an INFO default.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber with file logging.
pub fn init_global(log_file_path: &Path) -> anyhow::Result<()> {
    let log_file = File::create(log_file_path)?;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let fmt_layer = fmt::layer().with_writer(Arc::new(log_file)).with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .init();

    Ok(())
}

/// Default log location: the system temp dir, one file per process.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(format!("folio-{}.log", std::process::id()))
}
