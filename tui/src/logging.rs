use std::{
    fs::{self, File},
    path::Path,
    sync::Arc,
};

use anyhow::Context;
use tracing::Level;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Initialize logging into the given file.
///
/// `RUST_LOG` directives are honoured on top of `level`. Nothing is written to stdout since the
/// terminal belongs to the UI.
pub fn init(file: &Path, level: Level) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Ensure log directory exists
    if let Some(parent) = file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("could not create log directory {}", parent.display()))?;
        }
    }

    let log_file = File::create(file)
        .with_context(|| format!("could not create log file {}", file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .context("could not install the log subscriber")?;

    Ok(())
}
