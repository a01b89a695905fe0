// Tracing setup. The terminal belongs to the TUI, so logs go to a file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

use ffdash_core::config::LoggingConfig;
use ffdash_core::AppKind;

/// Directory the log file is written to.
///
/// Order: configured directory, the platform data directory, `./logs`.
pub fn log_dir(config: &LoggingConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &config.directory {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dirs) = ProjectDirs::from("", "", "ffdash") {
        return Ok(dirs.data_local_dir().join("logs"));
    }
    Ok(std::env::current_dir()?.join("logs"))
}

pub fn log_file_name(kind: AppKind) -> String {
    format!("ffdash-{}.log", kind.slug())
}

/// `RUST_LOG` wins over the configured filter.
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

pub fn init_tracing(config: &LoggingConfig, kind: AppKind) -> anyhow::Result<()> {
    let log_dir = log_dir(config)?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = create_log_file(&log_dir, kind)?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter(config))
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

fn create_log_file(dir: &Path, kind: AppKind) -> anyhow::Result<std::fs::File> {
    let path = dir.join(log_file_name(kind));
    std::fs::File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))
}
