// Configuration loading and parsing (config/dashboard.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::app::AppKind;
use crate::summary::MetricSpec;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

/// Name of the config file inside `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "dashboard.toml";

// ---------------------------------------------------------------------------
// dashboard.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub stats: AppSection,
    pub draft: AppSection,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Per-dashboard settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
    /// CSV file to load, relative to the working directory.
    pub data_path: String,
    /// Summary metrics. Empty means the app's built-in defaults.
    #[serde(default)]
    pub summary: Vec<MetricSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places for numeric cells and summary statistics.
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Rows moved by PageUp/PageDown.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_precision() -> u32 {
    2
}

fn default_page_size() -> usize {
    20
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            precision: default_precision(),
            page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log directory. When unset the platform data directory is used.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_log_filter() -> String {
    "ffdash=info,warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: default_log_filter(),
            directory: None,
        }
    }
}

impl Config {
    pub fn section(&self, kind: AppKind) -> &AppSection {
        match kind {
            AppKind::Stats => &self.stats,
            AppKind::Draft => &self.draft,
        }
    }

    /// Summary specs for `kind`, falling back to the built-in defaults.
    pub fn summary_specs(&self, kind: AppKind) -> Vec<MetricSpec> {
        let configured = &self.section(kind).summary;
        if !configured.is_empty() {
            return configured.clone();
        }
        match kind {
            AppKind::Stats => MetricSpec::stats_defaults(),
            AppKind::Draft => MetricSpec::draft_defaults(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/dashboard.toml` relative to `base_dir`.
///
/// This does not seed from defaults; prefer `load_config()` which does.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;
    validate(&config)?;
    Ok(config)
}

/// Seed `config/dashboard.toml` from `defaults/dashboard.toml` on first run.
///
/// Returns the path written, or `None` when the config file already exists.
/// An existing config file is never overwritten, even if another process
/// creates it between the check and the copy.
pub fn ensure_config_file(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.exists() {
        return Ok(None);
    }

    let source = base_dir.join("defaults").join(CONFIG_FILE);
    let content = std::fs::read(&source).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!(
            "no {} and no readable {} ({e}); run from the project root",
            target.display(),
            source.display()
        ),
    })?;

    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to create {}: {e}", dir.display()),
        })?;
    }

    let mut dest = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
    {
        Ok(dest) => dest,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(None),
        Err(e) => {
            return Err(ConfigError::DefaultsCopyError {
                message: format!("failed to create {}: {e}", target.display()),
            })
        }
    };
    std::io::Write::write_all(&mut dest, &content).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to write {}: {e}", target.display()),
    })?;
    Ok(Some(target))
}

/// Loads config relative to the current working directory, seeding
/// `config/dashboard.toml` from `defaults/` first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_file(&cwd)?;
    load_config_from(&cwd)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    for kind in [AppKind::Stats, AppKind::Draft] {
        let section = config.section(kind);
        if section.data_path.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: format!("{kind}.data_path"),
                message: "must not be empty".into(),
            });
        }
        for spec in &section.summary {
            if spec.aggregates.is_empty() {
                return Err(ConfigError::ValidationError {
                    field: format!("{kind}.summary.{}", spec.metric.key()),
                    message: "must list at least one aggregate".into(),
                });
            }
        }
    }

    if config.display.precision > 6 {
        return Err(ConfigError::ValidationError {
            field: "display.precision".into(),
            message: format!("must be at most 6, got {}", config.display.precision),
        });
    }

    if config.display.page_size == 0 {
        return Err(ConfigError::ValidationError {
            field: "display.page_size".into(),
            message: "must be > 0".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
