//! Configuration management for the REE Explorer.
//!
//! Configuration merges three sources, lowest to highest precedence:
//! - Built-in defaults
//! - A YAML config file (`ree.yaml` next to the working directory, or
//!   wherever `REE_CONFIG` / `--config` points)
//! - Environment variables and command-line flags
//!
//! The configuration is data-directory-centric: the four CSV tables and the
//! `documents/` subdirectory all live under `data_dir`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Main application configuration.
///
/// Holds all global options that affect CLI behavior across commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the four CSV tables and the documents/ subdirectory
    pub data_dir: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Tunables for the retrieval pipeline
    pub retrieval: RetrievalConfig,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Tunables for the TF-IDF retrieval pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Keep at most this many vocabulary terms when fitting
    #[serde(default = "default_max_vocabulary")]
    pub max_vocabulary: usize,

    /// Default number of snippets retrieved per question
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Remove English stopwords during tokenization
    #[serde(default = "default_stopwords")]
    pub stopwords: bool,
}

fn default_max_vocabulary() -> usize {
    2000
}

fn default_top_k() -> usize {
    3
}

fn default_stopwords() -> bool {
    true
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_vocabulary: default_max_vocabulary(),
            top_k: default_top_k(),
            stopwords: default_stopwords(),
        }
    }
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    data: Option<DataConfig>,
    retrieval: Option<RetrievalConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DataConfig {
    dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            config_file: None,
            retrieval: RetrievalConfig::default(),
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and defaults.
    ///
    /// Environment variables:
    /// - `REE_DATA_DIR`: Override data directory
    /// - `REE_CONFIG`: Path to config file
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// A config file at the `REE_CONFIG` path (or `ree.yaml` in the working
    /// directory) is merged when present. Whether the data directory exists
    /// is not checked here: a missing table surfaces as `DataUnavailable`
    /// when the datasets are loaded.
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(data_dir) = std::env::var("REE_DATA_DIR") {
            config.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(config_file) = std::env::var("REE_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        let config_path = if let Some(ref cf) = config.config_file {
            cf.clone()
        } else {
            PathBuf::from("ree.yaml")
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        // Environment variables override YAML config
        config.log_level = std::env::var("RUST_LOG").ok().or(config.log_level);

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(data) = config_file.data {
            if let Some(dir) = data.dir {
                result.data_dir = PathBuf::from(dir);
            }
        }

        if let Some(retrieval) = config_file.retrieval {
            result.retrieval = retrieval;
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over environment variables and the config
    /// file. An explicit `--config` path is merged here, since `load()` only
    /// sees the environment.
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        config_file: Option<PathBuf>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> AppResult<Self> {
        if let Some(config_file) = config_file {
            if config_file.exists() {
                self = self.merge_yaml(&config_file)?;
            }
            self.config_file = Some(config_file);
        }

        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        Ok(self)
    }

    /// Path to the free-text documents directory.
    pub fn documents_dir(&self) -> PathBuf {
        self.data_dir.join("documents")
    }
}
