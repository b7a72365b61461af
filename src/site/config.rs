//! Generator configuration
//!
//! A [`SiteConfig`] is an immutable snapshot assembled from three layers:
//! built-in defaults, an optional `site.toml` in the working directory,
//! and command-line overrides. A fresh value is constructed on every call;
//! no shared default record is ever mutated in place.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Resolved directory layout for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Source pages
    pub data_dir: PathBuf,
    /// Where the generated site is written
    pub output_dir: PathBuf,
    /// Template fragment files (`<name>.html`)
    pub template_dir: PathBuf,
    /// Static assets copied verbatim into the output root, if configured
    pub static_dir: Option<PathBuf>,
}

/// Directory overrides read from `site.toml`
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub data_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub template_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

/// Directory overrides from command-line flags
#[derive(Debug, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub template_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

impl FileConfig {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `site.toml` from `dir` if present; absent is an empty layer.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join("site.toml");
        if path.is_file() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }
}

impl SiteConfig {
    /// Assemble a snapshot: flags beat the config file, which beats the
    /// built-in defaults (`data`, `output`, `templates`, no static dir).
    pub fn resolve(file: FileConfig, flags: Overrides) -> Self {
        Self {
            data_dir: flags
                .data_dir
                .or(file.data_dir)
                .unwrap_or_else(|| PathBuf::from("data")),
            output_dir: flags
                .output_dir
                .or(file.output_dir)
                .unwrap_or_else(|| PathBuf::from("output")),
            template_dir: flags
                .template_dir
                .or(file.template_dir)
                .unwrap_or_else(|| PathBuf::from("templates")),
            static_dir: flags.static_dir.or(file.static_dir),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::resolve(FileConfig::default(), Overrides::default())
    }
}
