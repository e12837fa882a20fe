//! Configuration management for docport.
//!
//! Parses `docport.toml` configuration files with serde and provides
//! auto-discovery of the config file in parent directories. A missing
//! file falls back to compiled-in defaults, so running docport from a
//! conventionally laid out repository needs no configuration at all.
//!
//! ```toml
//! [docs]
//! source_dir = "docs"
//! ```
//!
//! Paths in the file are relative to the config file's directory; the
//! loaded [`Config`] exposes them resolved to absolute paths.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docport.toml";

/// Default docs source directory, relative to the config location.
const DEFAULT_SOURCE_DIR: &str = "docs";

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            docs_resolved: DocsConfig::default(),
            config_path: None,
        }
        .resolve(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default, Clone)]
pub struct DocsConfig {
    /// Source directory holding the markdown files to port.
    pub source_dir: PathBuf,
}

impl Config {
    /// Load configuration, discovering `docport.toml` in `start_dir` or
    /// any of its ancestors.
    ///
    /// When no config file exists, defaults are resolved against
    /// `start_dir` itself.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a discovered file cannot be read or
    /// parsed. A missing file is not an error.
    pub fn load(start_dir: &Path) -> Result<Self, ConfigError> {
        match discover(start_dir) {
            Some(path) => Self::load_file(&path),
            None => Ok(Self::default_with_base(start_dir)),
        }
    }

    /// Load configuration from an explicit file path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        config.config_path = Some(path.to_path_buf());
        Ok(config.resolve(&base))
    }

    /// Defaults resolved against an explicit base directory.
    #[must_use]
    pub fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            docs_resolved: DocsConfig::default(),
            config_path: None,
        }
        .resolve(base)
    }

    /// Docs source directory, absolute.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.docs_resolved.source_dir
    }

    /// Resolve raw relative paths against the config file's directory.
    fn resolve(mut self, base: &Path) -> Self {
        let source_dir = self
            .docs
            .source_dir
            .as_deref()
            .unwrap_or(DEFAULT_SOURCE_DIR);
        self.docs_resolved = DocsConfig {
            source_dir: base.join(source_dir),
        };
        self
    }
}

/// Find `docport.toml` in `start_dir` or the nearest ancestor.
fn discover(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}
