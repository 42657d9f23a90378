//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::{Config, ConfigError, CONFIG_FILE_NAMES};

/// On-disk format of a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension. Anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl Config {
    /// Parse a descriptor from a string.
    ///
    /// Syntax errors and schema errors are reported separately: the text is
    /// first parsed into a generic document, then mapped onto `Config`.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Toml => {
                let table: toml::Table =
                    toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
                toml::Value::Table(table)
                    .try_into()
                    .map_err(|e: toml::de::Error| ConfigError::SchemaViolation(e.to_string()))
            }
            ConfigFormat::Json => {
                let value: serde_json::Value = serde_json::from_str(content)
                    .map_err(|e| ConfigError::Parse(e.to_string()))?;
                serde_json::from_value(value)
                    .map_err(|e| ConfigError::SchemaViolation(e.to_string()))
            }
        }
    }

    /// Serialize the descriptor in the given format
    pub fn to_string_as(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).with_context(|| "Failed to serialize config")
            }
            ConfigFormat::Json => {
                serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")
            }
        }
    }

    /// Load configuration from a file. The format follows the extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::parse(&content, ConfigFormat::from_path(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Find the config file in a project root, if any
    pub fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Load configuration from a project root.
    /// Falls back to the default descriptor when no config file exists.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::from_file(&path),
            None => {
                tracing::debug!(
                    "No config file in {}, using default descriptor",
                    dir.display()
                );
                Ok(Self::with_defaults())
            }
        }
    }

    /// Load, validate and log a descriptor in one step.
    ///
    /// `explicit` overrides discovery in `root`.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => Self::from_dir(root)?,
        };

        config.validate()?;

        if config.has_plugins() {
            tracing::warn!(
                "Ignoring {} configured plugin(s): {}",
                config.plugins.len(),
                config.plugins.join(", ")
            );
        }

        Ok(config)
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// The format follows the extension.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = self.to_string_as(ConfigFormat::from_path(path))?;
        write_atomic(path, &content)
    }
}

/// Replace `path` with `content` via temp file + rename.
///
/// The parent directory is created if needed and an exclusive lock guards
/// against concurrent writers. The lock file is never removed, so every
/// writer locks the same inode.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
    }

    // Lock lives next to the config so the rename below never touches it
    let lock_path = sibling_with_suffix(path, "lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

    lock_file
        .lock_exclusive()
        .with_context(|| "Failed to acquire config lock")?;

    let temp_path = sibling_with_suffix(path, "tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write config content")?;

    temp_file
        .sync_all()
        .with_context(|| "Failed to sync config file")?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

    // Releases the lock
    drop(lock_file);

    Ok(())
}

/// `windscan.toml` -> `windscan.toml.<suffix>`
fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
