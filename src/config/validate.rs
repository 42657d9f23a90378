//! Load-time validation of a descriptor

use std::collections::BTreeMap;
use std::path::Path;

use globset::{Glob, GlobBuilder};

use super::{Config, ConfigError};
use crate::HexColor;

/// Strip leading `./` segments so a glob can be matched against
/// root-relative paths
pub fn normalize_glob(pattern: &str) -> &str {
    let mut pattern = pattern.trim();
    while let Some(rest) = pattern.strip_prefix("./") {
        pattern = rest.trim_start_matches('/');
    }
    pattern
}

/// Compile a content glob the way the scanner matches it.
///
/// `*` does not cross directories, as in shell globbing.
pub fn compile_glob(pattern: &str) -> Result<Glob, ConfigError> {
    GlobBuilder::new(normalize_glob(pattern))
        .literal_separator(true)
        .build()
        .map_err(|e| ConfigError::malformed_glob(pattern, e.kind().to_string()))
}

/// Whether a glob names a hidden (dot-prefixed) path segment
pub fn names_hidden_segment(pattern: &str) -> bool {
    normalize_glob(pattern)
        .split(['/', '\\'])
        .any(|segment| segment.starts_with('.') && segment != "." && segment != "..")
}

/// Check a single content glob
pub fn validate_glob(pattern: &str) -> Result<(), ConfigError> {
    let normalized = normalize_glob(pattern);

    if normalized.is_empty() || normalized == "." {
        return Err(ConfigError::malformed_glob(pattern, "empty pattern"));
    }

    if normalized.starts_with('/') || Path::new(normalized).is_absolute() {
        return Err(ConfigError::malformed_glob(
            pattern,
            "patterns must be relative to the project root",
        ));
    }

    if normalized.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(ConfigError::malformed_glob(
            pattern,
            "'..' segments escape the project root",
        ));
    }

    compile_glob(pattern)?;

    Ok(())
}

fn validate_colors(colors: &BTreeMap<String, String>) -> Result<(), ConfigError> {
    for (name, value) in colors {
        if name.trim().is_empty() {
            return Err(ConfigError::InvalidColorValue {
                name: name.clone(),
                value: value.clone(),
                reason: "empty token name".to_string(),
            });
        }

        if let Err(e) = value.parse::<HexColor>() {
            return Err(ConfigError::InvalidColorValue {
                name: name.clone(),
                value: value.clone(),
                reason: e.to_string(),
            });
        }
    }
    Ok(())
}

impl Config {
    /// Validate the descriptor.
    ///
    /// Checks run in a fixed order (content, base colours, extension
    /// colours) and the first failure is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.is_empty() {
            return Err(ConfigError::SchemaViolation(
                "content must list at least one glob pattern".to_string(),
            ));
        }

        for pattern in &self.content {
            validate_glob(pattern)?;
        }

        if let Some(base) = &self.theme.colors {
            validate_colors(base)?;
        }
        validate_colors(&self.theme.extend.colors)?;

        Ok(())
    }
}
