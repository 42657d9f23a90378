//! Configuration loading and management
//!
//! The descriptor keeps the field names and nesting of the utility-class
//! tool it mirrors: `content`, `theme.extend.colors` and `plugins`.

mod error;
mod io;
mod validate;

pub use error::ConfigError;
pub use io::{write_atomic, ConfigFormat};
pub use validate::{compile_glob, names_hidden_segment, normalize_glob, validate_glob};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Config file names looked up in a project root, in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &["windscan.toml", "windscan.json", ".windscan/config.toml"];

/// Content globs of the help-desk project this tool was built for
const DEFAULT_CONTENT: &[&str] = &[
    "./templates/**/*.html",
    "./*/templates/**/*.html",
    "./static/**/*.js",
];

/// Brand colours layered on top of the default palette
const DEFAULT_EXTEND_COLORS: &[(&str, &str)] = &[
    ("help-blue", "#3B82F6"),
    ("help-green", "#10B981"),
    ("help-yellow", "#F59E0B"),
    ("help-red", "#EF4444"),
    ("help-gray", "#6B7280"),
];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Glob patterns of files to scan for utility classes, relative to the project root
    pub content: Vec<String>,

    /// Plugin names. An empty list means no additional processing.
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Theme tokens
    #[serde(default)]
    pub theme: Theme,
}

/// Theme section of the descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    /// Replaces the base palette entirely when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<BTreeMap<String, String>>,

    /// Tokens merged additively onto the base palette
    #[serde(default)]
    pub extend: ThemeExtend,
}

/// `theme.extend` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeExtend {
    /// Colour name -> `#RRGGBB`
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

impl Config {
    /// Create the default descriptor
    pub fn with_defaults() -> Self {
        let colors = DEFAULT_EXTEND_COLORS
            .iter()
            .map(|(name, hex)| (name.to_string(), hex.to_string()))
            .collect();

        Self {
            content: DEFAULT_CONTENT.iter().map(|s| s.to_string()).collect(),
            plugins: Vec::new(),
            theme: Theme {
                colors: None,
                extend: ThemeExtend { colors },
            },
        }
    }

    /// Create a descriptor with the given globs and no theme changes
    pub fn with_content<I, S>(content: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content: content.into_iter().map(Into::into).collect(),
            plugins: Vec::new(),
            theme: Theme::default(),
        }
    }

    /// Add (or override) an extension colour
    pub fn extend_color(mut self, name: impl Into<String>, hex: impl Into<String>) -> Self {
        self.theme.extend.colors.insert(name.into(), hex.into());
        self
    }

    /// Whether plugins are configured
    pub fn has_plugins(&self) -> bool {
        !self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_project_descriptor() {
        let config = Config::with_defaults();

        assert_eq!(config.content.len(), 3);
        assert_eq!(config.content[0], "./templates/**/*.html");
        assert!(config.plugins.is_empty());
        assert!(config.theme.colors.is_none());
        assert_eq!(config.theme.extend.colors.len(), 5);
        assert_eq!(
            config.theme.extend.colors.get("help-gray").map(String::as_str),
            Some("#6B7280")
        );
    }

    #[test]
    fn test_extend_color_overrides() {
        let config = Config::with_content(["a/**/*.html"])
            .extend_color("brand", "#000000")
            .extend_color("brand", "#FFFFFF");

        assert_eq!(config.theme.extend.colors.len(), 1);
        assert_eq!(config.theme.extend.colors["brand"], "#FFFFFF");
    }
}
