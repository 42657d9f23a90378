//! Colour token tables and the theme merge

mod palette;

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use crate::config::{ConfigError, Theme};
use crate::HexColor;

/// Effective colour tokens, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenTable {
    colors: BTreeMap<String, HexColor>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The base palette used when the descriptor does not replace it
    pub fn default_palette() -> Self {
        palette::DEFAULT_PALETTE
            .iter()
            .filter_map(|(name, hex)| Some((name.to_string(), hex.parse().ok()?)))
            .collect()
    }

    /// Build a table from raw `name -> "#RRGGBB"` entries
    pub fn from_raw(raw: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        raw.iter()
            .map(|(name, value)| {
                value
                    .parse::<HexColor>()
                    .map(|color| (name.clone(), color))
                    .map_err(|e| ConfigError::InvalidColorValue {
                        name: name.clone(),
                        value: value.clone(),
                        reason: e.to_string(),
                    })
            })
            .collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, color: HexColor) -> Option<HexColor> {
        self.colors.insert(name.into(), color)
    }

    pub fn get(&self, name: &str) -> Option<HexColor> {
        self.colors.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, HexColor)> {
        self.colors.iter().map(|(name, color)| (name.as_str(), *color))
    }

    /// Merge an extension table in place.
    ///
    /// Keys present in `extension` overwrite the existing value, new keys are
    /// added and nothing is ever removed.
    pub fn extend(&mut self, extension: &TokenTable) {
        for (name, color) in extension.iter() {
            self.colors.insert(name.to_string(), color);
        }
    }

    /// Non-mutating form of [`TokenTable::extend`]
    pub fn merged(&self, extension: &TokenTable) -> TokenTable {
        let mut merged = self.clone();
        merged.extend(extension);
        merged
    }

    /// Render the table as CSS custom properties on `:root`
    pub fn to_css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, color) in self.iter() {
            let _ = writeln!(css, "  --color-{}: {};", name, color);
        }
        css.push_str("}\n");
        css
    }
}

impl FromIterator<(String, HexColor)> for TokenTable {
    fn from_iter<T: IntoIterator<Item = (String, HexColor)>>(iter: T) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl Theme {
    /// Resolve the effective colour table against a base table.
    ///
    /// `theme.colors` replaces `base` when present; `theme.extend.colors` is
    /// then merged on top.
    pub fn resolve(&self, base: &TokenTable) -> Result<TokenTable, ConfigError> {
        let mut table = match &self.colors {
            Some(replacement) => TokenTable::from_raw(replacement)?,
            None => base.clone(),
        };

        let extension = TokenTable::from_raw(&self.extend.colors)?;
        table.extend(&extension);

        tracing::debug!(
            "Resolved {} color tokens ({} from extension)",
            table.len(),
            extension.len()
        );
        Ok(table)
    }
}
