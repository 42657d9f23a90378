use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A utility-class candidate found in a scanned file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassToken {
    /// The file where this token was found
    pub file_path: PathBuf,

    /// The line number (1-indexed)
    pub line_number: usize,

    /// The raw token text (e.g. "hover:bg-help-blue/50")
    pub value: String,
}

impl ClassToken {
    pub fn new(file_path: PathBuf, line_number: usize, value: impl Into<String>) -> Self {
        Self {
            file_path,
            line_number,
            value: value.into(),
        }
    }
}

/// How often a colour token is referenced by utility classes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorUsage {
    /// Total number of references
    pub references: usize,

    /// Distinct utility prefixes that used the colour (e.g. "bg", "text")
    pub utilities: Vec<String>,
}

impl ColorUsage {
    pub fn record(&mut self, utility: &str) {
        self.references += 1;
        if !self.utilities.iter().any(|u| u == utility) {
            self.utilities.push(utility.to_string());
        }
    }
}
