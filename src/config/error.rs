/// Errors surfaced while loading a descriptor
///
/// None of these are recovered from automatically; they are reported to the
/// operator at load time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config syntax error: {0}")]
    Parse(String),

    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    #[error("Malformed glob '{pattern}': {reason}")]
    MalformedGlob { pattern: String, reason: String },

    #[error("Invalid color value for '{name}': '{value}' ({reason})")]
    InvalidColorValue {
        name: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn malformed_glob(pattern: &str, reason: impl Into<String>) -> Self {
        Self::MalformedGlob {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}
