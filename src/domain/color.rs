//! Hex colour values for design tokens

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a string is not a `#RRGGBB` colour
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("missing '#' prefix")]
    MissingHash,

    #[error("expected 6 hex digits, found {0}")]
    WrongLength(usize),

    #[error("'{0}' is not a hex digit")]
    InvalidDigit(char),
}

/// A 24-bit RGB colour written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(u32);

impl HexColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Red, green and blue channels
    pub fn rgb(&self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;

        // Count chars, not bytes, so multi-byte garbage reports a sane length
        let len = digits.chars().count();
        if len != 6 {
            return Err(ColorParseError::WrongLength(len));
        }

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(bad));
        }

        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ColorParseError::WrongLength(len))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upper_and_lower() {
        let upper: HexColor = "#3B82F6".parse().unwrap();
        let lower: HexColor = "#3b82f6".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.rgb(), (0x3B, 0x82, 0xF6));
    }

    #[test]
    fn test_display_is_uppercase() {
        let color: HexColor = "#10b981".parse().unwrap();
        assert_eq!(color.to_string(), "#10B981");
        assert_eq!(HexColor::from_rgb(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn test_rejects_missing_hash() {
        assert_eq!(
            "3B82F6".parse::<HexColor>(),
            Err(ColorParseError::MissingHash)
        );
    }

    #[test]
    fn test_rejects_short_and_long_forms() {
        assert_eq!(
            "#fff".parse::<HexColor>(),
            Err(ColorParseError::WrongLength(3))
        );
        assert_eq!(
            "#3B82F6FF".parse::<HexColor>(),
            Err(ColorParseError::WrongLength(8))
        );
    }

    #[test]
    fn test_rejects_non_hex_digit() {
        assert_eq!(
            "#3B82G6".parse::<HexColor>(),
            Err(ColorParseError::InvalidDigit('G'))
        );
        // A leading sign would be accepted by from_str_radix
        assert_eq!(
            "#+B82F6".parse::<HexColor>(),
            Err(ColorParseError::InvalidDigit('+'))
        );
    }

    #[test]
    fn test_serde_uses_string_form() {
        let color: HexColor = serde_json::from_str("\"#EF4444\"").unwrap();
        assert_eq!(color.rgb(), (0xEF, 0x44, 0x44));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#EF4444\"");
        assert!(serde_json::from_str::<HexColor>("\"red\"").is_err());
    }
}
