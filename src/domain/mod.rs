//! Core domain types for windscan

mod color;
mod token;

pub use color::{ColorParseError, HexColor};
pub use token::{ClassToken, ColorUsage};
