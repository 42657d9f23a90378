//! windscan - config loader and content scanner for utility-class stylesheets
//!
//! windscan reads the descriptor a utility-class CSS tool is driven by
//! (`content` globs, `theme.extend.colors`, `plugins`), validates it and
//! performs the read side of the build:
//!
//! 1. **Resolve content**: match the `content` globs against the project root.
//! 2. **Extract candidates**: pull class-like tokens out of every matched file.
//! 3. **Merge the theme**: layer the extension colours over the base palette.
//! 4. **Report usage**: count which colour tokens utility classes reference.
//!
//! Generating the stylesheet itself is left to the CSS tool.

pub mod config;
pub mod domain;
pub mod extract;
pub mod scanner;
pub mod theme;

pub use config::Config;
pub use domain::*;
