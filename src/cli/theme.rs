//! Theme command implementation

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::Path;

use windscan::theme::TokenTable;
use windscan::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeFormat {
    /// CSS custom properties on :root
    Css,
    /// JSON object of name -> hex
    Json,
}

/// Print the effective colour tokens
pub async fn theme_command(
    work_dir: &Path,
    config_path: Option<&Path>,
    format: ThemeFormat,
) -> Result<()> {
    let config = Config::load(work_dir, config_path)?;
    let table = config.theme.resolve(&TokenTable::default_palette())?;

    print!("{}", render(&table, format)?);
    Ok(())
}

fn render(table: &TokenTable, format: ThemeFormat) -> Result<String> {
    match format {
        ThemeFormat::Css => Ok(table.to_css_variables()),
        ThemeFormat::Json => {
            let mut json = serde_json::to_string_pretty(table)
                .with_context(|| "Failed to serialize color tokens")?;
            json.push('\n');
            Ok(json)
        }
    }
}
