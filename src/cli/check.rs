//! Check command implementation

use anyhow::Result;
use std::path::Path;

use windscan::theme::TokenTable;
use windscan::Config;

/// Load and validate the config. Returns `false` when validation fails.
pub async fn check_command(work_dir: &Path, config_path: Option<&Path>) -> Result<bool> {
    let source = config_path
        .map(Path::to_path_buf)
        .or_else(|| Config::find_in_dir(work_dir));

    let config = match &source {
        Some(path) => Config::from_file(path)?,
        None => Config::from_dir(work_dir)?,
    };

    let origin = source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());

    if let Err(e) = config.validate() {
        eprintln!("Invalid config ({}): {}", origin, e);
        return Ok(false);
    }

    let table = config.theme.resolve(&TokenTable::default_palette())?;

    println!("Config OK: {}", origin);
    println!("  content globs:    {}", config.content.len());
    println!("  extension colors: {}", config.theme.extend.colors.len());
    println!("  effective colors: {}", table.len());
    if config.has_plugins() {
        println!("  plugins (ignored): {}", config.plugins.join(", "));
    }

    Ok(true)
}
