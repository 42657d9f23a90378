//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;

use windscan::config::{write_atomic, ConfigFormat};
use windscan::Config;

/// Default configuration content for windscan init
pub const DEFAULT_CONFIG: &str = r##"# windscan configuration
# ======================
#
# content - glob patterns of files to scan for utility classes.
#           Relative to the project root; `*` stays inside one directory,
#           `**` crosses any number of them.
content = [
    "./templates/**/*.html",
    "./*/templates/**/*.html",
    "./static/**/*.js",
]

# plugins - left empty: no additional processing
plugins = []

# theme.colors        - replaces the base palette entirely (optional)
# theme.extend.colors - added on top of the base palette; names that already
#                       exist override the base value
[theme.extend.colors]
help-blue = "#3B82F6"
help-green = "#10B981"
help-yellow = "#F59E0B"
help-red = "#EF4444"
help-gray = "#6B7280"
"##;

/// Write the default config into the project root
pub async fn init_command(
    work_dir: &Path,
    config_path: Option<&Path>,
    force: bool,
    json: bool,
) -> Result<()> {
    let file_name = if json { "windscan.json" } else { "windscan.toml" };
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| work_dir.join(file_name));

    write_default_config(&config_path, force)?;
    println!("Created: {}", config_path.display());

    Ok(())
}

fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    match ConfigFormat::from_path(config_path) {
        // TOML keeps the commented template
        ConfigFormat::Toml => {
            write_atomic(config_path, DEFAULT_CONFIG).with_context(|| {
                format!("Failed to write config file: {}", config_path.display())
            })?;
        }
        ConfigFormat::Json => {
            Config::with_defaults().save_to_file(config_path)?;
        }
    }

    tracing::debug!("Wrote default config to {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_matches_defaults() {
        let config = Config::parse(DEFAULT_CONFIG, ConfigFormat::Toml).unwrap();
        assert_eq!(config, Config::with_defaults());
    }

    #[tokio::test]
    async fn test_init_writes_and_refuses_overwrite() {
        let dir = TempDir::new().unwrap();

        init_command(dir.path(), None, false, false).await.unwrap();
        let path = dir.path().join("windscan.toml");
        assert_eq!(Config::from_file(&path).unwrap(), Config::with_defaults());

        assert!(init_command(dir.path(), None, false, false).await.is_err());
        init_command(dir.path(), None, true, false).await.unwrap();
    }

    #[tokio::test]
    async fn test_init_explicit_path_keeps_template() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".windscan/config.toml");

        init_command(dir.path(), Some(&path), false, false).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
        assert!(!dir.path().join(".windscan/config.toml.tmp").exists());
    }

    #[tokio::test]
    async fn test_init_reports_the_failing_path() {
        let dir = TempDir::new().unwrap();
        // A file where the parent directory should be
        std::fs::write(dir.path().join("blocked"), "").unwrap();
        let path = dir.path().join("blocked/windscan.toml");

        let err = init_command(dir.path(), Some(&path), false, false)
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("blocked"), "{err:#}");
    }

    #[tokio::test]
    async fn test_init_json() {
        let dir = TempDir::new().unwrap();

        init_command(dir.path(), None, false, true).await.unwrap();
        let path = dir.path().join("windscan.json");
        assert_eq!(Config::from_file(&path).unwrap(), Config::with_defaults());
    }
}
