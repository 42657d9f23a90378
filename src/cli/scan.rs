//! Scan command implementation

use anyhow::Result;
use std::path::Path;

use windscan::scanner::Scanner;
use windscan::theme::TokenTable;
use windscan::Config;

/// Scan the project's content files and report colour usage
pub async fn scan_command(
    work_dir: &Path,
    config_path: Option<&Path>,
    list_tokens: bool,
) -> Result<()> {
    let config = Config::load(work_dir, config_path)?;
    let table = config.theme.resolve(&TokenTable::default_palette())?;

    let scanner = Scanner::new(work_dir, &config.content)?;
    let report = scanner.scan(&table).await?;

    if report.files.is_empty() {
        println!("No content files matched.");
        return Ok(());
    }

    let distinct = report.distinct_tokens();
    println!(
        "Scanned {} file(s): {} candidate(s), {} distinct\n",
        report.files_scanned(),
        report.tokens.len(),
        distinct.len()
    );

    if report.usage.is_empty() {
        println!("No colour utilities found.");
    } else {
        println!("Colour usage:");
        for (name, usage) in &report.usage {
            let hex = table
                .get(name)
                .map(|c| c.to_string())
                .unwrap_or_default();
            println!(
                "  {:<16} {}  {} ref(s) via {}",
                name,
                hex,
                usage.references,
                usage.utilities.join(", ")
            );
        }
    }

    let unused = report.unused_colors(config.theme.extend.colors.keys().map(String::as_str));
    if !unused.is_empty() {
        println!();
        for name in unused {
            tracing::warn!("Extension color '{}' is never used", name);
        }
    }

    if list_tokens {
        println!("\nCandidates:");
        for token in distinct {
            println!("  {}", token);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn test_scan_help_desk_project() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "templates/base.html",
            r#"<nav class="bg-help-blue text-white">Help Desk</nav>"#,
        );
        write(
            dir.path(),
            "tickets/templates/tickets/list.html",
            r#"<span class="hover:text-help-green/80">Open</span>"#,
        );
        write(dir.path(), "static/app.js", "el.classList.add('ring-help-red');");

        scan_command(dir.path(), None, true).await.unwrap();
    }

    #[tokio::test]
    async fn test_scan_empty_project() {
        let dir = TempDir::new().unwrap();
        scan_command(dir.path(), None, false).await.unwrap();
    }

    #[tokio::test]
    async fn test_scan_with_explicit_config() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "pages/index.html", r#"<p class="bg-brand"></p>"#);
        let config_path = dir.path().join("conf/windscan.json");
        write(
            dir.path(),
            "conf/windscan.json",
            r##"{"content": ["pages/*.html"], "theme": {"extend": {"colors": {"brand": "#112233"}}}}"##,
        );

        scan_command(dir.path(), Some(&config_path), false)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_scan_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "windscan.toml", "content = [\"../shared/*.html\"]\n");

        let err = scan_command(dir.path(), None, false).await.unwrap_err();
        let config_err = err.downcast_ref::<windscan::config::ConfigError>().unwrap();
        assert!(matches!(
            config_err,
            windscan::config::ConfigError::MalformedGlob { .. }
        ));
    }
}
