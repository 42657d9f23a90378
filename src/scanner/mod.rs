//! Content scanner: resolves content globs and extracts utility classes

use anyhow::Result;
use globset::{GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::config::{compile_glob, names_hidden_segment, ConfigError};
use crate::extract::{CandidateExtractor, ColorUtility};
use crate::theme::TokenTable;
use crate::{ClassToken, ColorUsage};

/// Result of scanning a project
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Files that matched a content glob and were read, relative to the root
    pub files: Vec<PathBuf>,

    /// Every candidate occurrence, in file then line order
    pub tokens: Vec<ClassToken>,

    /// Colour token name -> usage by colour utilities
    pub usage: BTreeMap<String, ColorUsage>,
}

impl ScanReport {
    pub fn files_scanned(&self) -> usize {
        self.files.len()
    }

    /// Distinct candidate values, sorted
    pub fn distinct_tokens(&self) -> BTreeSet<&str> {
        self.tokens.iter().map(|t| t.value.as_str()).collect()
    }

    /// Names from `names` that no colour utility referenced
    pub fn unused_colors<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        names
            .into_iter()
            .filter(|name| !self.usage.contains_key(*name))
            .collect()
    }
}

/// Scans a project root for files selected by content globs
pub struct Scanner {
    root: PathBuf,
    content: GlobSet,
    /// Globs that name a dot-prefixed segment; the only way into hidden paths
    hidden_content: GlobSet,
    extractor: CandidateExtractor,
}

impl Scanner {
    /// Create a scanner for `root` from the descriptor's content globs
    pub fn new(root: impl Into<PathBuf>, content: &[String]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        let mut hidden_builder = GlobSetBuilder::new();

        for pattern in content {
            let glob = compile_glob(pattern)?;
            if names_hidden_segment(pattern) {
                hidden_builder.add(glob.clone());
            }
            builder.add(glob);
        }

        let build_err =
            |e: globset::Error| ConfigError::malformed_glob(&content.join(", "), e.to_string());
        let hidden_content = hidden_builder.build().map_err(build_err)?;
        let content = builder.build().map_err(build_err)?;

        Ok(Self {
            root: root.into(),
            content,
            hidden_content,
            extractor: CandidateExtractor::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether a root-relative path is selected by the content globs
    ///
    /// Paths with a hidden segment only match globs that name one themselves.
    pub fn matches(&self, relative: &Path) -> bool {
        if is_hidden_path(relative) {
            return self.hidden_content.is_match(relative);
        }
        self.content.is_match(relative)
    }

    /// Scan the project and count colour references against `table`.
    ///
    /// Globs that match nothing are not an error; the report is simply empty.
    pub async fn scan(&self, table: &TokenTable) -> Result<ScanReport> {
        let mut report = ScanReport::default();

        if !self.root.is_dir() {
            tracing::warn!("Project root {} does not exist", self.root.display());
            return Ok(report);
        }

        let walker = WalkBuilder::new(&self.root)
            // Skip hidden files/directories unless a glob asks for them
            .hidden(self.hidden_content.is_empty())
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker.flatten() {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let Ok(relative) = path.strip_prefix(&self.root) else {
                continue;
            };

            if !self.matches(relative) || !Self::is_parseable(path) {
                continue;
            }

            let content = match tokio::fs::read_to_string(path).await {
                Ok(content) => content,
                Err(e) => {
                    tracing::debug!("Skipping unreadable file {}: {}", path.display(), e);
                    continue;
                }
            };

            let tokens = self.extractor.parse_file(relative, &content);
            tracing::debug!("{}: {} candidates", relative.display(), tokens.len());

            for token in &tokens {
                if let Some(utility) = ColorUtility::parse(&token.value, table) {
                    report
                        .usage
                        .entry(utility.color.to_string())
                        .or_default()
                        .record(utility.utility);
                }
            }

            report.files.push(relative.to_path_buf());
            report.tokens.extend(tokens);
        }

        tracing::info!(
            "Scanned {} file(s), found {} candidate(s)",
            report.files_scanned(),
            report.tokens.len()
        );

        Ok(report)
    }

    /// Check if a file is worth reading as text
    fn is_parseable(path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return true;
        };

        let ext_lower = ext.to_lowercase();

        // Exclude known binary formats
        !matches!(
            ext_lower.as_str(),
            // Images
            "png" | "jpg" | "jpeg" | "gif" | "bmp" | "ico" | "webp" | "tiff" | "psd"
            // Archives
            | "zip" | "tar" | "gz" | "bz2" | "xz" | "7z"
            // Fonts
            | "ttf" | "otf" | "woff" | "woff2" | "eot"
            // Compiled
            | "pyc" | "pyo" | "wasm" | "so" | "dll" | "exe"
            // Database
            | "db" | "sqlite" | "sqlite3"
        )
    }
}

fn is_hidden_path(relative: &Path) -> bool {
    relative.components().any(|c| {
        c.as_os_str()
            .to_str()
            .is_some_and(|s| s.starts_with('.') && s != "." && s != "..")
    })
}
