// crates/elide_snippet/src/lib.rs

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use code_filters::FilterRegistry;
use doc_config::DocConfig;

/// Extensions `check` looks at when none are given.
pub const DEFAULT_EXTENSIONS: &[&str] = &["cpp", "h", "hpp"];

/// Reads a snippet from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read snippet {}", path.display())),
        _ => io::read_to_string(io::stdin()).context("Failed to read snippet from stdin"),
    }
}

/// Filters one snippet file (or stdin) with the pre-filter registered for `lang`.
pub fn elide_source(registry: &FilterRegistry, lang: &str, path: Option<&Path>) -> Result<String> {
    let source = read_source(path)?;
    let name = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());
    registry
        .apply(lang, &source)
        .with_context(|| format!("Failed to filter {} snippet {}", lang, name))
}

/// Outcome of [`check_paths`].
#[derive(Debug, Default)]
pub struct CheckReport {
    pub checked: usize,
    pub failures: Vec<(PathBuf, String)>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs the `lang` pre-filter over every file below `paths` whose extension
/// is in `extensions`. Unreadable files and directory walk errors are
/// recorded as failures next to unbalanced snippets, and the walk goes on.
pub fn check_paths(
    registry: &FilterRegistry,
    lang: &str,
    paths: &[PathBuf],
    extensions: &[String],
) -> Result<CheckReport> {
    if registry.get(lang).is_none() {
        log::warn!("no pre-filter registered for {}; every snippet passes", lang);
    }

    let mut report = CheckReport::default();
    for root in paths {
        if !root.exists() {
            return Err(anyhow!("Path {} does not exist", root.display()));
        }

        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.clone());
                    log::debug!("walk error at {}: {}", path.display(), err);
                    report.failures.push((path, format!("Failed to walk: {}", err)));
                    continue;
                }
            };
            if !entry.file_type().is_file() || !has_extension(entry.path(), extensions) {
                continue;
            }

            let file = entry.into_path();
            log::debug!("checking {}", file.display());
            report.checked += 1;
            let result = fs::read_to_string(&file)
                .map_err(|err| format!("Failed to read snippet: {}", err))
                .and_then(|source| registry.apply(lang, &source).map_err(|err| err.to_string()));
            if let Err(message) = result {
                report.failures.push((file, message));
            }
        }
    }
    Ok(report)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// The `#define` that keeps snippets using the `lang` marker compilable.
pub fn passthrough_define(config: &DocConfig, lang: &str) -> Result<String> {
    let spec = config
        .code_filters_pre
        .get(lang)
        .ok_or_else(|| anyhow!("No pre-filter configured for language `{}`", lang))?;
    let marker = spec
        .to_marker_spec()
        .with_context(|| format!("Invalid pre-filter for language `{}`", lang))?;
    Ok(marker.passthrough_define())
}
