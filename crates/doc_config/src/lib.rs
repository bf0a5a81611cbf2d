// crates/doc_config/src/lib.rs

//! Settings consumed by the documentation renderer, plus the table of
//! per-language snippet pre-filters.
//!
//! Every field has a built-in default; a TOML file only needs to list what
//! it overrides.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use code_filters::{FilterRegistry, MarkerElideFilter, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};

mod filters;
mod navbar;

pub use filters::FilterSpec;
pub use navbar::{HtmlLink, NavbarLink, PageLink};

/// Placeholder in [`DocConfig::fine_print`] replaced by the Doxygen version.
pub const DOXYGEN_VERSION_PLACEHOLDER: &str = "{doxygen_version}";

const DEFAULT_FINE_PRINT: &str = "<p>Corrade docs. Part of the <a href=\"https://magnum.graphics/\">Magnum project</a>, copyright © <a href=\"http://mosra.cz/\">Vladimír Vondruš</a> and <a href=\"corrade-credits-contributors.html\">contributors</a>, 2007&ndash;2020.<br />Generated by <a href=\"https://doxygen.org/\">Doxygen</a> {doxygen_version} and <a href=\"https://mcss.mosra.cz/\">m.css</a>. Contact the team via <a href=\"https://github.com/mosra/magnum\">GitHub</a>, <a href=\"https://gitter.im/mosra/magnum\">Gitter</a>, <a href=\"mailto:info@magnum.graphics\">e-mail</a> or <a href=\"https://twitter.com/czmosra\">Twitter</a>.</p>";

// Scalars come before arrays of tables and maps so the TOML output stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    pub doxyfile: String,
    pub main_project_url: String,
    pub fine_print: String,
    pub favicon: String,
    pub version_labels: bool,
    pub stylesheets: Vec<String>,
    pub links_navbar2: Vec<NavbarLink>,
    pub code_filters_pre: BTreeMap<String, FilterSpec>,
}

impl Default for DocConfig {
    fn default() -> Self {
        let mut code_filters_pre = BTreeMap::new();
        code_filters_pre.insert(DEFAULT_LANGUAGE.to_string(), FilterSpec::default());

        Self {
            doxyfile: "Doxyfile-mcss".to_string(),
            main_project_url: "https://magnum.graphics/corrade/".to_string(),
            fine_print: DEFAULT_FINE_PRINT.to_string(),
            favicon: "favicon.ico".to_string(),
            version_labels: true,
            stylesheets: vec![
                "https://fonts.googleapis.com/css?family=Source+Sans+Pro:400,400i,600,600i%7CSource+Code+Pro:400,400i,600&subset=latin-ext".to_string(),
                "../css/m-dark+documentation.compiled.css".to_string(),
            ],
            links_navbar2: navbar::default_links(),
            code_filters_pre,
        }
    }
}

impl DocConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse documentation config")
    }

    /// Reads a TOML config file. Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::debug!(
            "loaded {} with pre-filters for {:?}",
            path.display(),
            config.code_filters_pre.keys().collect::<Vec<_>>()
        );
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize documentation config")
    }

    /// Footer HTML with the Doxygen version filled in.
    pub fn render_fine_print(&self, doxygen_version: &str) -> String {
        self.fine_print
            .replace(DOXYGEN_VERSION_PLACEHOLDER, doxygen_version)
    }

    /// Builds the language → pre-filter table described by `code_filters_pre`.
    pub fn filter_registry(&self) -> Result<FilterRegistry> {
        let mut registry = FilterRegistry::new();
        for (label, spec) in &self.code_filters_pre {
            let marker = spec
                .to_marker_spec()
                .with_context(|| format!("Invalid pre-filter for language `{}`", label))?;
            registry.register(label.clone(), Box::new(MarkerElideFilter::new(marker)));
        }
        Ok(registry)
    }
}
