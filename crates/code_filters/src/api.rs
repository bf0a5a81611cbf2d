// crates/code_filters/src/api.rs

use marker_elider::ElideError;
use once_cell::sync::Lazy;

use crate::default::MarkerElideFilter;
use crate::registry::FilterRegistry;

/// Language label the built-in `DOXYGEN_IGNORE` filter is registered for.
pub const DEFAULT_LANGUAGE: &str = "C++";

static DEFAULT_REGISTRY: Lazy<FilterRegistry> = Lazy::new(|| {
    let mut registry = FilterRegistry::new();
    registry.register(DEFAULT_LANGUAGE, Box::new(MarkerElideFilter::default()));
    registry
});

/// Built-in registry: `C++` snippets get `DOXYGEN_IGNORE(...)` elided.
pub fn default_registry() -> &'static FilterRegistry {
    &DEFAULT_REGISTRY
}

/// Applies the built-in pre-filter for `label` to `code`.
pub fn apply_pre_filter(label: &str, code: &str) -> Result<String, ElideError> {
    default_registry().apply(label, code)
}
