// crates/code_filters/src/default.rs

use marker_elider::{elide_with, ElideError, MarkerSpec};

use crate::traits::SnippetFilter;

/// Replaces every marker span described by its [`MarkerSpec`] with the
/// spec's placeholder.
#[derive(Debug, Clone, Default)]
pub struct MarkerElideFilter {
    spec: MarkerSpec,
}

impl MarkerElideFilter {
    pub fn new(spec: MarkerSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &MarkerSpec {
        &self.spec
    }
}

impl SnippetFilter for MarkerElideFilter {
    fn name(&self) -> &str {
        self.spec.macro_name()
    }

    fn apply(&self, code: &str) -> Result<String, ElideError> {
        elide_with(code, &self.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_elides_doxygen_ignore() {
        let filter = MarkerElideFilter::default();
        assert_eq!(filter.name(), "DOXYGEN_IGNORE");
        let result = filter.apply("f(DOXYGEN_IGNORE(a, (b)), c);").unwrap();
        assert_eq!(result, "f(…, c);");
    }

    #[test]
    fn test_custom_spec_filter() {
        let spec = MarkerSpec::new("SKIP{", '{', '}', '~').unwrap();
        let filter = MarkerElideFilter::new(spec);
        assert_eq!(filter.name(), "SKIP");
        assert_eq!(filter.apply("a SKIP{ {x} } b").unwrap(), "a ~ b");
        // Parentheses are not the delimiters of this marker.
        assert!(filter.apply("SKIP{ ) ").is_err());
    }
}
