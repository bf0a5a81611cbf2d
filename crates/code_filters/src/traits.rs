// crates/code_filters/src/traits.rs

use marker_elider::ElideError;

/// A transformation applied to snippet text before it is highlighted.
pub trait SnippetFilter: Send + Sync {
    /// Short human readable name, used in logs.
    fn name(&self) -> &str;

    /// Returns the filtered snippet. An error means the snippet is malformed
    /// and the documentation build should stop.
    fn apply(&self, code: &str) -> Result<String, ElideError>;
}
