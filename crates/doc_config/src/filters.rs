// crates/doc_config/src/filters.rs

use marker_elider::{ElideError, MarkerSpec, DOXYGEN_IGNORE_TOKEN, ELLIPSIS};
use serde::{Deserialize, Serialize};

/// Serialized form of a marker-eliding pre-filter. Missing keys fall back to
/// the `DOXYGEN_IGNORE(` ... `)` → `…` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub marker: String,
    pub open: char,
    pub close: char,
    pub placeholder: char,
}

impl FilterSpec {
    pub fn to_marker_spec(&self) -> Result<MarkerSpec, ElideError> {
        MarkerSpec::new(self.marker.clone(), self.open, self.close, self.placeholder)
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            marker: DOXYGEN_IGNORE_TOKEN.to_string(),
            open: '(',
            close: ')',
            placeholder: ELLIPSIS,
        }
    }
}
