// crates/code_filters/src/registry.rs

use std::collections::BTreeMap;
use std::fmt;

use marker_elider::ElideError;

use crate::traits::SnippetFilter;

/// Maps a snippet's language label (as the renderer tags it, e.g. `C++`) to
/// the filter run on snippets of that language. Labels are matched exactly.
#[derive(Default)]
pub struct FilterRegistry {
    filters: BTreeMap<String, Box<dyn SnippetFilter>>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `filter` for `label`, returning the filter it replaced.
    pub fn register(
        &mut self,
        label: impl Into<String>,
        filter: Box<dyn SnippetFilter>,
    ) -> Option<Box<dyn SnippetFilter>> {
        let label = label.into();
        log::debug!("registering pre-filter `{}` for {}", filter.name(), label);
        self.filters.insert(label, filter)
    }

    pub fn get(&self, label: &str) -> Option<&dyn SnippetFilter> {
        self.filters.get(label).map(|f| f.as_ref())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Runs the filter registered for `label`. Snippets of languages without
    /// a filter pass through unchanged.
    pub fn apply(&self, label: &str, code: &str) -> Result<String, ElideError> {
        match self.get(label) {
            Some(filter) => {
                log::trace!("applying `{}` to a {} snippet", filter.name(), label);
                filter.apply(code)
            }
            None => Ok(code.to_string()),
        }
    }
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.filters.iter().map(|(label, filter)| (label, filter.name())))
            .finish()
    }
}
