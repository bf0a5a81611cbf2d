// crates/code_filters/src/lib.rs

pub mod traits;
pub mod default;
pub mod registry;
pub mod api;

pub use api::{apply_pre_filter, default_registry, DEFAULT_LANGUAGE};
pub use default::MarkerElideFilter;
pub use registry::FilterRegistry;
pub use traits::SnippetFilter;
