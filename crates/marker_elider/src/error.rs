// crates/marker_elider/src/error.rs

/// Errors produced while eliding marker spans.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElideError {
    /// The marker definition itself cannot be used for balancing.
    #[error("invalid marker `{token}`: {reason}")]
    InvalidMarker { token: String, reason: String },

    /// A marker's opening delimiter never balanced before the end of the snippet.
    #[error(
        "unmatched {marker}{close} delimiters: marker at line {line}, column {column} \
         still has {depth} open `{open}` at end of snippet:\n{snippet}"
    )]
    Unbalanced {
        marker: String,
        open: char,
        close: char,
        line: usize,
        column: usize,
        depth: usize,
        snippet: String,
    },
}
