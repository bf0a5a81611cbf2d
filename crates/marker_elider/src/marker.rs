// crates/marker_elider/src/marker.rs

use crate::error::ElideError;

/// Marker token used by the C++ snippets.
pub const DOXYGEN_IGNORE_TOKEN: &str = "DOXYGEN_IGNORE(";

/// Unicode horizontal ellipsis, shown in place of every elided span.
pub const ELLIPSIS: char = '\u{2026}';

/// Describes which spans get elided and what replaces them.
///
/// The token is a fixed literal that must end with the opening delimiter, so
/// that the scan for the balancing delimiter starts with a depth of one right
/// after the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSpec {
    token: String,
    open: char,
    close: char,
    placeholder: char,
}

impl MarkerSpec {
    pub fn new(
        token: impl Into<String>,
        open: char,
        close: char,
        placeholder: char,
    ) -> Result<Self, ElideError> {
        let token = token.into();
        let invalid = |reason: &str| ElideError::InvalidMarker {
            token: token.clone(),
            reason: reason.to_string(),
        };

        if token.is_empty() {
            return Err(invalid("token is empty"));
        }
        if open == close {
            return Err(invalid("opening and closing delimiters are the same character"));
        }
        if !token.ends_with(open) {
            return Err(invalid(&format!("token does not end with the opening delimiter `{}`", open)));
        }

        Ok(Self {
            token,
            open,
            close,
            placeholder,
        })
    }

    /// `DOXYGEN_IGNORE(` ... `)` replaced by `…`.
    pub fn doxygen_ignore() -> Self {
        Self {
            token: DOXYGEN_IGNORE_TOKEN.to_string(),
            open: '(',
            close: ')',
            placeholder: ELLIPSIS,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn open(&self) -> char {
        self.open
    }

    pub fn close(&self) -> char {
        self.close
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// The token without its trailing opening delimiter, e.g. `DOXYGEN_IGNORE`.
    pub fn macro_name(&self) -> &str {
        &self.token[..self.token.len() - self.open.len_utf8()]
    }

    /// Preprocessor line that turns the marker into a transparent wrapper, so
    /// the same snippet compiles in validation builds.
    pub fn passthrough_define(&self) -> String {
        format!("#define {}(...) __VA_ARGS__", self.macro_name())
    }
}

impl Default for MarkerSpec {
    fn default() -> Self {
        Self::doxygen_ignore()
    }
}
