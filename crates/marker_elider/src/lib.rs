// crates/marker_elider/src/lib.rs

//! Replaces marker calls in code snippets (by default `DOXYGEN_IGNORE(...)`)
//! with a single placeholder character before the snippet is rendered.
//!
//! The closing delimiter is found by depth counting, so argument lists that
//! contain their own parenthesised sub-expressions are elided as a whole.

mod error;
mod marker;

pub use error::ElideError;
pub use marker::{MarkerSpec, DOXYGEN_IGNORE_TOKEN, ELLIPSIS};

/// Elides every `DOXYGEN_IGNORE(...)` span in `code`, replacing each with `…`.
pub fn elide(code: &str) -> Result<String, ElideError> {
    elide_with(code, &MarkerSpec::doxygen_ignore())
}

/// Elides every span described by `spec` in `code`.
///
/// Fails with [`ElideError::Unbalanced`] when a marker is never closed; no
/// partially processed text is returned in that case.
pub fn elide_with(code: &str, spec: &MarkerSpec) -> Result<String, ElideError> {
    elide_counted(code, spec).map(|(text, _)| text)
}

/// Number of marker spans [`elide_with`] would replace.
pub fn count_markers(code: &str, spec: &MarkerSpec) -> Result<usize, ElideError> {
    elide_counted(code, spec).map(|(_, count)| count)
}

fn elide_counted(code: &str, spec: &MarkerSpec) -> Result<(String, usize), ElideError> {
    let mut text = code.to_string();
    let mut buf = [0u8; 4];
    let placeholder: &str = spec.placeholder().encode_utf8(&mut buf);
    let mut count = 0;

    // Each replacement shrinks the text by at least one character.
    while let Some(start) = text.find(spec.token()) {
        let end = find_span_end(&text, start, spec)?;
        log::trace!("eliding `{}` at bytes {}..{}", spec.token(), start, end);
        text.replace_range(start..end, placeholder);
        count += 1;
    }

    if count > 0 {
        log::debug!("elided {} `{}` span(s)", count, spec.token());
    }
    Ok((text, count))
}

/// Byte offset just past the delimiter balancing the marker that starts at `start`.
fn find_span_end(text: &str, start: usize, spec: &MarkerSpec) -> Result<usize, ElideError> {
    let body = start + spec.token().len();
    let mut depth = 1usize;

    for (offset, ch) in text[body..].char_indices() {
        if ch == spec.open() {
            depth += 1;
        } else if ch == spec.close() {
            depth -= 1;
            if depth == 0 {
                return Ok(body + offset + ch.len_utf8());
            }
        }
    }

    let (line, column) = line_column(text, start);
    Err(ElideError::Unbalanced {
        marker: spec.token().to_string(),
        open: spec.open(),
        close: spec.close(),
        line,
        column,
        depth,
        snippet: text.to_string(),
    })
}

/// 1-based line and character column of a byte offset.
fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
