//! Envelope rendering for untrusted content.
//!
//! The envelope is five newline-joined parts:
//!
//! ```text
//! <<<EXTERNAL_UNTRUSTED_CONTENT>>>
//! Source: {source}
//! ---
//! {content}
//! <<<END_EXTERNAL_UNTRUSTED_CONTENT>>>
//! ```
//!
//! Content and label are copied verbatim. Markers that already appear inside
//! the content are left as they are.

pub const START_MARKER: &str = "<<<EXTERNAL_UNTRUSTED_CONTENT>>>";
pub const END_MARKER: &str = "<<<END_EXTERNAL_UNTRUSTED_CONTENT>>>";
pub const SOURCE_PREFIX: &str = "Source: ";
pub const SEPARATOR: &str = "---";

/// Wrap `content` in the untrusted-content envelope, attributed to `source`.
///
/// Works on raw bytes so null bytes and invalid UTF-8 survive unchanged.
/// The result has no trailing newline; writers add one when emitting it.
pub fn wrap(content: &[u8], source: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len() + envelope_overhead(source));
    out.extend_from_slice(START_MARKER.as_bytes());
    out.push(b'\n');
    out.extend_from_slice(SOURCE_PREFIX.as_bytes());
    out.extend_from_slice(source.as_bytes());
    out.push(b'\n');
    out.extend_from_slice(SEPARATOR.as_bytes());
    out.push(b'\n');
    out.extend_from_slice(content);
    out.push(b'\n');
    out.extend_from_slice(END_MARKER.as_bytes());
    out
}

/// Text convenience over [`wrap`].
pub fn wrap_str(content: &str, source: &str) -> String {
    // Both inputs are valid UTF-8, so the lossy branch never substitutes anything.
    String::from_utf8(wrap(content.as_bytes(), source))
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

/// Number of bytes [`wrap`] adds around the content for a given label.
pub fn envelope_overhead(source: &str) -> usize {
    START_MARKER.len()
        + SOURCE_PREFIX.len()
        + source.len()
        + SEPARATOR.len()
        + END_MARKER.len()
        + 4
}

/// Count non-overlapping occurrences of `marker` in `haystack`.
pub fn count_markers(haystack: &[u8], marker: &str) -> usize {
    let needle = marker.as_bytes();
    if needle.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut rest = haystack;
    while let Some(idx) = rest.windows(needle.len()).position(|window| window == needle) {
        count += 1;
        rest = &rest[idx + needle.len()..];
    }
    count
}
