//! Helpers shared by the reqwest-backed adapters.

use reqwest::Url;

/// Compact, truncated rendering of a response body for error messages.
pub(crate) fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

/// Append path segments to `base` without reinterpreting them.
///
/// `Url::join` would read a segment such as `accounts:signUp` as a scheme, so
/// segments are pushed verbatim (percent-encoded where required).
///
/// Returns `None` when `base` cannot carry a path.
pub(crate) fn with_segments<'a>(
    base: &Url,
    segments: impl IntoIterator<Item = &'a str>,
) -> Option<Url> {
    let mut url = base.clone();
    {
        let mut path = url.path_segments_mut().ok()?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
    }
    Some(url)
}
