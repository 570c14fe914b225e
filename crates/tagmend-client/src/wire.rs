//! Correction payload parsing
//!
//! The collaborator is asked for a JSON object with `html` and `css` arrays
//! of per-line records. Anything that deserializes into that shape is
//! accepted (entries are re-sorted by line number); a missing array or an
//! entry that does not deserialize is an unexpected-response error. Models
//! often wrap JSON in a markdown fence even when asked not to, so fences are
//! stripped first.

use serde_json::Value;
use tagmend_core::{Correction, CorrectionSet, Error, Result};
use tracing::warn;

/// Parse a raw collaborator reply into a [`CorrectionSet`].
///
/// `html_src`/`css_src` are the submitted sources, used only to check line
/// coverage: a violation is logged, not rejected.
pub fn parse_correction_payload(
    raw: &str,
    html_src: &str,
    css_src: &str,
) -> Result<CorrectionSet> {
    let body = strip_code_fence(raw);

    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::unexpected_response(format!("not valid JSON: {e}")))?;

    let obj = value
        .as_object()
        .ok_or_else(|| Error::unexpected_response("payload is not a JSON object"))?;

    let html = extract_lines(obj, "html")?;
    let css = extract_lines(obj, "css")?;

    let mut set = CorrectionSet { html, css };
    set.sort();

    if !set.covers_sources(html_src, css_src) {
        warn!(
            html_lines = set.html.len(),
            css_lines = set.css.len(),
            "correction payload does not cover the submitted sources line-for-line"
        );
    }

    Ok(set)
}

fn extract_lines(
    obj: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<Vec<Correction>> {
    let value = obj
        .get(key)
        .ok_or_else(|| Error::unexpected_response(format!("missing '{key}' array")))?;

    if !value.is_array() {
        return Err(Error::unexpected_response(format!(
            "'{key}' is not an array"
        )));
    }

    serde_json::from_value(value.clone())
        .map_err(|e| Error::unexpected_response(format!("malformed '{key}' entry: {e}")))
}

/// Strip a single surrounding markdown code fence, if present.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "html", ...) on the opening fence line.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
