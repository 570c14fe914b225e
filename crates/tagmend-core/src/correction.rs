//! Correction domain model
//!
//! A [`Correction`] is one line of a file under review; a [`CorrectionSet`]
//! is the full HTML+CSS result of one correction request. The wire format
//! uses camelCase field names, matching the collaborator contract.

use serde::{Deserialize, Serialize};

/// One line's before/after/explanation record.
///
/// Invariant: for a file of N lines the collaborator returns exactly N
/// records with `line_number` covering 1..=N exactly once, order-preserving.
/// `is_error == false` implies `corrected == original`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Correction {
    /// 1-indexed line number in the submitted source
    pub line_number: u32,

    /// The line as submitted
    pub original: String,

    /// The suggested replacement; equals `original` when no issue was found
    pub corrected: String,

    /// Whether this line had an issue
    #[serde(default)]
    pub is_error: bool,

    /// Why the line was changed; meaningful only when `is_error` is true
    #[serde(default)]
    pub explanation: String,
}

impl Correction {
    /// An untouched line.
    pub fn unchanged(line_number: u32, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            line_number,
            corrected: text.clone(),
            original: text,
            is_error: false,
            explanation: String::new(),
        }
    }

    /// A corrected line with its explanation.
    pub fn changed(
        line_number: u32,
        original: impl Into<String>,
        corrected: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            original: original.into(),
            corrected: corrected.into(),
            is_error: true,
            explanation: explanation.into(),
        }
    }
}

/// The full correction result for one request: one ordered sequence per file.
///
/// Created atomically on a successful request; discarded atomically on
/// accept or edit-again. Both sequences exist or neither does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CorrectionSet {
    pub html: Vec<Correction>,
    pub css: Vec<Correction>,
}

impl CorrectionSet {
    /// Sort both sequences by line number. Parsing applies this so that
    /// reductions and the diff view are in ascending order regardless of
    /// how the collaborator ordered its output.
    pub fn sort(&mut self) {
        self.html.sort_by_key(|c| c.line_number);
        self.css.sort_by_key(|c| c.line_number);
    }

    /// Newline-join of the HTML `corrected` fields in ascending order.
    pub fn corrected_html(&self) -> String {
        join_corrected(&self.html)
    }

    /// Newline-join of the CSS `corrected` fields in ascending order.
    pub fn corrected_css(&self) -> String {
        join_corrected(&self.css)
    }

    /// Number of lines flagged as errors across both files.
    pub fn error_count(&self) -> usize {
        self.html
            .iter()
            .chain(self.css.iter())
            .filter(|c| c.is_error)
            .count()
    }

    /// Check the collaborator output contract against the submitted sources:
    /// every line of each input appears exactly once, in order, 1-indexed.
    ///
    /// Violations are reported, not fatal: the workflow still reviews what
    /// was returned, but the mismatch is worth a warning in the trace log.
    pub fn covers_sources(&self, html_src: &str, css_src: &str) -> bool {
        covers(&self.html, html_src) && covers(&self.css, css_src)
    }
}

fn join_corrected(lines: &[Correction]) -> String {
    lines
        .iter()
        .map(|c| c.corrected.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn covers(lines: &[Correction], source: &str) -> bool {
    let expected = if source.is_empty() {
        0
    } else {
        source.lines().count()
    };
    if lines.len() != expected {
        return false;
    }
    lines
        .iter()
        .enumerate()
        .all(|(i, c)| c.line_number as usize == i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_keeps_text() {
        let c = Correction::unchanged(3, "<p>ok</p>");
        assert_eq!(c.original, c.corrected);
        assert!(!c.is_error);
        assert!(c.explanation.is_empty());
    }

    #[test]
    fn test_corrected_join_ascending() {
        let mut set = CorrectionSet {
            html: vec![
                Correction::unchanged(2, "b"),
                Correction::changed(1, "a", "A", "Capitalize"),
            ],
            css: vec![],
        };
        set.sort();
        assert_eq!(set.corrected_html(), "A\nb");
        assert_eq!(set.corrected_css(), "");
    }

    #[test]
    fn test_error_count() {
        let set = CorrectionSet {
            html: vec![
                Correction::changed(1, "a", "A", "x"),
                Correction::unchanged(2, "b"),
            ],
            css: vec![Correction::changed(1, "c", "C", "y")],
        };
        assert_eq!(set.error_count(), 2);
    }

    #[test]
    fn test_covers_sources_exact() {
        let set = CorrectionSet {
            html: vec![
                Correction::unchanged(1, "<p>"),
                Correction::unchanged(2, "</p>"),
            ],
            css: vec![],
        };
        assert!(set.covers_sources("<p>\n</p>", ""));
    }

    #[test]
    fn test_covers_sources_rejects_gap() {
        let set = CorrectionSet {
            html: vec![
                Correction::unchanged(1, "<p>"),
                Correction::unchanged(3, "</p>"),
            ],
            css: vec![],
        };
        assert!(!set.covers_sources("<p>\n</p>", ""));
    }

    #[test]
    fn test_covers_sources_rejects_count_mismatch() {
        let set = CorrectionSet {
            html: vec![Correction::unchanged(1, "<p>hi</p>")],
            css: vec![],
        };
        assert!(!set.covers_sources("<p>hi</p>\n<p>there</p>", ""));
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = r#"{
            "lineNumber": 1,
            "original": "<p>hi</p>",
            "corrected": "<p>Hi</p>",
            "isError": true,
            "explanation": "Capitalize"
        }"#;
        let c: Correction = serde_json::from_str(json).unwrap();
        assert_eq!(c.line_number, 1);
        assert!(c.is_error);
        assert_eq!(c.explanation, "Capitalize");

        let out = serde_json::to_value(&c).unwrap();
        assert!(out.get("lineNumber").is_some());
        assert!(out.get("isError").is_some());
    }

    #[test]
    fn test_missing_optional_wire_fields_default() {
        let json = r#"{"lineNumber": 1, "original": "a", "corrected": "a"}"#;
        let c: Correction = serde_json::from_str(json).unwrap();
        assert!(!c.is_error);
        assert!(c.explanation.is_empty());
    }
}
