//! Preview document composition
//!
//! Combines the two code buffers into one self-contained HTML document with
//! the style sheet scoped into the head and the markup in the body. Script
//! elements are stripped from the markup before composition: the composed
//! document never carries executable script content.

/// Build a complete, isolated document from the two buffers.
pub fn compose_document(html: &str, css: &str) -> String {
    let body = strip_scripts(html);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<style>\n{}\n</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        css, body
    )
}

/// Remove `<script>` elements (tags and content) from markup.
///
/// Matching is ASCII case-insensitive, which keeps byte offsets identical
/// between the search text and the original. An unterminated script element
/// swallows the rest of the input rather than letting its content through.
pub fn strip_scripts(html: &str) -> String {
    let lower = html.to_ascii_lowercase();
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;

    while let Some(rel) = lower[pos..].find("<script") {
        let start = pos + rel;
        out.push_str(&html[pos..start]);

        match lower[start..].find("</script>") {
            Some(end_rel) => {
                pos = start + end_rel + "</script>".len();
            }
            None => return out,
        }
    }
    out.push_str(&html[pos..]);
    out
}

/// Plain-text flattening of markup for the terminal preview pane: tags are
/// dropped and the common entities decoded. Line structure is preserved.
pub fn flatten_markup(html: &str) -> String {
    let stripped = strip_scripts(html);
    stripped
        .lines()
        .map(flatten_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn flatten_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_tag = false;
    for ch in line.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    decode_entities(out.trim_end())
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_places_css_in_head_and_markup_in_body() {
        let doc = compose_document("<p>hi</p>", "p { color: red; }");
        let style_pos = doc.find("<style>").unwrap();
        let body_pos = doc.find("<body>").unwrap();
        assert!(style_pos < body_pos);
        assert!(doc.contains("p { color: red; }"));
        assert!(doc.contains("<p>hi</p>"));
    }

    #[test]
    fn test_compose_never_carries_script() {
        let doc = compose_document(
            "<p>ok</p><script>alert('x')</script><p>after</p>",
            "",
        );
        assert!(!doc.contains("alert"));
        assert!(!doc.to_lowercase().contains("<script"));
        assert!(doc.contains("<p>ok</p>"));
        assert!(doc.contains("<p>after</p>"));
    }

    #[test]
    fn test_strip_scripts_case_insensitive() {
        let out = strip_scripts("a<SCRIPT src=\"x.js\">code()</SCRIPT>b");
        assert_eq!(out, "ab");
    }

    #[test]
    fn test_strip_scripts_unterminated_swallows_tail() {
        let out = strip_scripts("before<script>evil(");
        assert_eq!(out, "before");
    }

    #[test]
    fn test_flatten_markup_strips_tags_and_decodes() {
        let out = flatten_markup("<h1>Hello &amp; welcome</h1>\n<p>1 &lt; 2</p>");
        assert_eq!(out, "Hello & welcome\n1 < 2");
    }

    #[test]
    fn test_flatten_markup_keeps_line_structure() {
        let out = flatten_markup("<ul>\n<li>one</li>\n<li>two</li>\n</ul>");
        assert_eq!(out.lines().count(), 4);
    }
}
