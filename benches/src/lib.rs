//! Shared inputs for the tagsieve benchmarks.

use tagsieve::SanitizerConfig;

pub const SAMPLE_DOCUMENTS: &[(&str, &str)] = &[
    ("plain_text", "Hello world, nothing to see here."),
    ("safe_html", "<p>Safe <b>content</b> with <a href=\"/x\">a link</a></p>"),
    ("script_tag", "<p>hi</p><script>alert('xss')</script>"),
    ("img_onerror", "<img src=x onerror=alert(1)>"),
    ("comment", "<!-- note --><p>after</p>"),
    ("quoted_gt", "<a title=\"1 > 0\" href='y'>z</a>"),
    ("malformed", "1 < 2 and <b unterminated"),
];

/// The whitelist most benchmarks run with.
pub fn rich_text_config() -> SanitizerConfig {
    SanitizerConfig::default()
        .with_allowed_tags(["p", "b", "i", "em", "strong", "a", "ul", "li", "br", "img"])
        .with_allowed_attributes(["href", "src", "title", "alt"])
}

/// Repeats a small mixed fragment until the document is at least `size` bytes.
pub fn document_of_size(size: usize) -> String {
    let fragment = "<div class=\"c\"><p onclick=\"x()\">text <b>bold</b></p><script>bad()</script></div>";
    let mut doc = String::with_capacity(size + fragment.len());
    while doc.len() < size {
        doc.push_str(fragment);
    }
    doc
}

/// `depth` nested disallowed tags around a single text node.
pub fn nested_document(depth: usize) -> String {
    format!("{}x{}", "<span>".repeat(depth), "</span>".repeat(depth))
}
