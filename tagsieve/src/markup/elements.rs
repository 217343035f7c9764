// Tags that never carry a separate closing tag. They are always written
// back with a trailing ` /` and never enter the suppression stack.
pub const SELF_CLOSING_TAGS: &[&str] = &[
    "meta", "base", "link", "hr", "br", "wbr", "col", "img", "area", "input", "textarea",
    "embed", "param", "source", "object",
];

// Attributes whose value is always their own name.
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "checked", "compact", "declare", "defer", "disabled", "ismap", "multiple", "nohref",
    "noresize", "noshade", "nowrap", "readonly", "selected",
];

/// Returns `true` if `name` (already lowercased) is a self-closing tag.
pub fn is_self_closing(name: &str) -> bool {
    SELF_CLOSING_TAGS.contains(&name)
}

/// Returns `true` if `name` is a boolean attribute. The comparison is
/// case-sensitive: attribute names keep the case they had in the input.
pub fn is_boolean_attribute(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES.contains(&name)
}

/// Lowercases a tag name. Every tag name leaving the tokenizer goes through
/// here exactly once.
pub fn normalize_tag_name(name: &str) -> String {
    name.to_lowercase()
}
