//! Inline escaping for untrusted free-text report fields.
//!
//! Both transformations operate on disjoint character sets, so they can be
//! applied in either order with identical results.

/// Break HTML tags by replacing `<` and `>` with their entities. This is a
/// minimal tag-breaking escape, not full entity escaping.
pub fn escape_html(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Prevent Markdown link interpretation by backslash-escaping `[` and `]`.
pub fn escape_markdown(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}
