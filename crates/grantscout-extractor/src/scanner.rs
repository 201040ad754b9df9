//! Balanced-span scanning over raw model text
//!
//! A small explicit state machine that replaces the regex-based extraction
//! the upstream service used. It walks forward over the text tracking nested
//! bracket/brace depth, treats brackets inside double-quoted strings as
//! inert, and honors backslash escapes, so the balancing rules are auditable
//! and testable in isolation.

/// Find the first complete balanced JSON value at or after `from`.
///
/// Scanning begins at the first `{` or `[` found at byte offset `from` or
/// later. Returns the substring spanning the opener through its matching
/// closer, or `None` when no opener exists or the text ends before the value
/// closes. Scanning stops at the first balanced closure; mismatched closers
/// outside strings are ignored rather than treated as closers.
pub(crate) fn balanced_span(text: &str, from: usize) -> Option<&str> {
    let rel = text[from..].find(['{', '['])?;
    let start = from + rel;

    let mut stack: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => stack.push('}'),
            '[' => stack.push(']'),
            c if stack.last() == Some(&c) => {
                stack.pop();
                if stack.is_empty() {
                    let end = start + offset + c.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}
