//! Word wrapping against a measured pixel width.

/// Wrap text to fit within `max_px`, breaking on whitespace.
///
/// `measure` returns the rendered width of a candidate line. A single word
/// wider than `max_px` is kept on its own line rather than split.
pub fn wrap_words<F>(text: &str, max_px: u32, mut measure: F) -> Vec<String>
where
    F: FnMut(&str) -> u32,
{
    let mut lines: Vec<String> = Vec::new();
    let mut cur = String::new();
    for word in text.split_whitespace() {
        let candidate = if cur.is_empty() {
            word.to_string()
        } else {
            format!("{cur} {word}")
        };
        if cur.is_empty() || measure(&candidate) <= max_px {
            cur = candidate;
        } else {
            lines.push(cur);
            cur = word.to_string();
        }
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}
