use crate::types::TAG_OPEN;

/// Normalizes one physical line into candidate lines.
///
/// A line holding more than one `<` is packed: it is cut immediately before
/// every `<` and empty fragments are dropped. Any other line comes back
/// unchanged, including blank lines and prose.
pub fn split_packed(line: &str) -> Vec<&str> {
    if line.matches(TAG_OPEN).count() <= 1 {
        return vec![line];
    }

    let mut out = Vec::new();
    let mut start = 0;
    for (idx, _) in line.match_indices(TAG_OPEN) {
        if idx > start {
            out.push(&line[start..idx]);
        }
        start = idx;
    }
    out.push(&line[start..]);
    out
}

/// Applies [`split_packed`] across every line of `text`.
pub fn candidate_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().flat_map(split_packed)
}
