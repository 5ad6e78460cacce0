// src/disambig.rs
// Picks the candidate image most likely to depict the classified object.

/// Select the first candidate title containing any whitespace-separated
/// token of `label` as a case-insensitive substring.
///
/// Candidates are scanned in source order and the scan stops at the first
/// hit, so an earlier loosely-matching title beats a later exact one. That
/// favors the page's own image ordering over semantic precision, which is
/// intentional: page authors tend to put the representative image first.
pub fn select_image<'a>(label: &str, candidates: &'a [String]) -> Option<&'a str> {
    let tokens: Vec<String> = label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    for title in candidates {
        if title.is_empty() {
            continue;
        }
        let lower_title = title.to_lowercase();
        if tokens.iter().any(|token| lower_title.contains(token)) {
            return Some(title);
        }
    }

    None
}
