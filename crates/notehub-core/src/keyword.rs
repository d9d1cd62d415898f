//! Keyword normalization.
//!
//! Keywords are lowercased and trimmed before storage and comparison, so
//! `"Rust"`, `" rust "`, and `"rust"` all collapse to the same entry. The
//! same normalization is applied to search queries, which keeps the inverted
//! index consistent with what callers typed.

/// Minimum query length accepted by keyword search.
///
/// Shorter queries match too broadly to be useful and are answered with an
/// empty result set rather than an error.
pub const MIN_QUERY_LEN: usize = 3;

/// Normalizes a single keyword or query: trim surrounding whitespace,
/// lowercase the rest.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalizes a keyword list, collapsing duplicates while preserving
/// first-occurrence order for display.
///
/// Keywords that are empty after trimming are dropped.
#[must_use]
pub fn dedup_keywords(raw: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for keyword in raw {
        let normalized = normalize(keyword);
        if normalized.is_empty() || seen.contains(&normalized) {
            continue;
        }
        seen.push(normalized);
    }
    seen
}
