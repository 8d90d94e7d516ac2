//! Comma-separated tag text parsing for profile entry fields
//! (allergies, dietary preferences, goals).

/// Split comma-separated user input into trimmed, non-empty tags.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
