/// Check an ID can be used as a topic path segment.
///
/// Valid IDs are non-empty, contain only ASCII letters, digits and
/// hyphens, and neither start nor end with a hyphen.
pub fn is_valid_id(id: &str) -> bool {
    if id.is_empty() || id.starts_with('-') || id.ends_with('-') {
        return false;
    }
    id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
