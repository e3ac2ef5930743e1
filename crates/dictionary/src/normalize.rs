/// Trims surrounding whitespace and lowercases, so that keys and queries
/// compare equal regardless of how the user typed them.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}
