//! Gate that decides whether a log action runs at all.

/// The only flag value that enables output
pub const ENABLED_SENTINEL: &str = "development";

/// Returns true if `flag` is exactly the enabling sentinel.
///
/// The match is intentionally strict:
/// - No prefix matching
/// - Case sensitive
/// - No whitespace trimming
pub fn is_enabled(flag: Option<&str>) -> bool {
    flag == Some(ENABLED_SENTINEL)
}

/// Runs `action` once and returns its result if the flag enables output,
/// otherwise returns `None` without calling it.
pub fn run_if_enabled<T, F>(flag: Option<&str>, action: F) -> Option<T>
where
    F: FnOnce() -> T,
{
    if !is_enabled(flag) {
        return None;
    }
    Some(action())
}
