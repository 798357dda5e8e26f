//! Unique test data so suites sharing a database never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`, for free-form identifiers.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("game");
/// assert!(a.starts_with("game-"));
/// assert_ne!(a, unique_str("game"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A username that passes registration rules: lowercase ASCII alphanumerics,
/// at least five characters.
///
/// Non-alphanumeric characters in `prefix` are dropped.
///
/// ```
/// use backend_test_support::unique_helpers::unique_username;
///
/// let name = unique_username("alice");
/// assert!(name.starts_with("alice"));
/// assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
/// assert_ne!(name, unique_username("alice"));
/// ```
pub fn unique_username(prefix: &str) -> String {
    let clean: String = prefix
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    format!("{}{}", clean, Ulid::new().to_string().to_ascii_lowercase())
}
