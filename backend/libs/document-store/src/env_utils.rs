//! Environment variable parsing utilities
//!
//! Small helpers for reading typed settings with defaults, so configuration
//! code never has to unwrap.

use std::str::FromStr;

/// Parse an environment variable with a default fallback
///
/// # Example
/// ```ignore
/// let port: u16 = parse_env_with_default("PORT", 8000);
/// ```
pub fn parse_env_with_default<T: FromStr>(key: &str, default: T) -> T {
    parse_env_optional(key).unwrap_or(default)
}

/// Parse an environment variable, returning None if missing or invalid
pub fn parse_env_optional<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Read a string variable, treating an empty or whitespace value as unset
pub fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_parse_env_with_default() {
        let result: u32 = parse_env_with_default("DOCSTORE_NONEXISTENT_VAR", 42);
        assert_eq!(result, 42);

        std::env::set_var("DOCSTORE_TEST_PORT", "8080");
        let result: u16 = parse_env_with_default("DOCSTORE_TEST_PORT", 3000);
        assert_eq!(result, 8080);
        std::env::remove_var("DOCSTORE_TEST_PORT");
    }

    #[test]
    #[serial_test::serial]
    fn test_parse_env_optional_ignores_garbage() {
        std::env::set_var("DOCSTORE_TEST_OPT", "not-a-number");
        assert_eq!(parse_env_optional::<u32>("DOCSTORE_TEST_OPT"), None);
        std::env::remove_var("DOCSTORE_TEST_OPT");
    }

    #[test]
    #[serial_test::serial]
    fn test_non_empty_env() {
        std::env::set_var("DOCSTORE_TEST_BLANK", "   ");
        assert_eq!(non_empty_env("DOCSTORE_TEST_BLANK"), None);

        std::env::set_var("DOCSTORE_TEST_BLANK", " grid ");
        assert_eq!(non_empty_env("DOCSTORE_TEST_BLANK").as_deref(), Some("grid"));
        std::env::remove_var("DOCSTORE_TEST_BLANK");
    }
}
