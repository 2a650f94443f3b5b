//! Environment configuration helpers

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Read an environment variable, falling back to `default` when unset or blank
pub fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

/// Parse an environment variable, falling back to `default` when unset or invalid
///
/// Invalid values are logged and ignored.
pub fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring invalid configuration value");
            default
        }),
        Err(_) => default,
    }
}

/// Read a millisecond duration from the environment
pub fn env_duration_ms(key: &str, default: Duration) -> Duration {
    Duration::from_millis(env_parse(key, default.as_millis() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_uses_default() {
        assert_eq!(env_or("PLATFORM_TEST_SURELY_UNSET", "x"), "x");
        assert_eq!(env_parse("PLATFORM_TEST_SURELY_UNSET", 15u32), 15);
        assert_eq!(
            env_duration_ms("PLATFORM_TEST_SURELY_UNSET", Duration::from_secs(8)),
            Duration::from_secs(8)
        );
    }
}
