//! Environment variable helpers
//!
//! Every setting read by the pool and the services goes through these so that a
//! malformed override degrades to the documented default instead of aborting startup.

use std::str::FromStr;

/// Read `key` and parse it, falling back to `default` when unset or unparseable.
pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env_opt(key).unwrap_or(default)
}

/// Read `key` and parse it; `None` when unset or unparseable.
pub fn env_opt<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Read a variable that must be present and non-blank.
pub fn env_required(key: &str) -> Result<String, String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(format!("{} is set but empty", key)),
        Err(_) => Err(format!("{} environment variable not set", key)),
    }
}
