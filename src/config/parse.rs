//! Environment variable parsing utilities.

use std::str::FromStr;
use std::time::Duration;

use super::ConfigError;
use crate::env::EnvSource;

/// Get variable with default value (also used when the variable is empty).
pub fn env_or<S: EnvSource + ?Sized>(env: &S, key: &str, default: &str) -> String {
    env_opt(env, key).unwrap_or_else(|| default.to_string())
}

/// Get optional variable (None if empty or missing).
pub fn env_opt<S: EnvSource + ?Sized>(env: &S, key: &str) -> Option<String> {
    env.var(key).filter(|s| !s.is_empty())
}

/// Parse variable as boolean.
/// Treats "1", "true" (case-insensitive) as true.
pub fn env_bool<S: EnvSource + ?Sized>(env: &S, key: &str, default: bool) -> bool {
    env_opt(env, key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

/// Parse variable with type conversion.
pub fn env_parse<S, T>(env: &S, key: &str, default: T) -> Result<T, ConfigError>
where
    S: EnvSource + ?Sized,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_opt(env, key) {
        Some(v) => v.parse().map_err(|e: T::Err| ConfigError::Parse {
            key: key.into(),
            value: v,
            error: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Parse duration string ("500ms", "30s", "2m", "1h", or bare seconds).
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim().to_lowercase();
    let split = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    let (num_str, unit) = s.split_at(split);

    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid duration: {}", s))?;

    match unit {
        "" | "s" => Ok(Duration::from_secs(num)),
        "ms" => Ok(Duration::from_millis(num)),
        "m" => Ok(Duration::from_secs(num * 60)),
        "h" => Ok(Duration::from_secs(num * 3600)),
        _ => Err(format!("invalid unit: {}", unit)),
    }
}

/// Parse variable as duration.
pub fn env_duration<S: EnvSource + ?Sized>(
    env: &S,
    key: &str,
    default: &str,
) -> Result<Duration, ConfigError> {
    let value = env_or(env, key, default);
    parse_duration(&value).map_err(|e| ConfigError::Parse {
        key: key.into(),
        value,
        error: e,
    })
}
