use std::str::FromStr;

use anyhow::Context;

/// Reads `key` from the environment, falling back to `default` when unset.
pub fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_value(key, std::env::var(key).ok(), default)
}

/// Parses an optional raw value; blank counts as unset.
pub fn parse_value<T>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .with_context(|| format!("{key} has an invalid value: {value:?}")),
    }
}
