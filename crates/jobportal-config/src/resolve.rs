//! Typed resolution rules.
//!
//! Each rule takes the raw value of one variable (if any) plus a fallback and
//! always produces a value. Unset, empty and unparsable inputs all resolve to
//! the fallback; nothing here can fail.
//!
//! [`Resolver`] binds the rules to an [`EnvSource`] and logs at debug level
//! whenever a value that was set gets rejected.

use std::str::FromStr;
use std::time::Duration;

use tracing::debug;

use crate::source::EnvSource;

/// Last resort when neither the variable nor its documented fallback parse.
pub const SAFE_DURATION: Duration = Duration::from_secs(60 * 60);

fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|v| !v.is_empty())
}

/// Parses a base-10 integer, ignoring surrounding whitespace.
pub fn parse_integer<T: FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

/// Parses `true`/`t`/`1` and `false`/`f`/`0`, ignoring case.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

/// Parses human-friendly durations (e.g. `30m`, `1h`, `2h30m`).
pub fn parse_duration(value: &str) -> Option<Duration> {
    humantime::parse_duration(value.trim()).ok()
}

/// Splits on `,`, trimming each element and dropping empty ones.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// The raw value when set and non-empty, otherwise `fallback`.
pub fn string(raw: Option<&str>, fallback: &str) -> String {
    present(raw).unwrap_or(fallback).to_string()
}

/// The raw value verbatim when set (even if empty), otherwise `fallback`.
///
/// Used for values that validation must see exactly as the operator wrote them.
pub fn required_string(raw: Option<&str>, fallback: &str) -> String {
    raw.unwrap_or(fallback).to_string()
}

/// The parsed integer when set and valid, otherwise `fallback`.
pub fn integer<T: FromStr>(raw: Option<&str>, fallback: T) -> T {
    present(raw).and_then(parse_integer).unwrap_or(fallback)
}

/// The parsed boolean when set and recognised, otherwise `fallback`.
pub fn boolean(raw: Option<&str>, fallback: bool) -> bool {
    present(raw).and_then(parse_bool).unwrap_or(fallback)
}

/// Environment value, then the documented fallback string, then [`SAFE_DURATION`].
pub fn duration(raw: Option<&str>, fallback: &str) -> Duration {
    present(raw)
        .and_then(parse_duration)
        .or_else(|| parse_duration(fallback))
        .unwrap_or(SAFE_DURATION)
}

/// Comma-separated list. An input that yields no elements resolves to the fallback list.
pub fn list(raw: Option<&str>, fallback: &str) -> Vec<String> {
    let items = split_list(&string(raw, fallback));
    if items.is_empty() {
        split_list(fallback)
    } else {
        items
    }
}

/// Applies the resolution rules to variables read from an [`EnvSource`].
pub struct Resolver<'a> {
    source: &'a dyn EnvSource,
}

impl<'a> Resolver<'a> {
    pub fn new(source: &'a dyn EnvSource) -> Self {
        Self { source }
    }

    fn raw(&self, key: &str) -> Option<String> {
        self.source.get(key)
    }

    fn rejected(&self, key: &str, raw: Option<&str>, accepted: bool) {
        if accepted {
            return;
        }
        if let Some(value) = present(raw) {
            debug!(key, value, "Unparsable configuration value, using default");
        }
    }

    pub fn string(&self, key: &str, fallback: &str) -> String {
        string(self.raw(key).as_deref(), fallback)
    }

    pub fn required_string(&self, key: &str, fallback: &str) -> String {
        required_string(self.raw(key).as_deref(), fallback)
    }

    pub fn integer<T: FromStr>(&self, key: &str, fallback: T) -> T {
        let raw = self.raw(key);
        let parsed = present(raw.as_deref()).and_then(parse_integer::<T>);
        self.rejected(key, raw.as_deref(), parsed.is_some());
        parsed.unwrap_or(fallback)
    }

    pub fn boolean(&self, key: &str, fallback: bool) -> bool {
        let raw = self.raw(key);
        let parsed = present(raw.as_deref()).and_then(parse_bool);
        self.rejected(key, raw.as_deref(), parsed.is_some());
        parsed.unwrap_or(fallback)
    }

    pub fn duration(&self, key: &str, fallback: &str) -> Duration {
        let raw = self.raw(key);
        self.rejected(
            key,
            raw.as_deref(),
            present(raw.as_deref()).and_then(parse_duration).is_some(),
        );
        duration(raw.as_deref(), fallback)
    }

    pub fn list(&self, key: &str, fallback: &str) -> Vec<String> {
        list(self.raw(key).as_deref(), fallback)
    }
}
