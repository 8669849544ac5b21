//! Three-state override values for per-repository settings.
//!
//! A repository either inherits a setting from the global defaults or pins it
//! to an explicit value. On disk an inherited setting is simply absent; on the
//! wire clients reset a setting by sending `null` or the string `"default"`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Wire sentinel meaning "drop the override and inherit".
pub const DEFAULT_SENTINEL: &str = "default";

/// A repository-level setting that either inherits or overrides a default.
///
/// # Examples
///
/// ```rust
/// use magic_slash_config::Setting;
///
/// let inherited: Setting<bool> = Setting::Inherit;
/// assert_eq!(inherited.value_or(true), true);
///
/// let pinned = Setting::Set(false);
/// assert_eq!(pinned.value_or(true), false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting<T> {
    /// No override: the global or built-in default applies.
    Inherit,

    /// Explicit override for this repository.
    Set(T),
}

impl<T> Setting<T> {
    /// Check whether this setting falls back to the default.
    pub fn is_inherit(&self) -> bool {
        matches!(self, Setting::Inherit)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Setting::Set(_))
    }

    /// Get the override, if any.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Setting::Inherit => None,
            Setting::Set(value) => Some(value),
        }
    }

    /// Consume the setting and return the override, if any.
    pub fn into_option(self) -> Option<T> {
        match self {
            Setting::Inherit => None,
            Setting::Set(value) => Some(value),
        }
    }

    /// Resolve against a fallback value.
    pub fn value_or(self, fallback: T) -> T {
        self.into_option().unwrap_or(fallback)
    }

    /// Apply a client-supplied update.
    ///
    /// `None` means the field was absent (or carried an unusable value) and
    /// leaves the setting untouched.
    pub fn apply(&mut self, update: Option<Setting<T>>) {
        if let Some(update) = update {
            *self = update;
        }
    }
}

impl<T> Default for Setting<T> {
    fn default() -> Self {
        Setting::Inherit
    }
}

impl<T> From<Option<T>> for Setting<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Setting::Inherit, Setting::Set)
    }
}

/// Interpret a raw JSON value as a setting.
///
/// `null` and `"default"` mean [`Setting::Inherit`]; anything that parses as
/// `T` is [`Setting::Set`]; everything else yields `None`.
fn interpret<T>(value: Value) -> Option<Setting<T>>
where
    T: DeserializeOwned,
{
    match value {
        Value::Null => Some(Setting::Inherit),
        Value::String(ref text) if text == DEFAULT_SENTINEL => Some(Setting::Inherit),
        other => serde_json::from_value(other).ok().map(Setting::Set),
    }
}

/// Deserialize a present-but-optional setting update field.
///
/// Pair with `#[serde(default)]` so an absent field becomes `None` while an
/// explicit `null` becomes `Some(Setting::Inherit)`. Unusable values are
/// ignored (`None`).
pub fn deserialize_update<'de, D, T>(deserializer: D) -> Result<Option<Setting<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(interpret(raw))
}

/// Deserialize an optional value, turning anything unparseable into `None`.
///
/// Used where there is no inherit semantics (global defaults).
pub fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).ok())
}

#[cfg(test)]
#[path = "setting_tests.rs"]
mod tests;
