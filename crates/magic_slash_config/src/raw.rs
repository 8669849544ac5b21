//! Lossless reading of JSON objects from the configuration file.
//!
//! Stored types are built from a raw object: each takes out the keys it
//! understands and keeps everything else, including values that fail to parse,
//! in an `extra` map. On write the typed fields are emitted first and `extra`
//! is laid over them, so a value that could not be read is written back
//! exactly as it was found.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::Setting;

/// A JSON object in file order.
pub type RawObject = IndexMap<String, Value>;

/// Remove `key` from `raw` if its value parses as `T`.
///
/// A value that does not parse is left in place.
pub(crate) fn take<T>(raw: &mut RawObject, key: &str) -> Option<T>
where
    T: DeserializeOwned,
{
    let value = raw.get(key)?;
    match T::deserialize(value) {
        Ok(parsed) => {
            raw.shift_remove(key);
            Some(parsed)
        }
        Err(e) => {
            warn!(key, value = %value, error = %e, "Keeping unrecognized configuration value as is");
            None
        }
    }
}

/// Remove `key` from `raw` as an explicit override.
///
/// Anything other than a valid value (including `null` and `"default"`)
/// stays in `raw` and the setting inherits.
pub(crate) fn take_setting<T>(raw: &mut RawObject, key: &str) -> Setting<T>
where
    T: DeserializeOwned,
{
    take(raw, key).into()
}

/// Write an override into `raw`; inherited settings are omitted.
pub(crate) fn put_setting<T>(raw: &mut RawObject, key: &str, setting: &Setting<T>)
where
    T: Clone + Into<Value>,
{
    if let Setting::Set(value) = setting {
        raw.insert(key.to_string(), value.clone().into());
    }
}

/// Lay the preserved values over the typed ones.
pub(crate) fn overlay(mut raw: RawObject, extra: RawObject) -> RawObject {
    for (key, value) in extra {
        raw.insert(key, value);
    }
    raw
}

/// Apply a client update to a typed setting.
///
/// Touching the setting discards any unreadable value kept under the same key.
pub(crate) fn apply_setting<T>(
    setting: &mut Setting<T>,
    extra: &mut RawObject,
    key: &str,
    update: Option<Setting<T>>,
) {
    if update.is_some() {
        extra.shift_remove(key);
    }
    setting.apply(update);
}

pub(crate) fn object(raw: RawObject) -> Value {
    Value::Object(raw.into_iter().collect())
}

#[cfg(test)]
#[path = "raw_tests.rs"]
mod tests;
