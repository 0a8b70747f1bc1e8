//! Key-casing translation between idiomatic records and the SDK's raw objects.
//!
//! Outbound records use snake_case (kebab-case is accepted too) and become
//! camelCase with `null` members removed. Inbound raw values become
//! snake_case, also without `null` members, so a null field and a missing one
//! read the same. Every inbound value goes through [`inbound`] before it is typed,
//! so accessors never see raw SDK key names.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::MiniAppError;

/// `icon_url` / `icon-url` → `iconUrl`.
pub fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' || c == '-' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `displayName` → `display_name`. Keys already in snake_case are unchanged.
///
/// Acronyms stay together: `pfpURL` → `pfp_url`, `URLValue` → `url_value`.
pub fn to_snake_case(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1);
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else if c == '-' {
            out.push('_');
        } else {
            out.push(c);
        }
    }
    out
}

/// Raw shape expected by the SDK: camelCase keys, absent values dropped.
pub fn outbound(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (to_camel_case(&k), outbound(v)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(outbound).collect()),
        other => other,
    }
}

/// Idiomatic shape of a raw SDK value: snake_case keys and no `null` members,
/// recursively.
pub fn inbound(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (to_snake_case(&k), inbound(v)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(inbound).collect()),
        other => other,
    }
}

/// Serialize an option struct and translate it to the raw outbound shape.
pub fn to_raw<T: Serialize>(options: &T) -> Result<Value, MiniAppError> {
    Ok(outbound(serde_json::to_value(options)?))
}

/// Normalize a raw SDK value and deserialize it into `T`.
pub fn from_raw<T: DeserializeOwned>(raw: Value) -> Result<T, MiniAppError> {
    Ok(serde_json::from_value(inbound(raw))?)
}
