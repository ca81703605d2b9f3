//! Shared validation primitives for the constant builders.

use crate::core::constant::{Behaviour, RESERVED_NAMES};
use crate::core::error::EnumError;
use regex::Regex;
use rustc_hash::FxHashSet;
use serde_json::Value as JsonValue;
use std::sync::LazyLock;

/// Constant keys must be upper case identifiers: a leading `$`, `_`, or
/// `A-Z`, followed by any run of `0-9A-Z_$`.
static CONST_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[$A-Z_][0-9A-Z_$]*$").unwrap());

pub(crate) fn is_valid_name(name: &str) -> bool {
    CONST_NAME.is_match(name)
}

/// Renders a candidate key for error reporting: the string itself, or the
/// JSON form of a non-string element.
pub(crate) fn key_repr(value: &JsonValue) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

pub(crate) fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Detects duplicate keys by set-cardinality mismatch. The reported key is
/// found by sorting a copy and scanning adjacent pairs, so the
/// lexicographically first colliding key surfaces deterministically.
pub(crate) fn find_duplicate(keys: &[String]) -> Option<String> {
    let distinct: FxHashSet<&str> = keys.iter().map(String::as_str).collect();
    if distinct.len() == keys.len() {
        return None;
    }
    let mut sorted: Vec<&str> = keys.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
        .windows(2)
        .find(|pair| pair[0] == pair[1])
        .map(|pair| pair[0].to_string())
}

/// Rejects behaviour properties that would shadow the `$key`/`$id` fields
/// every constant carries intrinsically.
pub(crate) fn check_behaviour(behaviour: &Behaviour) -> Result<(), EnumError> {
    for name in behaviour.keys() {
        if RESERVED_NAMES.contains(&name.as_str()) {
            return Err(EnumError::ReservedBehaviourName { name: name.clone() });
        }
    }
    Ok(())
}
