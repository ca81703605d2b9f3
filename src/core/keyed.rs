//! Keyed constant builder.
//!
//! Validates a flat `name, payload, name, payload, ...` sequence and an
//! optional behaviour mapping, then builds full constants in declaration
//! order. Validation is fail-fast: the first violated gate aborts the
//! whole construction.

use crate::core::constant::{Behaviour, Constant, RESERVED_NAMES};
use crate::core::enumeration::Enum;
use crate::core::error::EnumError;
use crate::core::validate;
use serde_json::Value as JsonValue;
use std::sync::Arc;

pub(crate) fn build(constants: &[JsonValue], behaviour: Behaviour) -> Result<Enum, EnumError> {
    if constants.len() < 2 {
        return Err(EnumError::TooShort);
    }
    if constants.len() % 2 != 0 {
        return Err(EnumError::OddLength);
    }

    let reprs: Vec<String> = constants
        .iter()
        .step_by(2)
        .map(validate::key_repr)
        .collect();
    if let Some(key) = validate::find_duplicate(&reprs) {
        return Err(EnumError::DuplicateKey { key });
    }

    let mut names: Vec<&str> = Vec::with_capacity(reprs.len());
    for (index, candidate) in constants.iter().step_by(2).enumerate() {
        match candidate.as_str() {
            Some(name) if validate::is_valid_name(name) => names.push(name),
            _ => {
                return Err(EnumError::InvalidName {
                    key: reprs[index].clone(),
                    index,
                });
            }
        }
    }

    for pair in constants.chunks_exact(2) {
        if let JsonValue::Object(map) = &pair[1] {
            for name in map.keys() {
                if RESERVED_NAMES.contains(&name.as_str()) {
                    return Err(EnumError::ReservedMemberName { name: name.clone() });
                }
            }
        }
    }

    validate::check_behaviour(&behaviour)?;

    // Snapshot the behaviour once; every constant shares the same map.
    let behaviour = Arc::new(behaviour);
    let slots: Vec<Arc<Constant>> = names
        .iter()
        .zip(constants.chunks_exact(2))
        .map(|(name, pair)| {
            Arc::new(Constant::keyed(
                name.to_string(),
                &pair[1],
                Arc::clone(&behaviour),
            ))
        })
        .collect();
    let keys = names.into_iter().map(String::from).collect();

    Ok(Enum::assemble(keys, slots, Some(behaviour), false))
}
