//! Symbol-only constant builder: bare identity tokens keyed by name.

use crate::core::constant::Constant;
use crate::core::enumeration::Enum;
use crate::core::error::EnumError;
use crate::core::validate;
use serde_json::Value as JsonValue;
use std::sync::Arc;

pub(crate) fn build(names: &[JsonValue]) -> Result<Enum, EnumError> {
    if names.is_empty() {
        return Err(EnumError::EmptyNames);
    }

    let reprs: Vec<String> = names.iter().map(validate::key_repr).collect();
    if let Some(key) = validate::find_duplicate(&reprs) {
        return Err(EnumError::DuplicateKey { key });
    }

    let mut keys: Vec<String> = Vec::with_capacity(names.len());
    for (index, candidate) in names.iter().enumerate() {
        let name = match candidate {
            JsonValue::String(name) => name,
            other => {
                return Err(EnumError::NonStringKey {
                    index,
                    found: validate::json_type_name(other),
                });
            }
        };
        if !validate::is_valid_name(name) {
            return Err(EnumError::InvalidName {
                key: name.clone(),
                index,
            });
        }
        keys.push(name.clone());
    }

    let slots: Vec<Arc<Constant>> = keys
        .iter()
        .map(|key| Arc::new(Constant::bare(key.clone())))
        .collect();

    Ok(Enum::assemble(keys, slots, None, true))
}
