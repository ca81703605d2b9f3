//! Concatenation of already-built enumerations.
//!
//! Two modes exist. Referencing mode (the default) aliases the existing
//! constants: the result holds the same objects, with the same identity
//! tokens, as its constituents. Cloning mode rebuilds everything from
//! scratch through the keyed or symbol-only builder, so every constant in
//! the result is a brand-new object with a brand-new token, and behaviour
//! is merged across constituents in argument order.

use crate::core::constant::{Behaviour, Constant};
use crate::core::enumeration::Enum;
use crate::core::error::EnumError;
use crate::core::{keyed, symbol, validate};
use rustc_hash::FxHashSet;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Options recognized by [`Enum::concat`].
#[derive(Debug, Clone, Default)]
pub struct ConcatOptions {
    /// Selects cloning mode: rebuild every constant fresh instead of
    /// aliasing the constituents' constants.
    pub clean: bool,
    /// Forces a symbol-only result in cloning mode. Any behaviour
    /// override is ignored when set.
    pub symbol_only: bool,
    /// Replaces the inherited behaviour wholesale (cloning mode). In
    /// referencing mode this is bookkeeping on the result only; it is
    /// never projected onto the aliased constants.
    pub behaviour: Option<Behaviour>,
}

pub(crate) fn build(enums: &[Enum], options: &ConcatOptions) -> Result<Enum, EnumError> {
    if enums.is_empty() {
        return Err(EnumError::EmptyConcat);
    }
    if let Some(behaviour) = &options.behaviour {
        validate::check_behaviour(behaviour)?;
    }
    if options.clean {
        clean(enums, options)
    } else {
        referencing(enums, options)
    }
}

/// Alias semantics: walk constituents in argument order, each
/// constituent's keys in its own declaration order, and share the
/// constants themselves. A key seen twice across any two constituents
/// aborts immediately.
fn referencing(enums: &[Enum], options: &ConcatOptions) -> Result<Enum, EnumError> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut keys: Vec<String> = Vec::new();
    let mut slots: Vec<Arc<Constant>> = Vec::new();

    for en in enums {
        for constant in en {
            if !seen.insert(constant.key()) {
                return Err(EnumError::ConcatDuplicateKey {
                    key: constant.key().to_string(),
                });
            }
            keys.push(constant.key().to_string());
            slots.push(Arc::clone(constant));
        }
    }

    let all_symbol_only = enums.iter().all(Enum::is_symbol_only);
    // A behaviour override demotes the result to keyed mode unless the
    // symbol-only flag explicitly discards it.
    let symbol_only = all_symbol_only && (options.behaviour.is_none() || options.symbol_only);
    let behaviour = if symbol_only {
        None
    } else {
        Some(Arc::new(options.behaviour.clone().unwrap_or_default()))
    };

    Ok(Enum::assemble(keys, slots, behaviour, symbol_only))
}

/// Rebuild semantics: accumulate a flat builder input across the
/// constituents, then run it through the ordinary builders as a fresh
/// construction.
fn clean(enums: &[Enum], options: &ConcatOptions) -> Result<Enum, EnumError> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut ordered: Vec<&Arc<Constant>> = Vec::new();
    for en in enums {
        for constant in en {
            if !seen.insert(constant.key()) {
                return Err(EnumError::ConcatDuplicateKey {
                    key: constant.key().to_string(),
                });
            }
            ordered.push(constant);
        }
    }

    let all_symbol_only = enums.iter().all(Enum::is_symbol_only);
    let symbol_only = options.symbol_only || (options.behaviour.is_none() && all_symbol_only);

    if symbol_only {
        let names: Vec<JsonValue> = ordered
            .iter()
            .map(|constant| JsonValue::String(constant.key().to_string()))
            .collect();
        return symbol::build(&names);
    }

    // Keyed rebuild. Scalar payloads carry forward; any other source
    // shape (projected members, bare symbol-only constants) flattens to
    // an empty payload object.
    let mut flat: Vec<JsonValue> = Vec::with_capacity(ordered.len() * 2);
    for constant in &ordered {
        flat.push(JsonValue::String(constant.key().to_string()));
        flat.push(match constant.value() {
            Some(value) => value.clone(),
            None => JsonValue::Object(serde_json::Map::new()),
        });
    }

    let behaviour = match &options.behaviour {
        Some(map) => map.clone(),
        None => {
            // Union in constituent order: a later constituent's property
            // overwrites an earlier one's on collision.
            let mut merged = Behaviour::new();
            for en in enums {
                if let Some(b) = en.behaviour() {
                    for (name, value) in b {
                        merged.insert(name.clone(), value.clone());
                    }
                }
            }
            merged
        }
    };

    keyed::build(&flat, behaviour)
}
