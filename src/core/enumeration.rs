//! The enumeration root object: an ordered, fixed set of named constants
//! plus optional shared behaviour, built eagerly and never mutated.

use crate::core::concat::{self, ConcatOptions};
use crate::core::constant::{Behaviour, Constant};
use crate::core::error::EnumError;
use crate::core::{keyed, symbol};
use rustc_hash::FxHashMap;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// A closed, ordered set of named constants.
///
/// Construction is eager and fail-fast: any structural violation (bad
/// naming, duplicate keys, reserved names, wrong element types) surfaces
/// as an [`EnumError`] before an `Enum` value exists. Once built, an
/// enumeration is immutable; all accessors observe declaration order for
/// its whole lifetime.
///
/// Constants are held behind `Arc` so that referencing concatenation can
/// alias them without copying or re-minting identity.
#[derive(Debug, Clone)]
pub struct Enum {
    keys: Vec<String>,
    index: FxHashMap<String, usize>,
    constants: Vec<Arc<Constant>>,
    behaviour: Option<Arc<Behaviour>>,
    symbol_only: bool,
}

/// First argument of [`Enum::construct`]: either a flat constant
/// description or a list of already-built enumerations to concatenate.
#[derive(Debug, Clone, Copy)]
pub enum ConstructInput<'a> {
    Values(&'a [JsonValue]),
    Enums(&'a [Enum]),
}

/// Second argument of [`Enum::construct`]: a behaviour mapping, the
/// symbol-only flag, or nothing. `Flag(false)` and `Absent` both mean an
/// empty behaviour mapping.
#[derive(Debug, Clone)]
pub enum BehaviourSpec {
    Absent,
    Flag(bool),
    Map(Behaviour),
}

impl Enum {
    /// Builds a keyed enumeration from a flat `name, payload, ...`
    /// sequence and a (possibly empty) behaviour mapping.
    pub fn keyed(constants: &[JsonValue], behaviour: Behaviour) -> Result<Enum, EnumError> {
        keyed::build(constants, behaviour)
    }

    /// Builds a symbol-only enumeration: each name becomes a bare
    /// identity token with no payload and no behaviour.
    pub fn symbol_only(names: &[JsonValue]) -> Result<Enum, EnumError> {
        symbol::build(names)
    }

    /// Combines previously built enumerations into one, in referencing or
    /// cloning mode depending on `options`.
    pub fn concat(enums: &[Enum], options: &ConcatOptions) -> Result<Enum, EnumError> {
        concat::build(enums, options)
    }

    /// Dispatch sugar over the three named builders, for callers that
    /// hold a runtime description of what to construct. A list of
    /// enumerations routes to [`Enum::concat`] (a behaviour mapping
    /// becomes the behaviour override, the `true` flag forces a
    /// symbol-only result); a flat value list routes to
    /// [`Enum::symbol_only`] when the `true` flag is given and to
    /// [`Enum::keyed`] otherwise.
    pub fn construct(
        input: ConstructInput<'_>,
        behaviour: BehaviourSpec,
    ) -> Result<Enum, EnumError> {
        match input {
            ConstructInput::Enums(enums) => {
                let options = match behaviour {
                    BehaviourSpec::Absent | BehaviourSpec::Flag(false) => ConcatOptions::default(),
                    BehaviourSpec::Flag(true) => ConcatOptions {
                        symbol_only: true,
                        ..ConcatOptions::default()
                    },
                    BehaviourSpec::Map(map) => ConcatOptions {
                        behaviour: Some(map),
                        ..ConcatOptions::default()
                    },
                };
                concat::build(enums, &options)
            }
            ConstructInput::Values(values) => match behaviour {
                BehaviourSpec::Flag(true) => symbol::build(values),
                BehaviourSpec::Absent | BehaviourSpec::Flag(false) => {
                    keyed::build(values, Behaviour::new())
                }
                BehaviourSpec::Map(map) => keyed::build(values, map),
            },
        }
    }

    /// Assembles a fully validated enumeration. Callers guarantee `keys`
    /// and `constants` are parallel and duplicate-free.
    pub(crate) fn assemble(
        keys: Vec<String>,
        constants: Vec<Arc<Constant>>,
        behaviour: Option<Arc<Behaviour>>,
        symbol_only: bool,
    ) -> Enum {
        let index = keys
            .iter()
            .enumerate()
            .map(|(position, key)| (key.clone(), position))
            .collect();
        Enum {
            keys,
            index,
            constants,
            behaviour,
            symbol_only,
        }
    }

    /// An owned copy of the ordered key sequence. Mutating the returned
    /// vector cannot affect the enumeration.
    pub fn keys(&self) -> Vec<String> {
        self.keys.clone()
    }

    /// The constants in key order.
    pub fn values(&self) -> Vec<Arc<Constant>> {
        self.iter().map(Arc::clone).collect()
    }

    /// `(key, constant)` pairs in key order.
    pub fn entries(&self) -> Vec<(String, Arc<Constant>)> {
        self.iter()
            .map(|constant| (constant.key().to_string(), Arc::clone(constant)))
            .collect()
    }

    /// Looks up a constant by key.
    pub fn get(&self, key: &str) -> Option<&Arc<Constant>> {
        self.index.get(key).map(|&position| &self.constants[position])
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// True when the constants are bare identity tokens with no payload
    /// or behaviour.
    pub fn is_symbol_only(&self) -> bool {
        self.symbol_only
    }

    /// The behaviour snapshot taken at construction. Absent for
    /// symbol-only enumerations.
    pub fn behaviour(&self) -> Option<&Behaviour> {
        self.behaviour.as_deref()
    }

    /// Iterates the constants in key order. Every call yields a fresh,
    /// restartable iterator that re-derives the sequence from the key
    /// order and per-key lookup; no cursor state is shared between
    /// traversals.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self,
            position: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Enum {
    type Item = &'a Arc<Constant>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ordered traversal over an enumeration's constants.
pub struct Iter<'a> {
    inner: &'a Enum,
    position: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Arc<Constant>;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.inner.keys.get(self.position)?;
        self.position += 1;
        self.inner.get(key)
    }
}
