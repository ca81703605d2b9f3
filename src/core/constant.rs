//! Enumeration constants: an identity token plus optional payload fields
//! and a shared behaviour snapshot.

use crate::core::token::Token;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Shared behaviour mapping: property name to value, visible on every
/// constant of an enumeration unless the constant's own payload already
/// defines a field of that name.
pub type Behaviour = BTreeMap<String, JsonValue>;

/// Field names a payload member or behaviour property may never use:
/// they would shadow the key and identity every constant carries.
pub const RESERVED_NAMES: [&str; 2] = ["$key", "$id"];

/// The field name a scalar (non-object) payload is retained under.
pub const VALUE_FIELD: &str = "value";

/// One named member of an enumeration.
///
/// A constant always carries its declared key and an identity token. In
/// keyed mode it additionally carries its payload, projected at
/// construction: an object payload contributes its members as own fields,
/// any other payload is kept whole under [`VALUE_FIELD`]. In symbol-only
/// mode the constant is nothing but its key and token.
///
/// Equality and hashing follow the token, so a constant equals itself and
/// any alias of itself, never a rebuilt copy.
#[derive(Debug, Clone)]
pub struct Constant {
    key: String,
    id: Token,
    value: Option<JsonValue>,
    members: Option<BTreeMap<String, JsonValue>>,
    behaviour: Arc<Behaviour>,
}

impl Constant {
    /// Builds a keyed-mode constant, minting a fresh token and projecting
    /// the payload. The payload and behaviour are assumed pre-validated.
    pub(crate) fn keyed(key: String, payload: &JsonValue, behaviour: Arc<Behaviour>) -> Self {
        let (value, members) = match payload {
            JsonValue::Object(map) => (
                None,
                Some(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
            ),
            scalar => (Some(scalar.clone()), None),
        };
        Constant {
            key,
            id: Token::mint(),
            value,
            members,
            behaviour,
        }
    }

    /// Builds a symbol-only constant: a named identity token and nothing
    /// else.
    pub(crate) fn bare(key: String) -> Self {
        Constant {
            key,
            id: Token::mint(),
            value: None,
            members: None,
            behaviour: Arc::new(Behaviour::new()),
        }
    }

    /// The name this constant was declared under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The identity token minted for this constant at construction.
    pub fn id(&self) -> Token {
        self.id
    }

    /// The scalar payload, when the constant was declared with one.
    pub fn value(&self) -> Option<&JsonValue> {
        self.value.as_ref()
    }

    /// The projected members of an object payload. Absent for scalar and
    /// symbol-only constants.
    pub fn members(&self) -> Option<&BTreeMap<String, JsonValue>> {
        self.members.as_ref()
    }

    /// True when `name` is one of the constant's own payload fields: a
    /// projected member, or [`VALUE_FIELD`] for a scalar payload.
    pub fn has_own(&self, name: &str) -> bool {
        self.members
            .as_ref()
            .is_some_and(|members| members.contains_key(name))
            || (name == VALUE_FIELD && self.value.is_some())
    }

    /// Resolves a field by the own-payload-first rule: the constant's own
    /// payload fields win over the enumeration's shared behaviour.
    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        if let Some(member) = self.members.as_ref().and_then(|members| members.get(name)) {
            return Some(member);
        }
        if name == VALUE_FIELD {
            if let Some(value) = self.value.as_ref() {
                return Some(value);
            }
        }
        self.behaviour.get(name)
    }

    /// Rebuilds the flat payload this constant was declared with: the
    /// member object for object payloads (empty objects included), the
    /// scalar itself otherwise. Symbol-only constants have no payload and
    /// yield `Null`.
    pub fn to_payload(&self) -> JsonValue {
        if let Some(value) = self.value.as_ref() {
            return value.clone();
        }
        match self.members.as_ref() {
            Some(members) => JsonValue::Object(
                members
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
            None => JsonValue::Null,
        }
    }
}

impl PartialEq for Constant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Constant {}

impl Hash for Constant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}
