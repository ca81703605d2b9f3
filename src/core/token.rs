//! Identity tokens for enumeration constants.

use std::fmt;
use ulid::Ulid;

/// Opaque identity minted once per constant at construction.
///
/// A token is equal only to itself and to copies of itself. Constants
/// built from the same name in two separate constructions carry distinct
/// tokens, which makes the token the equality and dispatch basis for
/// consuming code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(Ulid);

impl Token {
    pub(crate) fn mint() -> Self {
        Token(Ulid::new())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
