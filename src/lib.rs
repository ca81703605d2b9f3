//! Enumforge: validated, immutable enumerations.
//!
//! An enumeration is a closed, ordered set of named constants. Each
//! constant carries a unique identity token, optionally a payload (a
//! scalar value or a set of named members projected onto the constant),
//! and read access to a behaviour layer shared by the whole enumeration.
//! Construction is eager and fails fast: bad names, duplicate keys,
//! reserved field names, and wrong element types all abort before an
//! enumeration value exists.
//!
//! # Construction modes
//!
//! - **Keyed** ([`Enum::keyed`]): flat `name, payload, ...` pairs plus a
//!   behaviour mapping. Object payloads contribute their members as own
//!   fields; any other payload is retained whole under `value`. A
//!   constant's own payload always wins over shared behaviour.
//! - **Symbol-only** ([`Enum::symbol_only`]): a list of names, each
//!   becoming a bare identity token with no payload and no behaviour.
//! - **Concatenation** ([`Enum::concat`]): combines already-built
//!   enumerations. Referencing mode aliases the existing constants
//!   (same objects, same tokens); cloning mode rebuilds everything fresh,
//!   merging constituent behaviour in argument order.
//!
//! # Example
//!
//! ```
//! use enumforge::{Behaviour, Enum};
//! use serde_json::json;
//!
//! let mut behaviour = Behaviour::new();
//! behaviour.insert("planet".to_string(), json!(true));
//!
//! let planets = Enum::keyed(
//!     &[
//!         json!("EARTH"), json!({"orbit": 3}),
//!         json!("MARS"), json!({"orbit": 4}),
//!     ],
//!     behaviour,
//! )
//! .unwrap();
//!
//! let earth = planets.get("EARTH").unwrap();
//! assert_eq!(earth.get("orbit"), Some(&json!(3)));
//! assert_eq!(earth.get("planet"), Some(&json!(true)));
//! assert_eq!(planets.keys(), ["EARTH", "MARS"]);
//! ```
//!
//! Enumerations are plain in-memory values: no I/O, no persistence, no
//! global state beyond the tokens minted per constant.

pub mod core;

pub use crate::core::concat::ConcatOptions;
pub use crate::core::constant::{Behaviour, Constant, RESERVED_NAMES, VALUE_FIELD};
pub use crate::core::enumeration::{BehaviourSpec, ConstructInput, Enum, Iter};
pub use crate::core::error::EnumError;
pub use crate::core::token::Token;
