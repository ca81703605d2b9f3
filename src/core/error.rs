use thiserror::Error;

/// Failures raised by enumeration construction and concatenation.
///
/// Every variant is terminal: construction aborts on the first violation
/// and no partially built enumeration is ever returned.
#[derive(Error, Debug)]
pub enum EnumError {
    #[error("expected constants to be a sequence of length >= 2")]
    TooShort,
    #[error("expected constants to have even length")]
    OddLength,
    #[error("expected names to be a non-empty sequence")]
    EmptyNames,
    #[error("expected at least one enum to concatenate")]
    EmptyConcat,
    #[error(
        "constants must be valid upper case variable names: '{key}' at index {index} violates this invariant"
    )]
    InvalidName { key: String, index: usize },
    #[error("duplicate constant for key '{key}'")]
    DuplicateKey { key: String },
    #[error("concat: duplicate constant for key '{key}'")]
    ConcatDuplicateKey { key: String },
    #[error("constant member '{name}' collides with a reserved name ($key, $id)")]
    ReservedMemberName { name: String },
    #[error("behaviour property '{name}' collides with a reserved name ($key, $id)")]
    ReservedBehaviourName { name: String },
    #[error("expected constant key at index {index} to be a string, found {found}")]
    NonStringKey { index: usize, found: &'static str },
}
