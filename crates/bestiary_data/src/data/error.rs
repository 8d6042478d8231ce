use thiserror::Error;

/// Malformed input when constructing a creature.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("expected {expected} trait slots, got {actual}")]
    SlotCount { expected: &'static str, actual: usize },

    #[error("primary {0} slot is empty")]
    EmptyPrimary(&'static str),

    #[error("secondary {0} repeats the primary value")]
    RepeatedSecondary(&'static str),

    #[error("invalid creature chain: {0}")]
    BrokenChain(&'static str),
}
