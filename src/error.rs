use thiserror::Error;

/// Top-level error type for the DCEL.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DcelError {
    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors raised when a call would break, or runs into, inconsistent topology.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("half-edge target is already set")]
    TargetAlreadySet,

    #[error("a half-edge cannot be its own twin")]
    SelfTwin,

    #[error("half-edges bound different faces")]
    FaceMismatch,

    #[error("half-edge has no next link")]
    MissingNext,

    #[error("boundary walk did not return to its start")]
    BrokenCycle,

    #[error("cycle needs at least one half-edge")]
    EmptyCycle,

    #[error("half-edge appears more than once in a cycle")]
    RepeatedHalfEdge,

    #[error("face has no bound half-edge")]
    UnboundFace,
}

/// Convenience type alias for results using [`DcelError`].
pub type Result<T> = std::result::Result<T, DcelError>;
