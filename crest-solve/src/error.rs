use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during a solve.
///
/// All errors are synchronous and propagate immediately to the caller.
/// A run either completes with a full trajectory or aborts with no
/// trajectory; nothing is retried or salvaged internally.
#[derive(Debug, Error)]
pub enum Error {
    /// An elementwise operation received vectors of unequal length.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A tolerance or other config field failed validation.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    /// A point was required but the vector has zero length.
    #[error("vector is empty")]
    EmptyVector,

    /// The objective returned NaN or an infinity.
    #[error("non-finite objective value {value} at x = {x:?}")]
    NonFiniteObjective { x: Vec<f64>, value: f64 },

    /// The objective itself failed.
    #[error("objective evaluation failed")]
    Objective(#[source] Box<dyn StdError + Send + Sync>),
}
