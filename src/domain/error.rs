// ============================================================
// Layer 3 — Model Errors
// ============================================================
// The library surface returns these typed errors.
// The CLI and application layers wrap them in anyhow.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// A block was configured with values it cannot be built from,
    /// e.g. zero layers or a dropout rate outside [0, 1].
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Feature data did not have a usable shape.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
