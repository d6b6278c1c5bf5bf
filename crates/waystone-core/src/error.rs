//! Error types shared by all engines.

use thiserror::Error;

/// Errors produced by engine operations.
///
/// Engines treat these as reports of caller mistakes: the operation that
/// produced the error has not changed any state. Collaborator failures are
/// never surfaced through this type; they degrade to fallback values inside
/// the async flows (see [`GatewayError`]).
#[derive(Debug, Error)]
pub enum EngineError {
    /// Invalid input to an engine operation, or an operation invoked in a
    /// state that does not permit it.
    #[error("contract violation: {0}")]
    ContractViolation(String),
}

/// Errors produced by external gateway collaborators.
///
/// Every gateway method fails independently. No gateway failure is fatal:
/// callers log it and fall back to a "no data" or cached value.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The gateway could not be reached.
    #[error("gateway unavailable: {0}")]
    Unavailable(String),

    /// The gateway answered with an error.
    #[error("gateway backend error: {0}")]
    Backend(String),
}
