//! Engine error types.

use thiserror::Error;

/// Hard failures raised by the state machine.
///
/// Soft failures are not errors: an unmatched trigger latches the engine and
/// unavailable undo/redo return `false`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// The machine was constructed without a configuration
    #[error("No configuration supplied")]
    MissingConfig,

    /// A transition targeted a state that is not declared
    #[error("State '{state}' is not declared")]
    InvalidState { state: String },
}
