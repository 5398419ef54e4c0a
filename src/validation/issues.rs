//! Problems an audit can find in a configuration.

use thiserror::Error;

/// A single problem found while auditing a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("Initial state '{initial}' is not declared")]
    UndeclaredInitial { initial: String },

    #[error("Transition '{event}' in state '{state}' targets undeclared state '{target}'")]
    DanglingTarget {
        state: String,
        event: String,
        target: String,
    },

    /// An earlier declaration of the same event always wins, so this one never fires
    #[error("Transition '{event}' in state '{state}' is shadowed by the one in state '{winner}'")]
    ShadowedTransition {
        state: String,
        event: String,
        winner: String,
    },
}
