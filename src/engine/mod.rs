//! The state machine engine.
//!
//! [`StateMachine`] owns a private copy of its configuration and is the only
//! place where the current state, the history slots and the trigger latch
//! change.
//!
//! # Error model
//!
//! - Constructing without a configuration and moving to an undeclared state
//!   are hard failures, reported as [`MachineError`].
//! - An event that matches nothing latches the engine instead of failing.
//! - `undo` and `redo` report unavailability by returning `false`.

mod error;
mod machine;

pub use error::MachineError;
pub use machine::StateMachine;
