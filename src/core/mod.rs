//! Core state machine types.
//!
//! This module contains the pure data of the engine:
//! - Configuration via `Config` and `StateDefinition`
//! - The declaration-ordered `TransitionTable`
//! - Single-level history via `HistorySlot`
//! - The trigger latch via `TriggerMode`
//!
//! Nothing in this module mutates engine state; that happens only in
//! [`crate::engine`].

mod config;
mod history;
mod mode;
mod table;

pub use config::{Config, StateDefinition};
pub use history::HistorySlot;
pub use mode::TriggerMode;
pub use table::{Rule, TransitionTable};
