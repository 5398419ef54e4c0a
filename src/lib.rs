//! Waypoint: a minimal string-keyed finite state machine
//!
//! Waypoint tracks a single current state over a declarative transition
//! table, advances it in response to named events, and remembers exactly
//! one step of history for undo and redo.
//!
//! # Core Concepts
//!
//! - **Config**: The initial state plus, per state, the events it reacts to
//! - **Transition resolution**: Events are matched against the whole table in
//!   declaration order; the first declaration wins regardless of the current state
//! - **History**: One undo slot and one redo slot, see [`HistorySlot`]
//! - **Latch**: An event that matches nothing disables further triggers until
//!   [`StateMachine::clear_error`] is called
//!
//! # Example
//!
//! ```rust
//! use waypoint::{fsm_config, StateMachine};
//!
//! let config = fsm_config! {
//!     initial: "green",
//!     states: {
//!         "green" => { "change" => "yellow" },
//!         "yellow" => { "change" => "red" },
//!         "red" => { "change" => "green" },
//!     }
//! }
//! .unwrap();
//!
//! let mut machine = StateMachine::new(&config);
//! assert_eq!(machine.state(), "green");
//!
//! machine.trigger("change").unwrap();
//! assert_eq!(machine.state(), "yellow");
//!
//! // Unmatched events never fail, they latch the machine instead
//! machine.trigger("unknownEvent").unwrap();
//! machine.trigger("change").unwrap();
//! assert_eq!(machine.state(), "yellow");
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;
pub mod validation;

// Re-export commonly used types
pub use crate::builder::{BuildError, ConfigBuilder};
pub use crate::core::{Config, HistorySlot, StateDefinition, TriggerMode};
pub use crate::engine::{MachineError, StateMachine};
