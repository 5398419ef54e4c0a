//! Checkpoint and resume functionality for state machines.
//!
//! A checkpoint captures the runtime state of a [`StateMachine`](crate::StateMachine):
//! the current state, both history slots and the trigger latch. It never
//! includes the configuration, which the caller supplies again on resume.

use crate::core::{HistorySlot, TriggerMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of state machine runtime state.
///
/// # Example
///
/// ```rust
/// use waypoint::checkpoint::Checkpoint;
/// use waypoint::{fsm_config, StateMachine};
///
/// let config = fsm_config! {
///     initial: "draft",
///     states: {
///         "draft" => { "submit" => "review" },
///         "review" => { "approve" => "published" },
///         "published" => {},
///     }
/// }
/// .unwrap();
///
/// let mut machine = StateMachine::new(&config);
/// machine.trigger("submit").unwrap();
///
/// let json = machine.checkpoint().to_json().unwrap();
/// let restored = StateMachine::resume(&config, Checkpoint::from_json(&json).unwrap()).unwrap();
/// assert_eq!(restored.state(), "review");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Initial state of the configuration the machine ran with
    pub initial: String,

    /// Current state of the machine
    pub current: String,

    /// Undo slot
    pub previous: HistorySlot,

    /// Redo slot
    pub next: HistorySlot,

    /// Trigger latch
    pub mode: TriggerMode,
}

impl Checkpoint {
    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Encode in the compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from the compact binary format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}
