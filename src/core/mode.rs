//! Trigger mode of the engine.

use serde::{Deserialize, Serialize};

/// Whether `trigger` is still accepting events.
///
/// A trigger that matches no transition latches the engine. While latched,
/// every `trigger` call is ignored until the latch is explicitly cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerMode {
    /// Events are resolved against the transition table
    #[default]
    Ready,
    /// An unmatched trigger was seen; further triggers are no-ops
    Latched,
}

impl TriggerMode {
    pub fn is_latched(self) -> bool {
        matches!(self, Self::Latched)
    }
}
