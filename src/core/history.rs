//! Single-level undo/redo history.
//!
//! The engine remembers at most one state behind it and one state ahead of
//! it. Each of those memories is a [`HistorySlot`].

use serde::{Deserialize, Serialize};

/// One remembered state for undo or redo.
///
/// A slot distinguishes "nothing recorded yet" from "recorded, then used up".
/// The distinction matters after an undo: the slot that was just consumed
/// must not be replayed, even though it once held a state.
///
/// # Example
///
/// ```rust
/// use waypoint::core::HistorySlot;
///
/// let slot = HistorySlot::Available("green".to_string());
/// assert_eq!(slot.pending(), Some("green"));
///
/// assert_eq!(HistorySlot::Empty.pending(), None);
/// assert_eq!(HistorySlot::Consumed.pending(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistorySlot {
    /// No history recorded since construction or the last clear
    #[default]
    Empty,
    /// History was used by an undo or redo and cannot be reused
    Consumed,
    /// A state that can be returned to
    Available(String),
}

impl HistorySlot {
    /// Slot holding `state`.
    pub fn holding(state: impl Into<String>) -> Self {
        Self::Available(state.into())
    }

    /// The remembered state, if one can be moved to.
    ///
    /// An empty state name never counts as pending.
    pub fn pending(&self) -> Option<&str> {
        match self {
            Self::Available(state) if !state.is_empty() => Some(state),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed)
    }
}
