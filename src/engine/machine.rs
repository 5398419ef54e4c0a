//! State machine that tracks a single current state with one step of history.

use crate::checkpoint::{Checkpoint, CheckpointError, CHECKPOINT_VERSION};
use crate::core::{Config, HistorySlot, TransitionTable, TriggerMode};
use crate::engine::error::MachineError;
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

/// String-keyed finite state machine with single-step undo and redo.
///
/// # Example
///
/// ```rust
/// use waypoint::{fsm_config, StateMachine};
///
/// let config = fsm_config! {
///     initial: "green",
///     states: {
///         "green" => { "change" => "yellow" },
///         "yellow" => { "change" => "red" },
///         "red" => { "change" => "green" },
///     }
/// }
/// .unwrap();
///
/// let mut machine = StateMachine::new(&config);
/// machine.trigger("change").unwrap();
/// assert_eq!(machine.state(), "yellow");
///
/// assert!(machine.undo().unwrap());
/// assert_eq!(machine.state(), "green");
///
/// assert!(machine.redo().unwrap());
/// assert_eq!(machine.state(), "yellow");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Config,
    table: TransitionTable,
    current: String,
    previous: HistorySlot,
    next: HistorySlot,
    mode: TriggerMode,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// The configuration is copied, so later changes to the caller's value
    /// have no effect on the machine. The initial state is not validated.
    pub fn new(config: &Config) -> Self {
        let config = config.clone();
        let table = TransitionTable::from_config(&config);
        let current = config.initial().to_string();

        debug!(initial = %current, states = config.len(), rules = table.len(), "State machine created");

        Self {
            config,
            table,
            current,
            previous: HistorySlot::Empty,
            next: HistorySlot::Empty,
            mode: TriggerMode::Ready,
        }
    }

    /// Create a machine from a configuration that may be absent.
    ///
    /// Fails with [`MachineError::MissingConfig`] when `config` is `None`.
    pub fn try_new(config: Option<&Config>) -> Result<Self, MachineError> {
        config.map(Self::new).ok_or(MachineError::MissingConfig)
    }

    /// Get current state (pure)
    pub fn state(&self) -> &str {
        &self.current
    }

    /// Get the configured initial state (pure)
    pub fn initial(&self) -> &str {
        self.config.initial()
    }

    /// Get the machine's private copy of its configuration (pure)
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the undo slot (pure)
    pub fn previous(&self) -> &HistorySlot {
        &self.previous
    }

    /// Get the redo slot (pure)
    pub fn next(&self) -> &HistorySlot {
        &self.next
    }

    /// Get the trigger mode (pure)
    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Check whether unmatched triggers have latched the machine (pure)
    pub fn is_latched(&self) -> bool {
        self.mode.is_latched()
    }

    /// Check whether `undo` would move the machine (pure)
    pub fn can_undo(&self) -> bool {
        self.previous.pending().is_some()
    }

    /// Check whether `redo` would move the machine (pure)
    pub fn can_redo(&self) -> bool {
        self.next.pending().is_some()
    }

    /// Move to `state`.
    ///
    /// The current state is recorded in the undo slot before `state` is
    /// checked, so the slot is overwritten even when the move fails.
    pub fn change_state(&mut self, state: &str) -> Result<(), MachineError> {
        self.previous = HistorySlot::holding(self.current.as_str());

        if !self.config.contains_state(state) {
            warn!(from = %self.current, to = %state, "Rejected change to undeclared state");
            return Err(MachineError::InvalidState {
                state: state.to_string(),
            });
        }

        debug!(from = %self.current, to = %state, "State changed");
        self.current = state.to_string();
        Ok(())
    }

    /// Move along the first declared transition keyed by `event`.
    ///
    /// The search covers every state's transitions in declaration order,
    /// not just those of the current state. An empty event, or an event no
    /// state declares, latches the machine; while latched every call is a
    /// no-op. Only a matched transition to an undeclared state is an error.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        if !event.is_empty() && !self.mode.is_latched() {
            if let Some(rule) = self.table.first_match(event) {
                let target = rule.target.clone();
                debug!(event = %event, declared_by = %rule.state, to = %target, "Event matched");
                return self.change_state(&target);
            }
        }

        if self.mode.is_latched() {
            debug!(event = %event, "Ignoring trigger while latched");
        } else {
            warn!(event = %event, state = %self.current, "No transition for event, latching triggers");
        }
        self.mode = TriggerMode::Latched;
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// History and the trigger latch are left untouched.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = %self.config.initial(), "Reset to initial state");
        self.current = self.config.initial().to_string();
    }

    /// Clear the trigger latch so events are resolved again.
    pub fn clear_error(&mut self) {
        if self.mode.is_latched() {
            debug!("Trigger latch cleared");
        }
        self.mode = TriggerMode::Ready;
    }

    /// List state names.
    ///
    /// Without an event (or with an empty one) every declared state is
    /// returned in declaration order. With an event, each state declaring
    /// it is returned once per matching transition.
    pub fn get_states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            Some(event) if !event.is_empty() => self.table.sources(event),
            _ => self.config.state_names().collect(),
        }
    }

    /// Go back to the state before the last change.
    ///
    /// Returns `false` when there is nothing to go back to, including right
    /// after a previous undo.
    pub fn undo(&mut self) -> Result<bool, MachineError> {
        let Some(target) = self.previous.pending().map(str::to_string) else {
            return Ok(false);
        };

        debug!(from = %self.current, to = %target, "Undo");
        self.next = HistorySlot::holding(self.current.as_str());
        self.change_state(&target)?;
        self.previous = HistorySlot::Consumed;
        Ok(true)
    }

    /// Re-apply the state left by the last undo.
    ///
    /// Returns `false` unless an undo left a pending state behind.
    pub fn redo(&mut self) -> Result<bool, MachineError> {
        let Some(target) = self.next.pending().map(str::to_string) else {
            return Ok(false);
        };

        debug!(from = %self.current, to = %target, "Redo");
        self.change_state(&target)?;
        self.next = HistorySlot::Consumed;
        Ok(true)
    }

    /// Forget both history slots.
    pub fn clear_history(&mut self) {
        debug!("History cleared");
        self.previous = HistorySlot::Empty;
        self.next = HistorySlot::Empty;
    }

    /// Capture the runtime state of the machine.
    ///
    /// The configuration is not part of the checkpoint; it must be supplied
    /// again to [`StateMachine::resume`].
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial: self.config.initial().to_string(),
            current: self.current.clone(),
            previous: self.previous.clone(),
            next: self.next.clone(),
            mode: self.mode,
        }
    }

    /// Rebuild a machine from `config` and a previously taken checkpoint.
    pub fn resume(config: &Config, checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if checkpoint.initial != config.initial() {
            return Err(CheckpointError::InitialMismatch {
                checkpoint: checkpoint.initial,
                configured: config.initial().to_string(),
            });
        }

        if checkpoint.current != config.initial() && !config.contains_state(&checkpoint.current) {
            return Err(CheckpointError::UndeclaredState(checkpoint.current));
        }

        debug!(id = %checkpoint.id, current = %checkpoint.current, "Resuming from checkpoint");

        let mut machine = Self::new(config);
        machine.current = checkpoint.current;
        machine.previous = checkpoint.previous;
        machine.next = checkpoint.next;
        machine.mode = checkpoint.mode;
        Ok(machine)
    }
}
