//! Flattened, declaration-ordered transition table.
//!
//! Event resolution is global: an event declared by any state can fire from
//! any current state, and the first declaration wins. The table makes that
//! order explicit by flattening the configuration once into a single
//! sequence of rules.

use super::config::Config;

/// A single declared transition: `state` reacts to `event` by moving to `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// State that declared the transition
    pub state: String,
    /// Event name the transition is keyed by
    pub event: String,
    /// Destination state name (not validated)
    pub target: String,
}

/// Every transition of a configuration in (state, transition) declaration order.
///
/// # Example
///
/// ```rust
/// use waypoint::core::TransitionTable;
/// use waypoint::fsm_config;
///
/// let config = fsm_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle", "start" => "running" },
///     }
/// }
/// .unwrap();
///
/// let table = TransitionTable::from_config(&config);
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.first_match("start").unwrap().target, "running");
/// assert_eq!(table.sources("start"), ["idle", "running"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable {
    rules: Vec<Rule>,
}

impl TransitionTable {
    /// Flatten a configuration into its ordered rule sequence.
    pub fn from_config(config: &Config) -> Self {
        let rules = config
            .states()
            .flat_map(|(state, definition)| {
                definition.transitions().map(move |(event, target)| Rule {
                    state: state.to_string(),
                    event: event.to_string(),
                    target: target.to_string(),
                })
            })
            .collect();

        Self { rules }
    }

    /// First rule keyed by `event`, scanning the whole table.
    pub fn first_match(&self, event: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.event == event)
    }

    /// States declaring `event`, one entry per matching rule.
    pub fn sources(&self, event: &str) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|rule| rule.event == event)
            .map(|rule| rule.state.as_str())
            .collect()
    }

    /// All rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
