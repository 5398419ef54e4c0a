//! Declarative configuration for a state machine.
//!
//! A configuration names the initial state and, for every declared state,
//! the events it reacts to and where each event leads. Declaration order is
//! significant: it decides which transition wins when several states
//! declare the same event.

/// Transitions declared by a single state.
///
/// Entries keep the order in which they were declared. Declaring the same
/// event twice keeps both entries; the first one is the one that fires.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateDefinition;
///
/// let green = StateDefinition::new()
///     .on("change", "yellow")
///     .on("emergency", "red");
///
/// assert_eq!(green.target("change"), Some("yellow"));
/// assert_eq!(green.target("unknown"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateDefinition {
    transitions: Vec<(String, String)>,
}

impl StateDefinition {
    /// Create a state with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that `event` moves the machine to `target`.
    ///
    /// The target is not checked against the declared states here; it is
    /// only validated when the transition is taken.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.push((event.into(), target.into()));
        self
    }

    /// Declared `(event, target)` pairs in declaration order.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.transitions
            .iter()
            .map(|(event, target)| (event.as_str(), target.as_str()))
    }

    /// Destination of the first transition keyed by `event`, if any.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions()
            .find(|(declared, _)| *declared == event)
            .map(|(_, target)| target)
    }

    /// Whether this state declares no transitions.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// Complete machine configuration: an initial state plus the state table.
///
/// `Config` is assembled with [`ConfigBuilder`](crate::builder::ConfigBuilder)
/// or the [`fsm_config!`](crate::fsm_config) macro. The initial state is
/// deliberately not required to be one of the declared states.
///
/// # Example
///
/// ```rust
/// use waypoint::fsm_config;
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
/// assert_eq!(config.initial(), "green");
/// assert_eq!(config.state_names().collect::<Vec<_>>(), ["green", "yellow", "red"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    initial: String,
    states: Vec<(String, StateDefinition)>,
}

impl Config {
    pub(crate) fn from_parts(initial: String, states: Vec<(String, StateDefinition)>) -> Self {
        Self { initial, states }
    }

    /// Name of the starting state.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Declared states in declaration order.
    pub fn states(&self) -> impl Iterator<Item = (&str, &StateDefinition)> {
        self.states
            .iter()
            .map(|(name, definition)| (name.as_str(), definition))
    }

    /// Declared state names in declaration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(|(name, _)| name.as_str())
    }

    /// Look up a state's definition by name.
    pub fn state(&self, name: &str) -> Option<&StateDefinition> {
        self.states()
            .find(|(declared, _)| *declared == name)
            .map(|(_, definition)| definition)
    }

    /// Whether `name` is a declared state.
    pub fn contains_state(&self, name: &str) -> bool {
        self.state(name).is_some()
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no states are declared.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
