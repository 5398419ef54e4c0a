//! Builder for assembling configurations.

use crate::builder::error::BuildError;
use crate::core::{Config, StateDefinition};

/// Builder for constructing a [`Config`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::ConfigBuilder;
/// use waypoint::core::StateDefinition;
///
/// let config = ConfigBuilder::new()
///     .initial("idle")
///     .state("idle", StateDefinition::new().on("start", "running"))
///     .state("running", StateDefinition::new().on("stop", "idle"))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.initial(), "idle");
/// assert_eq!(config.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: Vec<(String, StateDefinition)>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    ///
    /// The name does not have to be one of the declared states.
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state and its transitions.
    pub fn state(mut self, name: impl Into<String>, definition: StateDefinition) -> Self {
        self.states.push((name.into(), definition));
        self
    }

    /// Declare several states at once, in order.
    pub fn states<I, N>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = (N, StateDefinition)>,
        N: Into<String>,
    {
        self.states
            .extend(states.into_iter().map(|(name, definition)| (name.into(), definition)));
        self
    }

    /// Build the configuration.
    /// Returns an error if the initial state is missing or a state is declared twice.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        for (index, (name, _)) in self.states.iter().enumerate() {
            if self.states[..index].iter().any(|(earlier, _)| earlier == name) {
                return Err(BuildError::DuplicateState(name.clone()));
            }
        }

        Ok(Config::from_parts(initial, self.states))
    }
}
