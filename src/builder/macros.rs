//! Macros for ergonomic configuration construction.

/// Build a [`Config`](crate::core::Config) from a literal state table.
///
/// Expands to a [`ConfigBuilder`](crate::builder::ConfigBuilder) chain and
/// evaluates to `Result<Config, BuildError>`.
///
/// # Example
///
/// ```
/// use waypoint::fsm_config;
///
/// let config = fsm_config! {
///     initial: "locked",
///     states: {
///         "locked" => { "coin" => "unlocked" },
///         "unlocked" => { "push" => "locked", "coin" => "unlocked" },
///     }
/// }
/// .unwrap();
///
/// assert_eq!(config.initial(), "locked");
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => {
                    $( $event:expr => $target:expr ),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {
        $crate::builder::ConfigBuilder::new()
            .initial($initial)
            $(
                .state(
                    $state,
                    $crate::core::StateDefinition::new()
                        $( .on($event, $target) )*
                )
            )*
            .build()
    };
}
