//! Configuration audit using Validation.

use crate::core::{Config, TransitionTable};
use crate::validation::issues::ConfigIssue;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a configuration audit
pub type AuditResult = Validation<(), NonEmptyVec<ConfigIssue>>;

/// Audit `config`, accumulating ALL issues.
///
/// Returns `Validation::Success(())` if the configuration is clean.
/// Returns `Validation::Failure` with every issue found otherwise.
pub fn audit(config: &Config) -> AuditResult {
    let mut checks: Vec<AuditResult> = Vec::new();

    if !config.contains_state(config.initial()) {
        checks.push(Validation::fail(ConfigIssue::UndeclaredInitial {
            initial: config.initial().to_string(),
        }));
    }

    let table = TransitionTable::from_config(config);
    for (index, rule) in table.rules().iter().enumerate() {
        if !config.contains_state(&rule.target) {
            checks.push(Validation::fail(ConfigIssue::DanglingTarget {
                state: rule.state.clone(),
                event: rule.event.clone(),
                target: rule.target.clone(),
            }));
        }

        if let Some(winner) = table.rules()[..index].iter().find(|r| r.event == rule.event) {
            checks.push(Validation::fail(ConfigIssue::ShadowedTransition {
                state: rule.state.clone(),
                event: rule.event.clone(),
                winner: winner.state.clone(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}
