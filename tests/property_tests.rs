//! Property-based tests for the state machine engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated state tables and operation sequences.

use proptest::prelude::*;
use waypoint::core::StateDefinition;
use waypoint::{Config, ConfigBuilder, MachineError, StateMachine};

const EVENTS: [&str; 4] = ["advance", "retreat", "jump", "halt"];

fn state_name(index: usize) -> String {
    format!("s{index}")
}

/// Target names include a few that are never declared.
fn target_name(index: usize) -> String {
    if index < 5 {
        state_name(index)
    } else {
        "ghost".to_string()
    }
}

prop_compose! {
    fn arbitrary_config()(count in 1..5usize)(
        tables in prop::collection::vec(
            prop::collection::vec((0..EVENTS.len(), 0..6usize), 0..4),
            count,
        ),
        initial in 0..count + 1,
    ) -> Config {
        let states = tables.into_iter().enumerate().map(|(index, transitions)| {
            let definition = transitions
                .into_iter()
                .fold(StateDefinition::new(), |definition, (event, target)| {
                    definition.on(EVENTS[event], target_name(target))
                });
            (state_name(index), definition)
        });

        ConfigBuilder::new()
            .initial(state_name(initial))
            .states(states)
            .build()
            .unwrap()
    }
}

#[derive(Clone, Debug)]
enum Op {
    Trigger(String),
    Change(String),
    Undo,
    Redo,
    Reset,
    ClearHistory,
    ClearError,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..EVENTS.len() + 1).prop_map(|i| Op::Trigger(EVENTS.get(i).unwrap_or(&"").to_string())),
        (0..6usize).prop_map(|i| Op::Change(target_name(i))),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::Reset),
        Just(Op::ClearHistory),
        Just(Op::ClearError),
    ]
}

fn apply(machine: &mut StateMachine, op: &Op) -> Result<(), MachineError> {
    match op {
        Op::Trigger(event) => machine.trigger(event),
        Op::Change(state) => machine.change_state(state),
        Op::Undo => machine.undo().map(|_| ()),
        Op::Redo => machine.redo().map(|_| ()),
        Op::Reset => {
            machine.reset();
            Ok(())
        }
        Op::ClearHistory => {
            machine.clear_history();
            Ok(())
        }
        Op::ClearError => {
            machine.clear_error();
            Ok(())
        }
    }
}

/// Reference resolution: scan states, then their transitions, in declaration order.
fn expected_target<'a>(config: &'a Config, event: &str) -> Option<&'a str> {
    config
        .states()
        .flat_map(|(_, definition)| definition.transitions())
        .find(|(declared, _)| *declared == event)
        .map(|(_, target)| target)
}

proptest! {
    #[test]
    fn fresh_machine_is_in_initial_state(config in arbitrary_config()) {
        let machine = StateMachine::new(&config);
        prop_assert_eq!(machine.state(), config.initial());
        prop_assert!(!machine.can_undo());
        prop_assert!(!machine.can_redo());
        prop_assert!(!machine.is_latched());
    }

    #[test]
    fn get_states_lists_declared_names(config in arbitrary_config()) {
        let machine = StateMachine::new(&config);
        let expected: Vec<_> = config.state_names().collect();
        prop_assert_eq!(machine.get_states(None), expected);
    }

    #[test]
    fn get_states_by_event_matches_declarations(config in arbitrary_config(), event in 0..EVENTS.len()) {
        let machine = StateMachine::new(&config);
        let event = EVENTS[event];

        let expected: Vec<_> = config
            .states()
            .flat_map(|(name, definition)| {
                definition
                    .transitions()
                    .filter(move |(declared, _)| *declared == event)
                    .map(move |_| name)
            })
            .collect();

        prop_assert_eq!(machine.get_states(Some(event)), expected);
    }

    #[test]
    fn trigger_takes_first_declared_transition(config in arbitrary_config(), event in 0..EVENTS.len()) {
        let mut machine = StateMachine::new(&config);
        let event = EVENTS[event];
        let before = machine.state().to_string();

        let result = machine.trigger(event);

        match expected_target(&config, event) {
            Some(target) if config.contains_state(target) => {
                prop_assert!(result.is_ok());
                prop_assert_eq!(machine.state(), target);
                prop_assert!(!machine.is_latched());
            }
            Some(target) => {
                prop_assert_eq!(result, Err(MachineError::InvalidState { state: target.to_string() }));
                prop_assert_eq!(machine.state(), before.as_str());
                prop_assert!(!machine.is_latched());
            }
            None => {
                prop_assert!(result.is_ok());
                prop_assert_eq!(machine.state(), before.as_str());
                prop_assert!(machine.is_latched());
            }
        }
    }

    #[test]
    fn current_state_is_always_declared_or_initial(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..30),
    ) {
        let mut machine = StateMachine::new(&config);

        for op in &ops {
            let _ = apply(&mut machine, op);
            let state = machine.state();
            prop_assert!(state == config.initial() || config.contains_state(state));
        }
    }

    #[test]
    fn latched_machine_ignores_triggers(
        config in arbitrary_config(),
        events in prop::collection::vec(0..EVENTS.len(), 1..10),
    ) {
        let mut machine = StateMachine::new(&config);
        machine.trigger("").unwrap();
        prop_assert!(machine.is_latched());

        let before = machine.state().to_string();
        for event in events {
            prop_assert!(machine.trigger(EVENTS[event]).is_ok());
            prop_assert_eq!(machine.state(), before.as_str());
        }
    }

    #[test]
    fn undo_reverses_a_change_exactly_once(config in arbitrary_config(), target in 0..4usize) {
        let target = state_name(target % config.len());
        prop_assume!(config.contains_state(config.initial()));

        let mut machine = StateMachine::new(&config);
        machine.change_state(&target).unwrap();

        prop_assert!(machine.undo().unwrap());
        prop_assert_eq!(machine.state(), config.initial());
        prop_assert!(!machine.undo().unwrap());

        prop_assert!(machine.redo().unwrap());
        prop_assert_eq!(machine.state(), target.as_str());
        prop_assert!(!machine.redo().unwrap());
    }

    #[test]
    fn clear_history_disables_undo_and_redo(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
    ) {
        let mut machine = StateMachine::new(&config);
        for op in &ops {
            let _ = apply(&mut machine, op);
        }

        machine.clear_history();
        let before = machine.state().to_string();

        prop_assert!(!machine.undo().unwrap());
        prop_assert!(!machine.redo().unwrap());
        prop_assert_eq!(machine.state(), before.as_str());
    }

    #[test]
    fn machine_is_isolated_from_caller_config(config in arbitrary_config()) {
        let mut caller_copy = config.clone();
        let machine = StateMachine::new(&caller_copy);

        caller_copy = ConfigBuilder::new().initial("elsewhere").build().unwrap();

        prop_assert_eq!(machine.config(), &config);
        prop_assert_ne!(machine.config(), &caller_copy);
    }

    #[test]
    fn checkpoint_roundtrip_resumes_same_state(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
    ) {
        let mut machine = StateMachine::new(&config);
        for op in &ops {
            let _ = apply(&mut machine, op);
        }

        let bytes = machine.checkpoint().to_bytes().unwrap();
        let checkpoint = waypoint::checkpoint::Checkpoint::from_bytes(&bytes).unwrap();
        let resumed = StateMachine::resume(&config, checkpoint).unwrap();

        prop_assert_eq!(resumed.state(), machine.state());
        prop_assert_eq!(resumed.previous(), machine.previous());
        prop_assert_eq!(resumed.next(), machine.next());
        prop_assert_eq!(resumed.mode(), machine.mode());
    }
}
