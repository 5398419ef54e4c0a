//! Traffic Light State Machine
//!
//! This example walks a cyclic state machine through triggers, undo, redo
//! and the trigger latch.
//!
//! Key concepts:
//! - Declarative state table via `fsm_config!`
//! - Single-step undo and redo
//! - Unmatched events latch instead of failing
//! - Checkpointing runtime state
//!
//! Run with: cargo run --example traffic_light

use waypoint::checkpoint::Checkpoint;
use waypoint::validation::audit;
use waypoint::{fsm_config, StateMachine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Traffic Light State Machine ===\n");

    let config = fsm_config! {
        initial: "green",
        states: {
            "green" => { "change" => "yellow" },
            "yellow" => { "change" => "red" },
            "red" => { "change" => "green" },
        }
    }?;

    println!("Config audit clean: {}", audit(&config).is_success());

    let mut machine = StateMachine::new(&config);
    println!("Initial state: {}\n", machine.state());

    println!("Cycling:");
    for _ in 0..3 {
        let from = machine.state().to_string();
        machine.trigger("change")?;
        println!("  {} -> {}", from, machine.state());
    }

    println!("\nHistory:");
    println!("  undo -> {} (now {})", machine.undo()?, machine.state());
    println!("  undo -> {} (already used)", machine.undo()?);
    println!("  redo -> {} (now {})", machine.redo()?, machine.state());

    println!("\nLatch:");
    machine.trigger("flash")?;
    println!("  unknown event 'flash' latched: {}", machine.is_latched());
    machine.trigger("change")?;
    println!("  'change' ignored, still {}", machine.state());
    machine.clear_error();
    machine.trigger("change")?;
    println!("  after clear_error, 'change' -> {}", machine.state());

    println!("\nCheckpoint:");
    let json = machine.checkpoint().to_json()?;
    let restored = StateMachine::resume(&config, Checkpoint::from_json(&json)?)?;
    println!("  restored state: {}", restored.state());

    println!("\n=== Example Complete ===");
    Ok(())
}
