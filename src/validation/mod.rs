//! Accumulating audit of configurations.
//!
//! Construction of a [`StateMachine`](crate::StateMachine) never validates
//! its configuration; undeclared destinations are only reported when a
//! transition is actually taken. This module offers an opt-in audit that
//! reports every problem in one pass using Stillwater's `Validation`,
//! instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use waypoint::fsm_config;
//! use waypoint::validation::audit;
//!
//! let config = fsm_config! {
//!     initial: "draft",
//!     states: {
//!         "draft" => { "submit" => "review" },
//!         "review" => { "approve" => "archived" },
//!     }
//! }
//! .unwrap();
//!
//! assert!(audit(&config).is_failure());
//! ```

pub mod audit;
pub mod issues;

pub use audit::{audit, AuditResult};
pub use issues::ConfigIssue;
