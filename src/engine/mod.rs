//! Execution of named transitions against a transition table.
//!
//! # Key Concepts
//!
//! - **Transitions**: named edges with a source set, a destination, an
//!   optional payload requirement, guard and effect
//! - **State Machine**: owns the current state and context and commits both
//!   atomically when a transition succeeds
//! - **Errors**: usage errors and business vetoes share one taxonomy,
//!   `TransitionError`, and none of them change the machine

mod machine;
mod transition;

pub use machine::StateMachine;
pub use transition::{Transition, TransitionError};
