//! ATM Session: a guarded, transactional state machine for one ATM customer
//!
//! The crate is a small state machine toolkit with an ATM domain on top.
//! Transitions are named edges in a table; each may require a payload, carry
//! a guard that can veto it, and carry an effect that produces the next
//! context. State, context and history change together or not at all.
//!
//! # Core Concepts
//!
//! - **State**: type-safe state representation via the `State` trait
//! - **Guards**: pure predicates that approve a request or veto it with a reason
//! - **Effects**: pure functions from the current context to the next one
//! - **History**: immutable record of every committed transition
//!
//! # Example
//!
//! ```rust
//! use atm_session::atm::{AtmState, SessionError, SessionMachine, TransitionRequest, Veto};
//!
//! let mut session = SessionMachine::new(10_000, 20_000);
//! session.fire(TransitionRequest::insert_card()).unwrap();
//!
//! let err = session.fire(TransitionRequest::submit_pin("9999")).unwrap_err();
//! assert_eq!(err, SessionError::TransitionFailed { reason: Veto::WrongPin });
//! assert_eq!(session.current_state(), AtmState::Authenticating);
//!
//! session.fire(TransitionRequest::submit_pin("1234")).unwrap();
//! assert_eq!(session.available_transitions(), vec!["RemoveCard", "GoToBalance", "GoToWithdraw"]);
//! ```

pub mod atm;
pub mod builder;
pub mod config;
pub mod core;
pub mod driver;
pub mod engine;
pub mod journal;

// Re-export commonly used types
pub use atm::{AtmState, SessionError, SessionMachine, TransactionState, TransitionRequest, Veto};
pub use builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use self::core::{Effect, Guard, Payload, State, StateHistory, StateTransition};
pub use engine::{StateMachine, Transition, TransitionError};
