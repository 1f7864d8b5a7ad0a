//! Build errors for state machine and transition builders.

use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Transition name is empty")]
    MissingName,

    #[error("Transition '{transition}' has no source state. Call .from(state)")]
    MissingFromState { transition: String },

    #[error("Transition '{transition}' has no target state. Call .to(state)")]
    MissingToState { transition: String },

    #[error(
        "Transition '{transition}' loops back to one of its sources. Call .allow_self_loop() if intended"
    )]
    SelfLoop { transition: String },

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Machine context not specified. Call .context(value) before .build()")]
    MissingContext,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition '{name}' is defined more than once")]
    DuplicateTransition { name: String },
}
