//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and a macro for declaring states,
//! validating the transition table before a machine ever runs.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Payload, State};
use crate::engine::Transition;

/// Create a navigation transition: no payload, no guard, no effect.
///
/// # Example
///
/// ```
/// use atm_session::builder::simple_transition;
/// use atm_session::atm::{AtmState, Payload, TransactionState, Veto};
/// use atm_session::engine::Transition;
///
/// let back: Transition<AtmState, TransactionState, Payload, Veto> =
///     simple_transition("Back", [AtmState::ViewingBalance], AtmState::MainMenu).unwrap();
///
/// assert!(back.is_enabled_from(&AtmState::ViewingBalance));
/// assert!(back.guard.is_none());
/// ```
pub fn simple_transition<S, C, P, V>(
    name: &str,
    sources: impl IntoIterator<Item = S>,
    to: S,
) -> Result<Transition<S, C, P, V>, BuildError>
where
    S: State,
    P: Payload,
{
    sources
        .into_iter()
        .fold(TransitionBuilder::new(name), |builder, source| builder.from(source))
        .to(to)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;
    use std::fmt;

    state_enum! {
        enum Tray {
            Closed,
            Open,
            Ejected,
        }
    }

    #[derive(Clone, Debug)]
    struct Nothing;

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct NothingKind;

    impl fmt::Display for NothingKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("Nothing")
        }
    }

    impl Payload for Nothing {
        type Kind = NothingKind;

        fn kind(&self) -> NothingKind {
            NothingKind
        }
    }

    #[test]
    fn simple_transition_collects_every_source() {
        let eject: Transition<Tray, (), Nothing, String> =
            simple_transition("Eject", [Tray::Closed, Tray::Open], Tray::Ejected).unwrap();

        assert_eq!(eject.sources, vec![Tray::Closed, Tray::Open]);
        assert_eq!(eject.destination, Tray::Ejected);
        assert!(eject.payload.is_none());
        assert!(eject.guard.is_none());
        assert!(eject.effect.is_none());
    }

    #[test]
    fn simple_transition_rejects_empty_sources() {
        let result: Result<Transition<Tray, (), Nothing, String>, _> =
            simple_transition("Eject", Vec::new(), Tray::Ejected);
        assert!(matches!(result, Err(BuildError::MissingFromState { .. })));
    }

    #[test]
    fn simple_transition_rejects_self_loop() {
        let result: Result<Transition<Tray, (), Nothing, String>, _> =
            simple_transition("Reopen", [Tray::Open], Tray::Open);
        assert!(matches!(result, Err(BuildError::SelfLoop { .. })));
    }
}
