//! Transition table entries and the errors `fire` can report.

use crate::core::{Effect, Guard, Payload, State};
use std::fmt::{Debug, Display};

/// Reasons a transition request is refused.
///
/// Every variant leaves the machine exactly as it was before the request.
/// Only `TransitionFailed` signals a business rule; the rest are usage errors
/// made by whoever builds the request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransitionError<S: State, V: Debug + Display> {
    #[error("No transition named '{name}'")]
    UnknownTransition { name: String },

    #[error("Transition '{transition}' cannot fire from state {from:?}")]
    IllegalTransition { from: S, transition: String },

    #[error("Transition '{transition}' requires a {expected} payload")]
    MissingPayload { transition: String, expected: String },

    #[error("Transition '{transition}' requires a {expected} payload, got {found}")]
    PayloadMismatch {
        transition: String,
        expected: String,
        found: String,
    },

    #[error("Transition '{transition}' takes no payload, got {found}")]
    UnexpectedPayload { transition: String, found: String },

    #[error("Transition vetoed: {reason}")]
    TransitionFailed { reason: V },
}

impl<S: State, V: Debug + Display> TransitionError<S, V> {
    /// The domain reason, when a guard or effect vetoed the request.
    pub fn veto(&self) -> Option<&V> {
        match self {
            Self::TransitionFailed { reason } => Some(reason),
            _ => None,
        }
    }

    /// True for errors caused by a malformed request rather than a business rule.
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, Self::TransitionFailed { .. })
    }
}

/// A named edge in the transition table.
///
/// `sources` lists every state the transition may fire from. `payload`
/// names the request variant the transition needs, if any. The guard and
/// effect are both optional: a transition without them is pure navigation.
pub struct Transition<S: State, C, P: Payload, V> {
    pub name: String,
    pub sources: Vec<S>,
    pub destination: S,
    pub payload: Option<P::Kind>,
    pub guard: Option<Guard<C, P, V>>,
    pub effect: Option<Effect<C, P, V>>,
}

impl<S: State, C, P: Payload, V: Debug + Display> Transition<S, C, P, V> {
    /// Whether `current` is one of the declared sources.
    pub fn is_enabled_from(&self, current: &S) -> bool {
        self.sources.iter().any(|source| source == current)
    }

    /// Compare the supplied payload with the declared requirement.
    pub fn check_payload(&self, payload: Option<&P>) -> Result<(), TransitionError<S, V>> {
        match (self.payload, payload) {
            (None, None) => Ok(()),
            (None, Some(found)) => Err(TransitionError::UnexpectedPayload {
                transition: self.name.clone(),
                found: found.kind().to_string(),
            }),
            (Some(expected), None) => Err(TransitionError::MissingPayload {
                transition: self.name.clone(),
                expected: expected.to_string(),
            }),
            (Some(expected), Some(found)) if found.kind() != expected => {
                Err(TransitionError::PayloadMismatch {
                    transition: self.name.clone(),
                    expected: expected.to_string(),
                    found: found.kind().to_string(),
                })
            }
            (Some(_), Some(_)) => Ok(()),
        }
    }
}

impl<S: State, C, P: Payload, V> Clone for Transition<S, C, P, V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            sources: self.sources.clone(),
            destination: self.destination.clone(),
            payload: self.payload,
            guard: self.guard.clone(),
            effect: self.effect.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::fmt;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Gate {
        Locked,
        Unlocked,
    }

    impl State for Gate {
        fn name(&self) -> &str {
            match self {
                Self::Locked => "Locked",
                Self::Unlocked => "Unlocked",
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Input {
        Coin(u32),
        Ticket,
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum InputKind {
        Coin,
        Ticket,
    }

    impl fmt::Display for InputKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{self:?}")
        }
    }

    impl Payload for Input {
        type Kind = InputKind;

        fn kind(&self) -> InputKind {
            match self {
                Self::Coin(_) => InputKind::Coin,
                Self::Ticket => InputKind::Ticket,
            }
        }
    }

    type GateTransition = Transition<Gate, u32, Input, String>;

    fn pay() -> GateTransition {
        Transition {
            name: "Pay".to_string(),
            sources: vec![Gate::Locked],
            destination: Gate::Unlocked,
            payload: Some(InputKind::Coin),
            guard: Some(Guard::new(|fare: &u32, input: Option<&Input>| match input {
                Some(Input::Coin(cents)) if cents >= fare => Ok(()),
                _ => Err("fare not paid".to_string()),
            })),
            effect: None,
        }
    }

    fn push() -> GateTransition {
        Transition {
            name: "Push".to_string(),
            sources: vec![Gate::Unlocked],
            destination: Gate::Locked,
            payload: None,
            guard: None,
            effect: None,
        }
    }

    #[test]
    fn enabled_only_from_declared_sources() {
        assert!(pay().is_enabled_from(&Gate::Locked));
        assert!(!pay().is_enabled_from(&Gate::Unlocked));
    }

    #[test]
    fn matching_payload_is_accepted() {
        assert!(pay().check_payload(Some(&Input::Coin(50))).is_ok());
        assert!(push().check_payload(None).is_ok());
    }

    #[test]
    fn coin_value_reaches_the_guard() {
        let guard = pay().guard.unwrap();
        assert_eq!(guard.check(&50, Some(&Input::Coin(50))), Ok(()));
        assert_eq!(
            guard.check(&50, Some(&Input::Coin(20))),
            Err("fare not paid".to_string())
        );
    }

    #[test]
    fn missing_payload_is_reported() {
        let err = pay().check_payload(None).unwrap_err();
        assert_eq!(
            err,
            TransitionError::MissingPayload {
                transition: "Pay".to_string(),
                expected: "Coin".to_string(),
            }
        );
        assert!(err.is_usage_error());
    }

    #[test]
    fn wrong_payload_variant_is_reported() {
        let err = pay().check_payload(Some(&Input::Ticket)).unwrap_err();
        assert!(matches!(
            err,
            TransitionError::PayloadMismatch { ref expected, ref found, .. }
                if expected == "Coin" && found == "Ticket"
        ));
    }

    #[test]
    fn payload_on_plain_transition_is_reported() {
        let err = push().check_payload(Some(&Input::Coin(1))).unwrap_err();
        assert!(matches!(err, TransitionError::UnexpectedPayload { .. }));
    }

    #[test]
    fn veto_accessor_exposes_reason() {
        let err: TransitionError<Gate, String> = TransitionError::TransitionFailed {
            reason: "jammed".to_string(),
        };
        assert_eq!(err.veto().map(String::as_str), Some("jammed"));
        assert!(!err.is_usage_error());
        assert_eq!(err.to_string(), "Transition vetoed: jammed");
    }

    #[test]
    fn illegal_transition_message_names_state() {
        let err: TransitionError<Gate, String> = TransitionError::IllegalTransition {
            from: Gate::Unlocked,
            transition: "Pay".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Transition 'Pay' cannot fire from state Unlocked"
        );
    }
}
