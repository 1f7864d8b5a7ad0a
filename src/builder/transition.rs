//! Builder for constructing table transitions.

use crate::builder::error::BuildError;
use crate::core::{Effect, Guard, Payload, State};
use crate::engine::Transition;

/// Builder for constructing transitions with a fluent API.
///
/// `.from()` may be called several times; each call adds a source state.
pub struct TransitionBuilder<S: State, C, P: Payload, V> {
    name: String,
    sources: Vec<S>,
    destination: Option<S>,
    payload: Option<P::Kind>,
    guard: Option<Guard<C, P, V>>,
    effect: Option<Effect<C, P, V>>,
    allow_self_loop: bool,
}

impl<S: State, C, P: Payload, V> TransitionBuilder<S, C, P, V> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sources: Vec::new(),
            destination: None,
            payload: None,
            guard: None,
            effect: None,
            allow_self_loop: false,
        }
    }

    /// Add a source state (at least one is required).
    pub fn from(mut self, state: S) -> Self {
        if !self.sources.contains(&state) {
            self.sources.push(state);
        }
        self
    }

    /// Set the destination state (required).
    pub fn to(mut self, state: S) -> Self {
        self.destination = Some(state);
        self
    }

    /// Require a payload of the given kind.
    pub fn requires(mut self, kind: P::Kind) -> Self {
        self.payload = Some(kind);
        self
    }

    pub fn guard(mut self, guard: Guard<C, P, V>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C, Option<&P>) -> Result<(), V> + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set the effect computing the committed context.
    pub fn effect<F>(mut self, apply: F) -> Self
    where
        F: Fn(&C, Option<&P>) -> Result<C, V> + Send + Sync + 'static,
    {
        self.effect = Some(Effect::new(apply));
        self
    }

    /// Permit the destination to also be a source.
    pub fn allow_self_loop(mut self) -> Self {
        self.allow_self_loop = true;
        self
    }

    pub fn build(self) -> Result<Transition<S, C, P, V>, BuildError> {
        if self.name.trim().is_empty() {
            return Err(BuildError::MissingName);
        }
        if self.sources.is_empty() {
            return Err(BuildError::MissingFromState {
                transition: self.name,
            });
        }
        let Some(destination) = self.destination else {
            return Err(BuildError::MissingToState {
                transition: self.name,
            });
        };
        if !self.allow_self_loop && self.sources.contains(&destination) {
            return Err(BuildError::SelfLoop {
                transition: self.name,
            });
        }

        Ok(Transition {
            name: self.name,
            sources: self.sources,
            destination,
            payload: self.payload,
            guard: self.guard,
            effect: self.effect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;
    use std::fmt;

    state_enum! {
        enum Lamp {
            Off,
            On,
        }
    }

    #[derive(Clone, Debug)]
    struct Watts(u32);

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct WattsKind;

    impl fmt::Display for WattsKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("Watts")
        }
    }

    impl Payload for Watts {
        type Kind = WattsKind;

        fn kind(&self) -> WattsKind {
            WattsKind
        }
    }

    type LampBuilder = TransitionBuilder<Lamp, u32, Watts, String>;

    #[test]
    fn builder_requires_a_source() {
        let result = LampBuilder::new("SwitchOn").to(Lamp::On).build();
        assert!(matches!(result, Err(BuildError::MissingFromState { .. })));
    }

    #[test]
    fn builder_requires_a_destination() {
        let result = LampBuilder::new("SwitchOn").from(Lamp::Off).build();
        assert!(matches!(result, Err(BuildError::MissingToState { .. })));
    }

    #[test]
    fn builder_rejects_blank_name() {
        let result = LampBuilder::new("  ").from(Lamp::Off).to(Lamp::On).build();
        assert_eq!(result.err(), Some(BuildError::MissingName));
    }

    #[test]
    fn self_loop_needs_opt_in() {
        let rejected = LampBuilder::new("Flicker")
            .from(Lamp::On)
            .from(Lamp::Off)
            .to(Lamp::On)
            .build();
        assert_eq!(
            rejected.err(),
            Some(BuildError::SelfLoop {
                transition: "Flicker".to_string()
            })
        );

        let allowed = LampBuilder::new("Flicker")
            .from(Lamp::On)
            .to(Lamp::On)
            .allow_self_loop()
            .build();
        assert!(allowed.is_ok());
    }

    #[test]
    fn repeated_sources_are_collapsed() {
        let transition = LampBuilder::new("SwitchOn")
            .from(Lamp::Off)
            .from(Lamp::Off)
            .to(Lamp::On)
            .build()
            .unwrap();
        assert_eq!(transition.sources, vec![Lamp::Off]);
    }

    #[test]
    fn guard_effect_and_payload_are_carried() {
        let transition = LampBuilder::new("SwitchOn")
            .from(Lamp::Off)
            .to(Lamp::On)
            .requires(WattsKind)
            .when(|budget: &u32, watts: Option<&Watts>| match watts {
                Some(w) if w.0 > *budget => Err("over budget".to_string()),
                _ => Ok(()),
            })
            .effect(|budget: &u32, watts: Option<&Watts>| {
                Ok(budget - watts.map(|w| w.0).unwrap_or(0))
            })
            .build()
            .unwrap();

        assert_eq!(transition.payload, Some(WattsKind));
        let guard = transition.guard.as_ref().unwrap();
        assert!(guard.check(&60, Some(&Watts(40))).is_ok());
        assert!(guard.check(&60, Some(&Watts(100))).is_err());
        let effect = transition.effect.as_ref().unwrap();
        assert_eq!(effect.apply(&60, Some(&Watts(40))), Ok(20));
    }
}
