//! State machine that fires named, guarded transitions.

use crate::core::{Payload, State, StateHistory, StateTransition};
use crate::engine::transition::{Transition, TransitionError};
use chrono::Utc;
use std::fmt::{Debug, Display};

/// State machine owning its context `C`.
///
/// The context is replaced only when a transition commits, so an observer
/// never sees a guard or effect half applied.
pub struct StateMachine<S: State, C, P: Payload, V> {
    current: S,
    context: C,
    transitions: Vec<Transition<S, C, P, V>>,
    history: StateHistory<S>,
    attempt_count: usize,
}

impl<S: State, C: Clone, P: Payload, V: Debug + Display> StateMachine<S, C, P, V> {
    /// Create a machine in `initial` with no transitions.
    pub fn new(initial: S, context: C) -> Self {
        Self {
            current: initial,
            context,
            transitions: Vec::new(),
            history: StateHistory::new(),
            attempt_count: 0,
        }
    }

    pub fn add_transition(&mut self, transition: Transition<S, C, P, V>) {
        self.transitions.push(transition);
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Vetoed attempts since the last committed transition.
    pub fn pending_attempts(&self) -> usize {
        self.attempt_count
    }

    /// Look up a transition by name.
    pub fn transition(&self, name: &str) -> Option<&Transition<S, C, P, V>> {
        self.transitions.iter().find(|t| t.name == name)
    }

    /// Names of the transitions whose sources include the current state,
    /// in table order.
    pub fn available_transitions(&self) -> Vec<&str> {
        self.transitions
            .iter()
            .filter(|t| t.is_enabled_from(&self.current))
            .map(|t| t.name.as_str())
            .collect()
    }

    /// Fire the transition called `name`.
    ///
    /// Checks run in a fixed order: the name must exist, the current state
    /// must be one of its sources, the payload must match its declaration,
    /// then the guard and the effect run against the current context. The
    /// new context and state are committed together, and only when all of
    /// those succeed.
    pub fn fire(&mut self, name: &str, payload: Option<P>) -> Result<S, TransitionError<S, V>> {
        let transition = self
            .transition(name)
            .ok_or_else(|| TransitionError::UnknownTransition {
                name: name.to_string(),
            })?;

        if !transition.is_enabled_from(&self.current) {
            tracing::debug!(
                transition = name,
                state = self.current.name(),
                "Transition not enabled from current state"
            );
            return Err(TransitionError::IllegalTransition {
                from: self.current.clone(),
                transition: name.to_string(),
            });
        }

        transition.check_payload(payload.as_ref())?;

        let outcome = Self::evaluate(transition, &self.context, payload.as_ref());
        let destination = transition.destination.clone();

        match outcome {
            Ok(next_context) => {
                self.commit(name, destination, next_context);
                Ok(self.current.clone())
            }
            Err(reason) => {
                self.attempt_count += 1;
                tracing::warn!(
                    transition = name,
                    state = self.current.name(),
                    attempt = self.attempt_count,
                    %reason,
                    "Transition vetoed"
                );
                Err(TransitionError::TransitionFailed { reason })
            }
        }
    }

    fn evaluate(
        transition: &Transition<S, C, P, V>,
        context: &C,
        payload: Option<&P>,
    ) -> Result<C, V> {
        if let Some(guard) = &transition.guard {
            guard.check(context, payload)?;
        }

        match &transition.effect {
            Some(effect) => effect.apply(context, payload),
            None => Ok(context.clone()),
        }
    }

    fn commit(&mut self, name: &str, destination: S, next_context: C) {
        let from = std::mem::replace(&mut self.current, destination);

        tracing::debug!(
            transition = name,
            from = from.name(),
            to = self.current.name(),
            "Transition committed"
        );

        let record = StateTransition {
            transition: name.to_string(),
            from,
            to: self.current.clone(),
            timestamp: Utc::now(),
            attempt: self.attempt_count + 1,
        };
        self.history = self.history.record(record);
        self.context = next_context;
        self.attempt_count = 0;
    }
}
