//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Payload, State};
use crate::engine::{StateMachine, Transition};
use std::collections::HashSet;
use std::fmt::{Debug, Display};

/// Builder for constructing state machines with a fluent API.
pub struct StateMachineBuilder<S: State, C, P: Payload, V> {
    initial: Option<S>,
    context: Option<C>,
    transitions: Vec<Transition<S, C, P, V>>,
}

impl<S: State, C: Clone, P: Payload, V: Debug + Display> StateMachineBuilder<S, C, P, V> {
    pub fn new() -> Self {
        Self {
            initial: None,
            context: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the context the machine starts with (required).
    pub fn context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(
        mut self,
        builder: TransitionBuilder<S, C, P, V>,
    ) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, C, P, V>) -> Self {
        self.transitions.push(transition);
        self
    }

    pub fn transitions(mut self, transitions: Vec<Transition<S, C, P, V>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the state machine.
    ///
    /// Transition names must be unique, since requests address them by name.
    pub fn build(self) -> Result<StateMachine<S, C, P, V>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let context = self.context.ok_or(BuildError::MissingContext)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        if let Some(name) = first_duplicate(&self.transitions) {
            return Err(BuildError::DuplicateTransition { name });
        }

        let mut machine = StateMachine::new(initial, context);
        for transition in self.transitions {
            machine.add_transition(transition);
        }

        Ok(machine)
    }
}

fn first_duplicate<S: State, C, P: Payload, V>(
    transitions: &[Transition<S, C, P, V>],
) -> Option<String> {
    let mut seen = HashSet::new();
    transitions
        .iter()
        .find(|t| !seen.insert(t.name.as_str()))
        .map(|t| t.name.clone())
}

impl<S: State, C: Clone, P: Payload, V: Debug + Display> Default
    for StateMachineBuilder<S, C, P, V>
{
    fn default() -> Self {
        Self::new()
    }
}
