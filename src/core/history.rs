//! Record of committed transitions.
//!
//! Only transitions that passed their guard and effect are recorded; rejected
//! and vetoed requests leave no trace here.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single committed transition.
///
/// # Example
///
/// ```rust
/// use atm_session::core::StateTransition;
/// use atm_session::atm::AtmState;
/// use chrono::Utc;
///
/// let step = StateTransition {
///     transition: "InsertCard".to_string(),
///     from: AtmState::Idle,
///     to: AtmState::Authenticating,
///     timestamp: Utc::now(),
///     attempt: 1,
/// };
/// assert_eq!(step.transition, "InsertCard");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// Name of the transition that fired
    pub transition: String,
    /// State before the transition
    pub from: S,
    /// State after the transition
    pub to: S,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
    /// 1 for a first-try success, plus one for every vetoed attempt before it
    pub attempt: usize,
}

/// Ordered history of committed transitions.
///
/// `record` returns a new history and leaves the receiver as it was.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Return a copy of this history with `transition` appended.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States visited, starting with the first `from` state.
    ///
    /// ```rust
    /// use atm_session::core::{StateHistory, StateTransition};
    /// use atm_session::atm::AtmState;
    /// use chrono::Utc;
    ///
    /// let history = StateHistory::new()
    ///     .record(StateTransition {
    ///         transition: "InsertCard".to_string(),
    ///         from: AtmState::Idle,
    ///         to: AtmState::Authenticating,
    ///         timestamp: Utc::now(),
    ///         attempt: 1,
    ///     })
    ///     .record(StateTransition {
    ///         transition: "RemoveCard".to_string(),
    ///         from: AtmState::Authenticating,
    ///         to: AtmState::Idle,
    ///         timestamp: Utc::now(),
    ///         attempt: 1,
    ///     });
    ///
    /// assert_eq!(
    ///     history.get_path(),
    ///     vec![&AtmState::Idle, &AtmState::Authenticating, &AtmState::Idle]
    /// );
    /// ```
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Names of the transitions in the order they fired.
    pub fn names(&self) -> Vec<&str> {
        self.transitions
            .iter()
            .map(|t| t.transition.as_str())
            .collect()
    }

    /// Time between the first and the last committed transition.
    ///
    /// `None` while the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }
}
