//! Transition names and the requests a driver sends.

use crate::atm::payload::Payload;
use std::fmt;

/// The transitions an ATM session understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionName {
    InsertCard,
    SubmitPin,
    RemoveCard,
    GoToBalance,
    GoToWithdraw,
    Back,
    SubmitAmount,
    Confirm,
}

impl TransitionName {
    pub const ALL: [TransitionName; 8] = [
        TransitionName::InsertCard,
        TransitionName::SubmitPin,
        TransitionName::RemoveCard,
        TransitionName::GoToBalance,
        TransitionName::GoToWithdraw,
        TransitionName::Back,
        TransitionName::SubmitAmount,
        TransitionName::Confirm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InsertCard => "InsertCard",
            Self::SubmitPin => "SubmitPin",
            Self::RemoveCard => "RemoveCard",
            Self::GoToBalance => "GoToBalance",
            Self::GoToWithdraw => "GoToWithdraw",
            Self::Back => "Back",
            Self::SubmitAmount => "SubmitAmount",
            Self::Confirm => "Confirm",
        }
    }
}

impl fmt::Display for TransitionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transition name plus the payload that transition needs.
///
/// The name is a plain string so that requests for transitions the table
/// does not know can still be expressed and rejected.
///
/// # Example
///
/// ```rust
/// use atm_session::atm::{Payload, TransitionRequest};
///
/// let request = TransitionRequest::submit_amount(5_000);
/// assert_eq!(request.name, "SubmitAmount");
/// assert_eq!(request.payload, Some(Payload::amount(5_000)));
///
/// let custom = TransitionRequest::new("PrintStatement");
/// assert!(custom.payload.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    pub name: String,
    pub payload: Option<Payload>,
}

impl TransitionRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn insert_card() -> Self {
        TransitionName::InsertCard.into()
    }

    pub fn submit_pin(pin: impl Into<String>) -> Self {
        Self::from(TransitionName::SubmitPin).with_payload(Payload::pin(pin))
    }

    pub fn remove_card() -> Self {
        TransitionName::RemoveCard.into()
    }

    pub fn go_to_balance() -> Self {
        TransitionName::GoToBalance.into()
    }

    pub fn go_to_withdraw() -> Self {
        TransitionName::GoToWithdraw.into()
    }

    pub fn back() -> Self {
        TransitionName::Back.into()
    }

    pub fn submit_amount(amount: u64) -> Self {
        Self::from(TransitionName::SubmitAmount).with_payload(Payload::amount(amount))
    }

    pub fn confirm(accepted: bool) -> Self {
        Self::from(TransitionName::Confirm).with_payload(Payload::confirmation(accepted))
    }

    /// Whether this request addresses `name`.
    pub fn is(&self, name: TransitionName) -> bool {
        self.name == name.as_str()
    }
}

impl From<TransitionName> for TransitionRequest {
    fn from(name: TransitionName) -> Self {
        Self::new(name.as_str())
    }
}
