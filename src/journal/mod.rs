//! Audit journal of a customer session.
//!
//! A journal is a serializable snapshot: where the session stands, the
//! balances, every committed transition and the receipt if one was printed.
//! It cannot be turned back into a running machine; a new customer always
//! gets a fresh [`SessionMachine`](crate::atm::SessionMachine).

use crate::atm::{AtmState, Receipt, TransactionState};
use crate::core::StateHistory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::JournalError;

/// Version identifier for the journal format
pub const JOURNAL_VERSION: u32 = 1;

/// Serializable record of one session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionJournal {
    /// Journal format version
    pub version: u32,

    /// Identifier assigned when the session was created
    pub session_id: Uuid,

    /// When the session machine was created
    pub started_at: DateTime<Utc>,

    /// When this snapshot was taken
    pub exported_at: DateTime<Utc>,

    /// State at export time
    pub state: AtmState,

    /// Balances at export time
    pub ledger: TransactionState,

    /// Every committed transition
    pub history: StateHistory<AtmState>,

    /// Receipt handed out, if any
    pub receipt: Option<Receipt>,
}

impl SessionJournal {
    /// True when the snapshot was taken after the customer returned to `Idle`.
    pub fn is_complete(&self) -> bool {
        self.state == AtmState::Idle && !self.history.is_empty()
    }

    pub fn to_json(&self) -> Result<String, JournalError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| JournalError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, JournalError> {
        let journal: Self = serde_json::from_str(json)
            .map_err(|e| JournalError::DeserializationFailed(e.to_string()))?;
        journal.verify()
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, JournalError> {
        bincode::serialize(self).map_err(|e| JournalError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, JournalError> {
        let journal: Self = bincode::deserialize(bytes)
            .map_err(|e| JournalError::DeserializationFailed(e.to_string()))?;
        journal.verify()
    }

    /// Reject journals from other format versions or whose history does not
    /// end in the recorded state.
    fn verify(self) -> Result<Self, JournalError> {
        if self.version != JOURNAL_VERSION {
            return Err(JournalError::UnsupportedVersion {
                found: self.version,
                supported: JOURNAL_VERSION,
            });
        }

        if let Some(last) = self.history.transitions().last() {
            if last.to != self.state {
                return Err(JournalError::ValidationFailed(format!(
                    "history ends in {} but journal state is {}",
                    last.to, self.state
                )));
            }
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atm::{SessionMachine, TransitionRequest};

    fn finished_session() -> SessionMachine {
        let mut session = SessionMachine::new(10_000, 20_000);
        for request in [
            TransitionRequest::insert_card(),
            TransitionRequest::submit_pin("1234"),
            TransitionRequest::go_to_withdraw(),
            TransitionRequest::submit_amount(3_000),
            TransitionRequest::confirm(true),
        ] {
            session.fire(request).unwrap();
        }
        session
    }

    #[test]
    fn json_keeps_session_details() {
        let journal = finished_session().journal();
        let back = SessionJournal::from_json(&journal.to_json().unwrap()).unwrap();

        assert_eq!(back.session_id, journal.session_id);
        assert_eq!(back.ledger, journal.ledger);
        assert_eq!(back.receipt, journal.receipt);
        assert_eq!(back.history.names(), journal.history.names());
        assert!(back.is_complete());
    }

    #[test]
    fn binary_keeps_session_details() {
        let journal = finished_session().journal();
        let back = SessionJournal::from_binary(&journal.to_binary().unwrap()).unwrap();

        assert_eq!(back.session_id, journal.session_id);
        assert_eq!(back.ledger.account_balance(), 17_000);
        assert_eq!(back.state, AtmState::Idle);
    }

    #[test]
    fn other_version_is_rejected() {
        let mut journal = finished_session().journal();
        journal.version = JOURNAL_VERSION + 1;
        let json = journal.to_json().unwrap();

        assert!(matches!(
            SessionJournal::from_json(&json),
            Err(JournalError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn contradictory_state_is_rejected() {
        let mut journal = finished_session().journal();
        journal.state = AtmState::Withdrawing;
        let bytes = journal.to_binary().unwrap();

        assert!(matches!(
            SessionJournal::from_binary(&bytes),
            Err(JournalError::ValidationFailed(_))
        ));
    }

    #[test]
    fn garbage_fails_to_deserialize() {
        assert!(matches!(
            SessionJournal::from_json("{ not json"),
            Err(JournalError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn fresh_session_journal_is_not_complete() {
        let journal = SessionMachine::new(1, 1).journal();
        assert!(!journal.is_complete());
        assert!(journal.history.is_empty());
        assert!(SessionJournal::from_json(&journal.to_json().unwrap()).is_ok());
    }
}
