//! A single customer's session at the machine.

use crate::atm::ledger::TransactionState;
use crate::atm::payload::Payload;
use crate::atm::request::{TransitionName, TransitionRequest};
use crate::atm::state::AtmState;
use crate::atm::table::{session_table, AtmTransition};
use crate::atm::veto::Veto;
use crate::builder::{BuildError, StateMachineBuilder};
use crate::config::{ConfigError, SessionConfig};
use crate::core::StateHistory;
use crate::engine::{StateMachine, TransitionError};
use crate::journal::{SessionJournal, JOURNAL_VERSION};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// PIN used by [`SessionMachine::new`].
pub const DEFAULT_PIN: &str = "1234";

/// Errors returned by [`SessionMachine::fire`].
pub type SessionError = TransitionError<AtmState, Veto>;

type AtmMachine = StateMachine<AtmState, TransactionState, Payload, Veto>;

/// Validate `table` and assemble a machine waiting in `Idle`.
fn assemble(
    table: Vec<AtmTransition>,
    ledger: TransactionState,
) -> Result<AtmMachine, BuildError> {
    StateMachineBuilder::new()
        .initial(AtmState::Idle)
        .context(ledger)
        .transitions(table)
        .build()
}

/// What the customer is handed when they accept a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub withdrawn: u64,
    pub remaining_balance: u64,
}

/// State machine for one customer, from card insertion back to `Idle`.
///
/// Build a fresh machine for every customer: nothing about one session
/// (authentication, amounts withdrawn, receipt) should be visible to the next.
///
/// # Example
///
/// ```rust
/// use atm_session::atm::{AtmState, SessionMachine, TransitionRequest};
///
/// let mut session = SessionMachine::new(10_000, 20_000);
/// session.fire(TransitionRequest::insert_card()).unwrap();
/// session.fire(TransitionRequest::submit_pin("1234")).unwrap();
/// session.fire(TransitionRequest::go_to_withdraw()).unwrap();
///
/// let state = session.fire(TransitionRequest::submit_amount(5_000)).unwrap();
/// assert_eq!(state, AtmState::PrintingReceipt);
/// assert_eq!(session.transaction().account_balance(), 15_000);
/// ```
pub struct SessionMachine {
    id: Uuid,
    started_at: DateTime<Utc>,
    machine: AtmMachine,
    receipt: Option<Receipt>,
}

impl SessionMachine {
    /// Machine in `Idle` with the given balances and the default PIN.
    pub fn new(initial_cash: u64, initial_account_balance: u64) -> Self {
        Self::with_pin(initial_cash, initial_account_balance, DEFAULT_PIN)
    }

    pub fn with_pin(
        initial_cash: u64,
        initial_account_balance: u64,
        pin: impl Into<String>,
    ) -> Self {
        let ledger = TransactionState::new(initial_cash, initial_account_balance);
        let machine = session_table(pin)
            .and_then(|table| assemble(table, ledger))
            .expect("ATM transition table should always build");

        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            machine,
            receipt: None,
        }
    }

    /// Machine configured from a validated [`SessionConfig`].
    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_pin(
            config.machine_cash,
            config.account_balance,
            config.pin.clone(),
        ))
    }

    /// Fire the requested transition and return the new state.
    ///
    /// On any error the state and the balances are exactly as they were.
    pub fn fire(&mut self, request: TransitionRequest) -> Result<AtmState, SessionError> {
        let inserting = request.is(TransitionName::InsertCard);
        let confirming = request.is(TransitionName::Confirm);
        let accepted = matches!(
            request.payload,
            Some(Payload::Confirmation { accepted: true })
        );

        let state = self.machine.fire(&request.name, request.payload)?;

        if inserting {
            self.receipt = None;
            tracing::info!(session = %self.id, "Card inserted, session started");
        }

        if confirming && accepted {
            let ledger = self.transaction();
            let receipt = Receipt {
                withdrawn: ledger.withdrawn_this_session(),
                remaining_balance: ledger.account_balance(),
            };
            tracing::info!(
                session = %self.id,
                withdrawn = receipt.withdrawn,
                remaining_balance = receipt.remaining_balance,
                "Receipt printed"
            );
            self.receipt = Some(receipt);
        }

        if self.is_complete() {
            tracing::info!(
                session = %self.id,
                withdrawn = self.transaction().withdrawn_this_session(),
                "Session complete"
            );
        }

        Ok(state)
    }

    pub fn current_state(&self) -> AtmState {
        *self.machine.current_state()
    }

    /// Transition names that may fire from the current state.
    pub fn available_transitions(&self) -> Vec<&str> {
        self.machine.available_transitions()
    }

    pub fn transaction(&self) -> &TransactionState {
        self.machine.context()
    }

    pub fn history(&self) -> &StateHistory<AtmState> {
        self.machine.history()
    }

    /// Receipt from an accepted `Confirm`, if one happened.
    pub fn receipt(&self) -> Option<Receipt> {
        self.receipt
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// True once the customer is back at `Idle` after doing something.
    pub fn is_complete(&self) -> bool {
        self.current_state() == AtmState::Idle && !self.history().is_empty()
    }

    /// Snapshot of the session for auditing.
    pub fn journal(&self) -> SessionJournal {
        SessionJournal {
            version: JOURNAL_VERSION,
            session_id: self.id,
            started_at: self.started_at,
            exported_at: Utc::now(),
            state: self.current_state(),
            ledger: *self.transaction(),
            history: self.history().clone(),
            receipt: self.receipt,
        }
    }
}
