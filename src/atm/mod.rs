//! The ATM customer session built on the generic engine.
//!
//! [`SessionMachine`] is the entry point. It owns one customer's
//! [`TransactionState`] and only changes it inside the effect of a
//! successful `SubmitAmount` (or the counter reset on `InsertCard`).
//! Withdrawing is unreachable without a successful `SubmitPin`, because no
//! transition into `Withdrawing` has an unauthenticated source.

mod ledger;
mod payload;
mod request;
mod session;
mod state;
mod table;
mod veto;

pub use ledger::TransactionState;
pub use payload::{Payload, PayloadKind};
pub use request::{TransitionName, TransitionRequest};
pub use session::{Receipt, SessionError, SessionMachine, DEFAULT_PIN};
pub use state::AtmState;
pub use table::{authentication_guard, session_table, AtmTransition};
pub use veto::Veto;
