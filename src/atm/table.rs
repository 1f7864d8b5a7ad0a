//! The ATM transition table with its guards and effects.
//!
//! ```text
//! Idle            --InsertCard-->    Authenticating
//! Authenticating  --SubmitPin-->     MainMenu         [PIN must match]
//! Authenticating  --RemoveCard-->    Idle
//! MainMenu        --RemoveCard-->    Idle
//! MainMenu        --GoToBalance-->   ViewingBalance
//! MainMenu        --GoToWithdraw-->  Withdrawing
//! ViewingBalance  --Back-->          MainMenu
//! Withdrawing     --SubmitAmount-->  PrintingReceipt  [funds available; debits]
//! PrintingReceipt --Confirm-->       Idle
//! ```

use crate::atm::ledger::TransactionState;
use crate::atm::payload::{Payload, PayloadKind};
use crate::atm::request::TransitionName;
use crate::atm::state::AtmState;
use crate::atm::veto::Veto;
use crate::builder::{simple_transition, BuildError, TransitionBuilder};
use crate::core::Guard;
use crate::engine::Transition;

pub type AtmTransition = Transition<AtmState, TransactionState, Payload, Veto>;

type AtmTransitionBuilder = TransitionBuilder<AtmState, TransactionState, Payload, Veto>;

/// Approves `SubmitPin` only when the submitted code equals `secret`.
pub fn authentication_guard(secret: String) -> Guard<TransactionState, Payload, Veto> {
    Guard::new(move |_: &TransactionState, payload: Option<&Payload>| match payload {
        Some(Payload::PinCode { value }) if *value == secret => Ok(()),
        _ => Err(Veto::WrongPin),
    })
}

fn requested_amount(payload: Option<&Payload>) -> Result<u64, Veto> {
    match payload {
        Some(Payload::WithdrawalAmount { value }) => Ok(*value),
        _ => Err(Veto::InvalidAmount),
    }
}

fn withdrawal_guard(ledger: &TransactionState, payload: Option<&Payload>) -> Result<(), Veto> {
    ledger.check_withdrawal(requested_amount(payload)?)
}

fn debit(ledger: &TransactionState, payload: Option<&Payload>) -> Result<TransactionState, Veto> {
    ledger.withdraw(requested_amount(payload)?)
}

fn start_session(
    ledger: &TransactionState,
    _: Option<&Payload>,
) -> Result<TransactionState, Veto> {
    Ok(ledger.begin_session())
}

/// Build the full session table for a customer whose PIN is `secret`.
pub fn session_table(secret: impl Into<String>) -> Result<Vec<AtmTransition>, BuildError> {
    use AtmState::*;

    Ok(vec![
        AtmTransitionBuilder::new(TransitionName::InsertCard.as_str())
            .from(Idle)
            .to(Authenticating)
            .effect(start_session)
            .build()?,
        AtmTransitionBuilder::new(TransitionName::SubmitPin.as_str())
            .from(Authenticating)
            .to(MainMenu)
            .requires(PayloadKind::PinCode)
            .guard(authentication_guard(secret.into()))
            .build()?,
        simple_transition(
            TransitionName::RemoveCard.as_str(),
            [Authenticating, MainMenu],
            Idle,
        )?,
        simple_transition(TransitionName::GoToBalance.as_str(), [MainMenu], ViewingBalance)?,
        simple_transition(TransitionName::GoToWithdraw.as_str(), [MainMenu], Withdrawing)?,
        simple_transition(TransitionName::Back.as_str(), [ViewingBalance], MainMenu)?,
        AtmTransitionBuilder::new(TransitionName::SubmitAmount.as_str())
            .from(Withdrawing)
            .to(PrintingReceipt)
            .requires(PayloadKind::WithdrawalAmount)
            .when(withdrawal_guard)
            .effect(debit)
            .build()?,
        AtmTransitionBuilder::new(TransitionName::Confirm.as_str())
            .from(PrintingReceipt)
            .to(Idle)
            .requires(PayloadKind::Confirmation)
            .build()?,
    ])
}
