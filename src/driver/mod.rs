//! Menu loop that drives a [`SessionMachine`] from operator input.
//!
//! The driver owns all text handling: it maps menu letters to transition
//! names and parses amounts before anything reaches the machine. Vetoes are
//! shown to the operator and the same prompt is asked again. Usage errors
//! mean the driver itself built a bad request, so they are returned.
//!
//! # Example
//!
//! ```rust
//! use atm_session::atm::SessionMachine;
//! use atm_session::driver::{run_session, ScriptedInput};
//!
//! let mut session = SessionMachine::new(10_000, 20_000);
//! let mut input = ScriptedInput::new(["1234", "w", "5000", "y"]);
//! let mut output = Vec::new();
//!
//! run_session(&mut session, &mut input, &mut output).unwrap();
//! assert!(session.is_complete());
//! assert_eq!(session.transaction().account_balance(), 15_000);
//! ```

mod input;

pub use input::{ConsoleInput, OperatorInput, ScriptedInput};

use crate::atm::{AtmState, SessionError, SessionMachine, TransitionName, TransitionRequest};
use std::io::{self, Write};
use thiserror::Error;

/// Errors that end a driven session early.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Operator I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Session rejected request: {0}")]
    Session(#[from] SessionError),
}

pub const MENU_PROMPT: &str = "Choose ( (b)alance, (w)ithdraw, (e)xit ): ";

/// Transition selected by a main menu letter.
pub fn menu_choice(line: &str) -> Option<TransitionName> {
    match line.trim().to_ascii_lowercase().as_str() {
        "b" => Some(TransitionName::GoToBalance),
        "w" => Some(TransitionName::GoToWithdraw),
        "e" => Some(TransitionName::RemoveCard),
        _ => None,
    }
}

fn ask<I: OperatorInput + ?Sized>(input: &mut I, message: &str) -> io::Result<String> {
    Ok(input.prompt_line(message)?.trim().to_string())
}

/// Next request for the current state, or `None` when the answer was not
/// understood and the prompt should be repeated.
fn next_request<I, W>(
    session: &SessionMachine,
    input: &mut I,
    output: &mut W,
) -> io::Result<Option<TransitionRequest>>
where
    I: OperatorInput + ?Sized,
    W: Write,
{
    let request = match session.current_state() {
        AtmState::Idle => Some(TransitionRequest::insert_card()),
        AtmState::Authenticating => {
            let pin = ask(input, "Enter PIN (blank to take card): ")?;
            if pin.is_empty() {
                Some(TransitionRequest::remove_card())
            } else {
                Some(TransitionRequest::submit_pin(pin))
            }
        }
        AtmState::MainMenu => {
            writeln!(
                output,
                "Available: {}",
                session.available_transitions().join(", ")
            )?;
            let line = ask(input, MENU_PROMPT)?;
            let choice = menu_choice(&line);
            if choice.is_none() {
                writeln!(output, "Unknown choice '{line}'")?;
            }
            choice.map(TransitionRequest::from)
        }
        AtmState::ViewingBalance => {
            writeln!(
                output,
                "Balance: {}",
                session.transaction().account_balance()
            )?;
            let line = ask(input, "Press (c) to continue: ")?;
            line.eq_ignore_ascii_case("c").then(TransitionRequest::back)
        }
        AtmState::Withdrawing => {
            let line = ask(input, "Amount to withdraw: ")?;
            match line.parse::<u64>() {
                Ok(amount) => Some(TransitionRequest::submit_amount(amount)),
                Err(_) => {
                    writeln!(output, "'{line}' is not a valid amount")?;
                    None
                }
            }
        }
        AtmState::PrintingReceipt => {
            let line = ask(input, "Print receipt? (y/n): ")?;
            match line.to_ascii_lowercase().as_str() {
                "y" => Some(TransitionRequest::confirm(true)),
                "n" => Some(TransitionRequest::confirm(false)),
                _ => None,
            }
        }
    };

    if request.is_none() {
        tracing::debug!(state = %session.current_state(), "Operator answer not understood");
    }
    Ok(request)
}

/// Drive one customer from card insertion back to `Idle`.
///
/// Returns immediately if the session is already complete.
pub fn run_session<I, W>(
    session: &mut SessionMachine,
    input: &mut I,
    output: &mut W,
) -> Result<(), DriverError>
where
    I: OperatorInput + ?Sized,
    W: Write,
{
    while !session.is_complete() {
        let Some(request) = next_request(session, input, output)? else {
            continue;
        };

        match session.fire(request) {
            Ok(AtmState::Idle) => {
                if let Some(receipt) = session.receipt() {
                    writeln!(
                        output,
                        "Receipt: withdrew {}, remaining balance {}",
                        receipt.withdrawn, receipt.remaining_balance
                    )?;
                }
                writeln!(output, "Goodbye")?;
            }
            Ok(_) => {}
            Err(err) => match err.veto() {
                Some(veto) => writeln!(output, "{veto}")?,
                None => return Err(err.into()),
            },
        }
    }

    Ok(())
}
