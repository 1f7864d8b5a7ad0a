//! Business reasons for refusing a transition.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a guard refused a request. The customer may retry with other input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum Veto {
    #[error("Wrong PIN")]
    WrongPin,

    #[error("Withdrawal amount must be greater than zero")]
    InvalidAmount,

    #[error("Insufficient account funds: at most {limit} can be withdrawn")]
    InsufficientAccountFunds { limit: u64 },

    #[error("Insufficient cash in machine: at most {limit} can be dispensed")]
    InsufficientMachineFunds { limit: u64 },
}
