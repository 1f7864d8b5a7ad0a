//! Balances touched by a session.

use crate::atm::veto::Veto;
use serde::{Deserialize, Serialize};

/// Cash in the machine, the customer's balance and what this session took.
///
/// All amounts are unsigned, and every debit is checked against both
/// balances first, so neither can go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionState {
    machine_cash: u64,
    account_balance: u64,
    withdrawn_this_session: u64,
}

impl TransactionState {
    pub fn new(machine_cash: u64, account_balance: u64) -> Self {
        Self {
            machine_cash,
            account_balance,
            withdrawn_this_session: 0,
        }
    }

    pub fn machine_cash(&self) -> u64 {
        self.machine_cash
    }

    pub fn account_balance(&self) -> u64 {
        self.account_balance
    }

    pub fn withdrawn_this_session(&self) -> u64 {
        self.withdrawn_this_session
    }

    /// Same balances, session counter reset.
    pub fn begin_session(&self) -> Self {
        Self {
            withdrawn_this_session: 0,
            ..*self
        }
    }

    /// Check a withdrawal without applying it.
    ///
    /// Zero is refused first, then the account limit, then the machine limit.
    pub fn check_withdrawal(&self, amount: u64) -> Result<(), Veto> {
        if amount == 0 {
            Err(Veto::InvalidAmount)
        } else if amount > self.account_balance {
            Err(Veto::InsufficientAccountFunds {
                limit: self.account_balance,
            })
        } else if amount > self.machine_cash {
            Err(Veto::InsufficientMachineFunds {
                limit: self.machine_cash,
            })
        } else {
            Ok(())
        }
    }

    /// Balances after dispensing `amount`.
    pub fn withdraw(&self, amount: u64) -> Result<Self, Veto> {
        self.check_withdrawal(amount)?;
        Ok(Self {
            machine_cash: self.machine_cash - amount,
            account_balance: self.account_balance - amount,
            withdrawn_this_session: self.withdrawn_this_session.saturating_add(amount),
        })
    }
}
