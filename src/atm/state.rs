//! States of an ATM customer session.

use crate::state_enum;

state_enum! {
    /// Where the customer currently is in the session.
    ///
    /// `Idle` is both where a session starts and where it ends; there is no
    /// final state because the machine cycles back for the next card.
    #[derive(Copy, Eq, Hash)]
    pub enum AtmState {
        Idle,
        Authenticating,
        MainMenu,
        ViewingBalance,
        Withdrawing,
        PrintingReceipt,
    }
}

impl AtmState {
    pub const ALL: [AtmState; 6] = [
        AtmState::Idle,
        AtmState::Authenticating,
        AtmState::MainMenu,
        AtmState::ViewingBalance,
        AtmState::Withdrawing,
        AtmState::PrintingReceipt,
    ];

    /// True once the PIN has been accepted and until the card leaves.
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Idle | Self::Authenticating)
    }
}
