//! Data a customer supplies with a request.

use std::fmt;

/// Typed input attached to a transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    PinCode { value: String },
    WithdrawalAmount { value: u64 },
    Confirmation { accepted: bool },
}

impl Payload {
    pub fn pin(value: impl Into<String>) -> Self {
        Self::PinCode {
            value: value.into(),
        }
    }

    pub fn amount(value: u64) -> Self {
        Self::WithdrawalAmount { value }
    }

    pub fn confirmation(accepted: bool) -> Self {
        Self::Confirmation { accepted }
    }
}

/// Variant tag of a [`Payload`], used in transition declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    PinCode,
    WithdrawalAmount,
    Confirmation,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PinCode => "PinCode",
            Self::WithdrawalAmount => "WithdrawalAmount",
            Self::Confirmation => "Confirmation",
        };
        f.write_str(name)
    }
}

impl crate::core::Payload for Payload {
    type Kind = PayloadKind;

    fn kind(&self) -> PayloadKind {
        match self {
            Self::PinCode { .. } => PayloadKind::PinCode,
            Self::WithdrawalAmount { .. } => PayloadKind::WithdrawalAmount,
            Self::Confirmation { .. } => PayloadKind::Confirmation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Payload as _;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Payload::pin("1234").kind(), PayloadKind::PinCode);
        assert_eq!(Payload::amount(50).kind(), PayloadKind::WithdrawalAmount);
        assert_eq!(Payload::confirmation(false).kind(), PayloadKind::Confirmation);
    }

    #[test]
    fn kind_displays_variant_name() {
        assert_eq!(PayloadKind::WithdrawalAmount.to_string(), "WithdrawalAmount");
    }
}
