//! Typed data carried alongside a transition request.

use std::fmt::{Debug, Display};

/// A closed set of payload variants a transition may require.
///
/// Each transition declares at most one [`Payload::Kind`] it needs. The
/// engine compares that declaration with [`Payload::kind`] before any guard
/// runs, so guards can rely on receiving the variant they expect.
///
/// # Example
///
/// ```rust
/// use atm_session::core::Payload;
/// use std::fmt;
///
/// #[derive(Clone, Debug)]
/// enum Input {
///     Digits(String),
///     Keypad(u8),
/// }
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum InputKind {
///     Digits,
///     Keypad,
/// }
///
/// impl fmt::Display for InputKind {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{self:?}")
///     }
/// }
///
/// impl Payload for Input {
///     type Kind = InputKind;
///
///     fn kind(&self) -> InputKind {
///         match self {
///             Self::Digits(_) => InputKind::Digits,
///             Self::Keypad(_) => InputKind::Keypad,
///         }
///     }
/// }
///
/// assert_eq!(Input::Keypad(3).kind(), InputKind::Keypad);
/// ```
pub trait Payload: Clone + Debug + Send + Sync {
    /// Discriminant naming each variant without its data.
    type Kind: Copy + PartialEq + Debug + Display + Send + Sync;

    fn kind(&self) -> Self::Kind;
}
