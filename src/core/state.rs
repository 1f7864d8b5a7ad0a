//! The `State` trait implemented by every machine state.
//!
//! States are plain values. Inspecting them never has side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A position in a transition table.
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: the engine matches the current state against transition sources
/// - `Debug`: states appear in error values and log events
/// - `Serialize` + `Deserialize`: states are exported in session journals
///
/// Most state enums get this impl from [`state_enum!`](crate::state_enum).
///
/// ```rust
/// use atm_session::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum CardReader {
///     Empty,
///     Reading,
/// }
///
/// impl State for CardReader {
///     fn name(&self) -> &str {
///         match self {
///             Self::Empty => "Empty",
///             Self::Reading => "Reading",
///         }
///     }
/// }
///
/// assert_eq!(CardReader::Reading.name(), "Reading");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs, errors and journals.
    fn name(&self) -> &str;
}
