//! Building blocks shared by every machine:
//! - states via the `State` trait
//! - request data via the `Payload` trait
//! - guards and effects bound to transitions
//! - the history of committed transitions
//!
//! Nothing here performs I/O or mutates shared data.

mod guard;
mod history;
mod payload;
mod state;

pub use guard::{Effect, Guard};
pub use history::{StateHistory, StateTransition};
pub use payload::Payload;
pub use state::State;
