//! Guards and effects attached to individual transitions.
//!
//! A guard inspects the machine context and the request payload and either
//! approves the transition or vetoes it with a domain reason. An effect
//! computes the context that will be committed once the transition succeeds.
//! Neither receives mutable access: the engine commits the returned context
//! itself, after every check has passed.

use std::sync::Arc;

/// Predicate that approves a transition or vetoes it with a reason `V`.
///
/// # Example
///
/// ```rust
/// use atm_session::core::Guard;
///
/// #[derive(Debug, PartialEq)]
/// struct TooLarge;
///
/// // Context is an account balance, payload a requested amount.
/// let guard: Guard<u64, u64, TooLarge> = Guard::new(|balance: &u64, amount: Option<&u64>| {
///     match amount {
///         Some(amount) if amount > balance => Err(TooLarge),
///         _ => Ok(()),
///     }
/// });
///
/// assert_eq!(guard.check(&100, Some(&50)), Ok(()));
/// assert_eq!(guard.check(&100, Some(&500)), Err(TooLarge));
/// ```
pub struct Guard<C, P, V> {
    predicate: Arc<dyn Fn(&C, Option<&P>) -> Result<(), V> + Send + Sync>,
}

impl<C, P, V> Guard<C, P, V> {
    /// Create a guard from a pure function.
    ///
    /// The function must not depend on anything besides its arguments; the
    /// engine may call it for a request that ends up rejected.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C, Option<&P>) -> Result<(), V> + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the guard.
    pub fn check(&self, context: &C, payload: Option<&P>) -> Result<(), V> {
        (self.predicate)(context, payload)
    }
}

impl<C, P, V> Clone for Guard<C, P, V> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

/// Pure function producing the context committed by a transition.
///
/// Effects may still refuse with a reason `V`; the engine treats that the
/// same way as a guard veto and commits nothing.
pub struct Effect<C, P, V> {
    apply: Arc<dyn Fn(&C, Option<&P>) -> Result<C, V> + Send + Sync>,
}

impl<C, P, V> Effect<C, P, V> {
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&C, Option<&P>) -> Result<C, V> + Send + Sync + 'static,
    {
        Effect {
            apply: Arc::new(apply),
        }
    }

    /// Compute the next context without touching the current one.
    pub fn apply(&self, context: &C, payload: Option<&P>) -> Result<C, V> {
        (self.apply)(context, payload)
    }
}

impl<C, P, V> Clone for Effect<C, P, V> {
    fn clone(&self) -> Self {
        Self {
            apply: Arc::clone(&self.apply),
        }
    }
}
