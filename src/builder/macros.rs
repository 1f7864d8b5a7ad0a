//! Macros for declaring machine states.

/// Declare an enum and implement [`State`](crate::core::State) and
/// `Display` for it.
///
/// Extra attributes (including additional derives) are passed through.
///
/// # Example
///
/// ```
/// use atm_session::state_enum;
/// use atm_session::core::State;
///
/// state_enum! {
///     #[derive(Copy, Eq, Hash)]
///     pub enum Dispenser {
///         Ready,
///         Counting,
///         Jammed,
///     }
/// }
///
/// assert_eq!(Dispenser::Counting.name(), "Counting");
/// assert_eq!(Dispenser::Jammed.to_string(), "Jammed");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
