//! Validation rules for session configuration.
//!
//! Every rule runs, and all failures are reported together, so an operator
//! fixing a config file sees the whole list at once.

use crate::config::error::ConfigViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub const MIN_PIN_LENGTH: usize = 4;
pub const MAX_PIN_LENGTH: usize = 12;

pub type Checked = Validation<(), NonEmptyVec<ConfigViolation>>;

fn digits_only(pin: &str) -> Checked {
    if pin.chars().all(|c| c.is_ascii_digit()) {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::NonDigitPin)
    }
}

fn length_in_range(pin: &str) -> Checked {
    let length = pin.chars().count();
    if (MIN_PIN_LENGTH..=MAX_PIN_LENGTH).contains(&length) {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::PinLength {
            length,
            min: MIN_PIN_LENGTH,
            max: MAX_PIN_LENGTH,
        })
    }
}

/// Check a PIN against every rule, accumulating all violations.
pub fn validate_pin(pin: &str) -> Checked {
    if pin.is_empty() {
        return Validation::fail(ConfigViolation::EmptyPin);
    }

    Validation::all_vec(vec![digits_only(pin), length_in_range(pin)]).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violations(pin: &str) -> Vec<ConfigViolation> {
        match validate_pin(pin) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    #[test]
    fn four_digit_pin_is_valid() {
        assert!(validate_pin("1234").is_success());
    }

    #[test]
    fn long_numeric_pin_is_valid() {
        assert!(validate_pin("123456789012").is_success());
    }

    #[test]
    fn empty_pin_reports_only_emptiness() {
        assert_eq!(violations(""), vec![ConfigViolation::EmptyPin]);
    }

    #[test]
    fn all_violations_are_accumulated() {
        let found = violations("12a");
        assert_eq!(found.len(), 2);
        assert!(found.contains(&ConfigViolation::NonDigitPin));
        assert!(found.contains(&ConfigViolation::PinLength {
            length: 3,
            min: MIN_PIN_LENGTH,
            max: MAX_PIN_LENGTH,
        }));
    }

    #[test]
    fn too_long_pin_is_rejected() {
        assert!(matches!(
            violations("1234567890123").as_slice(),
            [ConfigViolation::PinLength { length: 13, .. }]
        ));
    }
}
