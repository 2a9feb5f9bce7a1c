//! Property-based tests for the calculator core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated key sequences.

use proptest::prelude::*;
use tally::core::{apply, format_number, CalcError, Calculator, InputToken, Key, Operator};

fn collapse_leading_zeros(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn type_text(calc: Calculator, text: &str) -> Calculator {
    text.chars().fold(calc, |calc, c| {
        calc.enter_digit(InputToken::try_from(c).unwrap())
    })
}

/// Run keys, keeping the previous state whenever a key is refused.
fn run_keys(keys: &[Key]) -> Calculator {
    keys.iter().fold(Calculator::new(), |calc, key| {
        calc.handle(*key).unwrap_or(calc)
    })
}

fn has_redundant_leading_zero(display: &str) -> bool {
    let bytes = display.as_bytes();
    bytes.len() > 1 && bytes[0] == b'0' && bytes[1].is_ascii_digit()
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4usize) -> Operator {
        Operator::ALL[variant]
    }
}

fn arbitrary_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        6 => (0..=9u8).prop_map(|d| Key::Digit(InputToken::digit(d).unwrap())),
        1 => Just(Key::Digit(InputToken::Point)),
        2 => arbitrary_operator().prop_map(Key::Operation),
        1 => Just(Key::Equals),
        1 => Just(Key::Clear),
        1 => Just(Key::ClearAll),
        1 => (-1000i32..1000).prop_map(|v| Key::Reuse(f64::from(v) / 4.0)),
    ]
}

proptest! {
    #[test]
    fn digits_concatenate_with_zeros_collapsed(digits in "[0-9]{1,15}") {
        let calc = type_text(Calculator::new(), &digits);
        prop_assert_eq!(calc.display(), collapse_leading_zeros(&digits));
    }

    #[test]
    fn single_point_splits_integer_and_fraction(
        integer in "[0-9]{0,8}",
        fraction in "[0-9]{0,8}",
    ) {
        let text = format!("{integer}.{fraction}");
        let calc = type_text(Calculator::new(), &text);

        let expected = format!("{}.{}", collapse_leading_zeros(&integer), fraction);
        prop_assert_eq!(calc.display(), expected.as_str());
        prop_assert_eq!(calc.value(), expected.parse::<f64>().unwrap());
    }

    #[test]
    fn repeated_point_is_noop(digits in "[0-9]{0,6}") {
        let calc = type_text(Calculator::new(), &format!("{digits}."));
        let again = calc.enter_digit(InputToken::Point);
        prop_assert_eq!(again, calc);
    }

    #[test]
    fn display_invariants_hold(keys in prop::collection::vec(arbitrary_key(), 0..40)) {
        let calc = run_keys(&keys);
        let display = calc.display();

        prop_assert!(display.matches('.').count() <= 1);
        prop_assert!(!has_redundant_leading_zero(display));
        if calc.pending_operation().is_some() {
            prop_assert!(calc.pending_value().is_some());
        }
    }

    #[test]
    fn history_only_grows_on_equals(keys in prop::collection::vec(arbitrary_key(), 0..40)) {
        let mut calc = Calculator::new();
        for key in keys {
            let before = calc.history().clone();
            let Ok(next) = calc.handle(key) else { continue };

            match key {
                Key::Equals if calc.pending_operation().is_some() => {
                    prop_assert_eq!(next.history().len(), before.len() + 1);
                    prop_assert_eq!(&next.history().entries()[..before.len()], before.entries());
                }
                Key::ClearAll => prop_assert!(next.history().is_empty()),
                _ => prop_assert_eq!(next.history(), &before),
            }
            calc = next;
        }
    }

    #[test]
    fn clear_all_restores_initial(keys in prop::collection::vec(arbitrary_key(), 0..40)) {
        let calc = run_keys(&keys).clear_all();
        prop_assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn clear_keeps_history(keys in prop::collection::vec(arbitrary_key(), 0..40)) {
        let calc = run_keys(&keys);
        let cleared = calc.clear();
        prop_assert_eq!(cleared.display(), "0");
        prop_assert_eq!(cleared.pending_operation(), None);
        prop_assert_eq!(cleared.history(), calc.history());
    }

    #[test]
    fn reuse_clears_pending_state(
        keys in prop::collection::vec(arbitrary_key(), 0..40),
        value in -1_000_000i64..1_000_000,
    ) {
        let value = value as f64;
        let calc = run_keys(&keys).reuse(value);

        prop_assert_eq!(calc.display(), format_number(value, None));
        prop_assert_eq!(calc.value(), value);
        prop_assert_eq!(calc.pending_value(), None);
        prop_assert_eq!(calc.pending_operation(), None);
        prop_assert!(calc.resets_on_next_digit());
    }

    #[test]
    fn division_by_zero_returns_dividend(a in -1e9f64..1e9) {
        prop_assert_eq!(
            apply(Operator::Divide, a, 0.0),
            Err(CalcError::DivisionByZero { dividend: a })
        );
    }

    #[test]
    fn operator_then_equals_uses_zero(a in 0u32..100_000, op in arbitrary_operator()) {
        let calc = type_text(Calculator::new(), &a.to_string())
            .apply_operation(op)
            .unwrap();
        let result = calc.equals();

        match op {
            Operator::Divide => prop_assert!(result.is_err()),
            _ => {
                let calc = result.unwrap();
                let expected = apply(op, f64::from(a), 0.0).unwrap();
                prop_assert_eq!(calc.value(), expected);
                prop_assert_eq!(calc.history().len(), 1);
            }
        }
    }
}
