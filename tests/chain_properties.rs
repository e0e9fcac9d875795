//! Property-based tests for the chaining state machine and report format

use std::cell::Cell;

use guardrail::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_error_count_tracks_failed_conditions(
        conditions in prop::collection::vec(any::<bool>(), 0..20)
    ) {
        let mut check = Check::new(0);
        for c in &conditions {
            let c = *c;
            check = check.if_(move |_| c);
        }

        let failures = conditions.iter().filter(|c| **c).count();
        prop_assert_eq!(check.error_count(), failures);
        prop_assert_eq!(check.has_errors(), !check.is_valid());
        prop_assert_eq!(check.has_errors(), check.error_count() > 0);
    }

    #[test]
    fn prop_and_runs_iff_gate_passed(first_fires in any::<bool>()) {
        let and_ran = Cell::new(false);
        let check = Check::new(1)
            .if_(move |_| first_fires)
            .and_if(|_| {
                and_ran.set(true);
                false
            });

        prop_assert_eq!(and_ran.get(), !first_fires);
        prop_assert_eq!(check.error_count(), usize::from(first_fires));
    }

    #[test]
    fn prop_or_runs_iff_gate_failed(first_fires in any::<bool>()) {
        let or_ran = Cell::new(false);
        let check = Check::new(1)
            .if_(move |_| first_fires)
            .or_if(|_| {
                or_ran.set(true);
                false
            });

        prop_assert_eq!(or_ran.get(), first_fires);
        prop_assert_eq!(check.error_count(), usize::from(first_fires));
    }

    #[test]
    fn prop_clear_resets_any_state(fired in prop::collection::vec(any::<bool>(), 0..10)) {
        let mut check = Check::new(7);
        for f in fired {
            check = check.if_(move |_| f);
        }

        let check = check.clear();
        prop_assert!(check.is_valid());
        prop_assert_eq!(check.error_count(), 0);
        prop_assert_eq!(check.render(), None);
        prop_assert!(check.to_result().is_ok());
    }

    #[test]
    fn prop_render_numbers_messages_in_order(
        messages in prop::collection::vec("[a-z]{1,8}", 1..10)
    ) {
        let mut check = Check::new(());
        for m in &messages {
            check = check.if_msg(|_| true, m);
        }

        let mut expected = String::from("Errors: ");
        for (i, m) in messages.iter().enumerate() {
            if i > 0 {
                expected.push_str(", ");
            }
            expected.push_str(&format!("{}) {}", i + 1, m));
        }
        expected.push('.');

        prop_assert_eq!(check.render().unwrap(), expected);
        prop_assert_eq!(
            check.render_first().unwrap(),
            format!("Errors: {}.", messages[0])
        );
    }

    #[test]
    fn prop_absent_subject_only_fails_null_checks(
        ops in prop::collection::vec(0u8..6, 0..30)
    ) {
        let mut check = Check::from_option(None::<i32>);
        for op in &ops {
            check = match *op {
                0 => check.if_(|_| true),
                1 => check.if_not(|_| false),
                2 => check.and_if(|_| true),
                3 => check.or_if(|_| true),
                4 => check.or_if_not(|_| false),
                _ => check.if_none(),
            };
        }

        let null_checks = ops.iter().filter(|o| **o == 5).count();
        prop_assert_eq!(check.error_count(), null_checks);
        prop_assert!(!check.is_valid());
    }

    #[test]
    fn prop_terminal_calls_never_mutate(
        conditions in prop::collection::vec(any::<bool>(), 0..10)
    ) {
        let mut check = Check::new(3);
        for c in &conditions {
            let c = *c;
            check = check.if_(move |_| c);
        }

        let before = check.errors().to_vec();
        let _ = check.to_result();
        let _ = check.to_result_first();
        let _ = check.render();
        let _ = check.render_first();
        prop_assert_eq!(check.errors(), before.as_slice());
    }

    #[test]
    fn prop_first_error_matches_first_message(
        messages in prop::collection::vec("[a-z]{1,8}", 1..10)
    ) {
        let mut check = Check::new(());
        for m in &messages {
            check = check.if_msg(|_| true, m);
        }

        let err = check.to_result_first().unwrap_err();
        prop_assert_eq!(err.message(), format!("Errors: {}.", messages[0]));
    }
}
