//! Property-based tests for field validation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use fieldguard::core::{FieldRule, ViolationKind};
use fieldguard::form::Validator;
use fieldguard::presets::{self, PASSWORD, USERNAME};
use proptest::prelude::*;

fn username_rule() -> FieldRule {
    FieldRule::builder()
        .required()
        .length(3, 20)
        .pattern("[A-Za-z0-9_]+")
        .build()
        .unwrap()
}

fn check_index(kind: ViolationKind) -> usize {
    match kind {
        ViolationKind::Required => 0,
        ViolationKind::MinLength => 1,
        ViolationKind::MaxLength => 2,
        ViolationKind::Pattern => 3,
    }
}

prop_compose! {
    fn whitespace()(spaces in prop::collection::vec(
        prop::sample::select(vec![' ', '\t', '\n', '\r']),
        0..8,
    )) -> String {
        spaces.into_iter().collect()
    }
}

proptest! {
    #[test]
    fn blank_required_value_yields_only_required(value in whitespace()) {
        let validator = presets::login().unwrap();

        for field in [USERNAME, PASSWORD] {
            let result = validator.validate(field, &value).unwrap();
            prop_assert_eq!(result.kinds(), vec![ViolationKind::Required]);
        }
    }

    #[test]
    fn validation_is_idempotent(value in ".{0,30}") {
        let rule = username_rule();
        prop_assert_eq!(rule.validate(&value), rule.validate(&value));
    }

    #[test]
    fn violations_follow_check_order(value in ".{0,30}") {
        let result = username_rule().validate(&value);
        let indices: Vec<usize> = result.kinds().into_iter().map(check_index).collect();

        let mut sorted = indices.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(indices, sorted);
    }

    #[test]
    fn non_blank_value_never_reports_required(value in "[a-z !]{0,10}[a-z!][a-z !]{0,10}") {
        let result = username_rule().validate(&value);
        prop_assert!(!result.has(ViolationKind::Required));
    }

    #[test]
    fn well_formed_usernames_pass(value in "[A-Za-z0-9_]{3,20}") {
        prop_assert!(username_rule().validate(&value).is_valid());
    }

    #[test]
    fn length_violations_match_bounds(value in "[a-z]{1,40}") {
        let result = username_rule().validate(&value);
        let length = value.chars().count();

        prop_assert_eq!(result.has(ViolationKind::MinLength), length < 3);
        prop_assert_eq!(result.has(ViolationKind::MaxLength), length > 20);
        prop_assert!(!result.has(ViolationKind::Pattern));
    }

    #[test]
    fn submission_blocked_iff_any_field_fails(
        username in "[A-Za-z0-9_ ]{0,25}",
        password in ".{0,25}",
    ) {
        let validator = presets::login().unwrap();
        let report = validator.validate_form(&[(USERNAME, username.as_str()), (PASSWORD, password.as_str())]);

        let any_failed = !validator.validate(USERNAME, &username).unwrap().is_valid()
            || !validator.validate(PASSWORD, &password).unwrap().is_valid();
        prop_assert_eq!(report.blocks_submission(), any_failed);
    }

    #[test]
    fn config_round_trip_preserves_behaviour(value in ".{0,25}") {
        let validator = presets::login().unwrap();
        let restored = Validator::from_json(&validator.to_json().unwrap()).unwrap();

        for field in [USERNAME, PASSWORD] {
            prop_assert_eq!(
                validator.validate(field, &value).unwrap(),
                restored.validate(field, &value).unwrap()
            );
        }
    }
}
