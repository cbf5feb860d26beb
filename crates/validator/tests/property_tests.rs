//! Property-based tests for fieldcheck.

use fieldcheck::prelude::*;
use fieldcheck::rules;
use proptest::prelude::*;

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn email_idempotent(s in ".*") {
        let r1 = rules::email(&s);
        let r2 = rules::email(&s);
        prop_assert_eq!(r1, r2);
    }

    #[test]
    fn city_name_idempotent(s in ".*") {
        prop_assert_eq!(rules::city_name(&s), rules::city_name(&s));
    }

    #[test]
    fn postal_code_normalization_idempotent(s in "[a-zA-Z0-9 -]{0,8}") {
        if let Ok(once) = rules::postal_code(&s) {
            let twice = rules::postal_code(&once).unwrap();
            prop_assert_eq!(once.as_ref(), twice.as_ref());
        }
    }

    #[test]
    fn numeric_exact_output_passes_again(s in "[+-]?[0-9]{1,10}") {
        let length = s.chars().count();
        if let Ok(once) = rules::numeric_required_exact_integer(&s, "N", length) {
            prop_assert_eq!(&once, &s);
            let twice = rules::numeric_required_exact_integer(&once, "N", length);
            prop_assert_eq!(twice, Ok(once));
        }
        let once = rules::numeric_required_exact_integer64(&s, "N", length).unwrap();
        let twice = rules::numeric_required_exact_integer64(&once, "N", length).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn composite_output_passes_again(s in "\\PC{0,12}", n in 0usize..12) {
        let bounds = LengthBounds::between(n / 2, n);
        if let Ok(once) = rules::string_required(&s, "F", bounds) {
            prop_assert_eq!(rules::string_required(once, "F", bounds), Ok(once));
        }
        if let Ok(once) = rules::string_required_exact(&s, "F", n) {
            prop_assert_eq!(rules::string_required_exact(once, "F", n), Ok(once));
        }
        if let Ok(once) = rules::chars_required(&s, "F", bounds) {
            prop_assert_eq!(rules::chars_required(once, "F", bounds), Ok(once));
        }
        if let Ok(once) = rules::chars_required_exact(&s, "F", n) {
            prop_assert_eq!(rules::chars_required_exact(once, "F", n), Ok(once));
        }
    }

    #[test]
    fn primitive_output_passes_again(s in "\\PC{0,12}", n in 0usize..12) {
        let outputs = [
            rules::required(&s, "F"),
            rules::min_length(&s, "F", n),
            rules::max_length(&s, "F", n),
            rules::exact_length(&s, "F", n),
            rules::alphabetical_only(&s, "F"),
            rules::alpha_numeric_only(&s, "F"),
        ];
        for once in outputs.into_iter().flatten() {
            prop_assert_eq!(once, s.as_str());
        }
        if let Ok(once) = rules::exact_length(&s, "F", n) {
            prop_assert!(rules::exact_length(once, "F", n).is_ok());
        }
    }
}

// ============================================================================
// LENGTH LAWS
// ============================================================================

proptest! {
    #[test]
    fn exact_length_accepts_only_n(s in "\\PC{0,20}") {
        let n = s.chars().count();
        prop_assert!(rules::exact_length(&s, "Field", n).is_ok());

        let err = rules::exact_length(&s, "Field", n + 1).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::WrongLength);

        if n > 0 {
            let err = rules::exact_length(&s, "Field", n - 1).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::WrongLength);
        }
    }

    #[test]
    fn bounds_agree_with_min_and_max(s in ".{0,30}", min in 0usize..15, max in 0usize..30) {
        let combined = LengthBounds { min: Some(min), max: Some(max), exact: None };
        let a_ok = min_length(min).validate(&s).is_ok();
        let b_ok = max_length(max).validate(&s).is_ok();
        prop_assert_eq!(combined.validate(&s).is_ok(), a_ok && b_ok);
    }
}

// ============================================================================
// REQUIRED
// ============================================================================

proptest! {
    #[test]
    fn required_fails_iff_empty(s in ".{0,10}") {
        let result = rules::required(&s, "Field");
        prop_assert_eq!(result.is_err(), s.is_empty());
    }

    #[test]
    fn composites_report_empty_first(
        n in 0usize..10,
        bounds_min in 0usize..10,
    ) {
        let bounds = LengthBounds::at_least(bounds_min);
        let kinds = [
            rules::string_required("", "F", bounds).unwrap_err().kind(),
            rules::string_required_exact("", "F", n).unwrap_err().kind(),
            rules::chars_required("", "F", bounds).unwrap_err().kind(),
            rules::chars_required_exact("", "F", n).unwrap_err().kind(),
            rules::numeric_required_exact_integer("", "F", n).unwrap_err().kind(),
            rules::numeric_required_exact_integer64("", "F", n).unwrap_err().kind(),
        ];
        for kind in kinds {
            prop_assert_eq!(kind, ErrorKind::EmptyInput);
        }
    }
}

// ============================================================================
// NUMERIC
// ============================================================================

proptest! {
    #[test]
    fn integer_round_trips_display(n in any::<i32>()) {
        prop_assert_eq!(rules::try_integer(&n.to_string(), "N").unwrap(), n);
    }

    #[test]
    fn integer_rejects_fractions(whole in any::<i32>(), frac in 0u32..1000) {
        let input = format!("{whole}.{frac}");
        let err = rules::try_integer(&input, "N").unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::NotNumeric);
    }
}

// ============================================================================
// COMBINATOR LAWS: a.and(b) fails iff a fails or b fails
// ============================================================================

proptest! {
    #[test]
    fn and_fails_iff_either_fails(s in ".{0,30}") {
        let a = min_length(3);
        let b = max_length(10);
        let combined = a.and(b);

        let a_ok = a.validate(&s).is_ok();
        let b_ok = b.validate(&s).is_ok();
        let combined_ok = combined.validate(&s).is_ok();

        prop_assert_eq!(combined_ok, a_ok && b_ok);
    }
}

// ============================================================================
// PIPELINE ORDER
// ============================================================================

proptest! {
    #[test]
    fn pipeline_order_independent(s in "[a-z0-9]{0,8}", exact in 0usize..8) {
        let forward = Pipeline::new("F")
            .required()
            .chars(CharClass::Alphabetic)
            .exact(exact)
            .numeric(NumberKind::Integer);
        let backward = Pipeline::new("F")
            .numeric(NumberKind::Integer)
            .exact(exact)
            .chars(CharClass::Alphabetic)
            .required();
        prop_assert_eq!(forward.stages(), backward.stages());
        prop_assert_eq!(forward.run(&s), backward.run(&s));
    }
}
