//! Property-based and spy-backed tests for the refiner algebra

use proptest::prelude::*;
use weir::refiner::{
    self, compose, fail, from_mapping, from_result, from_validator, identity, or, BoxedRefiner,
    Refiner, RefinerExt,
};
use weir::testing::Spy;
use weir::validator::{from_predicate, Validator};
use weir::{assert_validation_errors, Validation};

fn parse_i32() -> impl Refiner<str, Output = i32, Error = String> + Clone {
    from_result(|s: &str| s.parse::<i32>().map_err(|_| format!("'{}' is not a number", s)))
}

fn halve() -> impl Refiner<i32, Output = i32, Error = String> + Clone {
    from_result(|n: &i32| {
        if n % 2 == 0 {
            Ok(n / 2)
        } else {
            Err(format!("{} is odd", n))
        }
    })
}

proptest! {
    #[test]
    fn prop_from_validator_round_trip(s in ".{0,12}") {
        let rule = from_predicate(|s: &str| s.chars().count() >= 3, "too short");
        let lifted = from_validator(rule.clone());
        if let Validation::Success(output) = lifted.refine(s.as_str()) {
            prop_assert!(rule.validate(output.as_str()).is_empty());
            prop_assert_eq!(output, s);
        } else {
            prop_assert_eq!(lifted.refine(s.as_str()), Validation::Failure(vec!["too short"]));
        }
    }

    #[test]
    fn prop_identity_is_neutral(n in any::<i32>()) {
        let input = n.to_string();
        let composed = compose(identity(), parse_i32());
        prop_assert_eq!(composed.refine(input.as_str()), parse_i32().refine(input.as_str()));
    }

    #[test]
    fn prop_map_output_matches_validation_map(n in any::<i32>()) {
        let input = n.to_string();
        let mapped = parse_i32().map_output(|n: i32| i64::from(n) * 2);
        prop_assert_eq!(
            mapped.refine(input.as_str()),
            parse_i32().refine(input.as_str()).map(|n| i64::from(n) * 2)
        );
    }

    #[test]
    fn prop_zip_accumulates_both_sides(s in "[a-z0-9]{0,6}") {
        let zipped = parse_i32().zip(from_validator(from_predicate(
            |s: &str| !s.is_empty(),
            "empty".to_string(),
        )));
        let expected = parse_i32()
            .refine(s.as_str())
            .and(Validation::from_result(if s.is_empty() {
                Err(vec!["empty".to_string()])
            } else {
                Ok(s.clone())
            }));
        prop_assert_eq!(zipped.refine(s.as_str()), expected);
    }
}

#[test]
fn test_compose_does_not_invoke_second_on_failure() {
    let second = Spy::new(halve());
    let calls = second.call_count();
    let r = compose(second, parse_i32());

    assert_validation_errors!(r.refine("x"), vec!["'x' is not a number".to_string()]);
    assert_eq!(calls.get(), 0);

    assert_eq!(r.refine("8"), Validation::Success(4));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_and_then_matches_compose() {
    let chained = parse_i32().and_then(halve());
    let composed = compose(halve(), parse_i32());
    for input in ["10", "7", "ten"] {
        assert_eq!(chained.refine(input), composed.refine(input));
    }
}

#[test]
fn test_or_skips_fallback_on_success() {
    let fallback = Spy::new(fail::<i32, String>("fallback".to_string()));
    let calls = fallback.call_count();
    let r = or(fallback, parse_i32());

    assert_eq!(r.refine("3"), Validation::Success(3));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_or_returns_exactly_fallback_result() {
    let failing = or(fail::<i32, String>("fallback".to_string()), parse_i32());
    assert_validation_errors!(failing.refine("three"), vec!["fallback".to_string()]);

    let recovering = or(
        from_mapping(|s: &str| s.len() as i32),
        parse_i32(),
    );
    assert_eq!(recovering.refine("three"), Validation::Success(5));
}

#[test]
fn test_any_keeps_only_last_errors() {
    let r = refiner::any(
        "no alternative".to_string(),
        vec![
            parse_i32().boxed(),
            parse_i32().and_then(halve()).boxed(),
            from_result(|s: &str| {
                s.strip_prefix('#')
                    .and_then(|rest| rest.parse::<i32>().ok())
                    .ok_or_else(|| format!("'{}' is not a tag", s))
            })
            .boxed(),
        ],
    );

    assert_eq!(r.refine("#12"), Validation::Success(12));
    assert_validation_errors!(r.refine("abc"), vec!["'abc' is not a tag".to_string()]);
}

#[test]
fn test_any_stops_at_first_success() {
    let later = Spy::new(parse_i32());
    let calls = later.call_count();
    let r = refiner::any(
        "no alternative".to_string(),
        vec![parse_i32().boxed(), later.boxed()],
    );

    assert_eq!(r.refine("1"), Validation::Success(1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_empty_any_fails_with_default() {
    let empty: Vec<BoxedRefiner<str, i32, String>> = Vec::new();
    let r = refiner::any("no alternative".to_string(), empty);
    assert_validation_errors!(r.refine("1"), vec!["no alternative".to_string()]);
}

#[test]
fn test_none_fails_without_errors() {
    let r = refiner::none::<i32, String>();
    assert_validation_errors!(Refiner::<str>::refine(&r, "1"), Vec::<String>::new());
}

#[test]
fn test_ensure_rejects_output() {
    let small = parse_i32().ensure(from_predicate(
        |n: &i32| n.abs() < 10,
        "too large".to_string(),
    ));
    assert_eq!(small.refine("9"), Validation::Success(9));
    assert_validation_errors!(small.refine("10"), vec!["too large".to_string()]);
}
