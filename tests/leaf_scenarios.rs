//! Concrete scenarios built from the leaf validators

use weir::leaf::{
    has_char_count_between, has_len_between, is_at_least, is_at_most, is_email, is_in_range,
    is_one_of, RangeError,
};
use weir::validator::{every, on_each, on_some, Validator, ValidatorExt};
use weir::{assert_invalid, assert_valid, ContextError};

#[test]
fn test_contradictory_bounds_report_both() {
    let v = every(vec![is_at_least(8).boxed(), is_at_most(1).boxed()]);
    assert_eq!(
        v.validate(&5),
        vec![RangeError::BelowMinimum(8), RangeError::AboveMaximum(1)]
    );
}

#[test]
fn test_sensible_bounds_accept_inner_value() {
    let v = every(vec![is_at_least(3).boxed(), is_at_most(7).boxed()]);
    assert_valid!(v, &5);
    assert_invalid!(v, &2, vec![RangeError::BelowMinimum(3)]);
}

#[test]
fn test_on_each_reports_rejected_elements_in_order() {
    let v = on_each(is_one_of([1, 2, 3]));
    assert_eq!(v.validate(&[1, 5, 2, 9][..]), vec![5, 9]);
}

#[test]
fn test_record_report_with_paths() {
    struct Order {
        email: String,
        items: Vec<u32>,
        coupon: Option<String>,
        quantity: i64,
    }

    let order = every(vec![
        is_email()
            .with_context("email")
            .focus(|o: &Order| o.email.as_str())
            .boxed(),
        has_len_between::<u32>(1, 10)
            .map_error(|e: RangeError<usize>| e.to_string())
            .with_context("items")
            .focus(|o: &Order| o.items.as_slice())
            .boxed(),
        on_some(
            has_char_count_between(4, 8)
                .map_error(|e: RangeError<usize>| e.to_string())
                .focus(|code: &String| code.as_str()),
        )
            .with_context("coupon")
            .focus(|o: &Order| &o.coupon)
            .boxed(),
        is_in_range(1i64, 99)
            .map_error(|e: RangeError<i64>| e.to_string())
            .with_context("quantity")
            .focus(|o: &Order| &o.quantity)
            .boxed(),
    ]);

    let errors: Vec<ContextError<String>> = order.validate(&Order {
        email: "shop@example.com".into(),
        items: vec![],
        coupon: Some("XY".into()),
        quantity: 120,
    });
    let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "items: must be at least 1",
            "coupon: must be at least 4",
            "quantity: must be at most 99",
        ]
    );
}
