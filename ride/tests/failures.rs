use ride::{Target, after, before, compose, ride, try_after, try_before, try_compose, wrap};
use std::panic::{AssertUnwindSafe, catch_unwind};

mod common;
use common::{FAIL, Negative, RUN, RunWrapped, TRY_RUN, TestClass};

#[test]
fn test_after_skips_extra_when_original_panics() {
    let mut object = TestClass::new();
    ride(
        &mut object,
        FAIL,
        after(|this: &TestClass, _: &(i32,)| this.record("after", None)),
    )
    .unwrap();

    let result = catch_unwind(AssertUnwindSafe(|| object.invoke(FAIL, (1,))));

    assert!(result.is_err());
    assert_eq!(object.sequence.entries(), vec![("fail", Some(1))]);
}

#[test]
fn test_before_skips_original_when_extra_panics() {
    let mut object = TestClass::new();
    ride(
        &mut object,
        RUN,
        before(|this: &TestClass, (a,): &(i32,)| {
            this.record("before", None);
            assert!(*a < 0, "extra behavior failed");
        }),
    )
    .unwrap();

    let result = catch_unwind(AssertUnwindSafe(|| object.run(1)));

    assert!(result.is_err());
    assert_eq!(object.sequence.entries(), vec![("before", None)]);
}

#[test]
fn test_compose_skips_transformer_when_original_panics() {
    let mut object = TestClass::new();
    ride(
        &mut object,
        FAIL,
        compose(|this: &TestClass, value: String| {
            this.record("transform", None);
            value
        }),
    )
    .unwrap();

    let result = catch_unwind(AssertUnwindSafe(|| object.invoke(FAIL, (2,))));

    assert!(result.is_err());
    assert_eq!(object.sequence.entries(), vec![("fail", Some(2))]);
}

#[test]
fn test_wrapper_panic_propagates_unmodified() {
    let mut object = TestClass::new();
    ride(
        &mut object,
        RUN,
        wrap(|_: &TestClass, _: RunWrapped<'_>, (a,): (i32,)| -> String {
            panic!("refusing {a}");
        }),
    )
    .unwrap();

    let payload = catch_unwind(AssertUnwindSafe(|| object.run(3))).unwrap_err();

    assert_eq!(payload.downcast_ref::<String>().unwrap(), "refusing 3");
    assert!(object.sequence.is_empty());
}

#[test]
fn test_plain_after_treats_err_as_a_value() {
    let mut object = TestClass::new();
    ride(
        &mut object,
        TRY_RUN,
        after(|this: &TestClass, _: &(i32,)| this.record("after", None)),
    )
    .unwrap();

    assert_eq!(object.invoke(TRY_RUN, (-1,)).unwrap(), Err(Negative(-1)));
    assert_eq!(
        object.sequence.entries(),
        vec![("original", Some(-1)), ("after", None)]
    );
}

#[test]
fn test_try_after_skips_extra_on_err() {
    let mut object = TestClass::new();
    ride(
        &mut object,
        TRY_RUN,
        try_after(|this: &TestClass, _: &(i32,)| {
            this.record("after", None);
            Ok::<_, Negative>(())
        }),
    )
    .unwrap();

    assert_eq!(object.invoke(TRY_RUN, (-1,)).unwrap(), Err(Negative(-1)));
    assert_eq!(object.sequence.entries(), vec![("original", Some(-1))]);

    assert_eq!(
        object.invoke(TRY_RUN, (1,)).unwrap(),
        Ok("original".to_string())
    );
    assert_eq!(
        object.sequence.entries(),
        vec![
            ("original", Some(-1)),
            ("original", Some(1)),
            ("after", None),
        ]
    );
}

#[test]
fn test_try_before_skips_original_on_err() {
    let mut object = TestClass::new();
    ride(
        &mut object,
        TRY_RUN,
        try_before(|this: &TestClass, (a,): &(i32,)| {
            this.record("guard", Some(*a));
            if *a > 10 { Err(Negative(*a)) } else { Ok(()) }
        }),
    )
    .unwrap();

    assert_eq!(object.invoke(TRY_RUN, (11,)).unwrap(), Err(Negative(11)));
    assert_eq!(object.sequence.entries(), vec![("guard", Some(11))]);
}

#[test]
fn test_try_compose_skips_transformer_on_err() {
    let mut object = TestClass::new();
    ride(
        &mut object,
        TRY_RUN,
        try_compose(|this: &TestClass, value: String| {
            this.record("transform", None);
            Ok::<_, Negative>(value.to_uppercase())
        }),
    )
    .unwrap();

    assert_eq!(object.invoke(TRY_RUN, (-4,)).unwrap(), Err(Negative(-4)));
    assert_eq!(
        object.invoke(TRY_RUN, (4,)).unwrap(),
        Ok("ORIGINAL".to_string())
    );
    assert_eq!(
        object.sequence.entries(),
        vec![
            ("original", Some(-4)),
            ("original", Some(4)),
            ("transform", None),
        ]
    );
}
