use std::cell::Cell;
use valid_rail::{Builder, FailureReason, FailureReasons, Outcome, Policy};

#[test]
fn test_get_invokes_producer_once_at_call_time() {
    let calls = Cell::new(0u32);
    let outcome = Builder::empty()
        .create(|| {
            calls.set(calls.get() + 1);
            42
        })
        .run();

    // run() does not invoke the producer; get() does, exactly once.
    assert_eq!(calls.get(), 0);
    assert_eq!(outcome.get(), 42);
    assert_eq!(calls.get(), 1);
}

#[test]
#[should_panic(expected = "no value present")]
fn test_get_on_failure_panics() {
    let outcome = Builder::empty()
        .with(Policy::non_empty(Some(""), "email"))
        .create(|| "User")
        .run();

    let _ = outcome.get();
}

#[test]
fn test_into_value_on_success() {
    let outcome = Builder::empty().create(|| 42).run();
    assert_eq!(outcome.into_value(), Some(42));
}

#[test]
fn test_into_value_on_failure() {
    let calls = Cell::new(0u32);
    let outcome = Builder::empty()
        .with(Policy::non_null(None::<&i32>, "id"))
        .create(|| {
            calls.set(calls.get() + 1);
            42
        })
        .run();

    assert_eq!(outcome.into_value(), None);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_failures_empty_on_success() {
    let outcome = Builder::empty().create(|| 42).run();
    assert!(outcome.failures().is_empty());
    assert!(outcome.iter_failures().next().is_none());
}

#[test]
fn test_repeated_failure_reads_never_invoke_producer() {
    let calls = Cell::new(0u32);
    let outcome = Builder::empty()
        .create(|| {
            calls.set(calls.get() + 1);
            42
        })
        .run();

    for _ in 0..10 {
        assert!(outcome.failures().is_empty());
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_failures_ordered_on_failure() {
    let outcome = Builder::empty()
        .with(Policy::non_empty(Some(""), "a"))
        .with(Policy::non_empty(Some(""), "b"))
        .create(|| ())
        .run();

    let properties: Vec<&str> = outcome.iter_failures().map(|r| r.property()).collect();
    assert_eq!(properties, vec!["a", "b"]);
}

#[test]
fn test_into_failures_on_success_is_empty() {
    let outcome = Builder::empty().create(|| 42).run();
    assert!(outcome.into_failures().is_empty());
}

#[test]
fn test_if_valid_or_else_success_branch() {
    let valid_hits = Cell::new(0u32);
    let invalid_hits = Cell::new(0u32);

    Builder::empty().create(|| 42).run().if_valid_or_else(
        |value| {
            assert_eq!(value, 42);
            valid_hits.set(valid_hits.get() + 1);
        },
        |_failures| {
            invalid_hits.set(invalid_hits.get() + 1);
        },
    );

    assert_eq!(valid_hits.get(), 1);
    assert_eq!(invalid_hits.get(), 0);
}

#[test]
fn test_if_valid_or_else_failure_branch() {
    let producer_calls = Cell::new(0u32);
    let invalid_hits = Cell::new(0u32);

    Builder::empty()
        .with(Policy::non_empty(Some(""), "email"))
        .create(|| {
            producer_calls.set(producer_calls.get() + 1);
            "user"
        })
        .run()
        .if_valid_or_else(
            |_value| panic!("success branch must not run"),
            |failures| {
                assert_eq!(failures.len(), 1);
                invalid_hits.set(invalid_hits.get() + 1);
            },
        );

    assert_eq!(invalid_hits.get(), 1);
    assert_eq!(producer_calls.get(), 0);
}

#[test]
fn test_to_result_success() {
    let result = Builder::empty().create(|| 42).run().to_result();
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn test_to_result_failure_travels_through_question_mark() {
    fn build() -> Result<i32, FailureReasons> {
        let value = Builder::empty()
            .with(Policy::non_null(None::<&i32>, "id"))
            .create(|| 42)
            .run()
            .to_result()?;
        Ok(value)
    }

    let err = build().unwrap_err();
    assert_eq!(err.to_string(), "id: Is null");
}

#[test]
fn test_outcome_valid_constructor() {
    let outcome = Outcome::valid(|| 7);
    assert!(outcome.is_valid());
    assert_eq!(outcome.get(), 7);
}

#[test]
fn test_outcome_invalid_constructor() {
    let mut failures = FailureReasons::new();
    failures.push(FailureReason::new("name", "Is null"));

    let outcome: Outcome<fn() -> i32> = Outcome::invalid(failures);
    assert!(outcome.is_invalid());
    assert_eq!(outcome.failures().len(), 1);
}

#[test]
fn test_fresh_outcome_per_run() {
    let validator = Builder::empty()
        .with(Policy::non_empty(Some(""), "email"))
        .create(|| "user");

    let first = validator.clone().run().into_failures();
    let second = validator.run().into_failures();
    assert_eq!(first, second);
}
