use valid_rail::{FailureReason, FailureReasons, ReasonVec};

fn reason(property: &str, why: &str) -> FailureReason {
    FailureReason::new(property, why)
}

#[test]
fn test_failure_reasons_new() {
    let reasons = FailureReasons::new();
    assert!(reasons.is_empty());
    assert_eq!(reasons.len(), 0);
}

#[test]
fn test_failure_reasons_default() {
    let reasons = FailureReasons::default();
    assert!(reasons.is_empty());
}

#[test]
fn test_failure_reasons_push_preserves_order() {
    let mut reasons = FailureReasons::new();
    reasons.push(reason("name", "Is null"));
    reasons.push(reason("amount", "Is less or equal zero"));
    reasons.push(reason("email", "Is empty"));

    assert_eq!(reasons.len(), 3);
    let properties: Vec<&str> = reasons.iter().map(|r| r.property()).collect();
    assert_eq!(properties, vec!["name", "amount", "email"]);
}

#[test]
fn test_failure_reasons_extend() {
    let mut reasons = FailureReasons::new();
    reasons.push(reason("a", "Is null"));
    reasons.extend(vec![reason("b", "Is empty"), reason("c", "Is null")]);

    assert_eq!(reasons.len(), 3);
    let properties: Vec<&str> = reasons.iter().map(|r| r.property()).collect();
    assert_eq!(properties, vec!["a", "b", "c"]);
}

#[test]
fn test_failure_reasons_as_slice() {
    let mut reasons = FailureReasons::new();
    reasons.push(reason("name", "Is null"));

    let slice = reasons.as_slice();
    assert_eq!(slice.len(), 1);
    assert_eq!(slice[0].property(), "name");
}

#[test]
fn test_failure_reasons_iter_snapshot_per_call() {
    let mut reasons = FailureReasons::new();
    reasons.push(reason("a", "Is null"));
    assert_eq!(reasons.iter().count(), 1);

    reasons.push(reason("b", "Is empty"));
    assert_eq!(reasons.iter().count(), 2);
}

#[test]
fn test_failure_reasons_into_inner() {
    let mut reasons = FailureReasons::new();
    reasons.push(reason("a", "Is null"));
    reasons.push(reason("b", "Is empty"));

    let inner: ReasonVec = reasons.into_inner();
    assert_eq!(inner.len(), 2);
}

#[test]
fn test_failure_reasons_from_reason_vec() {
    let mut vec = ReasonVec::new();
    vec.push(reason("a", "Is null"));
    let reasons = FailureReasons::from(vec);
    assert_eq!(reasons.len(), 1);
}

#[test]
fn test_failure_reasons_from_iterator() {
    let reasons: FailureReasons = vec![reason("a", "Is null"), reason("b", "Is empty")]
        .into_iter()
        .collect();
    assert_eq!(reasons.len(), 2);
}

#[test]
fn test_failure_reasons_into_iterator() {
    let mut reasons = FailureReasons::new();
    reasons.push(reason("a", "Is null"));
    reasons.push(reason("b", "Is empty"));

    let collected: Vec<FailureReason> = reasons.into_iter().collect();
    assert_eq!(collected.len(), 2);
    assert_eq!(collected[0].property(), "a");
}

#[test]
fn test_failure_reasons_ref_into_iterator() {
    let mut reasons = FailureReasons::new();
    reasons.push(reason("a", "Is null"));

    let mut count = 0;
    for item in &reasons {
        assert_eq!(item.property(), "a");
        count += 1;
    }
    assert_eq!(count, 1);
    // Still usable after borrowing iteration.
    assert_eq!(reasons.len(), 1);
}

#[test]
fn test_failure_reasons_display_empty() {
    let reasons = FailureReasons::new();
    assert_eq!(reasons.to_string(), "");
}

#[test]
fn test_failure_reasons_display_joined() {
    let mut reasons = FailureReasons::new();
    reasons.push(reason("name", "Is null"));
    reasons.push(reason("email", "Is empty"));
    assert_eq!(reasons.to_string(), "name: Is null; email: Is empty");
}

#[test]
fn test_failure_reasons_clone_is_independent() {
    let mut original = FailureReasons::new();
    original.push(reason("a", "Is null"));

    let copy = original.clone();
    original.push(reason("b", "Is empty"));

    assert_eq!(original.len(), 2);
    assert_eq!(copy.len(), 1);
}

#[test]
fn test_failure_reasons_eq() {
    let a: FailureReasons = vec![reason("x", "Is null")].into_iter().collect();
    let b: FailureReasons = vec![reason("x", "Is null")].into_iter().collect();
    let c: FailureReasons = vec![reason("y", "Is null")].into_iter().collect();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_failure_reasons_is_error() {
    let mut reasons = FailureReasons::new();
    reasons.push(reason("name", "Is null"));
    let boxed: Box<dyn std::error::Error> = Box::new(reasons);
    assert_eq!(boxed.to_string(), "name: Is null");
}

#[test]
fn test_failure_reasons_beyond_inline_storage() {
    let mut reasons = FailureReasons::new();
    for index in 0..32 {
        reasons.push(reason(&format!("field{index}"), "Is null"));
    }

    assert_eq!(reasons.len(), 32);
    assert_eq!(reasons.iter().next().unwrap().property(), "field0");
    assert_eq!(reasons.iter().last().unwrap().property(), "field31");
}

#[test]
#[cfg(feature = "serde")]
fn test_failure_reasons_serde_round_trip() {
    let reasons: FailureReasons = vec![reason("a", "Is null"), reason("b", "Is empty")]
        .into_iter()
        .collect();
    let serialized = serde_json::to_string(&reasons).unwrap();
    let deserialized: FailureReasons = serde_json::from_str(&serialized).unwrap();
    assert_eq!(reasons, deserialized);
}
