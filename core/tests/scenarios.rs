use fault_core::prelude::*;
use fault_core::{FailureRef, fail};
use std::sync::Arc;
use std::thread;

fn divide(a: f64, b: f64) -> Fallible<f64> {
    if b == 0.0 {
        return Err(fail("division by zero"));
    }
    Ok(a / b)
}

#[test]
fn scenario_a_failure_with_data() {
    let result = Failure::with_data("division by zero", Record::new().with("code", 42));

    assert_eq!(result.message(), "division by zero");
    assert_eq!(result.data().get("code").and_then(Value::as_i64), Some(42));
    assert!(is_failure(&result));
}

#[test]
fn scenario_b_failure_without_data() {
    let result = Failure::new("not found");

    assert_eq!(result.message(), "not found");
    assert_eq!(result.data(), &Record::new());
    assert!(is_failure(&result));
}

#[test]
fn scenario_c_producer_and_consumer() {
    let ok = divide(7.0, 2.0);
    assert!(!is_failure(&ok));
    if let Ok(v) = ok {
        assert_eq!(v * 2.0, 7.0);
    }

    let failed = divide(7.0, 0.0);
    assert!(is_failure(&failed));
    match failed {
        Ok(_) => panic!("expected a failure"),
        Err(failure) => assert_eq!(failure.message(), "division by zero"),
    }
}

#[test]
fn scenario_d_plain_values_are_not_failures() {
    assert!(!is_failure(&42));
    assert!(!is_failure("error"));
    assert!(!is_failure(&None::<i32>));
    assert!(!is_failure(&Value::Null));
    assert!(!is_failure(&[1, 2, 3]));
    assert!(!is_failure(&Value::from(vec![1, 2, 3])));
}

#[test]
fn records_named_like_failures_are_not_failures() {
    let record = Record::new()
        .with("message", "division by zero")
        .with("data", Record::new());
    assert!(!is_failure(&record));
    assert!(!is_failure(&Value::Record(record)));

    let json = serde_json::json!({ "message": "x", "data": { "code": 1 } });
    assert!(!is_failure(&json));
    assert!(!is_failure(&Value::from(json)));
}

#[test]
fn payload_identity_is_preserved() {
    let payload = Arc::new(Record::new().with("input", "abc"));
    let failure = Failure::with_shared("bad input", Arc::clone(&payload));

    assert!(Arc::ptr_eq(failure.data_arc(), &payload));
}

#[test]
fn default_data_is_shared_across_threads() {
    let local = Failure::new("here");
    let remote = thread::spawn(|| Failure::new("there")).join().unwrap();

    assert!(Arc::ptr_eq(local.data_arc(), remote.data_arc()));
    assert!(remote.has_default_data());
}

#[test]
fn recognition_is_not_scoped_to_the_constructing_thread() {
    let handles: Vec<_> = (0..4)
        .map(|i| thread::spawn(move || Failure::new(format!("worker {i} failed"))))
        .collect();

    for handle in handles {
        let failure = handle.join().unwrap();
        assert!(is_failure(&failure));
        assert!(is_failure(&failure));
    }
}

#[test]
fn narrowing_through_the_dynamic_domain() {
    let values = vec![
        Value::from(1),
        Value::from(Failure::new("not found")),
        Value::from("two"),
    ];

    let failures: Vec<FailureRef<'_>> = values.iter().filter_map(|v| v.recognize()).collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].message(), "not found");
    assert!(failures[0].narrow::<Value>().is_some());
}

#[test]
fn caller_may_escalate_to_anyhow() {
    fn run() -> anyhow::Result<f64> {
        Ok(divide(1.0, 0.0)?)
    }

    let err = run().unwrap_err();
    assert_eq!(err.to_string(), "division by zero");
    assert!(err.downcast_ref::<Failure>().is_some());
}
