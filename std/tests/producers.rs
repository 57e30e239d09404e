use fault_core::{Fallible, Traced, Value, fail, is_failure};
use fault_std::prelude::*;

/// Sums a comma-separated list and divides by a divisor, failing on either
/// step without unwinding.
fn average_of(list: &str, divisor: f64) -> Fallible<f64> {
    let values = parse_list(list, ',')?;
    let sum: i64 = values.iter().sum();
    divide(sum as f64, divisor)
}

#[test]
fn consumer_branches_on_each_step() {
    assert_eq!(average_of("1,2,3", 2.0).unwrap(), 3.0);

    let bad_list = average_of("1,x", 2.0);
    assert!(is_failure(&bad_list));
    assert_eq!(bad_list.unwrap_err().message(), "unexpected character");

    let bad_divisor = average_of("1,2", 0.0);
    assert_eq!(bad_divisor.unwrap_err().message(), "division by zero");
}

#[test]
fn traced_node() {
    let halve = MathNode::new(MathOperation::Div, 2i64);
    let traced = Traced::new(|n: i64| halve.apply(n), "halve");

    assert_eq!(traced.call(10).unwrap(), 5);

    let zero = MathNode::new(MathOperation::Div, 0i64);
    let traced_zero = Traced::new(|n: i64| zero.apply(n), "by_zero");
    assert!(is_failure(&traced_zero.call(10)));
}

#[test]
fn failures_flow_through_the_dynamic_domain() {
    let inputs = ["12", "-4", "abc", ""];
    let values: Vec<Value> = inputs
        .iter()
        .map(|s| match parse_int(s) {
            Ok(n) => Value::from(n),
            Err(failure) => Value::from(failure),
        })
        .collect();

    let failed: Vec<&str> = values
        .iter()
        .filter_map(Value::as_failure)
        .map(|f| f.message())
        .collect();
    assert_eq!(failed, vec!["unexpected character", "empty input"]);

    let sum: i64 = values.iter().filter_map(Value::as_i64).sum();
    assert_eq!(sum, 8);
}

#[test]
fn filter_then_switch() {
    let positive = FilterNode::new(|n: &i64| *n > 0).with_message("must be positive");
    let size = SwitchNode::new(["small", "large"], |n: &i64| -> String {
        if *n < 100 { "small".into() } else { "large".into() }
    });

    let route = |n: i64| -> Option<String> {
        let n = positive.apply(n).ok()?;
        size.apply(n).ok().map(|(branch, _)| branch)
    };

    assert_eq!(route(5).as_deref(), Some("small"));
    assert_eq!(route(500).as_deref(), Some("large"));
    assert_eq!(route(-1), None);
}

#[test]
fn log_node_does_not_alter_failures() {
    let log = LogNode::new("seen", "info");
    let failure = fail("not found");

    let out = log.apply(failure.clone()).unwrap();
    assert_eq!(out, failure);
    assert!(out.has_default_data());
}
