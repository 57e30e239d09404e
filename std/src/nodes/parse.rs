//! Integer parsing for hot paths.
//!
//! Every failure uses a static message, so the failure path allocates only
//! its data record. Offsets are byte offsets into the original input.

use fault_core::{Failure, Fallible, Record};
use std::sync::Arc;

const EMPTY_INPUT: &str = "empty input";
const EXPECTED_DIGIT: &str = "expected digit";
const UNEXPECTED_CHARACTER: &str = "unexpected character";
const INTEGER_OVERFLOW: &str = "integer overflow";

fn failure_at(message: &'static str, offset: usize, found: Option<char>) -> Failure {
    Failure::with_data(
        message,
        Record::new().with("offset", offset).with("found", found),
    )
}

/// Parses an optionally signed base-10 `i64`. No surrounding whitespace is
/// accepted.
pub fn parse_int(input: &str) -> Fallible<i64> {
    let bytes = input.as_bytes();
    let Some(&first) = bytes.first() else {
        return Err(Failure::with_data(
            EMPTY_INPUT,
            Record::new().with("offset", 0),
        ));
    };

    let negative = first == b'-';
    let start = usize::from(first == b'-' || first == b'+');
    if start == bytes.len() {
        return Err(failure_at(EXPECTED_DIGIT, start, None));
    }

    // Accumulate towards the sign so `i64::MIN` parses.
    let mut acc: i64 = 0;
    for (offset, ch) in input.char_indices().skip(start) {
        let Some(digit) = ch.to_digit(10) else {
            return Err(failure_at(UNEXPECTED_CHARACTER, offset, Some(ch)));
        };
        let digit = i64::from(digit);
        let next = acc.checked_mul(10).and_then(|v| {
            if negative {
                v.checked_sub(digit)
            } else {
                v.checked_add(digit)
            }
        });
        match next {
            Some(v) => acc = v,
            None => return Err(failure_at(INTEGER_OVERFLOW, offset, Some(ch))),
        }
    }

    Ok(acc)
}

/// Parses a `sep`-separated list of integers. Whitespace around items is
/// ignored; an empty input is an empty list.
///
/// A failing item is reported with the offset translated into `input` and
/// its position under `index`.
pub fn parse_list(input: &str, sep: char) -> Fallible<Vec<i64>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut values = Vec::new();
    let mut base = 0;
    for (index, item) in input.split(sep).enumerate() {
        let trimmed = item.trim_start();
        let lead = item.len() - trimmed.len();

        match parse_int(trimmed.trim_end()) {
            Ok(v) => values.push(v),
            Err(failure) => return Err(relocate(failure, base + lead, index)),
        }
        base += item.len() + sep.len_utf8();
    }

    Ok(values)
}

fn relocate(failure: Failure, shift: usize, index: usize) -> Failure {
    let (message, data) = failure.into_parts();
    let offset = data
        .get("offset")
        .and_then(|v| v.as_i64())
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(0);

    let record = Arc::unwrap_or_clone(data)
        .with("offset", shift + offset)
        .with("index", index);
    Failure::with_data(message, record)
}
