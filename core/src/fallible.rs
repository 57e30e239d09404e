use crate::failure::Failure;
use crate::record::Record;

/// The return type of a producer: a plain value, or a [`Failure`].
///
/// `Fallible` represents "Control Flow as Data". A producer never panics or
/// unwinds for an expected condition; the consumer branches on the variant.
///
/// ```
/// use fault_core::{Fallible, fail};
///
/// fn divide(a: f64, b: f64) -> Fallible<f64> {
///     if b == 0.0 {
///         return Err(fail("division by zero"));
///     }
///     Ok(a / b)
/// }
///
/// match divide(7.0, 2.0) {
///     Ok(v) => assert_eq!(v, 3.5),
///     Err(failure) => panic!("{}", failure.message()),
/// }
/// assert!(divide(1.0, 0.0).is_err());
/// ```
pub type Fallible<T, D = Record> = Result<T, Failure<D>>;
