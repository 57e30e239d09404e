pub mod debug;
pub mod logic;
pub mod math;
pub mod parse;

use fault_core::Fallible;

/// A reusable producer: turns an `In` into an `Out` or a failure.
///
/// Implementations never panic on expected conditions; they return a
/// [`Failure`](fault_core::Failure) carrying `Self::Data`.
pub trait Node<In, Out> {
    /// Payload of the failures this node produces.
    type Data;

    fn apply(&self, input: In) -> Fallible<Out, Self::Data>;
}
