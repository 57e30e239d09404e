use super::Node;
use fault_core::{Failure, Fallible, Record};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub, Num};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MathOperation {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl MathOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            MathOperation::Add => "add",
            MathOperation::Sub => "sub",
            MathOperation::Mul => "mul",
            MathOperation::Div => "div",
            MathOperation::Rem => "rem",
        }
    }
}

/// Number types a [`MathNode`] can work on.
///
/// `None` means the result does not fit in `Self`. Integers check every
/// operation; floats never report overflow.
pub trait Arithmetic: Num + Clone + Debug {
    fn compute(&self, operation: MathOperation, operand: &Self) -> Option<Self>;
}

macro_rules! checked_arithmetic {
    ($($ty:ty),*) => {
        $(
            impl Arithmetic for $ty {
                fn compute(&self, operation: MathOperation, operand: &Self) -> Option<Self> {
                    match operation {
                        MathOperation::Add => CheckedAdd::checked_add(self, operand),
                        MathOperation::Sub => CheckedSub::checked_sub(self, operand),
                        MathOperation::Mul => CheckedMul::checked_mul(self, operand),
                        MathOperation::Div => CheckedDiv::checked_div(self, operand),
                        MathOperation::Rem => CheckedRem::checked_rem(self, operand),
                    }
                }
            }
        )*
    };
}

checked_arithmetic!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_arithmetic {
    ($($ty:ty),*) => {
        $(
            impl Arithmetic for $ty {
                fn compute(&self, operation: MathOperation, operand: &Self) -> Option<Self> {
                    Some(match operation {
                        MathOperation::Add => self + operand,
                        MathOperation::Sub => self - operand,
                        MathOperation::Mul => self * operand,
                        MathOperation::Div => self / operand,
                        MathOperation::Rem => self % operand,
                    })
                }
            }
        )*
    };
}

float_arithmetic!(f32, f64);

/// Applies `operation` with a fixed right-hand `operand`.
///
/// Division and remainder by zero are reported as a `"division by zero"`
/// failure carrying `{ operation, input }`, for floats as well as integers.
/// An integer result that does not fit the type (including `MIN / -1`) is an
/// `"integer overflow"` failure with the same data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MathNode<T> {
    pub operation: MathOperation,
    pub operand: T,
}

impl<T> MathNode<T> {
    pub fn new(operation: MathOperation, operand: T) -> Self {
        Self { operation, operand }
    }

    fn failure(&self, message: &'static str, input: &T) -> Failure
    where
        T: Debug,
    {
        Failure::with_data(
            message,
            Record::new()
                .with("operation", self.operation.as_str())
                .with("input", format!("{input:?}")),
        )
    }
}

impl<T: Arithmetic> Node<T, T> for MathNode<T> {
    type Data = Record;

    fn apply(&self, input: T) -> Fallible<T> {
        let by_zero = matches!(self.operation, MathOperation::Div | MathOperation::Rem)
            && self.operand.is_zero();
        if by_zero {
            return Err(self.failure("division by zero", &input));
        }

        input
            .compute(self.operation, &self.operand)
            .ok_or_else(|| self.failure("integer overflow", &input))
    }
}

/// `a / b`, or a failure when `b` is zero.
pub fn divide(a: f64, b: f64) -> Fallible<f64> {
    MathNode::new(MathOperation::Div, b).apply(a)
}
