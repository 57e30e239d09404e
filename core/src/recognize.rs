//! # Recognize: The Recognition Predicate
//!
//! [`is_failure`] answers "is this a failure?" for any value whose type
//! implements [`Recognize`]. The answer is total: primitives, sequences, maps,
//! absent values and JSON never panic and never answer `true`.
//!
//! A positive answer needs a [`FailureRef`], and a `FailureRef` can only be
//! borrowed from a real [`Failure`]. Downstream types may implement
//! `Recognize` (the default method says "not a failure") but cannot forge a
//! failure.

use crate::failure::Failure;
use crate::record::Record;
use crate::value::Value;
use std::any::{Any, type_name};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A borrowed, type-erased view of a [`Failure`].
#[derive(Clone, Copy)]
pub struct FailureRef<'a> {
    failure: &'a dyn Any,
    message: &'a str,
    data: &'a dyn Any,
    data_type: &'static str,
}

impl<'a> FailureRef<'a> {
    fn new<D: Any>(failure: &'a Failure<D>) -> Self {
        Self {
            failure,
            message: failure.message(),
            data: failure.data(),
            data_type: type_name::<D>(),
        }
    }

    pub fn message(&self) -> &'a str {
        self.message
    }

    /// The payload, if it is a `D`.
    pub fn data<D: Any>(&self) -> Option<&'a D> {
        self.data.downcast_ref()
    }

    /// Full type name of the payload.
    pub fn data_type(&self) -> &'static str {
        self.data_type
    }

    /// Recovers the typed failure.
    pub fn narrow<D: Any>(&self) -> Option<&'a Failure<D>> {
        self.failure.downcast_ref()
    }
}

impl fmt::Debug for FailureRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailureRef")
            .field("message", &self.message)
            .field("data_type", &self.data_type)
            .finish()
    }
}

/// Values that can be asked whether they are a failure.
pub trait Recognize {
    /// Returns the failure this value is or carries, if any.
    #[inline]
    fn recognize(&self) -> Option<FailureRef<'_>> {
        None
    }
}

/// The recognition predicate.
#[inline]
pub fn is_failure<V: Recognize + ?Sized>(value: &V) -> bool {
    value.recognize().is_some()
}

impl<D: Any> Recognize for Failure<D> {
    #[inline]
    fn recognize(&self) -> Option<FailureRef<'_>> {
        Some(FailureRef::new(self))
    }
}

impl<T, D: Any> Recognize for Result<T, Failure<D>> {
    #[inline]
    fn recognize(&self) -> Option<FailureRef<'_>> {
        match self {
            Ok(_) => None,
            Err(failure) => failure.recognize(),
        }
    }
}

impl Recognize for Value {
    #[inline]
    fn recognize(&self) -> Option<FailureRef<'_>> {
        self.as_failure().and_then(Recognize::recognize)
    }
}

impl<T: Recognize> Recognize for Option<T> {
    #[inline]
    fn recognize(&self) -> Option<FailureRef<'_>> {
        self.as_ref().and_then(Recognize::recognize)
    }
}

macro_rules! recognize_delegate {
    ($($ptr:ty),*) => {
        $(
            impl<T: Recognize + ?Sized> Recognize for $ptr {
                #[inline]
                fn recognize(&self) -> Option<FailureRef<'_>> {
                    (**self).recognize()
                }
            }
        )*
    };
}

recognize_delegate!(&T, &mut T, Box<T>, Arc<T>, Rc<T>);

macro_rules! recognize_never {
    ($($ty:ty),*) => {
        $(impl Recognize for $ty {})*
    };
}

recognize_never!(
    (), bool, char, str, String, Record, serde_json::Value,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64
);

impl<T> Recognize for [T] {}
impl<T, const N: usize> Recognize for [T; N] {}
impl<T> Recognize for Vec<T> {}
impl<T> Recognize for VecDeque<T> {}
impl<T, S> Recognize for HashSet<T, S> {}
impl<T> Recognize for BTreeSet<T> {}
impl<K, V, S> Recognize for HashMap<K, V, S> {}
impl<K, V> Recognize for BTreeMap<K, V> {}
