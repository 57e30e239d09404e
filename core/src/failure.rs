//! # Failure: Expected Failures as Data
//!
//! A [`Failure`] is what a producer returns when it hits a recoverable
//! condition. It is an ordinary value: it travels up the call chain through
//! plain `return`s and is recognised by the consumer with
//! [`is_failure`](crate::recognize::is_failure) or a `match`.
//!
//! The discriminant is the nominal type itself. Every field is private, so a
//! `Failure` can only come out of the constructors below; no record, map or
//! JSON object can pass for one.

use crate::record::Record;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// An expected, recoverable failure carrying a message and a payload.
///
/// `D` is the caller-chosen payload type. When no payload is given the data
/// slot points at the process-wide empty [`Record`], shared by reference.
#[derive(Debug, PartialEq, Eq)]
pub struct Failure<D = Record> {
    message: Cow<'static, str>,
    data: Arc<D>,
}

impl Failure<Record> {
    /// Builds a failure whose data is the shared empty record.
    ///
    /// Static messages are stored without allocating, and the data slot is a
    /// reference-count bump on the shared instance.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            data: Record::empty(),
        }
    }

    /// True when the data slot is the shared empty record.
    pub fn has_default_data(&self) -> bool {
        Arc::ptr_eq(&self.data, Record::empty_ref())
    }
}

impl<D> Failure<D> {
    /// Builds a failure carrying `data`.
    #[inline]
    pub fn with_data(message: impl Into<Cow<'static, str>>, data: D) -> Self {
        Self {
            message: message.into(),
            data: Arc::new(data),
        }
    }

    /// Builds a failure around an existing allocation.
    ///
    /// `data_arc()` on the result is pointer-identical to `data`.
    #[inline]
    pub fn with_shared(message: impl Into<Cow<'static, str>>, data: Arc<D>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn data_arc(&self) -> &Arc<D> {
        &self.data
    }

    /// Consumes the failure, returning its message and payload.
    pub fn into_parts(self) -> (Cow<'static, str>, Arc<D>) {
        (self.message, self.data)
    }
}

impl<D> Clone for Failure<D> {
    fn clone(&self) -> Self {
        Self {
            message: self.message.clone(),
            data: Arc::clone(&self.data),
        }
    }
}

impl<D> fmt::Display for Failure<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl<D: fmt::Debug> std::error::Error for Failure<D> {}

// Serialized as `{ message, data }`. No `Deserialize`: the discriminant does
// not survive serialization.
impl<D: Serialize> Serialize for Failure<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Failure", 2)?;
        state.serialize_field("message", self.message())?;
        state.serialize_field("data", self.data())?;
        state.end()
    }
}

/// Shorthand for [`Failure::new`].
#[inline]
pub fn fail(message: impl Into<Cow<'static, str>>) -> Failure<Record> {
    Failure::new(message)
}

/// Shorthand for [`Failure::with_data`].
#[inline]
pub fn fail_with<D>(message: impl Into<Cow<'static, str>>, data: D) -> Failure<D> {
    Failure::with_data(message, data)
}
