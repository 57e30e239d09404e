//! Expected failures as plain values.
//!
//! A producer returns a [`Fallible`]; a consumer branches on it, or on
//! [`is_failure`] when all it holds is a value of unknown shape.

pub mod config;
pub mod failure;
pub mod fallible;
pub mod recognize;
pub mod record;
pub mod telemetry;
pub mod value;

pub use config::{ConfigError, LogFormat, TelemetryConfig};
pub use failure::{Failure, fail, fail_with};
pub use fallible::Fallible;
pub use recognize::{FailureRef, Recognize, is_failure};
pub use record::Record;
pub use telemetry::{Traced, init_tracing, observe};
pub use value::Value;

pub mod prelude {
    pub use crate::failure::{Failure, fail, fail_with};
    pub use crate::fallible::Fallible;
    pub use crate::recognize::{Recognize, is_failure};
    pub use crate::record::Record;
    pub use crate::telemetry::Traced;
    pub use crate::value::Value;
}
