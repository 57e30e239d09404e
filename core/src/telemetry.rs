//! # Telemetry: Observability for Producers
//!
//! Nothing in this crate logs on its own. Callers who want visibility wrap a
//! producer in [`Traced`] or pass a value through [`observe`]; the failure
//! itself is still returned untouched.

use crate::config::{ConfigError, LogFormat, TelemetryConfig};
use crate::fallible::Fallible;
use crate::recognize::Recognize;
use std::fmt::Debug;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// A wrapper that adds tracing to any producer `Fn(I) -> Fallible<T, D>`.
#[derive(Clone)]
pub struct Traced<F> {
    inner: F,
    name: String,
}

impl<F> Traced<F> {
    pub fn new(inner: F, name: &str) -> Self {
        Self {
            inner,
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the producer inside a `Producer` span and logs how it ended.
    pub fn call<I, T, D>(&self, input: I) -> Fallible<T, D>
    where
        F: Fn(I) -> Fallible<T, D>,
        I: Debug,
        T: Debug,
        D: Debug,
    {
        let span = tracing::info_span!("Producer", fault.producer = %self.name);
        let _entered = span.enter();

        tracing::debug!(?input, "Entering producer");
        let start = Instant::now();

        let result = (self.inner)(input);

        let duration = start.elapsed();
        match &result {
            Ok(val) => {
                tracing::debug!(?val, ?duration, "Producer completed: Ok");
            }
            Err(failure) => {
                tracing::warn!(
                    reason = failure.message(),
                    data = ?failure.data(),
                    ?duration,
                    "Producer completed: Failure"
                );
            }
        }
        result
    }
}

/// Logs `value` under `label` and returns whether it is a failure.
pub fn observe<V: Recognize + Debug + ?Sized>(label: &str, value: &V) -> bool {
    match value.recognize() {
        Some(failure) => {
            tracing::info!(
                label = label,
                reason = failure.message(),
                data_type = failure.data_type(),
                "Failure observed"
            );
            true
        }
        None => {
            tracing::trace!(label = label, ?value, "Value observed");
            false
        }
    }
}

/// Installs a global fmt subscriber.
///
/// The filter comes from `RUST_LOG` when it is set and valid, otherwise from
/// `config.filter`. Fails if a global subscriber is already installed.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config.env_filter()?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target);

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| ConfigError::Init(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::{Failure, fail};
    use crate::record::Record;

    fn halve(n: i32) -> Fallible<i32> {
        if n % 2 != 0 {
            return Err(Failure::with_data(
                "odd input",
                Record::new().with("input", n),
            ));
        }
        Ok(n / 2)
    }

    #[test]
    fn test_traced_passes_results_through() {
        let traced = Traced::new(halve, "halve");

        assert_eq!(traced.name(), "halve");
        assert_eq!(traced.call(8).unwrap(), 4);

        let failure = traced.call(3).unwrap_err();
        assert_eq!(failure.message(), "odd input");
        assert_eq!(failure.data().get("input").and_then(|v| v.as_i64()), Some(3));
    }

    #[test]
    fn test_traced_closure() {
        let limit = 10;
        let traced = Traced::new(
            move |n: i32| -> Fallible<i32> {
                if n > limit { Err(fail("too large")) } else { Ok(n) }
            },
            "bounded",
        );
        assert!(traced.call(11).is_err());
        assert_eq!(traced.call(5).unwrap(), 5);
    }

    #[test]
    fn test_observe_reports_recognition() {
        assert!(observe("failure", &fail("nope")));
        assert!(!observe("number", &42));
        assert!(!observe("text", "fine"));
    }

    #[test]
    fn test_init_tracing_only_once() {
        let config = TelemetryConfig::default();
        let first = init_tracing(&config);
        let second = init_tracing(&config);

        assert!(first.is_ok() || matches!(first, Err(ConfigError::Init(_))));
        assert!(matches!(second, Err(ConfigError::Init(_))));
    }
}
