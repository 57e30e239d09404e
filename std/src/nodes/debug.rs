use super::Node;
use fault_core::{Failure, Fallible, Recognize};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt::Debug;

/// Logs whatever passes through and hands it on unchanged.
///
/// Failures are logged with their message; everything else with its `Debug`
/// form. `level` is one of `error`, `warn`, `debug`; anything else logs at
/// `info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogNode {
    pub message: String,
    pub level: String,
}

impl LogNode {
    pub fn new(message: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: level.into(),
        }
    }
}

impl<V> Node<V, V> for LogNode
where
    V: Recognize + Debug,
{
    type Data = Infallible;

    fn apply(&self, input: V) -> Fallible<V, Infallible> {
        let failure = input.recognize().map(|f| f.message());
        match self.level.as_str() {
            "error" => tracing::error!(?failure, "{}: {:?}", self.message, input),
            "warn" => tracing::warn!(?failure, "{}: {:?}", self.message, input),
            "debug" => tracing::debug!(?failure, "{}: {:?}", self.message, input),
            _ => tracing::info!(?failure, "{}: {:?}", self.message, input),
        }
        Ok(input)
    }
}

/// Always fails with `message`, carrying the input as data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailNode {
    pub message: Cow<'static, str>,
}

impl FailNode {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<T> Node<T, T> for FailNode {
    type Data = T;

    fn apply(&self, input: T) -> Fallible<T, T> {
        Err(Failure::with_data(self.message.clone(), input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fault_core::{Value, fail, is_failure};

    #[test]
    fn test_log_node_passes_through() {
        let node = LogNode::new("checkpoint", "debug");

        assert_eq!(node.apply(5).unwrap(), 5);

        let passed = node.apply(fail("not found")).unwrap();
        assert!(is_failure(&passed));
        assert_eq!(passed.message(), "not found");

        let value = node.apply(Value::failure("bad", 1)).unwrap();
        assert!(is_failure(&value));
    }

    #[test]
    fn test_fail_node() {
        let node = FailNode::new("always");
        let failure = node.apply("input").unwrap_err();

        assert_eq!(failure.message(), "always");
        assert_eq!(*failure.data(), "input");
    }
}
