use super::Node;
use fault_core::{Failure, Fallible, Record};
use std::borrow::Cow;
use std::sync::Arc;

/// Passes values that satisfy `predicate`; fails with `message` otherwise.
///
/// The failure carries the rejected value as its data, so the caller gets it
/// back.
pub struct FilterNode<T, F> {
    predicate: Arc<F>,
    message: Cow<'static, str>,
    _marker: std::marker::PhantomData<fn(T)>,
}

impl<T, F> FilterNode<T, F>
where
    F: Fn(&T) -> bool,
{
    pub fn new(predicate: F) -> Self {
        Self {
            predicate: Arc::new(predicate),
            message: Cow::Borrowed("rejected"),
            _marker: std::marker::PhantomData,
        }
    }

    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }
}

impl<T, F> Clone for FilterNode<T, F> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            message: self.message.clone(),
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, F> std::fmt::Debug for FilterNode<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterNode")
            .field("message", &self.message)
            .finish()
    }
}

impl<T, F> Node<T, T> for FilterNode<T, F>
where
    F: Fn(&T) -> bool,
{
    type Data = T;

    fn apply(&self, input: T) -> Fallible<T, T> {
        if (self.predicate)(&input) {
            Ok(input)
        } else {
            Err(Failure::with_data(self.message.clone(), input))
        }
    }
}

/// Routes a value to one of a fixed set of named branches.
///
/// `matcher` picks the branch; a name outside `branches` is a
/// `"no matching branch"` failure carrying `{ branch }`.
pub struct SwitchNode<T, F> {
    matcher: Arc<F>,
    branches: Vec<String>,
    _marker: std::marker::PhantomData<fn(T)>,
}

impl<T, F> SwitchNode<T, F>
where
    F: Fn(&T) -> String,
{
    pub fn new<I, S>(branches: I, matcher: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            matcher: Arc::new(matcher),
            branches: branches.into_iter().map(Into::into).collect(),
            _marker: std::marker::PhantomData,
        }
    }

    pub fn branches(&self) -> &[String] {
        &self.branches
    }
}

impl<T, F> Clone for SwitchNode<T, F> {
    fn clone(&self) -> Self {
        Self {
            matcher: self.matcher.clone(),
            branches: self.branches.clone(),
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, F> std::fmt::Debug for SwitchNode<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitchNode")
            .field("branches", &self.branches)
            .finish()
    }
}

impl<T, F> Node<T, (String, T)> for SwitchNode<T, F>
where
    F: Fn(&T) -> String,
{
    type Data = Record;

    fn apply(&self, input: T) -> Fallible<(String, T)> {
        let branch = (self.matcher)(&input);
        if self.branches.iter().any(|b| *b == branch) {
            Ok((branch, input))
        } else {
            Err(Failure::with_data(
                "no matching branch",
                Record::new().with("branch", branch),
            ))
        }
    }
}
