//! Dynamic argument lists.
//!
//! `EventHub<A>` is generic over its payload, so most callers pick a
//! concrete type. When listeners need to accept "any arguments", use
//! [`Args`] with a [`DynHub`](crate::DynHub) and build lists with the
//! [`args!`](crate::args!) macro. Conversion to JSON can fail (for
//! example a map with non-string keys), so building a list is fallible.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered list of loosely typed arguments passed to listeners
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Args(Vec<Value>);

impl Args {
    /// An empty argument list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no arguments
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw value at `index`
    pub fn raw(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Argument at `index` converted to `T`
    ///
    /// Returns None when the index is out of range or the value does not
    /// deserialize as `T`.
    pub fn get<T: DeserializeOwned>(&self, index: usize) -> Option<T> {
        self.raw(index)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Append an argument
    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }

    /// Serialize `value` and append it
    pub fn try_push<T: Serialize + ?Sized>(&mut self, value: &T) -> serde_json::Result<()> {
        self.0.push(to_arg(value)?);
        Ok(())
    }

    /// Collect already converted values, stopping at the first failure
    pub fn try_collect<I>(values: I) -> serde_json::Result<Self>
    where
        I: IntoIterator<Item = serde_json::Result<Value>>,
    {
        values.into_iter().collect::<serde_json::Result<Vec<_>>>().map(Self)
    }

    /// Iterate over the raw values
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for Args {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Convert one argument to its JSON value
pub fn to_arg<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Value> {
    serde_json::to_value(value)
}

/// Build an [`Args`] list from serializable expressions
///
/// Evaluates to `serde_json::Result<Args>`; the first argument that cannot
/// be represented as JSON is returned as the error.
///
/// ```rust,ignore
/// hub.emit("AJAX-CALL", &args!["/api/items", 3, true]?)?;
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::try_collect(::std::iter::empty())
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Args::try_collect([$($crate::args::to_arg(&$arg)),+])
    };
}
