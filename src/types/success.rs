use core::fmt::{self, Display};
use std::time::SystemTime;

use crate::types::{Metadata, MetadataValue, Reason};

/// A recorded positive outcome.
///
/// Successes carry the same fields as a [`Reason`]; the distinct type lets
/// consumers split a causal chain into what succeeded and what went wrong.
///
/// # Examples
///
/// ```
/// use trace_rail::{Success, Traced, TraceabilityExt};
///
/// let saved = Traced::ok(7).add_success_if_passed([Success::new("row written")]);
///
/// assert_eq!(saved.successes().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Success {
    base: Reason,
}

impl Success {
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { base: Reason::new(message) }
    }

    /// Creates a success from a message and optional metadata.
    #[inline]
    pub fn from_parts<S: Into<String>>(message: S, metadata: Option<Metadata>) -> Self {
        Self { base: Reason::from_parts(message, metadata) }
    }

    #[inline]
    pub fn meta<K, V>(self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        Self { base: self.base.meta(key, value) }
    }

    /// The shared reason fields.
    #[inline]
    pub fn reason(&self) -> &Reason {
        &self.base
    }

    #[inline]
    pub fn message(&self) -> &str {
        self.base.message()
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        self.base.metadata()
    }

    #[inline]
    pub fn created_at(&self) -> SystemTime {
        self.base.created_at()
    }
}

impl Display for Success {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.base, f)
    }
}

impl From<&str> for Success {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Success {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
