use core::fmt::{self, Display};
use std::time::SystemTime;

use crate::types::{Metadata, MetadataValue};

/// Base annotation attached to a traced result.
///
/// A reason records a fact about an operation: a message, ordered metadata
/// and the instant it was created. All fields are fixed at construction;
/// the consuming builders below are the only way to shape a reason before it
/// is attached.
///
/// # Examples
///
/// ```
/// use trace_rail::Reason;
///
/// let reason = Reason::new("cache miss").meta("key", "user:42");
///
/// assert_eq!(reason.to_string(), "cache miss");
/// assert_eq!(reason.metadata().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Reason {
    message: String,
    metadata: Metadata,
    created_at: SystemTime,
}

impl Reason {
    /// Creates a reason with the given message and no metadata.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self::from_parts(message, None)
    }

    /// Creates a reason from a message and optional metadata.
    ///
    /// A missing mapping becomes an empty one.
    #[inline]
    pub fn from_parts<S: Into<String>>(message: S, metadata: Option<Metadata>) -> Self {
        Self {
            message: message.into(),
            metadata: metadata.unwrap_or_default(),
            created_at: SystemTime::now(),
        }
    }

    /// Adds one metadata entry.
    #[inline]
    pub fn meta<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.metadata.insert(key, value);
        self
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The instant this reason was constructed.
    #[inline]
    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }
}

impl Default for Reason {
    fn default() -> Self {
        Self::from_parts(String::new(), None)
    }
}

impl Display for Reason {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&str> for Reason {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Reason {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
