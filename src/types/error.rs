//! Failure causes.
//!
//! An [`Error`] is a reason that explains a failure. It may own nested
//! sub-causes, forming a tree, and may carry an [`Exception`] captured at an
//! error-value boundary (an *exceptional* error).

use core::fmt::{self, Display};
use std::time::SystemTime;

use crate::types::{BoxError, Exception, Metadata, MetadataValue, OperationFailed, Reason};

/// A failure cause with optional nested sub-causes.
///
/// # Examples
///
/// ## Composite error
///
/// ```
/// use trace_rail::Error;
///
/// let err = Error::new("checkout failed")
///     .meta("order_id", 981u64)
///     .caused_by(Error::new("card declined"))
///     .caused_by(Error::new("retry budget exhausted"));
///
/// assert_eq!(err.causes().len(), 2);
/// assert_eq!(err.to_string(), "checkout failed");
/// ```
///
/// ## Exceptional error
///
/// ```
/// use trace_rail::Error;
///
/// let io = std::io::Error::other("disk full");
/// let err = Error::exceptional(io);
///
/// assert_eq!(err.message(), "disk full");
/// assert!(err.exception().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Error {
    base: Reason,
    causes: Vec<Error>,
    exception: Option<Exception>,
}

impl Error {
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self::from_parts(message, None, None)
    }

    /// Creates an error from its parts.
    ///
    /// Missing metadata or causes become empty collections.
    #[inline]
    pub fn from_parts<S: Into<String>>(
        message: S,
        metadata: Option<Metadata>,
        causes: Option<Vec<Error>>,
    ) -> Self {
        Self {
            base: Reason::from_parts(message, metadata),
            causes: causes.unwrap_or_default(),
            exception: None,
        }
    }

    /// Wraps a captured error value.
    ///
    /// The message is the captured error's display text. An
    /// [`OperationFailed`] signal is recognised here and kept as
    /// [`Exception::Signal`] so that it can be unwrapped later.
    pub fn exceptional<E: Into<BoxError>>(error: E) -> Self {
        Self::from_exception(Exception::capture(error.into()))
    }

    /// Wraps an already classified exception.
    pub fn from_exception(exception: Exception) -> Self {
        Self {
            base: Reason::new(exception.to_string()),
            causes: Vec::new(),
            exception: Some(exception),
        }
    }

    #[inline]
    pub fn meta<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.base = self.base.meta(key, value);
        self
    }

    /// Appends a sub-cause.
    #[inline]
    pub fn caused_by<E: Into<Error>>(mut self, cause: E) -> Self {
        self.causes.push(cause.into());
        self
    }

    /// Appends several sub-causes in order.
    #[inline]
    pub fn caused_by_all<I>(mut self, causes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Error>,
    {
        self.causes.extend(causes.into_iter().map(Into::into));
        self
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

    /// Direct sub-causes, in attachment order.
    #[inline]
    pub fn causes(&self) -> &[Error] {
        &self.causes
    }

    #[inline]
    pub fn exception(&self) -> Option<&Exception> {
        self.exception.as_ref()
    }

    /// Returns the boundary signal this error carries, if any.
    #[inline]
    pub fn signal(&self) -> Option<&OperationFailed> {
        match &self.exception {
            Some(Exception::Signal(signal)) => Some(signal),
            Some(Exception::Other(_)) | None => None,
        }
    }

    /// Walks this error and all nested causes depth-first, parents first.
    pub fn walk(&self) -> impl Iterator<Item = &Error> {
        let mut stack = vec![self];
        core::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.causes.iter().rev());
            Some(next)
        })
    }
}

impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.base, f)
    }
}

impl std::error::Error for Error {
    /// The captured exception when present, otherwise the first sub-cause.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.exception {
            Some(exception) => Some(exception.as_error()),
            None => self.causes.first().map(|c| c as &(dyn std::error::Error + 'static)),
        }
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Exception> for Error {
    #[inline]
    fn from(exception: Exception) -> Self {
        Self::from_exception(exception)
    }
}

impl From<OperationFailed> for Error {
    #[inline]
    fn from(signal: OperationFailed) -> Self {
        Self::from_exception(Exception::Signal(signal))
    }
}
