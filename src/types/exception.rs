use core::fmt::{self, Debug, Display};
use std::sync::Arc;

use crate::types::{BoxError, OperationFailed};

/// An error value captured at a boundary and carried by an exceptional
/// [`Error`](crate::Error).
///
/// The variant is decided once, in [`Exception::capture`]; consumers match on
/// it instead of probing types again.
#[derive(Clone)]
pub enum Exception {
    /// A failed result that crossed the boundary as an [`OperationFailed`].
    Signal(OperationFailed),
    /// Any other captured error.
    Other(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

impl Exception {
    /// Classifies a boxed error value.
    ///
    /// # Examples
    ///
    /// ```
    /// use trace_rail::{Exception, OperationFailed, Traced};
    ///
    /// let signal = OperationFailed::new(Traced::<()>::fail("db down"));
    /// assert!(Exception::capture(Box::new(signal)).is_signal());
    ///
    /// let io = std::io::Error::other("eof");
    /// assert!(!Exception::capture(Box::new(io)).is_signal());
    /// ```
    pub fn capture(error: BoxError) -> Self {
        match error.downcast::<OperationFailed>() {
            Ok(signal) => Self::Signal(*signal),
            Err(other) => Self::Other(Arc::from(other)),
        }
    }

    #[inline]
    pub fn is_signal(&self) -> bool {
        matches!(self, Self::Signal(_))
    }

    #[inline]
    pub fn as_signal(&self) -> Option<&OperationFailed> {
        match self {
            Self::Signal(signal) => Some(signal),
            Self::Other(_) => None,
        }
    }

    /// The captured value viewed as a standard error.
    #[inline]
    pub fn as_error(&self) -> &(dyn std::error::Error + 'static) {
        match self {
            Self::Signal(signal) => signal as &(dyn std::error::Error + 'static),
            Self::Other(error) => &**error,
        }
    }
}

impl Debug for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signal(signal) => f.debug_tuple("Signal").field(signal).finish(),
            Self::Other(error) => f.debug_tuple("Other").field(error).finish(),
        }
    }
}

impl Display for Exception {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_error(), f)
    }
}

/// Identity comparison: two exceptions are equal when they share the same
/// captured value.
impl PartialEq for Exception {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Signal(a), Self::Signal(b)) => a == b,
            (Self::Other(a), Self::Other(b)) => {
                Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
            },
            _ => false,
        }
    }
}

impl From<OperationFailed> for Exception {
    #[inline]
    fn from(signal: OperationFailed) -> Self {
        Self::Signal(signal)
    }
}
