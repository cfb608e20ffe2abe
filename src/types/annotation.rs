use core::fmt::{self, Display};
use std::time::SystemTime;

use crate::types::{Error, Metadata, OperationFailed, Reason, Success};

/// Anything attached to a traced result.
///
/// The three variants split a causal chain into neutral facts, failure
/// causes and recorded successes. Matching on the variant replaces any
/// "is this an error?" probing.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Reason(Reason),
    Error(Error),
    Success(Success),
}

impl Annotation {
    /// The fields shared by every variant.
    #[inline]
    pub fn reason(&self) -> &Reason {
        match self {
            Self::Reason(reason) => reason,
            Self::Error(error) => error.reason(),
            Self::Success(success) => success.reason(),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        self.reason().message()
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        self.reason().metadata()
    }

    #[inline]
    pub fn created_at(&self) -> SystemTime {
        self.reason().created_at()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[inline]
    pub fn as_error(&self) -> Option<&Error> {
        match self {
            Self::Error(error) => Some(error),
            Self::Reason(_) | Self::Success(_) => None,
        }
    }

    #[inline]
    pub fn as_success(&self) -> Option<&Success> {
        match self {
            Self::Success(success) => Some(success),
            Self::Reason(_) | Self::Error(_) => None,
        }
    }

    /// The signal carried by an exceptional error, if this is one.
    #[inline]
    pub fn boundary_signal(&self) -> Option<&OperationFailed> {
        match self {
            Self::Error(error) => error.signal(),
            Self::Reason(_) | Self::Success(_) => None,
        }
    }
}

impl Display for Annotation {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<Reason> for Annotation {
    #[inline]
    fn from(reason: Reason) -> Self {
        Self::Reason(reason)
    }
}

impl From<Error> for Annotation {
    #[inline]
    fn from(error: Error) -> Self {
        Self::Error(error)
    }
}

impl From<Success> for Annotation {
    #[inline]
    fn from(success: Success) -> Self {
        Self::Success(success)
    }
}
