//! The boundary signal.
//!
//! [`OperationFailed`] moves a whole failed result through an API boundary
//! that only propagates error values: a `Box<dyn Error>`, a tower service
//! error, a foreign callback returning `Result<_, E>`. The receiving side
//! captures it back with [`Traced::try_with`](crate::Traced::try_with) and
//! [`unwrap_reasons`](crate::TraceabilityExt::unwrap_reasons) expands it in
//! place.

use core::fmt::{self, Debug, Display};
use std::sync::Arc;

use crate::traits::ResultBase;

/// A failed result travelling as an error value.
///
/// The wrapped result is shared and never mutated once the signal exists.
/// Its display text becomes the signal's message.
///
/// # Examples
///
/// ```
/// use trace_rail::{OperationFailed, Traced};
///
/// let failed: Traced<u32> = Traced::fail("quota exceeded");
/// let signal = OperationFailed::new(failed.clone());
///
/// assert!(signal.message().contains("quota exceeded"));
/// assert_eq!(signal.downcast_ref::<Traced<u32>>(), Some(&failed));
/// ```
#[derive(Clone)]
pub struct OperationFailed {
    result: Arc<dyn ResultBase>,
    message: String,
}

impl OperationFailed {
    /// Wraps `result`, rendering its display text as the signal message.
    pub fn new<R: ResultBase>(result: R) -> Self {
        let message = result.to_string();
        Self { result: Arc::new(result), message }
    }

    /// The wrapped result, type-erased.
    #[inline]
    pub fn result(&self) -> &dyn ResultBase {
        &*self.result
    }

    /// The wrapped result as its concrete type.
    #[inline]
    pub fn downcast_ref<R: ResultBase>(&self) -> Option<&R> {
        self.result.as_any().downcast_ref::<R>()
    }

    /// Recovers the wrapped result by value.
    ///
    /// Returns the signal unchanged when `R` is not the wrapped type. Clones
    /// the result only when other clones of this signal are still alive.
    pub fn into_result<R: ResultBase + Clone>(self) -> Result<R, Self> {
        match Arc::clone(&self.result).into_any().downcast::<R>() {
            Ok(typed) => {
                drop(self);
                Ok(Arc::unwrap_or_clone(typed))
            },
            Err(_) => Err(self),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Debug for OperationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationFailed")
            .field("message", &self.message)
            .field("result", &self.result)
            .finish()
    }
}

impl Display for OperationFailed {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for OperationFailed {}

/// Identity comparison on the shared result.
impl PartialEq for OperationFailed {
    fn eq(&self, other: &Self) -> bool {
        Arc::as_ptr(&self.result) as *const () == Arc::as_ptr(&other.result) as *const ()
    }
}
