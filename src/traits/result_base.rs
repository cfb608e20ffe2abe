//! The contract a result type fulfils to take part in tracing.
//!
//! [`ResultBase`] is object safe: [`OperationFailed`](crate::OperationFailed)
//! stores results of any payload type behind `dyn ResultBase`, and the
//! unwrap algorithm walks them without knowing their concrete type.

use core::any::Any;
use core::fmt::{Debug, Display};
use core::iter::FilterMap;
use core::slice;
use std::sync::Arc;

use crate::types::{Annotation, Error, Success};

/// Iterator over the errors attached to a result.
pub type Errors<'a> =
    FilterMap<slice::Iter<'a, Annotation>, fn(&'a Annotation) -> Option<&'a Error>>;

/// Iterator over the successes attached to a result.
pub type Successes<'a> =
    FilterMap<slice::Iter<'a, Annotation>, fn(&'a Annotation) -> Option<&'a Success>>;

/// A success/failure value annotated with an ordered list of reasons.
///
/// Status is derived from the annotations: a result is failed as soon as one
/// [`Annotation::Error`] is attached. Implementors only provide storage and
/// type recovery; every other method has a default.
///
/// `Display` must render the result's status and reasons; it becomes the
/// message of any signal built from the result.
///
/// # Examples
///
/// ```
/// use trace_rail::{Error, ResultBase, Traced};
///
/// fn describe(result: &dyn ResultBase) -> String {
///     format!("{} ({} reasons)", result.is_success(), result.reasons().len())
/// }
///
/// let failed: Traced<()> = Traced::fail(Error::new("boom"));
/// assert_eq!(describe(&failed), "false (1 reasons)");
/// ```
pub trait ResultBase: Display + Debug + Send + Sync + 'static {
    /// Reasons in attachment order.
    fn reasons(&self) -> &[Annotation];

    /// Mutable access used by the attachment helpers.
    fn reasons_mut(&mut self) -> &mut Vec<Annotation>;

    /// Borrowed view used to recover the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Shared view used to recover the concrete type by value.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;

    /// `true` when at least one error is attached.
    #[inline]
    fn is_failed(&self) -> bool {
        self.reasons().iter().any(Annotation::is_error)
    }

    #[inline]
    fn is_success(&self) -> bool {
        !self.is_failed()
    }

    /// Attached errors, in attachment order.
    #[inline]
    fn errors(&self) -> Errors<'_> {
        self.reasons().iter().filter_map(Annotation::as_error as fn(&Annotation) -> Option<&Error>)
    }

    /// Attached successes, in attachment order.
    #[inline]
    fn successes(&self) -> Successes<'_> {
        self.reasons()
            .iter()
            .filter_map(Annotation::as_success as fn(&Annotation) -> Option<&Success>)
    }
}
