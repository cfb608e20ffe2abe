//! Composition helpers for any [`ResultBase`].
//!
//! [`TraceabilityExt`] adds conditional attachment, the
//! [`require_success`](TraceabilityExt::require_success) boundary guard and
//! causal-chain unwrapping to every result type.
//!
//! # Examples
//!
//! ```
//! use trace_rail::{Error, OperationFailed, Reason, Traced, TraceabilityExt};
//!
//! fn load() -> Result<u32, OperationFailed> {
//!     let port: Traced<u32> = Traced::fail(Error::new("config missing"))
//!         .add_reason_if_failed([Reason::new("looked in /etc/app")])
//!         .require_success()?;
//!     Ok(port.into_value().unwrap_or(8080))
//! }
//!
//! // The far side only sees an error value; capture it back.
//! let captured: Traced<u32> = Traced::try_with(load);
//!
//! let chain: Vec<String> = captured.unwrap_reasons().iter().map(|r| r.to_string()).collect();
//! assert_eq!(chain, ["config missing", "looked in /etc/app"]);
//! ```

use crate::traits::ResultBase;
use crate::types::chain_formatter::ChainFormatter;
use crate::types::{Annotation, Error, OperationFailed, Success};
use crate::unwrap;

/// Extension trait implemented for every [`ResultBase`].
///
/// Mutating helpers take the result by value and hand the same result back,
/// so they chain like builders. None of them touch a result on the branch
/// they do not apply to.
pub trait TraceabilityExt: ResultBase + Sized {
    /// Raises a failed result as an [`OperationFailed`] signal.
    ///
    /// This is the only place the crate turns a result into an error value;
    /// use `?` on the returned `Result` to cross the boundary. A successful
    /// result comes back unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use trace_rail::{Traced, TraceabilityExt};
    ///
    /// let ok = Traced::ok(5).require_success().unwrap();
    /// assert_eq!(ok.value(), Some(&5));
    ///
    /// let signal = Traced::<u8>::fail("nope").require_success().unwrap_err();
    /// assert!(signal.message().contains("nope"));
    /// ```
    fn require_success(self) -> Result<Self, OperationFailed>;

    /// Appends `successes` when the result is successful.
    fn add_success_if_passed<I>(self, successes: I) -> Self
    where
        I: IntoIterator<Item = Success>;

    /// Hands `successes` to `handler` when the result is successful.
    ///
    /// The handler is not called on a failed result.
    fn add_success_if_passed_with<I, F>(self, handler: F, successes: I) -> Self
    where
        I: IntoIterator<Item = Success>,
        F: FnOnce(&mut Self, Vec<Success>);

    /// Appends `reasons` when the result is failed.
    fn add_reason_if_failed<I>(self, reasons: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Annotation>;

    /// Hands `reasons` to `handler` when the result is failed.
    ///
    /// The handler is not called on a successful result.
    fn add_reason_if_failed_with<I, F>(self, handler: F, reasons: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Annotation>,
        F: FnOnce(&mut Self, Vec<Annotation>);

    /// Appends `errors` directly when the result is failed.
    fn add_error_if_failed<I>(self, errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Error>;

    /// Returns the flattened causal chain.
    ///
    /// Every annotation carrying an [`OperationFailed`] is replaced in place
    /// by the (recursively flattened) reasons of the result it wrapped.
    fn unwrap_reasons(&self) -> Vec<Annotation>;

    /// Appends the flattened causal chain to `reasons`, or to a fresh list
    /// when `None`, and returns the list.
    fn unwrap_reasons_into(&self, reasons: Option<Vec<Annotation>>) -> Vec<Annotation>;

    /// Returns the non-error annotations of the flattened chain.
    fn get_non_errors(&self) -> Vec<Annotation>;

    /// Appends the non-error annotations of the flattened chain to
    /// `reasons`, or to a fresh list when `None`, and returns the list.
    fn get_non_errors_into(&self, reasons: Option<Vec<Annotation>>) -> Vec<Annotation>;

    /// The errors of the flattened chain: what went wrong.
    fn unwrapped_errors(&self) -> Vec<Error>;

    /// The successes of the flattened chain: what went right.
    fn unwrapped_successes(&self) -> Vec<Success>;

    /// Renders the flattened chain with `formatter`.
    fn causal_chain<F: ChainFormatter>(&self, formatter: &F) -> String;
}

impl<R: ResultBase> TraceabilityExt for R {
    #[inline]
    fn require_success(self) -> Result<Self, OperationFailed> {
        if self.is_failed() {
            trace_event!(debug, errors = self.errors().count(), "raising OperationFailed");
            return Err(OperationFailed::new(self));
        }
        Ok(self)
    }

    #[inline]
    fn add_success_if_passed<I>(self, successes: I) -> Self
    where
        I: IntoIterator<Item = Success>,
    {
        self.add_success_if_passed_with(
            |result, successes| {
                result.reasons_mut().extend(successes.into_iter().map(Annotation::Success))
            },
            successes,
        )
    }

    fn add_success_if_passed_with<I, F>(mut self, handler: F, successes: I) -> Self
    where
        I: IntoIterator<Item = Success>,
        F: FnOnce(&mut Self, Vec<Success>),
    {
        if self.is_success() {
            handler(&mut self, successes.into_iter().collect());
        }
        self
    }

    #[inline]
    fn add_reason_if_failed<I>(self, reasons: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Annotation>,
    {
        self.add_reason_if_failed_with(
            |result, reasons| result.reasons_mut().extend(reasons),
            reasons,
        )
    }

    fn add_reason_if_failed_with<I, F>(mut self, handler: F, reasons: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Annotation>,
        F: FnOnce(&mut Self, Vec<Annotation>),
    {
        if self.is_failed() {
            handler(&mut self, reasons.into_iter().map(Into::into).collect());
        }
        self
    }

    fn add_error_if_failed<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Error>,
    {
        if self.is_failed() {
            self.reasons_mut().extend(errors.into_iter().map(|e| Annotation::Error(e.into())));
        }
        self
    }

    #[inline]
    fn unwrap_reasons(&self) -> Vec<Annotation> {
        unwrap::flatten_reasons(self.reasons())
    }

    #[inline]
    fn unwrap_reasons_into(&self, reasons: Option<Vec<Annotation>>) -> Vec<Annotation> {
        let mut reasons = reasons.unwrap_or_default();
        unwrap::flatten_reasons_into(self.reasons(), &mut reasons);
        reasons
    }

    #[inline]
    fn get_non_errors(&self) -> Vec<Annotation> {
        self.get_non_errors_into(None)
    }

    #[inline]
    fn get_non_errors_into(&self, reasons: Option<Vec<Annotation>>) -> Vec<Annotation> {
        let mut reasons = reasons.unwrap_or_default();
        unwrap::non_errors_into(self.reasons(), &mut reasons);
        reasons
    }

    fn unwrapped_errors(&self) -> Vec<Error> {
        self.unwrap_reasons()
            .into_iter()
            .filter_map(|r| match r {
                Annotation::Error(error) => Some(error),
                Annotation::Reason(_) | Annotation::Success(_) => None,
            })
            .collect()
    }

    fn unwrapped_successes(&self) -> Vec<Success> {
        self.unwrap_reasons()
            .into_iter()
            .filter_map(|r| match r {
                Annotation::Success(success) => Some(success),
                Annotation::Reason(_) | Annotation::Error(_) => None,
            })
            .collect()
    }

    fn causal_chain<F: ChainFormatter>(&self, formatter: &F) -> String {
        formatter.format_chain(self.unwrap_reasons().iter())
    }
}
