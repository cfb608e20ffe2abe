//! A minimal annotated result.
//!
//! [`Traced<T>`] is the crate's implementation of [`ResultBase`]: a payload
//! plus an ordered list of [`Annotation`]s. It deliberately stops at
//! construction, annotation and access; composition lives in
//! [`TraceabilityExt`](crate::TraceabilityExt).

use core::any::Any;
use core::fmt::{self, Debug, Display};
use std::sync::Arc;

use crate::traits::result_base::{Errors, Successes};
use crate::traits::ResultBase;
use crate::types::chain_formatter::{ChainFormatConfig, ChainFormatter};
use crate::types::{Annotation, BoxError, Error, Success};

/// A success/failure value with provenance.
///
/// The result is failed as soon as one [`Error`] is attached, whatever the
/// payload. The payload is only reachable while the result is successful.
///
/// # Examples
///
/// ```
/// use trace_rail::{Reason, Success, Traced};
///
/// let loaded = Traced::ok(3)
///     .with_reason(Reason::new("served from cache"))
///     .with_success(Success::new("cache hit"));
/// assert_eq!(loaded.value(), Some(&3));
///
/// let failed = loaded.with_error("stale entry");
/// assert!(failed.is_failed());
/// assert_eq!(failed.value(), None);
/// ```
#[must_use]
#[derive(Clone, PartialEq)]
pub struct Traced<T = ()> {
    value: Option<T>,
    reasons: Vec<Annotation>,
}

impl<T> Traced<T> {
    /// A successful result carrying `value`.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self { value: Some(value), reasons: Vec::new() }
    }

    /// A failed result with a single error.
    #[inline]
    pub fn fail<E: Into<Error>>(error: E) -> Self {
        Self { value: None, reasons: vec![Annotation::Error(error.into())] }
    }

    /// A failed result with several errors, in order.
    ///
    /// An empty iterator yields a payload-less result that still reports
    /// success; use [`fail`](Self::fail) when at least one cause is known.
    #[inline]
    pub fn fail_with<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Error>,
    {
        Self {
            value: None,
            reasons: errors.into_iter().map(|e| Annotation::Error(e.into())).collect(),
        }
    }

    /// Runs `f` and captures its error, if any.
    ///
    /// An `Err` becomes a failure carrying one exceptional [`Error`]. An
    /// [`OperationFailed`](crate::OperationFailed) signal is kept as such, so
    /// [`unwrap_reasons`](crate::TraceabilityExt::unwrap_reasons) can expand it.
    ///
    /// # Examples
    ///
    /// ```
    /// use trace_rail::Traced;
    ///
    /// let parsed = Traced::try_with(|| "42".parse::<u8>());
    /// assert_eq!(parsed.value(), Some(&42));
    ///
    /// let broken = Traced::try_with(|| "x".parse::<u8>());
    /// assert!(broken.is_failed());
    /// ```
    pub fn try_with<F, E>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        f().into()
    }

    /// Attaches any annotation.
    #[inline]
    pub fn with_reason<A: Into<Annotation>>(mut self, reason: A) -> Self {
        self.reasons.push(reason.into());
        self
    }

    #[inline]
    pub fn with_reasons<I>(mut self, reasons: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Annotation>,
    {
        self.reasons.extend(reasons.into_iter().map(Into::into));
        self
    }

    /// Attaches an error, making the result failed.
    #[inline]
    pub fn with_error<E: Into<Error>>(mut self, error: E) -> Self {
        self.reasons.push(Annotation::Error(error.into()));
        self
    }

    #[inline]
    pub fn with_errors<I>(mut self, errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Error>,
    {
        self.reasons.extend(errors.into_iter().map(|e| Annotation::Error(e.into())));
        self
    }

    #[inline]
    pub fn with_success<S: Into<Success>>(mut self, success: S) -> Self {
        self.reasons.push(Annotation::Success(success.into()));
        self
    }

    #[inline]
    pub fn with_successes<I>(mut self, successes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Success>,
    {
        self.reasons.extend(successes.into_iter().map(|s| Annotation::Success(s.into())));
        self
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        self.reasons.iter().any(Annotation::is_error)
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        !self.is_failed()
    }

    /// Reasons in attachment order.
    #[inline]
    pub fn reasons(&self) -> &[Annotation] {
        &self.reasons
    }

    #[inline]
    pub fn errors(&self) -> Errors<'_> {
        self.reasons.iter().filter_map(Annotation::as_error as fn(&Annotation) -> Option<&Error>)
    }

    #[inline]
    pub fn successes(&self) -> Successes<'_> {
        self.reasons
            .iter()
            .filter_map(Annotation::as_success as fn(&Annotation) -> Option<&Success>)
    }

    /// The payload, when successful.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        if self.is_failed() {
            return None;
        }
        self.value.as_ref()
    }

    /// Consumes the result, returning the payload when successful.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        if self.is_failed() {
            return None;
        }
        self.value
    }

    /// Bridges to a standard `Result`, keeping only the errors on failure.
    ///
    /// A payload-less successful result (built by [`fail_with`](Self::fail_with)
    /// with no errors) maps to `Err` with an empty list.
    pub fn into_result(self) -> Result<T, Vec<Error>> {
        let failed = self.is_failed();
        let Self { value, reasons } = self;
        match value {
            Some(value) if !failed => Ok(value),
            _ => Err(reasons
                .into_iter()
                .filter_map(|r| match r {
                    Annotation::Error(e) => Some(e),
                    Annotation::Reason(_) | Annotation::Success(_) => None,
                })
                .collect()),
        }
    }

    /// Renders status and reasons with a custom formatter.
    pub fn format_with<F: ChainFormatter>(&self, formatter: &F) -> String {
        format!("{}: {}", self.status(), formatter.format_chain(self.reasons.iter()))
    }

    #[inline]
    fn status(&self) -> &'static str {
        if self.is_failed() {
            "failure"
        } else {
            "success"
        }
    }
}

impl<T, E> From<Result<T, E>> for Traced<T>
where
    E: Into<BoxError>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::fail(Error::exceptional(error)),
        }
    }
}

impl<T> ResultBase for Traced<T>
where
    T: Debug + Send + Sync + 'static,
{
    #[inline]
    fn reasons(&self) -> &[Annotation] {
        &self.reasons
    }

    #[inline]
    fn reasons_mut(&mut self) -> &mut Vec<Annotation> {
        &mut self.reasons
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

impl<T: Debug> Debug for Traced<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traced")
            .field("success", &self.is_success())
            .field("value", &self.value)
            .field("reasons", &self.reasons)
            .finish()
    }
}

/// Renders `success` or `failure`, then the reason chain.
///
/// The alternate form (`{:#}`) uses [`ChainFormatConfig::pretty`].
impl<T> Display for Traced<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reasons.is_empty() {
            return f.write_str(self.status());
        }
        let config = if f.alternate() {
            ChainFormatConfig::pretty()
        } else {
            ChainFormatConfig::default()
        };
        if config.multiline {
            write!(f, "{}:\n{}", self.status(), config.format_chain(self.reasons.iter()))
        } else {
            f.write_str(&self.format_with(&config))
        }
    }
}
