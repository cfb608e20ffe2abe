//! Tracing integration for trace-rail.
//!
//! Captures the active `tracing` span as a [`Reason`] so a causal chain
//! records where each step ran.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! trace-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::traits::ResultBase;
use crate::types::{Annotation, Reason};

/// Extension trait attaching span information to a result.
///
/// # Example
///
/// ```rust,ignore
/// use trace_rail::tracing_ext::TracedSpanExt;
///
/// let _guard = tracing::info_span!("charge_card").entered();
/// let result = charge(order).with_current_span();
/// // result.reasons() now ends with "in span 'charge_card'"
/// ```
pub trait TracedSpanExt: ResultBase + Sized {
    /// Attaches the current span as a reason.
    fn with_current_span(self) -> Self {
        self.with_span(&Span::current())
    }

    /// Attaches `span` as a reason.
    fn with_span(mut self, span: &Span) -> Self {
        self.reasons_mut().push(Annotation::Reason(span_to_reason(span)));
        self
    }
}

impl<R: ResultBase> TracedSpanExt for R {}

/// Converts a tracing span to a reason.
///
/// A disabled span reports its name as `unknown`.
pub fn span_to_reason(span: &Span) -> Reason {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    Reason::new(format!("in span '{}'", name)).meta("span", name)
}
