//! Flattening of signal-wrapped reason chains.
//!
//! A result captured on the far side of a boundary holds an exceptional
//! error whose exception is an [`OperationFailed`](crate::OperationFailed).
//! The functions here expand every such signal in place, depth-first, into
//! the reasons of the result it wrapped.
//!
//! # Examples
//!
//! ```
//! use trace_rail::unwrap::flatten_reasons;
//! use trace_rail::{OperationFailed, Reason, Traced};
//!
//! let inner: Traced<()> = Traced::fail("disk full").with_reason(Reason::new("volume /data"));
//! let outer: Traced<()> = Traced::fail(OperationFailed::new(inner));
//!
//! let flat = flatten_reasons(outer.reasons());
//! let messages: Vec<&str> = flat.iter().map(|r| r.message()).collect();
//! assert_eq!(messages, ["disk full", "volume /data"]);
//! ```

use smallvec::SmallVec;

use crate::types::Annotation;

/// Flattens `reasons` into a new list.
#[inline]
pub fn flatten_reasons(reasons: &[Annotation]) -> Vec<Annotation> {
    let mut out = Vec::with_capacity(reasons.len());
    flatten_reasons_into(reasons, &mut out);
    out
}

/// Flattens `reasons`, appending to `out`.
///
/// Order is attachment order at every level: a signal's wrapped reasons take
/// the signal's position. Signals never appear in the output. Results are
/// moved into signals and never re-wrapped into their own ancestry, so the
/// walk always terminates; an explicit stack keeps deep chains off the call
/// stack.
pub fn flatten_reasons_into(reasons: &[Annotation], out: &mut Vec<Annotation>) {
    let mut stack: SmallVec<[core::slice::Iter<'_, Annotation>; 4]> = SmallVec::new();
    stack.push(reasons.iter());

    while let Some(level) = stack.last_mut() {
        match level.next() {
            Some(reason) => match reason.boundary_signal() {
                Some(signal) => stack.push(signal.result().reasons().iter()),
                None => out.push(reason.clone()),
            },
            None => {
                stack.pop();
            },
        }
    }

    trace_event!(trace, flattened = out.len(), "flattened reason chain");
}

/// Appends the non-error annotations of the flattened chain to `out`.
pub fn non_errors_into(reasons: &[Annotation], out: &mut Vec<Annotation>) {
    let flat = flatten_reasons(reasons);
    out.extend(flat.into_iter().filter(|r| !r.is_error()));
}
