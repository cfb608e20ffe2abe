//! Core traits for traced results.
//!
//! - [`ResultBase`]: the contract a result type fulfils (reasons, status,
//!   type recovery)
//! - [`TraceabilityExt`]: conditional attachment, the boundary guard and
//!   causal-chain unwrapping for every `ResultBase`
//! - [`Dispose`]: fallible resource release, aggregated by [`dispose_all`]
//!
//! # Examples
//!
//! ```
//! use trace_rail::traits::TraceabilityExt;
//! use trace_rail::{Reason, Traced};
//!
//! let result = Traced::<()>::fail("timeout")
//!     .add_reason_if_failed([Reason::new("upstream: billing")]);
//!
//! assert_eq!(result.reasons().len(), 2);
//! assert_eq!(result.get_non_errors().len(), 1);
//! ```

pub mod dispose;
pub mod result_base;
pub mod traceability_ext;

pub use dispose::{dispose_all, Dispose, DisposeAll};
pub use result_base::ResultBase;
pub use traceability_ext::TraceabilityExt;
