//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use trace_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`metadata!`]
//! - **Types**: [`Traced`], [`Reason`], [`Error`], [`Success`], [`Annotation`],
//!   [`Metadata`], [`OperationFailed`], [`Exception`]
//! - **Traits**: [`ResultBase`], [`TraceabilityExt`], [`Dispose`], [`DisposeAll`]
//!
//! # Examples
//!
//! ```
//! use trace_rail::prelude::*;
//!
//! fn reserve(seats: u32) -> Traced<u32> {
//!     if seats > 4 {
//!         Traced::fail(Error::new("party too large").meta("seats", seats))
//!     } else {
//!         Traced::ok(seats).with_success(Success::new("table held"))
//!     }
//! }
//!
//! assert!(reserve(2).is_success());
//! assert_eq!(reserve(9).unwrapped_errors().len(), 1);
//! ```

// Macros
pub use crate::metadata;

// Core types
pub use crate::types::{
    Annotation, BoxError, Error, Exception, Metadata, MetadataValue, OperationFailed, Reason,
    Success, Traced,
};

// Traits
pub use crate::traits::{dispose_all, Dispose, DisposeAll, ResultBase, TraceabilityExt};
