//! Provenance entities and the traced result.
//!
//! This module provides the values that make up a causal chain:
//!
//! - [`Reason`], [`Error`] and [`Success`], unified by [`Annotation`]
//! - [`Metadata`] attached to each of them
//! - [`Exception`] and the boundary signal [`OperationFailed`]
//! - [`Traced`], the result type they are attached to
//!
//! # Examples
//!
//! ```
//! use trace_rail::{Error, Reason, Traced};
//!
//! let result: Traced<()> = Traced::fail(Error::new("payment rejected"))
//!     .with_reason(Reason::new("gateway answered 402").meta("gateway", "acme"));
//!
//! assert!(result.is_failed());
//! assert_eq!(result.to_string(), "failure: payment rejected; gateway answered 402");
//! ```
use smallvec::SmallVec;

pub mod annotation;
pub mod chain_formatter;
pub mod error;
pub mod exception;
pub mod metadata;
pub mod reason;
pub mod signal;
pub mod success;
pub mod traced;

pub use annotation::*;
pub use error::*;
pub use exception::*;
pub use metadata::*;
pub use reason::*;
pub use signal::*;
pub use success::*;
pub use traced::*;

/// SmallVec-backed collection used for small, usually short lists.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// in the common case of one or two metadata entries.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Boxed error value exchanged at boundaries.
///
/// Same shape as tower's `BoxError`, so signals move through service errors
/// without conversion.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
