//! Traceable results: reasons, successes and nested errors that survive
//! error-only API boundaries.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `trace_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Annotating a result
//!
//! ```
//! use trace_rail::{Reason, Success, Traced, TraceabilityExt};
//!
//! let result = Traced::ok(42)
//!     .add_success_if_passed([Success::new("cache warmed")])
//!     .add_reason_if_failed([Reason::new("never attached")]);
//!
//! assert!(result.is_success());
//! assert_eq!(result.reasons().len(), 1);
//! ```
//!
//! ## Crossing a boundary and unwrapping
//!
//! ```
//! use trace_rail::{BoxError, Reason, Traced, TraceabilityExt};
//!
//! // A callback API that can only report `Box<dyn Error>`.
//! fn run_job(job: impl FnOnce() -> Result<(), BoxError>) -> Result<(), BoxError> {
//!     job()
//! }
//!
//! let outcome: Traced<()> = Traced::try_with(|| {
//!     run_job(|| {
//!         let _checked = Traced::<()>::fail("index corrupted")
//!             .with_reason(Reason::new("segment 7"))
//!             .require_success()?;
//!         Ok(())
//!     })
//! });
//!
//! let chain: Vec<String> = outcome.unwrap_reasons().iter().map(|r| r.to_string()).collect();
//! assert_eq!(chain, ["index corrupted", "segment 7"]);
//! ```
//!
//! ## Releasing resources
//!
//! ```
//! use trace_rail::traits::{Dispose, DisposeAll};
//!
//! struct Lease(bool);
//!
//! impl Dispose for Lease {
//!     type Error = &'static str;
//!
//!     fn dispose(&mut self) -> Result<(), Self::Error> {
//!         if self.0 { Err("lease already revoked") } else { Ok(()) }
//!     }
//! }
//!
//! let mut leases = [Lease(false), Lease(true), Lease(false)];
//! let released = leases.dispose_all();
//!
//! assert!(released.is_failed());
//! assert_eq!(released.errors().count(), 1);
//! ```

#[macro_use]
mod macros;

/// Reason, error, success, signal and traced result types
pub mod types;
/// Core traits: the result contract, composition helpers and disposal
pub mod traits;
/// Flattening of signal-wrapped reason chains
pub mod unwrap;
/// Convenience re-exports for quick starts
pub mod prelude;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::chain_formatter::{ChainFormatConfig, ChainFormatter};
pub use types::{
    Annotation, BoxError, Error, ErrorVec, Exception, Metadata, MetadataValue, OperationFailed,
    Reason, Success, Traced,
};
