//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus
//! [`FutureTracedExt`](crate::async_ext::FutureTracedExt) and
//! [`RequireSuccessFuture`](crate::async_ext::RequireSuccessFuture).
//!
//! # Usage
//!
//! ```ignore
//! use trace_rail::prelude_async::*;
//!
//! async fn handler(id: u64) -> Result<Traced<User>, OperationFailed> {
//!     load_user(id).require_success().await
//! }
//! ```

// Re-export everything from sync prelude
pub use crate::prelude::*;

// Async-specific exports
pub use crate::async_ext::{FutureTracedExt, RequireSuccessFuture};
