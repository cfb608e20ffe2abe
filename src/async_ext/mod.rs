//! Async extensions for trace-rail.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! trace-rail = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use trace_rail::prelude_async::*;
//!
//! async fn handler(id: u64) -> Result<Traced<User>, OperationFailed> {
//!     load_user(id).require_success().await
//! }
//! ```

mod future_ext;
mod require_future;

pub use future_ext::FutureTracedExt;
pub use require_future::RequireSuccessFuture;
