//! Extension trait for futures producing a [`ResultBase`].
//!
//! Provides `.require_success()` for futures, mirroring the sync
//! [`TraceabilityExt::require_success`](crate::traits::TraceabilityExt::require_success).

use core::future::Future;

use crate::traits::ResultBase;

use super::require_future::RequireSuccessFuture;

/// Extension trait for futures that resolve to a traced result.
///
/// # Examples
///
/// ```rust
/// use trace_rail::prelude_async::*;
///
/// async fn fetch_quota(user: u64) -> Traced<u32> {
///     if user == 0 {
///         Traced::fail("anonymous users have no quota")
///     } else {
///         Traced::ok(100)
///     }
/// }
///
/// async fn quota_or_signal(user: u64) -> Result<u32, OperationFailed> {
///     let quota = fetch_quota(user).require_success().await?;
///     Ok(quota.into_value().unwrap_or_default())
/// }
/// ```
pub trait FutureTracedExt<R>: Future<Output = R> + Sized
where
    R: ResultBase,
{
    /// Awaits the result, then raises it as an
    /// [`OperationFailed`](crate::OperationFailed) if it failed.
    fn require_success(self) -> RequireSuccessFuture<Self>;
}

impl<Fut, R> FutureTracedExt<R> for Fut
where
    Fut: Future<Output = R>,
    R: ResultBase,
{
    #[inline]
    fn require_success(self) -> RequireSuccessFuture<Self> {
        RequireSuccessFuture::new(self)
    }
}
