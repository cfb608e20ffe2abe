//! Future wrapper for the asynchronous boundary guard.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::traits::{ResultBase, TraceabilityExt};
use crate::types::OperationFailed;

pin_project! {
    /// A Future that awaits a result producer, then applies
    /// [`require_success`](TraceabilityExt::require_success).
    ///
    /// # Cancel Safety
    ///
    /// `RequireSuccessFuture` is cancel-safe if the inner future is
    /// cancel-safe. The check runs once, when the inner future is ready.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trace_rail::prelude_async::*;
    ///
    /// async fn example() -> Result<Traced<u32>, OperationFailed> {
    ///     async { Traced::ok(1) }.require_success().await
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct RequireSuccessFuture<Fut> {
        #[pin]
        future: Fut,
        done: bool,
    }
}

impl<Fut> RequireSuccessFuture<Fut> {
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future, done: false }
    }
}

impl<Fut, R> Future for RequireSuccessFuture<Fut>
where
    Fut: Future<Output = R>,
    R: ResultBase,
{
    type Output = Result<R, OperationFailed>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|result| {
            *this.done = true;
            result.require_success()
        })
    }
}

impl<Fut, R> FusedFuture for RequireSuccessFuture<Fut>
where
    Fut: FusedFuture<Output = R>,
    R: ResultBase,
{
    fn is_terminated(&self) -> bool {
        self.done || self.future.is_terminated()
    }
}
