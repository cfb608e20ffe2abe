//! Tower integration for trace-rail.
//!
//! A tower `Service` reports failure through its `Error` type only, which
//! makes every service boundary a place where a failed [`Traced`] must
//! travel as a signal. Two layers cover both directions:
//!
//! - [`RequireSuccessLayer`] raises a failed response as an
//!   [`OperationFailed`](crate::OperationFailed) inside the service error.
//! - [`CaptureLayer`] turns the service's call outcome back into a
//!   [`Traced`] response, keeping signals unwrappable.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! trace-rail = { version = "0.1", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use trace_rail::tower::{CaptureLayer, RequireSuccessLayer};
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(CaptureLayer::new())
//!     .layer(RequireSuccessLayer::new())
//!     .service(inventory_service);
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::traits::{ResultBase, TraceabilityExt};
use crate::types::{BoxError, Traced};

/// A Tower [`Layer`] that raises failed responses as service errors.
///
/// Responses must implement [`ResultBase`]. A failed response becomes
/// `Err(BoxError)` holding an [`OperationFailed`](crate::OperationFailed);
/// successful responses and inner errors pass through.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequireSuccessLayer;

impl RequireSuccessLayer {
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for RequireSuccessLayer {
    type Service = RequireSuccessService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        RequireSuccessService { inner }
    }
}

/// A Tower [`Service`] created by [`RequireSuccessLayer`].
#[derive(Clone, Debug)]
pub struct RequireSuccessService<S> {
    inner: S,
}

impl<S> RequireSuccessService<S> {
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, Request> Service<Request> for RequireSuccessService<S>
where
    S: Service<Request>,
    S::Response: ResultBase,
    S::Error: Into<BoxError>,
{
    type Response = S::Response;
    type Error = BoxError;
    type Future = RequireSuccessResponseFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        RequireSuccessResponseFuture { inner: self.inner.call(request), done: false }
    }
}

pin_project! {
    /// Future returned by [`RequireSuccessService`].
    #[must_use = "futures do nothing unless polled"]
    pub struct RequireSuccessResponseFuture<F> {
        #[pin]
        inner: F,
        done: bool,
    }
}

impl<F, R, E> Future for RequireSuccessResponseFuture<F>
where
    F: Future<Output = Result<R, E>>,
    R: ResultBase,
    E: Into<BoxError>,
{
    type Output = Result<R, BoxError>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Ok(response)) => {
                *this.done = true;
                Poll::Ready(
                    response.require_success().map_err(|signal| Box::new(signal) as BoxError),
                )
            },
            Poll::Ready(Err(error)) => {
                *this.done = true;
                Poll::Ready(Err(error.into()))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, R, E> FusedFuture for RequireSuccessResponseFuture<F>
where
    F: FusedFuture<Output = Result<R, E>>,
    R: ResultBase,
    E: Into<BoxError>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.done || self.inner.is_terminated()
    }
}

/// A Tower [`Layer`] that captures service errors into [`Traced`] responses.
///
/// The wrapped service's call outcome becomes an `Ok(Traced<Response>)`,
/// following the same rules as
/// [`Traced::try_with`]: signals stay signals and are expanded by
/// [`unwrap_reasons`](TraceabilityExt::unwrap_reasons).
#[derive(Clone, Copy, Debug, Default)]
pub struct CaptureLayer;

impl CaptureLayer {
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for CaptureLayer {
    type Service = CaptureService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        CaptureService { inner }
    }
}

/// A Tower [`Service`] created by [`CaptureLayer`].
#[derive(Clone, Debug)]
pub struct CaptureService<S> {
    inner: S,
}

impl<S> CaptureService<S> {
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, Request> Service<Request> for CaptureService<S>
where
    S: Service<Request>,
    S::Error: Into<BoxError>,
{
    type Response = Traced<S::Response>;
    type Error = BoxError;
    type Future = CaptureFuture<S::Future>;

    /// Readiness failures have no response to live in and stay service errors.
    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        CaptureFuture { inner: self.inner.call(request) }
    }
}

pin_project! {
    /// Future returned by [`CaptureService`].
    #[must_use = "futures do nothing unless polled"]
    pub struct CaptureFuture<F> {
        #[pin]
        inner: F,
    }
}

impl<F, T, E> Future for CaptureFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    type Output = Result<Traced<T>, BoxError>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(cx).map(|result| Ok(Traced::from(result)))
    }
}

impl<F, T, E> FusedFuture for CaptureFuture<F>
where
    F: FusedFuture<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.inner.is_terminated()
    }
}

/// Extension trait for wrapping services at a trace boundary.
pub trait TracedServiceExt<Request>: Service<Request> + Sized {
    /// Raises failed responses as [`OperationFailed`](crate::OperationFailed) errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use trace_rail::tower::TracedServiceExt;
    ///
    /// let strict = inventory_service.require_success();
    /// ```
    fn require_success(self) -> RequireSuccessService<Self> {
        RequireSuccessService::new(self)
    }

    /// Captures call errors into [`Traced`] responses.
    fn capture(self) -> CaptureService<Self> {
        CaptureService::new(self)
    }
}

impl<S, Request> TracedServiceExt<Request> for S where S: Service<Request> {}
