//! Tests for FutureTracedExt.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use trace_rail::prelude_async::*;

async fn fetch_quota(user: u64) -> Traced<u32> {
    if user == 0 {
        Traced::fail(Error::new("anonymous users have no quota").meta("user", user))
    } else {
        Traced::ok(100).with_success(Success::new("quota loaded"))
    }
}

#[test]
fn require_success_future_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<RequireSuccessFuture<std::future::Ready<Traced<u32>>>>();
    assert_sync::<RequireSuccessFuture<std::future::Ready<Traced<u32>>>>();
}

#[tokio::test]
async fn passes_successful_results_through() {
    let quota = fetch_quota(7).require_success().await.unwrap();

    assert_eq!(quota.value(), Some(&100));
    assert_eq!(quota.successes().count(), 1);
}

#[tokio::test]
async fn raises_failed_results_as_signals() {
    let signal = fetch_quota(0).require_success().await.unwrap_err();
    let failed = signal.downcast_ref::<Traced<u32>>().unwrap();

    assert!(failed.is_failed());
    assert_eq!(failed.errors().next().map(Error::message), Some("anonymous users have no quota"));
}

#[tokio::test]
async fn signal_crosses_a_spawned_task() {
    let handle = tokio::spawn(async {
        let _quota = fetch_quota(0).require_success().await?;
        Ok::<_, BoxError>(())
    });

    let joined = handle.await.unwrap();
    let captured = Traced::from(joined);

    let chain: Vec<String> = captured.unwrap_reasons().iter().map(|r| r.to_string()).collect();
    assert_eq!(chain, ["anonymous users have no quota"]);
}

struct CountingFuture {
    polls: u32,
}

impl Future for CountingFuture {
    type Output = Traced<u32>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.polls += 1;
        if self.polls < 3 {
            cx.waker().wake_by_ref();
            Poll::Pending
        } else {
            Poll::Ready(Traced::ok(self.polls))
        }
    }
}

#[tokio::test]
async fn waits_for_pending_inner_future() {
    let result = CountingFuture { polls: 0 }.require_success().await.unwrap();

    assert_eq!(result.into_value(), Some(3));
}
