// Integration tests for the Query lifecycle: arming, settlement,
// dependency-driven re-fetch and stale-invocation suppression.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use folio::prelude::*;
use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::time::{sleep, timeout};

#[derive(Debug, Clone, PartialEq)]
struct Payload {
    id: u32,
}

fn delayed_ok(
    id: u32,
    delay_ms: u64,
) -> impl Fn() -> BoxFuture<'static, Result<Payload, ApiError>> + Send + Sync {
    move || {
        async move {
            sleep(Duration::from_millis(delay_ms)).await;
            Ok(Payload { id })
        }
        .boxed()
    }
}

/// Returns 0, 1, 2, ... across successive invocations, so tests can tell
/// which run produced the committed data.
fn counting() -> impl Fn() -> BoxFuture<'static, Result<u32, ApiError>> + Send + Sync {
    let calls = Arc::new(AtomicU32::new(0));
    move || {
        let call = calls.fetch_add(1, Ordering::SeqCst);
        async move { Ok(call) }.boxed()
    }
}

#[tokio::test]
async fn test_query_resolves_after_delay() {
    let (mut query, invocation) = Query::new(delayed_ok(1, 20), ());

    // In flight: nothing settled yet.
    assert!(query.data().is_none());
    assert!(query.loading());
    assert!(query.error().is_none());

    let settlement = timeout(Duration::from_secs(1), invocation.settle())
        .await
        .expect("operation should settle well within a second");
    query.apply(settlement);

    assert_eq!(query.data(), Some(&Payload { id: 1 }));
    assert!(!query.loading());
    assert!(query.error().is_none());
}

#[tokio::test]
async fn test_query_failure_surfaces_server_detail() {
    let (mut query, invocation) = Query::new(
        || {
            async {
                Err::<Payload, _>(ApiError::Status {
                    status: 404,
                    detail: Some("not found".to_string()),
                })
            }
            .boxed()
        },
        (),
    );

    query.apply(invocation.settle().await);

    assert!(query.data().is_none());
    assert!(!query.loading());
    assert_eq!(query.error(), Some("not found"));
}

#[tokio::test]
async fn test_settlement_leaves_exactly_one_of_data_or_error() {
    let (mut query, invocation) = Query::new(delayed_ok(3, 0), ());
    query.apply(invocation.settle().await);
    assert!(query.data().is_some() != query.error().is_some());

    let (mut query, invocation) = Query::new(
        || async { Err::<Payload, _>(ApiError::Network("down".to_string())) }.boxed(),
        (),
    );
    query.apply(invocation.settle().await);
    assert!(query.data().is_some() != query.error().is_some());
}

#[tokio::test]
async fn test_deps_change_supersedes_inflight_invocation() {
    let (mut query, first) = Query::new(counting(), 1u32);
    let second = query.set_deps(2).expect("key changed");

    // The superseded invocation settles first; it must not commit.
    query.apply(first.settle().await);
    assert!(query.loading());
    assert!(query.data().is_none());
    assert!(query.error().is_none());

    query.apply(second.settle().await);
    assert!(!query.loading());
    assert_eq!(query.data(), Some(&1), "only the second run may commit");
}

#[tokio::test]
async fn test_stale_failure_is_also_suppressed() {
    let (mut query, first) = Query::new(
        || {
            async {
                Err::<Payload, _>(ApiError::Status {
                    status: 500,
                    detail: Some("stale failure".to_string()),
                })
            }
            .boxed()
        },
        "a",
    );
    let second = query.set_deps("b").expect("key changed");

    query.apply(first.settle().await);
    assert!(query.error().is_none(), "stale failure must not commit");
    assert!(query.loading());

    drop(second);
}

#[tokio::test]
async fn test_retry_clears_state_and_supersedes() {
    let (mut query, first) = Query::new(counting(), ());
    query.apply(first.settle().await);
    assert_eq!(query.data(), Some(&0));

    let retried = query.retry();
    assert!(query.loading());
    assert!(query.data().is_none());
    assert!(query.error().is_none());

    query.apply(retried.settle().await);
    assert_eq!(query.data(), Some(&1));
}

#[tokio::test]
async fn test_retry_while_inflight_wins_over_original() {
    let (mut query, original) = Query::new(counting(), ());
    let retried = query.retry();

    query.apply(original.settle().await);
    assert!(query.loading(), "original invocation became stale on retry");

    query.apply(retried.settle().await);
    assert_eq!(query.data(), Some(&1));
    assert!(!query.loading());
}

#[tokio::test]
async fn test_settlements_delivered_over_a_channel() {
    // The usual deployment shape: the owner spawns the invocation and the
    // settlement comes back as an event on the owner's loop.
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let (mut query, invocation) = Query::new(delayed_ok(7, 10), ());
    tokio::spawn(async move {
        let _ = tx.send(invocation.settle().await);
    });

    let settlement = timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("settlement should arrive within a second")
        .expect("sender should not be dropped before sending");
    query.apply(settlement);

    assert_eq!(query.data(), Some(&Payload { id: 7 }));
}

#[tokio::test]
async fn test_teardown_makes_settlement_a_noop() {
    let (query, invocation) = Query::new(delayed_ok(1, 5), ());
    drop(query);

    // The operation still runs to completion; there is just nothing left to
    // commit its result into.
    let settlement = invocation.settle().await;
    assert_eq!(settlement.generation(), 0);
}
