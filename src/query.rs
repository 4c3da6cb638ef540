//! Read-side request lifecycle tracking.
//!
//! This module provides the [`Query`] primitive for wrapping a zero-argument
//! asynchronous read operation and tracking its `{data, loading, error}`
//! lifecycle, similar to the query half of SWR or TanStack Query.
//!
//! # Design Pattern: Generation-tagged Invocations
//!
//! A `Query` does not drive its own I/O. Arming it (construction, a
//! dependency change, or [`retry`](Query::retry)) hands the owner an
//! [`Invocation`]: a future tagged with the generation that issued it. The
//! owner awaits it wherever is convenient and feeds the resulting
//! [`Settlement`] back through [`apply`](Query::apply). Only a settlement
//! carrying the *current* generation is allowed to commit; anything older is
//! stale and silently dropped. That one rule gives re-fetch, retry and
//! teardown the same semantics: superseded work cannot overwrite newer state.
//!
//! There is no true cancellation here. A superseded invocation may run to
//! completion in the background; staleness suppression only guarantees its
//! result is discarded.
//!
//! # Example
//!
//! ```rust,no_run
//! use folio::prelude::*;
//! use futures::FutureExt;
//! use std::sync::Arc;
//!
//! # async fn demo() {
//! let client = Arc::new(ApiClient::new("http://localhost:8000/api").unwrap());
//!
//! let fetch = {
//!     let client = client.clone();
//!     move || {
//!         let client = client.clone();
//!         async move { client.projects().await }.boxed()
//!     }
//! };
//!
//! let (mut projects, invocation) = Query::new(fetch, ());
//! assert!(projects.loading());
//!
//! projects.apply(invocation.settle().await);
//! if let Some(error) = projects.error() {
//!     eprintln!("failed to load projects: {error}");
//! }
//! # }
//! ```

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::ApiError;

/// A zero-argument asynchronous read operation.
///
/// The operation signals failure through its `Result`, never through a
/// sentinel value.
pub type Fetcher<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T, ApiError>> + Send + Sync>;

/// An armed run of the query's operation, tagged with the generation that
/// issued it.
///
/// The owner drives this future (spawn it, batch it, or await it inline) and
/// hands the settlement back to [`Query::apply`]. Dropping it without
/// settling is fine; the query simply stays `loading` until re-armed.
pub struct Invocation<T> {
    generation: u64,
    future: BoxFuture<'static, Result<T, ApiError>>,
}

impl<T> Invocation<T> {
    /// The generation this invocation was issued under.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Runs the operation to completion and wraps its outcome.
    pub async fn settle(self) -> Settlement<T> {
        let outcome = self.future.await;
        Settlement {
            generation: self.generation,
            outcome,
        }
    }
}

/// The outcome of a settled invocation, still tagged with its generation.
#[derive(Debug)]
pub struct Settlement<T> {
    generation: u64,
    outcome: Result<T, ApiError>,
}

impl<T> Settlement<T> {
    /// The generation of the invocation that produced this settlement.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Tracks a read operation's `{data, loading, error}` state.
///
/// `T` is the operation's result type; `K` is the dependency key, an
/// arbitrary `PartialEq` value (typically a tuple of request parameters)
/// whose change triggers a re-fetch.
pub struct Query<T, K = ()> {
    fetcher: Fetcher<T>,
    deps: K,
    generation: u64,
    data: Option<T>,
    loading: bool,
    error: Option<String>,
}

impl<T, K> Query<T, K>
where
    K: PartialEq,
{
    /// Creates a query and arms its first invocation.
    ///
    /// The query starts in `{data: None, loading: true, error: None}`; the
    /// returned [`Invocation`] must be driven and applied for it to settle.
    pub fn new<F>(fetcher: F, deps: K) -> (Self, Invocation<T>)
    where
        F: Fn() -> BoxFuture<'static, Result<T, ApiError>> + Send + Sync + 'static,
    {
        let query = Self {
            fetcher: Arc::new(fetcher),
            deps,
            generation: 0,
            data: None,
            loading: true,
            error: None,
        };
        let invocation = query.issue();
        (query, invocation)
    }

    /// Replaces the dependency key.
    ///
    /// If the key compares equal to the current one, nothing happens and
    /// `None` is returned. Otherwise the query re-arms: the generation is
    /// bumped (so any outstanding invocation becomes stale), `data` and
    /// `error` are cleared, `loading` is set, and the fresh invocation is
    /// returned for the owner to drive.
    #[must_use]
    pub fn set_deps(&mut self, deps: K) -> Option<Invocation<T>> {
        if deps == self.deps {
            return None;
        }
        self.deps = deps;
        Some(self.rearm())
    }

    /// Re-arms the query unconditionally.
    ///
    /// Clears `data` and `error`, sets `loading`, and bumps the generation so
    /// a concurrently in-flight settlement cannot overwrite the retry's
    /// outcome.
    #[must_use]
    pub fn retry(&mut self) -> Invocation<T> {
        self.rearm()
    }

    /// Commits a settlement, unless it is stale.
    ///
    /// A settlement is stale when its generation differs from the query's
    /// current one, meaning a newer invocation has been armed since it was
    /// issued. Stale settlements are dropped without touching any field.
    pub fn apply(&mut self, settlement: Settlement<T>) {
        if settlement.generation != self.generation {
            return;
        }
        self.loading = false;
        match settlement.outcome {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                self.data = None;
                self.error = Some(err.display_message());
            }
        }
    }

    /// Result of the last successful run, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// `true` while an armed invocation has not yet settled.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed run, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The current dependency key.
    #[must_use]
    pub const fn deps(&self) -> &K {
        &self.deps
    }

    /// The current generation marker.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    fn rearm(&mut self) -> Invocation<T> {
        self.generation += 1;
        self.loading = true;
        self.data = None;
        self.error = None;
        self.issue()
    }

    fn issue(&self) -> Invocation<T> {
        Invocation {
            generation: self.generation,
            future: (self.fetcher)(),
        }
    }
}
