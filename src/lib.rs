//! # Folio - Request-lifecycle State for a Portfolio Backend
//!
//! Folio provides the two state primitives a presentation layer needs to
//! talk to the portfolio site's REST backend, plus a typed client for that
//! backend. The primitives are deliberately tiny and executor-agnostic:
//! they track state, and the owner drives the I/O.
//!
//! ## Core Components
//!
//! - [`Query`](query::Query): wraps a zero-argument asynchronous read and
//!   exposes `{data, loading, error}`. Re-runs when its dependency key
//!   changes or on [`retry`](query::Query::retry); a generation marker
//!   guarantees that only the most recently armed invocation may commit its
//!   result (stale settlements are dropped).
//! - [`Mutation`](mutation::Mutation): wraps an on-demand asynchronous write
//!   and exposes `{loading, error, success}` plus
//!   [`reset`](mutation::Mutation::reset). Failures are stored for
//!   render-time display *and* re-raised to the caller with the same derived
//!   message.
//! - [`ApiClient`](client::ApiClient): the backend collaborator the
//!   primitives are typically pointed at - contact form, portfolio content,
//!   chat sessions, file downloads, health.
//!
//! Failure messages follow one derivation rule everywhere: the server's
//! structured `detail` when present, otherwise the transport's message,
//! otherwise the fixed fallback
//! [`DEFAULT_ERROR_MESSAGE`](error::DEFAULT_ERROR_MESSAGE).
//!
//! ## Example
//!
//! ```rust,no_run
//! use folio::prelude::*;
//! use futures::FutureExt;
//! use std::sync::Arc;
//!
//! # async fn demo() -> Result<(), MutationError> {
//! let client = Arc::new(ApiClient::new("http://localhost:8000/api").unwrap());
//!
//! // Read side: arm a query for the project list and drive it.
//! let fetch = {
//!     let client = client.clone();
//!     move || {
//!         let client = client.clone();
//!         async move { client.projects().await }.boxed()
//!     }
//! };
//! let (mut projects, invocation) = Query::new(fetch, ());
//! projects.apply(invocation.settle().await);
//!
//! // Write side: submit the contact form.
//! let mut submit = Mutation::new();
//! let receipt = submit
//!     .invoke(client.submit_contact(&folio::models::ContactRequest {
//!         name: "Ada".to_string(),
//!         email: "ada@example.com".to_string(),
//!         subject: "Hello".to_string(),
//!         message: "Nice site".to_string(),
//!     }))
//!     .await?;
//! println!("{}", receipt.message);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod mutation;
pub mod notify;
pub mod prelude;
pub mod query;
