//! Write-side request lifecycle tracking.
//!
//! This module provides the [`Mutation`] primitive for on-demand write
//! operations (submit a form, clear a chat session) and their
//! `{loading, error, success}` lifecycle, similar to the mutation half of
//! TanStack Query.
//!
//! # Design Pattern: Store and Re-raise
//!
//! A failed mutation is recorded twice on purpose: the derived message is
//! stored in `error` for render-time display, and the same message is
//! returned to the caller as a [`MutationError`] so the call site can run an
//! imperative side effect (a toast, a log line) without re-deriving it.
//!
//! There is no de-duplication, retry or queuing. Each invocation races
//! independently and the last settlement observed wins, which is appropriate
//! for low-frequency user-triggered writes such as a submit button.
//!
//! # Example
//!
//! ```rust,no_run
//! use folio::prelude::*;
//! use folio::models::ContactRequest;
//!
//! # async fn demo(client: ApiClient, request: ContactRequest) {
//! let mut submit = Mutation::new();
//!
//! match submit.invoke(client.submit_contact(&request)).await {
//!     Ok(receipt) => println!("{}", receipt.message),
//!     Err(err) => eprintln!("{err}"),
//! }
//! assert_eq!(submit.success(), submit.error().is_none());
//! # }
//! ```

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;

use crate::error::ApiError;
use crate::notify::Notify;

/// Failure re-raised to the caller of a settled mutation.
///
/// Carries the same derived message that was stored in the mutation's
/// `error` field.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct MutationError {
    message: String,
}

impl MutationError {
    /// The derived display message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Tracks a write operation's `{loading, error, success}` state.
#[derive(Default)]
pub struct Mutation {
    loading: bool,
    error: Option<String>,
    success: bool,
    notifier: Option<Arc<dyn Notify>>,
}

impl Mutation {
    /// Creates an idle mutation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a notifier called after each settlement.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notify>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Runs a write operation through the full lifecycle.
    ///
    /// Clears `error` and `success` and sets `loading` before awaiting the
    /// operation, then settles with its outcome. On success the operation's
    /// result is returned; on failure the derived message is stored *and*
    /// returned as a [`MutationError`].
    pub async fn invoke<R>(
        &mut self,
        operation: impl Future<Output = Result<R, ApiError>>,
    ) -> Result<R, MutationError> {
        self.start();
        let outcome = operation.await;
        self.settle(outcome)
    }

    /// Marks a new invocation as in flight.
    ///
    /// Split out from [`invoke`](Self::invoke) for owners that deliver
    /// completions as discrete events instead of holding `&mut self` across
    /// an await. Calling it while a previous invocation is still outstanding
    /// is permitted; the prior `error`/`success` are cleared immediately.
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
        self.success = false;
    }

    /// Commits an outcome, updating all three fields as a group.
    ///
    /// With overlapping invocations the last settlement observed wins.
    pub fn settle<R>(&mut self, outcome: Result<R, ApiError>) -> Result<R, MutationError> {
        self.loading = false;
        match outcome {
            Ok(value) => {
                self.success = true;
                self.error = None;
                if let Some(notifier) = &self.notifier {
                    notifier.on_success();
                }
                Ok(value)
            }
            Err(err) => {
                let message = err.display_message();
                self.success = false;
                self.error = Some(message.clone());
                if let Some(notifier) = &self.notifier {
                    notifier.on_error(&message);
                }
                Err(MutationError { message })
            }
        }
    }

    /// Returns the mutation to its idle defaults.
    ///
    /// Used when the caller wants to present the interaction as fresh, e.g.
    /// when reopening a form.
    pub fn reset(&mut self) {
        self.loading = false;
        self.error = None;
        self.success = false;
    }

    /// `true` between invocation start and settlement.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// Message from the most recent failed settlement, if current.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// `true` only after the most recent invocation settled successfully.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }
}
