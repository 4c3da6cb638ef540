//! Prelude module for convenient imports.
//!
//! ```
//! use folio::prelude::*;
//! ```
//!
//! # What's included
//!
//! - [`Query`] / [`Invocation`] / [`Settlement`] - read-side lifecycle tracking
//! - [`Mutation`] / [`MutationError`] - write-side lifecycle tracking
//! - [`ApiClient`] / [`ClientConfig`] - the backend REST client
//! - [`ApiError`] - the shared failure type
//! - [`Notify`] - the injected notification seam

pub use crate::client::{ApiClient, ClientConfig};
pub use crate::error::ApiError;
pub use crate::mutation::{Mutation, MutationError};
pub use crate::notify::Notify;
pub use crate::query::{Invocation, Query, Settlement};
