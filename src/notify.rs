//! Injected notification seam for settled mutations.
//!
//! The presentation layer usually wants a transient side effect (a toast, a
//! status line) when a write settles. Rather than a global dispatcher, the
//! caller supplies an implementation of [`Notify`] and the
//! [`Mutation`](crate::mutation::Mutation) calls it after updating its own
//! state. Both methods default to doing nothing, so implementers override
//! only the events they care about.

/// Callbacks invoked after a mutation settles.
pub trait Notify: Send + Sync {
    /// Called after a successful settlement.
    fn on_success(&self) {}

    /// Called after a failed settlement, with the derived display message.
    fn on_error(&self, message: &str) {
        let _ = message;
    }
}
