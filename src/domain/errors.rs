use thiserror::Error;

/// Errors related to managing the subscription registry
#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("Invalid subscription: {reason}")]
    InvalidSubscription { reason: String },
}

/// Failure raised by an observer while processing a price update.
///
/// The exchange does not catch these: the first failing observer in a
/// notification pass halts the pass and the error surfaces to the caller.
#[derive(Debug, Error)]
#[error("Observer {observer} failed to process update: {reason}")]
pub struct ObserverError {
    pub observer: String,
    pub reason: String,
}
