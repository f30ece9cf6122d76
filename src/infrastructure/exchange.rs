use crate::domain::errors::{ObserverError, SubscriptionError};
use crate::domain::observer::MarketObserver;
use rust_decimal::Decimal;
use std::sync::{Arc, Weak};
use tracing::info;

/// One (observer, symbol) binding. The observer handle is weak: the driver
/// owns the observers, the exchange never extends their lifetime.
struct Subscription {
    observer: Weak<dyn MarketObserver>,
    symbol: String,
}

/// Stock exchange acting as the subject of the observer pattern.
///
/// Keeps an insertion-ordered registry of subscriptions and notifies every
/// matching observer synchronously, in registration order, whenever a price
/// changes. Duplicate (observer, symbol) pairs are allowed and each entry
/// is notified independently.
pub struct StockExchange {
    subscriptions: Vec<Subscription>,
}

impl StockExchange {
    /// Create an exchange with an empty registry
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    /// Subscribe an observer to price updates for `symbol`.
    ///
    /// Rejects empty or all-whitespace symbols; anything else is accepted,
    /// including a pair that is already registered.
    pub fn register(
        &mut self,
        observer: &Arc<dyn MarketObserver>,
        symbol: &str,
    ) -> Result<(), SubscriptionError> {
        if symbol.trim().is_empty() {
            return Err(SubscriptionError::InvalidSubscription {
                reason: "symbol must not be empty".to_string(),
            });
        }

        self.subscriptions.push(Subscription {
            observer: Arc::downgrade(observer),
            symbol: symbol.to_string(),
        });
        info!("Observer {} subscribed to {}", observer.name(), symbol);
        Ok(())
    }

    /// Drop every subscription matching this exact observer (pointer
    /// identity) and symbol. Removing a pair that was never registered is
    /// a no-op.
    pub fn remove(&mut self, observer: &Arc<dyn MarketObserver>, symbol: &str) {
        let target = Arc::downgrade(observer);
        self.subscriptions
            .retain(|sub| !(sub.observer.ptr_eq(&target) && sub.symbol == symbol));
        info!("Observer {} unsubscribed from {}", observer.name(), symbol);
    }

    /// Deliver a price update to every observer subscribed to `symbol`, in
    /// registration order.
    ///
    /// There is no fault isolation between observers: the first `Err`
    /// propagates to the caller and the rest of the pass is skipped.
    /// Entries whose observer has been dropped are skipped.
    pub fn notify(&self, symbol: &str, price: Decimal) -> Result<(), ObserverError> {
        for sub in self.subscriptions.iter().filter(|s| s.symbol == symbol) {
            if let Some(observer) = sub.observer.upgrade() {
                observer.on_price(symbol, price)?;
            }
        }
        Ok(())
    }

    /// Record a price change for `symbol` and notify its subscribers.
    pub fn change_price(&self, symbol: &str, new_price: Decimal) -> Result<(), ObserverError> {
        info!("Price change for {}: new price {}", symbol, new_price);
        self.notify(symbol, new_price)
    }

    /// Total number of registry entries (for tests and diagnostics)
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Number of registry entries bound to `symbol`
    pub fn subscriber_count_for(&self, symbol: &str) -> usize {
        self.subscriptions
            .iter()
            .filter(|s| s.symbol == symbol)
            .count()
    }
}

impl Default for StockExchange {
    fn default() -> Self {
        Self::new()
    }
}
