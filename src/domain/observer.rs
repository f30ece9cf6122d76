use rust_decimal::Decimal;

use crate::domain::errors::ObserverError;

/// Capability implemented by every price subscriber.
///
/// Implementations are passive value types owned by the driver; the
/// exchange only holds weak handles to them (see
/// `infrastructure::exchange`).
pub trait MarketObserver {
    /// Display name used for log attribution.
    fn name(&self) -> &str;

    /// React to a price update for a symbol this observer is subscribed to.
    ///
    /// Called synchronously from the exchange's notification loop. An `Err`
    /// halts the remaining pass and propagates to whoever triggered the
    /// price change.
    fn on_price(&self, symbol: &str, price: Decimal) -> Result<(), ObserverError>;
}
