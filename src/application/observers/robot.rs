use rust_decimal::Decimal;
use tracing::info;

use crate::domain::errors::ObserverError;
use crate::domain::observer::MarketObserver;
use crate::domain::types::TradeAction;

/// Threshold-driven subscriber
///
/// Buys at or below `buy_threshold`, sells at or above `sell_threshold`,
/// holds anywhere in between. Both boundaries are inclusive and the buy
/// branch is evaluated first, so inverted thresholds
/// (`buy_threshold >= sell_threshold`) are accepted as-is rather than
/// rejected.
#[derive(Debug, Clone)]
pub struct TradingRobot {
    name: String,
    buy_threshold: Decimal,
    sell_threshold: Decimal,
}

impl TradingRobot {
    pub fn new(name: &str, buy_threshold: Decimal, sell_threshold: Decimal) -> Self {
        Self {
            name: name.to_string(),
            buy_threshold,
            sell_threshold,
        }
    }

    /// Classify a price against the configured thresholds.
    pub fn decide(&self, price: Decimal) -> TradeAction {
        if price <= self.buy_threshold {
            TradeAction::Buy
        } else if price >= self.sell_threshold {
            TradeAction::Sell
        } else {
            TradeAction::Hold
        }
    }
}

impl MarketObserver for TradingRobot {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_price(&self, symbol: &str, price: Decimal) -> Result<(), ObserverError> {
        match self.decide(price) {
            TradeAction::Buy => info!("Robot {} buys {} at {}", self.name, symbol, price),
            TradeAction::Sell => info!("Robot {} sells {} at {}", self.name, symbol, price),
            TradeAction::Hold => {
                info!(
                    "Robot {} ignores {}, current price {}",
                    self.name, symbol, price
                )
            }
        }
        Ok(())
    }
}
