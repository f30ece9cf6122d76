use rust_decimal::Decimal;
use tracing::info;

use crate::domain::errors::ObserverError;
use crate::domain::observer::MarketObserver;

/// Passive subscriber: reports every update it receives and decides nothing.
#[derive(Debug, Clone)]
pub struct Trader {
    name: String,
}

impl Trader {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl MarketObserver for Trader {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_price(&self, symbol: &str, price: Decimal) -> Result<(), ObserverError> {
        info!(
            "Trader {} received update: {} is trading at {}",
            self.name, symbol, price
        );
        Ok(())
    }
}
