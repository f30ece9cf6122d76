use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::application::observers::{Trader, TradingRobot};
use crate::domain::errors::{ObserverError, SubscriptionError};
use crate::domain::observer::MarketObserver;
use crate::infrastructure::exchange::StockExchange;

/// Configuration for one observer to construct.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObserverSpec {
    Trader {
        name: String,
    },
    Robot {
        name: String,
        buy_threshold: Decimal,
        sell_threshold: Decimal,
    },
}

/// One scripted action against the exchange. Observer references are
/// indices into the scenario's observer list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    Register { observer: usize, symbol: String },
    Remove { observer: usize, symbol: String },
    ChangePrice { symbol: String, price: Decimal },
}

/// Errors surfaced while replaying a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Unknown observer index {index} (scenario defines {count})")]
    UnknownObserver { index: usize, count: usize },

    #[error(transparent)]
    Subscription(#[from] SubscriptionError),

    #[error(transparent)]
    Observer(#[from] ObserverError),
}

/// Build the observers a scenario declares, in declaration order.
pub fn build_observers(specs: &[ObserverSpec]) -> Vec<Arc<dyn MarketObserver>> {
    specs
        .iter()
        .map(|spec| match spec {
            ObserverSpec::Trader { name } => Arc::new(Trader::new(name)) as Arc<dyn MarketObserver>,
            ObserverSpec::Robot {
                name,
                buy_threshold,
                sell_threshold,
            } => Arc::new(TradingRobot::new(name, *buy_threshold, *sell_threshold)),
        })
        .collect()
}

/// Replay a scripted sequence of registrations, removals and price changes
/// against `exchange`.
///
/// The driver owns the observers for the duration of the run; steps refer
/// to them by index. The first failing step aborts the replay.
pub fn run_scenario(
    exchange: &mut StockExchange,
    specs: &[ObserverSpec],
    steps: &[ScenarioStep],
) -> Result<(), ScenarioError> {
    let observers = build_observers(specs);

    for step in steps {
        match step {
            ScenarioStep::Register { observer, symbol } => {
                let observer = lookup(&observers, *observer)?;
                exchange.register(observer, symbol)?;
            }
            ScenarioStep::Remove { observer, symbol } => {
                let observer = lookup(&observers, *observer)?;
                exchange.remove(observer, symbol);
            }
            ScenarioStep::ChangePrice { symbol, price } => {
                exchange.change_price(symbol, *price)?;
            }
        }
    }
    Ok(())
}

fn lookup(
    observers: &[Arc<dyn MarketObserver>],
    index: usize,
) -> Result<&Arc<dyn MarketObserver>, ScenarioError> {
    observers.get(index).ok_or(ScenarioError::UnknownObserver {
        index,
        count: observers.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn specs() -> Vec<ObserverSpec> {
        vec![
            ObserverSpec::Trader {
                name: "Ada".to_string(),
            },
            ObserverSpec::Robot {
                name: "Bot".to_string(),
                buy_threshold: dec!(10),
                sell_threshold: dec!(20),
            },
        ]
    }

    #[test]
    fn test_build_observers_preserves_order_and_names() {
        let observers = build_observers(&specs());

        assert_eq!(observers.len(), 2);
        assert_eq!(observers[0].name(), "Ada");
        assert_eq!(observers[1].name(), "Bot");
    }

    #[test]
    fn test_unknown_observer_index_aborts_replay() {
        let mut exchange = StockExchange::new();
        let steps = vec![ScenarioStep::Register {
            observer: 7,
            symbol: "AAPL".to_string(),
        }];

        let err = run_scenario(&mut exchange, &specs(), &steps).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::UnknownObserver { index: 7, count: 2 }
        ));
        assert_eq!(exchange.subscriber_count(), 0);
    }

    #[test]
    fn test_replay_registers_and_notifies() {
        let mut exchange = StockExchange::new();
        let steps = vec![
            ScenarioStep::Register {
                observer: 0,
                symbol: "TSLA".to_string(),
            },
            ScenarioStep::Register {
                observer: 1,
                symbol: "TSLA".to_string(),
            },
            ScenarioStep::ChangePrice {
                symbol: "TSLA".to_string(),
                price: dec!(15),
            },
            ScenarioStep::Remove {
                observer: 0,
                symbol: "TSLA".to_string(),
            },
        ];

        run_scenario(&mut exchange, &specs(), &steps).unwrap();
        assert_eq!(exchange.subscriber_count(), 1);
    }

    #[test]
    fn test_invalid_symbol_surfaces_as_scenario_error() {
        let mut exchange = StockExchange::new();
        let steps = vec![ScenarioStep::Register {
            observer: 0,
            symbol: "".to_string(),
        }];

        let err = run_scenario(&mut exchange, &specs(), &steps).unwrap_err();
        assert!(matches!(err, ScenarioError::Subscription(_)));
    }
}
