//! Configuration module for quotebus.
//!
//! Provides the typed demo configuration: which observers to build and the
//! scripted steps to replay against the exchange. Loadable from TOML, with
//! a built-in default reproducing the classic four-subscriber AAPL demo.

use anyhow::{Context, Result};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::application::scenario::{ObserverSpec, ScenarioStep};

/// Demo run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    pub observers: Vec<ObserverSpec>,
    pub steps: Vec<ScenarioStep>,
}

impl DemoConfig {
    /// Load a scenario config from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

impl Default for DemoConfig {
    /// The built-in demo: two traders and two robots on AAPL, three price
    /// swings, one unsubscribe, one final swing.
    fn default() -> Self {
        let aapl = || "AAPL".to_string();
        Self {
            observers: vec![
                ObserverSpec::Trader {
                    name: "Shyngys".to_string(),
                },
                ObserverSpec::Trader {
                    name: "Almaz".to_string(),
                },
                ObserverSpec::Robot {
                    name: "Robot1".to_string(),
                    buy_threshold: dec!(100),
                    sell_threshold: dec!(150),
                },
                ObserverSpec::Robot {
                    name: "Robot2".to_string(),
                    buy_threshold: dec!(80),
                    sell_threshold: dec!(120),
                },
            ],
            steps: vec![
                ScenarioStep::Register {
                    observer: 0,
                    symbol: aapl(),
                },
                ScenarioStep::Register {
                    observer: 1,
                    symbol: aapl(),
                },
                ScenarioStep::Register {
                    observer: 2,
                    symbol: aapl(),
                },
                ScenarioStep::Register {
                    observer: 3,
                    symbol: aapl(),
                },
                ScenarioStep::ChangePrice {
                    symbol: aapl(),
                    price: dec!(95),
                },
                ScenarioStep::ChangePrice {
                    symbol: aapl(),
                    price: dec!(155),
                },
                ScenarioStep::ChangePrice {
                    symbol: aapl(),
                    price: dec!(110),
                },
                ScenarioStep::Remove {
                    observer: 0,
                    symbol: aapl(),
                },
                ScenarioStep::ChangePrice {
                    symbol: aapl(),
                    price: dec!(90),
                },
            ],
        }
    }
}
