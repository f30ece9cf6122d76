mod robot;
mod trader;

pub use robot::TradingRobot;
pub use trader::Trader;
