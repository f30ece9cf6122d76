// Subject side of the observer pattern
pub mod exchange;
