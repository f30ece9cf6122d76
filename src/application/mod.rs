// Observer variants
pub mod observers;

// Scripted demo driver
pub mod scenario;
