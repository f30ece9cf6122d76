// Domain-specific error types
pub mod errors;

// Observer capability
pub mod observer;

// Core domain types
pub mod types;
