//! Service implementations
//!
//! Production implementations of the service traits

pub mod submission;

// Re-export service implementations
pub use submission::SimulatedDelivery;

#[cfg(test)]
mod tests;
