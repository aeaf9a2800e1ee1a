//! Entities whose capacities and consumption feed the outage simulation.

/// Backup battery model.
pub mod battery;
/// Daily net consumption distribution.
pub mod consumption;
/// Batteries pooled for one household.
pub mod fleet;
pub mod types;

// Re-export the main types for convenience
pub use battery::Battery;
pub use consumption::ConsumptionProfile;
pub use fleet::Fleet;
pub use types::Degradable;
pub use types::DegradationProfile;
