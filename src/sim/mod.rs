/// Monte Carlo engine and `simple_sim`.
pub mod engine;
/// Year-over-year degradation driver and `multi_year_sim`.
pub mod multi_year;
/// Pass/fail scoring of one sampled outage.
pub mod outcome;
/// Normal draws of daily net consumption.
pub mod sampler;
/// Margin statistics over retained outcomes.
pub mod summary;
pub mod types;
