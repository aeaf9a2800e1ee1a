/// CSV export of yearly results and raw outcomes.
pub mod export;
