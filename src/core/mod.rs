pub mod aggregation;
pub mod services;

pub use aggregation::{global_balance, monthly_totals, AggregationEngine};
