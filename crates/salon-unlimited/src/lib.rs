//! Salon reservation service: booking intake, treatment eligibility, and the
//! salon/stylist directory behind them.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
