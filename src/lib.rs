pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod odds;
pub mod validation;

pub use crate::config::AppConfig;
pub use domain::{BetSlip, BetType, ParlayLeg};
pub use error::{ParlayError, Result};
pub use odds::{
    american_to_decimal, calculate_parlay_odds, calculate_payout, decimal_to_american,
    format_american, implied_probability, potential_profit,
};
