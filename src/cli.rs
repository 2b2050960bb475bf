use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{Table, Tabled};
use tracing::debug;

use crate::config::BettingConfig;
use crate::domain::{BetSlip, BetType, ParlayLeg};
use crate::error::Result;
use crate::{odds, validation};

#[derive(Parser)]
#[command(name = "parlay")]
#[command(author = "Parlay Team")]
#[command(version = "0.1.0")]
#[command(about = "Sportsbook odds conversion and parlay payout calculator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory path
    #[arg(short, long, default_value = "config")]
    pub config: String,

    /// Output JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert American odds to decimal odds and implied probability
    Convert {
        /// American odds (e.g. 150 or -110)
        #[arg(allow_negative_numbers = true)]
        odds: i32,
    },
    /// Compute total payout for a stake at the given odds
    Payout {
        /// Stake in USD
        #[arg(short, long)]
        stake: Decimal,
        /// American odds (e.g. 150 or -110)
        #[arg(short, long, allow_negative_numbers = true)]
        odds: i32,
    },
    /// Combine parlay legs into a single price and payout
    Combine {
        /// American odds for one leg (repeat per leg)
        #[arg(short, long = "odds", required = true, allow_negative_numbers = true)]
        odds: Vec<i32>,
        /// Stake in USD (omit for price only)
        #[arg(short, long)]
        stake: Option<Decimal>,
    },
}

/// Output mode for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Table,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputMode::Json
        } else {
            OutputMode::Table
        }
    }
}

#[derive(Tabled, Serialize)]
struct OddsRow {
    #[tabled(rename = "American")]
    american: String,
    #[tabled(rename = "Decimal")]
    decimal: String,
    #[tabled(rename = "Implied Prob")]
    implied: String,
}

#[derive(Tabled, Serialize)]
struct PayoutRow {
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Payout")]
    payout: String,
    #[tabled(rename = "Profit")]
    profit: String,
}

#[derive(Tabled, Serialize)]
struct LegRow {
    #[tabled(rename = "Leg")]
    leg: usize,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Decimal")]
    decimal: String,
    #[tabled(rename = "Implied Prob")]
    implied: String,
}

#[derive(Serialize)]
struct ParlaySummary {
    legs: usize,
    combined_odds: String,
    combined_decimal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    stake: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    profit: Option<String>,
}

/// Print a vec of Tabled + Serialize items in the chosen mode
fn print_items<T: Tabled + Serialize>(items: &[T], mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Table => {
            if items.is_empty() {
                println!("(no results)");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(items)?);
        }
    }
    Ok(())
}

/// Print a simple key-value pair
fn print_kv(label: &str, value: &str) {
    println!("{:<18} {}", format!("{}:", label), value);
}

fn format_probability(prob: Decimal) -> String {
    format!("{:.2}%", prob * Decimal::ONE_HUNDRED)
}

fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// `parlay convert <odds>`
pub fn convert_odds(odds_value: i32, mode: OutputMode) -> Result<()> {
    let decimal = odds::american_to_decimal(odds_value)?;
    let implied = odds::implied_probability(odds_value)?;

    let row = OddsRow {
        american: odds::format_american(odds_value),
        decimal: format!("{:.4}", decimal),
        implied: format_probability(implied),
    };

    print_items(&[row], mode)
}

/// `parlay payout --stake <amt> --odds <odds>`
pub fn show_payout(
    stake: Decimal,
    odds_value: i32,
    config: &BettingConfig,
    mode: OutputMode,
) -> Result<()> {
    validation::validate_odds(odds_value)?;
    validation::validate_stake(stake, config)?;

    let payout = odds::calculate_payout(stake, odds_value)?;
    let profit = payout - stake;

    let row = PayoutRow {
        odds: odds::format_american(odds_value),
        stake: format_usd(stake),
        payout: format_usd(payout),
        profit: format_usd(profit),
    };

    print_items(&[row], mode)
}

/// `parlay combine --odds <o> [--odds <o> ...] [--stake <amt>]`
pub fn combine_parlay(
    odds_values: &[i32],
    stake: Option<Decimal>,
    config: &BettingConfig,
    mode: OutputMode,
) -> Result<()> {
    // Bare odds from the command line carry no game metadata; each leg
    // gets a synthetic game id so the slip rules still apply.
    let legs: Vec<ParlayLeg> = odds_values
        .iter()
        .enumerate()
        .map(|(i, &o)| {
            ParlayLeg::new(
                format!("leg-{}", i + 1),
                BetType::Moneyline,
                odds::format_american(o),
                o,
            )
        })
        .collect();

    validation::validate_legs(&legs, config)?;
    if let Some(stake) = stake {
        validation::validate_stake(stake, config)?;
    }

    let combined = odds::calculate_parlay_odds(&legs)?;
    let mut combined_decimal = Decimal::ONE;
    for leg in &legs {
        combined_decimal *= leg.decimal_odds()?;
    }

    debug!(
        "combined {} legs into {} (decimal {:.4})",
        legs.len(),
        odds::format_american(combined),
        combined_decimal
    );

    let leg_rows: Vec<LegRow> = legs
        .iter()
        .enumerate()
        .map(|(i, leg)| {
            Ok(LegRow {
                leg: i + 1,
                odds: odds::format_american(leg.odds),
                decimal: format!("{:.4}", leg.decimal_odds()?),
                implied: format_probability(leg.implied_probability()?),
            })
        })
        .collect::<Result<_>>()?;

    let slip = stake.map(|stake| BetSlip::parlay(stake, legs));
    let (payout, profit) = match &slip {
        Some(slip) => (Some(slip.payout()?), Some(slip.potential_profit()?)),
        None => (None, None),
    };

    let summary = ParlaySummary {
        legs: leg_rows.len(),
        combined_odds: odds::format_american(combined),
        combined_decimal: format!("{:.4}", combined_decimal),
        stake: stake.map(format_usd),
        payout: payout.map(format_usd),
        profit: profit.map(format_usd),
    };

    match mode {
        OutputMode::Table => {
            print_items(&leg_rows, mode)?;
            println!();
            print_kv("Combined odds", &summary.combined_odds);
            print_kv("Combined decimal", &summary.combined_decimal);
            if let (Some(stake), Some(payout), Some(profit)) =
                (&summary.stake, &summary.payout, &summary.profit)
            {
                print_kv("Stake", stake);
                print_kv("Payout", payout);
                print_kv("Profit", profit);
            }
        }
        OutputMode::Json => {
            let output = serde_json::json!({
                "legs": leg_rows,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
