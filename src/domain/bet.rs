use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::odds;

/// Betting market types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetType {
    #[serde(rename = "h2h")]
    Moneyline,
    #[serde(rename = "spreads")]
    Spread,
    #[serde(rename = "totals")]
    Total,
}

impl BetType {
    pub fn api_key(&self) -> &'static str {
        match self {
            BetType::Moneyline => "h2h",
            BetType::Spread => "spreads",
            BetType::Total => "totals",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BetType::Moneyline => "Moneyline",
            BetType::Spread => "Spread",
            BetType::Total => "Total",
        }
    }
}

impl std::fmt::Display for BetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One selection within a parlay
///
/// The odds engine reads only the odds field; game, bet type, and selection
/// are display metadata carried for the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParlayLeg {
    pub game_id: String,
    pub bet_type: BetType,
    pub selection: String,
    pub odds: i32,
}

impl ParlayLeg {
    pub fn new(
        game_id: impl Into<String>,
        bet_type: BetType,
        selection: impl Into<String>,
        odds: i32,
    ) -> Self {
        Self {
            game_id: game_id.into(),
            bet_type,
            selection: selection.into(),
            odds,
        }
    }

    /// Decimal odds for this leg
    pub fn decimal_odds(&self) -> Result<Decimal> {
        odds::american_to_decimal(self.odds)
    }

    /// Implied win probability for this leg
    pub fn implied_probability(&self) -> Result<Decimal> {
        odds::implied_probability(self.odds)
    }
}

/// A bet slip: a stake placed on one or more legs
///
/// Values are computed per call and never persisted here; storing the slip
/// is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetSlip {
    pub id: Uuid,
    pub stake: Decimal,
    pub legs: Vec<ParlayLeg>,
    pub created_at: DateTime<Utc>,
}

impl BetSlip {
    /// Build a slip for a single straight bet
    pub fn single(stake: Decimal, leg: ParlayLeg) -> Self {
        Self::parlay(stake, vec![leg])
    }

    /// Build a slip from a set of legs
    pub fn parlay(stake: Decimal, legs: Vec<ParlayLeg>) -> Self {
        Self {
            id: Uuid::new_v4(),
            stake,
            legs,
            created_at: Utc::now(),
        }
    }

    pub fn is_parlay(&self) -> bool {
        self.legs.len() > 1
    }

    /// Combined American price across all legs
    pub fn combined_odds(&self) -> Result<i32> {
        odds::calculate_parlay_odds(&self.legs)
    }

    /// Total payout (stake + profit) if every leg wins
    pub fn payout(&self) -> Result<Decimal> {
        odds::calculate_payout(self.stake, self.combined_odds()?)
    }

    /// Profit if every leg wins
    pub fn potential_profit(&self) -> Result<Decimal> {
        Ok(self.payout()? - self.stake)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParlayError;
    use rust_decimal_macros::dec;

    fn moneyline(game_id: &str, odds: i32) -> ParlayLeg {
        ParlayLeg::new(game_id, BetType::Moneyline, "home", odds)
    }

    #[test]
    fn test_single_slip_payout() {
        let slip = BetSlip::single(dec!(10), moneyline("nfl-kc-buf", 150));
        assert!(!slip.is_parlay());
        assert_eq!(slip.combined_odds().unwrap(), 150);
        assert_eq!(slip.payout().unwrap(), dec!(25));
        assert_eq!(slip.potential_profit().unwrap(), dec!(15));
    }

    #[test]
    fn test_parlay_slip_payout() {
        // +150 and -110 combine to +377; $10 returns $47.70
        let slip = BetSlip::parlay(
            dec!(10),
            vec![moneyline("nfl-kc-buf", 150), moneyline("nfl-dal-phi", -110)],
        );
        assert!(slip.is_parlay());
        assert_eq!(slip.combined_odds().unwrap(), 377);
        assert_eq!(slip.payout().unwrap(), dec!(47.70));
    }

    #[test]
    fn test_empty_slip_rejected() {
        let slip = BetSlip::parlay(dec!(10), vec![]);
        assert!(matches!(
            slip.combined_odds(),
            Err(ParlayError::EmptyParlay)
        ));
    }

    #[test]
    fn test_leg_decimal_odds() {
        let leg = moneyline("nfl-kc-buf", 150);
        assert_eq!(leg.decimal_odds().unwrap(), dec!(2.5));
        assert_eq!(leg.implied_probability().unwrap(), dec!(0.4));
    }

    #[test]
    fn test_bet_type_keys() {
        assert_eq!(BetType::Moneyline.api_key(), "h2h");
        assert_eq!(BetType::Spread.api_key(), "spreads");
        assert_eq!(BetType::Total.api_key(), "totals");
    }
}
