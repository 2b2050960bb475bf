// American / decimal odds conversion and parlay math
//
// Conventions: positive American odds state profit per 100 staked (+150 pays
// $150 profit on $100), negative odds state the stake required per 100 profit
// (-110 requires $110 staked for $100 profit). Decimal odds express total
// return (stake + profit) as a single multiplier of the stake.

use crate::domain::ParlayLeg;
use crate::error::{ParlayError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Convert American odds to decimal odds
///
/// The result is always greater than 1: both branches add a strictly positive
/// profit multiplier on top of the returned stake.
pub fn american_to_decimal(odds: i32) -> Result<Decimal> {
    if odds == 0 {
        return Err(ParlayError::InvalidOdds);
    }

    let profit_multiplier = if odds > 0 {
        Decimal::from(odds) / Decimal::ONE_HUNDRED
    } else {
        Decimal::ONE_HUNDRED / Decimal::from(odds.unsigned_abs())
    };

    Ok(profit_multiplier + Decimal::ONE)
}

/// Convert decimal odds back to American odds
///
/// Decimal odds of exactly 2 sit on the favorite/underdog boundary and map to
/// +100. Fractional results are rounded half-away-from-zero, the convention
/// sportsbooks display.
pub fn decimal_to_american(decimal_odds: Decimal) -> Result<i32> {
    if decimal_odds <= Decimal::ONE {
        return Err(ParlayError::DegenerateDecimalOdds(decimal_odds));
    }

    let american = if decimal_odds >= Decimal::TWO {
        (decimal_odds - Decimal::ONE)
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| {
                ParlayError::OddsOutOfRange(format!("decimal odds {} too large", decimal_odds))
            })?
    } else {
        // decimal_odds in (1, 2): favorite, negative American odds
        let quotient = Decimal::ONE_HUNDRED
            .checked_div(decimal_odds - Decimal::ONE)
            .ok_or_else(|| {
                ParlayError::OddsOutOfRange(format!("decimal odds {} too close to 1", decimal_odds))
            })?;
        -quotient
    };

    american
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .ok_or_else(|| {
            ParlayError::OddsOutOfRange(format!("American odds {} exceed i32 range", american))
        })
}

/// Combine parlay legs into a single American price
///
/// Standard parlay rule: the combined payout multiplier is the product of
/// each leg's decimal odds. The engine reads only the odds field of each leg.
pub fn calculate_parlay_odds(legs: &[ParlayLeg]) -> Result<i32> {
    if legs.is_empty() {
        return Err(ParlayError::EmptyParlay);
    }

    let mut combined = Decimal::ONE;
    for leg in legs {
        let decimal = american_to_decimal(leg.odds)?;
        combined = combined.checked_mul(decimal).ok_or_else(|| {
            ParlayError::OddsOutOfRange(format!(
                "combined decimal odds overflow at leg {}",
                leg.game_id
            ))
        })?;
    }

    decimal_to_american(combined)
}

/// Total payout (stake + profit) for a stake at the given American odds
///
/// A zero stake yields a zero payout regardless of odds; the minimum-stake
/// floor is a caller concern, not enforced here.
pub fn calculate_payout(stake: Decimal, american_odds: i32) -> Result<Decimal> {
    if american_odds == 0 {
        return Err(ParlayError::InvalidOdds);
    }
    if stake < Decimal::ZERO {
        return Err(ParlayError::Validation(format!(
            "stake cannot be negative: {}",
            stake
        )));
    }

    let profit = if american_odds > 0 {
        stake
            .checked_mul(Decimal::from(american_odds))
            .map(|p| p / Decimal::ONE_HUNDRED)
    } else {
        stake
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|p| p / Decimal::from(american_odds.unsigned_abs()))
    };

    let profit = profit.ok_or_else(|| {
        ParlayError::OddsOutOfRange(format!("payout overflow for stake {}", stake))
    })?;

    Ok(stake + profit)
}

/// Profit component of a payout (payout minus the returned stake)
pub fn potential_profit(stake: Decimal, american_odds: i32) -> Result<Decimal> {
    Ok(calculate_payout(stake, american_odds)? - stake)
}

/// Implied win probability of a price (1 / decimal odds)
pub fn implied_probability(odds: i32) -> Result<Decimal> {
    let decimal = american_to_decimal(odds)?;
    Ok(Decimal::ONE / decimal)
}

/// Sportsbook display form with explicit sign ("+150", "-110")
pub fn format_american(odds: i32) -> String {
    format!("{:+}", odds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BetType;
    use rust_decimal_macros::dec;

    fn leg(game_id: &str, odds: i32) -> ParlayLeg {
        ParlayLeg::new(game_id, BetType::Moneyline, "home", odds)
    }

    #[test]
    fn test_american_to_decimal_positive() {
        assert_eq!(american_to_decimal(150).unwrap(), dec!(2.5));
        assert_eq!(american_to_decimal(100).unwrap(), dec!(2));
    }

    #[test]
    fn test_american_to_decimal_negative() {
        // -110 -> 1.909090...
        let decimal = american_to_decimal(-110).unwrap();
        assert!(decimal > dec!(1.9090) && decimal < dec!(1.9091));
        assert_eq!(american_to_decimal(-100).unwrap(), dec!(2));
    }

    #[test]
    fn test_american_to_decimal_rejects_zero() {
        assert!(matches!(
            american_to_decimal(0),
            Err(ParlayError::InvalidOdds)
        ));
    }

    #[test]
    fn test_decimal_to_american_boundary_at_two() {
        // exactly 2.0 routes through the >= 2 branch
        assert_eq!(decimal_to_american(dec!(2.0)).unwrap(), 100);
        assert_eq!(decimal_to_american(dec!(2.5)).unwrap(), 150);
        assert_eq!(decimal_to_american(dec!(1.5)).unwrap(), -200);
    }

    #[test]
    fn test_decimal_to_american_rejects_degenerate() {
        assert!(matches!(
            decimal_to_american(dec!(1)),
            Err(ParlayError::DegenerateDecimalOdds(_))
        ));
        assert!(matches!(
            decimal_to_american(dec!(0.5)),
            Err(ParlayError::DegenerateDecimalOdds(_))
        ));
    }

    #[test]
    fn test_round_trip_within_one() {
        for odds in [-25000, -1000, -240, -110, -105, -101, 100, 105, 150, 240, 1000, 25000] {
            let back = decimal_to_american(american_to_decimal(odds).unwrap()).unwrap();
            assert!(
                (back - odds).abs() <= 1,
                "round trip drifted: {} -> {}",
                odds,
                back
            );
        }
    }

    #[test]
    fn test_parlay_odds_two_legs() {
        // 2.5 * 1.909090... = 4.772727... -> +377
        let legs = vec![leg("nfl-kc-buf", 150), leg("nfl-dal-phi", -110)];
        assert_eq!(calculate_parlay_odds(&legs).unwrap(), 377);
    }

    #[test]
    fn test_parlay_odds_single_leg_identity() {
        for odds in [-450, -110, 120, 360] {
            let combined = calculate_parlay_odds(&[leg("nfl-kc-buf", odds)]).unwrap();
            let round_tripped = decimal_to_american(american_to_decimal(odds).unwrap()).unwrap();
            assert_eq!(combined, round_tripped);
        }
    }

    #[test]
    fn test_parlay_odds_rejects_empty() {
        assert!(matches!(
            calculate_parlay_odds(&[]),
            Err(ParlayError::EmptyParlay)
        ));
    }

    #[test]
    fn test_parlay_odds_rejects_zero_odds_leg() {
        let legs = vec![leg("nfl-kc-buf", 150), leg("nfl-dal-phi", 0)];
        assert!(matches!(
            calculate_parlay_odds(&legs),
            Err(ParlayError::InvalidOdds)
        ));
    }

    #[test]
    fn test_payout_positive_odds() {
        // $10 at +150 returns $25 total: $10 stake + $15 profit
        assert_eq!(calculate_payout(dec!(10), 150).unwrap(), dec!(25));
    }

    #[test]
    fn test_payout_negative_odds() {
        // $110 at -110 returns $210 total
        assert_eq!(calculate_payout(dec!(110), -110).unwrap(), dec!(210));
    }

    #[test]
    fn test_payout_zero_stake() {
        assert_eq!(calculate_payout(dec!(0), 150).unwrap(), dec!(0));
        assert_eq!(calculate_payout(dec!(0), -110).unwrap(), dec!(0));
    }

    #[test]
    fn test_payout_rejects_invalid_input() {
        assert!(matches!(
            calculate_payout(dec!(10), 0),
            Err(ParlayError::InvalidOdds)
        ));
        assert!(matches!(
            calculate_payout(dec!(-5), 150),
            Err(ParlayError::Validation(_))
        ));
    }

    #[test]
    fn test_potential_profit() {
        assert_eq!(potential_profit(dec!(10), 150).unwrap(), dec!(15));
        assert_eq!(potential_profit(dec!(110), -110).unwrap(), dec!(100));
    }

    #[test]
    fn test_implied_probability() {
        // -200 implies 66.67%
        let prob = implied_probability(-200).unwrap();
        assert!(prob > dec!(0.66) && prob < dec!(0.67));

        // +100 implies exactly 50%
        assert_eq!(implied_probability(100).unwrap(), dec!(0.5));
    }

    #[test]
    fn test_format_american() {
        assert_eq!(format_american(150), "+150");
        assert_eq!(format_american(-110), "-110");
    }
}
