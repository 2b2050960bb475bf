/// Input validation for bet requests
///
/// Stake floors, leg-count caps, and same-game rules are caller concerns:
/// the odds engine itself only rejects arithmetically meaningless input.
/// These checks run before a slip reaches the engine.
use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::config::BettingConfig;
use crate::domain::{BetSlip, ParlayLeg};
use crate::error::{ParlayError, Result};

/// Validate a stake against the configured limits
pub fn validate_stake(stake: Decimal, config: &BettingConfig) -> Result<()> {
    if stake < Decimal::ZERO {
        return Err(ParlayError::Validation(format!(
            "stake cannot be negative: {}",
            stake
        )));
    }

    if stake < config.min_stake {
        return Err(ParlayError::Validation(format!(
            "stake {} below minimum {}",
            stake, config.min_stake
        )));
    }

    if stake > config.max_stake {
        return Err(ParlayError::Validation(format!(
            "stake {} exceeds maximum {}",
            stake, config.max_stake
        )));
    }

    Ok(())
}

/// Validate a single American odds value
///
/// Only zero is rejected; odds with magnitude below 100 are unusual but
/// arithmetically well defined.
pub fn validate_odds(odds: i32) -> Result<()> {
    if odds == 0 {
        return Err(ParlayError::InvalidOdds);
    }

    Ok(())
}

/// Validate a set of parlay legs
pub fn validate_legs(legs: &[ParlayLeg], config: &BettingConfig) -> Result<()> {
    if legs.is_empty() {
        return Err(ParlayError::EmptyParlay);
    }

    if legs.len() > config.max_legs {
        return Err(ParlayError::Validation(format!(
            "parlay has {} legs, maximum is {}",
            legs.len(),
            config.max_legs
        )));
    }

    let mut seen_games = HashSet::new();
    for leg in legs {
        validate_odds(leg.odds)?;

        // A parlay may carry at most one leg per game
        if !seen_games.insert(leg.game_id.as_str()) {
            return Err(ParlayError::Validation(format!(
                "parlay contains multiple legs on game {}",
                leg.game_id
            )));
        }
    }

    Ok(())
}

/// Validate a full bet slip before pricing it
pub fn validate_slip(slip: &BetSlip, config: &BettingConfig) -> Result<()> {
    validate_stake(slip.stake, config)?;
    validate_legs(&slip.legs, config)?;

    Ok(())
}
