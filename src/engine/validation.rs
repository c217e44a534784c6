use crate::domain::{BetKey, BetTable, Chips, RoundState};
use crate::engine::errors::BetRejection;

/// Во сколько раз odds может превышать pass line.
pub const MAX_ODDS_MULTIPLE: u64 = 2;

/// Можно ли добавить фишку `chip` к ставке `key` при текущем состоянии стола.
pub fn validate_placement(
    bankroll: Chips,
    bets: &BetTable,
    key: BetKey,
    chip: Chips,
    state: &RoundState,
) -> Result<(), BetRejection> {
    if bankroll < chip {
        return Err(BetRejection::InsufficientBankroll {
            needed: chip,
            available: bankroll,
        });
    }

    match key {
        BetKey::PassLine => {
            if !state.is_come_out() {
                return Err(BetRejection::PassLineOnlyOnComeOut);
            }
            Ok(())
        }

        BetKey::Odds => {
            if !state.is_point_on() {
                return Err(BetRejection::OddsRequirePoint);
            }
            let pass_line = bets.pass_line();
            if pass_line.is_zero() {
                return Err(BetRejection::OddsRequirePassLine);
            }
            let limit = pass_line.times(MAX_ODDS_MULTIPLE);
            if bets.odds() + chip > limit {
                return Err(BetRejection::OddsExceedLimit { limit });
            }
            Ok(())
        }

        // Place-ставки принимаются в любой фазе.
        BetKey::Place(_) => Ok(()),
    }
}

/// Можно ли снять ставку `key`.
pub fn validate_removal(key: BetKey, state: &RoundState) -> Result<(), BetRejection> {
    if key == BetKey::PassLine && state.is_point_on() {
        return Err(BetRejection::PassLineLockedWhilePointOn);
    }
    Ok(())
}

/// Можно ли переключать working-флаг place-ставок.
pub fn validate_working_toggle(state: &RoundState) -> Result<(), BetRejection> {
    if !state.is_point_on() {
        return Err(BetRejection::PlaceBetsToggleOnlyWhilePointOn);
    }
    Ok(())
}

/// Предварительная проверка перед броском: на come-out нужна pass line не меньше минимума.
pub fn validate_roll(bets: &BetTable, state: &RoundState, min_bet: Chips) -> Result<(), BetRejection> {
    if state.is_come_out() && bets.pass_line() < min_bet {
        return Err(BetRejection::PassLineBelowMinimum { min_bet });
    }
    Ok(())
}
