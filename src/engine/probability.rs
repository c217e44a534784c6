use serde::{Deserialize, Serialize};

use crate::domain::{ways_to_roll, BetTable, DiceRoll, RoundState, TOTAL_OUTCOMES};
use crate::engine::settlement::plan_roll;

/// Шансы следующего броска в процентах (0..=100) и в исходах из 36.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Probabilities {
    pub win_pct: f64,
    pub loss_pct: f64,
    /// Исходов (из 36), дающих чистый выигрыш.
    pub winning_combinations: u32,
    /// Исходов (из 36), дающих чистый проигрыш.
    pub losing_combinations: u32,
}

impl Probabilities {
    fn from_counts(winning: u32, losing: u32) -> Self {
        let total = TOTAL_OUTCOMES as f64;
        Self {
            win_pct: winning as f64 / total * 100.0,
            loss_pct: losing as f64 / total * 100.0,
            winning_combinations: winning,
            losing_combinations: losing,
        }
    }
}

/// Оценить шансы выигрыша/проигрыша на следующем броске.
///
/// Для каждой суммы 2..=12 строится тот же план расчёта, что применит движок,
/// и берётся знак чистого результата. Ничего не мутирует.
pub fn estimate(bets: &BetTable, state: RoundState, place_bets_working: bool) -> Probabilities {
    if bets.is_empty() {
        return Probabilities::default();
    }

    let mut winning = 0;
    let mut losing = 0;

    for total in 2..=12u8 {
        let Ok(roll) = DiceRoll::with_total(total) else {
            continue;
        };
        // Флаг для нового пойнта на результат броска не влияет.
        let plan = plan_roll(bets, state, place_bets_working, false, roll);
        let ways = ways_to_roll(total);

        if plan.net_is_win() {
            winning += ways;
        } else if plan.net_is_loss() {
            losing += ways;
        }
    }

    Probabilities::from_counts(winning, losing)
}
