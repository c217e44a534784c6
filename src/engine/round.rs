use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{BetKey, BetTable, Chips, DiceRoll, Number, RoundState, TableConfig};
use crate::engine::errors::EngineError;
use crate::engine::ledger::BetLedger;
use crate::engine::probability::{estimate, Probabilities};
use crate::engine::roll_history::{RollHistory, RollHistoryEntry, RollOutcome};
use crate::engine::settlement::{plan_roll, Relocation, SettlementOutcome, SettlementPlan};
use crate::engine::validation::{validate_roll, validate_working_toggle};
use crate::engine::DiceSource;

/// Итог броска для внешнего кода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementResult {
    pub roll: DiceRoll,
    pub text: String,
    /// Выигрыш (Win) или проигрыш (Loss) в целых фишках; 0 для Info/Neutral.
    pub amount: Chips,
    pub outcome: SettlementOutcome,
    /// Что случилось с place-ставкой на новом пойнте, если она была.
    pub relocation: Option<Relocation>,
}

impl SettlementResult {
    fn from_plan(plan: &SettlementPlan) -> Self {
        Self {
            roll: plan.roll,
            text: plan.text.clone(),
            amount: plan.amount(),
            outcome: plan.outcome,
            relocation: plan.relocation,
        }
    }
}

/// Один стол crapless craps с одним игроком.
///
/// Владеет банкроллом, ставками, фазой раунда и историей бросков.
/// Фазу меняет только `resolve_roll`. Вызовы должны идти последовательно:
/// пока бросок «в полёте» (анимация у вызывающего), ставки трогать нельзя.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    config: TableConfig,
    ledger: BetLedger,
    state: RoundState,
    place_bets_working: bool,
    history: RollHistory,
    last_roll: Option<DiceRoll>,
    rolls_played: u64,
}

impl RoundEngine {
    /// Новый стол на `config.starting_bankroll`.
    pub fn new(config: TableConfig) -> Self {
        Self {
            ledger: BetLedger::new(config.starting_bankroll),
            history: RollHistory::new(config.history_capacity),
            state: RoundState::ComeOut,
            place_bets_working: false,
            last_roll: None,
            rolls_played: 0,
            config,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn point(&self) -> Option<Number> {
        self.state.point()
    }

    pub fn bankroll(&self) -> Chips {
        self.ledger.bankroll()
    }

    pub fn min_bet(&self) -> Chips {
        self.config.min_bet
    }

    pub fn ledger(&self) -> &BetLedger {
        &self.ledger
    }

    pub fn bets(&self) -> &BetTable {
        self.ledger.bets()
    }

    pub fn total_outstanding(&self) -> Chips {
        self.ledger.total_outstanding()
    }

    pub fn place_bets_working(&self) -> bool {
        self.place_bets_working
    }

    pub fn history(&self) -> &RollHistory {
        &self.history
    }

    pub fn last_roll(&self) -> Option<DiceRoll> {
        self.last_roll
    }

    pub fn rolls_played(&self) -> u64 {
        self.rolls_played
    }

    // ---------- ставки ----------

    pub fn place_bet(&mut self, key: BetKey, chip: Chips) -> Result<(), EngineError> {
        self.ledger.place_bet(key, chip, &self.state)
    }

    /// Снять ставку; возвращает сумму, ушедшую в банкролл.
    pub fn remove_bet(&mut self, key: BetKey) -> Result<Chips, EngineError> {
        self.ledger.remove_bet(key, &self.state)
    }

    /// Снять всё, что можно снять в текущей фазе.
    pub fn clear_bets(&mut self) -> Chips {
        self.ledger.clear_non_protected(&self.state)
    }

    /// Включить/выключить place-ставки. Только при активном пойнте.
    pub fn set_place_bets_working(&mut self, working: bool) -> Result<(), EngineError> {
        validate_working_toggle(&self.state)?;
        self.place_bets_working = working;
        debug!(working, "place-ставки переключены");
        Ok(())
    }

    // ---------- бросок ----------

    /// Предварительная проверка перед броском (минимальная pass line на come-out).
    pub fn check_roll_allowed(&self) -> Result<(), EngineError> {
        validate_roll(self.ledger.bets(), &self.state, self.config.min_bet)?;
        Ok(())
    }

    /// Проверить допустимость, бросить кубики и рассчитать бросок.
    pub fn roll<D: DiceSource>(&mut self, dice: &mut D) -> Result<SettlementResult, EngineError> {
        self.check_roll_allowed()?;
        let (die1, die2) = dice.roll_pair();
        self.resolve_roll(die1, die2)
    }

    /// Рассчитать бросок (die1, die2) и применить результат.
    ///
    /// Сначала строится полный план, потом он применяется целиком:
    /// при ошибке ничего не меняется.
    pub fn resolve_roll(&mut self, die1: u8, die2: u8) -> Result<SettlementResult, EngineError> {
        let roll = DiceRoll::new(die1, die2)?;
        let plan = plan_roll(
            self.ledger.bets(),
            self.state,
            self.place_bets_working,
            self.config.place_bets_working_on_point,
            roll,
        );
        let result = SettlementResult::from_plan(&plan);

        log_transition(self.state, &plan);

        let bankroll = self.ledger.bankroll() + plan.credit();
        self.ledger.commit(bankroll, plan.next_bets);
        self.state = plan.next_state;
        self.place_bets_working = plan.next_place_bets_working;
        self.history.push(roll.total(), RollOutcome::from(plan.outcome));
        self.last_roll = Some(roll);
        self.rolls_played += 1;

        Ok(result)
    }

    // ---------- запросы ----------

    pub fn probabilities(&self) -> Probabilities {
        estimate(self.ledger.bets(), self.state, self.place_bets_working)
    }

    /// История от старых к новым.
    pub fn roll_history(&self) -> Vec<RollHistoryEntry> {
        self.history.to_vec()
    }

    // ---------- сброс ----------

    /// Полный сброс стола: новый банкролл и минимум, ставки и история очищаются.
    pub fn reset_table(&mut self, new_bankroll: Chips, new_min_bet: Chips) -> Result<(), EngineError> {
        if new_min_bet.is_zero() {
            return Err(EngineError::InvalidTableSettings("min_bet должен быть положительным"));
        }

        self.config.min_bet = new_min_bet;
        self.ledger.reset(new_bankroll);
        self.state = RoundState::ComeOut;
        self.place_bets_working = false;
        self.history.clear();
        self.last_roll = None;

        info!(bankroll = new_bankroll.0, min_bet = new_min_bet.0, "стол сброшен");
        Ok(())
    }
}

fn log_transition(before: RoundState, plan: &SettlementPlan) {
    let total = plan.roll.total();
    match (before, plan.next_state) {
        (RoundState::ComeOut, RoundState::PointOn { point }) => {
            info!(point = point.value(), relocation = ?plan.relocation, "пойнт установлен");
        }
        (RoundState::PointOn { point }, RoundState::ComeOut) => {
            if plan.outcome == SettlementOutcome::Loss {
                info!(point = point.value(), lost = plan.lost.0, "seven-out");
            } else {
                info!(point = point.value(), won = plan.won_chips().0, "пойнт выигран");
            }
        }
        _ => {
            debug!(total, outcome = ?plan.outcome, won = plan.won_chips().0, "бросок рассчитан");
        }
    }
}
