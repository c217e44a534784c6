//! Движок crapless craps: ставки, переходы come-out/пойнт, расчёт бросков, шансы.
//!
//! Высокоуровневый объект: `RoundEngine`
//! Основные операции:
//!   - `place_bet` / `remove_bet` / `clear_bets` – работа со ставками
//!   - `resolve_roll` – расчёт броска и переход фаз
//!   - `probabilities` – шансы следующего броска

pub mod errors;
pub mod ledger;
pub mod probability;
pub mod roll_history;
pub mod round;
pub mod settlement;
pub mod validation;

pub use errors::{BetRejection, EngineError};
pub use ledger::BetLedger;
pub use probability::{estimate, Probabilities};
pub use roll_history::{RollHistory, RollHistoryEntry, RollOutcome};
pub use round::{RoundEngine, SettlementResult};
pub use settlement::{plan_roll, Relocation, SettlementOutcome, SettlementPlan};

/// Источник значений кубиков для движка.
///
/// Движок считает кубики честными и независимыми; реализации: в infra.
pub trait DiceSource {
    /// Одно значение в 1..=6.
    fn roll_die(&mut self) -> u8;

    fn roll_pair(&mut self) -> (u8, u8) {
        let die1 = self.roll_die();
        let die2 = self.roll_die();
        (die1, die2)
    }
}
