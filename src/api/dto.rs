use serde::{Deserialize, Serialize};

use crate::domain::{BetKey, Chips, Ratio, RoundState};
use crate::engine::{Probabilities, RollHistoryEntry, SettlementResult};

/// DTO одной ставки на столе.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetDto {
    pub key: BetKey,
    /// Внешний ключ (`passLine`, `odds`, `place6`).
    pub label: String,
    pub amount: Chips,
}

/// DTO стола: всё, что нужно фронту для отрисовки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TableViewDto {
    pub bankroll: Chips,
    pub min_bet: Chips,
    pub chip_values: Vec<Chips>,
    pub state: RoundState,
    /// "COME_OUT" / "POINT_ON".
    pub state_label: String,
    pub point: Option<u8>,
    pub place_bets_working: bool,
    pub bets: Vec<BetDto>,
    pub total_outstanding: Chips,
    pub probabilities: Probabilities,
    /// От старых к новым.
    pub roll_history: Vec<RollHistoryEntry>,
    /// Доля семёрок в истории, %.
    pub seven_frequency: f64,
    pub last_roll: Option<(u8, u8)>,
}

/// Строка таблицы выплат.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoutRowDto {
    pub number: u8,
    pub odds: Ratio,
    pub place: Ratio,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,

    /// Фишки вернулись в банкролл (снятие/очистка ставок).
    Refunded(Chips),

    /// Бросок рассчитан.
    Rolled {
        result: SettlementResult,
        table: TableViewDto,
    },

    /// Вернуть обновлённое состояние стола.
    TableState(TableViewDto),
}
