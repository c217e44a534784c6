use serde::{Deserialize, Serialize};

use crate::engine::{Probabilities, RollHistoryEntry, RoundEngine};
use crate::infra::mapping::{bet_dtos, payout_table};

use super::dto::{PayoutRowDto, TableViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Полное состояние стола.
    GetTable,

    /// Шансы выигрыша/проигрыша следующего броска.
    GetProbabilities,

    /// Последние броски, от старых к новым.
    GetRollHistory,

    /// Таблица выплат odds/place.
    GetPayoutTable,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Table(TableViewDto),
    Probabilities(Probabilities),
    RollHistory(Vec<RollHistoryEntry>),
    PayoutTable(Vec<PayoutRowDto>),
}

pub fn answer_query(engine: &RoundEngine, query: Query) -> QueryResponse {
    match query {
        Query::GetTable => QueryResponse::Table(build_table_view(engine)),
        Query::GetProbabilities => QueryResponse::Probabilities(engine.probabilities()),
        Query::GetRollHistory => QueryResponse::RollHistory(engine.roll_history()),
        Query::GetPayoutTable => QueryResponse::PayoutTable(payout_table()),
    }
}

/// Сформировать DTO стола по текущему состоянию движка.
pub fn build_table_view(engine: &RoundEngine) -> TableViewDto {
    let state = engine.state();

    TableViewDto {
        bankroll: engine.bankroll(),
        min_bet: engine.min_bet(),
        chip_values: engine.config().chip_values.clone(),
        state,
        state_label: state.to_string(),
        point: state.point().map(|p| p.value()),
        place_bets_working: engine.place_bets_working(),
        bets: bet_dtos(engine.bets()),
        total_outstanding: engine.total_outstanding(),
        probabilities: engine.probabilities(),
        roll_history: engine.roll_history(),
        seven_frequency: engine.history().seven_frequency(),
        last_roll: engine.last_roll().map(|r| r.dice()),
    }
}
