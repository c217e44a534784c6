use crate::api::dto::{BetDto, PayoutRowDto};
use crate::domain::{BetKey, BetTable, DomainError, Number};

/// Маппинг внешнего ключа ставки (`passLine`, `odds`, `place6`) в domain.
pub fn bet_key_from_api(raw: &str) -> Result<BetKey, DomainError> {
    raw.parse()
}

pub fn bet_key_to_api(key: BetKey) -> String {
    key.to_string()
}

/// Ненулевые ставки стола в виде DTO.
pub fn bet_dtos(bets: &BetTable) -> Vec<BetDto> {
    bets.iter()
        .map(|(key, amount)| BetDto {
            key,
            label: bet_key_to_api(key),
            amount,
        })
        .collect()
}

/// Таблица выплат для отображения (по возрастанию числа).
pub fn payout_table() -> Vec<PayoutRowDto> {
    Number::ALL
        .iter()
        .map(|&n| PayoutRowDto {
            number: n.value(),
            odds: n.odds_payout(),
            place: n.place_payout(),
        })
        .collect()
}
