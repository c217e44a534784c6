use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{BetKey, Chips, DomainError};

/// Почему ставка/снятие/переключение отклонены.
///
/// Это нарушения правил игры и нехватка банкролла: игрок может исправиться,
/// состояние стола при отказе не меняется.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum BetRejection {
    #[error("Недостаточно средств: нужно {needed}, доступно {available}")]
    InsufficientBankroll { needed: Chips, available: Chips },

    #[error("Pass line можно ставить только на come-out")]
    PassLineOnlyOnComeOut,

    #[error("Odds можно ставить только при активном пойнте")]
    OddsRequirePoint,

    #[error("Для odds нужна ставка pass line")]
    OddsRequirePassLine,

    #[error("Odds не может превышать 2 × pass line ({limit})")]
    OddsExceedLimit { limit: Chips },

    #[error("Нельзя снять pass line при активном пойнте")]
    PassLineLockedWhilePointOn,

    #[error("Place-ставки можно включать/выключать только при активном пойнте")]
    PlaceBetsToggleOnlyWhilePointOn,

    #[error("Pass line должна быть не меньше {min_bet}")]
    PassLineBelowMinimum { min_bet: Chips },
}

/// Ошибки движка стола.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Нарушение правил: штатный отказ.
    #[error("{0}")]
    Rejected(#[from] BetRejection),

    /// Значения вне домена (кубик, число, ключ): ошибка вызывающего кода.
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Номинал фишки для ставки {0} должен быть положительным")]
    ZeroChipValue(BetKey),

    #[error("Некорректные настройки стола: {0}")]
    InvalidTableSettings(&'static str),
}

impl EngineError {
    /// true: отказ по правилам (можно показать игроку),
    /// false: ошибка программиста.
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, EngineError::Rejected(_))
    }

    /// Причина отказа, если это отказ по правилам.
    pub fn rejection(&self) -> Option<&BetRejection> {
        match self {
            EngineError::Rejected(r) => Some(r),
            _ => None,
        }
    }
}
