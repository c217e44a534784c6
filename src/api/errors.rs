use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::engine::{BetRejection, EngineError};

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Действие запрещено правилами стола: показываем игроку.
    Rejected(BetRejection),

    /// Значения вне домена: ошибка клиента, а не игрока.
    InvalidInput(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Rejected(reason) => ApiError::Rejected(reason),
            other => ApiError::InvalidInput(other.to_string()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
