use thiserror::Error;

/// Ошибки доменного уровня: входные значения вне допустимой области.
///
/// Это всегда ошибка вызывающего кода, а не действие игрока.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Число {0} не может быть ни пойнтом, ни place-числом")]
    InvalidNumber(u8),

    #[error("Значение кубика {0} вне диапазона 1..=6")]
    InvalidDie(u8),

    #[error("Неизвестный ключ ставки: {0}")]
    UnknownBetKey(String),
}
