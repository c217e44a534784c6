use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Сумма двух кубиков, которая может стать пойнтом или place-числом.
///
/// В crapless craps это все суммы 2..=12, кроме 7.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Number {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Eleven = 11,
    Twelve = 12,
}

impl Number {
    /// Все числа по возрастанию. Индекс в этом массиве = индекс place-ставки.
    pub const ALL: [Number; 10] = [
        Number::Two,
        Number::Three,
        Number::Four,
        Number::Five,
        Number::Six,
        Number::Eight,
        Number::Nine,
        Number::Ten,
        Number::Eleven,
        Number::Twelve,
    ];

    /// Порядок поиска свободного числа при переносе place-ставки с нового пойнта.
    pub const RELOCATION_PRIORITY: [Number; 10] = [
        Number::Six,
        Number::Eight,
        Number::Five,
        Number::Nine,
        Number::Four,
        Number::Ten,
        Number::Three,
        Number::Eleven,
        Number::Two,
        Number::Twelve,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Позиция числа в `Number::ALL`.
    pub fn index(self) -> usize {
        match self {
            Number::Two => 0,
            Number::Three => 1,
            Number::Four => 2,
            Number::Five => 3,
            Number::Six => 4,
            Number::Eight => 5,
            Number::Nine => 6,
            Number::Ten => 7,
            Number::Eleven => 8,
            Number::Twelve => 9,
        }
    }

    /// Сумма броска -> число; None для 7 и всего вне 2..=12.
    pub fn from_total(total: u8) -> Option<Number> {
        Number::try_from(total).ok()
    }
}

impl TryFrom<u8> for Number {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Number::Two),
            3 => Ok(Number::Three),
            4 => Ok(Number::Four),
            5 => Ok(Number::Five),
            6 => Ok(Number::Six),
            8 => Ok(Number::Eight),
            9 => Ok(Number::Nine),
            10 => Ok(Number::Ten),
            11 => Ok(Number::Eleven),
            12 => Ok(Number::Twelve),
            other => Err(DomainError::InvalidNumber(other)),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
