use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::errors::DomainError;
use crate::domain::number::Number;

/// Ключ ставки на столе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BetKey {
    /// Основная ставка 1:1, ставится только до пойнта.
    PassLine,
    /// Odds за pass line, только при активном пойнте, не больше 2 × pass line.
    Odds,
    /// Place-ставка на конкретное число.
    Place(Number),
}

impl fmt::Display for BetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetKey::PassLine => write!(f, "passLine"),
            BetKey::Odds => write!(f, "odds"),
            BetKey::Place(n) => write!(f, "place{}", n),
        }
    }
}

/// Разбор внешнего ключа: `passLine`, `odds`, `place6` и т.п. (регистр не важен).
impl FromStr for BetKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "passline" | "pass" => Ok(BetKey::PassLine),
            "odds" => Ok(BetKey::Odds),
            other => other
                .strip_prefix("place")
                .and_then(|rest| rest.parse::<u8>().ok())
                .and_then(Number::from_total)
                .map(BetKey::Place)
                .ok_or_else(|| DomainError::UnknownBetKey(s.to_string())),
        }
    }
}

/// Все ставки игрока на столе. Сумма 0 == ставки нет.
///
/// Фиксированная раскладка: по одной pass line, odds и place на каждое число.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetTable {
    pass_line: Chips,
    odds: Chips,
    place: [Chips; 10],
}

impl BetTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: BetKey) -> Chips {
        match key {
            BetKey::PassLine => self.pass_line,
            BetKey::Odds => self.odds,
            BetKey::Place(n) => self.place[n.index()],
        }
    }

    fn slot_mut(&mut self, key: BetKey) -> &mut Chips {
        match key {
            BetKey::PassLine => &mut self.pass_line,
            BetKey::Odds => &mut self.odds,
            BetKey::Place(n) => &mut self.place[n.index()],
        }
    }

    /// Добавить фишки к ставке (создаёт ставку, если её не было).
    pub fn add(&mut self, key: BetKey, amount: Chips) {
        *self.slot_mut(key) += amount;
    }

    /// Снять ставку целиком, вернуть её сумму.
    pub fn take(&mut self, key: BetKey) -> Chips {
        core::mem::take(self.slot_mut(key))
    }

    pub fn has(&self, key: BetKey) -> bool {
        !self.get(key).is_zero()
    }

    pub fn pass_line(&self) -> Chips {
        self.pass_line
    }

    pub fn odds(&self) -> Chips {
        self.odds
    }

    pub fn place(&self, number: Number) -> Chips {
        self.place[number.index()]
    }

    /// Ненулевые place-ставки по возрастанию числа.
    pub fn place_bets(&self) -> impl Iterator<Item = (Number, Chips)> + '_ {
        Number::ALL
            .iter()
            .map(move |&n| (n, self.place[n.index()]))
            .filter(|(_, amount)| !amount.is_zero())
    }

    /// Все ненулевые ставки: pass line, odds, затем place по возрастанию.
    pub fn iter(&self) -> impl Iterator<Item = (BetKey, Chips)> + '_ {
        [(BetKey::PassLine, self.pass_line), (BetKey::Odds, self.odds)]
            .into_iter()
            .filter(|(_, amount)| !amount.is_zero())
            .chain(self.place_bets().map(|(n, amount)| (BetKey::Place(n), amount)))
    }

    pub fn place_total(&self) -> Chips {
        self.place.iter().copied().sum()
    }

    pub fn total(&self) -> Chips {
        self.pass_line + self.odds + self.place_total()
    }

    pub fn is_empty(&self) -> bool {
        self.total().is_zero()
    }
}
