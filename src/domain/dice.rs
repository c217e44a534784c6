use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::number::Number;

/// Сколькими способами из 36 выпадает каждая сумма 2..=12.
pub const WAYS_TO_ROLL: [u32; 11] = [1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1];

/// Всего исходов у пары кубиков.
pub const TOTAL_OUTCOMES: u32 = 36;

/// Бросок двух кубиков. Значения всегда в 1..=6 (проверяется в `new`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DiceRoll {
    die1: u8,
    die2: u8,
}

impl DiceRoll {
    pub fn new(die1: u8, die2: u8) -> Result<Self, DomainError> {
        for die in [die1, die2] {
            if !(1..=6).contains(&die) {
                return Err(DomainError::InvalidDie(die));
            }
        }
        Ok(Self { die1, die2 })
    }

    pub fn dice(&self) -> (u8, u8) {
        (self.die1, self.die2)
    }

    pub fn total(&self) -> u8 {
        self.die1 + self.die2
    }

    pub fn is_seven(&self) -> bool {
        self.total() == 7
    }

    /// Сумма как пойнт/place-число (None для 7).
    pub fn number(&self) -> Option<Number> {
        Number::from_total(self.total())
    }

    /// Любой бросок с заданной суммой (для проекций, где важна только сумма).
    pub fn with_total(total: u8) -> Result<Self, DomainError> {
        if !(2..=12).contains(&total) {
            return Err(DomainError::InvalidNumber(total));
        }
        let die1 = total.saturating_sub(6).max(1);
        DiceRoll::new(die1, total - die1)
    }

    /// Все 36 упорядоченных пар (d1, d2).
    pub fn all() -> impl Iterator<Item = DiceRoll> {
        (1..=6u8).flat_map(|die1| (1..=6u8).map(move |die2| DiceRoll { die1, die2 }))
    }
}

/// Число способов выбросить сумму `total` (0 вне 2..=12).
pub fn ways_to_roll(total: u8) -> u32 {
    if (2..=12).contains(&total) {
        WAYS_TO_ROLL[(total - 2) as usize]
    } else {
        0
    }
}
