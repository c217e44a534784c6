//! Таблицы выплат и точная (рациональная) арифметика выигрышей.
//!
//! Коэффициенты хранятся как числитель/знаменатель и не переводятся во float:
//! выигрыши за бросок складываются точно и округляются один раз, при зачислении.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::errors::DomainError;
use crate::domain::number::Number;

/// Коэффициент выплаты n:d (выигрыш на ставку d равен n).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Ratio {
    pub numerator: u64,
    pub denominator: u64,
}

impl Ratio {
    /// 1:1: pass line.
    pub const EVEN: Ratio = Ratio::new(1, 1);

    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Точный выигрыш на ставку `stake`.
    pub fn apply(self, stake: Chips) -> ExactChips {
        ExactChips::new(
            stake.0 as u128 * self.numerator as u128,
            self.denominator as u128,
        )
    }
}

/// Какая таблица выплат.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PayoutBook {
    /// Odds за pass line: истинные шансы.
    Odds,
    /// Place-ставки: фиксированные коэффициенты дома.
    Place,
}

impl Number {
    /// Истинные шансы для odds-ставки на этот пойнт.
    pub fn odds_payout(self) -> Ratio {
        match self {
            Number::Two | Number::Twelve => Ratio::new(6, 1),
            Number::Three | Number::Eleven => Ratio::new(3, 1),
            Number::Four | Number::Ten => Ratio::new(2, 1),
            Number::Five | Number::Nine => Ratio::new(3, 2),
            Number::Six | Number::Eight => Ratio::new(6, 5),
        }
    }

    /// Коэффициент place-ставки на это число.
    pub fn place_payout(self) -> Ratio {
        match self {
            Number::Two | Number::Twelve => Ratio::new(11, 2),
            Number::Three | Number::Eleven => Ratio::new(11, 4),
            Number::Four | Number::Ten => Ratio::new(9, 5),
            Number::Five | Number::Nine => Ratio::new(7, 5),
            Number::Six | Number::Eight => Ratio::new(7, 6),
        }
    }

    pub fn payout(self, book: PayoutBook) -> Ratio {
        match book {
            PayoutBook::Odds => self.odds_payout(),
            PayoutBook::Place => self.place_payout(),
        }
    }
}

/// Поиск коэффициента по «сырой» сумме. 7 и всё вне 2..=12: `InvalidNumber`.
pub fn payout(number: u8, book: PayoutBook) -> Result<Ratio, DomainError> {
    Number::try_from(number).map(|n| n.payout(book))
}

/// Точная сумма фишек в виде несократимой дроби.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ExactChips {
    numerator: u128,
    denominator: u128,
}

impl ExactChips {
    pub const ZERO: ExactChips = ExactChips {
        numerator: 0,
        denominator: 1,
    };

    fn new(numerator: u128, denominator: u128) -> Self {
        if denominator == 0 || numerator == 0 {
            return ExactChips::ZERO;
        }
        let g = gcd(numerator, denominator);
        Self {
            numerator: numerator / g,
            denominator: denominator / g,
        }
    }

    pub fn numerator(&self) -> u128 {
        self.numerator
    }

    pub fn denominator(&self) -> u128 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Округление вниз до целых фишек: единственная точка округления.
    pub fn floor(&self) -> Chips {
        let whole = self.numerator / self.denominator;
        Chips(u64::try_from(whole).unwrap_or(u64::MAX))
    }
}

impl Default for ExactChips {
    fn default() -> Self {
        ExactChips::ZERO
    }
}

impl From<Chips> for ExactChips {
    fn from(value: Chips) -> Self {
        ExactChips::new(value.0 as u128, 1)
    }
}

impl Add for ExactChips {
    type Output = ExactChips;

    fn add(self, rhs: ExactChips) -> Self::Output {
        let g = gcd(self.denominator, rhs.denominator);
        let lcm = self.denominator / g * rhs.denominator;
        let numerator = self.numerator * (lcm / self.denominator)
            + rhs.numerator * (lcm / rhs.denominator);
        ExactChips::new(numerator, lcm)
    }
}

impl AddAssign for ExactChips {
    fn add_assign(&mut self, rhs: ExactChips) {
        *self = *self + rhs;
    }
}

impl PartialOrd for ExactChips {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactChips {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.numerator * other.denominator).cmp(&(other.numerator * self.denominator))
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_are_exact_before_rounding() {
        // 1 × 7/6 + 1 × 6/5 = 71/30 ≈ 2.37 → 2, а не 1 + 1
        let sum = Number::Six.place_payout().apply(Chips(1))
            + Number::Six.odds_payout().apply(Chips(1));
        assert_eq!((sum.numerator(), sum.denominator()), (71, 30));
        assert_eq!(sum.floor(), Chips(2));
    }

    #[test]
    fn zero_stake_is_zero() {
        assert!(Ratio::new(7, 6).apply(Chips::ZERO).is_zero());
        assert_eq!(ExactChips::ZERO + ExactChips::ZERO, ExactChips::ZERO);
    }

    #[test]
    fn ordering_uses_cross_multiplication() {
        let a = Ratio::new(7, 6).apply(Chips(6)); // 7
        let b = ExactChips::from(Chips(7));
        let c = Ratio::new(3, 2).apply(Chips(5)); // 7.5
        assert_eq!(a, b);
        assert!(c > a);
    }
}
