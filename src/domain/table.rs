use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::number::Number;

/// Фаза раунда. Пойнт есть ровно тогда, когда фаза `PointOn`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Первый бросок раунда, пойнта ещё нет.
    #[default]
    ComeOut,
    /// Пойнт установлен.
    PointOn { point: Number },
}

impl RoundState {
    pub fn point(&self) -> Option<Number> {
        match self {
            RoundState::ComeOut => None,
            RoundState::PointOn { point } => Some(*point),
        }
    }

    pub fn is_come_out(&self) -> bool {
        matches!(self, RoundState::ComeOut)
    }

    pub fn is_point_on(&self) -> bool {
        matches!(self, RoundState::PointOn { .. })
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundState::ComeOut => write!(f, "COME_OUT"),
            RoundState::PointOn { .. } => write!(f, "POINT_ON"),
        }
    }
}

/// Ёмкость истории бросков по умолчанию.
pub const DEFAULT_HISTORY_CAPACITY: usize = 25;

/// Настройки стола.
///
/// Все поля имеют значения по умолчанию, поэтому JSON-конфиг может
/// задавать только то, что отличается.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Банкролл при старте и при сбросе стола без явной суммы.
    pub starting_bankroll: Chips,
    /// Минимальная pass line перед броском на come-out.
    pub min_bet: Chips,
    /// Номиналы фишек, которые предлагаются игроку.
    pub chip_values: Vec<Chips>,
    /// Сколько последних бросков хранить.
    pub history_capacity: usize,
    /// Включаются ли place-ставки автоматически, когда устанавливается пойнт.
    pub place_bets_working_on_point: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_bankroll: Chips(100),
            min_bet: Chips(5),
            chip_values: [1, 5, 10, 25, 100].into_iter().map(Chips).collect(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            place_bets_working_on_point: true,
        }
    }
}

impl TableConfig {
    /// Проверка согласованности настроек. Ошибка: строка с причиной.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.min_bet.is_zero() {
            return Err("min_bet должен быть положительным");
        }
        if self.history_capacity == 0 {
            return Err("history_capacity должен быть положительным");
        }
        if self.chip_values.is_empty() {
            return Err("нужен хотя бы один номинал фишки");
        }
        if self.chip_values.iter().any(Chips::is_zero) {
            return Err("номинал фишки не может быть нулевым");
        }
        Ok(())
    }
}
