use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_HISTORY_CAPACITY;
use crate::engine::settlement::SettlementOutcome;

/// Как бросок выглядел для игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RollOutcome {
    Win,
    Loss,
    Neutral,
}

impl From<SettlementOutcome> for RollOutcome {
    fn from(outcome: SettlementOutcome) -> Self {
        match outcome {
            SettlementOutcome::Win => RollOutcome::Win,
            SettlementOutcome::Loss => RollOutcome::Loss,
            SettlementOutcome::Info | SettlementOutcome::Neutral => RollOutcome::Neutral,
        }
    }
}

/// Запись в истории бросков.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollHistoryEntry {
    pub total: u8,
    pub outcome: RollOutcome,
}

/// Последние N бросков, старые вытесняются первыми.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollHistory {
    entries: VecDeque<RollHistoryEntry>,
    capacity: usize,
}

impl Default for RollHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl RollHistory {
    /// Ёмкость 0 трактуется как 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, total: u8, outcome: RollOutcome) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(RollHistoryEntry { total, outcome });
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// От старых к новым.
    pub fn iter(&self) -> impl Iterator<Item = &RollHistoryEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<RollHistoryEntry> {
        self.entries.iter().copied().collect()
    }

    /// Сколько раз выпала каждая сумма; индекс 0 = сумма 2.
    pub fn counts(&self) -> [u32; 11] {
        let mut counts = [0u32; 11];
        for e in &self.entries {
            if (2..=12).contains(&e.total) {
                counts[(e.total - 2) as usize] += 1;
            }
        }
        counts
    }

    /// Доля бросков с суммой `total` в процентах. 0 для пустой истории.
    pub fn frequency(&self, total: u8) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let hits = self.entries.iter().filter(|e| e.total == total).count();
        hits as f64 / self.entries.len() as f64 * 100.0
    }

    pub fn seven_frequency(&self) -> f64 {
        self.frequency(7)
    }
}
