use std::collections::VecDeque;

use crate::engine::DiceSource;

//
// NATIVE ВАРИАНТ (НЕ wasm32): кубики на rand.
//
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct SystemDice;

#[cfg(not(target_arch = "wasm32"))]
impl DiceSource for SystemDice {
    fn roll_die(&mut self) -> u8 {
        use rand::Rng;

        rand::thread_rng().gen_range(1..=6)
    }
}

/// Детерминированные кубики для тестов и реплея.
/// Одинаковый seed: одинаковая последовательность бросков.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct DeterministicDice {
    inner: rand::rngs::StdRng,
}

#[cfg(not(target_arch = "wasm32"))]
impl DeterministicDice {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DiceSource for DeterministicDice {
    fn roll_die(&mut self) -> u8 {
        use rand::Rng;
        self.inner.gen_range(1..=6)
    }
}

/// Заранее заданные значения кубиков (сценарии, реплей, wasm без rand).
///
/// Когда значения заканчиваются, отдаёт 1.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    values: VecDeque<u8>,
}

impl ScriptedDice {
    /// Пары бросков по порядку.
    pub fn from_rolls(rolls: &[(u8, u8)]) -> Self {
        Self {
            values: rolls.iter().flat_map(|&(a, b)| [a, b]).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        self.values.pop_front().unwrap_or(1)
    }
}
