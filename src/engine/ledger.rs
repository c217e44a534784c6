use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{BetKey, BetTable, Chips, RoundState};
use crate::engine::errors::EngineError;
use crate::engine::validation::{validate_placement, validate_removal};

/// Банкролл игрока + его ставки на столе.
///
/// Инвариант: `bankroll + bets.total()` меняется только при расчёте броска
/// или сбросе стола. Каждая операция меняет обе части сразу или не меняет ничего.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetLedger {
    bankroll: Chips,
    bets: BetTable,
}

impl BetLedger {
    pub fn new(bankroll: Chips) -> Self {
        Self {
            bankroll,
            bets: BetTable::new(),
        }
    }

    pub fn bankroll(&self) -> Chips {
        self.bankroll
    }

    pub fn bets(&self) -> &BetTable {
        &self.bets
    }

    pub fn amount(&self, key: BetKey) -> Chips {
        self.bets.get(key)
    }

    /// Сумма всех ставок на столе.
    pub fn total_outstanding(&self) -> Chips {
        self.bets.total()
    }

    /// Банкролл + всё, что лежит на столе.
    pub fn total_value(&self) -> Chips {
        self.bankroll + self.bets.total()
    }

    /// Поставить фишку `chip` на `key`.
    pub fn place_bet(&mut self, key: BetKey, chip: Chips, state: &RoundState) -> Result<(), EngineError> {
        if chip.is_zero() {
            return Err(EngineError::ZeroChipValue(key));
        }

        if let Err(reason) = validate_placement(self.bankroll, &self.bets, key, chip, state) {
            debug!(%key, chip = chip.0, %reason, "ставка отклонена");
            return Err(reason.into());
        }

        self.bankroll -= chip;
        self.bets.add(key, chip);
        debug!(%key, chip = chip.0, amount = self.bets.get(key).0, bankroll = self.bankroll.0, "ставка принята");
        Ok(())
    }

    /// Снять ставку целиком и вернуть её в банкролл.
    ///
    /// Если ставки нет: Ok(0).
    pub fn remove_bet(&mut self, key: BetKey, state: &RoundState) -> Result<Chips, EngineError> {
        if let Err(reason) = validate_removal(key, state) {
            debug!(%key, %reason, "снятие отклонено");
            return Err(reason.into());
        }

        let refunded = self.bets.take(key);
        self.bankroll += refunded;
        if !refunded.is_zero() {
            debug!(%key, refunded = refunded.0, bankroll = self.bankroll.0, "ставка снята");
        }
        Ok(refunded)
    }

    /// Вернуть все незащищённые ставки.
    ///
    /// При пойнте pass line и odds остаются на столе; на come-out снимается всё.
    pub fn clear_non_protected(&mut self, state: &RoundState) -> Chips {
        let mut refunded = Chips::ZERO;
        let keys: Vec<BetKey> = self.bets.iter().map(|(key, _)| key).collect();

        for key in keys {
            let protected = state.is_point_on() && matches!(key, BetKey::PassLine | BetKey::Odds);
            if !protected {
                refunded += self.bets.take(key);
            }
        }

        self.bankroll += refunded;
        if !refunded.is_zero() {
            debug!(refunded = refunded.0, bankroll = self.bankroll.0, "ставки сняты со стола");
        }
        refunded
    }

    /// Зафиксировать результат расчёта броска одним присваиванием.
    pub(crate) fn commit(&mut self, bankroll: Chips, bets: BetTable) {
        self.bankroll = bankroll;
        self.bets = bets;
    }

    /// Новый банкролл, пустой стол.
    pub(crate) fn reset(&mut self, bankroll: Chips) {
        self.bankroll = bankroll;
        self.bets = BetTable::new();
    }
}
