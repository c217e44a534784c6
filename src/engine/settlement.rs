//! Правила расчёта одного броска.
//!
//! `plan_roll` ничего не мутирует: по ставкам, фазе и броску он строит
//! `SettlementPlan`: полное состояние после броска. Движок применяет план
//! целиком, оценщик вероятностей смотрит только на его знак. Это единственное
//! место, где живут правила выплат.

use serde::{Deserialize, Serialize};

use crate::domain::{BetKey, BetTable, Chips, DiceRoll, ExactChips, Number, Ratio, RoundState};

/// Тип результата броска.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SettlementOutcome {
    Win,
    Loss,
    /// Информационное событие без денег (установлен пойнт).
    Info,
    /// Бросок без решения по ставкам.
    Neutral,
}

/// Перенос place-ставки с нового пойнта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Relocation {
    /// Ставка перенесена на свободное число.
    Moved { from: Number, to: Number, amount: Chips },
    /// Все числа заняты: ставка вернулась в банкролл.
    Returned { from: Number, amount: Chips },
}

/// Полный результат броска до применения к столу.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementPlan {
    pub roll: DiceRoll,
    pub next_state: RoundState,
    pub next_bets: BetTable,
    /// Working-флаг place-ставок после броска.
    pub next_place_bets_working: bool,
    /// Ставки, вернувшиеся в банкролл без выигрыша/проигрыша.
    pub returned: Chips,
    /// Точный выигрыш за бросок (без ставок).
    pub won: ExactChips,
    /// Проигранные ставки.
    pub lost: Chips,
    pub outcome: SettlementOutcome,
    pub text: String,
    pub relocation: Option<Relocation>,
}

impl SettlementPlan {
    fn unchanged(roll: DiceRoll, state: RoundState, bets: &BetTable, working: bool) -> Self {
        Self {
            roll,
            next_state: state,
            next_bets: bets.clone(),
            next_place_bets_working: working,
            returned: Chips::ZERO,
            won: ExactChips::ZERO,
            lost: Chips::ZERO,
            outcome: SettlementOutcome::Neutral,
            text: format!("Rolled {}", roll.total()),
            relocation: None,
        }
    }

    /// Выигрыш в целых фишках: точная сумма, округлённая вниз один раз.
    pub fn won_chips(&self) -> Chips {
        self.won.floor()
    }

    /// Сколько фишек уходит в банкролл.
    pub fn credit(&self) -> Chips {
        self.returned + self.won_chips()
    }

    /// Сумма для отчёта: выигрыш для Win, проигрыш для Loss, иначе 0.
    pub fn amount(&self) -> Chips {
        match self.outcome {
            SettlementOutcome::Win => self.won_chips(),
            SettlementOutcome::Loss => self.lost,
            SettlementOutcome::Info | SettlementOutcome::Neutral => Chips::ZERO,
        }
    }

    /// Знак чистого результата: > 0 выигрыш, < 0 проигрыш.
    pub fn net_is_win(&self) -> bool {
        self.won > ExactChips::from(self.lost)
    }

    pub fn net_is_loss(&self) -> bool {
        ExactChips::from(self.lost) > self.won
    }
}

/// Рассчитать бросок `roll` для ставок `bets` в фазе `state`.
///
/// `working`: работают ли place-ставки сейчас; `working_on_point`: какое
/// значение флаг получает при установке нового пойнта.
pub fn plan_roll(
    bets: &BetTable,
    state: RoundState,
    working: bool,
    working_on_point: bool,
    roll: DiceRoll,
) -> SettlementPlan {
    match state {
        RoundState::ComeOut => plan_come_out(bets, roll, working_on_point),
        RoundState::PointOn { point } => plan_point_on(bets, point, working, roll),
    }
}

fn plan_come_out(bets: &BetTable, roll: DiceRoll, working_on_point: bool) -> SettlementPlan {
    let mut plan = SettlementPlan::unchanged(roll, RoundState::ComeOut, bets, false);

    let Some(point) = roll.number() else {
        // 7 на come-out: pass line выигрывает 1:1, пойнт не ставится.
        let stake = plan.next_bets.take(BetKey::PassLine);
        plan.won = Ratio::EVEN.apply(stake);
        plan.returned = stake;
        plan.outcome = SettlementOutcome::Win;
        plan.text = "Winner 7!".to_string();
        return plan;
    };

    plan.next_state = RoundState::PointOn { point };
    plan.next_place_bets_working = working_on_point;
    plan.outcome = SettlementOutcome::Info;
    plan.text = format!("Point is {point}");

    let on_point = plan.next_bets.take(BetKey::Place(point));
    if !on_point.is_zero() {
        let target = Number::RELOCATION_PRIORITY
            .iter()
            .copied()
            .find(|&n| n != point && !plan.next_bets.has(BetKey::Place(n)));

        match target {
            Some(to) => {
                plan.next_bets.add(BetKey::Place(to), on_point);
                plan.relocation = Some(Relocation::Moved {
                    from: point,
                    to,
                    amount: on_point,
                });
                plan.text.push_str(&format!(". Bet moved to {to}."));
            }
            None => {
                plan.returned = on_point;
                plan.relocation = Some(Relocation::Returned {
                    from: point,
                    amount: on_point,
                });
                plan.text.push_str(". Bet returned.");
            }
        }
    }

    plan
}

fn plan_point_on(bets: &BetTable, point: Number, working: bool, roll: DiceRoll) -> SettlementPlan {
    let state = RoundState::PointOn { point };
    let mut plan = SettlementPlan::unchanged(roll, state, bets, working);

    if roll.is_seven() {
        // Seven-out: pass line и odds проиграны, place: проиграны если работают, иначе возвращаются.
        let mut lost = plan.next_bets.take(BetKey::PassLine) + plan.next_bets.take(BetKey::Odds);
        let place_total = plan.next_bets.place_total();
        if working {
            lost += place_total;
        } else {
            plan.returned = place_total;
        }

        plan.next_bets = BetTable::new();
        plan.next_state = RoundState::ComeOut;
        plan.next_place_bets_working = false;
        plan.lost = lost;
        plan.outcome = SettlementOutcome::Loss;
        plan.text = "Seven Out".to_string();
        return plan;
    }

    let Some(number) = roll.number() else {
        return plan;
    };

    if number == point {
        let pass_line = plan.next_bets.take(BetKey::PassLine);
        let odds = plan.next_bets.take(BetKey::Odds);

        let mut won = Ratio::EVEN.apply(pass_line) + point.odds_payout().apply(odds);
        if working {
            // Place на пойнте выигрывает отдельно и остаётся на столе.
            won += point.place_payout().apply(bets.place(point));
        }

        plan.won = won;
        plan.returned = pass_line + odds;
        plan.next_state = RoundState::ComeOut;
        plan.next_place_bets_working = false;
        plan.outcome = SettlementOutcome::Win;
        plan.text = "Point Hit!".to_string();
        return plan;
    }

    let stake = bets.place(number);
    if working && !stake.is_zero() {
        plan.won = number.place_payout().apply(stake);
        plan.outcome = SettlementOutcome::Win;
        plan.text = format!("Place {number} Wins");
    }

    plan
}
