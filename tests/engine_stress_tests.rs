// tests/engine_stress_tests.rs
//
// Стресс-тесты: случайные последовательности действий игрока и бросков.
//
// 1) random_operations_keep_table_invariants (proptest)
//    - ставки / снятия / очистка / переключение working / броски в случайном порядке;
//    - после каждого шага проверяем сохранение денег и инварианты стола.
//
// 2) long_seeded_sessions_conserve_money
//    - несколько длинных сессий на DeterministicDice с агрессивным ботом.
//
// 3) same_seed_same_session
//    - одинаковый seed даёт одинаковую историю и банкролл.

use proptest::prelude::*;

use crapless_engine::domain::{BetKey, Chips, Number, RoundState, TableConfig};
use crapless_engine::engine::{RoundEngine, SettlementOutcome};
use crapless_engine::infra::DeterministicDice;

const BANKROLL: u64 = 500;

#[derive(Clone, Debug)]
enum Op {
    Place(BetKey, u64),
    Remove(BetKey),
    Clear,
    Toggle(bool),
    Roll(u8, u8),
}

fn arb_key() -> impl Strategy<Value = BetKey> {
    prop_oneof![
        Just(BetKey::PassLine),
        Just(BetKey::Odds),
        (0usize..10).prop_map(|i| BetKey::Place(Number::ALL[i])),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (arb_key(), 1u64..=25).prop_map(|(k, c)| Op::Place(k, c)),
        1 => arb_key().prop_map(Op::Remove),
        1 => Just(Op::Clear),
        1 => any::<bool>().prop_map(Op::Toggle),
        4 => (1u8..=6, 1u8..=6).prop_map(|(a, b)| Op::Roll(a, b)),
    ]
}

/// Инварианты, которые должны держаться между любыми двумя действиями.
fn check_invariants(e: &RoundEngine) -> Result<(), TestCaseError> {
    let bets = e.bets();

    prop_assert!(bets.odds() <= bets.pass_line().times(2), "odds > 2 × pass line");
    prop_assert_eq!(e.point(), e.state().point());

    if e.state() == RoundState::ComeOut {
        prop_assert!(bets.odds().is_zero(), "odds на come-out");
        prop_assert!(!e.place_bets_working(), "place-ставки работают на come-out");
    }
    prop_assert!(e.roll_history().len() <= e.history().capacity());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn random_operations_keep_table_invariants(ops in prop::collection::vec(arb_op(), 1..120)) {
        let mut e = RoundEngine::new(TableConfig {
            starting_bankroll: Chips(BANKROLL),
            ..TableConfig::default()
        });
        // Сумма всех выигрышей минус проигрышей.
        let mut net: i128 = 0;

        for op in ops {
            let before = e.ledger().total_value();

            match op {
                Op::Place(key, chip) => {
                    let _ = e.place_bet(key, Chips(chip));
                    prop_assert_eq!(e.ledger().total_value(), before);
                }
                Op::Remove(key) => {
                    let refunded = e.remove_bet(key);
                    prop_assert_eq!(e.ledger().total_value(), before);
                    if let Ok(r) = refunded {
                        prop_assert!(e.bets().get(key).is_zero());
                        prop_assert!(e.bankroll() >= r);
                    }
                }
                Op::Clear => {
                    e.clear_bets();
                    prop_assert_eq!(e.ledger().total_value(), before);
                }
                Op::Toggle(working) => {
                    let _ = e.set_place_bets_working(working);
                    prop_assert_eq!(e.ledger().total_value(), before);
                }
                Op::Roll(d1, d2) => {
                    let result = e.resolve_roll(d1, d2).unwrap();
                    let after = e.ledger().total_value();
                    match result.outcome {
                        SettlementOutcome::Win => {
                            prop_assert_eq!(after, before + result.amount);
                            net += result.amount.0 as i128;
                        }
                        SettlementOutcome::Loss => {
                            prop_assert_eq!(after + result.amount, before);
                            net -= result.amount.0 as i128;
                        }
                        SettlementOutcome::Info | SettlementOutcome::Neutral => {
                            prop_assert_eq!(after, before);
                            prop_assert_eq!(result.amount, Chips::ZERO);
                        }
                    }
                }
            }

            check_invariants(&e)?;
        }

        prop_assert_eq!(e.ledger().total_value().0 as i128, BANKROLL as i128 + net);
    }
}

/// Бот: pass line, полные odds, place на всё кроме пойнта.
fn bet_everything(e: &mut RoundEngine) {
    let min_bet = e.min_bet();
    match e.point() {
        None => {
            if e.bets().pass_line().is_zero() {
                let _ = e.place_bet(BetKey::PassLine, min_bet);
            }
        }
        Some(point) => {
            let room = e.bets().pass_line().times(2).saturating_sub(e.bets().odds());
            if !room.is_zero() {
                let _ = e.place_bet(BetKey::Odds, room);
            }
            for n in Number::ALL {
                if n != point && e.bets().place(n).is_zero() {
                    let _ = e.place_bet(BetKey::Place(n), Chips(6));
                }
            }
        }
    }
}

fn play(seed: u64, rolls: u32) -> RoundEngine {
    let mut e = RoundEngine::new(TableConfig {
        starting_bankroll: Chips(20_000),
        ..TableConfig::default()
    });
    let mut dice = DeterministicDice::from_seed(seed);

    for _ in 0..rolls {
        bet_everything(&mut e);
        let before = e.ledger().total_value();
        let Ok(result) = e.roll(&mut dice) else {
            break;
        };
        let after = e.ledger().total_value();
        match result.outcome {
            SettlementOutcome::Win => assert_eq!(after, before + result.amount),
            SettlementOutcome::Loss => assert_eq!(after + result.amount, before),
            _ => assert_eq!(after, before),
        }
    }
    e
}

#[test]
fn long_seeded_sessions_conserve_money() {
    for seed in 0..8 {
        let e = play(seed, 3_000);
        assert!(e.rolls_played() > 0);
        assert_eq!(e.roll_history().len(), 25usize.min(e.rolls_played() as usize));
    }
}

#[test]
fn same_seed_same_session() {
    let a = play(42, 500);
    let b = play(42, 500);

    assert_eq!(a.bankroll(), b.bankroll());
    assert_eq!(a.bets(), b.bets());
    assert_eq!(a.roll_history(), b.roll_history());
    assert_eq!(a.rolls_played(), b.rolls_played());
}
