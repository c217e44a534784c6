use std::str::FromStr;

use clap::Parser;
use tracing::{error, Level};

use crapless_engine::domain::{BetKey, Chips, Number, TableConfig};
use crapless_engine::engine::{RoundEngine, SettlementOutcome};
use crapless_engine::infra::DeterministicDice;

/// Стресс-тест движка: много сессий, проверка сохранения денег после каждого броска.
#[derive(Parser, Debug)]
#[command(name = "crapless_stress_test")]
struct Args {
    /// Сколько независимых сессий (столов).
    #[arg(long, default_value_t = 32)]
    sessions: u64,

    /// Бросков на сессию.
    #[arg(long, default_value_t = 2_000)]
    rolls: u32,

    /// Базовый seed; сессия i использует seed + i.
    #[arg(long, default_value_t = 7)]
    seed: u64,

    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Итог одной сессии, который нам нужен для статистики.
#[derive(Default)]
struct SessionStats {
    rolls: u64,
    wins: u64,
    losses: u64,
    sevens: u64,
    total_won: u64,
    total_lost: u64,
    violations: u64,
}

fn main() {
    let args = Args::parse();
    let level = Level::from_str(&args.log_level).unwrap_or(Level::WARN);
    tracing_subscriber::fmt().with_max_level(level).init();

    println!("crapless_stress_test: стартуем стресс-тест движка…");

    let config = TableConfig {
        starting_bankroll: Chips(10_000),
        ..TableConfig::default()
    };

    let mut total = SessionStats::default();
    for i in 0..args.sessions {
        let mut engine = RoundEngine::new(config.clone());
        let mut dice = DeterministicDice::from_seed(args.seed.wrapping_add(i));
        let stats = play_session(&mut engine, &mut dice, args.rolls);

        total.rolls += stats.rolls;
        total.wins += stats.wins;
        total.losses += stats.losses;
        total.sevens += stats.sevens;
        total.total_won += stats.total_won;
        total.total_lost += stats.total_lost;
        total.violations += stats.violations;
    }

    println!();
    println!("=========== STRESS TEST SUMMARY ===========");
    println!("Сессий: {}, бросков: {}", args.sessions, total.rolls);
    println!("Win: {}, Loss: {}", total.wins, total.losses);
    if total.rolls > 0 {
        println!("Частота 7: {:.2}%", total.sevens as f64 / total.rolls as f64 * 100.0);
    }
    println!("Выиграно: {}, проиграно: {}", total.total_won, total.total_lost);
    println!("Нарушений сохранения денег: {}", total.violations);
    println!("===========================================");

    if total.violations > 0 {
        std::process::exit(1);
    }
}

/// Бот ставит pass line, максимальные odds и place на все числа кроме пойнта;
/// после каждого броска проверяем: bankroll + ставки == до броска + выигрыш − проигрыш.
fn play_session(engine: &mut RoundEngine, dice: &mut DeterministicDice, rolls: u32) -> SessionStats {
    let mut stats = SessionStats::default();

    for _ in 0..rolls {
        place_everything(engine);

        let before = engine.ledger().total_value();
        let result = match engine.roll(dice) {
            Ok(r) => r,
            // Кончились деньги на минимальную ставку.
            Err(_) => break,
        };
        let after = engine.ledger().total_value();

        let expected = match result.outcome {
            SettlementOutcome::Win => before + result.amount,
            SettlementOutcome::Loss => before.saturating_sub(result.amount),
            SettlementOutcome::Info | SettlementOutcome::Neutral => before,
        };
        if after != expected {
            error!(before = before.0, after = after.0, expected = expected.0, ?result, "нарушено сохранение денег");
            stats.violations += 1;
        }

        stats.rolls += 1;
        if result.roll.is_seven() {
            stats.sevens += 1;
        }
        match result.outcome {
            SettlementOutcome::Win => {
                stats.wins += 1;
                stats.total_won += result.amount.0;
            }
            SettlementOutcome::Loss => {
                stats.losses += 1;
                stats.total_lost += result.amount.0;
            }
            _ => {}
        }
    }

    stats
}

fn place_everything(engine: &mut RoundEngine) {
    let min_bet = engine.min_bet();
    match engine.point() {
        None => {
            if engine.bets().pass_line().is_zero() {
                let _ = engine.place_bet(BetKey::PassLine, min_bet);
            }
        }
        Some(point) => {
            let room = engine
                .bets()
                .pass_line()
                .times(2)
                .saturating_sub(engine.bets().odds());
            if !room.is_zero() {
                let _ = engine.place_bet(BetKey::Odds, room);
            }
            for n in Number::ALL {
                if n != point && engine.bets().place(n).is_zero() {
                    let _ = engine.place_bet(BetKey::Place(n), min_bet);
                }
            }
        }
    }
}
