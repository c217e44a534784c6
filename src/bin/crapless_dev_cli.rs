use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use tracing::{info, warn, Level};

use crapless_engine::api::{answer_query, execute_command, Command, Query, QueryResponse};
use crapless_engine::domain::{BetKey, Chips, Number, TableConfig};
use crapless_engine::engine::{EngineError, RoundEngine, SettlementOutcome};
use crapless_engine::infra::{load_table_config, DeterministicDice, SystemDice};

/// Dev-CLI стола crapless craps: бот-сессия или прогон JSON-скрипта команд.
#[derive(Parser, Debug)]
#[command(name = "crapless_dev_cli", about = "Crapless craps table in the terminal")]
struct Args {
    /// JSON-конфиг стола (TableConfig); по умолчанию: встроенные значения.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON-файл с массивом команд; без него играет бот.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Seed кубиков для бота; без него: системный RNG.
    #[arg(long)]
    seed: Option<u64>,

    /// Сколько бросков делает бот.
    #[arg(long, default_value_t = 50)]
    rolls: u32,

    /// Уровень логов: trace, debug, info, warn, error.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let level = Level::from_str(&args.log_level).unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = match &args.config {
        Some(path) => match load_table_config(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("[CLI] Ошибка конфига: {e}");
                std::process::exit(1);
            }
        },
        None => TableConfig::default(),
    };

    let mut engine = RoundEngine::new(config);
    info!(bankroll = engine.bankroll().0, min_bet = engine.min_bet().0, "стол открыт");

    if let Some(script) = &args.script {
        run_script(&mut engine, script);
    } else {
        match args.seed {
            Some(seed) => run_bot(&mut engine, &mut DeterministicDice::from_seed(seed), args.rolls),
            None => run_bot(&mut engine, &mut SystemDice, args.rolls),
        }
    }

    if let QueryResponse::Table(view) = answer_query(&engine, Query::GetTable) {
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("[CLI] Не удалось сериализовать стол: {e}"),
        }
    }
    println!("[CLI] Завершение работы dev-CLI.");
}

/// Выполнить команды из JSON-файла по порядку, печатая ответы.
fn run_script(engine: &mut RoundEngine, path: &PathBuf) {
    let raw = match std::fs::read_to_string(path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[CLI] Не удалось прочитать скрипт {}: {e}", path.display());
            return;
        }
    };
    let commands: Vec<Command> = match serde_json::from_str(&raw) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[CLI] Некорректный скрипт: {e}");
            return;
        }
    };

    for (idx, command) in commands.into_iter().enumerate() {
        match execute_command(engine, command) {
            Ok(response) => match serde_json::to_string(&response) {
                Ok(json) => println!("[{idx}] {json}"),
                Err(e) => eprintln!("[{idx}] сериализация ответа: {e}"),
            },
            Err(e) => println!("[{idx}] ОТКАЗ: {e:?}"),
        }
    }
}

/// Простейший бот:
/// - на come-out ставит pass line до минимума;
/// - при пойнте добирает odds до 2x и ставит place 6/8 (если это не пойнт).
fn run_bot<D: crapless_engine::engine::DiceSource>(engine: &mut RoundEngine, dice: &mut D, rolls: u32) {
    let mut wins = 0u32;
    let mut losses = 0u32;

    for n in 1..=rolls {
        if let Err(e) = place_bot_bets(engine) {
            warn!(error = %e, "бот не смог поставить");
        }

        match engine.roll(dice) {
            Ok(result) => {
                let (d1, d2) = result.roll.dice();
                println!(
                    "#{n:>3} [{d1}+{d2}={:>2}] {:<32} {:>6} | bankroll {} | win {:.2}% loss {:.2}%",
                    result.roll.total(),
                    result.text,
                    match result.outcome {
                        SettlementOutcome::Win => format!("+{}", result.amount),
                        SettlementOutcome::Loss => format!("-{}", result.amount),
                        _ => String::new(),
                    },
                    engine.bankroll(),
                    engine.probabilities().win_pct,
                    engine.probabilities().loss_pct,
                );
                match result.outcome {
                    SettlementOutcome::Win => wins += 1,
                    SettlementOutcome::Loss => losses += 1,
                    _ => {}
                }
            }
            Err(EngineError::Rejected(reason)) => {
                println!("[CLI] Бросок невозможен: {reason}. Сессия окончена.");
                break;
            }
            Err(e) => {
                eprintln!("[CLI] BUG: {e}");
                break;
            }
        }
    }

    println!();
    println!("=========== SESSION SUMMARY ===========");
    println!("Бросков: {}", engine.rolls_played());
    println!("Выигрышных: {wins}, проигрышных: {losses}");
    println!("Банкролл: {}, на столе: {}", engine.bankroll(), engine.total_outstanding());
    println!("Частота 7: {:.1}%", engine.history().seven_frequency());
    println!("=======================================");
}

fn place_bot_bets(engine: &mut RoundEngine) -> Result<(), EngineError> {
    let min_bet = engine.min_bet();
    let chip = smallest_chip(engine);

    match engine.point() {
        None => {
            while engine.bets().pass_line() < min_bet {
                engine.place_bet(BetKey::PassLine, chip)?;
            }
        }
        Some(point) => {
            let limit = engine.bets().pass_line().times(2);
            while engine.bets().odds() + chip <= limit {
                engine.place_bet(BetKey::Odds, chip)?;
            }
            for n in [Number::Six, Number::Eight] {
                if n != point && engine.bets().place(n).is_zero() {
                    engine.place_bet(BetKey::Place(n), min_bet)?;
                }
            }
        }
    }
    Ok(())
}

fn smallest_chip(engine: &RoundEngine) -> Chips {
    engine
        .config()
        .chip_values
        .iter()
        .copied()
        .min()
        .unwrap_or(Chips(1))
}
