use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Chips;
use crate::engine::RoundEngine;
use crate::infra::mapping::bet_key_from_api;

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_table_view;

/// Команда верхнего уровня: всё, что меняет состояние стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Поставить фишку на ставку.
    PlaceBet(PlaceBetCommand),

    /// Снять ставку целиком.
    RemoveBet(RemoveBetCommand),

    /// Снять все незащищённые ставки.
    ClearBets,

    /// Бросок с заданными кубиками (кубики бросает вызывающий код).
    Roll(RollCommand),

    /// Включить/выключить place-ставки.
    SetPlaceBetsWorking(SetPlaceBetsWorkingCommand),

    /// Полный сброс стола с новыми настройками.
    ResetTable(ResetTableCommand),
}

/// Поставить фишку `chip` на ставку `key`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceBetCommand {
    /// `passLine`, `odds`, `place2` .. `place12`.
    pub key: String,
    pub chip: Chips,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoveBetCommand {
    pub key: String,
}

/// Значения кубиков, 1..=6 каждое.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollCommand {
    pub die1: u8,
    pub die2: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetPlaceBetsWorkingCommand {
    pub working: bool,
}

/// Настройки из диалога «Restart».
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetTableCommand {
    pub bankroll: Chips,
    pub min_bet: Chips,
}

/// Выполнить команду над столом.
///
/// Roll сначала проходит предварительную проверку (минимальная pass line),
/// затем рассчитывается движком.
pub fn execute_command(engine: &mut RoundEngine, command: Command) -> Result<CommandResponse, ApiError> {
    debug!(?command, "команда");

    match command {
        Command::PlaceBet(cmd) => {
            let key = bet_key_from_api(&cmd.key)?;
            engine.place_bet(key, cmd.chip)?;
            Ok(CommandResponse::TableState(build_table_view(engine)))
        }

        Command::RemoveBet(cmd) => {
            let key = bet_key_from_api(&cmd.key)?;
            let refunded = engine.remove_bet(key)?;
            Ok(CommandResponse::Refunded(refunded))
        }

        Command::ClearBets => Ok(CommandResponse::Refunded(engine.clear_bets())),

        Command::Roll(cmd) => {
            engine.check_roll_allowed()?;
            let result = engine.resolve_roll(cmd.die1, cmd.die2)?;
            Ok(CommandResponse::Rolled {
                result,
                table: build_table_view(engine),
            })
        }

        Command::SetPlaceBetsWorking(cmd) => {
            engine.set_place_bets_working(cmd.working)?;
            Ok(CommandResponse::Ok)
        }

        Command::ResetTable(cmd) => {
            engine.reset_table(cmd.bankroll, cmd.min_bet)?;
            Ok(CommandResponse::TableState(build_table_view(engine)))
        }
    }
}

/// Разобрать команду из JSON (например, из скрипта dev-CLI).
pub fn parse_command(json: &str) -> Result<Command, ApiError> {
    Ok(serde_json::from_str(json)?)
}
