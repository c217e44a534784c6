//! Движок правил crapless craps для одного стола и одного игрока.
//!
//! Слои:
//! - `domain`: числа, кубики, фишки, ставки, таблицы выплат, настройки стола;
//! - `engine`: банкролл и ставки, переходы come-out/пойнт, расчёт бросков, шансы, история;
//! - `api`: команды/запросы/DTO для UI-слоя;
//! - `infra`: кубики, конфиг, маппинги.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::{Command, CommandResponse, Query, QueryResponse};
pub use domain::{BetKey, Chips, Number, RoundState, TableConfig};
pub use engine::{EngineError, RoundEngine, SettlementOutcome, SettlementResult};
