//! Инфраструктурный слой вокруг движка стола:
//! - реализации кубиков для движка;
//! - загрузка конфига стола;
//! - маппинги между API и domain.

pub mod config;
pub mod mapping;
pub mod rng;

pub use config::*;
pub use mapping::*;
pub use rng::*;
