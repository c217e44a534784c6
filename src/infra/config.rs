use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::TableConfig;

/// Ошибки загрузки конфига стола.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Некорректный JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Некорректный конфиг: {0}")]
    Invalid(&'static str),
}

/// Разобрать конфиг из JSON-строки и проверить его.
pub fn parse_table_config(json: &str) -> Result<TableConfig, ConfigError> {
    let config: TableConfig = serde_json::from_str(json)?;
    config.validate().map_err(ConfigError::Invalid)?;
    Ok(config)
}

/// Прочитать конфиг стола из JSON-файла.
pub fn load_table_config(path: impl AsRef<Path>) -> Result<TableConfig, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table_config(&raw)
}
