// tests/infra_test.rs

use std::fs;

use crapless_engine::{
    domain::{BetKey, BetTable, Chips, DomainError, Number, TableConfig},
    infra::{
        config::{load_table_config, parse_table_config, ConfigError},
        mapping::{bet_dtos, bet_key_from_api, bet_key_to_api, payout_table},
    },
};

//
// config.rs
//
#[test]
fn partial_config_falls_back_to_defaults() {
    let c = parse_table_config(r#"{ "min_bet": 10, "place_bets_working_on_point": false }"#).unwrap();
    assert_eq!(c.min_bet, Chips(10));
    assert!(!c.place_bets_working_on_point);
    assert_eq!(c.starting_bankroll, Chips(100));
    assert_eq!(c.history_capacity, 25);
}

#[test]
fn empty_object_is_default_config() {
    let c = parse_table_config("{}").unwrap();
    assert_eq!(c, TableConfig::default());
}

#[test]
fn invalid_config_is_rejected() {
    assert!(matches!(parse_table_config(r#"{ "min_bet": 0 }"#), Err(ConfigError::Invalid(_))));
    assert!(matches!(parse_table_config(r#"{ "chip_values": [] }"#), Err(ConfigError::Invalid(_))));
    assert!(matches!(parse_table_config(r#"{ "chip_values": [5, 0] }"#), Err(ConfigError::Invalid(_))));
    assert!(matches!(parse_table_config(r#"{ "min_bet": "five" }"#), Err(ConfigError::Parse(_))));
}

#[test]
fn config_loads_from_file() {
    let path = std::env::temp_dir().join(format!("crapless_config_{}.json", std::process::id()));
    fs::write(&path, r#"{ "starting_bankroll": 1000, "chip_values": [5, 25] }"#).unwrap();

    let c = load_table_config(&path).unwrap();
    assert_eq!(c.starting_bankroll, Chips(1_000));
    assert_eq!(c.chip_values, vec![Chips(5), Chips(25)]);

    fs::remove_file(&path).unwrap();
}

#[test]
fn missing_config_file_is_io_error() {
    let err = load_table_config("/definitely/not/here/table.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("table.json"));
}

//
// mapping.rs
//
#[test]
fn bet_keys_map_both_ways() {
    for key in [BetKey::PassLine, BetKey::Odds]
        .into_iter()
        .chain(Number::ALL.iter().map(|&n| BetKey::Place(n)))
    {
        assert_eq!(bet_key_from_api(&bet_key_to_api(key)), Ok(key));
    }
    assert_eq!(bet_key_to_api(BetKey::Place(Number::Four)), "place4");
    assert_eq!(bet_key_from_api("PASSLINE"), Ok(BetKey::PassLine));
    assert_eq!(bet_key_from_api("place7"), Err(DomainError::UnknownBetKey("place7".into())));
}

#[test]
fn bet_dtos_skip_empty_bets() {
    let mut t = BetTable::new();
    t.add(BetKey::Odds, Chips(4));
    t.add(BetKey::Place(Number::Three), Chips(2));

    let dtos = bet_dtos(&t);
    let labels: Vec<&str> = dtos.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["odds", "place3"]);
    assert_eq!(dtos[1].amount, Chips(2));
}

#[test]
fn payout_table_is_sorted_and_symmetric() {
    let rows = payout_table();
    let numbers: Vec<u8> = rows.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![2, 3, 4, 5, 6, 8, 9, 10, 11, 12]);

    for (low, high) in rows.iter().zip(rows.iter().rev()) {
        assert_eq!(low.odds, high.odds);
        assert_eq!(low.place, high.place);
    }
}
