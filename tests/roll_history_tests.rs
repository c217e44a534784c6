use crapless_engine::engine::{RollHistory, RollOutcome, SettlementOutcome};

#[test]
fn history_is_fifo_with_fixed_capacity() {
    let mut h = RollHistory::new(3);
    for total in [2, 3, 4, 5] {
        h.push(total, RollOutcome::Neutral);
    }
    let totals: Vec<u8> = h.iter().map(|e| e.total).collect();
    assert_eq!(totals, vec![3, 4, 5]);
    assert_eq!(h.len(), 3);
}

#[test]
fn default_capacity_is_25() {
    let mut h = RollHistory::default();
    for i in 0..30u8 {
        h.push(2 + i % 11, RollOutcome::Neutral);
    }
    assert_eq!(h.capacity(), 25);
    assert_eq!(h.len(), 25);
    // Первые пять вытеснены: остались броски 5..30.
    assert_eq!(h.to_vec()[0].total, 2 + 5 % 11);
}

#[test]
fn zero_capacity_is_clamped() {
    let mut h = RollHistory::new(0);
    h.push(7, RollOutcome::Loss);
    h.push(8, RollOutcome::Win);
    assert_eq!(h.len(), 1);
    assert_eq!(h.to_vec()[0].total, 8);
}

#[test]
fn counts_and_frequencies() {
    let mut h = RollHistory::new(25);
    assert_eq!(h.seven_frequency(), 0.0);

    h.push(7, RollOutcome::Win);
    h.push(7, RollOutcome::Loss);
    h.push(6, RollOutcome::Neutral);
    h.push(12, RollOutcome::Neutral);

    let counts = h.counts();
    assert_eq!(counts[7 - 2], 2);
    assert_eq!(counts[6 - 2], 1);
    assert_eq!(counts[12 - 2], 1);
    assert_eq!(counts.iter().sum::<u32>(), 4);

    assert_eq!(h.seven_frequency(), 50.0);
    assert_eq!(h.frequency(6), 25.0);
    assert_eq!(h.frequency(3), 0.0);

    h.clear();
    assert!(h.is_empty());
}

#[test]
fn info_counts_as_neutral() {
    assert_eq!(RollOutcome::from(SettlementOutcome::Info), RollOutcome::Neutral);
    assert_eq!(RollOutcome::from(SettlementOutcome::Win), RollOutcome::Win);
    assert_eq!(RollOutcome::from(SettlementOutcome::Loss), RollOutcome::Loss);
}
