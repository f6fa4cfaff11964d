#![allow(dead_code)] // Not every test binary uses every helper

use boardforge::config::{Config, SearchParams};
use boardforge::core_types::Item;

/// Builds items from `(name, count, difficulty)` triples, ids in order.
pub fn items(spec: &[(&str, u32, u8)]) -> Vec<Item> {
    spec.iter()
        .enumerate()
        .map(|(i, &(name, count, difficulty))| Item::new(i as u32, name, count, difficulty))
        .collect()
}

/// Default weights with a small trial budget so tests stay fast.
pub fn quick_config(trials: usize) -> Config {
    Config {
        search: SearchParams {
            trials,
            retain: 10,
            report_interval: 100,
        },
        ..Default::default()
    }
}

pub fn assert_close(actual: f32, expected: f32, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "{}: expected {:.5}, got {:.5}",
        what,
        expected,
        actual
    );
}
