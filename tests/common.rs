#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use dbcheck::models::record::Record;

pub fn dbc() -> Command {
    cargo_bin_cmd!("dbcheck")
}

/// The single-row fixture used across rendering tests.
pub fn sample_record() -> Record {
    Record::new([
        ("id", "1"),
        ("propertyType", "Condo"),
        ("bedrooms", "2"),
        ("created_by", "alice"),
        ("created_at", "2024-01-01 00:00:00"),
        ("updated_at", "2024-01-02 00:00:00"),
    ])
}
