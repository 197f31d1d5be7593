#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rfacility::core::hours::clock::FixedClock;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with the config directory kept out of the real home.
pub fn rfc() -> Command {
    let mut cmd = cargo_bin_cmd!("rfacility");
    cmd.env("RFACILITY_CONFIG_DIR", config_dir("shared"));
    cmd
}

/// A per-test configuration directory inside the system temp dir.
pub fn config_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rfacility_{}_config", name));
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test catalog path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfacility.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the catalog schema without touching any config file
pub fn init_catalog(db_path: &str) {
    rfc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add the lactation room at ION Orchard used by many tests
pub fn add_ion_orchard(db_path: &str) {
    rfc()
        .args([
            "--db",
            db_path,
            "add",
            "--type",
            "lactation",
            "--building",
            "ION Orchard",
            "--address",
            "2 Orchard Turn",
            "--postal-code",
            "238801",
            "--lat",
            "1.3040",
            "--lon",
            "103.8318",
            "--floor",
            "L3",
            "--description",
            "Nursing room next to the customer service counter",
            "--opens",
            "09:00",
            "--closes",
            "10:00 PM",
        ])
        .assert()
        .success();
}

pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

pub fn clock_at(h: u32, m: u32, s: u32) -> FixedClock {
    FixedClock(at(h, m, s))
}
