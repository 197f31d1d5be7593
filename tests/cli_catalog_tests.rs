mod common;
use common::{add_ion_orchard, config_dir, init_catalog, rfc, setup_test_db};

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use std::fs;

fn list_json(db: &str, extra: &[&str]) -> Vec<Value> {
    let output = rfc()
        .args(["--db", db, "list", "--json"])
        .args(extra)
        .output()
        .expect("run list");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("valid JSON")
}

#[test]
fn test_add_and_list_json() {
    let db = setup_test_db("add_and_list_json");
    init_catalog(&db);
    add_ion_orchard(&db);

    let cards = list_json(&db, &["--near", "1.3040,103.8318", "--exact"]);
    assert_eq!(cards.len(), 1);

    let card = &cards[0];
    assert_eq!(card["id"], 1);
    assert_eq!(card["title"], "ION Orchard");
    assert_eq!(card["facility_type"], "Lactation Room");
    assert_eq!(card["floor"], "L3");
    assert_eq!(card["opens_at"], "09:00:00");
    assert_eq!(card["closes_at"], "22:00:00");
    assert_eq!(card["hours"], "9 AM - 10 PM");
    assert_eq!(card["distance_km"], 0.0);
}

#[test]
fn test_list_sorted_by_distance_and_filtered_by_type() {
    let db = setup_test_db("list_sorted");
    init_catalog(&db);
    add_ion_orchard(&db);

    rfc()
        .args([
            "--db", &db, "add", "--type", "diaper", "--block", "Blk 5", "--road",
            "Bishan St 11", "--lat", "1.3500", "--lon", "103.8480",
        ])
        .assert()
        .success()
        .stdout(contains("Facility #2 added: Diaper Changing Station at Blk 5 Bishan St 11"));

    let cards = list_json(&db, &["--near", "1.3510,103.8480"]);
    let titles: Vec<&str> = cards.iter().filter_map(|c| c["title"].as_str()).collect();
    assert_eq!(titles, vec!["Blk 5 Bishan St 11", "ION Orchard"]);
    assert!(cards[0]["status"].is_null());

    let cards = list_json(&db, &["--type", "diaper"]);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["id"], 2);
}

#[test]
fn test_list_text_output() {
    let db = setup_test_db("list_text");
    init_catalog(&db);

    rfc()
        .args(["--db", &db, "list"])
        .assert()
        .success()
        .stdout(contains("No facilities found."));

    add_ion_orchard(&db);

    rfc()
        .args(["--db", &db, "list", "--near", "1.3,103.8", "--exact"])
        .assert()
        .success()
        .stdout(contains("ION Orchard"))
        .stdout(contains("[L3]"))
        .stdout(contains("Nursing room next to the customer service counter"))
        .stdout(contains("km"))
        .stdout(contains("9 AM - 10 PM"));
}

#[test]
fn test_add_rejects_misaligned_hours() {
    let db = setup_test_db("add_misaligned");
    init_catalog(&db);

    rfc()
        .args([
            "--db", &db, "add", "--type", "baby", "--address", "1 Test Road", "--lat", "1.3",
            "--lon", "103.8", "--opens", "09:15", "--closes", "17:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Opening time: Not aligned to step"))
        .stderr(contains("Closing time").not());

    assert!(list_json(&db, &[]).is_empty());
}

#[test]
fn test_add_rejects_reversed_and_invalid_hours() {
    let db = setup_test_db("add_reversed");
    init_catalog(&db);

    rfc()
        .args([
            "--db", &db, "add", "--type", "baby", "--address", "1 Test Road", "--lat", "1.3",
            "--lon", "103.8", "--opens", "18:00", "--closes", "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Closing time: End must be after start"));

    rfc()
        .args([
            "--db", &db, "add", "--type", "baby", "--address", "1 Test Road", "--lat", "1.3",
            "--lon", "103.8", "--opens", "noon",
        ])
        .assert()
        .failure()
        .stderr(contains("Opening time: Invalid time"));
}

#[test]
fn test_add_rejects_unknown_type_and_missing_location() {
    let db = setup_test_db("add_invalid");
    init_catalog(&db);

    rfc()
        .args(["--db", &db, "add", "--type", "sauna", "--address", "x", "--lat", "1", "--lon", "1"])
        .assert()
        .failure()
        .stderr(contains("Invalid facility type"));

    rfc()
        .args(["--db", &db, "add", "--type", "unisex", "--address", "1 Test Road"])
        .assert()
        .failure()
        .stderr(contains("location is required"));
}

#[test]
fn test_add_here_uses_configured_position() {
    let db = setup_test_db("add_here");
    let dir = config_dir("add_here");
    fs::write(
        dir.join("rfacility.conf"),
        format!(
            "database: '{}'\ncurrent_latitude: 1.3521\ncurrent_longitude: 103.8198\n",
            db
        ),
    )
    .expect("write config");

    init_catalog(&db);

    rfc()
        .env("RFACILITY_CONFIG_DIR", &dir)
        .args(["add", "--type", "family", "--here"])
        .assert()
        .success()
        .stdout(contains("Location Updated"))
        .stdout(contains("at Your building"));

    let cards = list_json(&db, &["--near", "1.3521,103.8198"]);
    assert_eq!(cards[0]["title"], "Your building");
    assert_eq!(cards[0]["distance_km"], 0.0);
}

#[test]
fn test_add_here_without_position_fails() {
    let db = setup_test_db("add_here_missing");
    init_catalog(&db);

    rfc()
        .env("RFACILITY_CONFIG_DIR", config_dir("add_here_missing"))
        .args(["--db", &db, "add", "--type", "family", "--here"])
        .assert()
        .failure()
        .stdout(contains("Unable to retrieve your location. Please try again."))
        .stderr(contains("Unable to retrieve your location"));
}

#[test]
fn test_search_and_add_from_search() {
    let db = setup_test_db("search");
    init_catalog(&db);
    add_ion_orchard(&db);

    rfc()
        .args(["--db", &db, "search", "orchard"])
        .assert()
        .success()
        .stdout(contains("ION Orchard"))
        .stdout(contains("238801"));

    rfc()
        .args(["--db", &db, "search", "tampines"])
        .assert()
        .success()
        .stdout(contains("No known address matches 'tampines'."));

    rfc()
        .args(["--db", &db, "add", "--type", "mens", "--from-search", "ORCHARD", "--floor", "B2"])
        .assert()
        .success()
        .stdout(contains("Using known location: 2 Orchard Turn"))
        .stdout(contains("Restroom (Men's) at ION Orchard"));

    let cards = list_json(&db, &["--type", "mens"]);
    assert_eq!(cards[0]["floor"], "B2");
    assert!(cards[0]["hours"].is_null());
}

#[test]
fn test_delete_facility() {
    let db = setup_test_db("delete");
    init_catalog(&db);
    add_ion_orchard(&db);

    rfc()
        .args(["--db", &db, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    assert!(list_json(&db, &[]).is_empty());

    rfc()
        .args(["--db", &db, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Facility not found: #1"));

    rfc()
        .args(["--db", &db, "search", "orchard"])
        .assert()
        .success()
        .stdout(contains("No known address matches"));
}

#[test]
fn test_internal_log() {
    let db = setup_test_db("internal_log");
    init_catalog(&db);
    add_ion_orchard(&db);

    rfc()
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("add (facility #1)"));
}

#[test]
fn test_relative_db_path_lives_in_config_dir() {
    let dir = config_dir("relative_db");
    let cwd = config_dir("relative_db_cwd");
    fs::remove_file(dir.join("relative.sqlite")).ok();
    fs::remove_file(cwd.join("relative.sqlite")).ok();

    rfc()
        .env("RFACILITY_CONFIG_DIR", &dir)
        .current_dir(&cwd)
        .args(["--db", "relative.sqlite", "--test", "init"])
        .assert()
        .success();

    rfc()
        .env("RFACILITY_CONFIG_DIR", &dir)
        .current_dir(&cwd)
        .args(["--db", "relative.sqlite", "list"])
        .assert()
        .success()
        .stdout(contains("No facilities found."));

    assert!(dir.join("relative.sqlite").exists());
    assert!(!cwd.join("relative.sqlite").exists());
}
