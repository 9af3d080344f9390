//! Integration tests for the products and demo commands.

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("harbormaster");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("HARBORMASTER_FLEET_DATA")
        .env_remove("HARBORMASTER_PRODUCT_DATA");
    cmd
}

#[test]
fn lists_builtin_products() {
    cli()
        .arg("products")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available products (10):"))
        .stdout(predicate::str::contains("Frozen pizza"))
        .stdout(predicate::str::contains("-30.0"));
}

#[test]
fn lists_products_from_custom_catalog() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "product,temperature_c").unwrap();
    writeln!(file, "Vaccines,4").unwrap();

    cli()
        .arg("--products")
        .arg(file.path())
        .args(["products", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Vaccines\""))
        .stdout(predicate::str::contains("Bananas").not());
}

#[test]
fn missing_product_catalog_fails_with_context() {
    cli()
        .args(["--products", "/nonexistent/products.csv", "products"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "failed to load product data from /nonexistent/products.csv",
        ));
}

#[test]
fn demo_prints_events_rejections_and_status() {
    cli()
        .args(["demo", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Serial seed: 7"))
        .stdout(predicate::str::contains("Voyage events:"))
        .stdout(predicate::str::contains("HAZARD ALERT"))
        .stdout(predicate::str::contains("Rejected operations:"))
        .stdout(predicate::str::contains("Did you mean 'Bananas'?"))
        .stdout(predicate::str::contains("Ship Aurora: 2/4 containers, 21400kg/150000kg"))
        .stdout(predicate::str::contains("Ship Borealis: 2/3 containers, 10800kg/90000kg"));
}

#[test]
fn demo_json_is_machine_readable() {
    let output = cli()
        .args(["--format", "json", "demo", "--seed", "42"])
        .output()
        .expect("run demo");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(report["seed"], 42);
    assert_eq!(report["fleet"].as_array().map(Vec::len), Some(3));
    assert_eq!(report["rejections"].as_array().map(Vec::len), Some(5));
    assert!(report["events"]
        .as_array()
        .expect("events array")
        .iter()
        .any(|event| event["event"] == "hazard_alert"));
}

#[test]
fn demo_same_seed_is_reproducible() {
    let run = || {
        cli()
            .args(["--format", "json", "demo", "--seed", "3"])
            .output()
            .expect("run demo")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn demo_rejects_negative_standard_capacity() {
    cli()
        .args(["demo", "--standard-capacity=-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --standard-capacity"));
}
