use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn test_configured_menu_drives_session() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    write!(
        config,
        r#"{{
            "restaurant": "Test Kitchen",
            "items": [
                {{ "name": "Dosa", "price": "89.00" }},
                {{ "name": "Idli", "price": "49.00" }}
            ]
        }}"#
    )
    .unwrap();
    config.flush().unwrap();

    let mut cmd = Command::new(cargo_bin!("carte"));
    cmd.arg("--menu").arg(config.path());
    cmd.write_stdin("Jane Doe\n10 Main St\n9876543210\n2\n3\n0\nCash\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--- Menu for Test Kitchen ---"))
        .stdout(predicate::str::contains("Idli × 3 added to cart."))
        .stdout(predicate::str::contains("Total: ₹147.00"))
        .stdout(predicate::str::contains("Order Status: Placed"));
}

#[test]
fn test_negative_price_in_config_is_rejected() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    write!(
        config,
        r#"{{
            "restaurant": "Broken",
            "items": [{{ "name": "Dosa", "price": "-89.00" }}]
        }}"#
    )
    .unwrap();
    config.flush().unwrap();

    let mut cmd = Command::new(cargo_bin!("carte"));
    cmd.arg("--menu").arg(config.path());

    cmd.assert().failure();
}

#[test]
fn test_missing_config_file_is_rejected() {
    let mut cmd = Command::new(cargo_bin!("carte"));
    cmd.arg("--menu").arg("does_not_exist.json");

    cmd.assert().failure();
}
