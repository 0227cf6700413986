use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

/// Binary invocation isolated from the user's real config file.
fn cli(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kakeibo_cli").unwrap();
    cmd.arg("--config")
        .arg(temp.path().join("config.json"))
        .arg("--plain")
        .env_remove("KAKEIBO_CLI_SCRIPT")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn expenses_page_shows_balance_and_monthly_table() {
    let temp = TempDir::new().unwrap();
    cli(&temp)
        .arg("/expenses")
        .assert()
        .success()
        .stdout(contains("=== Monthly totals ==="))
        .stdout(contains("Net of credits and debits: ¥593,850"))
        .stdout(contains("2026-03"));
}

#[test]
fn detail_page_for_missing_record_falls_back() {
    let temp = TempDir::new().unwrap();
    cli(&temp)
        .arg("/expenses/99")
        .assert()
        .success()
        .stdout(contains("Record not found"));
}

#[test]
fn json_summary_uses_data_file() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("records.json");
    std::fs::write(
        &data,
        r#"[{"id": 1, "date": "2026-05-02", "category": "Rent", "kind": "debit", "amount": 80000}]"#,
    )
    .unwrap();

    cli(&temp)
        .arg("--data")
        .arg(&data)
        .arg("--json")
        .arg("/expenses")
        .assert()
        .success()
        .stdout(contains("\"balance\": -80000"))
        .stdout(contains("\"month\": \"2026-05\""));
}

#[test]
fn invalid_data_file_exits_with_error() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("records.json");
    std::fs::write(
        &data,
        r#"[{"id": 1, "date": "May 2nd", "category": "Rent", "kind": "debit", "amount": 80000}]"#,
    )
    .unwrap();

    cli(&temp)
        .arg("--data")
        .arg(&data)
        .arg("/expenses")
        .assert()
        .failure()
        .stderr(contains("Error: Invalid date `May 2nd`"));
}

#[test]
fn unknown_route_fails() {
    let temp = TempDir::new().unwrap();
    cli(&temp)
        .arg("/expnses")
        .assert()
        .failure()
        .stderr(contains("Unknown page `/expnses`"));
}

#[test]
fn script_mode_reads_routes_from_stdin() {
    let temp = TempDir::new().unwrap();
    cli(&temp)
        .env("KAKEIBO_CLI_SCRIPT", "1")
        .write_stdin("/about\n/expenses/4\nexit\n/contact\n")
        .assert()
        .success()
        .stdout(contains("=== About ==="))
        .stdout(contains("Salary"))
        .stdout(contains("=== Contact ===").not());
}

#[test]
fn script_mode_suggests_close_routes() {
    let temp = TempDir::new().unwrap();
    cli(&temp)
        .env("KAKEIBO_CLI_SCRIPT", "1")
        .write_stdin("/abot\n")
        .assert()
        .success()
        .stderr(contains("Unknown page `/abot`"))
        .stdout(contains("Did you mean `/about`?"));
}
