use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn saving_cat(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("saving-cat").unwrap();
    cmd.env("SAVING_CAT_DATA_DIR", data_dir.path())
        .env_remove("SAVING_CAT_CHART_DIR");
    cmd
}

#[test]
fn logs_a_day_under_budget() {
    let data_dir = TempDir::new().unwrap();

    saving_cat(&data_dir)
        .args(["--charts", "none"])
        .write_stdin("1000\n200\n\n1\n1\n10\n5\n0\n5\n0\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Day 1: Spent $20.00, under budget! Saved $6.67.",
        ))
        .stdout(predicate::str::contains("Goodbye! Cat waves"));

    // Nothing is persisted unless asked for
    assert!(!data_dir.path().join("config.json").exists());
    assert!(!data_dir.path().join("activity.log").exists());
}

#[test]
fn reprompts_on_invalid_numbers() {
    let data_dir = TempDir::new().unwrap();

    saving_cat(&data_dir)
        .args(["--charts", "none"])
        .write_stdin("a lot\n1000\n200\nthirty\n30\n7\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please enter a number."))
        .stdout(predicate::str::contains(
            "Invalid input. Please enter a whole number.",
        ))
        .stdout(predicate::str::contains("Invalid choice. Try again."));
}

#[test]
fn weekly_summary_twice_unlocks_two_toys() {
    let data_dir = TempDir::new().unwrap();

    let output = saving_cat(&data_dir)
        .args(["--charts", "none"])
        .write_stdin("1000\n200\n30\n2\n7\n2\n7\n3\n5\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Cat unlocks Week 1 Toy.").count(), 2);
    assert_eq!(stdout.matches(" - Week 1 Toy").count(), 2);
    assert!(stdout.contains("Target not met."));
}

#[test]
fn big_purchase_reports_new_budgets() {
    let data_dir = TempDir::new().unwrap();

    saving_cat(&data_dir)
        .args(["--charts", "none"])
        .write_stdin("1000\n200\n30\n4\n10\nLaptop\n400\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Big Purchase: Laptop for $400.00 on Day 10.",
        ))
        .stdout(predicate::str::contains(
            "New daily budget: $20.00, New weekly budget: $100.00",
        ));
}

#[test]
fn monthly_summary_draws_terminal_charts() {
    let data_dir = TempDir::new().unwrap();

    saving_cat(&data_dir)
        .args(["--charts", "terminal"])
        .write_stdin("1000\n200\n14\n1\n3\n12\n3\n0\n0\n0\n3\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Monthly Summary ---"))
        .stdout(predicate::str::contains(" - Food: $12.00"))
        .stdout(predicate::str::contains("Weekly Spending vs Budget"))
        .stdout(predicate::str::contains("Expense Breakdown by Category"))
        .stdout(predicate::str::contains("80.0%"));
}

#[test]
fn monthly_summary_writes_svg_charts() {
    let data_dir = TempDir::new().unwrap();
    let chart_dir = data_dir.path().join("out");

    saving_cat(&data_dir)
        .args(["--charts", "svg", "--chart-dir"])
        .arg(&chart_dir)
        .write_stdin("1000\n200\n30\n1\n1\n5\n5\n5\n5\n5\n3\n5\n")
        .assert()
        .success();

    assert!(chart_dir.join("weekly_spending.svg").exists());
    assert!(chart_dir.join("category_breakdown.svg").exists());
}

#[test]
fn activity_log_is_opt_in() {
    let data_dir = TempDir::new().unwrap();

    saving_cat(&data_dir)
        .args(["--charts", "none", "--activity-log"])
        .write_stdin("1000\n200\n30\n2\n7\n5\n")
        .assert()
        .success();

    let log = std::fs::read_to_string(data_dir.path().join("activity.log")).unwrap();
    assert!(log.contains("\"event\":\"session_started\""));
    assert!(log.contains("\"event\":\"week_summarized\""));
    assert!(log.contains("\"event\":\"session_ended\""));

    saving_cat(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recent activity:"))
        .stdout(predicate::str::contains("WEEK_SUMMARIZED day 7"));
}

#[test]
fn closed_input_exits_cleanly() {
    let data_dir = TempDir::new().unwrap();

    saving_cat(&data_dir)
        .args(["--charts", "none"])
        .write_stdin("1000\n")
        .assert()
        .success();
}

#[test]
fn init_writes_settings_once() {
    let data_dir = TempDir::new().unwrap();
    let settings_file = data_dir.path().join("config.json");

    saving_cat(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote settings to:"));

    let written = std::fs::read_to_string(&settings_file).unwrap();
    assert!(written.contains("\"default_days\": 30"));
    assert!(written.contains("\"chart_output\": \"terminal\""));

    std::fs::write(&settings_file, r#"{"default_days": 28}"#).unwrap();
    saving_cat(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings already exist at:"));
    assert_eq!(
        std::fs::read_to_string(&settings_file).unwrap(),
        r#"{"default_days": 28}"#
    );
}

#[test]
fn config_reads_settings_file() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("config.json"),
        r#"{"default_days": 28, "categories": ["Rent", "Food"]}"#,
    )
    .unwrap();

    saving_cat(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default days:    28"))
        .stdout(predicate::str::contains("Categories:      Rent, Food"));

    saving_cat(&data_dir)
        .args(["--charts", "none"])
        .write_stdin("1000\n200\n\n1\n1\n3\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(default 28)"))
        .stdout(predicate::str::contains("  Rent: "))
        .stdout(predicate::str::contains("Day 1: Spent $7.00"));
}
