//! End-to-end runs of the `footprint` binary

use crate::common::{run_footprint, stderr_of, stdout_of};

fn no_config() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    (dir, path)
}

#[test]
fn categories_are_listed_in_order() {
    let (_dir, config) = no_config();
    let output = run_footprint(&config, &["categories"]);
    assert!(output.status.success());

    let keys: Vec<String> = stdout_of(&output)
        .lines()
        .map(|line| line.split('\t').next().unwrap().to_string())
        .collect();
    assert_eq!(
        keys,
        ["cooking", "food", "waste", "clothing", "necessities", "transport"]
    );
}

#[test]
fn units_show_factors() {
    let (_dir, config) = no_config();
    let output = run_footprint(&config, &["units", "cooking"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("kg_fuel\tkg (Charcoal, Firewood)\t2.75"));
}

#[test]
fn unknown_category_is_a_usage_error() {
    let (_dir, config) = no_config();
    let output = run_footprint(&config, &["items", "plumbing"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("unknown emission category"));
}

#[test]
fn preview_prints_estimate() {
    let (_dir, config) = no_config();
    let output = run_footprint(
        &config,
        &["preview", "--category", "cooking", "--unit", "kg_fuel", "--quantity", "2"],
    );
    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim(), "5.50 kg CO₂e");
}

#[test]
fn preview_without_positive_quantity_has_no_estimate() {
    let (_dir, config) = no_config();
    let output = run_footprint(
        &config,
        &["preview", "--category", "food", "--unit", "kg_food", "--quantity", "0"],
    );
    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim(), "no estimate yet");
}

#[test]
fn log_prints_entry_json() {
    let (_dir, config) = no_config();
    let output = run_footprint(
        &config,
        &[
            "log",
            "--category",
            "transport",
            "--item",
            "car_petrol_solo",
            "--unit",
            "km_transport",
            "--quantity",
            "10",
            "--notes",
            "school run",
        ],
    );
    assert!(output.status.success(), "{}", stderr_of(&output));

    let entry: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(entry["co2e"], 1.7);
    assert_eq!(entry["owner_id"], "mock-user-id");
    assert_eq!(entry["unit_label"], "km");
    assert_eq!(entry["notes"], "school run");
    assert!(!entry["id"].as_str().unwrap().is_empty());
}

#[test]
fn log_reports_field_errors_and_fails() {
    let (_dir, config) = no_config();
    let output = run_footprint(
        &config,
        &[
            "log",
            "--category",
            "waste",
            "--item",
            "plastic_recycled",
            "--unit",
            "kg_waste",
            "--quantity",
            "0",
        ],
    );
    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("quantity: quantity must be greater than 0"));
}

#[test]
fn config_sets_owner_and_minimum() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        "[validation]\nmin_quantity = 5.0\n\n[owner]\nplaceholder_id = \"household-1\"\n",
    )
    .unwrap();

    let args = [
        "log",
        "--category",
        "clothing",
        "--item",
        "jeans_denim_new",
        "--unit",
        "item_clothing",
        "--quantity",
    ];

    let too_few = run_footprint(&config, &[&args[..], &["2"][..]].concat());
    assert!(!too_few.status.success());
    assert!(stderr_of(&too_few).contains("quantity must be at least 5"));

    let enough = run_footprint(&config, &[&args[..], &["5"][..]].concat());
    assert!(enough.status.success(), "{}", stderr_of(&enough));
    let entry: serde_json::Value = serde_json::from_str(&stdout_of(&enough)).unwrap();
    assert_eq!(entry["owner_id"], "household-1");
    assert_eq!(entry["co2e"], 32.5);
}

#[test]
fn explicit_config_flag_overrides_discovery() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[validation]\nmin_quantity = -1.0\n").unwrap();
    let good = dir.path().join("good.toml");
    std::fs::write(&good, "[owner]\nplaceholder_id = \"flag-owner\"\n").unwrap();

    let failing = run_footprint(&bad, &["categories"]);
    assert!(!failing.status.success());
    assert!(stderr_of(&failing).contains("validation.min_quantity"));

    let output = run_footprint(
        &bad,
        &[
            "--config",
            good.to_str().unwrap(),
            "log",
            "--category",
            "food",
            "--item",
            "eggs",
            "--unit",
            "serving_food",
            "--quantity",
            "1",
        ],
    );
    assert!(output.status.success(), "{}", stderr_of(&output));
    let entry: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(entry["owner_id"], "flag-owner");
}

#[test]
fn summary_totals_logged_entries() {
    let (dir, config) = no_config();
    let mut logged = String::new();
    for args in [
        ["cooking", "charcoal", "kg_fuel", "2"],
        ["transport", "car_petrol_solo", "km_transport", "10"],
        ["cooking", "firewood", "kg_fuel", "1"],
    ] {
        let output = run_footprint(
            &config,
            &[
                "log",
                "--category",
                args[0],
                "--item",
                args[1],
                "--unit",
                args[2],
                "--quantity",
                args[3],
            ],
        );
        assert!(output.status.success(), "{}", stderr_of(&output));
        logged.push_str(&stdout_of(&output));
    }
    let entries = dir.path().join("entries.json");
    std::fs::write(&entries, logged).unwrap();

    let output = run_footprint(&config, &["summary", entries.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr_of(&output));

    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "cooking\tCooking Fuel\t2\t8.25 kg CO₂e");
    assert_eq!(lines[1], "food\tFood Consumption\t0\t0.00 kg CO₂e");
    assert_eq!(lines[5], "transport\tTransport\t1\t1.70 kg CO₂e");
    assert_eq!(lines[6], "total\t\t3\t9.95 kg CO₂e");
}

#[test]
fn summary_rejects_malformed_entries() {
    let (dir, config) = no_config();
    let entries = dir.path().join("entries.json");
    std::fs::write(&entries, "{\"id\": \"x\"}").unwrap();

    let output = run_footprint(&config, &["summary", entries.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("malformed entry"));
}

#[test]
fn huge_quantity_survives_log_and_summary() {
    let (dir, config) = no_config();
    let logged = run_footprint(
        &config,
        &[
            "log",
            "--category",
            "cooking",
            "--item",
            "lpg",
            "--unit",
            "cylinder_13kg_lpg",
            "--quantity",
            "1e306",
        ],
    );
    assert!(logged.status.success(), "{}", stderr_of(&logged));

    let entry: serde_json::Value = serde_json::from_str(&stdout_of(&logged)).unwrap();
    assert_eq!(entry["co2e"].as_f64(), Some(1e306 * 39.0));

    let entries = dir.path().join("entries.json");
    std::fs::write(&entries, stdout_of(&logged)).unwrap();
    let summary = run_footprint(&config, &["summary", entries.to_str().unwrap()]);
    assert!(summary.status.success(), "{}", stderr_of(&summary));
    let stdout = stdout_of(&summary);
    assert!(stdout.starts_with("cooking\tCooking Fuel\t1\t"));
    assert!(!stdout.contains("inf"));

    let preview = run_footprint(
        &config,
        &[
            "preview",
            "--category",
            "cooking",
            "--unit",
            "cylinder_13kg_lpg",
            "--quantity",
            "1e306",
        ],
    );
    assert!(preview.status.success());
    assert!(!stdout_of(&preview).contains("inf"));
}
