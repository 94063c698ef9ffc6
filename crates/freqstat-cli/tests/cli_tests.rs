use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn freqstat() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("freqstat"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn json_output(args: &[&str]) -> anyhow::Result<Value> {
    let output = freqstat().args(args).output()?;
    assert!(output.status.success());
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_default_command_renders_html_from_stdin() {
    freqstat()
        .write_stdin("10, 20, 20, 30")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains(
            "<span id=\"mean\">20.00 (Media: Promedio de los datos)</span>",
        ))
        .stdout(predicate::str::contains("<span id=\"variance\">50.00"))
        .stdout(predicate::str::contains("<span id=\"stdDeviation\">7.07"));
}

#[test]
fn test_summarize_json_bundle() -> anyhow::Result<()> {
    let json = json_output(&["summarize", "10, 20, 20, 30", "--format", "json"])?;

    assert_eq!(json["sample"], serde_json::json!([10.0, 20.0, 20.0, 30.0]));
    assert_eq!(json["statistics"]["mean"], 20.0);
    assert_eq!(json["statistics"]["variance"], 50.0);
    assert_eq!(json["statistics"]["range"], 20.0);
    assert_eq!(json["statistics"]["mode"]["values"], serde_json::json!([20.0]));
    assert_eq!(json["frequencyTable"]["kind"], "discrete");

    let cumulative: Vec<_> = json["frequencyTable"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["cumulativeFrequency"].as_u64().unwrap())
        .collect();
    assert_eq!(cumulative, vec![1, 3, 4]);
    Ok(())
}

#[test]
fn test_garbage_tokens_are_dropped() -> anyhow::Result<()> {
    let json = json_output(&["summarize", "abc, 5, , 7", "--format", "json"])?;
    assert_eq!(json["sample"], serde_json::json!([5.0, 7.0]));
    Ok(())
}

#[test]
fn test_invalid_input_fails_with_localized_message() {
    freqstat()
        .args(["summarize", "abc, ,"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Por favor ingrese tiempos válidos."))
        .stderr(predicate::str::contains("Caused by").not())
        .stderr(predicate::str::contains("no valid numbers").not());

    freqstat()
        .args(["table", "--lang", "en", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter valid values."))
        .stderr(predicate::str::contains("Caused by").not());
}

#[test]
fn test_overflowing_spread_fails_with_localized_message() {
    freqstat()
        .args(["summarize", "1e308, -1e308"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Los valores exceden el rango numérico representable.",
        ))
        .stderr(predicate::str::contains("NaN").not());
}

#[test]
fn test_grouped_table_counts_every_observation_with_fractional_minimum() -> anyhow::Result<()> {
    let mut values = vec!["2000"; 20];
    values.extend(["1298.3724211410236", "10498.372421141024"]);
    let data = values.join(", ");
    let json = json_output(&["table", &data, "--format", "json"])?;

    assert_eq!(json["kind"], "grouped");
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.last().unwrap()["cumulativeFrequency"], 22);
    Ok(())
}

#[test]
fn test_percentiles_html_has_value_header() {
    freqstat()
        .args(["percentiles", "1, 2, 3", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<th>Percentile</th><th>Value</th>"));
}

#[test]
fn test_grouped_table_for_large_sample() -> anyhow::Result<()> {
    let data = (0..25)
        .map(|i| (f64::from(i) * 100.0 / 24.0).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let json = json_output(&["table", &data, "--format", "json"])?;

    assert_eq!(json["kind"], "grouped");
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["interval"], "0.00 - 17.00");
    assert_eq!(rows[5]["cumulativeFrequency"], 25);
    Ok(())
}

#[test]
fn test_table_kind_can_be_forced() -> anyhow::Result<()> {
    let json = json_output(&["table", "1, 2, 2", "--kind", "grouped", "--format", "json"])?;
    assert_eq!(json["kind"], "grouped");
    Ok(())
}

#[test]
fn test_text_table_with_english_labels() {
    freqstat()
        .args(["table", "1, 2, 3", "--format", "text", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Value (x)"))
        .stdout(predicate::str::contains("33.33%"))
        .stdout(predicate::str::contains("100.00%"));
}

#[test]
fn test_no_mode_in_text_summary() {
    freqstat()
        .args(["summarize", "1, 2, 3", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No hay moda"));
}

#[test]
fn test_percentiles_custom_ranks() -> anyhow::Result<()> {
    let json = json_output(&[
        "percentiles",
        "1, 2, 3, 4, 5",
        "--ranks",
        "0,50,100",
        "--format",
        "json",
    ])?;
    let values: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["value"].as_f64().unwrap())
        .collect();
    assert_eq!(values, vec![1.0, 3.0, 5.0]);
    Ok(())
}

#[test]
fn test_percentiles_rejects_out_of_range_rank() {
    freqstat()
        .args(["percentiles", "1, 2", "--ranks", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("0..=100"));
}

#[test]
fn test_file_input_and_output_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("times.txt");
    let output = dir.path().join("summary.html");
    fs::write(&input, "10\n20\n20, 30\n")?;

    freqstat()
        .args(["summarize", "--file"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&output)?;
    assert!(html.contains("<p id=\"sampleSize\">Tamaño de la muestra: 4</p>"));
    assert!(html.contains("<span id=\"mode\">20 (Moda: Valor más frecuente)</span>"));
    Ok(())
}

#[test]
fn test_missing_input_file_reports_path() {
    freqstat()
        .args(["summarize", "--file", "does/not/exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does/not/exist.txt"));
}
