use std::io::Write;

use serde_json::json;

use super::*;

fn snapshot() -> String {
    json!({
        "dataViews": [{
            "metadata": { "objects": { "dataPoint": { "fontSize": 16 } } },
            "categorical": {
                "categories": [{
                    "source": { "displayName": "Region" },
                    "values": ["A", "B", "C"],
                    "objects": [null, { "colorSelector": { "fill": { "solid": { "color": "#FF0000" } } } }, null]
                }],
                "values": [{ "source": { "displayName": "Total" }, "values": [10, 20, 30] }]
            }
        }]
    })
    .to_string()
}

#[test]
fn records_use_custom_palette_and_overrides() {
    let output = run(&Command::Records, Some("#111, #222,#333"), &snapshot()).unwrap();
    let colors: Vec<&str> = output
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["color"].as_str().unwrap())
        .collect();
    assert_eq!(colors, vec!["#111", "#FF0000", "#333"]);
}

#[test]
fn enumerate_prints_descriptors() {
    let command = Command::Enumerate { object_name: "colorSelector".to_owned() };
    let output = run(&command, None, &snapshot()).unwrap();
    let instances = output.as_array().unwrap();
    assert_eq!(instances.len(), 3);
    assert_eq!(instances[1]["displayName"], "B");
    assert_eq!(instances[1]["properties"]["fill"]["solid"]["color"], "#FF0000");
}

#[test]
fn enumerate_unknown_group_prints_empty_array() {
    let command = Command::Enumerate { object_name: "legend".to_owned() };
    assert_eq!(run(&command, None, &snapshot()).unwrap(), json!([]));
}

#[test]
fn settings_are_printed() {
    let output = run(&Command::Settings, None, &snapshot()).unwrap();
    assert_eq!(output["dataPoint"]["fontSize"], 16.0);
}

#[test]
fn empty_snapshot_prints_no_records() {
    assert_eq!(run(&Command::Records, None, "{}").unwrap(), json!([]));
}

#[test]
fn malformed_json_is_rejected() {
    let err = run(&Command::Records, None, "{not json").unwrap_err();
    assert!(matches!(err, CliError::InvalidJson(_)));
}

#[test]
fn blank_palette_is_rejected() {
    assert!(matches!(parse_palette(" , ,"), Err(CliError::EmptyPalette)));
    assert_eq!(parse_palette("#1,#2").unwrap(), vec!["#1", "#2"]);
}

#[test]
fn input_is_read_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(snapshot().as_bytes()).unwrap();

    let input = read_input(file.path().to_str().unwrap()).unwrap();
    assert_eq!(input, snapshot());
}

#[test]
fn missing_file_reports_path() {
    let err = read_input("/nonexistent/series.json").unwrap_err();
    assert!(err.to_string().starts_with("failed to read /nonexistent/series.json"));
}

#[test]
fn cli_parses_flags_and_subcommand() {
    let cli = Cli::try_parse_from(["series-cli", "--input", "data.json", "--palette", "#111", "enumerate", "colorSelector"]).unwrap();
    assert_eq!(cli.input, "data.json");
    assert_eq!(cli.palette.as_deref(), Some("#111"));
    assert!(matches!(cli.command, Command::Enumerate { ref object_name } if object_name == "colorSelector"));
}
