use std::fs;
use std::io::{self, Read};

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::Level;
use visual::data_view::VisualUpdateOptions;
use visual::palette::DefaultPalette;
use visual::selection::CategorySelectionIdBuilder;
use visual::visual::VisualCore;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("palette must list at least one color")]
    EmptyPalette,
}

#[derive(Parser, Debug)]
#[command(name = "series-cli", about = "Run the series visual over a data view snapshot")]
struct Cli {
    #[arg(long, env = "SERIES_INPUT", default_value = "-", help = "Update options JSON file, or - for stdin")]
    input: String,

    #[arg(long, env = "SERIES_PALETTE", help = "Comma-separated palette colors")]
    palette: Option<String>,

    #[arg(long, short, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Print the built data points.
    Records,
    /// Print the property descriptors of one object group.
    Enumerate { object_name: String },
    /// Print the parsed visual settings.
    Settings,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let input = read_input(&cli.input)?;
    let output = run(&cli.command, cli.palette.as_deref(), &input)?;
    print_json(&output)
}

/// Run one update cycle over `input` and render `command`'s output.
fn run(command: &Command, palette: Option<&str>, input: &str) -> Result<Value, CliError> {
    let options: VisualUpdateOptions = serde_json::from_str(input)?;
    let palette = match palette {
        Some(raw) => DefaultPalette::with_colors(parse_palette(raw)?),
        None => DefaultPalette::new(),
    };

    let mut visual = VisualCore::new(palette, CategorySelectionIdBuilder);
    let rendered = visual.update(&options);
    tracing::info!(rendered, "update applied");

    let output = match command {
        Command::Records => serde_json::to_value(visual.data_points())?,
        Command::Enumerate { object_name } => serde_json::to_value(visual.enumerate_object_instances(object_name))?,
        Command::Settings => serde_json::to_value(visual.settings())?,
    };
    Ok(output)
}

fn read_input(path: &str) -> Result<String, CliError> {
    let mut buf = String::new();
    let result = if path == "-" {
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };
    result.map_err(|source| CliError::Read { path: path.to_owned(), source })
}

fn parse_palette(raw: &str) -> Result<Vec<String>, CliError> {
    let colors: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|color| !color.is_empty())
        .map(str::to_owned)
        .collect();
    if colors.is_empty() {
        return Err(CliError::EmptyPalette);
    }
    Ok(colors)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
