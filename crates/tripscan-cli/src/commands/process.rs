//! Process command - extract passport data from a single document.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;
use clap::Args;
use console::style;
use tracing::{debug, info};

use tripscan_core::models::config::OutputConfig;
use tripscan_core::{ExtractionReport, ExtractionResult, PassportParser, RecognizedDocument};

use super::config::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input document (.txt transcription or .json recognized document)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Include where each field was found
    #[arg(long)]
    explain: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let document = RecognizedDocument::load(&args.input)?;
    let parser = PassportParser::from_config(&config.extraction)?;
    let report = parser.analyze(&document);

    let Some(result) = &report.result else {
        anyhow::bail!(
            "No passport data extracted from {}. Try scanning the document again.",
            args.input.display()
        );
    };

    for warning in &report.warnings {
        debug!("{}", warning);
    }

    let output = if args.explain {
        format_report(&report, args.format, &config.output)?
    } else {
        format_result(result, args.format, &config.output)?
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    output: &OutputConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(result, output),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_report(
    report: &ExtractionReport,
    format: OutputFormat,
    output: &OutputConfig,
) -> anyhow::Result<String> {
    match (format, &report.result) {
        (OutputFormat::Json, _) => to_json(report, output),
        (OutputFormat::Text, Some(result)) => {
            let mut text = format_text(result);
            text.push_str("\nSources:\n");
            text.push_str(&format!("  Name:        {:?}\n", report.sources.full_name));
            text.push_str(&format!("  Number:      {:?}\n", report.sources.document_number));
            text.push_str(&format!("  Nationality: {:?}\n", report.sources.nationality));
            text.push_str(&format!("  Birth:       {:?}\n", report.sources.date_of_birth));
            text.push_str(&format!("  Expiry:      {:?}\n", report.sources.expiry_date));
            Ok(text)
        }
        (_, Some(result)) => format_result(result, format, output),
        (_, None) => anyhow::bail!("No passport data extracted"),
    }
}

fn to_json<T: serde::Serialize>(value: &T, output: &OutputConfig) -> anyhow::Result<String> {
    if output.pretty_json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

pub const CSV_HEADER: [&str; 5] = [
    "full_name",
    "document_number",
    "nationality",
    "date_of_birth",
    "expiry_date",
];

pub fn csv_fields(result: &ExtractionResult) -> [&str; 5] {
    [
        result.full_name.as_str(),
        result.document_number.as_str(),
        result.nationality.as_str(),
        result.date_of_birth.as_str(),
        result.expiry_date.as_str(),
    ]
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(CSV_HEADER)?;
    wtr.write_record(csv_fields(result))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

pub fn format_text(result: &ExtractionResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Name:          {}\n", result.full_name));
    output.push_str(&format!("Passport No:   {}\n", result.document_number));
    output.push_str(&format!("Nationality:   {}\n", result.nationality));
    output.push_str(&format!("Date of birth: {}\n", result.date_of_birth));
    output.push_str(&format!("Expiry date:   {}\n", result.expiry_date));

    match result.is_expired(Local::now().date_naive()) {
        Some(true) => output.push_str("\nDocument has expired\n"),
        Some(false) => {}
        None if result.expiry_date().is_some() => {
            output.push_str("\nExpiry date format not recognized\n")
        }
        None => {}
    }

    output
}
