//! Process command - extract fields from a single document.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{info, warn};

use folio_core::models::config::OutputConfig;
use folio_core::{CertificateParser, Document, FieldMap};

use super::source::{is_url, retrieve_content};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input document (local path or http(s) URL)
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Fail on blocks without a BlockType instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Validate extracted data
    #[arg(long)]
    validate: bool,

    /// Prepend a column with the source file name (CSV format)
    #[arg(long)]
    include_source: bool,
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

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let mut config = super::config::load(config_path)?;
    if args.include_source {
        config.output.include_source = true;
    }

    info!("Processing document: {}", args.input);

    let content = retrieve_content(&args.input).await?;
    let document = Document::from_json(&content)?;

    let mut parser = CertificateParser::from_config(&config.extraction);
    if args.strict {
        parser = parser.with_strict_blocks(true);
    }
    let result = parser.parse(&document)?;

    for warning in &result.warnings {
        warn!("{}: {}", args.input, warning);
    }
    info!(
        "Scanned {} lines in {}ms",
        result.lines_scanned, result.processing_time_ms
    );

    if args.validate {
        let issues = result.fields.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let output = format_fields(
        &result.fields,
        source_name(&args.input),
        args.format,
        &config.output,
    )?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {} in {:?}",
            style("✓").green(),
            output_path.display(),
            start.elapsed()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// File name of a local path or the last segment of a URL.
fn source_name(input: &str) -> &str {
    if is_url(input) {
        input
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(input)
    } else {
        Path::new(input)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(input)
    }
}

/// Render fields in the requested format.
pub fn format_fields(
    fields: &FieldMap,
    source: &str,
    format: OutputFormat,
    output: &OutputConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(fields)?),
        OutputFormat::Csv => format_fields_csv(fields, source, output),
        OutputFormat::Text => Ok(format_fields_text(fields)),
    }
}

fn format_fields_csv(
    fields: &FieldMap,
    source: &str,
    output: &OutputConfig,
) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header: Vec<&str> = Vec::with_capacity(7);
    let mut row: Vec<&str> = Vec::with_capacity(7);
    if output.include_source {
        header.push("source");
        row.push(source);
    }
    header.extend(FieldMap::columns(output.column_names));
    row.extend(fields.record());

    wtr.write_record(&header)?;
    wtr.write_record(&row)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_fields_text(fields: &FieldMap) -> String {
    let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    let mut output = String::new();

    output.push_str(&format!("Registration number: {}\n", show(&fields.registration_number)));
    output.push_str(&format!("Print date:          {}\n", show(&fields.print_date)));
    output.push('\n');

    output.push_str("Location:\n");
    output.push_str(&format!("  Department:   {}\n", show(&fields.department)));
    output.push_str(&format!("  Municipality: {}\n", show(&fields.municipality)));
    output.push_str(&format!("  Vereda:       {}\n", show(&fields.rural_subdivision)));
    output.push('\n');

    output.push_str(&format!("Folio status: {}", show(&fields.folio_status)));

    output
}
