//! Batch command - extract every JSON document in a directory into one CSV.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::{glob, Pattern};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, info, warn};

use folio_core::extract::ExtractionResult;
use folio_core::models::config::OutputConfig;
use folio_core::{CertificateParser, Document, FieldMap};

/// Output path used when neither the flag, config, nor environment sets one.
const DEFAULT_OUTPUT: &str = "certificates.csv";

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Directory containing document-analysis JSON files
    input_dir: Option<PathBuf>,

    /// Output CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip documents that fail instead of aborting the batch
    #[arg(long)]
    continue_on_error: bool,

    /// Fail on blocks without a BlockType instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Use the legacy Spanish column headers
    #[arg(long)]
    legacy_headers: bool,

    /// Prepend a column with the source file name
    #[arg(long)]
    include_source: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    fields: Option<FieldMap>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let mut config = super::config::load(config_path)?;

    if args.legacy_headers {
        config.output.column_names = folio_core::models::config::ColumnNaming::Legacy;
    }
    if args.include_source {
        config.output.include_source = true;
    }

    let input_dir = args
        .input_dir
        .clone()
        .or_else(|| config.paths.input.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("No input directory given (argument, config paths.input, or FOLIO_INPUT_PATH)")
        })?;
    let output_path = args
        .output
        .clone()
        .or_else(|| config.paths.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    if !input_dir.is_dir() {
        anyhow::bail!("Input directory not found: {}", input_dir.display());
    }

    info!("Process initiated for {}", input_dir.display());

    let files = list_json_files(&input_dir)?;

    if files.is_empty() {
        warn!("No JSON files found in {}", input_dir.display());
        println!(
            "{} No JSON files found in the input directory.",
            style("!").yellow()
        );
        return Ok(());
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut parser = CertificateParser::from_config(&config.extraction);
    if args.strict {
        parser = parser.with_strict_blocks(true);
    }

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match process_single_file(&path, &parser) {
            Ok(result) => {
                for warning in &result.warnings {
                    warn!("{}: {}", path.display(), warning);
                }
                debug!(
                    "Extracted {} in {}ms ({} lines)",
                    path.display(),
                    result.processing_time_ms,
                    result.lines_scanned
                );
                results.push(ProcessResult {
                    path,
                    fields: Some(result.fields),
                    error: None,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        fields: None,
                        error: Some(error_msg),
                    });
                } else {
                    pb.abandon();
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed for {}: {}", path.display(), error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let successful: Vec<_> = results.iter().filter(|r| r.fields.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_csv(&output_path, &results, &config.output)?;
    info!("Saved {} rows to {}", successful.len(), output_path.display());

    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );
    println!(
        "{} CSV written to {}",
        style("✓").green(),
        output_path.display()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// List `*.json` files directly inside `dir`, sorted by path.
fn list_json_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*.json",
        Pattern::escape(&dir.to_string_lossy())
    );

    let mut files: Vec<PathBuf> = glob(&pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    Ok(files)
}

fn process_single_file(path: &Path, parser: &CertificateParser) -> anyhow::Result<ExtractionResult> {
    debug!("Loading JSON data from {}", path.display());
    let content = fs::read_to_string(path)?;
    let document = Document::from_json(&content)?;

    Ok(parser.parse(&document)?)
}

/// Write one row per successfully processed document.
fn write_csv(path: &Path, results: &[ProcessResult], output: &OutputConfig) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header: Vec<&str> = Vec::with_capacity(7);
    if output.include_source {
        header.push("source");
    }
    header.extend(FieldMap::columns(output.column_names));
    wtr.write_record(&header)?;

    for result in results {
        let Some(fields) = &result.fields else {
            continue;
        };

        let source = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        let mut row: Vec<&str> = Vec::with_capacity(7);
        if output.include_source {
            row.push(source);
        }
        row.extend(fields.record());
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
