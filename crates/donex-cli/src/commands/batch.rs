//! Batch command - decode multiple raw model-output files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use donex_core::models::config::DonexConfig;
use donex_core::models::invoice::Invoice;
use donex_core::{DonutDecoder, OutputDecoder};

use super::decode::{OutputFormat, format_invoice};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue when a file cannot be read
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of decoding a single file.
struct FileResult {
    path: PathBuf,
    invoice: Option<Invoice>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        DonexConfig::from_file(std::path::Path::new(path))?
    } else {
        DonexConfig::default()
    };

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to decode",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let decoder = DonutDecoder::new();
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match fs::read_to_string(&path) {
            Ok(raw) => {
                let result = decoder.decode(&raw);
                results.push(FileResult {
                    path: path.clone(),
                    invoice: Some(result.invoice),
                    error: None,
                    processing_time_ms: result.processing_time_ms,
                });
            }
            Err(e) => {
                if !args.continue_on_error {
                    anyhow::bail!("Failed to read {}: {}", path.display(), e);
                }
                warn!("Failed to read {}: {}", path.display(), e);
                results.push(FileResult {
                    path: path.clone(),
                    invoice: None,
                    error: Some(e.to_string()),
                    processing_time_ms: 0,
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Write outputs
    let successful: Vec<_> = results.iter().filter(|r| r.invoice.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    for result in &successful {
        if let (Some(invoice), Some(output_dir)) = (&result.invoice, &args.output_dir) {
            let output_name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("invoice");

            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Text => "txt",
            };

            let output_path = output_dir.join(format!("{}.{}", output_name, extension));
            let content = format_invoice(invoice, args.format, config.output.pretty)?;

            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Print summary
    println!();
    println!(
        "{} Decoded {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
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

fn write_summary(path: &PathBuf, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "invoice_no",
        "invoice_date",
        "seller",
        "total_gross_worth",
        "missing_fields",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(invoice) = &result.invoice {
            let field = |value: &Option<donex_core::FieldValue>| {
                value.as_ref().map(|v| v.to_string()).unwrap_or_default()
            };

            wtr.write_record([
                filename,
                "success",
                &field(&invoice.header.invoice_no),
                &field(&invoice.header.invoice_date),
                &field(&invoice.header.seller),
                &field(&invoice.summary.total_gross_worth),
                &invoice.missing_fields().len().to_string(),
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
