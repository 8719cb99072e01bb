//! Decode command - extract a structured record from one raw output file.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use donex_core::models::config::DonexConfig;
use donex_core::models::invoice::Invoice;
use donex_core::{DonutDecoder, OutputDecoder};

/// Arguments for the decode command.
#[derive(Args)]
pub struct DecodeArgs {
    /// Input file with raw model output ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Emit compact JSON regardless of configuration
    #[arg(long)]
    compact: bool,

    /// List schema fields that came back absent
    #[arg(long)]
    show_missing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: DecodeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let config = if let Some(path) = config_path {
        DonexConfig::from_file(std::path::Path::new(path))?
    } else {
        DonexConfig::default()
    };

    let raw = read_input(&args.input)?;
    info!("Decoding {} characters of model output", raw.len());

    let result = DonutDecoder::new().decode(&raw);
    debug!("Decoded in {}ms", result.processing_time_ms);

    let pretty = config.output.pretty && !args.compact;
    let output = format_invoice(&result.invoice, args.format, pretty)?;

    // Write output
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

    if args.show_missing {
        let missing = result.invoice.missing_fields();
        if missing.is_empty() {
            eprintln!("{} All schema fields present", style("ℹ").blue());
        } else {
            eprintln!(
                "{} Missing fields: {}",
                style("ℹ").blue(),
                missing.join(", ")
            );
        }
    }

    Ok(())
}

fn read_input(path: &PathBuf) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        return Ok(raw);
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(fs::read_to_string(path)?)
}

pub fn format_invoice(
    invoice: &Invoice,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(invoice)?),
        OutputFormat::Json => Ok(serde_json::to_string(invoice)?),
        OutputFormat::Text => Ok(format_text(invoice)),
    }
}

fn format_text(invoice: &Invoice) -> String {
    let field = |value: &Option<donex_core::FieldValue>| {
        value
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string())
    };

    let mut output = String::new();

    output.push_str(&format!("Invoice: {}\n", field(&invoice.header.invoice_no)));
    output.push_str(&format!("Date: {}\n", field(&invoice.header.invoice_date)));
    output.push('\n');

    output.push_str("Seller:\n");
    output.push_str(&format!("  {}\n", field(&invoice.header.seller)));
    output.push_str(&format!("  Tax ID: {}\n", field(&invoice.header.seller_tax_id)));
    output.push_str(&format!("  IBAN: {}\n", field(&invoice.header.iban)));
    output.push('\n');

    output.push_str("Client:\n");
    output.push_str(&format!("  {}\n", field(&invoice.header.client)));
    output.push_str(&format!("  Tax ID: {}\n", field(&invoice.header.client_tax_id)));
    output.push('\n');

    output.push_str("Items:\n");
    for item in &invoice.items {
        output.push_str(&format!("  Description: {}\n", field(&item.item_desc)));
        output.push_str(&format!("  Quantity:    {}\n", field(&item.item_qty)));
        output.push_str(&format!("  Net price:   {}\n", field(&item.item_net_price)));
        output.push_str(&format!("  Net worth:   {}\n", field(&item.item_net_worth)));
        output.push_str(&format!("  VAT:         {}\n", field(&item.item_vat)));
        output.push_str(&format!("  Gross worth: {}\n", field(&item.item_gross_worth)));
    }
    output.push('\n');

    output.push_str("Summary:\n");
    output.push_str(&format!("  Net:   {}\n", field(&invoice.summary.total_net_worth)));
    output.push_str(&format!("  VAT:   {}\n", field(&invoice.summary.total_vat)));
    output.push_str(&format!("  Gross: {}\n", field(&invoice.summary.total_gross_worth)));

    output
}
