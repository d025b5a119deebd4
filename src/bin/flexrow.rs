//! # flexrow CLI Entry Point
//!
//! Encodes one row given on the command line and prints the result.
//!
//! ## Usage
//!
//! ```bash
//! # Anonymous fields become f1, f2, ...
//! flexrow 'John Doe' 42 true 95000.0
//!
//! # Named fields, compared against JSON
//! flexrow --name name --name age --compare-json Alice 30
//!
//! # Force a numeric-looking value to text
//! flexrow s:00123
//!
//! # Raw bytes in another format
//! flexrow --format msgpack --raw 1 2 3 > row.bin
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io::Write;

use clap::Parser;
use eyre::{Result, WrapErr};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use flexrow::{compare_with_json, encode_row_as, Format, Row, Scalar};

/// Encode a row into a self-describing binary buffer
#[derive(Parser, Debug)]
#[command(name = "flexrow", version, about, long_about = None)]
struct Cli {
    /// Output format: flex, msgpack, cbor or json
    #[arg(short, long, default_value_t = Format::Flex)]
    format: Format,

    /// Write the encoded bytes to stdout instead of a hex dump
    #[arg(long)]
    raw: bool,

    /// Also print the JSON size and the savings percentage
    #[arg(long)]
    compare_json: bool,

    /// Field names, applied to values in order; missing names become f1, f2, ...
    #[arg(short, long = "name")]
    names: Vec<String>,

    /// Field values: null, true, false, integers, floats, or text (prefix s: forces text)
    #[arg(required = true)]
    values: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.names.len() > cli.values.len() {
        eyre::bail!(
            "{} names given for {} values",
            cli.names.len(),
            cli.values.len()
        );
    }

    let row = build_row(&cli.names, &cli.values);
    debug!(fields = row.len(), format = %cli.format, "encoding row");

    let bytes = encode_row_as(cli.format, &row)
        .wrap_err_with(|| format!("failed to encode row as {}", cli.format))?;

    if cli.raw {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&bytes).wrap_err("failed to write to stdout")?;
        stdout.flush().wrap_err("failed to flush stdout")?;
        return Ok(());
    }

    println!("Size: {} bytes", bytes.len());
    println!("Hex: {}", hex(&bytes));

    if cli.compare_json {
        let cmp = compare_with_json(cli.format, &row).wrap_err("failed to encode JSON baseline")?;
        println!("JSON size: {} bytes", cmp.json_len);
        println!("Savings: {:.1}%", cmp.savings_percent());
    }
    Ok(())
}

fn build_row(names: &[String], values: &[String]) -> Row {
    let mut row = Row::with_capacity(values.len());
    for (i, value) in values.iter().enumerate() {
        row.push(names.get(i).cloned(), Scalar::parse_literal(value));
    }
    row
}

fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{:02x}", b));
    }
    out
}
