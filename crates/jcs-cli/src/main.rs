//! `jcs` CLI — canonicalize JSON per RFC 8785 from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Canonicalize JSON (stdin → stdout)
//! echo '{"b":2, "a":1}' | jcs encode
//!
//! # Canonicalize from file to file
//! jcs encode -i payload.json -o payload.canonical.json
//!
//! # Check whether a document is already in canonical form
//! jcs check -i payload.json
//! ```

use std::io::{self, Read, Write};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jcs_core::Value;

#[derive(Parser)]
#[command(name = "jcs", version, about = "RFC 8785 JSON canonicalization")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Canonicalize JSON input into RFC 8785 bytes
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Verify that the input is already in canonical form
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { input, output } => {
            let bytes = canonicalize(&read_input(input.as_deref())?)?;
            write_output(output.as_deref(), &bytes)?;
        }
        Commands::Check { input } => {
            let raw = read_input(input.as_deref())?;
            let bytes = canonicalize(&raw)?;
            // Canonical output never ends in a newline; tolerate the one a
            // text editor or shell pipeline appends.
            let trimmed = raw.strip_suffix('\n').unwrap_or(&raw);
            if bytes != trimmed.as_bytes() {
                eprintln!("input is not in canonical form");
                process::exit(1);
            }
        }
    }

    Ok(())
}

/// Parse JSON text and produce its canonical bytes.
fn canonicalize(json: &str) -> Result<Vec<u8>> {
    let parsed: serde_json::Value =
        serde_json::from_str(json).context("input is not valid JSON")?;
    let value = Value::try_from(&parsed).context("input does not fit the canonical value model")?;
    jcs_core::to_vec(&value).context("failed to canonicalize input")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, bytes).with_context(|| format!("failed to write file: {path}"))?;
        }
        None => {
            io::stdout()
                .write_all(bytes)
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}
