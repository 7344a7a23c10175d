//! assertgen Command Line Tool
//!
//! Reads a JSON document captured from a server response (for example via
//! `mockMvc.perform(...).andDo(print())`), generates the MockMvc
//! `jsonPath(...)` assertions that characterize it, writes them to an output
//! file, and echoes them to the console.
//!
//! By convention the input lives in `jsonPathInput.json` and the output goes
//! to `out/jsonPathOutput`; both can be overridden.

use anyhow::{Context, Result};
use assertgen_core::{assertions_from_json, render, OutputFormat};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "assertgen")]
#[command(version)]
#[command(about = "Generate MockMvc jsonPath assertions from a captured JSON response")]
#[command(long_about = None)]
struct Cli {
    /// Path to the captured JSON response
    #[arg(value_name = "INPUT", default_value = "jsonPathInput.json")]
    input: PathBuf,

    /// Where to write the generated assertions
    #[arg(short, long, value_name = "FILE", default_value = "out/jsonPathOutput")]
    output: PathBuf,

    /// Layout of the generated snippet
    #[arg(short, long, value_enum, default_value_t = Format::Grouped)]
    format: Format,

    /// Do not echo the result to the console
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// One combined .andExpectAll(...) block
    Grouped,
    /// Bare assertion lines, no wrapper
    Flat,
    /// Independent .andExpect(...) statements
    Statements,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Grouped => OutputFormat::Grouped,
            Format::Flat => OutputFormat::Flat,
            Format::Statements => OutputFormat::Statements,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let json = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read input file: {}", cli.input.display()))?;

    let assertions = assertions_from_json(&json)
        .with_context(|| format!("Failed to parse {} as JSON", cli.input.display()))?;

    let snippet = render(&assertions, cli.format.into());

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&cli.output, &snippet)
        .with_context(|| format!("Failed to write output file: {}", cli.output.display()))?;

    if !cli.quiet {
        println!("\nResult (dumped into {}):\n", cli.output.display());
        println!("{}", snippet);
    }

    Ok(())
}
