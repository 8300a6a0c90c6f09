/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! FixScribe command-line entry point.
//!
//! Parses FIX messages from a text file against a data dictionary and writes
//! them out with field names and enum information. Argument validation, file
//! plumbing, and exit-code signaling live here; the formatting pipeline is
//! in `fixscribe-report`.

use anyhow::Context;
use clap::Parser;
use fixscribe_core::RenderConfig;
use fixscribe_report::run_report;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Parse FIX messages from a text file against a Data Dictionary and output
/// them with field names and enum information.
#[derive(Debug, Parser)]
#[command(name = "fixscribe", version, about)]
struct Args {
    /// input text file path.
    #[arg(long)]
    input: PathBuf,

    /// output text file path.
    #[arg(long)]
    output: PathBuf,

    /// data dictionary xml file path.
    #[arg(long = "data_dictionary", visible_alias = "dd")]
    data_dictionary: PathBuf,

    /// hide enum annotations and listings.
    #[arg(long)]
    hide_enums: bool,

    /// separates each row with lines for visual clarity.
    #[arg(long)]
    row_lines: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let dict = fixscribe_dictionary::load(&args.data_dictionary).with_context(|| {
        format!(
            "failed to load data dictionary '{}'",
            args.data_dictionary.display()
        )
    })?;

    let input = File::open(&args.input)
        .with_context(|| format!("failed to open input file '{}'", args.input.display()))?;
    let mut reader = BufReader::new(input);

    let output = File::create(&args.output)
        .with_context(|| format!("failed to create output file '{}'", args.output.display()))?;
    let mut writer = BufWriter::new(output);

    let config = RenderConfig::new()
        .with_hide_enums(args.hide_enums)
        .with_row_lines(args.row_lines);

    run_report(&mut reader, &mut writer, &dict, &config)
        .with_context(|| format!("failed to write report to '{}'", args.output.display()))?;

    Ok(())
}

/// Initializes logging from the environment, defaulting to INFO.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}
