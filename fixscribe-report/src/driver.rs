/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Batch report driver.
//!
//! This module streams a line-oriented message file through the formatting
//! pipeline: tokenize, resolve, render, write. Blank lines and `#` comments
//! produce no output. A tag with no field definition is logged with its line
//! number and skipped; the remaining pairs of the line still render.

use crate::renderer::Renderer;
use crate::resolver::resolve;
use fixscribe_core::error::{ResolveError, Result};
use fixscribe_core::{RenderConfig, ResolvedField};
use fixscribe_dictionary::Dictionary;
use fixscribe_tagvalue::split_line;
use std::io::{BufRead, Write};
use tracing::warn;

/// Runs the report over all lines of `input`, writing rendered blocks to
/// `output`.
///
/// The dictionary must already be loaded; lines are processed strictly in
/// file order. The writer is flushed before returning so partial output
/// survives a mid-stream failure.
///
/// # Arguments
/// * `input` - The message file reader
/// * `output` - The report writer
/// * `dict` - The loaded data dictionary
/// * `config` - Render configuration
///
/// # Errors
/// Returns `ReportError::Io` if reading a line or writing a block fails.
pub fn run_report<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    dict: &Dictionary,
    config: &RenderConfig,
) -> Result<()> {
    let renderer = Renderer::new(config.clone());

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        let message = line.trim();
        if message.is_empty() || message.starts_with('#') {
            continue;
        }

        let mut fields: Vec<ResolvedField<'_>> = Vec::new();
        for pair in split_line(message, config.delimiter) {
            match resolve(pair, dict, config) {
                Ok(field) => fields.push(field),
                Err(ResolveError::UnknownTag { tag }) => {
                    warn!("line {}: skipping unknown tag '{}'", line_number, tag);
                }
            }
        }

        output.write_all(renderer.render(&fields).as_bytes())?;
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixscribe_dictionary::{EnumValue, FieldDef};

    fn dictionary() -> Dictionary {
        let mut dict = Dictionary::new();
        dict.add_field(FieldDef::new(8, "BeginString"));
        dict.add_field(FieldDef::new(11, "ClOrdID"));
        dict.add_field(
            FieldDef::new(54, "Side").with_values(vec![EnumValue::new("1", "Buy")]),
        );
        dict
    }

    fn run(input: &str, config: &RenderConfig) -> String {
        let dict = dictionary();
        let mut output = Vec::new();
        run_report(input.as_bytes(), &mut output, &dict, config).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_run_report_single_message() {
        let report = run("54=1", &RenderConfig::new());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("54    | Side                    | 1 (Buy)"));
        assert!(lines[0].ends_with("1 : Buy, "));
        assert_eq!(lines[1], ".".repeat(100));
    }

    #[test]
    fn test_run_report_field_count_per_message() {
        let report = run("8=FIX.4.4\x0111=A1\x0154=1", &RenderConfig::new());
        let lines: Vec<&str> = report.lines().collect();
        // Three field lines plus one message separator.
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], ".".repeat(100));
    }

    #[test]
    fn test_run_report_skips_comments_and_blanks() {
        let report = run("# a comment\n\n   \n54=1\n", &RenderConfig::new());
        let lines: Vec<&str> = report.lines().collect();
        // Only the one real message produces a block.
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_run_report_unknown_tag_skipped() {
        let report = run("9999=X\x0154=1", &RenderConfig::new());
        let lines: Vec<&str> = report.lines().collect();
        // The unknown tag is dropped, the rest of the line renders.
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("54    | Side"));
    }

    #[test]
    fn test_run_report_line_with_no_pairs() {
        // Not a comment, but no valid tag=value token either: the block is
        // just the message separator.
        let report = run("garbage", &RenderConfig::new());
        assert_eq!(report, format!("{}\n", ".".repeat(100)));
    }

    #[test]
    fn test_run_report_hide_enums() {
        let config = RenderConfig::new().with_hide_enums(true);
        let report = run("54=1", &config);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0].trim_end(), "54    | Side                    | 1");
    }

    #[test]
    fn test_run_report_row_lines() {
        let config = RenderConfig::new().with_row_lines(true);
        let report = run("54=1\x0111=A1", &config);
        let lines: Vec<&str> = report.lines().collect();
        // rule, field, rule, field, rule, dots
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("------+-"));
    }

    #[test]
    fn test_run_report_idempotent() {
        let input = "8=FIX.4.4\x0154=1\n# note\n11=A1";
        let first = run(input, &RenderConfig::new());
        let second = run(input, &RenderConfig::new());
        assert_eq!(first, second);
    }

    #[test]
    fn test_run_report_multiple_messages() {
        let report = run("54=1\n11=A1", &RenderConfig::new());
        let separators = report
            .lines()
            .filter(|l| *l == ".".repeat(100))
            .count();
        assert_eq!(separators, 2);
    }
}
