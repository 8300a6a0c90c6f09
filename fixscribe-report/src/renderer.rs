/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Fixed-width report rendering.
//!
//! This module turns a sequence of resolved fields into one rendered message
//! block: three pipe-delimited columns per field line, an optional dash rule
//! around every line, and a dot line terminating the block.

use fixscribe_core::{RenderConfig, ResolvedField};

/// Renders resolved fields into fixed-width text blocks.
///
/// The row and message separators are built once from the configuration and
/// reused for every message.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
    row_separator: String,
    msg_separator: String,
}

impl Renderer {
    /// Creates a renderer for the given configuration.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        let row_separator = build_row_separator(&config);
        let msg_separator = build_msg_separator(&config);
        Self {
            config,
            row_separator,
            msg_separator,
        }
    }

    /// Renders one message block.
    ///
    /// Each field becomes one line of three space-padded columns. With
    /// `row_lines` enabled, a dash rule precedes each field line and follows
    /// the last one. The block always ends with the message separator, even
    /// when `fields` is empty.
    ///
    /// # Arguments
    /// * `fields` - The resolved fields of one input line, in line order
    #[must_use]
    pub fn render(&self, fields: &[ResolvedField<'_>]) -> String {
        let mut block = String::new();

        for field in fields {
            if self.config.row_lines {
                block.push_str(&self.row_separator);
            }
            self.render_field(&mut block, field);
        }
        if self.config.row_lines && !fields.is_empty() {
            block.push_str(&self.row_separator);
        }

        block.push_str(&self.msg_separator);
        block
    }

    /// Renders one field line into `block`.
    fn render_field(&self, block: &mut String, field: &ResolvedField<'_>) {
        push_padded(block, field.tag, self.config.tag_width);
        block.push_str(" | ");
        push_padded(block, field.name, self.config.name_width);
        block.push_str(" | ");
        block.push_str(field.value);
        block.push_str(&field.annotation);
        block.push('\n');
    }

    /// Returns the dash rule drawn around field lines.
    #[must_use]
    pub fn row_separator(&self) -> &str {
        &self.row_separator
    }

    /// Returns the dot line terminating each message block.
    #[must_use]
    pub fn msg_separator(&self) -> &str {
        &self.msg_separator
    }
}

/// Appends `text` right-padded with spaces to `width`. Text longer than the
/// column is left as is, never truncated.
fn push_padded(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    for _ in text.len()..width {
        out.push(' ');
    }
}

/// Builds the dash rule: dashes matching the three column widths, joined by
/// `-+-`.
fn build_row_separator(config: &RenderConfig) -> String {
    let mut sep = String::new();
    sep.push_str(&"-".repeat(config.tag_width));
    sep.push_str("-+-");
    sep.push_str(&"-".repeat(config.name_width));
    sep.push_str("-+-");
    sep.push_str(&"-".repeat(config.trailing_width));
    sep.push('\n');
    sep
}

/// Builds the dot line marking the end of one message block.
fn build_msg_separator(config: &RenderConfig) -> String {
    let mut sep = ".".repeat(config.separator_width);
    sep.push('\n');
    sep
}
