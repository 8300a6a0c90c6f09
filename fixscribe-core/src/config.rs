/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Render configuration.
//!
//! This module provides the configuration passed into every core operation:
//! column widths, separator width, the wire delimiter, and the two
//! user-supplied output flags. The configuration is immutable for the run.

/// SOH (Start of Header) delimiter used between FIX fields on the wire.
pub const SOH: u8 = 0x01;

/// Configuration for report rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Width of the tag number column.
    pub tag_width: usize,
    /// Width of the field name column.
    pub name_width: usize,
    /// Width the enum annotation is padded to before the full enum listing.
    pub trailing_width: usize,
    /// Width of the dot line terminating each message block.
    pub separator_width: usize,
    /// Delimiter byte between tag/value tokens on an input line.
    pub delimiter: u8,
    /// Suppress all enum annotation and listing.
    pub hide_enums: bool,
    /// Draw a dash rule around every field line.
    pub row_lines: bool,
}

impl RenderConfig {
    /// Default width of the tag number column.
    pub const DEFAULT_TAG_WIDTH: usize = 5;
    /// Default width of the field name column.
    pub const DEFAULT_NAME_WIDTH: usize = 23;
    /// Default width the enum annotation is padded to.
    pub const DEFAULT_TRAILING_WIDTH: usize = 65;
    /// Default width of the message separator line.
    pub const DEFAULT_SEPARATOR_WIDTH: usize = 100;

    /// Creates a configuration with the default column widths and both
    /// output flags off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tag_width: Self::DEFAULT_TAG_WIDTH,
            name_width: Self::DEFAULT_NAME_WIDTH,
            trailing_width: Self::DEFAULT_TRAILING_WIDTH,
            separator_width: Self::DEFAULT_SEPARATOR_WIDTH,
            delimiter: SOH,
            hide_enums: false,
            row_lines: false,
        }
    }

    /// Sets whether enum annotations and listings are suppressed.
    #[must_use]
    pub const fn with_hide_enums(mut self, hide: bool) -> Self {
        self.hide_enums = hide;
        self
    }

    /// Sets whether a dash rule is drawn around every field line.
    #[must_use]
    pub const fn with_row_lines(mut self, rows: bool) -> Self {
        self.row_lines = rows;
        self
    }

    /// Sets the delimiter byte between tag/value tokens.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}
