/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for the FixScribe report formatter.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across all FixScribe operations.
//!
//! Failures split into two classes: errors that prevent any resolution at all
//! (a missing or malformed dictionary, broken I/O streams) abort the run,
//! while failures local to a single tag are surfaced per pair so the rest of
//! the message still renders.

use thiserror::Error;

/// Result type alias using [`ReportError`] as the error type.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Top-level error type for all FixScribe operations.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Error loading or parsing the data dictionary.
    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Error resolving a tag against the dictionary.
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// I/O error on the input or output stream.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while loading the data dictionary document.
///
/// All of these are fatal: without a dictionary no tag can be resolved,
/// so the run aborts before any input line is read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// Failed to read the dictionary file.
    #[error("failed to read dictionary: {0}")]
    Io(String),

    /// The document is not well-formed XML.
    #[error("malformed dictionary document: {0}")]
    Xml(String),

    /// The document contains no `<fields>` section.
    #[error("dictionary contains no fields section")]
    MissingFieldsSection,

    /// A `<field>` element carries a number attribute that is not a
    /// valid tag number.
    #[error("invalid field number '{value}'")]
    InvalidFieldNumber {
        /// The attribute text that failed to parse.
        value: String,
    },

    /// A required attribute is absent from a dictionary element.
    #[error("missing attribute '{attribute}' on <{element}> element")]
    MissingAttribute {
        /// The element name.
        element: String,
        /// The missing attribute name.
        attribute: String,
    },
}

/// Errors that occur while resolving one tag/value pair.
///
/// Resolution errors are scoped to a single pair: the driver reports them
/// and continues with the remaining pairs on the same line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The tag has no field definition in the dictionary.
    #[error("unknown tag '{tag}': no field definition in dictionary")]
    UnknownTag {
        /// The tag text as it appeared on the input line.
        tag: String,
    },
}
