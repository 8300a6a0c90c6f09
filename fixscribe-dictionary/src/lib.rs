/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixScribe Dictionary
//!
//! FIX data dictionary parsing and field lookup for FixScribe.
//!
//! This crate provides:
//! - **Schema definitions**: Field definitions with tag, name, and ordered
//!   enum values
//! - **Dictionary loading**: QuickFIX XML format parser for the `<fields>`
//!   section
//! - **Tag lookup**: O(1) field lookup by tag number

pub mod loader;
pub mod schema;

pub use loader::{load, parse_dictionary};
pub use schema::{Dictionary, EnumValue, FieldDef};
