/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixScribe Report
//!
//! Tag resolution and fixed-width report rendering for FixScribe.
//!
//! This crate provides the formatting pipeline:
//! - **Resolution**: [`resolve`] matches one tag/value pair against the data
//!   dictionary, producing the field name and enum annotation
//! - **Rendering**: [`Renderer`] turns resolved pairs into fixed-width,
//!   optionally rule-separated text blocks
//! - **Driving**: [`run_report`] streams an input file through the pipeline
//!   line by line

pub mod driver;
pub mod renderer;
pub mod resolver;

pub use driver::run_report;
pub use renderer::Renderer;
pub use resolver::resolve;
