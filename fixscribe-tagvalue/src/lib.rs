/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixScribe Tag-Value
//!
//! Zero-copy FIX tag=value line tokenization for FixScribe.
//!
//! This crate splits one line of a FIX message log into ordered
//! [`TagValuePair`](fixscribe_core::TagValuePair)s using the wire delimiter,
//! with `memchr` for fast delimiter search.

pub mod splitter;

pub use fixscribe_core::SOH;
pub use splitter::{EQUALS, parse_tag, split_line};
