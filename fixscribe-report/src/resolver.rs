/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Tag resolution against the data dictionary.
//!
//! This module turns one [`TagValuePair`] into a [`ResolvedField`]: the
//! field name from the dictionary plus, for enumerated fields, the enum
//! annotation. A tag with no field definition is a per-pair error; the
//! caller decides whether to skip the pair or abort.

use fixscribe_core::error::ResolveError;
use fixscribe_core::{RenderConfig, ResolvedField, TagValuePair};
use fixscribe_dictionary::{Dictionary, FieldDef};
use fixscribe_tagvalue::parse_tag;

/// Marker embedded in the output when a value matches none of the declared
/// enum codes. Reported in-line, not as a process error.
const NO_MATCHING_ENUM: &str = " (ERROR: NO MATCHING ENUM. CHECK DICTIONARY)";

/// Resolves one tag/value pair against the dictionary.
///
/// # Arguments
/// * `pair` - The tag/value pair from the input line
/// * `dict` - The loaded data dictionary
/// * `config` - Render configuration (enum visibility, annotation padding)
///
/// # Errors
/// Returns `ResolveError::UnknownTag` if the tag text is not a valid tag
/// number or the dictionary has no definition for it.
pub fn resolve<'a>(
    pair: TagValuePair<'a>,
    dict: &'a Dictionary,
    config: &RenderConfig,
) -> Result<ResolvedField<'a>, ResolveError> {
    let field = parse_tag(pair.tag)
        .and_then(|tag| dict.get_field(tag))
        .ok_or_else(|| ResolveError::UnknownTag {
            tag: pair.tag.to_string(),
        })?;

    let annotation = if config.hide_enums {
        String::new()
    } else {
        enum_annotation(field, pair.value, config.trailing_width)
    };

    Ok(ResolvedField::new(
        pair.tag,
        &field.name,
        pair.value,
        annotation,
    ))
}

/// Builds the enum annotation for a field.
///
/// For an enumerated field this is the matched description (or the mismatch
/// marker), space-padded to `trailing_width`, followed by the full listing
/// of declared values in declaration order. The listing does not depend on
/// whether the current value matched. Free-form fields get an empty
/// annotation.
fn enum_annotation(field: &FieldDef, value: &str, trailing_width: usize) -> String {
    if !field.is_enumerated() {
        return String::new();
    }

    let mut annotation = match field.description_for(value) {
        Some(description) => format!(" ({description})"),
        None => NO_MATCHING_ENUM.to_string(),
    };

    let padding = trailing_width.saturating_sub(annotation.len());
    annotation.push_str(&" ".repeat(padding));

    for v in &field.values {
        annotation.push_str(&v.code);
        annotation.push_str(" : ");
        annotation.push_str(&v.description);
        annotation.push_str(", ");
    }

    annotation
}
