/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! QuickFIX XML dictionary loader.
//!
//! This module parses the `<fields>` section of a QuickFIX-style data
//! dictionary document into a [`Dictionary`]. Each `<field>` element
//! contributes its `number` and `name` attributes plus any `<value>`
//! children (`enum` code and `description`), preserving declaration order.
//!
//! Everything outside the `<fields>` section (header, trailer, message
//! definitions) is skipped: message-level `<field>` references carry no
//! `number` attribute and are not field definitions.

use crate::schema::{Dictionary, EnumValue, FieldDef};
use fixscribe_core::error::DictionaryError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::Path;

/// Loads a data dictionary document from a file.
///
/// # Arguments
/// * `path` - Path to the dictionary XML file
///
/// # Errors
/// Returns `DictionaryError` if the file cannot be read or the document
/// cannot be parsed.
pub fn load(path: impl AsRef<Path>) -> Result<Dictionary, DictionaryError> {
    let xml =
        fs::read_to_string(path.as_ref()).map_err(|e| DictionaryError::Io(e.to_string()))?;
    parse_dictionary(&xml)
}

/// Parses a data dictionary document into a [`Dictionary`].
///
/// # Arguments
/// * `xml` - The dictionary document text
///
/// # Errors
/// Returns `DictionaryError` if the document is not well-formed, has no
/// `<fields>` section, or a field definition is incomplete.
pub fn parse_dictionary(xml: &str) -> Result<Dictionary, DictionaryError> {
    let mut reader = Reader::from_str(xml);

    let mut dict = Dictionary::new();
    let mut in_fields = false;
    let mut seen_fields = false;
    let mut current: Option<FieldDef> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"fields" => {
                    in_fields = true;
                    seen_fields = true;
                }
                b"field" if in_fields => current = Some(parse_field(&e)?),
                b"value" if in_fields => {
                    if let Some(field) = current.as_mut() {
                        field.values.push(parse_value(&e)?);
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"fields" => seen_fields = true,
                b"field" if in_fields => dict.add_field(parse_field(&e)?),
                b"value" if in_fields => {
                    if let Some(field) = current.as_mut() {
                        field.values.push(parse_value(&e)?);
                    }
                }
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"fields" => in_fields = false,
                b"field" => {
                    if let Some(field) = current.take() {
                        dict.add_field(field);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(DictionaryError::Xml(e.to_string())),
        }
    }

    if !seen_fields {
        return Err(DictionaryError::MissingFieldsSection);
    }

    Ok(dict)
}

/// Builds a field definition from a `<field>` element.
fn parse_field(e: &BytesStart<'_>) -> Result<FieldDef, DictionaryError> {
    let number = require_attr(e, "field", "number")?;
    let name = require_attr(e, "field", "name")?;
    let tag = number
        .parse::<u32>()
        .map_err(|_| DictionaryError::InvalidFieldNumber { value: number })?;
    Ok(FieldDef::new(tag, name))
}

/// Builds an enum value from a `<value>` element.
fn parse_value(e: &BytesStart<'_>) -> Result<EnumValue, DictionaryError> {
    let code = require_attr(e, "value", "enum")?;
    let description = require_attr(e, "value", "description")?;
    Ok(EnumValue::new(code, description))
}

/// Returns a required attribute value, unescaped.
fn require_attr(
    e: &BytesStart<'_>,
    element: &str,
    attribute: &str,
) -> Result<String, DictionaryError> {
    find_attr(e, attribute)?.ok_or_else(|| DictionaryError::MissingAttribute {
        element: element.to_string(),
        attribute: attribute.to_string(),
    })
}

/// Looks up an attribute on an element by name.
fn find_attr(e: &BytesStart<'_>, name: &str) -> Result<Option<String>, DictionaryError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| DictionaryError::Xml(format!("invalid attribute: {e}")))?;
        if attr.key.as_ref() == name.as_bytes() {
            let value = attr
                .unescape_value()
                .map_err(|e| DictionaryError::Xml(format!("invalid attribute value: {e}")))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}
