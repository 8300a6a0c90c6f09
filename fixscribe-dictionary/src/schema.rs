/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Schema definitions for FIX data dictionaries.
//!
//! This module defines the structures that represent the `<fields>` section
//! of a QuickFIX-style dictionary:
//! - [`EnumValue`]: One permitted value of an enumerated field
//! - [`FieldDef`]: Field definition with tag, name, and ordered enum values
//! - [`Dictionary`]: Field definitions indexed by tag number

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One permitted value of an enumerated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// The wire code (the `enum` attribute).
    pub code: String,
    /// Human-readable description of the code.
    pub description: String,
}

impl EnumValue {
    /// Creates a new enum value.
    ///
    /// # Arguments
    /// * `code` - The wire code
    /// * `description` - The human-readable description
    #[must_use]
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

/// Definition of a FIX field.
///
/// `values` preserves the declaration order of the dictionary document,
/// since the full enum listing in the rendered report follows it. An empty
/// `values` means the field is free-form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field tag number.
    pub tag: u32,
    /// Field name.
    pub name: String,
    /// Permitted values for enumerated fields, in declaration order.
    pub values: Vec<EnumValue>,
}

impl FieldDef {
    /// Creates a new free-form field definition.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    /// * `name` - The field name
    #[must_use]
    pub fn new(tag: u32, name: impl Into<String>) -> Self {
        Self {
            tag,
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Adds permitted values for an enumerated field.
    #[must_use]
    pub fn with_values(mut self, values: Vec<EnumValue>) -> Self {
        self.values = values;
        self
    }

    /// Returns true if the field is enumerated.
    #[inline]
    #[must_use]
    pub fn is_enumerated(&self) -> bool {
        !self.values.is_empty()
    }

    /// Looks up the description for a wire code.
    ///
    /// # Arguments
    /// * `code` - The value text to match
    #[must_use]
    pub fn description_for(&self, code: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.code == code)
            .map(|v| v.description.as_str())
    }
}

/// Field definitions indexed by tag number.
///
/// Built once when the dictionary document is loaded and read-only for the
/// remainder of the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dictionary {
    /// Field definitions indexed by tag.
    fields: HashMap<u32, FieldDef>,
}

impl Dictionary {
    /// Creates a new empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Adds a field definition. A later definition for the same tag
    /// replaces the earlier one.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.insert(field.tag, field);
    }

    /// Gets a field definition by tag.
    #[must_use]
    pub fn get_field(&self, tag: u32) -> Option<&FieldDef> {
        self.fields.get(&tag)
    }

    /// Returns the number of field definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the dictionary contains no field definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over all field definitions.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_def_free_form() {
        let field = FieldDef::new(11, "ClOrdID");
        assert_eq!(field.tag, 11);
        assert_eq!(field.name, "ClOrdID");
        assert!(!field.is_enumerated());
        assert_eq!(field.description_for("1"), None);
    }

    #[test]
    fn test_field_def_enumerated() {
        let field = FieldDef::new(54, "Side").with_values(vec![
            EnumValue::new("1", "BUY"),
            EnumValue::new("2", "SELL"),
        ]);
        assert!(field.is_enumerated());
        assert_eq!(field.description_for("1"), Some("BUY"));
        assert_eq!(field.description_for("2"), Some("SELL"));
        assert_eq!(field.description_for("9"), None);
    }

    #[test]
    fn test_field_def_value_order() {
        let field = FieldDef::new(40, "OrdType").with_values(vec![
            EnumValue::new("2", "LIMIT"),
            EnumValue::new("1", "MARKET"),
        ]);
        let codes: Vec<&str> = field.values.iter().map(|v| v.code.as_str()).collect();
        assert_eq!(codes, ["2", "1"]);
    }

    #[test]
    fn test_dictionary_field_operations() {
        let mut dict = Dictionary::new();
        dict.add_field(FieldDef::new(35, "MsgType"));

        assert_eq!(dict.len(), 1);
        assert!(dict.get_field(35).is_some());
        assert!(dict.get_field(999).is_none());
    }

    #[test]
    fn test_dictionary_last_definition_wins() {
        let mut dict = Dictionary::new();
        dict.add_field(FieldDef::new(35, "MsgType"));
        dict.add_field(FieldDef::new(35, "MsgTypeOverride"));

        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get_field(35).unwrap().name, "MsgTypeOverride");
    }
}
