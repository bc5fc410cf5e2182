//! Field definitions and the standard field table
//!
//! Each field is a label-anchored regex whose designated capture group holds
//! the value. The table is ordered; its order is the report row order.
//! Adding a field means appending one entry to [`STANDARD_FIELD_PATTERNS`].

use crate::error::EngineError;
use lazy_static::lazy_static;
use regex::Regex;

/// Standard field table: (field name, extraction pattern)
pub const STANDARD_FIELD_PATTERNS: &[(&str, &str)] = &[
    ("L Number", r"L Number:\s*-\s*(\d+)"),
    ("N", r"N:\s*-\s*([A-Za-z ]+)"),
    ("C Number", r"C number:\s*-\s*([\d-]+)"),
    ("F Date", r"F date:\s*-\s*([\d/]+)"),
    ("M Date", r"M Date:\s*-\s*([\d/]+)"),
    ("A Date", r"A date:\s*-\s*([\d/]+)"),
    ("P P Date", r"P P date:\s*-\s*([\d/]+)"),
    ("S", r"S:\s*-\s*([\d.]+)"),
];

/// Capture group holding the value when none is configured
pub const DEFAULT_CAPTURE_GROUP: usize = 1;

lazy_static! {
    /// Compiled standard field table
    pub static ref STANDARD_FIELDS: FieldTable =
        FieldTable::from_patterns(STANDARD_FIELD_PATTERNS).unwrap();
}

/// A named field and the pattern that locates its value
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    name: String,
    pattern: Regex,
    capture_group: usize,
}

impl FieldDefinition {
    /// Compile a field using capture group 1 as the value
    pub fn new(name: &str, pattern: &str) -> Result<Self, EngineError> {
        Self::with_capture_group(name, pattern, DEFAULT_CAPTURE_GROUP)
    }

    /// Compile a field whose value is held by `capture_group`
    ///
    /// # Errors
    /// - `EngineError::InvalidPattern` - The pattern does not compile
    /// - `EngineError::MissingCaptureGroup` - The pattern has no such group
    pub fn with_capture_group(
        name: &str,
        pattern: &str,
        capture_group: usize,
    ) -> Result<Self, EngineError> {
        let regex = Regex::new(pattern).map_err(|source| EngineError::InvalidPattern {
            field: name.to_string(),
            source,
        })?;

        // Group 0 is the whole match; a value group must be explicit
        if capture_group == 0 || capture_group >= regex.captures_len() {
            return Err(EngineError::MissingCaptureGroup {
                field: name.to_string(),
                group: capture_group,
            });
        }

        Ok(Self {
            name: name.to_string(),
            pattern: regex,
            capture_group,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn capture_group(&self) -> usize {
        self.capture_group
    }

    /// Value of the designated group in the first match, if any
    pub fn find_value<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(self.capture_group))
            .map(|m| m.as_str())
    }
}

/// Ordered set of fields with unique names
#[derive(Debug, Clone, Default)]
pub struct FieldTable {
    fields: Vec<FieldDefinition>,
}

impl FieldTable {
    /// The compiled standard table
    pub fn standard() -> Self {
        STANDARD_FIELDS.clone()
    }

    /// Compile a table from (name, pattern) pairs, in order
    pub fn from_patterns(patterns: &[(&str, &str)]) -> Result<Self, EngineError> {
        let mut table = Self::default();
        for (name, pattern) in patterns {
            table.push(FieldDefinition::new(name, pattern)?)?;
        }
        Ok(table)
    }

    /// Append a field at the end of the table
    pub fn push(&mut self, field: FieldDefinition) -> Result<(), EngineError> {
        if self.get(field.name()).is_some() {
            return Err(EngineError::DuplicateField(field.name().to_string()));
        }
        self.fields.push(field);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(FieldDefinition::name).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standard_table_order() {
        let table = FieldTable::standard();
        assert_eq!(
            table.names(),
            vec!["L Number", "N", "C Number", "F Date", "M Date", "A Date", "P P Date", "S"]
        );
    }

    #[test]
    fn test_find_value_uses_first_match() {
        let field = FieldDefinition::new("L Number", r"L Number:\s*-\s*(\d+)").unwrap();
        assert_eq!(
            field.find_value("L Number: - 111 and later L Number: - 222"),
            Some("111")
        );
        assert_eq!(field.find_value("L Number: 111"), None);
    }

    #[test]
    fn test_patterns_are_case_sensitive() {
        let table = FieldTable::standard();
        let c_number = table.get("C Number").unwrap();
        assert_eq!(c_number.find_value("C number: - 12-34"), Some("12-34"));
        assert_eq!(c_number.find_value("C Number: - 12-34"), None);
    }

    #[test]
    fn test_name_value_stops_at_line_end() {
        let table = FieldTable::standard();
        let n = table.get("N").unwrap();
        assert_eq!(n.find_value("N: - John Smith\nS: - 1.5"), Some("John Smith"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = FieldDefinition::new("Broken", r"Broken:\s*(\d+").unwrap_err();
        assert!(matches!(err, EngineError::InvalidPattern { .. }));
    }

    #[test]
    fn test_pattern_without_group_rejected() {
        let err = FieldDefinition::new("Plain", r"Plain:\s*\d+").unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingCaptureGroup { group: 1, .. }
        ));
    }

    #[test]
    fn test_capture_group_zero_rejected() {
        let err = FieldDefinition::with_capture_group("Whole", r"(\d+)", 0).unwrap_err();
        assert!(matches!(err, EngineError::MissingCaptureGroup { group: 0, .. }));
    }

    #[test]
    fn test_second_capture_group() {
        let field =
            FieldDefinition::with_capture_group("Ref", r"(Ref|Reference):\s*(\w+)", 2).unwrap();
        assert_eq!(field.find_value("Reference: AB12"), Some("AB12"));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = FieldTable::from_patterns(&[("S", r"S:\s*(\d+)"), ("S", r"S=(\d+)")]);
        assert!(matches!(result, Err(EngineError::DuplicateField(name)) if name == "S"));
    }
}
