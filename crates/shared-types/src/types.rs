use serde::{Deserialize, Serialize};

/// A single extracted reference value, keyed by field name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceValue {
    pub field: String,
    pub value: String, // Empty when the field's label was not found
}

/// Field name -> reference value, in field table order
///
/// Built once per document from the reference page. Keys are exactly the
/// field names of the table that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ReferenceValue>", into = "Vec<ReferenceValue>")]
pub struct ReferenceMap {
    entries: Vec<ReferenceValue>,
}

impl ReferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field's reference value.
    ///
    /// Field names are unique: inserting an existing name replaces its value
    /// in place and keeps the original position.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.field == field) {
            Some(existing) => existing.value = value,
            None => self.entries.push(ReferenceValue { field, value }),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferenceValue> {
        self.entries.iter()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.field.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<ReferenceValue>> for ReferenceMap {
    fn from(entries: Vec<ReferenceValue>) -> Self {
        entries.into_iter().map(|e| (e.field, e.value)).collect()
    }
}

impl From<ReferenceMap> for Vec<ReferenceValue> {
    fn from(map: ReferenceMap) -> Self {
        map.entries
    }
}

impl<F, V> FromIterator<(F, V)> for ReferenceMap
where
    F: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, V)>>(iter: I) -> Self {
        let mut map = ReferenceMap::new();
        for (field, value) in iter {
            map.insert(field, value);
        }
        map
    }
}

/// Per-field outcome of a validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRow {
    pub field: String,
    pub reference: String,
    pub match_pages: Vec<usize>,     // Ascending, 1-indexed
    pub not_match_pages: Vec<usize>, // Ascending, 1-indexed
}

impl ValidationRow {
    /// Whether a reference value was established on the reference page
    pub fn has_reference(&self) -> bool {
        !self.reference.is_empty()
    }

    /// Reference present and found on every page
    pub fn is_consistent(&self) -> bool {
        self.has_reference() && self.not_match_pages.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.match_pages.len() + self.not_match_pages.len()
    }
}

/// Ordered validation rows, one per field in field table order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub page_count: usize,
    pub rows: Vec<ValidationRow>,
}

impl ValidationResult {
    pub fn row(&self, field: &str) -> Option<&ValidationRow> {
        self.rows.iter().find(|r| r.field == field)
    }

    /// Names of fields whose reference value appears on every page
    pub fn consistent_fields(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|r| r.is_consistent())
            .map(|r| r.field.as_str())
            .collect()
    }

    /// Names of fields with no reference value on the reference page
    pub fn missing_references(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|r| !r.has_reference())
            .map(|r| r.field.as_str())
            .collect()
    }

    pub fn is_consistent(&self) -> bool {
        self.rows.iter().all(ValidationRow::is_consistent)
    }
}
