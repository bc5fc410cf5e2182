//! Reference value extraction from the reference page
use crate::patterns::FieldTable;
use shared_types::ReferenceMap;

/// Extract each field's reference value from the reference page text
///
/// Fields are visited in table order. The value is the designated capture
/// group of the first match; a field with no match gets an empty value,
/// which downstream means "no reference established".
pub fn extract_reference(fields: &FieldTable, reference_text: &str) -> ReferenceMap {
    fields
        .iter()
        .map(|field| {
            let value = field.find_value(reference_text).unwrap_or("");
            if value.is_empty() {
                tracing::debug!(field = field.name(), "no reference value on reference page");
            } else {
                tracing::debug!(field = field.name(), value, "extracted reference value");
            }
            (field.name(), value)
        })
        .collect()
}
