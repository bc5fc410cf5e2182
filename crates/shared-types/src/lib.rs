pub mod document;
pub mod types;

pub use document::DocumentPages;
pub use types::{ReferenceMap, ReferenceValue, ValidationResult, ValidationRow};
