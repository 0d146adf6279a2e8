//! Parse result type.

use serde::{Deserialize, Serialize};

use super::ReducedDocument;

/// The structured best-guess record produced for one label image.
///
/// Field presence signals "found": absent fields are omitted from the JSON
/// serialization entirely rather than emitted as null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseResult {
    /// The reduced text-detection document the guesses were derived from.
    pub dtd: ReducedDocument,

    /// Matched category id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<u32>,

    /// Category match confidence. Absent when the category was derived from
    /// the matched subcategory's parent rather than matched independently.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_confidence: Option<f64>,

    /// Matched subcategory id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<u32>,

    /// Subcategory match confidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory_confidence: Option<f64>,

    /// Matched vendor id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<u32>,

    /// Vendor match confidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_confidence: Option<f64>,

    /// Latest plausible vintage year printed on the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,

    /// Guessed product name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ParseResult {
    /// Create a result holding only the reduced document.
    pub fn new(dtd: ReducedDocument) -> Self {
        Self {
            dtd,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted() {
        let result = ParseResult::new(ReducedDocument::default());
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"dtd\""));
        assert!(!json.contains("category"));
        assert!(!json.contains("year"));
        assert!(!json.contains("name"));
    }

    #[test]
    fn test_present_fields_are_emitted() {
        let result = ParseResult {
            year: Some(2014),
            name: Some("Mi Lan Xiang".to_string()),
            ..ParseResult::new(ReducedDocument::default())
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"year\":2014"));
        assert!(json.contains("\"name\":\"Mi Lan Xiang\""));
    }
}
