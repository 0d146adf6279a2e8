//! Reduced document types.
//!
//! The reducer collapses the five-level OCR tree into blocks of phrases: a
//! phrase is a maximal run of words not crossing a line or paragraph break,
//! annotated with an area-per-glyph font-size proxy and a mean recognition
//! confidence.

use serde::{Deserialize, Serialize};

/// A run of words between two line/paragraph break markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    /// Words in reading order.
    pub words: Vec<String>,

    /// Bounding-box area per character — a proxy for glyph size, not a true
    /// point size.
    pub font_size: f64,

    /// Mean per-word recognition confidence (missing confidences count as 1).
    pub confidence: f64,
}

impl Phrase {
    /// Create a phrase from parts.
    pub fn new(words: Vec<String>, font_size: f64, confidence: f64) -> Self {
        Self {
            words,
            font_size,
            confidence,
        }
    }
}

/// Phrases belonging to one OCR block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReducedBlock {
    /// Phrases in reading order. May be empty for blocks whose paragraphs
    /// never produced a terminated phrase.
    pub phrases: Vec<Phrase>,
}

/// The block/phrase-level simplification of an OCR document.
///
/// Pages are merged away; paragraph and word levels collapse into phrases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReducedDocument {
    /// Blocks in reading order.
    pub blocks: Vec<ReducedBlock>,
}

impl ReducedDocument {
    /// Iterate over all phrases across blocks.
    pub fn phrases(&self) -> impl Iterator<Item = &Phrase> {
        self.blocks.iter().flat_map(|b| b.phrases.iter())
    }

    /// Largest font-size proxy across all phrases, or 0 when there are none.
    pub fn max_font_size(&self) -> f64 {
        self.phrases()
            .map(|p| p.font_size)
            .fold(0.0, |acc, size| if size > acc { size } else { acc })
    }

    /// Whether no phrase survived reduction.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.phrases.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> ReducedDocument {
        ReducedDocument {
            blocks: vec![
                ReducedBlock {
                    phrases: vec![
                        Phrase::new(vec!["Golden".into(), "Needle".into()], 120.0, 0.95),
                        Phrase::new(vec!["2018".into()], 40.0, 0.9),
                    ],
                },
                ReducedBlock { phrases: vec![] },
            ],
        }
    }

    #[test]
    fn test_max_font_size() {
        assert_eq!(doc().max_font_size(), 120.0);
        assert_eq!(ReducedDocument::default().max_font_size(), 0.0);
    }

    #[test]
    fn test_phrases_iterator() {
        assert_eq!(doc().phrases().count(), 2);
    }

    #[test]
    fn test_is_empty() {
        assert!(!doc().is_empty());
        let empty = ReducedDocument {
            blocks: vec![ReducedBlock { phrases: vec![] }],
        };
        assert!(empty.is_empty());
    }
}
