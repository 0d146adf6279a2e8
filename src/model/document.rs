//! OCR document tree types.
//!
//! Mirrors the hierarchical shape returned by document text detection
//! backends: pages contain blocks, blocks contain paragraphs, paragraphs
//! contain words, and words contain symbols. Every level is a plain data
//! struct so that a backend response can be deserialized straight into it.

use serde::{Deserialize, Serialize};

/// A detected break attached to a symbol, signalling what follows it.
///
/// The numeric codes match the wire enumeration used by document text
/// detection APIs; only [`BreakKind::EolSureSpace`] and
/// [`BreakKind::LineBreak`] terminate a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum BreakKind {
    /// No break information.
    #[default]
    Unknown,
    /// Regular space.
    Space,
    /// Space that certainly separates two words.
    SureSpace,
    /// End of line, certainly followed by a new line.
    EolSureSpace,
    /// Hyphenated line wrap.
    Hyphen,
    /// End of paragraph or line.
    LineBreak,
}

impl BreakKind {
    /// Whether this break terminates the current phrase.
    pub fn ends_phrase(self) -> bool {
        matches!(self, BreakKind::EolSureSpace | BreakKind::LineBreak)
    }
}

impl From<u8> for BreakKind {
    fn from(code: u8) -> Self {
        match code {
            1 => BreakKind::Space,
            2 => BreakKind::SureSpace,
            3 => BreakKind::EolSureSpace,
            4 => BreakKind::Hyphen,
            5 => BreakKind::LineBreak,
            _ => BreakKind::Unknown,
        }
    }
}

impl From<BreakKind> for u8 {
    fn from(kind: BreakKind) -> Self {
        match kind {
            BreakKind::Unknown => 0,
            BreakKind::Space => 1,
            BreakKind::SureSpace => 2,
            BreakKind::EolSureSpace => 3,
            BreakKind::Hyphen => 4,
            BreakKind::LineBreak => 5,
        }
    }
}

/// A 2D vertex of a bounding polygon.
///
/// OCR backends omit coordinates for vertices they could not place, so both
/// coordinates are optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Horizontal position in image pixels.
    pub x: Option<f64>,
    /// Vertical position in image pixels.
    pub y: Option<f64>,
}

impl Vertex {
    /// Create a vertex with both coordinates present.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Return the coordinate pair if both components are present.
    pub fn resolve(&self) -> Option<(f64, f64)> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }
}

/// The bounding polygon of a detected word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Polygon vertices in drawing order. The ring may be left open.
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}

impl BoundingBox {
    /// Axis-aligned rectangle helper, vertices in clockwise order.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            vertices: vec![
                Vertex::at(x, y),
                Vertex::at(x + width, y),
                Vertex::at(x + width, y + height),
                Vertex::at(x, y + height),
            ],
        }
    }
}

/// A single recognized symbol (glyph) within a word.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Symbol {
    /// Recognized text, usually one character.
    pub text: String,

    /// Break detected after this symbol.
    #[serde(default)]
    pub detected_break: BreakKind,
}

impl Symbol {
    /// Create a symbol with no break information.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detected_break: BreakKind::Unknown,
        }
    }

    /// Set the detected break.
    pub fn with_break(mut self, kind: BreakKind) -> Self {
        self.detected_break = kind;
        self
    }
}

/// A detected word: symbols plus geometry and recognition confidence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Word {
    /// Symbols making up the word.
    #[serde(default)]
    pub symbols: Vec<Symbol>,

    /// Bounding polygon of the word.
    #[serde(default)]
    pub bounding_box: BoundingBox,

    /// Recognition confidence in [0, 1]. Absent means "not reported" and is
    /// treated as full confidence downstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Word {
    /// Create a word holding the given text as a single symbol.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            symbols: vec![Symbol::new(text)],
            bounding_box: BoundingBox::default(),
            confidence: None,
        }
    }

    /// Set the bounding polygon.
    pub fn with_box(mut self, bounding_box: BoundingBox) -> Self {
        self.bounding_box = bounding_box;
        self
    }

    /// Set the recognition confidence.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Mark the last symbol with the given break kind.
    pub fn with_break(mut self, kind: BreakKind) -> Self {
        if let Some(last) = self.symbols.last_mut() {
            last.detected_break = kind;
        }
        self
    }

    /// Concatenated symbol text.
    pub fn text(&self) -> String {
        self.symbols.iter().map(|s| s.text.as_str()).collect()
    }

    /// Whether any symbol carries a phrase-terminating break.
    pub fn ends_phrase(&self) -> bool {
        self.symbols.iter().any(|s| s.detected_break.ends_phrase())
    }
}

/// A paragraph of detected words.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Words in reading order.
    #[serde(default)]
    pub words: Vec<Word>,
}

/// A block of detected paragraphs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Block {
    /// Paragraphs in reading order.
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

/// A page of detected blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// Blocks in reading order.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// The full OCR response for one label image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OcrDocument {
    /// Pages in the response. Label photographs normally produce one.
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl OcrDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten the tree into the ordered list of word texts.
    pub fn word_texts(&self) -> Vec<String> {
        let mut words = Vec::new();
        for page in &self.pages {
            for block in &page.blocks {
                for paragraph in &block.paragraphs {
                    for word in &paragraph.words {
                        words.push(word.text());
                    }
                }
            }
        }
        words
    }

    /// Whether the document holds no detected words at all.
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(|page| {
            page.blocks
                .iter()
                .all(|b| b.paragraphs.iter().all(|p| p.words.is_empty()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_kind_roundtrip() {
        for code in 0u8..=6 {
            let kind = BreakKind::from(code);
            if code <= 5 {
                assert_eq!(u8::from(kind), code);
            } else {
                assert_eq!(kind, BreakKind::Unknown);
            }
        }
    }

    #[test]
    fn test_break_kind_ends_phrase() {
        assert!(BreakKind::EolSureSpace.ends_phrase());
        assert!(BreakKind::LineBreak.ends_phrase());
        assert!(!BreakKind::Space.ends_phrase());
        assert!(!BreakKind::Hyphen.ends_phrase());
    }

    #[test]
    fn test_word_text() {
        let word = Word {
            symbols: vec![Symbol::new("S"), Symbol::new("h"), Symbol::new("u")],
            ..Default::default()
        };
        assert_eq!(word.text(), "Shu");
    }

    #[test]
    fn test_word_ends_phrase() {
        let word = Word::from_text("Puer").with_break(BreakKind::LineBreak);
        assert!(word.ends_phrase());

        let word = Word::from_text("Puer").with_break(BreakKind::Space);
        assert!(!word.ends_phrase());
    }

    #[test]
    fn test_vertex_resolve() {
        assert_eq!(Vertex::at(1.0, 2.0).resolve(), Some((1.0, 2.0)));
        assert_eq!(
            Vertex {
                x: Some(1.0),
                y: None
            }
            .resolve(),
            None
        );
    }

    #[test]
    fn test_word_texts_flattening() {
        let doc = OcrDocument {
            pages: vec![Page {
                blocks: vec![Block {
                    paragraphs: vec![Paragraph {
                        words: vec![Word::from_text("Iron"), Word::from_text("Goddess")],
                    }],
                }],
            }],
        };
        assert_eq!(doc.word_texts(), vec!["Iron", "Goddess"]);
        assert!(!doc.is_empty());
        assert!(OcrDocument::new().is_empty());
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "pages": [{
                "blocks": [{
                    "paragraphs": [{
                        "words": [{
                            "symbols": [
                                {"text": "T"},
                                {"text": "e"},
                                {"text": "a", "detected_break": 5}
                            ],
                            "bounding_box": {"vertices": [
                                {"x": 0.0, "y": 0.0},
                                {"x": 10.0, "y": 0.0},
                                {"x": 10.0, "y": 10.0},
                                {"x": 0.0}
                            ]},
                            "confidence": 0.97
                        }]
                    }]
                }]
            }]
        }"#;
        let doc: OcrDocument = serde_json::from_str(json).unwrap();
        let word = &doc.pages[0].blocks[0].paragraphs[0].words[0];
        assert_eq!(word.text(), "Tea");
        assert!(word.ends_phrase());
        assert_eq!(word.bounding_box.vertices[3].resolve(), None);
    }
}
