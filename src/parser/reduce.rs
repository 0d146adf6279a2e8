//! Document reduction: the OCR tree flattened into blocks of phrases.

use crate::model::{OcrDocument, Phrase, ReducedBlock, ReducedDocument, Word};

use super::geometry::polygon_area;
use super::options::ParseOptions;

/// Accumulator for the phrase currently being built.
///
/// Each paragraph traversal owns its own buffer; nothing is shared across
/// paragraphs or invocations.
#[derive(Default)]
struct PhraseBuffer {
    words: Vec<String>,
    area: f64,
    confidence: f64,
}

impl PhraseBuffer {
    fn push(&mut self, word: &Word) {
        self.area += polygon_area(&word.bounding_box);
        self.confidence += word.confidence.unwrap_or(1.0);
        self.words.push(word.text());
    }

    /// Close the buffer into a phrase and reset it.
    ///
    /// Returns `None` for an empty buffer or one holding only zero-length
    /// words (no characters to divide the area over).
    fn flush(&mut self) -> Option<Phrase> {
        if self.words.is_empty() {
            return None;
        }
        let words = std::mem::take(&mut self.words);
        let area = std::mem::take(&mut self.area);
        let confidence = std::mem::take(&mut self.confidence);

        let char_count: usize = words.iter().map(|w| w.chars().count()).sum();
        if char_count == 0 {
            return None;
        }
        Some(Phrase::new(
            words.clone(),
            area / char_count as f64,
            confidence / words.len() as f64,
        ))
    }
}

/// Flatten an OCR document into ordered phrases per block.
///
/// Pages are merged away. Within a paragraph, words accumulate until one
/// carries a phrase-terminating break; the buffered run then becomes a phrase
/// with an area-per-character font-size proxy and a mean confidence. Blocks
/// that produce no phrases are still emitted so block ordering survives.
pub fn reduce_document(document: &OcrDocument, options: &ParseOptions) -> ReducedDocument {
    let mut blocks = Vec::new();
    for page in &document.pages {
        for block in &page.blocks {
            let mut phrases = Vec::new();
            for paragraph in &block.paragraphs {
                let mut buffer = PhraseBuffer::default();
                for word in &paragraph.words {
                    buffer.push(word);
                    if word.ends_phrase() {
                        phrases.extend(buffer.flush());
                    }
                }
                if options.flush_unterminated {
                    phrases.extend(buffer.flush());
                }
            }
            log::debug!("reduced block: {} phrases", phrases.len());
            blocks.push(ReducedBlock { phrases });
        }
    }
    ReducedDocument { blocks }
}
