//! Label parsing pipeline.
//!
//! The stages run in a fixed order with explicit data dependencies: reduce
//! the OCR tree to phrases, resolve vendor then category then subcategory,
//! extract the year from the raw word list, clean the phrases using the
//! resolved vendor, and synthesize the name using the resolved subcategory.

mod clean;
mod geometry;
mod matcher;
mod name;
mod options;
mod reduce;
mod resolve;
mod year;

pub use clean::clean_document;
pub use geometry::polygon_area;
pub use matcher::{find_match, Match, MatchOrigin};
pub use name::{find_name, join_words, title_case};
pub use options::ParseOptions;
pub use reduce::reduce_document;
pub use resolve::{resolve_entities, EntityMatch, ResolvedEntities};
pub use year::find_year;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{OcrDocument, ParseResult, ReferenceData};
use crate::ocr::OcrProvider;

/// Parses label OCR documents against a reference-data snapshot.
///
/// Construction takes the snapshot once; every parse reads it immutably, so
/// a parser can be shared across threads and documents freely.
pub struct LabelParser {
    refdata: ReferenceData,
    options: ParseOptions,
}

impl LabelParser {
    /// Create a parser over a reference-data snapshot with default options.
    pub fn new(refdata: ReferenceData) -> Self {
        Self::with_options(refdata, ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(refdata: ReferenceData, options: ParseOptions) -> Self {
        Self { refdata, options }
    }

    /// The options in effect.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse one OCR document into a structured record.
    ///
    /// Fails only on a document with no detected text; every heuristic that
    /// finds nothing simply leaves its result field absent.
    pub fn parse(&self, document: &OcrDocument) -> Result<ParseResult> {
        let words = document.word_texts();
        if document.pages.is_empty() || words.is_empty() {
            return Err(Error::EmptyDocument);
        }

        let reduced = reduce_document(document, &self.options);
        let entities = resolve_entities(&words, &self.refdata, self.options.match_cutoff);
        let year = find_year(&words);

        let vendor = entities
            .vendor
            .as_ref()
            .and_then(|m| self.refdata.vendor_by_id(m.id));
        let cleaned = clean_document(&reduced, vendor, &self.refdata, &self.options);

        let subcategory = entities
            .subcategory
            .as_ref()
            .and_then(|m| self.refdata.subcategory_by_id(m.id));
        let name = find_name(&cleaned, subcategory, &self.refdata, &self.options);

        let mut result = ParseResult::new(reduced);
        if let Some(m) = &entities.vendor {
            result.vendor = Some(m.id);
            result.vendor_confidence = m.confidence;
        }
        if let Some(m) = &entities.category {
            result.category = Some(m.id);
            result.category_confidence = m.confidence;
        }
        if let Some(m) = &entities.subcategory {
            result.subcategory = Some(m.id);
            result.subcategory_confidence = m.confidence;
        }
        result.year = year;
        result.name = name;
        Ok(result)
    }

    /// Run OCR on an image through the given provider, then parse the
    /// resulting document.
    ///
    /// A provider failure aborts the whole parse; no partial result is
    /// produced.
    pub fn parse_image<P: OcrProvider>(&self, provider: &P, image: &[u8]) -> Result<ParseResult> {
        let document = provider.detect(image)?;
        self.parse(&document)
    }

    /// Parse many independent documents in parallel.
    ///
    /// Results come back in input order. Each parse is independent; one
    /// empty document does not affect its neighbors.
    pub fn parse_batch(&self, documents: &[OcrDocument]) -> Vec<Result<ParseResult>> {
        documents.par_iter().map(|doc| self.parse(doc)).collect()
    }
}
