//! # leaflabel
//!
//! Tea-package label parsing for Rust.
//!
//! Takes the OCR response for a photographed tea label plus reference name
//! lists (categories, subcategories, vendors) and produces a best-guess
//! structured record: product name, category, subcategory, vendor and
//! vintage year, each with a confidence score.
//!
//! ## Quick Start
//!
//! ```no_run
//! use leaflabel::{parse, OcrDocument, ReferenceData};
//!
//! fn main() -> leaflabel::Result<()> {
//!     let document: OcrDocument =
//!         serde_json::from_str(&std::fs::read_to_string("label.json")?)?;
//!     let refdata: ReferenceData =
//!         serde_json::from_str(&std::fs::read_to_string("refdata.json")?)?;
//!
//!     let result = parse(&document, &refdata)?;
//!     if let Some(name) = &result.name {
//!         println!("{name}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! - **Reduce**: the page/block/paragraph/word/symbol tree collapses into
//!   phrases annotated with a font-size proxy (bounding-box area per glyph)
//!   and a mean recognition confidence
//! - **Resolve**: vendor, category and subcategory vocabularies are fuzzy
//!   matched over 1..4-word windows with a spaceless fallback, then
//!   cross-checked for conflicts
//! - **Clean**: vendor marks, fine print, websites and boilerplate are
//!   stripped from the phrases
//! - **Synthesize**: the words of the largest remaining text form the name,
//!   with garbled subcategory fragments replaced by canonical spellings
//!
//! All heuristics are deterministic and CPU-bound. A heuristic that finds
//! nothing leaves the corresponding result field absent rather than failing.

pub mod error;
pub mod model;
pub mod ocr;
pub mod parser;

pub use error::{Error, Result};
pub use model::{
    Block, BoundingBox, BreakKind, Category, CategoryName, OcrDocument, Page, Paragraph,
    ParseResult, Phrase, ReducedBlock, ReducedDocument, ReferenceData, Subcategory,
    SubcategoryName, Symbol, Vendor, VendorTrademark, Vertex, Word,
};
pub use ocr::OcrProvider;
pub use parser::{
    clean_document, find_match, find_name, find_year, join_words, polygon_area, reduce_document,
    resolve_entities, title_case, LabelParser, Match, MatchOrigin, ParseOptions,
};

/// Parse one OCR document against a reference-data snapshot.
///
/// Convenience wrapper building a [`LabelParser`] with default options.
pub fn parse(document: &OcrDocument, refdata: &ReferenceData) -> Result<ParseResult> {
    LabelParser::new(refdata.clone()).parse(document)
}

/// Parse with custom options.
pub fn parse_with_options(
    document: &OcrDocument,
    refdata: &ReferenceData,
    options: ParseOptions,
) -> Result<ParseResult> {
    LabelParser::with_options(refdata.clone(), options).parse(document)
}

/// Parse from raw JSON payloads.
///
/// `document_json` must hold the OCR document tree and `refdata_json` the
/// reference-data snapshot.
pub fn parse_json(document_json: &str, refdata_json: &str) -> Result<ParseResult> {
    let document: OcrDocument = serde_json::from_str(document_json)?;
    let refdata: ReferenceData = serde_json::from_str(refdata_json)?;
    parse(&document, &refdata)
}
