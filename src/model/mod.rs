//! Data model for label parsing.
//!
//! Three families of types live here: the OCR document tree consumed from
//! the text-detection backend, the reduced phrase document derived from it,
//! and the reference vocabularies supplied by the surrounding catalog.

mod document;
mod phrase;
mod refdata;
mod result;

pub use document::{
    Block, BoundingBox, BreakKind, OcrDocument, Page, Paragraph, Symbol, Vertex, Word,
};
pub use phrase::{Phrase, ReducedBlock, ReducedDocument};
pub use refdata::{
    Category, CategoryName, ReferenceData, Subcategory, SubcategoryName, Vendor, VendorTrademark,
};
pub use result::ParseResult;
