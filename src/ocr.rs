//! The seam to the external OCR capability.

use crate::error::Result;
use crate::model::OcrDocument;

/// A document text-detection backend.
///
/// The library never performs OCR itself; a hosting service implements this
/// trait over its backend of choice (a cloud vision API, a local model) and
/// hands the provider to [`LabelParser::parse_image`]. Implementations
/// should enforce their own timeout and surface failures as
/// [`Error::Ocr`] — a provider failure aborts the parse with no partial
/// result.
///
/// [`LabelParser::parse_image`]: crate::LabelParser::parse_image
/// [`Error::Ocr`]: crate::Error::Ocr
pub trait OcrProvider {
    /// Run text detection on an image payload and return the document tree.
    fn detect(&self, image: &[u8]) -> Result<OcrDocument>;

    /// Human-readable backend name, for logs.
    fn name(&self) -> &str {
        "ocr"
    }
}
