//! Parsing options and configuration.

/// Options for parsing a label document.
///
/// Defaults match the thresholds the heuristics were tuned with; they rarely
/// need changing outside of experiments.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Phrases below this recognition confidence are dropped during cleaning.
    pub min_phrase_confidence: f64,

    /// Similarity cutoff for fuzzy vocabulary matching.
    pub match_cutoff: f64,

    /// Relative font-size shortfall a phrase may have from the largest phrase
    /// and still contribute to the guessed name.
    pub name_keep_ratio: f64,

    /// Whether a word run left unterminated at paragraph end is flushed as a
    /// final phrase. When disabled such runs are discarded.
    pub flush_unterminated: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the phrase confidence gate.
    pub fn with_min_phrase_confidence(mut self, confidence: f64) -> Self {
        self.min_phrase_confidence = confidence;
        self
    }

    /// Set the fuzzy-match similarity cutoff.
    pub fn with_match_cutoff(mut self, cutoff: f64) -> Self {
        self.match_cutoff = cutoff;
        self
    }

    /// Set the name-synthesis font-size keep ratio.
    pub fn with_name_keep_ratio(mut self, ratio: f64) -> Self {
        self.name_keep_ratio = ratio;
        self
    }

    /// Discard word runs not terminated by a line break instead of flushing
    /// them as a final phrase.
    pub fn drop_unterminated(mut self) -> Self {
        self.flush_unterminated = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            min_phrase_confidence: 0.8,
            match_cutoff: 0.8,
            name_keep_ratio: 0.4,
            flush_unterminated: true,
        }
    }
}
