//! Text cleaning: strip everything that is not plausibly part of the name.
//!
//! Operates on the reduced phrase document. Low-confidence phrases go first,
//! then individual words are dropped when they belong to the resolved vendor,
//! carry disallowed characters, look like website fragments or boilerplate,
//! or are digit noise. Year-like tokens are normalized instead of dropped so
//! decade spellings like "1990s" survive as name fragments.

use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::model::{Phrase, ReducedBlock, ReducedDocument, ReferenceData, Vendor};

use super::matcher::closest_entry;
use super::options::ParseOptions;
use super::year::leading_year;

/// Substrings identifying website fragments.
const WEB_FRAGMENTS: [&str; 5] = ["www", ".com", ".org", ".net", ".ca"];

/// Boilerplate words that never belong to a product name.
const BOILERPLATE_WORDS: [&str; 5] = ["visit", "us", "at", "the", "order"];

fn allowed_characters() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^[A-Za-z0-9À-ÿ ·,.'"()&_-]*$"#).unwrap())
}

fn word_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\W+").unwrap())
}

/// Everything a resolved vendor contributes to word filtering.
struct VendorFilter {
    /// Name fragments plus the spaceless and full lowercase name.
    lookup: Vec<String>,
    /// Individual lowercased words of the vendor's trademark phrases.
    trademark_words: Vec<String>,
}

impl VendorFilter {
    fn new(vendor: &Vendor, refdata: &ReferenceData) -> Self {
        let name = vendor.name.to_lowercase();
        let mut lookup: Vec<String> = word_boundary()
            .split(&name)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
        lookup.push(name.chars().filter(|c| !c.is_whitespace()).collect());
        lookup.push(name);
        Self {
            lookup,
            trademark_words: refdata.trademark_words_for(vendor.id),
        }
    }
}

/// Clean one word. Returns the surviving (possibly normalized) form.
fn clean_word(raw: &str, vendor: Option<&VendorFilter>, options: &ParseOptions) -> Option<String> {
    // Some OCR backends emit decomposed accents; fold to NFC before any
    // character-class checks.
    let word: String = raw.nfc().collect();

    if word.chars().count() < 2 {
        return None;
    }

    if let Some(filter) = vendor {
        if let Some((entry, _)) = closest_entry(&word, &filter.lookup, options.match_cutoff) {
            // Vendor names ending in "Tea" must not swallow the generic word.
            if entry != "tea" {
                log::debug!("dropping vendor word {:?}", word);
                return None;
            }
        }
        if filter.trademark_words.contains(&word.to_lowercase()) {
            log::debug!("dropping trademark word {:?}", word);
            return None;
        }
    }

    if !allowed_characters().is_match(&word) {
        return None;
    }

    if word.chars().any(|c| c.is_ascii_digit()) {
        // Digit-bearing words survive only as (normalized) years.
        let prefix = leading_year(&word)?;
        let chars: Vec<char> = word.chars().collect();
        if chars.len() == 5 && (chars[4] == '5' || chars[4].eq_ignore_ascii_case(&'s')) {
            return Some(format!("{prefix}s"));
        }
        return Some(prefix);
    }

    let lowered = word.to_lowercase();
    if WEB_FRAGMENTS.iter().any(|f| lowered.contains(f)) {
        return None;
    }
    if BOILERPLATE_WORDS.contains(&lowered.as_str()) {
        return None;
    }
    Some(word)
}

/// Clean a reduced document ahead of name synthesis.
///
/// Surviving phrases keep their confidence; their font-size proxy is scaled
/// by the fraction of words that survived so that a phrase stripped of most
/// of its words stops competing for visual prominence. A phrase reduced to
/// the bare word "tea" carries no name information and is dropped whole.
pub fn clean_document(
    reduced: &ReducedDocument,
    vendor: Option<&Vendor>,
    refdata: &ReferenceData,
    options: &ParseOptions,
) -> ReducedDocument {
    let filter = vendor.map(|v| VendorFilter::new(v, refdata));

    let mut blocks = Vec::new();
    for block in &reduced.blocks {
        let mut phrases = Vec::new();
        for phrase in &block.phrases {
            if phrase.confidence < options.min_phrase_confidence {
                continue;
            }
            let survivors: Vec<String> = phrase
                .words
                .iter()
                .filter_map(|w| clean_word(w, filter.as_ref(), options))
                .collect();
            if survivors.is_empty() {
                continue;
            }
            if survivors.len() == 1 && survivors[0].to_lowercase() == "tea" {
                continue;
            }
            let font_size =
                phrase.font_size * survivors.len() as f64 / phrase.words.len() as f64;
            phrases.push(Phrase::new(survivors, font_size, phrase.confidence));
        }
        if !phrases.is_empty() {
            blocks.push(ReducedBlock { phrases });
        }
    }
    ReducedDocument { blocks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VendorTrademark;

    fn phrase(words: &[&str], font_size: f64, confidence: f64) -> Phrase {
        Phrase::new(
            words.iter().map(|s| s.to_string()).collect(),
            font_size,
            confidence,
        )
    }

    fn doc(phrases: Vec<Phrase>) -> ReducedDocument {
        ReducedDocument {
            blocks: vec![ReducedBlock { phrases }],
        }
    }

    fn vendor() -> Vendor {
        Vendor {
            id: 100,
            name: "Van Cha Tea".to_string(),
            website: String::new(),
            is_public: true,
        }
    }

    fn refdata() -> ReferenceData {
        ReferenceData {
            vendors: vec![vendor()],
            vendor_trademarks: vec![VendorTrademark {
                name: "Old Grove".to_string(),
                vendor_id: 100,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_low_confidence_phrase_dropped() {
        let cleaned = clean_document(
            &doc(vec![phrase(&["blurry", "words"], 50.0, 0.5)]),
            None,
            &ReferenceData::default(),
            &ParseOptions::default(),
        );
        assert!(cleaned.blocks.is_empty());
    }

    #[test]
    fn test_single_characters_dropped() {
        let cleaned = clean_document(
            &doc(vec![phrase(&["a", "Golden", "b", "Needle"], 60.0, 0.95)]),
            None,
            &ReferenceData::default(),
            &ParseOptions::default(),
        );
        assert_eq!(
            cleaned.blocks[0].phrases[0].words,
            vec!["Golden", "Needle"]
        );
    }

    #[test]
    fn test_vendor_words_dropped_but_tea_kept() {
        let cleaned = clean_document(
            &doc(vec![phrase(&["Van", "Cha", "Tea", "Roast"], 60.0, 0.95)]),
            Some(&vendor()),
            &refdata(),
            &ParseOptions::default(),
        );
        assert_eq!(cleaned.blocks[0].phrases[0].words, vec!["Tea", "Roast"]);
    }

    #[test]
    fn test_trademark_words_dropped() {
        let cleaned = clean_document(
            &doc(vec![phrase(&["Grove", "Needle"], 60.0, 0.95)]),
            Some(&vendor()),
            &refdata(),
            &ParseOptions::default(),
        );
        assert_eq!(cleaned.blocks[0].phrases[0].words, vec!["Needle"]);
    }

    #[test]
    fn test_disallowed_characters_dropped() {
        let cleaned = clean_document(
            &doc(vec![phrase(&["凤凰", "Dan", "Cong", "№7"], 60.0, 0.95)]),
            None,
            &ReferenceData::default(),
            &ParseOptions::default(),
        );
        assert_eq!(cleaned.blocks[0].phrases[0].words, vec!["Dan", "Cong"]);
    }

    #[test]
    fn test_decomposed_accents_survive_whitelist() {
        // "The\u{0301}" is "Thé" with a combining acute; NFC folding must
        // happen before the character whitelist.
        let cleaned = clean_document(
            &doc(vec![phrase(&["The\u{301}", "Noir"], 60.0, 0.95)]),
            None,
            &ReferenceData::default(),
            &ParseOptions::default(),
        );
        assert_eq!(cleaned.blocks[0].phrases[0].words, vec!["Thé", "Noir"]);
    }

    #[test]
    fn test_year_tokens_normalized() {
        let cleaned = clean_document(
            &doc(vec![phrase(
                &["2014", "1990s", "20145", "201403", "350g"],
                60.0,
                0.95,
            )]),
            None,
            &ReferenceData::default(),
            &ParseOptions::default(),
        );
        assert_eq!(
            cleaned.blocks[0].phrases[0].words,
            vec!["2014", "1990s", "2014s", "2014"]
        );
    }

    #[test]
    fn test_websites_and_boilerplate_dropped() {
        let cleaned = clean_document(
            &doc(vec![phrase(
                &["Visit", "us", "www.vancha.com", "Moonlight", "order"],
                60.0,
                0.95,
            )]),
            None,
            &ReferenceData::default(),
            &ParseOptions::default(),
        );
        assert_eq!(cleaned.blocks[0].phrases[0].words, vec!["Moonlight"]);
    }

    #[test]
    fn test_bare_tea_phrase_dropped() {
        let cleaned = clean_document(
            &doc(vec![phrase(&["TEA"], 90.0, 0.95), phrase(&["White", "Peony"], 70.0, 0.95)]),
            None,
            &ReferenceData::default(),
            &ParseOptions::default(),
        );
        assert_eq!(cleaned.blocks[0].phrases.len(), 1);
        assert_eq!(cleaned.blocks[0].phrases[0].words, vec!["White", "Peony"]);
    }

    #[test]
    fn test_font_size_rescaled() {
        let cleaned = clean_document(
            &doc(vec![phrase(&["x", "Silver", "Needle"], 90.0, 0.95)]),
            None,
            &ReferenceData::default(),
            &ParseOptions::default(),
        );
        let p = &cleaned.blocks[0].phrases[0];
        assert_eq!(p.words, vec!["Silver", "Needle"]);
        assert!((p.font_size - 60.0).abs() < 1e-9);
        assert!((p.confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_empty_blocks_removed() {
        let reduced = ReducedDocument {
            blocks: vec![
                ReducedBlock {
                    phrases: vec![phrase(&["??", "!!"], 10.0, 0.9)],
                },
                ReducedBlock {
                    phrases: vec![phrase(&["Keemun"], 10.0, 0.9)],
                },
            ],
        };
        let cleaned = clean_document(
            &reduced,
            None,
            &ReferenceData::default(),
            &ParseOptions::default(),
        );
        assert_eq!(cleaned.blocks.len(), 1);
        assert_eq!(cleaned.blocks[0].phrases[0].words, vec!["Keemun"]);
    }
}
