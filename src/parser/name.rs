//! Name synthesis from the most visually prominent cleaned phrases.
//!
//! On a tea label the product name is almost always the largest remaining
//! text once vendor marks, fine print and boilerplate are stripped. Words
//! from every phrase within a tolerance band of the largest font size are
//! joined with punctuation-aware spacing, title-cased, and finally checked
//! against the resolved subcategory's known names so an OCR-garbled
//! subcategory fragment is replaced by its canonical spelling.

use std::sync::OnceLock;

use regex::Regex;
use strsim::normalized_levenshtein;

use crate::model::{ReducedDocument, ReferenceData, Subcategory};

use super::matcher::window_joined;
use super::options::ParseOptions;

/// Punctuation that attaches to the preceding word.
const CLOSING: &str = ".,?!)]}:;";

/// Punctuation that attaches to the following word.
const OPENING: &str = "([{'";

fn title_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\p{L}\p{N}]+('[\p{L}\p{N}]+)?").unwrap())
}

fn is_single(token: &str, set: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => set.contains(c),
        _ => false,
    }
}

/// Join OCR word tokens into a properly spaced string.
///
/// Closing punctuation merges into the previous word, opening brackets and
/// apostrophes into the next. A double quote alternates: the first one seen
/// opens (merges forward), the second closes (merges backward), and so on.
/// A bare hyphen or underscore between two words fuses all three tokens.
pub fn join_words(words: &[String]) -> String {
    let mut words: Vec<String> = words.to_vec();
    let mut quote_opens = true;
    let mut i = 0;
    while i < words.len() {
        if is_single(&words[i], CLOSING) && i > 0 {
            let token = words.remove(i);
            words[i - 1].push_str(&token);
        } else if is_single(&words[i], OPENING) && i < words.len() - 1 {
            let token = words.remove(i);
            words[i] = format!("{token}{}", words[i]);
        } else if words[i] == "\"" {
            if quote_opens && i < words.len() - 1 {
                let token = words.remove(i);
                words[i] = format!("{token}{}", words[i]);
            } else if !quote_opens && i > 0 {
                let token = words.remove(i);
                words[i - 1].push_str(&token);
            } else {
                i += 1;
            }
            quote_opens = !quote_opens;
        } else if is_single(&words[i], "-_") && i > 0 && i < words.len() - 1 {
            let hyphen = words.remove(i);
            let tail = words.remove(i);
            words[i - 1].push_str(&hyphen);
            words[i - 1].push_str(&tail);
        } else {
            i += 1;
        }
    }
    words.join(" ")
}

/// Title-case a name token by token.
///
/// Each alphanumeric run (with an optional embedded apostrophe part) gets
/// its first character uppercased and the rest lowercased; punctuation and
/// digits elsewhere are untouched. Whole-string title-casing would restart
/// capitalization after digits and apostrophes, so it is done per token.
pub fn title_case(name: &str) -> String {
    title_token()
        .replace_all(name, |caps: &regex::Captures| {
            let token = &caps[0];
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => {
                    let rest: String = chars.as_str().to_lowercase();
                    format!("{}{rest}", first.to_uppercase())
                }
                None => String::new(),
            }
        })
        .into_owned()
}

/// Guess the product name from the cleaned document.
///
/// Collects every word from phrases whose font size falls within the
/// configured relative shortfall of the maximum, joins and title-cases them.
/// When a subcategory was resolved, every 1..4-word n-gram of the candidate
/// name is compared against the subcategory's known names; the first hit is
/// replaced by the canonical spelling.
pub fn find_name(
    cleaned: &ReducedDocument,
    subcategory: Option<&Subcategory>,
    refdata: &ReferenceData,
    options: &ParseOptions,
) -> Option<String> {
    let max_font_size = cleaned.max_font_size();
    if max_font_size <= 0.0 {
        return None;
    }

    let mut prominent = Vec::new();
    for phrase in cleaned.phrases() {
        if (max_font_size - phrase.font_size) / max_font_size <= options.name_keep_ratio {
            prominent.extend(phrase.words.iter().cloned());
        }
    }
    let name = join_words(&prominent);
    if name.is_empty() {
        return None;
    }

    if let Some(sub) = subcategory {
        let known_names = refdata.subcategory_alternate_names(sub);
        let tokens: Vec<String> = name.split(' ').map(String::from).collect();
        let mut ngrams = tokens.clone();
        for len in 2..=4 {
            ngrams.extend(window_joined(&tokens, len));
        }
        for ngram in &ngrams {
            for known in &known_names {
                let score =
                    normalized_levenshtein(&ngram.to_lowercase(), &known.to_lowercase());
                if score >= options.match_cutoff {
                    log::debug!(
                        "substituting {:?} for garbled {:?} in name",
                        known,
                        ngram
                    );
                    return Some(title_case(&name.replace(ngram.as_str(), known)));
                }
            }
        }
    }

    Some(title_case(&name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Phrase, ReducedBlock, SubcategoryName};

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_join_trailing_punctuation() {
        assert_eq!(join_words(&words(&["Foo", ",", "bar"])), "Foo, bar");
    }

    #[test]
    fn test_join_brackets_inward() {
        assert_eq!(join_words(&words(&["(", "Foo", ")"])), "(Foo)");
    }

    #[test]
    fn test_join_double_quotes_alternate() {
        assert_eq!(
            join_words(&words(&["\"", "Old", "Tree", "\"", "Puer"])),
            "\"Old Tree\" Puer"
        );
    }

    #[test]
    fn test_join_hyphen_fuses_neighbors() {
        assert_eq!(
            join_words(&words(&["Gao", "-", "Shan", "Oolong"])),
            "Gao-Shan Oolong"
        );
    }

    #[test]
    fn test_join_edge_positions_left_alone() {
        // Punctuation with no word to attach to stays a separate token.
        assert_eq!(join_words(&words(&[",", "start"])), ", start");
        assert_eq!(join_words(&words(&["end", "("])), "end (");
        assert_eq!(join_words(&words(&["-", "dash"])), "- dash");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("MI LAN XIANG dan cong"), "Mi Lan Xiang Dan Cong");
        assert_eq!(title_case("1990s harvest"), "1990s Harvest");
        assert_eq!(title_case("dragon's well"), "Dragon's Well");
        assert_eq!(title_case("thé noir"), "Thé Noir");
    }

    fn cleaned(phrases: Vec<Phrase>) -> ReducedDocument {
        ReducedDocument {
            blocks: vec![ReducedBlock { phrases }],
        }
    }

    #[test]
    fn test_font_size_band() {
        let doc = cleaned(vec![
            Phrase::new(words(&["Mi", "Lan"]), 10.0, 0.9),
            Phrase::new(words(&["Xiang"]), 7.0, 0.9),
            Phrase::new(words(&["fine", "print"]), 5.0, 0.9),
        ]);
        let name = find_name(&doc, None, &ReferenceData::default(), &ParseOptions::default());
        assert_eq!(name, Some("Mi Lan Xiang".to_string()));
    }

    #[test]
    fn test_empty_document_has_no_name() {
        let name = find_name(
            &ReducedDocument::default(),
            None,
            &ReferenceData::default(),
            &ParseOptions::default(),
        );
        assert_eq!(name, None);
    }

    fn dan_cong() -> (Subcategory, ReferenceData) {
        let sub = Subcategory {
            id: 10,
            name: "Dan Cong".to_string(),
            translated_name: String::new(),
            category_id: Some(1),
            is_public: true,
        };
        let refdata = ReferenceData {
            subcategories: vec![sub.clone()],
            subcategory_names: vec![SubcategoryName {
                name: "Dancong".to_string(),
                subcategory_id: 10,
            }],
            ..Default::default()
        };
        (sub, refdata)
    }

    #[test]
    fn test_subcategory_substitution_fixes_garbled_ngram() {
        let (sub, refdata) = dan_cong();
        let doc = cleaned(vec![Phrase::new(words(&["Mi", "Lan", "Dan", "Conq"]), 10.0, 0.9)]);
        let name = find_name(&doc, Some(&sub), &refdata, &ParseOptions::default());
        assert_eq!(name, Some("Mi Lan Dan Cong".to_string()));
    }

    #[test]
    fn test_no_substitution_when_nothing_close() {
        let (sub, refdata) = dan_cong();
        let doc = cleaned(vec![Phrase::new(words(&["Honey", "Orchid"]), 10.0, 0.9)]);
        let name = find_name(&doc, Some(&sub), &refdata, &ParseOptions::default());
        assert_eq!(name, Some("Honey Orchid".to_string()));
    }
}
