//! Lexical matching of detected words against reference vocabularies.
//!
//! OCR output drops and merges spaces unpredictably, so two passes are
//! needed: a fuzzy pass over 1..4-word sliding windows catches minor
//! misreads of spaced names, and a spaceless containment pass catches names
//! whose spaces the OCR swallowed entirely.

use strsim::normalized_levenshtein;

/// How a match was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOrigin {
    /// Fuzzy hit on a 1..4-word window.
    Windowed,
    /// Literal containment of the space-stripped vocabulary entry in the
    /// space-stripped detected text.
    Spaceless,
}

/// A successful vocabulary match.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// The matched vocabulary entry, lowercased.
    pub value: String,
    /// Similarity score in (0, 1]. Spaceless hits always score 1.
    pub score: f64,
    /// Which pass produced the match.
    pub origin: MatchOrigin,
}

/// Space-joined sliding windows of `len` consecutive words.
pub(crate) fn window_joined(words: &[String], len: usize) -> Vec<String> {
    if len == 0 || words.len() < len {
        return Vec::new();
    }
    words.windows(len).map(|w| w.join(" ")).collect()
}

/// Best similarity of `word` against any entry of `vocabulary`, with the
/// matched entry. Both sides are compared lowercased.
pub(crate) fn closest_entry<'a>(
    word: &str,
    vocabulary: &'a [String],
    cutoff: f64,
) -> Option<(&'a str, f64)> {
    let word = word.to_lowercase();
    let mut best: Option<(&str, f64)> = None;
    for entry in vocabulary {
        let score = normalized_levenshtein(&word, &entry.to_lowercase());
        if score < cutoff {
            continue;
        }
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((entry.as_str(), score));
        }
    }
    best
}

/// Find the best vocabulary match within a flat word list.
///
/// Candidates are the single words plus 2-, 3- and 4-word window
/// concatenations; each is compared (lowercased) against every vocabulary
/// entry, keeping the highest similarity at or above `cutoff`. Ties prefer
/// the longer vocabulary entry so that "mi lan xiang dan cong" beats
/// "dan cong" when both score the same. If nothing clears the cutoff, the
/// space-stripped detected text is scanned for literal containment of each
/// space-stripped entry; the longest contained entry wins with score 1.
pub fn find_match(words: &[String], vocabulary: &[String], cutoff: f64) -> Option<Match> {
    let mut candidates: Vec<String> = words.to_vec();
    for len in 2..=4 {
        candidates.extend(window_joined(words, len));
    }

    let mut best: Option<Match> = None;
    for candidate in &candidates {
        let candidate = candidate.to_lowercase();
        for entry in vocabulary {
            let entry = entry.to_lowercase();
            let score = normalized_levenshtein(&candidate, &entry);
            if score < cutoff {
                continue;
            }
            let better = match &best {
                None => true,
                Some(b) => {
                    score > b.score
                        || (score == b.score && entry.chars().count() > b.value.chars().count())
                }
            };
            if better {
                best = Some(Match {
                    value: entry,
                    score,
                    origin: MatchOrigin::Windowed,
                });
            }
        }
    }
    if best.is_some() {
        return best;
    }

    // Spaceless fallback: the OCR may have merged words together.
    let compact_text: String = words
        .iter()
        .flat_map(|w| w.chars())
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    for entry in vocabulary {
        let lowered = entry.to_lowercase();
        let compact_entry: String = lowered.chars().filter(|c| !c.is_whitespace()).collect();
        if compact_entry.is_empty() || !compact_text.contains(&compact_entry) {
            continue;
        }
        let longer = best
            .as_ref()
            .map_or(true, |b| lowered.chars().count() > b.value.chars().count());
        if longer {
            best = Some(Match {
                value: lowered,
                score: 1.0,
                origin: MatchOrigin::Spaceless,
            });
        }
    }
    best
}
