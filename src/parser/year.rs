//! Vintage-year extraction.

/// The four-digit year prefix of a word, when the word looks like a year:
/// starts with "19" or "20" and its first four characters are all digits.
pub(crate) fn leading_year(word: &str) -> Option<String> {
    if !(word.starts_with("19") || word.starts_with("20")) {
        return None;
    }
    let prefix: String = word.chars().take(4).collect();
    if prefix.chars().count() == 4 && prefix.chars().all(|c| c.is_ascii_digit()) {
        Some(prefix)
    } else {
        None
    }
}

/// Latest plausible year printed on the label, if any.
///
/// Labels often carry several years (harvest, pressing, reprint); the latest
/// one is empirically the printed vintage, and duplicated misreads of the
/// same year agree trivially. Only years strictly after 1900 qualify.
pub fn find_year(words: &[String]) -> Option<u16> {
    let mut best: u16 = 1900;
    for word in words {
        if let Some(prefix) = leading_year(word) {
            if let Ok(year) = prefix.parse::<u16>() {
                if year > best {
                    best = year;
                }
            }
        }
    }
    (best > 1900).then_some(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_latest_year_wins() {
        let year = find_year(&words(&["Harvested", "1990s", "reprinted", "2014"]));
        assert_eq!(year, Some(2014));
    }

    #[test]
    fn test_year_with_suffix() {
        assert_eq!(find_year(&words(&["2018spring"])), Some(2018));
        assert_eq!(find_year(&words(&["1990s"])), Some(1990));
    }

    #[test]
    fn test_no_year() {
        assert_eq!(find_year(&words(&["Dragon", "Well", "Tea"])), None);
        assert_eq!(find_year(&[]), None);
    }

    #[test]
    fn test_1900_excluded() {
        assert_eq!(find_year(&words(&["1900"])), None);
        assert_eq!(find_year(&words(&["1901"])), Some(1901));
    }

    #[test]
    fn test_short_tokens_ignored() {
        assert_eq!(find_year(&words(&["19", "20", "201"])), None);
    }

    #[test]
    fn test_non_year_prefix_ignored() {
        assert_eq!(find_year(&words(&["8820", "3019"])), None);
        assert_eq!(find_year(&words(&["19ab"])), None);
    }

    #[test]
    fn test_leading_year() {
        assert_eq!(leading_year("2014"), Some("2014".to_string()));
        assert_eq!(leading_year("1990s"), Some("1990".to_string()));
        assert_eq!(leading_year("199"), None);
        assert_eq!(leading_year("spring2014"), None);
    }
}
