use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Everything but ASCII letters and the plain space.
    static ref NON_LETTER: Regex = Regex::new(r"[^a-zA-Z ]").expect("valid regex");
}

/// Tokenize a free-form line: lowercase, split on whitespace, drop empties.
pub fn split_words(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split_whitespace().map(|w| w.to_lowercase())
}

/// Tokenize a document line: strip every character that is not an ASCII
/// letter or space, lowercase, split on whitespace.
pub fn document_words(line: &str) -> Vec<String> {
    let stripped = NON_LETTER.replace_all(line, "");
    stripped
        .split_whitespace()
        .map(|w| w.to_ascii_lowercase())
        .collect()
}

/// Split a `word,definition` record on the first comma only.
///
/// Returns the normalized key and the definition verbatim, or `None` when
/// the line has no comma. The key may come back empty; callers decide what
/// to do with that.
pub fn split_record(line: &str) -> Option<(String, &str)> {
    let (key, definition) = line.split_once(',')?;
    Some((key.trim().to_lowercase(), definition))
}

/// Uppercase the first ASCII letter of a word.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_words_strip_punctuation_and_digits() {
        let w = document_words("The cat's 2 HATS, sat!");
        assert_eq!(w, vec!["the", "cats", "hats", "sat"]);
    }

    #[test]
    fn document_words_ignore_blank_lines() {
        assert!(document_words("   ").is_empty());
        assert!(document_words("1234 -- ...").is_empty());
    }

    #[test]
    fn split_record_keeps_later_commas() {
        let (k, d) = split_record("Apple,a fruit, red or green, crisp").unwrap();
        assert_eq!(k, "apple");
        assert_eq!(d, "a fruit, red or green, crisp");
    }

    #[test]
    fn split_record_without_comma() {
        assert!(split_record("no comma here").is_none());
    }

    #[test]
    fn title_case_first_letter() {
        assert_eq!(title_case("cat"), "Cat");
        assert_eq!(title_case(""), "");
    }
}
