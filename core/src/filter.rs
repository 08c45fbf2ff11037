use crate::WordSet;

/// Words worth indexing: `dictionary ∩ (document \ stopwords)`.
///
/// Inputs are left untouched; the result is a fresh set.
pub fn filter(document: &WordSet, dictionary: &WordSet, stopwords: &WordSet) -> WordSet {
    document
        .iter()
        .filter(|w| !stopwords.contains(*w))
        .filter(|w| dictionary.contains(*w))
        .cloned()
        .collect()
}
