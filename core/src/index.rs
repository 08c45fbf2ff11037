use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

use crate::{DictionaryMap, Page, PageMap, WordSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub definition: String,
    /// Ascending, never empty.
    pub pages: BTreeSet<Page>,
}

impl IndexEntry {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// The finished index, keyed by word in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    entries: BTreeMap<String, IndexEntry>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&IndexEntry> {
        self.entries.get(word)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, IndexEntry> {
        self.entries.iter()
    }

    pub fn words(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, IndexEntry)> for Index {
    fn from_iter<I: IntoIterator<Item = (String, IndexEntry)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Index {
    type Item = (&'a String, &'a IndexEntry);
    type IntoIter = btree_map::Iter<'a, String, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Join the filtered vocabulary with its pages and definitions.
///
/// A word with no definition gets an empty one. A word with no pages is
/// left out, since every entry must point at least at one page.
pub fn build_index(filtered: &WordSet, pages: &PageMap, dictionary: &DictionaryMap) -> Index {
    let mut index = Index::new();
    for word in filtered {
        let Some(word_pages) = pages.get(word).filter(|p| !p.is_empty()) else {
            warn!(word = %word, "filtered word has no pages; skipping");
            continue;
        };
        let definition = match dictionary.get(word) {
            Some(d) => d.clone(),
            None => {
                warn!(word = %word, "filtered word has no definition");
                String::new()
            }
        };
        index.entries.insert(
            word.clone(),
            IndexEntry { definition, pages: word_pages.clone() },
        );
    }
    index
}
