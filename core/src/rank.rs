//! Read-only console views over a finished [`Index`].

use std::cmp::Ordering;
use std::io::{self, Write};

use crate::index::{Index, IndexEntry};

/// Ranking order: more pages first, then word ascending.
pub fn by_page_count_desc(a: (&str, &IndexEntry), b: (&str, &IndexEntry)) -> Ordering {
    b.1.page_count()
        .cmp(&a.1.page_count())
        .then_with(|| a.0.cmp(b.0))
}

/// Split words into consecutive groups of `batch_size`; the last group may
/// be short. A size of zero is treated as one.
pub fn batches<'a, I>(words: I, batch_size: usize) -> Vec<Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let words: Vec<&str> = words.into_iter().collect();
    words.chunks(batch_size.max(1)).map(|c| c.to_vec()).collect()
}

pub fn sorted_batches(index: &Index, batch_size: usize) -> Vec<Vec<&str>> {
    batches(index.words(), batch_size)
}

pub fn reverse_sorted_batches(index: &Index, batch_size: usize) -> Vec<Vec<&str>> {
    batches(index.words().rev(), batch_size)
}

pub fn unique_count(index: &Index) -> usize {
    index.len()
}

/// The `n` words found on the most pages, with their page counts. Asking for
/// more words than the index holds returns all of them.
pub fn most_frequent(index: &Index, n: usize) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, &IndexEntry)> =
        index.iter().map(|(w, e)| (w.as_str(), e)).collect();
    ranked.sort_by(|a, b| by_page_count_desc(*a, *b));
    ranked
        .into_iter()
        .take(n)
        .map(|(w, e)| (w, e.page_count()))
        .collect()
}

fn write_batches<W: Write>(out: &mut W, groups: &[Vec<&str>]) -> io::Result<()> {
    writeln!(out)?;
    for group in groups {
        writeln!(out, "[{}]", group.join(", "))?;
    }
    Ok(())
}

pub fn print_sorted<W: Write>(out: &mut W, index: &Index, batch_size: usize) -> io::Result<()> {
    write_batches(out, &sorted_batches(index, batch_size))
}

pub fn print_reverse_sorted<W: Write>(out: &mut W, index: &Index, batch_size: usize) -> io::Result<()> {
    write_batches(out, &reverse_sorted_batches(index, batch_size))
}

pub fn print_unique_count<W: Write>(out: &mut W, index: &Index) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total number of unique words = {}", unique_count(index))
}

pub fn print_most_frequent<W: Write>(out: &mut W, index: &Index, n: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Most frequent words :")?;
    writeln!(out)?;
    for (word, pages) in most_frequent(index, n) {
        writeln!(out, "{word} ({pages} pages)")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn entry(pages: &[u32]) -> IndexEntry {
        IndexEntry {
            definition: String::new(),
            pages: pages.iter().copied().collect::<BTreeSet<_>>(),
        }
    }

    fn animals() -> Index {
        [
            ("fox".to_string(), entry(&[2])),
            ("dog".to_string(), entry(&[1, 2, 5])),
            ("cat".to_string(), entry(&[1, 3, 4])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn batches_of_three() {
        let words = ["apple", "banana", "cherry", "date", "egg", "fig", "grape"];
        let groups = batches(words, 3);
        assert_eq!(
            groups,
            vec![
                vec!["apple", "banana", "cherry"],
                vec!["date", "egg", "fig"],
                vec!["grape"],
            ]
        );
    }

    #[test]
    fn zero_batch_size_means_one_per_group() {
        let groups = batches(["a", "b"], 0);
        assert_eq!(groups, vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn reverse_sorted_descends() {
        let index = animals();
        assert_eq!(reverse_sorted_batches(&index, 10), vec![vec!["fox", "dog", "cat"]]);
    }

    #[test]
    fn ties_keep_both_words_in_word_order() {
        let index = animals();
        assert_eq!(most_frequent(&index, 2), vec![("cat", 3), ("dog", 3)]);
    }

    #[test]
    fn oversized_n_returns_everything() {
        let index = animals();
        assert_eq!(most_frequent(&index, 10).len(), 3);
        assert!(most_frequent(&Index::new(), 5).is_empty());
    }

    #[test]
    fn printed_views() {
        let index = animals();
        let mut out = Vec::new();
        print_sorted(&mut out, &index, 2).unwrap();
        print_unique_count(&mut out, &index).unwrap();
        print_most_frequent(&mut out, &index, 3).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "\n[cat, dog]\n[fox]\n\nTotal number of unique words = 3\n\
             \nMost frequent words :\n\ncat (3 pages)\ndog (3 pages)\nfox (1 pages)\n"
        );
    }
}
