//! Page-aware parsing of the target document.
//!
//! Page numbers come from a running line counter, so lines are consumed
//! strictly in file order on one thread. Bytes that are not UTF-8 are
//! decoded lossily; tokenization drops everything but ASCII letters.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::scan::scan_ordered_lossy;
use crate::tokenizer::document_words;
use crate::{Page, PageMap, WordSet, LINES_PER_PAGE};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageIndex {
    pub pages: PageMap,
    /// Lines consumed from the document.
    pub lines: usize,
}

impl PageIndex {
    pub fn vocabulary(&self) -> WordSet {
        self.pages.keys().cloned().collect()
    }

    /// Number of pages the document spans.
    pub fn page_total(&self) -> Page {
        self.lines.div_ceil(LINES_PER_PAGE) as Page
    }
}

/// Tracks the current page while lines go by.
#[derive(Debug)]
struct PageCounter {
    lines: usize,
    page: Page,
}

impl PageCounter {
    fn new() -> Self {
        Self { lines: 0, page: 1 }
    }

    /// Page for the next line. Moves to a new page once the previous line
    /// closed one out.
    fn next_line(&mut self) -> Page {
        if self.lines > 0 && self.lines % LINES_PER_PAGE == 0 {
            self.page += 1;
        }
        self.lines += 1;
        self.page
    }
}

pub fn index_pages(path: &Path) -> Result<PageIndex> {
    let mut pages = PageMap::new();
    let mut counter = PageCounter::new();
    let lines = scan_ordered_lossy(path, |_, line| {
        let page = counter.next_line();
        for word in document_words(line) {
            pages.entry(word).or_default().insert(page);
        }
    })
    .context("indexing document pages")?;
    debug!(lines, words = pages.len(), path = %path.display(), "document indexed");
    Ok(PageIndex { pages, lines })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_turns_page_after_every_fortieth_line() {
        let mut c = PageCounter::new();
        let pages: Vec<Page> = (0..81).map(|_| c.next_line()).collect();
        assert_eq!(pages[0], 1);
        assert_eq!(pages[39], 1);
        assert_eq!(pages[40], 2);
        assert_eq!(pages[79], 2);
        assert_eq!(pages[80], 3);
    }

    #[test]
    fn latin1_bytes_do_not_abort_indexing() {
        use std::io::Write;
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"caf\xe9 society\nplain text\n").unwrap();
        let idx = index_pages(f.path()).unwrap();
        assert_eq!(idx.lines, 2);
        assert!(idx.pages.contains_key("caf"));
        assert!(idx.pages.contains_key("society"));
        assert!(idx.pages.contains_key("plain"));
    }

    #[test]
    fn page_total_rounds_up() {
        let idx = |lines| PageIndex { pages: PageMap::new(), lines };
        assert_eq!(idx(0).page_total(), 0);
        assert_eq!(idx(1).page_total(), 1);
        assert_eq!(idx(40).page_total(), 1);
        assert_eq!(idx(41).page_total(), 2);
    }
}
