//! Back-of-book indexing: per word, the dictionary definition and the pages
//! of a document on which it occurs.

pub mod config;
pub mod filter;
pub mod index;
pub mod pages;
pub mod persist;
pub mod pipeline;
pub mod rank;
pub mod scan;
pub mod tokenizer;
pub mod vocab;

use std::collections::{BTreeSet, HashMap, HashSet};

pub use config::{DisplayOptions, JobFile, RunConfig};
pub use index::{build_index, Index, IndexEntry};
pub use pipeline::{run_pipeline, Run};

/// 1-based page number within the indexed document.
pub type Page = u32;

/// Number of document lines that make up one page.
pub const LINES_PER_PAGE: usize = 40;

pub type WordSet = HashSet<String>;
pub type DictionaryMap = HashMap<String, String>;
/// Word -> ascending set of pages it appears on.
pub type PageMap = HashMap<String, BTreeSet<Page>>;
