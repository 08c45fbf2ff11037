//! End-to-end run: extract, filter, build, save.

use anyhow::Result;
use std::time::{Duration, Instant};
use tracing::info;

use crate::filter::filter;
use crate::index::{build_index, Index};
use crate::pages::index_pages;
use crate::persist::save_index;
use crate::vocab::{extract_dictionary, extract_stopwords, MalformedLine};
use crate::RunConfig;

#[derive(Debug)]
pub struct Run {
    pub index: Index,
    /// Extraction through saving the output file.
    pub elapsed: Duration,
    /// Dictionary lines skipped during extraction.
    pub malformed: Vec<MalformedLine>,
}

/// Build the index for `config.document` and write it to `config.output`.
///
/// The stopword, dictionary and document stages run concurrently and are all
/// joined before anything else happens. Any stage failing fails the run.
pub fn run_pipeline(config: &RunConfig) -> Result<Run> {
    let start = Instant::now();

    let ((stopwords, dictionary), pages) = rayon::join(
        || {
            rayon::join(
                || extract_stopwords(&config.stopwords),
                || extract_dictionary(&config.dictionary),
            )
        },
        || index_pages(&config.document),
    );
    let stopwords = stopwords?;
    let dictionary = dictionary?;
    let pages = pages?;

    let filtered = filter(&pages.vocabulary(), &dictionary.vocabulary(), &stopwords);
    let index = build_index(&filtered, &pages.pages, &dictionary.definitions);
    save_index(&index, &config.output)?;

    let elapsed = start.elapsed();
    info!(
        words = index.len(),
        document_pages = pages.page_total(),
        skipped_dictionary_lines = dictionary.malformed.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "index built"
    );
    Ok(Run { index, elapsed, malformed: dictionary.malformed })
}
