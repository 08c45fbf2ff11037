use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::rank;
use crate::Index;

/// The four files a run touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub document: PathBuf,
    pub dictionary: PathBuf,
    pub stopwords: PathBuf,
    pub output: PathBuf,
}

/// Post-run console views. Each is independent; `None`/`false` skips it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Batch size for the ascending word listing.
    pub sorted: Option<usize>,
    /// Batch size for the descending word listing.
    pub reverse_sorted: Option<usize>,
    pub unique_count: bool,
    /// How many of the most frequent words to list.
    pub most_frequent: Option<usize>,
}

impl DisplayOptions {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Print every enabled view, in a fixed order.
    pub fn render<W: Write>(&self, index: &Index, out: &mut W) -> io::Result<()> {
        if let Some(batch) = self.sorted {
            rank::print_sorted(out, index, batch)?;
        }
        if let Some(batch) = self.reverse_sorted {
            rank::print_reverse_sorted(out, index, batch)?;
        }
        if self.unique_count {
            rank::print_unique_count(out, index)?;
        }
        if let Some(n) = self.most_frequent {
            rank::print_most_frequent(out, index, n)?;
        }
        Ok(())
    }
}

/// A whole job as a JSON document: paths plus optional display choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFile {
    #[serde(flatten)]
    pub run: RunConfig,
    #[serde(default)]
    pub display: DisplayOptions,
}

impl JobFile {
    pub fn load(path: &Path) -> Result<Self> {
        let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let job = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_file_with_defaults() {
        let job: JobFile = serde_json::from_str(
            r#"{"document":"book.txt","dictionary":"dict.csv","stopwords":"stop.txt","output":"out.txt"}"#,
        )
        .unwrap();
        assert_eq!(job.run.document, PathBuf::from("book.txt"));
        assert!(job.display.is_empty());
    }

    #[test]
    fn job_file_with_display() {
        let job: JobFile = serde_json::from_str(
            r#"{"document":"d","dictionary":"x","stopwords":"s","output":"o",
                "display":{"sorted":5,"unique_count":true}}"#,
        )
        .unwrap();
        assert_eq!(job.display.sorted, Some(5));
        assert!(job.display.unique_count);
        assert_eq!(job.display.most_frequent, None);
    }

    #[test]
    fn render_skips_disabled_views() {
        let mut out = Vec::new();
        let opts = DisplayOptions { unique_count: true, ..Default::default() };
        opts.render(&Index::new(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nTotal number of unique words = 0\n");
    }
}
