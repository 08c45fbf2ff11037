//! Flat-file form of the index: one text block per word.
//!
//! ```text
//! Cat
//!
//! Definition:
//! a feline
//! Pages : [1, 4]
//!
//! ```

use anyhow::{anyhow, bail, Context, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::tokenizer::title_case;
use crate::{Index, Page};

const DEFINITION_LABEL: &str = "Definition:";
const PAGES_LABEL: &str = "Pages : ";

/// One block read back from an index file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    pub word: String,
    pub definition: String,
    pub pages: Vec<Page>,
}

fn format_pages(pages: impl IntoIterator<Item = Page>) -> String {
    let list: Vec<String> = pages.into_iter().map(|p| p.to_string()).collect();
    format!("[{}]", list.join(", "))
}

pub fn write_index<W: Write>(out: &mut W, index: &Index) -> std::io::Result<()> {
    for (word, entry) in index {
        writeln!(out, "{}", title_case(word))?;
        writeln!(out)?;
        writeln!(out, "{DEFINITION_LABEL}")?;
        writeln!(out, "{}", entry.definition)?;
        writeln!(out, "{PAGES_LABEL}{}", format_pages(entry.pages.iter().copied()))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Permissions the saved file should carry: the replaced file's, or the
/// usual 0644 for a new one.
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        #[cfg(unix)]
        Err(_) => {
            use std::os::unix::fs::PermissionsExt;
            Some(fs::Permissions::from_mode(0o644))
        }
        #[cfg(not(unix))]
        Err(_) => None,
    }
}

/// Write the index to `path`, words ascending, replacing any existing file.
/// The parent directory must already exist.
///
/// The blocks go to a temp file beside `path` that is renamed over it once
/// complete, so a failure leaves the target untouched.
pub fn save_index(index: &Index, path: &Path) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(parent)
        .with_context(|| format!("creating temp file in {}", parent.display()))?;
    {
        let mut w = BufWriter::new(tmp.as_file());
        write_index(&mut w, index).with_context(|| format!("writing index for {}", path.display()))?;
        w.flush()?;
    }
    if let Some(perms) = target_permissions(path) {
        tmp.as_file()
            .set_permissions(perms)
            .with_context(|| format!("setting permissions for {}", path.display()))?;
    }
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("saving index to {}", path.display()))?;
    tracing::info!(words = index.len(), path = %path.display(), "index saved");
    Ok(())
}

fn parse_pages(line: &str) -> Result<Vec<Page>> {
    let list = line
        .strip_prefix(PAGES_LABEL)
        .and_then(|s| s.strip_prefix('['))
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| anyhow!("malformed page list: {line:?}"))?;
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }
    list.split(',')
        .map(|p| p.trim().parse::<Page>().with_context(|| format!("bad page number {p:?}")))
        .collect()
}

/// Parse blocks written by [`write_index`].
pub fn read_index<R: BufRead>(reader: R) -> Result<Vec<IndexRecord>> {
    let lines: Vec<String> = reader.lines().collect::<std::io::Result<_>>()?;
    let mut records = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if lines[i].is_empty() {
            i += 1;
            continue;
        }
        let block = lines.get(i..i + 5).ok_or_else(|| anyhow!("truncated block at line {}", i + 1))?;
        if !block[1].is_empty() || block[2] != DEFINITION_LABEL {
            bail!("malformed block at line {}", i + 1);
        }
        records.push(IndexRecord {
            word: block[0].to_ascii_lowercase(),
            definition: block[3].clone(),
            pages: parse_pages(&block[4]).with_context(|| format!("block at line {}", i + 1))?,
        });
        i += 5;
    }
    Ok(records)
}

pub fn load_index_file(path: &Path) -> Result<Vec<IndexRecord>> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_index(BufReader::new(f))
}
