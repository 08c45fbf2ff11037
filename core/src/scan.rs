//! Line traversal over a text file.
//!
//! Two strategies share one entry point. `Ordered` feeds lines to the work
//! function one at a time in file order; `FanOut` dispatches every line as
//! its own rayon task and joins them all before returning. Work that keeps
//! state tied to line order (page counting) must use [`scan_ordered`].
//!
//! Lines must be valid UTF-8 except under [`scan_ordered_lossy`], which is
//! meant for text whose non-ASCII content gets discarded anyway.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    Ordered,
    #[default]
    FanOut,
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(f))
}

/// Hand each line (with its 1-based number) to `work`, in file order, on the
/// calling thread. Returns the number of lines read.
pub fn scan_ordered<F>(path: &Path, mut work: F) -> Result<usize>
where
    F: FnMut(usize, &str),
{
    let reader = open(path)?;
    let mut count = 0;
    for line in reader.lines() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        count += 1;
        work(count, &line);
    }
    Ok(count)
}

/// Like [`scan_ordered`], but invalid UTF-8 is replaced with U+FFFD
/// instead of failing the read.
pub fn scan_ordered_lossy<F>(path: &Path, mut work: F) -> Result<usize>
where
    F: FnMut(usize, &str),
{
    let mut reader = open(path)?;
    let mut buf = Vec::new();
    let mut count = 0;
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("reading {}", path.display()))?;
        if n == 0 {
            break;
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        count += 1;
        work(count, &String::from_utf8_lossy(&buf));
    }
    Ok(count)
}

/// Run order-insensitive per-line work under the chosen strategy.
///
/// With `FanOut` the call blocks until every spawned task has finished,
/// including when a read error cuts dispatch short; the error is returned
/// after that join.
pub fn scan<F>(path: &Path, strategy: Strategy, work: F) -> Result<usize>
where
    F: Fn(usize, &str) + Sync,
{
    match strategy {
        Strategy::Ordered => scan_ordered(path, work),
        Strategy::FanOut => {
            let reader = open(path)?;
            let work = &work;
            rayon::scope(|s| -> Result<usize> {
                let mut count = 0;
                for line in reader.lines() {
                    let line = line.with_context(|| format!("reading {}", path.display()))?;
                    count += 1;
                    let line_no = count;
                    s.spawn(move |_| work(line_no, &line));
                }
                Ok(count)
            })
        }
    }
}
