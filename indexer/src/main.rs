use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use pagedex_core::persist::load_index_file;
use pagedex_core::{run_pipeline, DisplayOptions, JobFile, RunConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "pagedex")]
#[command(about = "Build a back-of-book index of dictionary words and the pages they occur on", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index a document and write the result to a text file
    Build(BuildArgs),
    /// Print an index file written by `build`
    Show {
        /// Index file path
        #[arg(long)]
        index: PathBuf,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// JSON job file with the four paths and display choices
    #[arg(long, conflicts_with_all = ["document", "dictionary", "stopwords", "output"])]
    config: Option<PathBuf>,
    /// Document to index, 40 lines per page
    #[arg(long)]
    document: Option<PathBuf>,
    /// Dictionary file, one `word,definition` per line
    #[arg(long)]
    dictionary: Option<PathBuf>,
    /// Stopword file, whitespace separated
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// Output file (overwritten)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Print indexed words in ascending order, N per row
    #[arg(long, value_name = "N")]
    sorted: Option<usize>,
    /// Print indexed words in descending order, N per row
    #[arg(long, value_name = "N")]
    reverse: Option<usize>,
    /// Print the number of indexed words
    #[arg(long, default_value_t = false)]
    unique: bool,
    /// Print the N words found on the most pages
    #[arg(long, value_name = "N")]
    top: Option<usize>,
}

impl BuildArgs {
    /// Resolve the job, with display flags on the command line taking
    /// precedence over the job file.
    fn into_job(self) -> Result<JobFile> {
        let mut job = match self.config {
            Some(path) => JobFile::load(&path)?,
            None => {
                let (Some(document), Some(dictionary), Some(stopwords), Some(output)) =
                    (self.document, self.dictionary, self.stopwords, self.output)
                else {
                    bail!("either --config or all of --document, --dictionary, --stopwords and --output are required");
                };
                JobFile {
                    run: RunConfig { document, dictionary, stopwords, output },
                    display: DisplayOptions::default(),
                }
            }
        };
        let display = &mut job.display;
        if self.sorted.is_some() {
            display.sorted = self.sorted;
        }
        if self.reverse.is_some() {
            display.reverse_sorted = self.reverse;
        }
        display.unique_count |= self.unique;
        if self.top.is_some() {
            display.most_frequent = self.top;
        }
        Ok(job)
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build(args) => build(args.into_job()?),
        Commands::Show { index } => show(&index),
    }
}

fn build(job: JobFile) -> Result<()> {
    let run = run_pipeline(&job.run)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "Index of {} words saved to {} in {} milliseconds.",
        run.index.len(),
        job.run.output.display(),
        run.elapsed.as_millis()
    )?;
    if !run.malformed.is_empty() {
        writeln!(out, "Skipped {} malformed dictionary lines.", run.malformed.len())?;
    }
    job.display.render(&run.index, &mut out)?;
    Ok(())
}

fn show(path: &std::path::Path) -> Result<()> {
    let records = load_index_file(path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for r in &records {
        let pages: Vec<String> = r.pages.iter().map(|p| p.to_string()).collect();
        writeln!(out, "{}: {} [{}]", r.word, r.definition, pages.join(", "))?;
    }
    tracing::info!(words = records.len(), "index shown");
    Ok(())
}
