// src/cli.rs
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{bail, WrapErr};

use crate::config::consts::{DEFAULT_OUT_FILE, HEADERS, RETRY_ATTEMPTS, STRIDE, TIMEOUT_SECS};
use crate::config::options::{AppOptions, ExportFormat, HeightPolicy, PricePolicy};
use crate::engine::Roster;
use crate::progress::Progress;
use crate::runner;

const PROMPT: &str = "*** Input in the Transfermarkt link for the club: ";

/// Scrape a Transfermarkt squad page into a delimited file.
///
/// The URL must point at the detailed squad view, e.g.
/// https://www.transfermarkt.co.uk/luton-town/kader/verein/1031/saison_id/2023/plus/1
#[derive(Parser, Debug)]
#[command(name = "tm_scrape", version)]
pub struct Args {
    /// Squad page URL (prompted for when omitted)
    pub url: Option<String>,

    /// Output file [default: TransferMarkt_Data.csv, or .tsv with --format tsv]
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Request timeout in seconds
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// Fetch attempts, including the first
    #[arg(long, default_value_t = RETRY_ATTEMPTS)]
    pub retries: u32,

    /// Write "not assigned" for empty heights instead of leaving them blank
    #[arg(long)]
    pub height_sentinel: bool,

    /// Centered cells per player record (some page versions use 8)
    #[arg(long, default_value_t = STRIDE)]
    pub stride: usize,

    /// What to do with a market value that does not parse
    #[arg(long, value_enum, default_value_t = PricePolicy::Zero)]
    pub on_bad_price: PricePolicy,

    /// Don't print the table to stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_options(self, url: String) -> AppOptions {
        let mut opts = AppOptions::with_url(url);
        opts.net.timeout = Duration::from_secs(self.timeout);
        opts.net.retry.max_attempts = self.retries;
        opts.extract.price_policy = self.on_bad_price;
        opts.extract.layout.stride = self.stride;
        if self.height_sentinel {
            opts.extract.height_policy = HeightPolicy::Sentinel;
        }
        opts.export.format = self.format;
        opts.export.out_path = self
            .out
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_FILE).with_extension(self.format.ext()));
        opts
    }
}

/// Status lines on stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Found {total} players");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    let url = match args.url.clone() {
        Some(u) => u,
        None => prompt_url()?,
    };
    let quiet = args.quiet;
    let opts = args.into_options(url);

    let mut progress = CliProgress;
    let summary = runner::run(&opts, Some(&mut progress))
        .wrap_err_with(|| format!("scraping {}", opts.url))?;

    if !quiet {
        print!("{}", preview(&summary.roster));
    }
    println!("Wrote {} rows to {}", summary.roster.rows.len(), summary.path.display());
    Ok(())
}

fn prompt_url() -> color_eyre::Result<String> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        bail!("no URL given (pass it as the first argument)");
    }
    print!("{PROMPT}");
    io::stdout().flush()?;

    let mut line = String::new();
    stdin.lock().read_line(&mut line).wrap_err("reading URL from stdin")?;
    let url = line.trim();
    if url.is_empty() {
        bail!("no URL given");
    }
    Ok(s!(url))
}

/// Column-aligned table for the terminal.
pub fn preview(roster: &Roster) -> String {
    let records = roster.records();
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for rec in &records {
        for (w, cell) in widths.iter_mut().zip(rec) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = pad_line(&HEADERS[..], &widths);
    for rec in &records {
        out.push_str(&pad_line(&rec[..], &widths));
    }
    out
}

fn pad_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{:<width$}", c.as_ref(), width = *w))
        .collect();
    join!(padded.join("  ").trim_end(), "\n")
}
