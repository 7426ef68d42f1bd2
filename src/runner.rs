// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::{
        consts::DETAILED_VIEW_MARKERS,
        options::{AppOptions, ExtractOptions},
    },
    core::net,
    engine::{self, Roster},
    error::ScrapeError,
    file,
    progress::Progress,
    specs,
};

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    pub roster: Roster,
}

/// Fetch → extract → write. `progress` can be None when nobody is watching.
pub fn run(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let result = run_inner(opts, progress.as_deref_mut());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn run_inner(
    opts: &AppOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, ScrapeError> {
    opts.validate()?;

    if !net::looks_like_detailed_view(&opts.url, &DETAILED_VIEW_MARKERS) {
        logw!(url = %opts.url, "URL does not look like a detailed squad view (expected /kader/…/plus/1)");
        if let Some(p) = progress.as_deref_mut() {
            p.log("Warning: URL is not a detailed squad view; columns may not line up.");
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {}", opts.url));
    }
    let markup = net::http_get(&opts.url, &opts.net)?;

    let roster = scrape_document(&markup, &opts.extract)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(roster.rows.len());
        for row in &roster.rows {
            p.item_done(row.entry, &row.name);
        }
        if roster.skipped > 0 {
            p.log(&format!("Skipped {} player(s) with unreadable market values", roster.skipped));
        }
    }

    let path = file::write_export(&opts.export, &roster)?;
    Ok(RunSummary { path, roster })
}

/// Everything after the fetch and before the write: markup in, validated roster out.
pub fn scrape_document(markup: &str, opts: &ExtractOptions) -> Result<Roster, ScrapeError> {
    opts.validate()?;
    let cells = specs::roster::collect(markup, opts)?;
    let roster = engine::assemble(&cells, opts)?;
    logf!(players = roster.rows.len(), skipped = roster.skipped, "roster extracted");
    Ok(roster)
}
