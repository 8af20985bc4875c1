// src/runner.rs
//! fetch → locate → rows → fields → CSV, once.

use std::path::PathBuf;

use crate::{
    config::options::{AppOptions, RowPolicy, ScrapeOptions},
    core::{html, net},
    error::ScrapeError,
    file,
    page::{ballistics, locate::{self, TableMatcher}},
    store::ResultTable,
};

/// What a run produced.
pub struct RunSummary {
    pub path: PathBuf,
    pub table: ResultTable,
}

/// Full pipeline. Nothing is written unless a data table was found.
pub fn run(opts: &AppOptions) -> Result<RunSummary, ScrapeError> {
    let table = {
        let page = net::http_get(&opts.scrape.url, opts.scrape.timeout)?;
        scrape_document(&page, &opts.scrape)?
    };

    let path = file::write_export(&opts.export.out_path, &table)?;
    Ok(RunSummary { path, table })
}

/// Offline half of the pipeline, from page text to result table.
pub fn scrape_document(page: &str, scrape: &ScrapeOptions) -> Result<ResultTable, ScrapeError> {
    let matcher = scrape.locate.matcher();
    scrape_with(page, matcher.as_ref(), scrape.rows)
}

/// Same as [`scrape_document`] with a caller-supplied table heuristic.
pub fn scrape_with(
    page: &str,
    matcher: &dyn TableMatcher,
    policy: RowPolicy,
) -> Result<ResultTable, ScrapeError> {
    let doc = html::parse_document(page);
    let table = locate::locate(&doc, matcher)?;
    Ok(ballistics::extract(&table, policy))
}
