// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::consts::{DEFAULT_OUT_FILE, DEFAULT_SUMMARY_ROWS, DEFAULT_TIMEOUT_SECS, DEFAULT_URL};
use crate::config::options::{AppOptions, ExportOptions, LocateStrategy, RowPolicy, ScrapeOptions};
use crate::summary::Summary;

/// Scrape a rifle ballistics table into a tidy CSV.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Page holding the ballistics table.
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Output CSV path.
    #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
    pub out: PathBuf,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// How to pick the data table.
    #[arg(long, value_enum, default_value_t = LocateStrategy::Text)]
    pub locate: LocateStrategy,

    /// Which rows count as data.
    #[arg(long, value_enum, default_value_t = RowPolicy::Heuristic)]
    pub rows: RowPolicy,

    /// Rows to print in the summary after writing; 0 for none.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SUMMARY_ROWS)]
    pub summary: usize,

    /// Log filter when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        AppOptions {
            scrape: ScrapeOptions {
                url: self.url.clone(),
                timeout: Duration::from_secs(self.timeout),
                locate: self.locate,
                rows: self.rows,
            },
            export: ExportOptions {
                out_path: self.out.clone(),
                summary_rows: self.summary,
            },
        }
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(&args.log_level);
    run_with(&args.to_options())
}

pub fn run_with(opts: &AppOptions) -> color_eyre::Result<()> {
    // color-eyre reports the error; logging it here too would print it twice
    let out = crate::runner::run(opts)?;

    if opts.export.summary_rows > 0 {
        println!("{}", Summary::of(&out.table, opts.export.summary_rows));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_defaults() {
        let args = Args::try_parse_from(["ballistics_scrape"]).unwrap();
        assert_eq!(args.to_options(), AppOptions::default());
    }

    #[test]
    fn flags_map_onto_options() {
        let args = Args::try_parse_from([
            "ballistics_scrape",
            "--url", "http://localhost:8080/table.htm",
            "-o", "out/rifles.csv",
            "--timeout", "3",
            "--locate", "header",
            "--rows", "schema",
            "--summary", "0",
        ])
        .unwrap();
        let opts = args.to_options();
        assert_eq!(opts.scrape.url, "http://localhost:8080/table.htm");
        assert_eq!(opts.scrape.timeout, Duration::from_secs(3));
        assert_eq!(opts.scrape.locate, LocateStrategy::Header);
        assert_eq!(opts.scrape.rows, RowPolicy::Schema);
        assert_eq!(opts.export.out_path, PathBuf::from("out/rifles.csv"));
        assert_eq!(opts.export.summary_rows, 0);
    }

    #[test]
    fn fatal_error_is_returned_as_is() {
        let mut opts = AppOptions::default();
        opts.scrape.url = s!("not a url");
        opts.export.summary_rows = 0;
        let report = run_with(&opts).unwrap_err();
        let err = report.downcast_ref::<crate::error::ScrapeError>().unwrap();
        assert!(matches!(err, crate::error::ScrapeError::InvalidUrl(_)));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(Args::try_parse_from(["ballistics_scrape", "--rows", "fuzzy"]).is_err());
    }
}
