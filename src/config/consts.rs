// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "https://chuckhawks.com/rifle_ballistics_table2.htm";
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/141.0.0.0 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Table location
pub const TEXT_MARKERS: &[&str] = &["v/e", "muzzle"];
pub const HEADER_MARKERS: &[&str] = &["cartridge"];
pub const TEXT_PREFIX_CHARS: usize = 200;

// Row extraction
pub const MAX_ROW_WIDTH: usize = 5; // Caliber + 4 V/E cells

// Export
pub const DEFAULT_OUT_FILE: &str = "rifle_caliber_data_clean.csv";
pub const CSV_SEP: char = ',';
pub const DEFAULT_SUMMARY_ROWS: usize = 10;
