// src/page/mod.rs
//! # Table reading
//!
//! Knows how to read a ballistics page once it has been turned into the
//! table IR (`core::html::RawTable`):
//!
//! - `locate` – pick the data table out of every table on the page.
//! - `rows` – filter the data table's rows by acceptance policy.
//! - `fields` – split caliber/bullet type and `"<v>/<e>"` cells.
//! - `ballistics` – glue the three into a `store::ResultTable`.
//!
//! Nothing here does IO. Fetching lives in `core::net`, writing in `file`.
//!
//! ```text
//! runner → core::net::http_get → core::html::tables
//!        → page::locate → page::ballistics::extract → file::write_export
//! ```
pub mod ballistics;
pub mod fields;
pub mod locate;
pub mod rows;
