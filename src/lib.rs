// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod page;

pub mod csv;
pub mod file;
pub mod record;
pub mod runner;
pub mod store;
pub mod summary;
