// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod log;
pub mod specs;

pub mod csv;
pub mod file;
pub mod progress;
pub mod runner;

pub use error::{PriceError, ScrapeError};
pub use runner::{run, scrape_document, RunSummary};
