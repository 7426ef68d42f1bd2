// src/specs/mod.rs
//! # Page specs
//!
//! One module per remote page. A spec knows *where the data lives in the markup*
//! and turns a document into flat cell sequences; it does not decode, validate,
//! or write anything.
//!
//! ## Typical call chain
//! ```text
//! cli → runner::run → core::net::http_get
//!                   → specs::roster::collect      (markup → RawCells)
//!                   → engine::assemble            (RawCells → Roster)
//!                   → file::write_roster
//! ```
//!
//! ## Conventions
//! - Selectors come from `ExtractOptions`, never hard-coded here.
//! - Cell text is returned raw; cleanup belongs to `core::sanitize`.
//! - Specs are testable offline against saved or synthetic HTML.
pub mod roster;
