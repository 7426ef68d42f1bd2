// src/engine/mod.rs
//! Turns the flat cell sequences of a roster page into typed player rows.
//!
//! - `decoder`: fixed-width record decoding of the centered cells.
//! - `assemble`: length checks and row construction.

pub mod assemble;
pub mod decoder;
pub mod types;

pub use assemble::assemble;
pub use decoder::decode;
pub use types::*;
