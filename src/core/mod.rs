// src/core/mod.rs

pub mod html;
pub mod net;
pub mod retry;
pub mod sanitize;
