//! mitra-core
//!
//! Pure domain types shared by the guideline table, the scoring engine and the
//! HTTP surface. No I/O — this is the wire vocabulary the UI renders as-is.

pub mod error;
pub mod models;
