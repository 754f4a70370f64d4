//! Receipts domain module.
//!
//! This crate contains the rules that decide whether a receipt may be scored
//! and how many points it earns, implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod receipt;
pub mod scored;
pub mod scoring;
pub mod validation;

pub use receipt::{LineItem, Receipt};
pub use scored::ScoredReceipt;
pub use scoring::{breakdown, score, PointsBreakdown};
pub use validation::{check, validate, ValidatedReceipt, Violation};
