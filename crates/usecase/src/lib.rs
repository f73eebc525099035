//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: enumerate matching files, map them to records, sort by size
//! - [`dto`]: data returned across the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::ListingOutput;
pub use orchestrator::ListPdfSizes;
