#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod pattern;

pub use analytics::sort::{SizeSort, SortOrder};
pub use model::FileRecord;
pub use pattern::{CaseSensitivity, NamePattern};
