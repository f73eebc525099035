// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod metadata;
pub mod root;

pub use filesystem::WalkFileEnumerator;
pub use root::ProgramDirResolver;
