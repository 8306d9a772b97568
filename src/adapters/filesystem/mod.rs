//! Filesystem adapter for `ScaffoldStore`.
//!
//! Copies are staged in a hidden temporary directory created inside the
//! root, so the final rename never crosses a filesystem boundary.

mod copy_tree;
mod scaffold_store;

use std::path::PathBuf;

pub(crate) use copy_tree::copy_tree;
pub use scaffold_store::StagedTree;

/// Prefix of staging directories left next to solution directories while a copy is in flight.
pub const STAGING_PREFIX: &str = ".aoc-scaffold-staging-";

/// Filesystem-backed store rooted at the working directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}
