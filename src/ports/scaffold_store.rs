//! Storage operations needed to scaffold a solution directory.
//!
//! Directory names are relative to the working root. Copies are staged:
//! a tree is assembled out of sight, edited, and only then committed under
//! its final name.

use std::path::Path;

use crate::domain::AppError;

pub trait ScaffoldStore {
    /// Handle to a copied tree that has not been committed yet.
    ///
    /// Dropping it without calling `commit` discards the copy.
    type Staged;

    /// Whether `name` exists under the root and is a directory.
    fn dir_exists(&self, name: &str) -> bool;

    /// Whether anything (file, directory or link) occupies `name`.
    fn entry_exists(&self, name: &str) -> bool;

    /// Read a UTF-8 file at the root. Returns `None` if it does not exist.
    fn read_root_file(&self, name: &str) -> Result<Option<String>, AppError>;

    /// Recursively copy directory `source` into a new staged tree destined for `destination`.
    fn stage_copy(&self, source: &str, destination: &str) -> Result<Self::Staged, AppError>;

    /// Read the source content of a file in a staged tree. Returns `None` if it does not exist.
    fn read_staged(&self, staged: &Self::Staged, path: &Path) -> Result<Option<Vec<u8>>, AppError>;

    /// Replace a file inside a staged tree with a regular file holding `content`.
    ///
    /// Never writes through a link into the source tree.
    fn write_staged(
        &self,
        staged: &Self::Staged,
        path: &Path,
        content: &[u8],
    ) -> Result<(), AppError>;

    /// Move the staged tree to `destination`. Fails if `destination` appeared meanwhile.
    fn commit(&self, staged: Self::Staged, destination: &str) -> Result<(), AppError>;
}
