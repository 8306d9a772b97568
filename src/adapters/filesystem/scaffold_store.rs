//! `ScaffoldStore` implementation for `FilesystemStore`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::domain::AppError;
use crate::ports::ScaffoldStore;

use super::{FilesystemStore, STAGING_PREFIX, copy_tree};

/// A copied tree living inside a temporary staging directory.
///
/// The staging directory is removed on drop, taking any uncommitted copy with it.
#[derive(Debug)]
pub struct StagedTree {
    _staging: TempDir,
    source: PathBuf,
    tree: PathBuf,
}

impl ScaffoldStore for FilesystemStore {
    type Staged = StagedTree;

    fn dir_exists(&self, name: &str) -> bool {
        self.root.join(name).is_dir()
    }

    fn entry_exists(&self, name: &str) -> bool {
        fs::symlink_metadata(self.root.join(name)).is_ok()
    }

    fn read_root_file(&self, name: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.root.join(name)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn stage_copy(&self, source: &str, destination: &str) -> Result<StagedTree, AppError> {
        let source_path = self.root.join(source);
        if !source_path.is_dir() {
            return Err(AppError::SourceNotFound(source.to_string()));
        }

        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&self.root)?;
        let tree = staging.path().join(destination);
        if let Some(parent) = tree.parent() {
            fs::create_dir_all(parent)?;
        }
        copy_tree(&source_path, &tree)?;

        Ok(StagedTree {
            _staging: staging,
            source: source_path,
            tree,
        })
    }

    fn read_staged(&self, staged: &StagedTree, path: &Path) -> Result<Option<Vec<u8>>, AppError> {
        // Copied links may be relative, so resolve them from the source location.
        match fs::read(staged.source.join(path)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_staged(
        &self,
        staged: &StagedTree,
        path: &Path,
        content: &[u8],
    ) -> Result<(), AppError> {
        let target = staged.tree.join(path);
        // A copied link still points into the source tree; replace it with a regular file.
        if fs::symlink_metadata(&target).is_ok_and(|meta| meta.file_type().is_symlink()) {
            fs::remove_file(&target)?;
        }
        fs::write(&target, content)?;
        Ok(())
    }

    fn commit(&self, staged: StagedTree, destination: &str) -> Result<(), AppError> {
        // rename(2) happily replaces an empty directory, so check first.
        if self.entry_exists(destination) {
            return Err(AppError::DestinationExists(destination.to_string()));
        }

        fs::rename(&staged.tree, self.root.join(destination))?;
        Ok(())
    }
}
