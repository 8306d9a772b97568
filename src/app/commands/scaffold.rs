//! Copy a directory and rename the identifier inside its manifest.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, replace_literal};
use crate::ports::ScaffoldStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub source: String,
    pub destination: String,
    pub manifest: PathBuf,
    pub replacements: usize,
}

impl ScaffoldOutcome {
    pub fn display_path(&self) -> String {
        format!("{}/", self.destination)
    }

    pub fn manifest_display(&self) -> String {
        format!("{}/{}", self.destination, self.manifest.display())
    }
}

/// Copy `source` to `destination` and replace every occurrence of the
/// source name with the destination name in the copied manifest.
///
/// The copy is committed only after the manifest has been rewritten; on any
/// error the destination is left absent.
pub fn execute<S: ScaffoldStore>(
    ctx: &AppContext<S>,
    source: &str,
    destination: &str,
) -> Result<ScaffoldOutcome, AppError> {
    let store = ctx.store();

    if !store.dir_exists(source) {
        return Err(AppError::SourceNotFound(source.to_string()));
    }
    if store.entry_exists(destination) {
        return Err(AppError::DestinationExists(destination.to_string()));
    }

    let manifest = ctx.config().manifest.clone();
    let staged = store.stage_copy(source, destination)?;

    let original = store.read_staged(&staged, &manifest)?.ok_or_else(|| {
        AppError::ManifestNotFound(format!("{}/{}", source, manifest.display()))
    })?;
    let substituted = replace_literal(&original, source.as_bytes(), destination.as_bytes());
    store.write_staged(&staged, &manifest, &substituted.content)?;

    store.commit(staged, destination)?;

    Ok(ScaffoldOutcome {
        source: source.to_string(),
        destination: destination.to_string(),
        manifest,
        replacements: substituted.replacements,
    })
}
