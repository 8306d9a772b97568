//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::FilesystemStore;
use crate::app::{
    AppContext,
    commands::{copy, setup},
    config::load_config,
};
use crate::domain::{AppError, DayId};

pub use crate::app::commands::ScaffoldOutcome;

/// Create an `AppContext` rooted at the given path, loading its configuration.
fn context_at(root: &Path) -> Result<AppContext<FilesystemStore>, AppError> {
    let store = FilesystemStore::new(root.to_path_buf());
    let config = load_config(&store)?;
    Ok(AppContext::new(store, config))
}

/// Scaffold `day<day>-part1` from the template in the current directory.
pub fn setup(day: &str) -> Result<ScaffoldOutcome, AppError> {
    setup_at(&std::env::current_dir()?, day)
}

/// Scaffold `day<day>-part1` from the template under `root`.
pub fn setup_at(root: &Path, day: &str) -> Result<ScaffoldOutcome, AppError> {
    let ctx = context_at(root)?;
    setup::execute(&ctx, &DayId::new(day))
}

/// Duplicate `day<day>-part1` into `day<day>-part2` in the current directory.
pub fn copy(day: &str) -> Result<ScaffoldOutcome, AppError> {
    copy_at(&std::env::current_dir()?, day)
}

/// Duplicate `day<day>-part1` into `day<day>-part2` under `root`.
pub fn copy_at(root: &Path, day: &str) -> Result<ScaffoldOutcome, AppError> {
    let ctx = context_at(root)?;
    copy::execute(&ctx, &DayId::new(day))
}
