//! aoc-scaffold: create per-day solution directories from a template project.
//!
//! `setup` copies the template into `day<N>-part1` and `copy` duplicates
//! `day<N>-part1` into `day<N>-part2`. In both cases the source directory's
//! name is replaced with the new name inside the copy's manifest file.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{ScaffoldOutcome, copy, copy_at, setup, setup_at};
pub use domain::{AppError, DayId, Part, ScaffoldConfig, SolutionDir};
