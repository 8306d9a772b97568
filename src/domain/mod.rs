pub mod config;
pub mod error;
pub mod solution;
pub mod substitution;

pub use config::{CONFIG_FILE, ScaffoldConfig};
pub use error::AppError;
pub use solution::{DayId, Part, SolutionDir};
pub use substitution::{Substituted, count_literal, replace_literal};
