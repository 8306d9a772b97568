use crate::app::AppContext;
use crate::domain::{AppError, DayId, Part, SolutionDir};
use crate::ports::ScaffoldStore;

use super::scaffold::{self, ScaffoldOutcome};

/// Duplicate `day<day>-part1` into `day<day>-part2`.
pub fn execute<S: ScaffoldStore>(
    ctx: &AppContext<S>,
    day: &DayId,
) -> Result<ScaffoldOutcome, AppError> {
    let source = SolutionDir::new(day.clone(), Part::One);
    let target = source.with_part(Part::Two);
    scaffold::execute(ctx, &source.name(), &target.name())
}
