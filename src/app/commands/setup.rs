use crate::app::AppContext;
use crate::domain::{AppError, DayId, Part, SolutionDir};
use crate::ports::ScaffoldStore;

use super::scaffold::{self, ScaffoldOutcome};

/// Create `day<day>-part1` from the configured template directory.
pub fn execute<S: ScaffoldStore>(
    ctx: &AppContext<S>,
    day: &DayId,
) -> Result<ScaffoldOutcome, AppError> {
    let target = SolutionDir::new(day.clone(), Part::One);
    scaffold::execute(ctx, &ctx.config().template, &target.name())
}
