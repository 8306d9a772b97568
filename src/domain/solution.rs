//! Naming of per-day solution directories.

use std::fmt;

/// Opaque day identifier as given on the command line.
///
/// Conventionally a small integer, but never parsed: `"13"`, `"07"` and
/// `"bonus"` are all accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayId(String);

impl DayId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-variant of a day's exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

/// A `day<N>-part<M>` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionDir {
    day: DayId,
    part: Part,
}

impl SolutionDir {
    pub fn new(day: DayId, part: Part) -> Self {
        Self { day, part }
    }

    /// Directory name, which is also the identifier written into the manifest.
    pub fn name(&self) -> String {
        format!("day{}-part{}", self.day, self.part.number())
    }

    /// The same day with a different part.
    pub fn with_part(&self, part: Part) -> Self {
        Self {
            day: self.day.clone(),
            part,
        }
    }
}

impl fmt::Display for SolutionDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
