pub mod copy;
pub mod scaffold;
pub mod setup;

pub use scaffold::ScaffoldOutcome;
