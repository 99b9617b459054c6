/// Analysis module
///
/// Turns an ordered command list into the behavioral signals the roast
/// generator feeds on.

pub mod analyzer;

pub use analyzer::{analyze_history, CommandCount, CommandPattern, SkillLevel};
