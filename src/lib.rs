/// termroast library
///
/// Core functionality for turning shell history into behavioral signals.

pub mod analysis;
pub mod error;
pub mod history;
pub mod shell;

// Re-exports for convenience
pub use error::{Result, RoastError};
pub use history::HistoryReader;
