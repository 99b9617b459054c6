/// Shell module
///
/// Handles shell dialect detection and history file path resolution.

pub mod locator;

pub use locator::{Shell, ShellLocator};
