/// Shell dialect detection
///
/// Figures out which shell the user runs and where that shell keeps its
/// history file.

use crate::error::{Result, RoastError};
use std::env;
use std::path::{Path, PathBuf};

/// Supported shell dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl Shell {
    /// Get the shell name as a string
    pub fn name(&self) -> &str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
        }
    }

    /// Map a free-form shell identifier (usually `$SHELL`) to a dialect.
    ///
    /// Matches by substring, so "/usr/bin/zsh" and "zsh-5.9" both count.
    /// Anything unrecognized falls back to bash, whose one-command-per-line
    /// format is the safest guess for an unknown shell.
    pub fn from_identifier(identifier: &str) -> Shell {
        if identifier.contains("zsh") {
            Shell::Zsh
        } else if identifier.contains("fish") {
            Shell::Fish
        } else {
            Shell::Bash
        }
    }

    /// Canonical history file path for this dialect under the given home.
    pub fn history_path(&self, home: &Path) -> PathBuf {
        match self {
            Shell::Bash => home.join(".bash_history"),
            Shell::Zsh => home.join(".zsh_history"),
            Shell::Fish => home.join(".local/share/fish/fish_history"),
        }
    }
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resolves the active shell and its history file
pub struct ShellLocator;

impl ShellLocator {
    /// Detect the active dialect and resolve its history file path.
    ///
    /// Reads `$SHELL` (an unset variable falls back to bash). Failing to
    /// resolve the home directory is a hard error since no history path can
    /// be built without it.
    pub fn locate() -> Result<(Shell, PathBuf)> {
        let identifier = env::var("SHELL").unwrap_or_default();
        let shell = Shell::from_identifier(&identifier);

        let home = dirs::home_dir().ok_or_else(|| {
            RoastError::Config("Could not determine home directory".to_string())
        })?;

        let path = shell.history_path(&home);
        tracing::debug!(shell = shell.name(), path = %path.display(), "resolved history file");

        Ok((shell, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_name() {
        assert_eq!(Shell::Bash.name(), "bash");
        assert_eq!(Shell::Zsh.name(), "zsh");
        assert_eq!(Shell::Fish.name(), "fish");
    }

    #[test]
    fn test_shell_display() {
        assert_eq!(Shell::Zsh.to_string(), "zsh");
    }

    #[test]
    fn test_from_identifier_full_paths() {
        assert_eq!(Shell::from_identifier("/bin/bash"), Shell::Bash);
        assert_eq!(Shell::from_identifier("/usr/bin/zsh"), Shell::Zsh);
        assert_eq!(Shell::from_identifier("/usr/local/bin/fish"), Shell::Fish);
    }

    #[test]
    fn test_from_identifier_substring() {
        assert_eq!(Shell::from_identifier("zsh-5.9"), Shell::Zsh);
        assert_eq!(Shell::from_identifier("fish3"), Shell::Fish);
    }

    #[test]
    fn test_from_identifier_unknown_falls_back_to_bash() {
        assert_eq!(Shell::from_identifier("/bin/tcsh"), Shell::Bash);
        assert_eq!(Shell::from_identifier(""), Shell::Bash);
    }

    #[test]
    fn test_history_path() {
        let home = Path::new("/home/user");
        assert_eq!(
            Shell::Bash.history_path(home),
            PathBuf::from("/home/user/.bash_history")
        );
        assert_eq!(
            Shell::Zsh.history_path(home),
            PathBuf::from("/home/user/.zsh_history")
        );
        assert_eq!(
            Shell::Fish.history_path(home),
            PathBuf::from("/home/user/.local/share/fish/fish_history")
        );
    }
}
