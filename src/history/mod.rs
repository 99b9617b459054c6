/// History module
///
/// Streams a shell history file through the dialect parser and hands back
/// the most recent commands in chronological order.

pub mod dialects;
pub mod retention;

use crate::error::Result;
use crate::shell::{Shell, ShellLocator};
use dialects::{parser_for, LineParser};
use regex::Regex;
use retention::RetentionBuffer;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::PathBuf;

/// Placeholder command returned when no history file exists. Downstream
/// consumers treat it as just another (uninteresting) command stream.
pub const NO_HISTORY_SENTINEL: &str = "No history file found";

// Initial read buffer; lines grow past this without truncation
const SCAN_BUFFER_SIZE: usize = 64 * 1024;

/// Reads one shell's history file
pub struct HistoryReader {
    shell: Shell,
    path: PathBuf,
    parser: Box<dyn LineParser>,
}

impl HistoryReader {
    /// Build a reader for an explicit dialect and file path.
    pub fn new(shell: Shell, path: PathBuf) -> Self {
        Self {
            shell,
            path,
            parser: parser_for(shell),
        }
    }

    /// Build a reader for the active shell, resolved from the environment.
    pub fn from_env() -> Result<Self> {
        let (shell, path) = ShellLocator::locate()?;
        Ok(Self::new(shell, path))
    }

    pub fn shell(&self) -> Shell {
        self.shell
    }

    /// Get the most recent commands, oldest first.
    ///
    /// * `limit > 0` — at most that many commands, the most recent ones.
    /// * `limit < 0` — the entire history.
    /// * `limit == 0` — an empty sequence, without touching the file.
    ///
    /// A missing history file is not an error: the result is a single
    /// sentinel entry. Everything else that goes wrong at the file level
    /// propagates.
    pub fn get_history(&self, limit: i64) -> Result<Vec<String>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no history file");
                return Ok(vec![NO_HISTORY_SENTINEL.to_string()]);
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = BufReader::with_capacity(SCAN_BUFFER_SIZE, file);
        let mut commands = RetentionBuffer::new(limit);
        let mut raw = Vec::with_capacity(256);
        let mut line_count: u64 = 0;

        loop {
            raw.clear();
            // Read raw bytes so encoding noise can't abort the scan; the
            // buffer grows as needed, multi-megabyte entries survive intact
            let n = reader.read_until(b'\n', &mut raw)?;
            if n == 0 {
                break;
            }
            line_count += 1;

            if raw.last() == Some(&b'\n') {
                raw.pop();
            }
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }

            let line = String::from_utf8_lossy(&raw);
            if let Some(cmd) = self.parser.parse_line(&line) {
                commands.push(cmd);
            }
        }

        tracing::debug!(
            shell = self.shell.name(),
            lines = line_count,
            commands = commands.len(),
            "history scan complete"
        );

        Ok(commands.into_vec())
    }
}

/// Return only the most recent commands, up to `limit`.
///
/// A non-positive limit or a list already within bounds comes back whole.
pub fn most_recent(commands: Vec<String>, limit: i64) -> Vec<String> {
    let Ok(limit) = usize::try_from(limit) else {
        return commands;
    };
    if limit == 0 || commands.len() <= limit {
        return commands;
    }
    let skip = commands.len() - limit;
    commands.into_iter().skip(skip).collect()
}

/// Filter commands by a regex pattern.
///
/// An invalid pattern degrades to plain substring matching instead of
/// erroring.
pub fn filter_commands(commands: &[String], pattern: &str) -> Vec<String> {
    match Regex::new(pattern) {
        Ok(re) => commands
            .iter()
            .filter(|cmd| re.is_match(cmd))
            .cloned()
            .collect(),
        Err(_) => commands
            .iter()
            .filter(|cmd| cmd.contains(pattern))
            .cloned()
            .collect(),
    }
}
