// Per-dialect history line parsers
//
// Each shell writes history in its own format, so each dialect gets its own
// parser. A parser takes one raw line and yields zero or one command; a line
// nothing can make sense of is dropped, never an error.

use crate::shell::Shell;
use regex::Regex;
use serde::Deserialize;

// ZSH extended history format: ": TIMESTAMP:ELAPSED;COMMAND"
const ZSH_TIMESTAMP_PATTERN: &str = r": (\d+):\d+;(.*)";

// Fish fallback for lines that are not valid JSON records
const FISH_CMD_PATTERN: &str = r"- cmd: (.+)";

/// Attempt to extract a command from one raw history line.
///
/// `None` means the line carries no command (metadata, blank, garbage) and
/// should be silently skipped.
pub trait LineParser {
    fn parse_line(&self, line: &str) -> Option<String>;
}

/// Build the parser for a shell dialect.
pub fn parser_for(shell: Shell) -> Box<dyn LineParser> {
    match shell {
        Shell::Bash => Box::new(PlainParser),
        Shell::Zsh => Box::new(TimestampedParser::new()),
        Shell::Fish => Box::new(StructuredParser::new()),
    }
}

/// Bash-style history: one command per line.
///
/// Lines starting with `#` are HISTTIMEFORMAT timestamp markers and carry no
/// command.
pub struct PlainParser;

impl LineParser for PlainParser {
    fn parse_line(&self, line: &str) -> Option<String> {
        if line.starts_with('#') {
            return None;
        }

        let cmd = line.trim();
        if cmd.is_empty() {
            return None;
        }

        Some(cmd.to_string())
    }
}

/// Zsh-style history: ": <epoch>:<elapsed>;<command>", or a bare command
/// when EXTENDED_HISTORY is off.
///
/// Strategies are tried in order: timestamp regex, split on the first `;`,
/// then the whole trimmed line.
pub struct TimestampedParser {
    re: Option<Regex>,
}

impl TimestampedParser {
    pub fn new() -> Self {
        // Compile once so we don't pay regex construction per line
        Self {
            re: Regex::new(ZSH_TIMESTAMP_PATTERN).ok(),
        }
    }
}

impl Default for TimestampedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser for TimestampedParser {
    fn parse_line(&self, line: &str) -> Option<String> {
        // Primary: extended-history timestamp format. A matched line with an
        // empty command is timestamp noise, not a command worth keeping.
        if let Some(re) = &self.re {
            if let Some(caps) = re.captures(line) {
                let cmd = caps.get(2).map_or("", |m| m.as_str()).trim();
                if cmd.is_empty() {
                    return None;
                }
                return Some(cmd.to_string());
            }
        }

        // Fallback: anything after the first `;`
        if let Some((_, rest)) = line.split_once(';') {
            let cmd = rest.trim();
            if cmd.is_empty() {
                return None;
            }
            return Some(cmd.to_string());
        }

        // Last resort: the whole line is the command
        let cmd = line.trim();
        if cmd.is_empty() {
            return None;
        }
        Some(cmd.to_string())
    }
}

/// One fish history record: the command plus when it ran.
#[derive(Debug, Deserialize)]
struct FishEntry {
    cmd: String,
    #[serde(default)]
    when: i64,
}

/// Fish-style history: structured records with `cmd` and `when` fields.
///
/// Each line is first attempted as a single JSON record; lines that fail
/// fall back to a textual `- cmd: <text>` match. Lines matching neither are
/// dropped.
pub struct StructuredParser {
    cmd_re: Option<Regex>,
}

impl StructuredParser {
    pub fn new() -> Self {
        Self {
            cmd_re: Regex::new(FISH_CMD_PATTERN).ok(),
        }
    }
}

impl Default for StructuredParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser for StructuredParser {
    fn parse_line(&self, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return None;
        }

        // Structured record first
        if let Ok(entry) = serde_json::from_str::<FishEntry>(line) {
            if !entry.cmd.is_empty() {
                tracing::trace!(when = entry.when, "parsed fish record");
                return Some(entry.cmd);
            }
        }

        // Textual fallback
        if let Some(re) = &self.cmd_re {
            if let Some(caps) = re.captures(line) {
                let cmd = caps.get(1).map_or("", |m| m.as_str()).trim();
                if !cmd.is_empty() {
                    return Some(cmd.to_string());
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- PlainParser --

    #[test]
    fn test_plain_trims_whitespace() {
        let parser = PlainParser;
        assert_eq!(parser.parse_line("  ls -la  "), Some("ls -la".to_string()));
    }

    #[test]
    fn test_plain_drops_timestamp_lines() {
        let parser = PlainParser;
        assert_eq!(parser.parse_line("#1700000000"), None);
        assert_eq!(parser.parse_line("# anything"), None);
    }

    #[test]
    fn test_plain_drops_empty_lines() {
        let parser = PlainParser;
        assert_eq!(parser.parse_line(""), None);
        assert_eq!(parser.parse_line("   "), None);
    }

    #[test]
    fn test_plain_keeps_indented_hash() {
        // Only lines that start with # in column 0 are timestamp markers
        let parser = PlainParser;
        assert_eq!(parser.parse_line("  #notes"), Some("#notes".to_string()));
    }

    // -- TimestampedParser --

    #[test]
    fn test_timestamped_extracts_command() {
        let parser = TimestampedParser::new();
        assert_eq!(
            parser.parse_line(": 1690000000:0;ls -la"),
            Some("ls -la".to_string())
        );
    }

    #[test]
    fn test_timestamped_empty_command_dropped() {
        let parser = TimestampedParser::new();
        assert_eq!(parser.parse_line(": 1690000000:0;"), None);
    }

    #[test]
    fn test_timestamped_semicolon_fallback() {
        // Not the timestamp format, but has a separator
        let parser = TimestampedParser::new();
        assert_eq!(
            parser.parse_line("weird-prefix;git status"),
            Some("git status".to_string())
        );
    }

    #[test]
    fn test_timestamped_whole_line_fallback() {
        let parser = TimestampedParser::new();
        assert_eq!(
            parser.parse_line("not-a-timestamp-line"),
            Some("not-a-timestamp-line".to_string())
        );
    }

    #[test]
    fn test_timestamped_blank_dropped() {
        let parser = TimestampedParser::new();
        assert_eq!(parser.parse_line(""), None);
        assert_eq!(parser.parse_line("   "), None);
    }

    #[test]
    fn test_timestamped_command_with_semicolons() {
        let parser = TimestampedParser::new();
        assert_eq!(
            parser.parse_line(": 1690000000:0;cd /tmp; ls"),
            Some("cd /tmp; ls".to_string())
        );
    }

    // -- StructuredParser --

    #[test]
    fn test_structured_json_record() {
        let parser = StructuredParser::new();
        assert_eq!(
            parser.parse_line(r#"{"cmd": "git push", "when": 1690000000}"#),
            Some("git push".to_string())
        );
    }

    #[test]
    fn test_structured_json_without_when() {
        let parser = StructuredParser::new();
        assert_eq!(
            parser.parse_line(r#"{"cmd": "ls"}"#),
            Some("ls".to_string())
        );
    }

    #[test]
    fn test_structured_textual_fallback() {
        let parser = StructuredParser::new();
        assert_eq!(
            parser.parse_line("- cmd: make test"),
            Some("make test".to_string())
        );
    }

    #[test]
    fn test_structured_metadata_dropped() {
        let parser = StructuredParser::new();
        assert_eq!(parser.parse_line("  when: 1690000000"), None);
        assert_eq!(parser.parse_line("  paths:"), None);
    }

    #[test]
    fn test_structured_empty_json_cmd_dropped() {
        let parser = StructuredParser::new();
        assert_eq!(parser.parse_line(r#"{"cmd": "", "when": 1}"#), None);
    }

    #[test]
    fn test_structured_blank_dropped() {
        let parser = StructuredParser::new();
        assert_eq!(parser.parse_line(""), None);
        assert_eq!(parser.parse_line("   "), None);
    }

    #[test]
    fn test_parser_for_dispatch() {
        use crate::shell::Shell;
        assert_eq!(parser_for(Shell::Bash).parse_line("ls"), Some("ls".to_string()));
        assert_eq!(
            parser_for(Shell::Zsh).parse_line(": 1:0;ls"),
            Some("ls".to_string())
        );
        assert_eq!(
            parser_for(Shell::Fish).parse_line("- cmd: ls"),
            Some("ls".to_string())
        );
    }
}
