// Finds patterns in your command history
//
// Like when you've typed "git status" forty times today, or when half your
// session is just cd-ing around hoping the right directory shows up.
//
// Every pass here is a pure linear scan over the same immutable input. The
// whole thing is total: any command list in, a well-formed pattern out.

use serde::Serialize;
use std::collections::HashMap;

// A base command has to show up more than this often to count as repeated
const REPEAT_THRESHOLD: usize = 3;

// Pipes or semicolons beyond this, or length beyond 80 chars, reads as
// someone showing off
const COMPLEXITY_SEPARATOR_THRESHOLD: usize = 2;
const COMPLEXITY_LENGTH_THRESHOLD: usize = 80;

// More than 40% cd/ls and you're just wandering
const INDECISIVE_RATIO: f64 = 0.4;

// Sites people "check real quick" from the terminal
const DISTRACTION_SITES: &[&str] = &["reddit", "youtube", "twitter", "facebook", "instagram"];

// Tools that suggest the user knows what they're doing. Matched against the
// lowercased command, so every entry stays lowercase.
const ADVANCED_TOOLS: &[&str] = &[
    "awk",
    "sed",
    "grep -e",
    "xargs",
    "find -exec",
    "docker",
    "kubernetes",
    "k8s",
    "kubectl",
];

const ADVANCED_SKILL_THRESHOLD: usize = 5;
const INTERMEDIATE_SKILL_THRESHOLD: usize = 2;

/// Inferred skill tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A base command and how often it appeared
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandCount {
    pub command: String,
    pub count: usize,
}

/// Behavioral signals extracted from one command history snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandPattern {
    /// Base commands seen more than three times, most frequent first
    pub repeated_commands: Vec<CommandCount>,
    /// Commands that look like they were mistyped and immediately retried
    pub corrected_commands: Vec<String>,
    /// Commands heavy on pipes, semicolons, or sheer length
    pub complex_commands: Vec<String>,
    /// True when cd/ls dominates the history
    pub indecisive: bool,
    /// Distraction sites mentioned anywhere in the history, first-seen order
    pub distraction_sites: Vec<String>,
    /// Skill tier inferred from advanced-tooling usage
    pub skill_level: SkillLevel,
}

impl CommandPattern {
    fn empty() -> Self {
        Self {
            repeated_commands: Vec::new(),
            corrected_commands: Vec::new(),
            complex_commands: Vec::new(),
            indecisive: false,
            distraction_sites: Vec::new(),
            skill_level: SkillLevel::Beginner,
        }
    }
}

/// Analyze command patterns in history.
///
/// Pure and deterministic: the same input always yields the same output,
/// including the ordering of every list. Defined for the empty sequence.
pub fn analyze_history(commands: &[String]) -> CommandPattern {
    let mut pattern = CommandPattern::empty();

    pattern.repeated_commands = find_repeated_commands(commands);
    pattern.corrected_commands = find_corrected_commands(commands);
    pattern.complex_commands = find_complex_commands(commands);
    pattern.indecisive = is_indecisive(commands);
    pattern.distraction_sites = find_distraction_sites(commands);
    pattern.skill_level = infer_skill_level(commands);

    pattern
}

/// Tally base commands (first whitespace token) and report the ones used
/// more than three times.
///
/// HashMap iteration order is not reproducible, so the result is explicitly
/// sorted: count descending, ties by base command ascending.
fn find_repeated_commands(commands: &[String]) -> Vec<CommandCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for cmd in commands {
        if let Some(base) = cmd.split_whitespace().next() {
            *counts.entry(base).or_insert(0) += 1;
        }
    }

    let mut repeated: Vec<CommandCount> = counts
        .into_iter()
        .filter(|(_, count)| *count > REPEAT_THRESHOLD)
        .map(|(command, count)| CommandCount {
            command: command.to_string(),
            count,
        })
        .collect();

    repeated.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.command.cmp(&b.command)));
    repeated
}

/// Spot likely typo-and-retry pairs.
///
/// If a cd/mkdir/git command is immediately followed by one sharing its
/// first 4 bytes, the earlier one probably failed. Coarse on purpose; it
/// over- and under-matches, and that's the behavior downstream expects.
fn find_corrected_commands(commands: &[String]) -> Vec<String> {
    let mut corrected = Vec::new();

    for pair in commands.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);

        let eligible = prev.starts_with("cd ")
            || prev.starts_with("mkdir ")
            || prev.starts_with("git ");

        if !eligible {
            continue;
        }

        // Byte-wise prefix so multibyte input can't split a char boundary
        let prefix_len = prev.len().min(4);
        if curr.as_bytes().starts_with(&prev.as_bytes()[..prefix_len]) {
            corrected.push(prev.clone());
        }
    }

    corrected
}

/// Collect commands with more than 2 pipes, more than 2 semicolons, or more
/// than 80 bytes of text, in encounter order.
fn find_complex_commands(commands: &[String]) -> Vec<String> {
    commands
        .iter()
        .filter(|cmd| {
            let pipes = cmd.bytes().filter(|&b| b == b'|').count();
            let semis = cmd.bytes().filter(|&b| b == b';').count();
            pipes > COMPLEXITY_SEPARATOR_THRESHOLD
                || semis > COMPLEXITY_SEPARATOR_THRESHOLD
                || cmd.len() > COMPLEXITY_LENGTH_THRESHOLD
        })
        .cloned()
        .collect()
}

/// Flag histories where navigation (cd/ls) is strictly more than 40% of all
/// commands. An empty history is never indecisive.
fn is_indecisive(commands: &[String]) -> bool {
    let nav_count = commands
        .iter()
        .filter(|cmd| {
            let cmd = cmd.as_str();
            cmd.starts_with("cd ") || cmd.starts_with("ls ") || cmd == "ls"
        })
        .count();

    nav_count as f64 > commands.len() as f64 * INDECISIVE_RATIO
}

/// Collect distraction sites mentioned anywhere in the history, each at most
/// once, in first-seen order.
fn find_distraction_sites(commands: &[String]) -> Vec<String> {
    let mut sites: Vec<String> = Vec::new();

    for cmd in commands {
        let lower = cmd.to_lowercase();
        for site in DISTRACTION_SITES.iter().copied() {
            if lower.contains(site) && !sites.iter().any(|s| s == site) {
                sites.push(site.to_string());
            }
        }
    }

    sites
}

/// Infer skill from how often advanced tooling shows up. A command counts
/// once no matter how many advanced terms it contains.
fn infer_skill_level(commands: &[String]) -> SkillLevel {
    let advanced_count = commands
        .iter()
        .filter(|cmd| {
            let lower = cmd.to_lowercase();
            ADVANCED_TOOLS.iter().any(|&tool| lower.contains(tool))
        })
        .count();

    if advanced_count > ADVANCED_SKILL_THRESHOLD {
        SkillLevel::Advanced
    } else if advanced_count > INTERMEDIATE_SKILL_THRESHOLD {
        SkillLevel::Intermediate
    } else {
        SkillLevel::Beginner
    }
}
