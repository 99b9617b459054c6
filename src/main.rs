// termroast - reads your shell history so the roast generator has material
//
// This is the harness entry point. It scans the active shell's history,
// runs the pattern analyzer, and prints the resulting signals as JSON on
// stdout. Logs go to stderr so stdout stays machine-readable.

use anyhow::Result;
use termroast_lib::{analysis, HistoryReader};
use tracing_subscriber::EnvFilter;

const DEFAULT_LIMIT: i64 = 500;

// --deep looks this much further back
const DEEP_MULTIPLIER: i64 = 5;

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "help" || a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }
    if args.iter().any(|a| a == "version" || a == "-v" || a == "--version") {
        println!("termroast v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let limit = parse_limit(&args);

    let reader = match HistoryReader::from_env() {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Err(e.into());
        }
    };

    let commands = match reader.get_history(limit) {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Err(e.into());
        }
    };

    let pattern = analysis::analyze_history(&commands);

    // The ordered command list and the pattern together are what the roast
    // generator consumes
    let output = serde_json::json!({
        "shell": reader.shell().name(),
        "commands_analyzed": commands.len(),
        "pattern": pattern,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Pull the retention limit out of the raw args.
///
/// `--limit N` sets it (default 500), `--deep` multiplies it by 5. A limit
/// of -1 means the whole history.
fn parse_limit(args: &[String]) -> i64 {
    let mut limit = DEFAULT_LIMIT;

    let mut i = 0;
    while i < args.len() {
        if args[i] == "--limit" {
            i += 1;
            if let Some(value) = args.get(i).and_then(|s| s.parse().ok()) {
                limit = value;
            }
        }
        i += 1;
    }

    if args.iter().any(|a| a == "--deep") && limit > 0 {
        limit *= DEEP_MULTIPLIER;
    }

    limit
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!(
        r#"termroast v{} - Your history has opinions about you

USAGE:
    termroast [OPTIONS]

OPTIONS:
    --limit N     Number of recent commands to analyze (default: 500, -1 for all)
    --deep        Look 5x further back
    version       Show version
    help          Show this help

OUTPUT:
    A JSON object with the detected behavioral signals, ready for the
    roast generator.
"#,
        env!("CARGO_PKG_VERSION")
    );
}
