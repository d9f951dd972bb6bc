//! Flywheel - auto-continuation stop hook for Cursor agents
//!
//! Reads Cursor's stop hook payload from stdin and answers with at most
//! one follow-up instruction on stdout.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use flywheel_core::engine;
use flywheel_core::harness::CursorHarness;

mod hooks_config;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "flywheel",
    about = "Auto-continuation stop hook for Cursor agents",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "info", global = true)]
    log_level: LogLevel,
}

#[derive(Parser, Debug)]
enum Command {
    /// Evaluate a stop hook event from stdin
    Eval,

    /// Register the stop hook in Cursor's hooks.json
    Init {
        /// Override the hooks.json path (default: ~/.cursor/hooks.json)
        #[clap(long)]
        hooks_file: Option<PathBuf>,

        /// Print the resulting configuration without writing it
        #[clap(long)]
        dry_run: bool,
    },
}

/// Initialize tracing with CLI flags
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Critical: logs to stderr, not stdout
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    match cli.command {
        Command::Eval => eval_command(),
        Command::Init {
            hooks_file,
            dry_run,
        } => hooks_config::init_command(hooks_file, dry_run),
    }
}

/// Run the stop decision over stdin/stdout.
///
/// Cursor runs this inside the agent loop, so the command never fails:
/// anything that prevents a decision degrades to the empty response,
/// which Cursor reads as "do not continue".
fn eval_command() -> Result<()> {
    let mut buffer = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buffer) {
        warn!("failed to read hook event from stdin: {e}");
        println!("{{}}");
        return Ok(());
    }

    let payload = match CursorHarness::parse_event(&buffer) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("unusable hook event, suppressing follow-up: {e}");
            println!("{{}}");
            return Ok(());
        }
    };

    debug!(
        status = %payload.status,
        loop_count = payload.loop_count,
        "processing stop event"
    );

    let decision = engine::evaluate(&payload);
    let response = CursorHarness::format_response(&decision);

    // Output the response to stdout as a single JSON line
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
