//! Clipguard - moderate user-submitted text from the command line.
//!
//! Exit status reflects the moderation decision so shell pipelines can gate
//! on it: 0 publish, 2 reject, 3 review, 1 on runtime errors.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use clipguard_app::{load_config, render};
use clipguard_core::{decide, ContentSubmission, Moderator};
use tracing_subscriber::EnvFilter;

/// Clipguard - lexicon-based moderation for titles, descriptions, and comments
#[derive(Parser, Debug)]
#[command(name = "clipguard", version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// JSON moderation config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify text (reads stdin when TEXT is omitted)
    Analyze {
        text: Option<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print text with offensive terms masked (reads stdin when TEXT is omitted)
    Redact { text: Option<String> },
    /// Screen every field of a video submission
    Screen {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// May be repeated
        #[arg(long = "comment")]
        comments: Vec<String>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Analyze { .. } => "analyze",
            Command::Redact { .. } => "redact",
            Command::Screen { .. } => "screen",
        }
    }

    /// Total bytes of user text passed on the command line.
    fn input_len(&self) -> usize {
        match self {
            Command::Analyze { text, .. } | Command::Redact { text } => {
                text.as_ref().map_or(0, String::len)
            }
            Command::Screen {
                title,
                description,
                comments,
                ..
            } => {
                title.len()
                    + description.as_ref().map_or(0, String::len)
                    + comments.iter().map(String::len).sum::<usize>()
            }
        }
    }
}

/// Initialize console logging on stderr so stdout stays machine-readable.
fn init_logging(args: &Args) {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "clipguard_app={0},clipguard_core={0},warn",
            log_level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

/// Returns TEXT, or all of stdin with the trailing newline removed.
fn text_or_stdin(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut input = io::read_to_string(io::stdin()).context("Failed to read stdin")?;
            let trimmed = input.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
            input.truncate(trimmed);
            Ok(input)
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(&args);

    // User text stays out of the logs; only its size is recorded.
    tracing::debug!(
        command = args.command.name(),
        input_len = args.command.input_len(),
        config = ?args.config,
        "starting"
    );

    let config = load_config(args.config.as_deref()).with_context(|| match &args.config {
        Some(path) => format!("Failed to load config from {:?}", path),
        None => "Failed to load default config".to_string(),
    })?;
    let moderator = Moderator::new(config)?;

    let code = match args.command {
        Command::Analyze { text, json } => {
            let text = text_or_stdin(text)?;
            let result = moderator.analyze(&text);
            if json {
                println!("{}", render::analysis_json(&result)?);
            } else {
                println!("{}", render::analysis_summary(&result));
            }
            render::exit_code(decide(&result))
        }
        Command::Redact { text } => {
            let text = text_or_stdin(text)?;
            println!("{}", moderator.redact(&text));
            render::EXIT_PUBLISH
        }
        Command::Screen {
            title,
            description,
            comments,
            json,
        } => {
            let submission = ContentSubmission {
                title,
                description,
                comments,
            };
            let report = moderator.screen(&submission);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render::screening_summary(&report));
            }
            render::exit_code(report.action)
        }
    };

    Ok(ExitCode::from(code))
}
