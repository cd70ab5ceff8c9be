//! change-id - commit-msg hook entry point

use change_id::model::{AppError, CommitMetadata};
use change_id::source::MessageSource;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};

/// Insert a Change-Id trailer into a commit message
#[derive(Parser, Debug)]
#[command(name = "change-id")]
#[command(version)]
#[command(about = "Insert a stable Change-Id trailer into a commit message")]
pub struct Args {
    /// Commit message file to rewrite in place (reads stdin, writes stdout if omitted)
    pub file: Option<PathBuf>,

    /// Tree id of the staged content
    #[arg(long)]
    pub tree: String,

    /// First parent commit id (omit for a root commit)
    #[arg(long)]
    pub parent: Option<String>,

    /// Author ident: "Name <email> <epoch> <+HHMM>"
    #[arg(long)]
    pub author: String,

    /// Committer ident: "Name <email> <epoch> <+HHMM>"
    #[arg(long)]
    pub committer: String,

    /// Character that starts comment lines in the draft
    #[arg(long)]
    pub comment_char: Option<char>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the result to stdout instead of rewriting the file
    #[arg(long)]
    pub dry_run: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "change-id hook failed");
            eprintln!("change-id: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = change_id::config::load_config_with_precedence(args.config.clone())?;
        let merged = change_id::config::merge_config(config_file);
        let with_env = change_id::config::apply_env_overrides(merged);
        change_id::config::apply_cli_overrides(with_env, args.comment_char)
    };

    // Logging is best effort; an unusable log path never blocks a commit
    if let Err(err) = change_id::logging::init(&config.log_file_path) {
        eprintln!("change-id: warning: {err}; continuing without a log file");
    }
    info!(config = ?config, "Configuration loaded and resolved");

    // Validate metadata before touching the draft
    let metadata = CommitMetadata::from_raw(
        &args.tree,
        args.parent.as_deref(),
        &args.author,
        &args.committer,
    )?;

    let source = MessageSource::detect(args.file);
    let draft = source.read()?;

    let outcome = config.hook().run(&draft, &metadata);
    debug!(outcome = ?outcome, "hook finished");

    let text = outcome.text(&draft);
    if args.dry_run {
        MessageSource::Stdio.write(text)?;
    } else if outcome.is_modified() || source == MessageSource::Stdio {
        source.write(text)?;
    }

    Ok(())
}
