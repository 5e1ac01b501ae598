mod cmd_config;
mod cmd_paint;
mod cmd_preview;
mod cmd_purge;
mod config;
mod pipeline;

use clap::{ArgAction, Parser, Subcommand};
use pipeline::PatternArgs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "heatpaint",
    version,
    about = "Paint text or images onto a git contribution heatmap"
)]
struct Cli {
    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Purge earlier art commits, create backdated commits for a pattern, and push
    Paint {
        #[command(flatten)]
        pattern: PatternArgs,
        /// Commit message marking art commits
        #[arg(short = 'm', long)]
        message: Option<String>,
        /// Remote to push to
        #[arg(long)]
        remote: Option<String>,
        /// Branch to push (defaults to the checked-out branch)
        #[arg(long)]
        branch: Option<String>,
        /// Keep earlier art commits
        #[arg(long)]
        no_purge: bool,
        /// Commit locally without pushing
        #[arg(long)]
        no_push: bool,
        /// Print the plan without touching the repository
        #[arg(long)]
        dry_run: bool,
        /// Repository to paint (defaults to the current directory)
        #[arg(long)]
        repo: Option<PathBuf>,
    },
    /// Show the heatmap and schedule a pattern would produce
    Preview {
        #[command(flatten)]
        pattern: PatternArgs,
        /// Output the schedule as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove art commits from the current branch
    Purge {
        /// Commit message marking art commits
        #[arg(short = 'm', long)]
        message: Option<String>,
        /// Only count the commits that would be removed
        #[arg(long)]
        dry_run: bool,
        /// Repository to purge (defaults to the current directory)
        #[arg(long)]
        repo: Option<PathBuf>,
    },
    /// Persistent settings
    Config {
        #[command(subcommand)]
        cmd: cmd_config::ConfigCmd,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config_path = config::config_path();

    match cli.cmd {
        Command::Paint {
            pattern,
            message,
            remote,
            branch,
            no_purge,
            no_push,
            dry_run,
            repo,
        } => {
            let repo_root = match repo {
                Some(r) => r,
                None => std::env::current_dir()?,
            };
            cmd_paint::execute(cmd_paint::PaintParams {
                repo_root: &repo_root,
                config_path: &config_path,
                pattern: &pattern,
                message: message.as_deref(),
                remote: remote.as_deref(),
                branch: branch.as_deref(),
                no_purge,
                no_push,
                dry_run,
            })
        }
        Command::Preview { pattern, json } => cmd_preview::execute(&pattern, json, &config_path),
        Command::Purge {
            message,
            dry_run,
            repo,
        } => {
            let repo_root = match repo {
                Some(r) => r,
                None => std::env::current_dir()?,
            };
            cmd_purge::execute(&repo_root, &config_path, message.as_deref(), dry_run)
        }
        Command::Config { cmd } => cmd_config::run(cmd, &config_path),
    }
}
