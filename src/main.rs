mod analysis;
mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::cmd::analyze::{self, AnalyzeCommandArgs};
use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::infra::gemini::GeminiClient;
use crate::infra::git::GitCli;

const LOG_ENV_VAR: &str = "JIGIT_LOG";

#[derive(Parser)]
#[command(
    name = "jigit",
    author,
    version,
    about = "Turn ticket context and bug reports into branch names, commit messages and test steps"
)]
struct Cli {
    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Log debug details, including request diagnostics.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze ticket context and issue details.
    Analyze(AnalyzeArgs),
    /// Manage CLI configuration.
    Config(ConfigArgs),
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Ticket context (ID, type, priority, ...).
    #[arg(short, long, conflicts_with = "context_file")]
    context: Option<String>,
    /// Read the ticket context from a file, or `-` for stdin.
    #[arg(long, value_name = "PATH")]
    context_file: Option<PathBuf>,
    /// Issue details (summary, steps to reproduce, requirements, ...).
    #[arg(short, long, conflicts_with = "details_file")]
    details: Option<String>,
    /// Read the issue details from a file, or `-` for stdin.
    #[arg(long, value_name = "PATH")]
    details_file: Option<PathBuf>,
    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
    /// Create and switch to the generated branch.
    #[arg(long)]
    checkout: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    match cli.command {
        Commands::Config(args) => {
            config_cmd::run(args.command)?;
            Ok(())
        }
        Commands::Analyze(args) => run_analyze(args).await,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> AppResult<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| AppError::Configuration(format!("failed to initialize logging: {err}")))
}

async fn run_analyze(args: AnalyzeArgs) -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd)?;

    if config.gemini_api_key.is_none() {
        warn!("Gemini API key not configured; analysis will fail. Set GEMINI_API_KEY or run `jigit config init`.");
    }

    let language_model = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_base_url.clone(),
    ));
    let git = Arc::new(GitCli::new(config.workspace_root.clone()));

    let context = AppContext::new(config, git, language_model);

    let json = args.json;
    let outcome = analyze::run(
        &context,
        AnalyzeCommandArgs {
            context: args.context,
            context_file: args.context_file,
            details: args.details,
            details_file: args.details_file,
            checkout: args.checkout,
        },
    )
    .await?;

    if json {
        println!("{}", analyze::render_json(&outcome)?);
    } else {
        print!("{}", analyze::render_text(&outcome));
    }

    match outcome.checkout {
        Some(Ok(())) => {
            eprintln!("Switched to branch {}", outcome.git.branch_name.as_str());
            Ok(())
        }
        Some(Err(err)) => Err(err),
        None => Ok(()),
    }
}
