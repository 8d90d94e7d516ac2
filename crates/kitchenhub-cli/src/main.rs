//! # khub CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kitchenhub_cli::comments::{run_comments, CommentsArgs};
use kitchenhub_cli::family::{run_family, FamilyArgs};
use kitchenhub_cli::fridge::{run_fridge, FridgeArgs};
use kitchenhub_cli::recipe::{run_recipe, RecipeArgs};
use kitchenhub_cli::{session_from_env, CliContext};
use kitchenhub_client::{HubApiConfig, HubClient};

/// KitchenHub command-line companion.
///
/// Browses recipes and comments, posts and deletes comments, shows the
/// fridge expiry alert feed, and manages the local family roster.
#[derive(Parser, Debug)]
#[command(name = "khub", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recipe detail, listing, and similar-recipe ranking.
    Recipe(RecipeArgs),

    /// Browse, post, edit, and delete recipe comments.
    Comments(CommentsArgs),

    /// Fridge expiry alerts, one-shot or watch mode.
    Fridge(FridgeArgs),

    /// Local family roster with derived BMI.
    Family(FamilyArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    // A .env in the working directory is a convenience, not a requirement.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let ctx = match build_context() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Commands::Recipe(args) => run_recipe(&args, &ctx).await,
        Commands::Comments(args) => run_comments(&args, &ctx).await,
        Commands::Fridge(args) => run_fridge(&args, &ctx).await,
        Commands::Family(args) => run_family(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn build_context() -> anyhow::Result<CliContext> {
    let config = HubApiConfig::from_env()?;
    tracing::debug!(base_url = %config.base_url, "connecting to KitchenHub backend");
    let client = HubClient::new(config)?;
    let session = session_from_env();
    if !session.is_authenticated() {
        tracing::debug!("no credentials in environment, running anonymously");
    }
    Ok(CliContext { client, session })
}
