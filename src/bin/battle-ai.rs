//! battle-ai CLI - exact minimax for turn-queue battles
//!
//! This CLI provides a unified interface for:
//! - Scoring a battle position
//! - Comparing the recursive and iterative selectors
//! - Playing full battles between playstyles
//! - Inspecting the sorcerer skill decision tree

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use battle_ai::cli::commands::{play, score, select, skill};

#[derive(Parser)]
#[command(name = "battle-ai")]
#[command(version, about = "Minimax toolkit for turn-queue battles", long_about = None)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimax value of a battle position
    Score(score::ScoreArgs),

    /// Run both minimax selectors and compare their choices
    Select(select::SelectArgs),

    /// Play a battle to the end
    Play(play::PlayArgs),

    /// Evaluate the default skill decision tree
    Skill(skill::SkillArgs),
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Score(args) => score::execute(args),
        Commands::Select(args) => select::execute(args),
        Commands::Play(args) => play::execute(args),
        Commands::Skill(args) => skill::execute(args),
    }
}
