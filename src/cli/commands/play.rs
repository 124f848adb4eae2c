//! Play command - run a full battle between two playstyles

use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use super::BattleArgs;
use crate::{
    battle::{Battle, BattleOutcome, BattleQueue, Turn},
    cli::output::{TurnPrinter, print_kv, print_section},
};

#[derive(Parser, Debug)]
#[command(about = "Play a battle to the end")]
pub struct PlayArgs {
    #[command(flatten)]
    pub battle: BattleArgs,

    /// Maximum number of turns before giving up
    #[arg(long)]
    pub max_turns: Option<usize>,

    /// Write the turn history as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Serialize)]
struct BattleReport<'a> {
    styles: [&'a str; 2],
    turns: &'a [Turn],
    outcome: &'a BattleOutcome,
}

/// Prompt on stdout and read one key from stdin for a manual side.
fn prompt_for_action(queue: &BattleQueue) -> crate::Result<Option<String>> {
    let Some(actor) = queue.peek() else {
        return Ok(None);
    };
    let legal: Vec<String> = actor
        .available_actions()
        .iter()
        .map(ToString::to_string)
        .collect();
    print!("  {} [{}]> ", actor, legal.join("/"));
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = args.battle.resolve()?;
    if let Some(max_turns) = args.max_turns {
        config.max_turns = max_turns;
    }
    let queue = config.build_queue()?;
    let mut playstyles = config.build_playstyles();

    print_section("Battle");
    for (character, style) in queue.characters().iter().zip(playstyles.iter()) {
        print_kv(character.name().as_str(), style.name());
    }
    if let Some(seed) = config.seed {
        print_kv("seed", &seed.to_string());
    }

    let mut battle = Battle::new(queue);
    let mut printer = TurnPrinter;
    let outcome = battle.run_with_input(
        &mut playstyles,
        config.max_turns,
        &mut printer,
        prompt_for_action,
    )?;

    if let Some(path) = args.export {
        let report = BattleReport {
            styles: [playstyles[0].name(), playstyles[1].name()],
            turns: battle.turns(),
            outcome: &outcome,
        };
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write battle report to {}", path.display()))?;
        println!("\nBattle report written to {}", path.display());
    }

    Ok(())
}
