//! Select command - run both minimax selectors on one position

use anyhow::Result;
use clap::Parser;

use super::BattleArgs;
use crate::{
    battle::{Action, BattleQueue},
    cli::output::{print_kv, print_queue, print_section},
    minimax::{IterativeMinimax, RecursiveMinimax, reanchor, state_score, successor},
};

#[derive(Parser, Debug)]
#[command(about = "Compare the recursive and iterative minimax selectors")]
pub struct SelectArgs {
    #[command(flatten)]
    pub battle: BattleArgs,
}

/// Value an action resolves to, seen from the front character.
fn resolved_value(queue: &BattleQueue, action: Action) -> Result<Option<i32>> {
    let Some(mover) = queue.peek() else {
        return Ok(None);
    };
    if !action.is_move() {
        return Ok(None);
    }
    let next = successor(queue, action)?;
    Ok(Some(reanchor(state_score(&next)?, mover.name(), &next)))
}

fn describe(action: Action, value: Option<i32>) -> String {
    match value {
        Some(value) => format!("{action} (value {value})"),
        None => format!("{action} (no move)"),
    }
}

pub fn execute(args: SelectArgs) -> Result<()> {
    let config = args.battle.resolve()?;
    let queue = config.build_queue()?;

    print_section("Minimax selection");
    print_queue(&queue);
    println!();

    let recursive = RecursiveMinimax::select(&queue)?;
    let iterative = IterativeMinimax::select(&queue)?;
    let recursive_value = resolved_value(&queue, recursive)?;
    let iterative_value = resolved_value(&queue, iterative)?;

    print_kv("recursive", &describe(recursive, recursive_value));
    print_kv("iterative", &describe(iterative, iterative_value));

    if recursive_value != iterative_value {
        anyhow::bail!(
            "selectors disagree: recursive {recursive} resolves to {recursive_value:?}, \
             iterative {iterative} resolves to {iterative_value:?}"
        );
    }
    if recursive != iterative {
        println!("\nDifferent actions, same value: both are optimal.");
    }
    Ok(())
}
