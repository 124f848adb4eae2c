//! Score command - minimax value of a battle position

use anyhow::Result;
use clap::Parser;

use super::BattleArgs;
use crate::{
    cli::output::{format_number, print_kv, print_queue, print_section, print_subsection},
    minimax::{IterativeMinimax, action_scores, optimal_policy, state_score},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the minimax value of a battle position")]
pub struct ScoreArgs {
    #[command(flatten)]
    pub battle: BattleArgs,

    /// Also build the explicit state tree and report its size
    #[arg(long)]
    pub tree: bool,
}

pub fn execute(args: ScoreArgs) -> Result<()> {
    let config = args.battle.resolve()?;
    let queue = config.build_queue()?;

    print_section("State value");
    print_queue(&queue);

    let Some(mover) = queue.peek() else {
        println!("\nNo turns left.");
        return Ok(());
    };
    if queue.is_over() {
        print_kv("value", &state_score(&queue)?.to_string());
        println!("\nBattle is already over.");
        return Ok(());
    }
    if !mover.can_act() {
        println!("\n{} has no legal action.", mover.name());
        return Ok(());
    }

    let scores = action_scores(&queue)?;
    if let Some(policy) = optimal_policy(&queue)? {
        print_kv(
            &format!("value for {}", mover.name()),
            &policy.value.to_string(),
        );
        let best: Vec<String> = policy
            .optimal_actions
            .iter()
            .map(ToString::to_string)
            .collect();
        print_kv("optimal actions", &best.join(", "));
    }

    print_subsection("Per action");
    for (action, score) in scores {
        print_kv(&action.to_string(), &score.to_string());
    }

    if args.tree {
        let tree = IterativeMinimax::score_tree(&queue)?;
        print_subsection("State tree");
        print_kv("nodes", &format_number(tree.len()));
        print_kv("leaf paths", &format_number(tree.paths().len()));
        print_kv(
            "decision points",
            &format_number(tree.split_index().len()),
        );
    }

    Ok(())
}
