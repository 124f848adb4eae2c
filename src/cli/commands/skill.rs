//! Skill command - evaluate the default skill decision tree

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::CharacterSpec,
        output::{print_kv, print_section, print_subsection},
    },
    skill_tree::SkillDecisionTree,
};

#[derive(Parser, Debug)]
#[command(about = "Show which skill the default decision tree picks")]
pub struct SkillArgs {
    /// Caster, as class:name[:hp[:sp]]
    #[arg(long, default_value = "sorcerer:s")]
    pub caster: CharacterSpec,

    /// Target, as class:name[:hp[:sp]]
    #[arg(long, default_value = "mage:m")]
    pub target: CharacterSpec,

    /// Print every root-to-leaf path with its condition results
    #[arg(long)]
    pub paths: bool,
}

pub fn execute(args: SkillArgs) -> Result<()> {
    let caster = args.caster.build();
    let target = args.target.build();
    let tree = SkillDecisionTree::default_tree();

    print_section("Skill decision");
    print_kv("caster", &caster.to_string());
    print_kv("target", &target.to_string());

    if args.paths {
        print_subsection("Paths");
        for (index, path) in tree.paths(&caster, &target).iter().enumerate() {
            let steps: Vec<String> = path
                .iter()
                .map(|step| {
                    let mark = if step.satisfied { "+" } else { "-" };
                    format!("{}({}){mark}", step.skill, step.priority)
                })
                .collect();
            println!("  {index}: {}", steps.join(" -> "));
        }
    }

    println!();
    print_kv("picked", &tree.pick_skill(&caster, &target).to_string());
    Ok(())
}
