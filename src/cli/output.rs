//! Output formatting for CLI

use crate::{
    Result,
    battle::{BattleOutcome, BattleQueue, Turn},
    ports::Observer,
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print both combatants and the pending turns
pub fn print_queue(queue: &BattleQueue) {
    for character in queue.characters() {
        print_kv(
            character.name().as_str(),
            &format!(
                "{} hp {} sp {} def {}",
                character.class(),
                character.hp(),
                character.sp(),
                character.defense()
            ),
        );
    }
    let order: Vec<&str> = queue.turn_order().map(|n| n.as_str()).collect();
    print_kv("turn order", &format!("[{}]", order.join(", ")));
}

pub fn format_outcome(outcome: &BattleOutcome) -> String {
    match outcome {
        BattleOutcome::Win(name) => format!("{name} wins"),
        BattleOutcome::Tie => "tie".to_string(),
    }
}

/// Observer printing one line per turn
#[derive(Debug, Default)]
pub struct TurnPrinter;

impl Observer for TurnPrinter {
    fn on_battle_start(&mut self, queue: &BattleQueue) -> Result<()> {
        print_subsection("Starting position");
        print_queue(queue);
        print_subsection("Turns");
        Ok(())
    }

    fn on_turn(&mut self, turn: &Turn) -> Result<()> {
        println!(
            "  {:>3}. {:<8} {}   self {:>3}/{:<3}  enemy {:>3}/{:<3}",
            turn.number,
            turn.actor,
            turn.action,
            turn.actor_hp,
            turn.actor_sp,
            turn.enemy_hp,
            turn.enemy_sp
        );
        Ok(())
    }

    fn on_battle_end(&mut self, outcome: &BattleOutcome) -> Result<()> {
        print_subsection("Outcome");
        println!("  {}", format_outcome(outcome));
        Ok(())
    }
}
