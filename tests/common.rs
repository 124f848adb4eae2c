//! Shared fixtures for the battle-ai integration tests.

#![allow(dead_code)]

use battle_ai::{Action, BattleQueue, Character, CharacterClass, minimax};
use rand::{Rng, rngs::StdRng};

pub const CLASSES: [CharacterClass; 4] = [
    CharacterClass::Rogue,
    CharacterClass::Mage,
    CharacterClass::Vampire,
    CharacterClass::Sorcerer,
];

/// Two characters with one queued turn each, `first` moving first.
pub fn queue(first: Character, second: Character) -> BattleQueue {
    BattleQueue::with_turns(first, second).expect("distinct character names")
}

/// The worked example: a mage (14 HP / 35 SP) to move against a rogue
/// (40 HP / 6 SP). Worth exactly 7 to the mage.
pub fn sample_queue() -> BattleQueue {
    queue(
        Character::mage("m").with_stats(14, 35),
        Character::rogue("r").with_stats(40, 6),
    )
}

/// Random small battle: HP 1..=40, SP 0..=40, any classes, either order.
pub fn random_queue(rng: &mut StdRng) -> BattleQueue {
    let mut pick = |name: &str| {
        let class = CLASSES[rng.random_range(0..CLASSES.len())];
        Character::new(name, class).with_stats(rng.random_range(1..=40), rng.random_range(0..=40))
    };
    let a = pick("a");
    let b = pick("b");
    if rng.random_bool(0.5) {
        queue(a, b)
    } else {
        queue(b, a)
    }
}

/// Value `action` resolves to when played forward, seen from the mover.
pub fn resolved_value(state: &BattleQueue, action: Action) -> i32 {
    let mover = state.peek().expect("a character to move").name().clone();
    let next = minimax::successor(state, action).expect("legal action");
    let score = minimax::state_score(&next).expect("searchable successor");
    minimax::reanchor(score, &mover, &next)
}
