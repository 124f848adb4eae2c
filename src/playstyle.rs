//! Playstyles: the closed set of ways a character can choose its action.
//!
//! - Manual: forwards a key typed by a human player
//! - Random: uniform choice among legal actions
//! - Recursive / Iterative: exact minimax (see [`crate::minimax`])

use std::{fmt, str::FromStr};

use clap::ValueEnum;
use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    battle::{Action, BattleQueue},
    minimax::{IterativeMinimax, RecursiveMinimax},
    ports::Playstyle,
};

/// Playstyle driven by human key presses.
#[derive(Debug, Clone)]
pub struct ManualPlaystyle {
    name: String,
}

impl ManualPlaystyle {
    pub fn new() -> Self {
        Self {
            name: "Manual".to_string(),
        }
    }
}

impl Default for ManualPlaystyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Playstyle for ManualPlaystyle {
    /// `A` or `S` pass through; anything else (including no input) is `NoMove`.
    fn select_action(&mut self, _queue: &BattleQueue, input: Option<&str>) -> Result<Action> {
        let action = input
            .and_then(|key| key.parse::<Action>().ok())
            .unwrap_or(Action::NoMove);
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_manual(&self) -> bool {
        true
    }
}

/// Uniformly random legal action.
pub struct RandomPlaystyle {
    name: String,
    rng: StdRng,
}

impl fmt::Debug for RandomPlaystyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomPlaystyle")
            .field("name", &self.name)
            .finish()
    }
}

impl RandomPlaystyle {
    pub fn new() -> Self {
        Self::with_rng(StdRng::seed_from_u64(random()))
    }

    /// Create a random playstyle with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            name: "Random".to_string(),
            rng,
        }
    }
}

impl Default for RandomPlaystyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Playstyle for RandomPlaystyle {
    fn select_action(&mut self, queue: &BattleQueue, _input: Option<&str>) -> Result<Action> {
        let actions = queue.available_actions();
        Ok(actions
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Action::NoMove))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Every available playstyle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PlaystyleKind {
    /// Human player typing `A` or `S`
    Manual,
    /// Uniformly random legal action
    Random,
    /// Exact minimax, recursive evaluation
    Recursive,
    /// Exact minimax over an explicit state tree
    Iterative,
}

impl PlaystyleKind {
    /// Instantiate the playstyle; `seed` only affects [`PlaystyleKind::Random`].
    pub fn into_boxed_playstyle(self, seed: Option<u64>) -> Box<dyn Playstyle> {
        match self {
            PlaystyleKind::Manual => Box::new(ManualPlaystyle::new()),
            PlaystyleKind::Random => Box::new(match seed {
                Some(seed) => RandomPlaystyle::with_seed(seed),
                None => RandomPlaystyle::new(),
            }),
            PlaystyleKind::Recursive => Box::new(RecursiveMinimax::new()),
            PlaystyleKind::Iterative => Box::new(IterativeMinimax::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlaystyleKind::Manual => "manual",
            PlaystyleKind::Random => "random",
            PlaystyleKind::Recursive => "recursive",
            PlaystyleKind::Iterative => "iterative",
        }
    }
}

impl fmt::Display for PlaystyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaystyleKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" | "human" => Ok(PlaystyleKind::Manual),
            "random" => Ok(PlaystyleKind::Random),
            "recursive" | "minimax" => Ok(PlaystyleKind::Recursive),
            "iterative" => Ok(PlaystyleKind::Iterative),
            _ => Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "unknown playstyle '{s}' (expected manual, random, recursive or iterative)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::Character;

    fn fresh_queue() -> BattleQueue {
        BattleQueue::with_turns(Character::rogue("r"), Character::mage("m")).unwrap()
    }

    #[test]
    fn manual_passes_through_valid_keys() {
        let queue = fresh_queue();
        let mut manual = ManualPlaystyle::new();
        assert!(manual.is_manual());
        assert_eq!(
            manual.select_action(&queue, Some("A")).unwrap(),
            Action::Attack
        );
        assert_eq!(
            manual.select_action(&queue, Some("s")).unwrap(),
            Action::Special
        );
        assert_eq!(
            manual.select_action(&queue, Some("q")).unwrap(),
            Action::NoMove
        );
        assert_eq!(manual.select_action(&queue, None).unwrap(), Action::NoMove);
    }

    #[test]
    fn random_only_picks_legal_actions() {
        let mut queue = fresh_queue();
        queue.character_mut("r").unwrap().set_sp(5);
        let mut random = RandomPlaystyle::with_seed(42);
        for _ in 0..20 {
            assert_eq!(
                random.select_action(&queue, None).unwrap(),
                Action::Attack
            );
        }

        queue.character_mut("r").unwrap().set_sp(0);
        assert_eq!(random.select_action(&queue, None).unwrap(), Action::NoMove);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let queue = fresh_queue();
        let mut a = RandomPlaystyle::with_seed(7);
        let mut b = RandomPlaystyle::with_seed(7);
        for _ in 0..10 {
            assert_eq!(
                a.select_action(&queue, None).unwrap(),
                b.select_action(&queue, None).unwrap()
            );
        }
    }

    #[test]
    fn kinds_parse_and_box() {
        assert_eq!(
            "Iterative".parse::<PlaystyleKind>().unwrap(),
            PlaystyleKind::Iterative
        );
        assert!("greedy".parse::<PlaystyleKind>().is_err());

        let boxed = PlaystyleKind::Manual.into_boxed_playstyle(None);
        assert!(boxed.is_manual());
        let boxed = PlaystyleKind::Recursive.into_boxed_playstyle(Some(1));
        assert_eq!(boxed.name(), "Recursive minimax");
    }
}
