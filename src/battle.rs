//! Combat rules consumed by the search: skills, characters, the turn queue
//! and a headless match runner.

pub mod character;
pub mod game;
pub mod queue;
pub mod skills;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use character::{Character, CharacterClass};
pub use game::{Battle, BattleOutcome, Turn};
pub use queue::BattleQueue;
pub use skills::Skill;

/// An action token chosen for the character at the front of the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Basic attack (`A`)
    Attack,
    /// Special attack (`S`)
    Special,
    /// Sentinel for "no legal action" (`X`)
    NoMove,
}

impl Action {
    pub fn token(self) -> char {
        match self {
            Action::Attack => 'A',
            Action::Special => 'S',
            Action::NoMove => 'X',
        }
    }

    pub fn is_move(self) -> bool {
        self != Action::NoMove
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Action {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Action::Attack),
            "S" => Ok(Action::Special),
            "X" => Ok(Action::NoMove),
            _ => Err(crate::Error::InvalidActionToken {
                token: s.to_string(),
            }),
        }
    }
}
