//! One-ply selector built directly on the recursive state value.

use tracing::{debug, warn};

use super::score::{reanchor, state_score, successor};
use crate::{
    Result,
    battle::{Action, BattleQueue},
    ports::Playstyle,
};

/// Minimax playstyle that recomputes every value by recursion.
///
/// It scores the current state once, then walks the legal actions in their
/// fixed order (attack before special) and returns the first one whose
/// successor, seen from the current mover, is worth exactly that score.
#[derive(Debug, Clone)]
pub struct RecursiveMinimax {
    name: String,
}

impl RecursiveMinimax {
    pub fn new() -> Self {
        Self::with_name("Recursive minimax")
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Pick the action for the front character of `queue`.
    pub fn select(queue: &BattleQueue) -> Result<Action> {
        let Some(mover) = queue.peek() else {
            return Ok(Action::NoMove);
        };
        let actions = mover.available_actions();
        if actions.is_empty() || queue.is_over() {
            return Ok(Action::NoMove);
        }

        let target = state_score(queue)?;
        for action in actions {
            let next = successor(queue, action)?;
            let score = reanchor(state_score(&next)?, mover.name(), &next);
            if score == target {
                debug!(mover = %mover.name(), %action, score, "recursive minimax chose action");
                return Ok(action);
            }
        }

        warn!(mover = %mover.name(), target, "no action reproduced the state score");
        Ok(Action::NoMove)
    }
}

impl Default for RecursiveMinimax {
    fn default() -> Self {
        Self::new()
    }
}

impl Playstyle for RecursiveMinimax {
    fn select_action(&mut self, queue: &BattleQueue, _input: Option<&str>) -> Result<Action> {
        Self::select(queue)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
