//! Observer port - watching a battle without coupling the runner to output

use crate::{
    Result,
    battle::{BattleOutcome, BattleQueue, Turn},
};

/// Receives battle events from [`Battle::run`](crate::battle::Battle::run).
///
/// Events arrive in order: `on_battle_start`, one `on_turn` per resolved
/// turn, then `on_battle_end` once the queue is over.
///
/// # Examples
///
/// ```
/// use battle_ai::{battle::Turn, ports::Observer};
///
/// struct TurnCounter {
///     turns: usize,
/// }
///
/// impl Observer for TurnCounter {
///     fn on_turn(&mut self, _turn: &Turn) -> battle_ai::Result<()> {
///         self.turns += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    fn on_battle_start(&mut self, _queue: &BattleQueue) -> Result<()> {
        Ok(())
    }

    fn on_turn(&mut self, _turn: &Turn) -> Result<()> {
        Ok(())
    }

    fn on_battle_end(&mut self, _outcome: &BattleOutcome) -> Result<()> {
        Ok(())
    }
}
