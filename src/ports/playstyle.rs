//! Playstyle port - one capability shared by every way of choosing an action

use crate::{
    Result,
    battle::{Action, BattleQueue},
};

/// Decides the action for the character at the front of a battle queue.
///
/// Implementations never mutate the live queue: search-based playstyles
/// copy it and reason on private snapshots. Returning [`Action::NoMove`]
/// is the normal answer when the front character has no legal action.
///
/// # Examples
///
/// ```
/// use battle_ai::{
///     battle::{Action, BattleQueue, Character},
///     minimax::RecursiveMinimax,
///     ports::Playstyle,
/// };
///
/// let mut queue = BattleQueue::with_turns(Character::mage("m"), Character::rogue("r")).unwrap();
/// queue.character_mut("r").unwrap().set_stats(40, 6);
/// queue.character_mut("m").unwrap().set_stats(14, 35);
///
/// let mut style = RecursiveMinimax::new();
/// assert_eq!(style.select_action(&queue, None).unwrap(), Action::Attack);
/// ```
pub trait Playstyle: Send {
    /// Select an action for `queue`'s front character.
    ///
    /// `input` carries a key typed by a human player; every automated
    /// playstyle ignores it.
    ///
    /// # Errors
    ///
    /// Only for broken invariants inside a search; an exhausted character
    /// yields `Ok(Action::NoMove)`.
    fn select_action(&mut self, queue: &BattleQueue, input: Option<&str>) -> Result<Action>;

    /// Name used in logs and battle reports.
    fn name(&self) -> &str;

    /// Whether this playstyle waits for human input.
    fn is_manual(&self) -> bool {
        false
    }
}
