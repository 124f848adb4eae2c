//! Exact state value by exhaustive recursive search.
//!
//! Every value is signed from the point of view of the character about to
//! move in the state it was computed for. Children whose next mover is a
//! different character have their value negated before comparison.

use crate::{
    Error, Result,
    battle::{Action, BattleQueue},
    identifiers::CharacterName,
};

/// The queue after the front character performs `action`.
///
/// The acting turn is rotated off the front unless the action ended the
/// battle.
pub fn successor(state: &BattleQueue, action: Action) -> Result<BattleQueue> {
    let mut next = state.clone();
    next.perform(action)?;
    if !next.is_over() {
        next.remove();
    }
    Ok(next)
}

/// Payoff of a finished battle for whoever is at the front of the queue.
///
/// The winner's remaining health, negated when the front character is not
/// the winner; `0` for a tie. Returns `0` for a battle that is still running.
pub fn terminal_score(state: &BattleQueue) -> i32 {
    match state.winner() {
        None => 0,
        Some(winner) => {
            if state.peek().is_some_and(|front| front.same_as(winner)) {
                winner.hp()
            } else {
                -winner.hp()
            }
        }
    }
}

/// Re-express `score`, computed for `child`'s next mover, from `mover`'s side.
pub fn reanchor(score: i32, mover: &CharacterName, child: &BattleQueue) -> i32 {
    if child.peek().is_some_and(|next| next.name() == mover) {
        score
    } else {
        -score
    }
}

/// The best payoff the character about to move in `state` can guarantee.
///
/// # Errors
///
/// [`Error::NoActionsAvailable`] when the battle is running but the front
/// character cannot afford any action. Selectors check for this before
/// searching, so hitting it means the caller skipped that check.
pub fn state_score(state: &BattleQueue) -> Result<i32> {
    if state.is_over() {
        return Ok(terminal_score(state));
    }

    let mover = state.peek().ok_or(Error::EmptyQueue)?;
    let actions = mover.available_actions();
    if actions.is_empty() {
        return Err(Error::NoActionsAvailable {
            character: mover.name().to_string(),
        });
    }

    let mut best = i32::MIN;
    for action in actions {
        let next = successor(state, action)?;
        let score = reanchor(state_score(&next)?, mover.name(), &next);
        best = best.max(score);
    }
    Ok(best)
}

/// Value of a state together with every action that achieves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimalPolicy {
    pub value: i32,
    pub optimal_actions: Vec<Action>,
}

/// Score every legal action of the front character, re-anchored onto it.
pub fn action_scores(state: &BattleQueue) -> Result<Vec<(Action, i32)>> {
    let Some(mover) = state.peek() else {
        return Ok(Vec::new());
    };
    if state.is_over() {
        return Ok(Vec::new());
    }

    mover
        .available_actions()
        .into_iter()
        .map(|action| {
            let next = successor(state, action)?;
            Ok((action, reanchor(state_score(&next)?, mover.name(), &next)))
        })
        .collect()
}

/// Exact value of `state` and all actions that reach it; `None` when the
/// front character has nothing to choose from.
pub fn optimal_policy(state: &BattleQueue) -> Result<Option<OptimalPolicy>> {
    let scores = action_scores(state)?;
    let Some(value) = scores.iter().map(|(_, score)| *score).max() else {
        return Ok(None);
    };
    let optimal_actions = scores
        .into_iter()
        .filter(|(_, score)| *score == value)
        .map(|(action, _)| action)
        .collect();
    Ok(Some(OptimalPolicy {
        value,
        optimal_actions,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::Character;

    fn queue(first: Character, second: Character) -> BattleQueue {
        BattleQueue::with_turns(first, second).unwrap()
    }

    #[test]
    fn one_hit_finishes_a_weak_mage() {
        let mut bq = queue(Character::rogue("r"), Character::mage("m"));
        bq.character_mut("m").unwrap().set_hp(3);
        assert_eq!(state_score(&bq).unwrap(), 100);

        bq.character_mut("r").unwrap().set_hp(40);
        assert_eq!(state_score(&bq).unwrap(), 40);
    }

    #[test]
    fn losing_side_minimises_the_margin() {
        let mut bq = queue(Character::rogue("r"), Character::mage("m"));
        bq.character_mut("m").unwrap().set_hp(3);
        bq.character_mut("r").unwrap().set_hp(40);
        bq.remove();
        bq.add("r").unwrap();
        assert_eq!(state_score(&bq).unwrap(), -10);
    }

    #[test]
    fn terminal_payoff_depends_on_who_is_in_front() {
        let mut bq = queue(Character::rogue("r"), Character::mage("m"));
        bq.character_mut("m").unwrap().set_hp(0);
        bq.character_mut("r").unwrap().set_hp(35);
        assert_eq!(terminal_score(&bq), 35);
        assert_eq!(state_score(&bq).unwrap(), 35);

        bq.remove();
        assert_eq!(bq.peek().unwrap().name(), "m");
        assert_eq!(terminal_score(&bq), -35);
    }

    #[test]
    fn exhausted_mover_is_a_logic_error() {
        let mut bq = queue(Character::rogue("r"), Character::mage("m"));
        bq.character_mut("r").unwrap().set_sp(2);
        assert!(matches!(
            state_score(&bq),
            Err(Error::NoActionsAvailable { .. })
        ));
        assert!(optimal_policy(&bq).unwrap().is_none());
    }

    #[test]
    fn successor_rotates_only_running_battles() {
        let mut bq = queue(Character::rogue("r"), Character::mage("m"));
        let next = successor(&bq, Action::Attack).unwrap();
        assert_eq!(next.peek().unwrap().name(), "m");
        assert_eq!(next.len(), 2);

        bq.character_mut("m").unwrap().set_hp(3);
        let finished = successor(&bq, Action::Attack).unwrap();
        assert!(finished.is_over());
        assert_eq!(finished.peek().unwrap().name(), "r");
        assert_eq!(bq.character("m").unwrap().hp(), 3);
    }
}
