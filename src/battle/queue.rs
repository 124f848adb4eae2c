//! The battle queue: two registered combatants and the order of their turns.

use std::collections::VecDeque;

use super::{
    Action,
    character::Character,
    skills::{Skill, TurnGrant},
};
use crate::{Error, Result, identifiers::CharacterName};

/// Turn order for a two-combatant battle.
///
/// The queue owns both characters; turns are stored as roster slots so a
/// `clone()` is a fully independent snapshot that search code can mutate
/// freely.
#[derive(Debug, Clone)]
pub struct BattleQueue {
    roster: [Character; 2],
    turns: VecDeque<usize>,
}

impl BattleQueue {
    /// Register two opponents. Each is the other's enemy. No turns are queued.
    pub fn new(first: Character, second: Character) -> Result<Self> {
        if first.same_as(&second) {
            return Err(Error::DuplicateCharacter {
                name: first.name().to_string(),
            });
        }
        Ok(Self {
            roster: [first, second],
            turns: VecDeque::new(),
        })
    }

    /// Register two opponents and queue one turn each, `first` acting first.
    pub fn with_turns(first: Character, second: Character) -> Result<Self> {
        let mut queue = Self::new(first, second)?;
        queue.turns.extend([0, 1]);
        Ok(queue)
    }

    pub fn characters(&self) -> &[Character; 2] {
        &self.roster
    }

    fn slot_of(&self, name: &str) -> Option<usize> {
        self.roster.iter().position(|c| c.name().as_str() == name)
    }

    pub fn character(&self, name: &str) -> Option<&Character> {
        self.slot_of(name).map(|slot| &self.roster[slot])
    }

    pub fn character_mut(&mut self, name: &str) -> Result<&mut Character> {
        let slot = self.slot_of(name).ok_or_else(|| Error::UnknownCharacter {
            name: name.to_string(),
        })?;
        Ok(&mut self.roster[slot])
    }

    pub fn enemy_of(&self, name: &str) -> Option<&Character> {
        self.slot_of(name).map(|slot| &self.roster[1 - slot])
    }

    /// Append a turn for a registered character.
    pub fn add(&mut self, name: &str) -> Result<()> {
        let slot = self.slot_of(name).ok_or_else(|| Error::UnknownCharacter {
            name: name.to_string(),
        })?;
        self.turns.push_back(slot);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn turn_order(&self) -> impl Iterator<Item = &CharacterName> {
        self.turns.iter().map(|&slot| self.roster[slot].name())
    }

    /// The character whose turn is next.
    pub fn peek(&self) -> Option<&Character> {
        self.turns.front().map(|&slot| &self.roster[slot])
    }

    /// Legal actions of the character at the front; empty when nobody can act.
    pub fn available_actions(&self) -> Vec<Action> {
        self.peek()
            .map(Character::available_actions)
            .unwrap_or_default()
    }

    /// Pop the front turn, then drop any turns at the front whose character
    /// can no longer afford an action. Returns the name of the popped turn.
    pub fn remove(&mut self) -> Option<CharacterName> {
        let slot = self.turns.pop_front()?;
        while let Some(&next) = self.turns.front() {
            if self.roster[next].can_act() {
                break;
            }
            self.turns.pop_front();
        }
        Some(self.roster[slot].name().clone())
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Over when no turns remain or either character has no health left.
    pub fn is_over(&self) -> bool {
        self.turns.is_empty() || self.roster.iter().any(|c| !c.is_alive())
    }

    /// The surviving character of a finished battle; `None` while running or
    /// on a tie.
    pub fn winner(&self) -> Option<&Character> {
        if !self.is_over() {
            return None;
        }
        match (self.roster[0].is_alive(), self.roster[1].is_alive()) {
            (true, false) => Some(&self.roster[0]),
            (false, true) => Some(&self.roster[1]),
            _ => None,
        }
    }

    /// Apply `action` for the character at the front. The turn itself is
    /// not rotated; callers decide when to [`remove`](Self::remove) it.
    pub fn perform(&mut self, action: Action) -> Result<()> {
        let &caster = self.turns.front().ok_or(Error::EmptyQueue)?;
        let character = &self.roster[caster];
        let skill = character
            .skill_for(action)
            .filter(|_| character.available_actions().contains(&action))
            .ok_or_else(|| Error::IllegalAction {
                character: character.name().to_string(),
                action,
                sp: character.sp(),
            })?;
        self.use_skill(caster, skill)
    }

    fn use_skill(&mut self, caster: usize, skill: Skill) -> Result<()> {
        let target = 1 - caster;

        if skill == Skill::SorcererAttack {
            let origin_sp = self.roster[caster].sp();
            let picked = {
                let (me, enemy) = (&self.roster[caster], &self.roster[target]);
                let tree = me
                    .skill_tree()
                    .ok_or_else(|| Error::InvalidConfiguration {
                        message: format!("sorcerer '{}' has no skill decision tree", me.name()),
                    })?;
                tree.pick_skill(me, enemy)
            };
            if picked == Skill::SorcererAttack {
                return Err(Error::RecursiveSkill);
            }
            self.use_skill(caster, picked)?;
            self.roster[caster].set_sp(origin_sp - skill.sp_cost());
            return Ok(());
        }

        self.roster[caster].reduce_sp(skill.sp_cost());
        let dealt = self.roster[target].apply_damage(skill.damage());
        if skill.drains_life() {
            self.roster[caster].heal(dealt);
        }

        if skill.resets_queue() {
            self.turns.clear();
        }
        for grant in skill.turns_granted() {
            self.turns.push_back(match grant {
                TurnGrant::Caster => caster,
                TurnGrant::Target => target,
            });
        }
        Ok(())
    }
}
