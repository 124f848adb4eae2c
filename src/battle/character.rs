//! Combatants: class, health, skill points and the actions they can afford.

use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

use super::{Action, skills::Skill};
use crate::{identifiers::CharacterName, skill_tree::SkillDecisionTree};

pub const STARTING_HP: i32 = 100;
pub const STARTING_SP: i32 = 100;

/// Character archetypes and their fixed stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Rogue,
    Mage,
    Vampire,
    Sorcerer,
}

impl CharacterClass {
    pub fn defense(self) -> i32 {
        match self {
            CharacterClass::Rogue => 10,
            CharacterClass::Mage => 8,
            CharacterClass::Vampire => 12,
            CharacterClass::Sorcerer => 10,
        }
    }

    pub fn attack_skill(self) -> Skill {
        match self {
            CharacterClass::Rogue => Skill::RogueAttack,
            CharacterClass::Mage => Skill::MageAttack,
            CharacterClass::Vampire => Skill::VampireAttack,
            CharacterClass::Sorcerer => Skill::SorcererAttack,
        }
    }

    pub fn special_skill(self) -> Skill {
        match self {
            CharacterClass::Rogue => Skill::RogueSpecial,
            CharacterClass::Mage => Skill::MageSpecial,
            CharacterClass::Vampire => Skill::VampireSpecial,
            CharacterClass::Sorcerer => Skill::SorcererSpecial,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterClass::Rogue => "rogue",
            CharacterClass::Mage => "mage",
            CharacterClass::Vampire => "vampire",
            CharacterClass::Sorcerer => "sorcerer",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rogue" => Ok(CharacterClass::Rogue),
            "mage" => Ok(CharacterClass::Mage),
            "vampire" => Ok(CharacterClass::Vampire),
            "sorcerer" => Ok(CharacterClass::Sorcerer),
            other => Err(crate::Error::InvalidCharacterSpec {
                input: s.to_string(),
                reason: format!(
                    "unknown class '{other}' (expected rogue, mage, vampire or sorcerer)"
                ),
            }),
        }
    }
}

/// A single combatant.
///
/// Cloning produces an independent character with the same name; the skill
/// decision tree is shared read-only.
#[derive(Clone)]
pub struct Character {
    name: CharacterName,
    class: CharacterClass,
    hp: i32,
    sp: i32,
    skill_tree: Option<Arc<SkillDecisionTree>>,
}

impl fmt::Debug for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Character")
            .field("name", &self.name)
            .field("class", &self.class)
            .field("hp", &self.hp)
            .field("sp", &self.sp)
            .field("has_skill_tree", &self.skill_tree.is_some())
            .finish()
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}/{}",
            self.name, self.class, self.hp, self.sp
        )
    }
}

impl Character {
    /// Create a character at full health and SP.
    ///
    /// Sorcerers get the default skill decision tree; use
    /// [`Character::with_skill_tree`] to install another one.
    pub fn new(name: impl Into<CharacterName>, class: CharacterClass) -> Self {
        let skill_tree = match class {
            CharacterClass::Sorcerer => Some(Arc::new(SkillDecisionTree::default_tree())),
            _ => None,
        };
        Self {
            name: name.into(),
            class,
            hp: STARTING_HP,
            sp: STARTING_SP,
            skill_tree,
        }
    }

    pub fn rogue(name: impl Into<CharacterName>) -> Self {
        Self::new(name, CharacterClass::Rogue)
    }

    pub fn mage(name: impl Into<CharacterName>) -> Self {
        Self::new(name, CharacterClass::Mage)
    }

    pub fn vampire(name: impl Into<CharacterName>) -> Self {
        Self::new(name, CharacterClass::Vampire)
    }

    pub fn sorcerer(name: impl Into<CharacterName>) -> Self {
        Self::new(name, CharacterClass::Sorcerer)
    }

    pub fn with_skill_tree(mut self, tree: Arc<SkillDecisionTree>) -> Self {
        self.skill_tree = Some(tree);
        self
    }

    pub fn with_stats(mut self, hp: i32, sp: i32) -> Self {
        self.set_stats(hp, sp);
        self
    }

    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    pub fn class(&self) -> CharacterClass {
        self.class
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn sp(&self) -> i32 {
        self.sp
    }

    pub fn defense(&self) -> i32 {
        self.class.defense()
    }

    pub fn skill_tree(&self) -> Option<&SkillDecisionTree> {
        self.skill_tree.as_deref()
    }

    pub fn set_hp(&mut self, hp: i32) {
        self.hp = hp.max(0);
    }

    pub fn set_sp(&mut self, sp: i32) {
        self.sp = sp.max(0);
    }

    pub fn set_stats(&mut self, hp: i32, sp: i32) {
        self.set_hp(hp);
        self.set_sp(sp);
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Whether `other` is the same logical combatant (compared by name).
    pub fn same_as(&self, other: &Character) -> bool {
        self.name == other.name
    }

    pub fn skill_for(&self, action: Action) -> Option<Skill> {
        match action {
            Action::Attack => Some(self.class.attack_skill()),
            Action::Special => Some(self.class.special_skill()),
            Action::NoMove => None,
        }
    }

    /// Legal actions in fixed order: attack before special.
    pub fn available_actions(&self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(2);
        if self.sp >= self.class.attack_skill().sp_cost() {
            actions.push(Action::Attack);
        }
        if self.sp >= self.class.special_skill().sp_cost() {
            actions.push(Action::Special);
        }
        actions
    }

    pub fn can_act(&self) -> bool {
        self.sp >= self.class.attack_skill().sp_cost()
            || self.sp >= self.class.special_skill().sp_cost()
    }

    /// Apply raw damage reduced by defense; returns the health actually lost.
    pub fn apply_damage(&mut self, damage: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp - (damage - self.defense()).max(0)).max(0);
        before - self.hp
    }

    pub fn reduce_sp(&mut self, amount: i32) {
        self.sp = (self.sp - amount).max(0);
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp += amount.max(0);
    }
}
