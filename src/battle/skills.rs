//! Skill catalogue: SP cost, base damage and the turns each skill grants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who receives a turn appended to the queue after a skill resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnGrant {
    Caster,
    Target,
}

/// Every skill a character class can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    RogueAttack,
    RogueSpecial,
    MageAttack,
    MageSpecial,
    VampireAttack,
    VampireSpecial,
    /// Delegates to the caster's skill decision tree.
    SorcererAttack,
    SorcererSpecial,
}

impl Skill {
    pub fn sp_cost(self) -> i32 {
        match self {
            Skill::RogueAttack => 3,
            Skill::RogueSpecial => 10,
            Skill::MageAttack => 5,
            Skill::MageSpecial => 30,
            Skill::VampireAttack => 15,
            Skill::VampireSpecial => 20,
            Skill::SorcererAttack => 15,
            Skill::SorcererSpecial => 20,
        }
    }

    /// Damage before the target's defense is subtracted.
    pub fn damage(self) -> i32 {
        match self {
            Skill::RogueAttack => 15,
            Skill::RogueSpecial => 20,
            Skill::MageAttack => 20,
            Skill::MageSpecial => 40,
            Skill::VampireAttack => 20,
            Skill::VampireSpecial => 30,
            Skill::SorcererAttack => 0,
            Skill::SorcererSpecial => 25,
        }
    }

    /// Vampire skills heal the caster by the damage actually dealt.
    pub fn drains_life(self) -> bool {
        matches!(self, Skill::VampireAttack | Skill::VampireSpecial)
    }

    /// Sorcerer special wipes the pending turns before granting its own.
    pub fn resets_queue(self) -> bool {
        self == Skill::SorcererSpecial
    }

    /// Turns appended to the back of the queue, in order.
    pub fn turns_granted(self) -> &'static [TurnGrant] {
        use TurnGrant::{Caster, Target};
        match self {
            Skill::RogueAttack | Skill::MageAttack | Skill::VampireAttack => &[Caster],
            Skill::RogueSpecial => &[Caster, Caster],
            Skill::MageSpecial => &[Target, Caster],
            Skill::VampireSpecial => &[Caster, Caster, Target],
            Skill::SorcererSpecial => &[Caster, Target, Caster],
            // the delegated skill grants the turns
            Skill::SorcererAttack => &[],
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Skill::RogueAttack => "RogueAttack",
            Skill::RogueSpecial => "RogueSpecial",
            Skill::MageAttack => "MageAttack",
            Skill::MageSpecial => "MageSpecial",
            Skill::VampireAttack => "VampireAttack",
            Skill::VampireSpecial => "VampireSpecial",
            Skill::SorcererAttack => "SorcererAttack",
            Skill::SorcererSpecial => "SorcererSpecial",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specials_cost_more_than_attacks() {
        let pairs = [
            (Skill::RogueAttack, Skill::RogueSpecial),
            (Skill::MageAttack, Skill::MageSpecial),
            (Skill::VampireAttack, Skill::VampireSpecial),
            (Skill::SorcererAttack, Skill::SorcererSpecial),
        ];
        for (attack, special) in pairs {
            assert!(attack.sp_cost() < special.sp_cost(), "{attack} vs {special}");
        }
    }

    #[test]
    fn mage_special_hands_the_target_a_turn_first() {
        assert_eq!(
            Skill::MageSpecial.turns_granted(),
            &[TurnGrant::Target, TurnGrant::Caster]
        );
        assert!(Skill::SorcererSpecial.resets_queue());
        assert!(!Skill::MageSpecial.resets_queue());
    }
}
