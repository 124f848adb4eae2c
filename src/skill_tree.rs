//! Priority-weighted conditional tree that picks a skill for a sorcerer.
//!
//! Every node guards a skill with a condition over `(caster, target)` and
//! carries a unique priority (lower wins). Evaluation walks every
//! root-to-leaf path; the first node on a path whose condition fails is
//! that path's candidate, and the candidate with the lowest priority is the
//! chosen skill.

use std::fmt;

use crate::battle::{Character, Skill};

/// Guard evaluated against `(caster, target)`.
pub type Condition = Box<dyn Fn(&Character, &Character) -> bool + Send + Sync>;

/// One node of a skill decision tree.
pub struct SkillDecisionTree {
    value: Skill,
    condition: Condition,
    priority: u32,
    children: Vec<SkillDecisionTree>,
}

impl fmt::Debug for SkillDecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkillDecisionTree")
            .field("value", &self.value)
            .field("priority", &self.priority)
            .field("children", &self.children)
            .finish()
    }
}

/// A node visited along a root-to-leaf path, with its evaluated condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub priority: u32,
    pub skill: Skill,
    pub satisfied: bool,
}

impl SkillDecisionTree {
    pub fn new<F>(value: Skill, condition: F, priority: u32) -> Self
    where
        F: Fn(&Character, &Character) -> bool + Send + Sync + 'static,
    {
        Self {
            value,
            condition: Box::new(condition),
            priority,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SkillDecisionTree>) -> Self {
        self.children = children;
        self
    }

    pub fn value(&self) -> Skill {
        self.value
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn children(&self) -> &[SkillDecisionTree] {
        &self.children
    }

    pub fn evaluate(&self, caster: &Character, target: &Character) -> bool {
        (self.condition)(caster, target)
    }

    /// Every root-to-leaf path, left to right, with each condition evaluated.
    pub fn paths(&self, caster: &Character, target: &Character) -> Vec<Vec<PathStep>> {
        let step = PathStep {
            priority: self.priority,
            skill: self.value,
            satisfied: self.evaluate(caster, target),
        };
        if self.children.is_empty() {
            return vec![vec![step]];
        }

        let mut all_paths = Vec::new();
        for child in &self.children {
            for mut path in child.paths(caster, target) {
                path.insert(0, step);
                all_paths.push(path);
            }
        }
        all_paths
    }

    /// Pick the skill `caster` should use against `target`.
    ///
    /// A failing root short-circuits to the root's own skill. When no
    /// condition fails anywhere, the root's skill is also the fallback.
    pub fn pick_skill(&self, caster: &Character, target: &Character) -> Skill {
        let paths = self.paths(caster, target);
        let mut candidates: Vec<PathStep> = Vec::new();

        for path in &paths {
            if let Some(root) = path.first()
                && !root.satisfied
            {
                candidates.push(*root);
                break;
            }
            if let Some(step) = path.iter().find(|step| !step.satisfied)
                && !candidates.iter().any(|c| c.priority == step.priority)
            {
                candidates.push(*step);
            }
        }

        candidates
            .iter()
            .min_by_key(|step| step.priority)
            .map(|step| step.skill)
            .unwrap_or(self.value)
    }

    /// The reference tree used by sorcerers unless another one is installed.
    ///
    /// ```text
    /// MageAttack (5) caster HP > 50
    /// ├── MageAttack (3) caster SP > 20
    /// │   └── RogueSpecial (4) target HP < 30
    /// │       └── RogueAttack (6) never
    /// ├── MageSpecial (2) target SP > 40
    /// │   └── RogueAttack (8) never
    /// └── RogueAttack (1) caster HP > 90
    ///     └── RogueSpecial (7) never
    /// ```
    pub fn default_tree() -> Self {
        let t3 = Self::new(Skill::RogueAttack, never, 6);
        let t2 = Self::new(Skill::RogueSpecial, target_hp_less_than_30, 4).with_children(vec![t3]);
        let t1 = Self::new(Skill::MageAttack, caster_sp_more_than_20, 3).with_children(vec![t2]);

        let t5 = Self::new(Skill::RogueAttack, never, 8);
        let t4 = Self::new(Skill::MageSpecial, target_sp_more_than_40, 2).with_children(vec![t5]);

        let t7 = Self::new(Skill::RogueSpecial, never, 7);
        let t6 = Self::new(Skill::RogueAttack, caster_hp_more_than_90, 1).with_children(vec![t7]);

        Self::new(Skill::MageAttack, caster_hp_more_than_50, 5).with_children(vec![t1, t4, t6])
    }
}

pub fn caster_hp_more_than_50(caster: &Character, _target: &Character) -> bool {
    caster.hp() > 50
}

pub fn caster_hp_more_than_90(caster: &Character, _target: &Character) -> bool {
    caster.hp() > 90
}

pub fn caster_sp_more_than_20(caster: &Character, _target: &Character) -> bool {
    caster.sp() > 20
}

pub fn target_hp_less_than_30(_caster: &Character, target: &Character) -> bool {
    target.hp() < 30
}

pub fn target_sp_more_than_40(_caster: &Character, target: &Character) -> bool {
    target.sp() > 40
}

pub fn never(_caster: &Character, _target: &Character) -> bool {
    false
}
