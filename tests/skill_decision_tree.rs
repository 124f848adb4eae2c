mod common;

use std::sync::Arc;

use battle_ai::{
    Action, BattleQueue, Character, Error, Skill, SkillDecisionTree,
    skill_tree::{caster_hp_more_than_50, never},
};
use common::queue;

fn pick(caster: (i32, i32), target: (i32, i32)) -> Skill {
    let caster = Character::sorcerer("s").with_stats(caster.0, caster.1);
    let target = Character::mage("m").with_stats(target.0, target.1);
    SkillDecisionTree::default_tree().pick_skill(&caster, &target)
}

#[test]
fn reference_tree_priorities() {
    let tree = SkillDecisionTree::default_tree();
    let mut priorities = Vec::new();
    let mut stack = vec![&tree];
    while let Some(node) = stack.pop() {
        priorities.push(node.priority());
        stack.extend(node.children());
    }
    priorities.sort_unstable();
    assert_eq!(priorities, (1..=8).collect::<Vec<_>>());
}

#[test]
fn lowest_priority_failing_node_wins() {
    assert_eq!(pick((100, 40), (50, 30)), Skill::MageSpecial);
}

#[test]
fn full_stats_choose_rogue_special() {
    assert_eq!(pick((100, 100), (100, 100)), Skill::RogueSpecial);
}

#[test]
fn wounded_caster_stops_at_the_root() {
    assert_eq!(pick((10, 100), (100, 100)), Skill::MageAttack);
}

#[test]
fn conditions_can_capture_state() {
    let threshold = 75;
    let tree = SkillDecisionTree::new(
        Skill::RogueAttack,
        move |caster: &Character, _: &Character| caster.sp() > threshold,
        2,
    )
    .with_children(vec![SkillDecisionTree::new(Skill::VampireSpecial, never, 1)]);

    let target = Character::rogue("r");
    let rich = Character::sorcerer("s").with_stats(100, 90);
    let poor = Character::sorcerer("s").with_stats(100, 50);
    assert_eq!(tree.pick_skill(&rich, &target), Skill::VampireSpecial);
    assert_eq!(tree.pick_skill(&poor, &target), Skill::RogueAttack);
}

#[test]
fn sorcerer_attack_borrows_the_picked_skill() {
    // Caster HP 40 fails the root: the tree picks MageAttack.
    let mut state = queue(
        Character::sorcerer("s").with_stats(40, 50),
        Character::rogue("r").with_stats(60, 50),
    );
    state.perform(Action::Attack).unwrap();

    let sorcerer = state.character("s").unwrap();
    assert_eq!(sorcerer.sp(), 35);
    assert_eq!(state.character("r").unwrap().hp(), 50);
    let order: Vec<_> = state.turn_order().map(|n| n.to_string()).collect();
    assert_eq!(order, ["s", "r", "s"]);
}

#[test]
fn tree_may_not_pick_the_sorcerer_attack() {
    let looping = Arc::new(
        SkillDecisionTree::new(Skill::SorcererAttack, caster_hp_more_than_50, 1)
            .with_children(vec![SkillDecisionTree::new(Skill::MageAttack, never, 2)]),
    );
    let sorcerer = Character::sorcerer("s")
        .with_stats(30, 50)
        .with_skill_tree(looping);
    let mut state: BattleQueue = queue(sorcerer, Character::rogue("r"));

    assert!(matches!(
        state.perform(Action::Attack),
        Err(Error::RecursiveSkill)
    ));
}
