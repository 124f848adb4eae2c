mod common;

use battle_ai::{
    Battle, BattleOutcome, BattleQueue, Character, PlaystyleKind,
    battle::Turn,
    cli::config::{BattleConfig, CharacterSpec},
    ports::Observer,
};
use common::sample_queue;
use tempfile::tempdir;

#[derive(Default)]
struct TurnCounter {
    turns: usize,
}

impl Observer for TurnCounter {
    fn on_turn(&mut self, _turn: &Turn) -> battle_ai::Result<()> {
        self.turns += 1;
        Ok(())
    }
}

#[test]
fn optimal_play_realises_the_predicted_value() {
    let mut battle = Battle::new(sample_queue());
    let mut styles = [
        PlaystyleKind::Iterative.into_boxed_playstyle(None),
        PlaystyleKind::Recursive.into_boxed_playstyle(None),
    ];
    let mut counter = TurnCounter::default();

    let outcome = battle.run(&mut styles, 100, &mut counter).unwrap();
    assert_eq!(outcome, BattleOutcome::Win("m".into()));
    assert_eq!(battle.queue().character("m").unwrap().hp(), 7);
    assert_eq!(counter.turns, battle.turns().len());
}

#[test]
fn random_battles_always_finish() {
    for seed in 0..20 {
        let queue = BattleQueue::with_turns(Character::vampire("v"), Character::sorcerer("s"))
            .unwrap();
        let mut battle = Battle::new(queue);
        let mut styles = [
            PlaystyleKind::Random.into_boxed_playstyle(Some(seed)),
            PlaystyleKind::Random.into_boxed_playstyle(Some(seed + 100)),
        ];
        let outcome = battle
            .run(&mut styles, 500, &mut TurnCounter::default())
            .unwrap();
        assert!(battle.is_over(), "seed {seed}");
        assert_eq!(battle.outcome(), Some(&outcome));
    }
}

#[test]
fn config_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("battle.json");

    let config = BattleConfig {
        characters: [
            "vampire:v:30:40".parse::<CharacterSpec>().unwrap(),
            "sorcerer:s:30:40".parse::<CharacterSpec>().unwrap(),
        ],
        playstyles: [PlaystyleKind::Iterative, PlaystyleKind::Random],
        first: None,
        seed: Some(17),
        max_turns: 80,
    };
    config.save(&path).unwrap();

    let loaded = BattleConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    let queue = loaded.build_queue().unwrap();
    assert_eq!(queue.peek().unwrap().name(), "v");
    assert_eq!(queue.character("s").unwrap().sp(), 40);
}

#[test]
fn config_file_can_pick_the_first_mover() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("battle.json");
    std::fs::write(
        &path,
        r#"{
            "characters": [
                {"class": "rogue", "name": "r", "hp": 40, "sp": 6},
                {"class": "mage", "name": "m", "hp": 14, "sp": 35}
            ],
            "playstyles": ["recursive", "iterative"],
            "first": "m",
            "max_turns": 50
        }"#,
    )
    .unwrap();

    let config = BattleConfig::load(&path).unwrap();
    let queue = config.build_queue().unwrap();
    assert_eq!(queue.peek().unwrap().name(), "m");
    assert_eq!(battle_ai::state_score(&queue).unwrap(), 7);

    let styles = config.build_playstyles();
    assert_eq!(styles[0].name(), "Iterative minimax");
}

#[test]
fn malformed_config_files_are_rejected() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        BattleConfig::load(&missing),
        Err(battle_ai::Error::Io { .. })
    ));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(
        BattleConfig::load(&broken),
        Err(battle_ai::Error::Serialization(_))
    ));

    let duplicate = dir.path().join("duplicate.json");
    std::fs::write(
        &duplicate,
        r#"{"characters": [{"class": "rogue", "name": "x"}, {"class": "mage", "name": "x"}]}"#,
    )
    .unwrap();
    assert!(BattleConfig::load(&duplicate).is_err());
}
