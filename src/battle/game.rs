//! Headless match runner with a turn-by-turn history

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Action, BattleQueue, Character};
use crate::{
    Error, Result,
    identifiers::CharacterName,
    ports::{Observer, Playstyle},
};

/// One resolved turn, with both characters' stats right after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub number: usize,
    pub actor: CharacterName,
    pub action: Action,
    pub actor_hp: i32,
    pub actor_sp: i32,
    pub enemy_hp: i32,
    pub enemy_sp: i32,
}

/// Outcome of a finished battle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleOutcome {
    Win(CharacterName),
    Tie,
}

impl BattleOutcome {
    fn of(queue: &BattleQueue) -> Self {
        match queue.winner() {
            Some(winner) => BattleOutcome::Win(winner.name().clone()),
            None => BattleOutcome::Tie,
        }
    }
}

/// A battle in progress
#[derive(Debug, Clone)]
pub struct Battle {
    initial: BattleQueue,
    queue: BattleQueue,
    turns: Vec<Turn>,
    outcome: Option<BattleOutcome>,
}

impl Battle {
    pub fn new(queue: BattleQueue) -> Self {
        let outcome = queue.is_over().then(|| BattleOutcome::of(&queue));
        Battle {
            initial: queue.clone(),
            queue,
            turns: Vec::new(),
            outcome,
        }
    }

    pub fn initial(&self) -> &BattleQueue {
        &self.initial
    }

    pub fn queue(&self) -> &BattleQueue {
        &self.queue
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn outcome(&self) -> Option<&BattleOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Apply `action` for the character at the front of the queue.
    ///
    /// A real action is performed and the turn rotates unless the battle
    /// ended; [`Action::NoMove`] just gives the turn up.
    ///
    /// # Errors
    ///
    /// [`Error::BattleOver`] once an outcome is known, and whatever
    /// [`BattleQueue::perform`] reports for an illegal action.
    pub fn play_turn(&mut self, action: Action) -> Result<&Turn> {
        if self.outcome.is_some() {
            return Err(Error::BattleOver);
        }
        let actor = self
            .queue
            .peek()
            .map(|c| c.name().clone())
            .ok_or(Error::EmptyQueue)?;

        if action.is_move() {
            self.queue.perform(action)?;
            if !self.queue.is_over() {
                self.queue.remove();
            }
        } else {
            self.queue.remove();
        }

        let me = self.queue.character(actor.as_str());
        let enemy = self.queue.enemy_of(actor.as_str());
        let turn = Turn {
            number: self.turns.len() + 1,
            action,
            actor_hp: me.map_or(0, Character::hp),
            actor_sp: me.map_or(0, Character::sp),
            enemy_hp: enemy.map_or(0, Character::hp),
            enemy_sp: enemy.map_or(0, Character::sp),
            actor,
        };
        debug!(
            turn = turn.number,
            actor = %turn.actor,
            action = %turn.action,
            enemy_hp = turn.enemy_hp,
            "turn resolved"
        );
        self.turns.push(turn);

        if self.queue.is_over() {
            self.outcome = Some(BattleOutcome::of(&self.queue));
        }
        let index = self.turns.len() - 1;
        Ok(&self.turns[index])
    }

    /// Drive the battle with one playstyle per roster slot (same order as
    /// [`BattleQueue::characters`]) and no human input.
    pub fn run(
        &mut self,
        playstyles: &mut [Box<dyn Playstyle>; 2],
        max_turns: usize,
        observer: &mut dyn Observer,
    ) -> Result<BattleOutcome> {
        self.run_with_input(playstyles, max_turns, observer, |_| Ok(None))
    }

    /// Like [`Battle::run`], asking `read_input` for a key whenever a manual
    /// playstyle is to move.
    ///
    /// # Errors
    ///
    /// [`Error::TurnLimitExceeded`] if the battle is still running after
    /// `max_turns` turns; selector and input errors are passed through.
    pub fn run_with_input<F>(
        &mut self,
        playstyles: &mut [Box<dyn Playstyle>; 2],
        max_turns: usize,
        observer: &mut dyn Observer,
        mut read_input: F,
    ) -> Result<BattleOutcome>
    where
        F: FnMut(&BattleQueue) -> Result<Option<String>>,
    {
        let [first, second] = self.queue.characters();
        info!(
            first = %first,
            second = %second,
            styles = %format!("{} vs {}", playstyles[0].name(), playstyles[1].name()),
            "battle started"
        );
        observer.on_battle_start(&self.queue)?;

        while self.outcome.is_none() {
            if self.turns.len() >= max_turns {
                return Err(Error::TurnLimitExceeded { limit: max_turns });
            }
            let actor = self.queue.peek().ok_or(Error::EmptyQueue)?;
            let slot = self
                .queue
                .characters()
                .iter()
                .position(|c| c.same_as(actor))
                .ok_or_else(|| Error::UnknownCharacter {
                    name: actor.name().to_string(),
                })?;

            let style = &mut playstyles[slot];
            let input = if style.is_manual() {
                read_input(&self.queue)?
            } else {
                None
            };
            let action = style.select_action(&self.queue, input.as_deref())?;
            let turn = self.play_turn(action)?.clone();
            observer.on_turn(&turn)?;
        }

        let outcome = self.outcome.clone().unwrap_or(BattleOutcome::Tie);
        info!(turns = self.turns.len(), outcome = ?outcome, "battle finished");
        observer.on_battle_end(&outcome)?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{minimax::RecursiveMinimax, playstyle::PlaystyleKind};

    struct Recorder {
        started: bool,
        turns: Vec<Turn>,
        outcome: Option<BattleOutcome>,
    }

    impl Observer for Recorder {
        fn on_battle_start(&mut self, _queue: &BattleQueue) -> Result<()> {
            self.started = true;
            Ok(())
        }

        fn on_turn(&mut self, turn: &Turn) -> Result<()> {
            self.turns.push(turn.clone());
            Ok(())
        }

        fn on_battle_end(&mut self, outcome: &BattleOutcome) -> Result<()> {
            self.outcome = Some(outcome.clone());
            Ok(())
        }
    }

    fn sample_queue() -> BattleQueue {
        BattleQueue::with_turns(
            Character::mage("m").with_stats(14, 35),
            Character::rogue("r").with_stats(40, 6),
        )
        .unwrap()
    }

    #[test]
    fn play_turn_records_stats_and_rotates() {
        let mut battle = Battle::new(sample_queue());
        let turn = battle.play_turn(Action::Attack).unwrap().clone();
        assert_eq!(turn.number, 1);
        assert_eq!(turn.actor, "m");
        assert_eq!((turn.actor_hp, turn.actor_sp), (14, 30));
        assert_eq!((turn.enemy_hp, turn.enemy_sp), (30, 6));
        assert_eq!(battle.queue().peek().unwrap().name(), "r");
        assert!(!battle.is_over());
    }

    #[test]
    fn no_move_gives_up_the_turn() {
        let mut battle = Battle::new(sample_queue());
        battle.play_turn(Action::NoMove).unwrap();
        assert_eq!(battle.queue().peek().unwrap().name(), "r");
        assert_eq!(battle.queue().character("r").unwrap().hp(), 40);

        battle.play_turn(Action::NoMove).unwrap();
        assert_eq!(battle.outcome(), Some(&BattleOutcome::Tie));
        assert!(matches!(
            battle.play_turn(Action::Attack),
            Err(Error::BattleOver)
        ));
    }

    #[test]
    fn illegal_action_leaves_the_battle_untouched() {
        let mut battle = Battle::new(sample_queue());
        battle.play_turn(Action::Attack).unwrap();
        assert!(battle.play_turn(Action::Special).is_err());
        assert_eq!(battle.turns().len(), 1);
        assert_eq!(battle.queue().peek().unwrap().name(), "r");
    }

    #[test]
    fn minimax_battle_reaches_the_predicted_outcome() {
        let queue = sample_queue();
        let mut battle = Battle::new(queue.clone());
        let mut styles = [
            PlaystyleKind::Recursive.into_boxed_playstyle(None),
            PlaystyleKind::Iterative.into_boxed_playstyle(None),
        ];
        let mut recorder = Recorder {
            started: false,
            turns: Vec::new(),
            outcome: None,
        };

        let outcome = battle.run(&mut styles, 50, &mut recorder).unwrap();
        assert!(recorder.started);
        assert_eq!(recorder.turns.len(), battle.turns().len());
        assert_eq!(recorder.outcome.as_ref(), Some(&outcome));

        // The sample is worth 7 to the mage moving first.
        assert_eq!(outcome, BattleOutcome::Win("m".into()));
        assert_eq!(battle.queue().character("m").unwrap().hp(), 7);
        assert_eq!(RecursiveMinimax::select(&queue).unwrap(), battle.turns()[0].action);
    }

    #[test]
    fn turn_cap_is_enforced() {
        let queue =
            BattleQueue::with_turns(Character::rogue("r"), Character::mage("m")).unwrap();
        let mut battle = Battle::new(queue);
        let mut styles = [
            PlaystyleKind::Random.into_boxed_playstyle(Some(3)),
            PlaystyleKind::Random.into_boxed_playstyle(Some(4)),
        ];
        let mut recorder = Recorder {
            started: false,
            turns: Vec::new(),
            outcome: None,
        };
        let err = battle.run(&mut styles, 1, &mut recorder).unwrap_err();
        assert!(matches!(err, Error::TurnLimitExceeded { limit: 1 }));
        assert!(recorder.outcome.is_none());
    }

    #[test]
    fn manual_side_reads_input() {
        let mut battle = Battle::new(sample_queue());
        let mut styles = [
            PlaystyleKind::Manual.into_boxed_playstyle(None),
            PlaystyleKind::Manual.into_boxed_playstyle(None),
        ];
        let mut keys = vec!["S", "A", "A", "A", "A", "A"].into_iter();
        let mut recorder = Recorder {
            started: false,
            turns: Vec::new(),
            outcome: None,
        };
        battle
            .run_with_input(&mut styles, 20, &mut recorder, |_| {
                Ok(keys.next().map(str::to_string))
            })
            .unwrap();
        assert_eq!(battle.turns()[0].action, Action::Special);
        assert!(battle.is_over());
    }
}
