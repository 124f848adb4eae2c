//! Battle configuration shared by the CLI commands
//!
//! A configuration is read from a JSON file (`--config`) and then patched by
//! command-line flags. Character specs can also be written inline as
//! `class:name[:hp[:sp]]`, e.g. `mage:m:14:35`.

use std::{fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    battle::{BattleQueue, Character, CharacterClass},
    playstyle::PlaystyleKind,
    ports::Playstyle,
};

/// One combatant: class, name and optional starting stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSpec {
    pub class: CharacterClass,
    pub name: String,
    /// Starting health (class default when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<i32>,
    /// Starting skill points (class default when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sp: Option<i32>,
}

impl CharacterSpec {
    pub fn new(class: CharacterClass, name: impl Into<String>) -> Self {
        Self {
            class,
            name: name.into(),
            hp: None,
            sp: None,
        }
    }

    pub fn with_stats(mut self, hp: i32, sp: i32) -> Self {
        self.hp = Some(hp);
        self.sp = Some(sp);
        self
    }

    pub fn build(&self) -> Character {
        let mut character = Character::new(self.name.as_str(), self.class);
        if let Some(hp) = self.hp {
            character.set_hp(hp);
        }
        if let Some(sp) = self.sp {
            character.set_sp(sp);
        }
        character
    }
}

impl fmt::Display for CharacterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.class, self.name)?;
        match (self.hp, self.sp) {
            (Some(hp), Some(sp)) => write!(f, ":{hp}:{sp}"),
            (Some(hp), None) => write!(f, ":{hp}"),
            (None, _) => Ok(()),
        }
    }
}

impl FromStr for CharacterSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidCharacterSpec {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let parse_stat = |field: &str, label: &str| {
            field
                .trim()
                .parse::<i32>()
                .map_err(|_| invalid(&format!("{label} must be an integer, got '{field}'")))
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        let (class, name, rest) = match parts.as_slice() {
            [class, name, rest @ ..] if rest.len() <= 2 => (class, name, rest),
            _ => return Err(invalid("expected class:name[:hp[:sp]]")),
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid("name must not be empty"));
        }

        let mut spec = CharacterSpec::new(class.parse()?, name);
        if let Some(hp) = rest.first() {
            spec.hp = Some(parse_stat(hp, "hp")?);
        }
        if let Some(sp) = rest.get(1) {
            spec.sp = Some(parse_stat(sp, "sp")?);
        }
        Ok(spec)
    }
}

/// Everything needed to set up a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// The two combatants, in roster order
    pub characters: [CharacterSpec; 2],
    /// Playstyle of each combatant, matching `characters`
    pub playstyles: [PlaystyleKind; 2],
    /// Name of the character that moves first (first listed when absent)
    pub first: Option<String>,
    /// Seed for random playstyles
    pub seed: Option<u64>,
    /// Turn cap for `play`
    pub max_turns: usize,
}

impl Default for BattleConfig {
    /// The worked example: a wounded mage moving first against a rogue
    /// nearly out of skill points.
    fn default() -> Self {
        Self {
            characters: [
                CharacterSpec::new(CharacterClass::Rogue, "r").with_stats(40, 6),
                CharacterSpec::new(CharacterClass::Mage, "m").with_stats(14, 35),
            ],
            playstyles: [PlaystyleKind::Recursive, PlaystyleKind::Iterative],
            first: Some("m".to_string()),
            seed: None,
            max_turns: 200,
        }
    }
}

impl BattleConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: BattleConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| Error::Io {
            operation: format!("write config {}", path.display()),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        let [a, b] = &self.characters;
        if a.name == b.name {
            return Err(Error::DuplicateCharacter {
                name: a.name.clone(),
            });
        }
        if let Some(first) = &self.first
            && first != &a.name
            && first != &b.name
        {
            return Err(Error::InvalidConfiguration {
                message: format!("first mover '{first}' is not one of the two characters"),
            });
        }
        if self.max_turns == 0 {
            return Err(Error::InvalidConfiguration {
                message: "max_turns must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Roster slots in turn order: the first mover comes first.
    fn turn_order(&self) -> [usize; 2] {
        match &self.first {
            Some(first) if *first == self.characters[1].name => [1, 0],
            _ => [0, 1],
        }
    }

    /// Build a queue holding one turn per character, first mover in front.
    pub fn build_queue(&self) -> Result<BattleQueue> {
        self.validate()?;
        let [lead, other] = self.turn_order();
        BattleQueue::with_turns(
            self.characters[lead].build(),
            self.characters[other].build(),
        )
    }

    /// Playstyles lined up with [`BattleQueue::characters`] of
    /// [`build_queue`](Self::build_queue).
    pub fn build_playstyles(&self) -> [Box<dyn Playstyle>; 2] {
        let seed_for = |slot: usize| self.seed.map(|seed| seed.wrapping_add(slot as u64));
        let [lead, other] = self.turn_order();
        [
            self.playstyles[lead].into_boxed_playstyle(seed_for(lead)),
            self.playstyles[other].into_boxed_playstyle(seed_for(other)),
        ]
    }
}
