//! Subcommands of the `battle-ai` binary

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::{
    cli::config::{BattleConfig, CharacterSpec},
    playstyle::PlaystyleKind,
};

pub mod play;
pub mod score;
pub mod select;
pub mod skill;

/// Battle setup flags shared by `score`, `select` and `play`.
///
/// Flags override values loaded from `--config`; anything left unset comes
/// from [`BattleConfig::default`].
#[derive(Args, Debug, Clone, Default)]
pub struct BattleArgs {
    /// JSON battle configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// First character, as class:name[:hp[:sp]]
    #[arg(long, short = 'a')]
    pub first_character: Option<CharacterSpec>,

    /// Second character, as class:name[:hp[:sp]]
    #[arg(long, short = 'b')]
    pub second_character: Option<CharacterSpec>,

    /// Playstyle of the first character
    #[arg(long, value_enum)]
    pub first_style: Option<PlaystyleKind>,

    /// Playstyle of the second character
    #[arg(long, value_enum)]
    pub second_style: Option<PlaystyleKind>,

    /// Name of the character that moves first
    #[arg(long)]
    pub first: Option<String>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

impl BattleArgs {
    pub fn resolve(&self) -> Result<BattleConfig> {
        let mut config = match &self.config {
            Some(path) => BattleConfig::load(path)?,
            None => BattleConfig::default(),
        };

        let replaced_roster = self.first_character.is_some() || self.second_character.is_some();
        if let Some(spec) = &self.first_character {
            config.characters[0] = spec.clone();
        }
        if let Some(spec) = &self.second_character {
            config.characters[1] = spec.clone();
        }
        if let Some(first) = &self.first {
            config.first = Some(first.clone());
        } else if replaced_roster
            && config
                .first
                .as_ref()
                .is_some_and(|first| config.characters.iter().all(|c| &c.name != first))
        {
            // The configured first mover was replaced; fall back to listing order.
            config.first = None;
        }
        if let Some(style) = self.first_style {
            config.playstyles[0] = style;
        }
        if let Some(style) = self.second_style {
            config.playstyles[1] = style;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}
