//! Exact minimax decision making for two-character turn-queue battles
//!
//! This crate provides:
//! - Battle rules: characters, skills and a shared turn queue
//! - A recursive state value function and the selector built on it
//! - An explicit state tree with bottom-up score propagation, and the
//!   selector built on that
//! - A priority-based skill decision tree used by sorcerers
//! - Manual and random playstyles plus a headless battle runner
//!
//! # Examples
//!
//! ```
//! use battle_ai::{
//!     battle::{Action, BattleQueue, Character},
//!     minimax::{IterativeMinimax, RecursiveMinimax, state_score},
//! };
//!
//! let queue = BattleQueue::with_turns(
//!     Character::mage("m").with_stats(14, 35),
//!     Character::rogue("r").with_stats(40, 6),
//! )?;
//!
//! assert_eq!(state_score(&queue)?, 7);
//! assert_eq!(RecursiveMinimax::select(&queue)?, Action::Attack);
//! assert_eq!(IterativeMinimax::select(&queue)?, Action::Attack);
//! # Ok::<(), battle_ai::Error>(())
//! ```

pub mod battle;
pub mod cli;
pub mod error;
pub mod identifiers;
pub mod minimax;
pub mod playstyle;
pub mod ports;
pub mod skill_tree;

pub use battle::{Action, Battle, BattleOutcome, BattleQueue, Character, CharacterClass, Skill};
pub use error::{Error, Result};
pub use identifiers::{CharacterName, NodeId};
pub use minimax::{IterativeMinimax, RecursiveMinimax, StateTree, state_score};
pub use playstyle::{ManualPlaystyle, PlaystyleKind, RandomPlaystyle};
pub use skill_tree::SkillDecisionTree;
