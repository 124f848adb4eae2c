//! CLI infrastructure for the battle-ai toolkit
//!
//! This module provides the command-line interface for scoring positions,
//! comparing the minimax selectors, playing battles and inspecting the skill
//! decision tree.

pub mod commands;
pub mod config;
pub mod output;
