//! Identifier types for combatants and state-tree nodes.
//!
//! Search works on deep copies of the battle queue, so the same logical
//! combatant shows up as many distinct `Character` values. Identity is always
//! decided by [`CharacterName`], never by structure or address.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Stable identity of a combatant across queue copies.
///
/// # Examples
///
/// ```
/// use battle_ai::identifiers::CharacterName;
///
/// let name = CharacterName::new("r");
/// assert_eq!(name.as_str(), "r");
/// assert_eq!(name, "r");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharacterName(String);

impl CharacterName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for CharacterName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CharacterName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<CharacterName> for &str {
    fn eq(&self, other: &CharacterName) -> bool {
        *self == other.as_str()
    }
}

impl Borrow<str> for CharacterName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for CharacterName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CharacterName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for CharacterName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Index of a node inside a [`StateTree`](crate::minimax::StateTree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// The root of every state tree.
    pub const ROOT: NodeId = NodeId(0);

    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
