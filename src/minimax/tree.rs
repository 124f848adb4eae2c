//! Explicit tree of every state reachable from a battle queue.
//!
//! The tree is an arena of [`StateNode`]s addressed by [`NodeId`]. Scores
//! live in a separate table indexed by the same ids, so every path that
//! runs through a node observes the one score stored for it. Each finished
//! battle reached during expansion contributes one leaf-to-root path.

use std::collections::BTreeMap;

use tracing::debug;

use super::score::{successor, terminal_score};
use crate::{
    Result,
    battle::{Action, BattleQueue},
    identifiers::{CharacterName, NodeId},
};

/// One reachable state.
#[derive(Debug, Clone)]
pub struct StateNode {
    pub state: BattleQueue,
    /// Character about to move in `state`, if any turn is left.
    pub caster: Option<CharacterName>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    /// Character whose action produced this node.
    pub last_caster: Option<CharacterName>,
    /// Action that produced this node.
    pub last_action: Option<Action>,
}

impl StateNode {
    fn root(state: BattleQueue) -> Self {
        Self {
            caster: state.peek().map(|c| c.name().clone()),
            state,
            children: Vec::new(),
            parent: None,
            last_caster: None,
            last_action: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_over()
    }

    /// A state where the mover had a real choice between actions.
    pub fn is_decision_point(&self) -> bool {
        self.children.len() >= 2
    }

    /// Same logical mover as `other`, compared by name.
    pub fn same_caster(&self, other: &StateNode) -> bool {
        self.caster.is_some() && self.caster == other.caster
    }
}

/// A step of a leaf-to-root path: `[actor, parent actor, action taken]`.
/// The step's score is read from the tree's score table through `node`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    pub node: NodeId,
    pub caster: Option<CharacterName>,
    pub parent_caster: Option<CharacterName>,
    pub action: Option<Action>,
}

/// Where a node sits inside [`StateTree::paths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathPosition {
    pub path: usize,
    pub position: usize,
}

/// Every state reachable from a root queue, plus the bookkeeping needed to
/// score them bottom-up.
#[derive(Debug, Clone)]
pub struct StateTree {
    nodes: Vec<StateNode>,
    scores: Vec<Option<i32>>,
    paths: Vec<Vec<PathEntry>>,
    split_index: BTreeMap<NodeId, Vec<PathPosition>>,
}

impl StateTree {
    /// Expand `queue` breadth-first until every frontier state is finished.
    ///
    /// Finished states are scored as they are created; all other scores
    /// start unresolved.
    pub fn build(queue: &BattleQueue) -> Result<Self> {
        let root = StateNode::root(queue.clone());
        let root_score = root.is_terminal().then(|| terminal_score(&root.state));
        let mut tree = Self {
            nodes: vec![root],
            scores: vec![root_score],
            paths: Vec::new(),
            split_index: BTreeMap::new(),
        };

        let mut frontier = vec![NodeId::ROOT];
        while !frontier.is_empty() {
            let mut next_frontier = Vec::new();
            for parent in frontier {
                for child in tree.expand(parent)? {
                    if tree.node(child).is_terminal() {
                        tree.record_path(child);
                    } else {
                        next_frontier.push(child);
                    }
                }
            }
            frontier = next_frontier;
        }

        debug!(
            nodes = tree.nodes.len(),
            paths = tree.paths.len(),
            decision_points = tree.split_index.len(),
            "built state tree"
        );
        Ok(tree)
    }

    /// Attach one child per legal action of `id`'s mover.
    fn expand(&mut self, id: NodeId) -> Result<Vec<NodeId>> {
        let parent = &self.nodes[id.index()];
        if parent.is_terminal() {
            return Ok(Vec::new());
        }

        let mut children = Vec::new();
        for action in parent.state.available_actions() {
            let parent = &self.nodes[id.index()];
            let state = successor(&parent.state, action)?;
            let score = state.is_over().then(|| terminal_score(&state));
            let node = StateNode {
                caster: state.peek().map(|c| c.name().clone()),
                state,
                children: Vec::new(),
                parent: Some(id),
                last_caster: parent.caster.clone(),
                last_action: Some(action),
            };
            let child = NodeId::new(self.nodes.len());
            self.nodes.push(node);
            self.scores.push(score);
            children.push(child);
        }

        self.nodes[id.index()].children = children.clone();
        Ok(children)
    }

    /// Record the path from a finished leaf back to the root, indexing every
    /// decision point it passes through.
    fn record_path(&mut self, leaf: NodeId) {
        let path_index = self.paths.len();
        let mut path = Vec::new();
        let mut cursor = Some(leaf);

        while let Some(id) = cursor {
            let node = &self.nodes[id.index()];
            if node.is_decision_point() {
                self.split_index.entry(id).or_default().push(PathPosition {
                    path: path_index,
                    position: path.len(),
                });
            }
            path.push(PathEntry {
                node: id,
                caster: node.caster.clone(),
                parent_caster: node.last_caster.clone(),
                action: node.last_action,
            });
            cursor = node.parent;
        }

        self.paths.push(path);
    }

    pub fn root(&self) -> &StateNode {
        &self.nodes[NodeId::ROOT.index()]
    }

    pub fn node(&self, id: NodeId) -> &StateNode {
        &self.nodes[id.index()]
    }

    pub fn nodes(&self) -> &[StateNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn score(&self, id: NodeId) -> Option<i32> {
        self.scores[id.index()]
    }

    pub fn set_score(&mut self, id: NodeId, score: i32) {
        self.scores[id.index()] = Some(score);
    }

    /// Leaf-to-root paths in the order their leaves were reached.
    pub fn paths(&self) -> &[Vec<PathEntry>] {
        &self.paths
    }

    /// Every recorded occurrence of each decision point across all paths.
    pub fn split_index(&self) -> &BTreeMap<NodeId, Vec<PathPosition>> {
        &self.split_index
    }
}
