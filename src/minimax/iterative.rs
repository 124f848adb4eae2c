//! Selector that materialises the whole state tree and scores it bottom-up.
//!
//! Scores flow from each finished leaf toward the root along the recorded
//! paths. A parent is resolved once every one of its children has reported,
//! taking the best child score seen from the parent's mover. Because paths
//! only hold node ids, a resolved decision point is immediately visible at
//! every position listed for it in the tree's split index.

use tracing::{debug, trace, warn};

use super::tree::StateTree;
use crate::{
    Error, Result,
    battle::{Action, BattleQueue},
    identifiers::NodeId,
    ports::Playstyle,
};

/// Minimax playstyle backed by an explicit [`StateTree`].
#[derive(Debug, Clone)]
pub struct IterativeMinimax {
    name: String,
}

impl IterativeMinimax {
    pub fn new() -> Self {
        Self::with_name("Iterative minimax")
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Build the full tree for `queue` and resolve every score in it.
    pub fn score_tree(queue: &BattleQueue) -> Result<StateTree> {
        let mut tree = StateTree::build(queue)?;
        assign_scores(&mut tree)?;
        Ok(tree)
    }

    /// Pick the action for the front character of `queue`.
    pub fn select(queue: &BattleQueue) -> Result<Action> {
        let mut tree = StateTree::build(queue)?;
        let root = tree.root();

        match root.children.as_slice() {
            [] => return Ok(Action::NoMove),
            [only] => return Ok(tree.node(*only).last_action.unwrap_or(Action::NoMove)),
            _ => {}
        }

        assign_scores(&mut tree)?;
        let target = tree
            .score(NodeId::ROOT)
            .ok_or(Error::UnresolvedScore { node: 0 })?;
        let root_caster = tree.root().caster.clone();

        for path in tree.paths() {
            let Some(entry) = path.len().checked_sub(2).map(|i| &path[i]) else {
                continue;
            };
            let score = tree.score(entry.node).ok_or(Error::UnresolvedScore {
                node: entry.node.index(),
            })?;
            let same_side = root_caster.is_some() && entry.caster == root_caster;
            let matches = if same_side {
                score == target
            } else {
                -score == target
            };
            if matches && let Some(action) = entry.action {
                debug!(
                    nodes = tree.len(),
                    paths = tree.paths().len(),
                    %action,
                    score = target,
                    "iterative minimax chose action"
                );
                return Ok(action);
            }
        }

        warn!(target, "no first move reproduced the root score");
        Ok(Action::NoMove)
    }
}

impl Default for IterativeMinimax {
    fn default() -> Self {
        Self::new()
    }
}

impl Playstyle for IterativeMinimax {
    fn select_action(&mut self, queue: &BattleQueue, _input: Option<&str>) -> Result<Action> {
        Self::select(queue)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Back-propagate leaf scores to the root along every recorded path.
///
/// Walking a path stops at the first child that is still unresolved or whose
/// score an earlier path already carried upward; the path that resolves a
/// node keeps walking from it, so a single sweep resolves the root.
///
/// # Errors
///
/// [`Error::UnresolvedScore`] if the root is still unscored afterwards,
/// which only happens when a running state has no legal action.
pub fn assign_scores(tree: &mut StateTree) -> Result<()> {
    let mut contributions: Vec<Vec<i32>> = vec![Vec::new(); tree.len()];
    let mut propagated = vec![false; tree.len()];

    for path_index in 0..tree.paths().len() {
        let steps = tree.paths()[path_index].len();
        for position in 0..steps.saturating_sub(1) {
            let child = tree.paths()[path_index][position].node;
            let parent = tree.paths()[path_index][position + 1].node;

            if propagated[child.index()] {
                break;
            }
            let Some(score) = tree.score(child) else {
                break;
            };
            propagated[child.index()] = true;

            let score = if tree.node(child).same_caster(tree.node(parent)) {
                score
            } else {
                -score
            };
            let pending = &mut contributions[parent.index()];
            pending.push(score);
            if pending.len() < tree.node(parent).children.len() {
                break;
            }

            let best = pending.iter().copied().max().unwrap_or(score);
            tree.set_score(parent, best);
            if tree.node(parent).is_decision_point() {
                let occurrences = tree.split_index().get(&parent).map_or(0, Vec::len);
                trace!(node = %parent, score = best, occurrences, "resolved decision point");
            }
        }
    }

    if tree.score(NodeId::ROOT).is_none() {
        return Err(Error::UnresolvedScore { node: 0 });
    }
    Ok(())
}
