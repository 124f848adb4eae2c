//! Exact minimax over battle-queue states.
//!
//! Two independent selectors share one state value definition:
//! - [`RecursiveMinimax`] recomputes values by plain recursion
//! - [`IterativeMinimax`] builds a [`StateTree`] and back-propagates scores
//!
//! Both search the full game with no pruning or caching; they must agree on
//! the value of the action they pick.

pub mod iterative;
pub mod recursive;
pub mod score;
pub mod tree;

pub use iterative::{IterativeMinimax, assign_scores};
pub use recursive::RecursiveMinimax;
pub use score::{
    OptimalPolicy, action_scores, optimal_policy, reanchor, state_score, successor,
    terminal_score,
};
pub use tree::{PathEntry, PathPosition, StateNode, StateTree};
