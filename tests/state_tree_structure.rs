mod common;

use battle_ai::{
    Action, IterativeMinimax, NodeId, StateTree,
    minimax::{PathPosition, assign_scores},
};
use common::sample_queue;

fn actions_from_leaf(tree: &StateTree, path: usize) -> Vec<Option<Action>> {
    tree.paths()[path].iter().map(|entry| entry.action).collect()
}

#[test]
fn worked_example_tree_shape() {
    let tree = StateTree::build(&sample_queue()).unwrap();

    assert_eq!(tree.len(), 9);
    assert_eq!(tree.paths().len(), 3);

    use Action::{Attack as A, Special as S};
    assert_eq!(actions_from_leaf(&tree, 0), [Some(S), Some(A), Some(A), None]);
    assert_eq!(actions_from_leaf(&tree, 1), [Some(A), Some(A), Some(S), None]);
    assert_eq!(
        actions_from_leaf(&tree, 2),
        [Some(A), Some(A), Some(A), Some(A), None]
    );

    for path in tree.paths() {
        assert_eq!(path.last().unwrap().node, NodeId::ROOT);
        assert!(tree.node(path[0].node).is_terminal());
    }
}

#[test]
fn worked_example_split_index() {
    let tree = StateTree::build(&sample_queue()).unwrap();
    let at = |path, position| PathPosition { path, position };

    let index = tree.split_index();
    assert_eq!(index.len(), 2);
    assert_eq!(index[&NodeId::ROOT], [at(0, 3), at(1, 3), at(2, 4)]);

    // Second attack in a row: the mage may then attack or use its special.
    let double_attack = NodeId::new(3);
    assert_eq!(tree.node(double_attack).children.len(), 2);
    assert_eq!(index[&double_attack], [at(0, 1), at(2, 2)]);
    for positions in index.values() {
        for pos in positions {
            let entry = &tree.paths()[pos.path][pos.position];
            assert!(tree.node(entry.node).is_decision_point());
        }
    }
}

#[test]
fn back_propagation_resolves_every_node() {
    let mut tree = StateTree::build(&sample_queue()).unwrap();
    assert_eq!(tree.score(NodeId::ROOT), None);

    assign_scores(&mut tree).unwrap();
    assert_eq!(tree.score(NodeId::ROOT), Some(7));
    for index in 0..tree.len() {
        assert!(tree.score(NodeId::new(index)).is_some(), "node {index}");
    }
}

#[test]
fn path_entries_record_who_moved() {
    let tree = IterativeMinimax::score_tree(&sample_queue()).unwrap();
    let root = tree.root();
    assert_eq!(root.caster.as_ref().unwrap(), "m");
    assert!(root.parent.is_none());

    for path in tree.paths() {
        for pair in path.windows(2) {
            let (child, parent) = (&pair[0], &pair[1]);
            assert_eq!(tree.node(child.node).parent, Some(parent.node));
            assert_eq!(child.parent_caster, parent.caster);
        }
    }
}
