use avl::kurbo::Point;
use avl::{Layout, Node, Tree};
use quickcheck_macros::quickcheck;

use crate::init_logging;

fn collect(node: Option<&Node<i16>>, out: &mut Vec<(i16, Option<Point>)>) {
    if let Some(node) = node {
        out.push((*node.value(), node.position()));
        collect(node.left(), out);
        collect(node.right(), out);
    }
}

fn tree_of(xs: &[i16]) -> Tree<i16> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

#[quickcheck]
fn layout_twice_gives_the_same_positions(xs: Vec<i16>) -> bool {
    init_logging();
    let mut tree = tree_of(&xs);
    let layout = Layout::default();

    layout.position(&mut tree, 0.0, 4096.0, 0.0);
    let mut first = Vec::new();
    collect(tree.root(), &mut first);

    layout.position(&mut tree, 0.0, 4096.0, 0.0);
    let mut second = Vec::new();
    collect(tree.root(), &mut second);

    first == second && first.iter().all(|(_, position)| position.is_some())
}

#[quickcheck]
fn every_node_hits_itself(xs: Vec<i16>) -> bool {
    init_logging();
    let mut tree = tree_of(&xs);
    let layout = Layout::default();
    layout.position(&mut tree, 0.0, 1_000_000.0, 0.0);

    let mut nodes = Vec::new();
    collect(tree.root(), &mut nodes);

    // With this much room no two squares overlap, so the centre of each square is only on it.
    nodes.iter().all(|&(value, position)| {
        let centre = layout.node_rect(position.unwrap()).center();
        layout.hit_test(&tree, centre).map(|n| *n.value()) == Some(value)
    })
}

/// Pre-order values, positions and depths.
fn collect_levels(node: Option<&Node<i16>>, depth: usize, out: &mut Vec<(i16, Point, usize)>) {
    if let Some(node) = node {
        out.push((*node.value(), node.position().unwrap(), depth));
        collect_levels(node.left(), depth + 1, out);
        collect_levels(node.right(), depth + 1, out);
    }
}

#[quickcheck]
fn nodes_on_a_level_dont_overlap(xs: Vec<i16>) -> bool {
    init_logging();
    let mut tree = tree_of(&xs);
    let layout = Layout::default();
    layout.position(&mut tree, 0.0, 1_000_000.0, 0.0);

    let mut nodes = Vec::new();
    collect_levels(tree.root(), 0, &mut nodes);
    let deepest = nodes.iter().map(|&(_, _, depth)| depth).max().unwrap_or(0);

    (0..=deepest).all(|level| {
        let mut row: Vec<_> = nodes
            .iter()
            .filter(|&&(_, _, depth)| depth == level)
            .map(|&(value, position, _)| (value, position))
            .collect();
        row.sort_by_key(|&(value, _)| value);

        row.windows(2).all(|pair| {
            let (left, right) = (pair[0].1, pair[1].1);
            left.y == right.y && right.x - left.x >= layout.node_size
        })
    })
}

#[test]
fn only_children_on_a_level_dont_overlap() {
    init_logging();
    // 1 and 7 are only children, so each is nudged 2 * margin away from the missing sibling.
    let mut tree = tree_of(&[4, 2, 6, 1, 7]);
    let layout = Layout::default();
    layout.position(&mut tree, 0.0, 640.0, 0.0);

    let mut nodes = Vec::new();
    collect_levels(tree.root(), 0, &mut nodes);
    let row: Vec<_> = nodes
        .iter()
        .filter(|&&(_, _, depth)| depth == 2)
        .map(|&(value, position, _)| (value, position.x))
        .collect();

    assert_eq!(row, vec![(1, 140.0), (7, 500.0)]);
}

#[test]
fn levels_step_down_by_size_and_margin() {
    init_logging();
    let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
    let layout = Layout::default().with_node_size(40.0).with_margin(10.0);
    layout.position(&mut tree, 0.0, 800.0, 25.0);

    let mut nodes = Vec::new();
    collect(tree.root(), &mut nodes);
    let ys: Vec<_> = nodes.iter().map(|(value, p)| (*value, p.unwrap().y)).collect();

    assert_eq!(
        ys,
        vec![
            (4, 25.0),
            (2, 75.0),
            (1, 125.0),
            (3, 125.0),
            (6, 75.0),
            (5, 125.0),
            (7, 125.0),
        ]
    );
}
