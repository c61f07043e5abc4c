//! Text rendering of a search tree.

use std::fmt::Display;

use mcts::{MctsTree, NodeId};

/// Render `tree` one node per line, children sorted by move and indented by
/// depth, down to `max_depth` levels below the root:
///
/// ```text
/// *
///   (0, 0) 12 0.583333 [0.583333 + 0.1 * sqrt(100 / 12)]
/// ```
pub fn render_tree<M>(tree: &MctsTree<M>, exploration: f64, max_depth: usize) -> String
where
    M: Copy + PartialEq + Ord + Display,
{
    let mut out = String::from("*\n");

    let mut stack: Vec<(NodeId, usize)> = Vec::new();
    push_sorted_children(tree, tree.root(), 1, max_depth, &mut stack);

    while let Some((id, depth)) = stack.pop() {
        let node = tree.get(id);
        let parent_visits = if node.parent.is_some() {
            tree.get(node.parent).visit_count
        } else {
            0
        };

        if let Some(mv) = node.mv {
            out.push_str(&format!(
                "{:indent$}{} {} {:.6} [{:.6} + {} * sqrt({} / {})]\n",
                "",
                mv,
                node.visit_count,
                node.score,
                node.score,
                exploration,
                parent_visits,
                node.visit_count,
                indent = depth * 2
            ));
        }

        push_sorted_children(tree, id, depth + 1, max_depth, &mut stack);
    }

    out
}

fn push_sorted_children<M>(
    tree: &MctsTree<M>,
    id: NodeId,
    depth: usize,
    max_depth: usize,
    stack: &mut Vec<(NodeId, usize)>,
) where
    M: Copy + PartialEq + Ord,
{
    if depth > max_depth {
        return;
    }

    let mut children = tree.get(id).children.clone();
    children.sort_by(|a, b| a.0.cmp(&b.0));
    // Reversed so the smallest move is popped first
    stack.extend(children.into_iter().rev().map(|(_, child)| (child, depth)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> MctsTree<u8> {
        let mut tree = MctsTree::new();
        let root = tree.root();
        let c2 = tree.add_child(root, 2);
        let c1 = tree.add_child(root, 1);
        let g = tree.add_child(c1, 5);

        tree.backpropagate(c2, 1.0);
        tree.backpropagate(g, 1.0);
        tree
    }

    #[test]
    fn test_render_sorted_and_indented() {
        let rendered = render_tree(&sample_tree(), 0.1, 2);

        assert_eq!(
            rendered,
            "*\n\
             \x20 1 1 0.000000 [0.000000 + 0.1 * sqrt(2 / 1)]\n\
             \x20   5 1 1.000000 [1.000000 + 0.1 * sqrt(1 / 1)]\n\
             \x20 2 1 1.000000 [1.000000 + 0.1 * sqrt(2 / 1)]\n"
        );
    }

    #[test]
    fn test_render_depth_limit() {
        let tree = sample_tree();

        let one_level = render_tree(&tree, 0.1, 1);
        assert_eq!(one_level.lines().count(), 3);
        assert!(!one_level.contains("    5 "));

        assert_eq!(render_tree(&tree, 0.1, 0), "*\n");
    }

    #[test]
    fn test_render_empty_tree() {
        let tree = MctsTree::<u8>::new();
        assert_eq!(render_tree(&tree, 1.0, 3), "*\n");
    }
}
