//! MCTS tree structure with arena allocation.
//!
//! The tree uses arena allocation for efficient node storage and
//! cache-friendly traversal. Nodes are stored in a contiguous Vec
//! and referenced by NodeId indices, so parent back-references never alias
//! the ownership edges kept in each node's `children`.

use crate::node::{MctsNode, NodeId};

/// MCTS tree with arena-based node storage.
#[derive(Debug, Clone)]
pub struct MctsTree<M> {
    /// Arena storing all nodes
    nodes: Vec<MctsNode<M>>,

    /// Root node index (always 0 after initialization)
    root: NodeId,
}

impl<M: Copy + PartialEq> MctsTree<M> {
    /// Create a new tree holding only an unvisited root.
    pub fn new() -> Self {
        Self {
            nodes: vec![MctsNode::new_root()],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<M> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<M> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node and return its ID.
    pub fn allocate(&mut self, node: MctsNode<M>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[MctsNode<M>] {
        &self.nodes
    }

    /// Iterate over (move, child) pairs of a node in creation order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (M, &MctsNode<M>)> + '_ {
        self.get(id)
            .children
            .iter()
            .map(move |(mv, child_id)| (*mv, self.get(*child_id)))
    }

    /// Look up the child of `id` reached by `mv`.
    pub fn child(&self, id: NodeId, mv: M) -> Option<NodeId> {
        self.get(id).child(mv)
    }

    /// Select the child of a node with the highest UCB-style score.
    /// Ties keep the earliest-created child.
    pub fn select_child(&self, node_id: NodeId, exploration: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        let parent_visits = node.visit_count;

        let mut best: Option<(NodeId, f64)> = None;
        for (_, child_id) in &node.children {
            let score = self.get(*child_id).ucb_score(parent_visits, exploration);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((*child_id, score)),
            }
        }

        best.map(|(id, _)| id)
    }

    /// Add a child to a parent node.
    /// Returns the new child's NodeId.
    pub fn add_child(&mut self, parent_id: NodeId, mv: M) -> NodeId {
        let child_id = self.allocate(MctsNode::new_child(parent_id, mv));

        // Add to parent's children
        self.get_mut(parent_id).children.push((mv, child_id));

        child_id
    }

    /// Backpropagate a playout result from a node up to the root.
    ///
    /// The result is flipped (`1 - r`) at each level: turns alternate, so
    /// every ancestor sees the position from the other player's side.
    pub fn backpropagate(&mut self, leaf_id: NodeId, result: f64) {
        let mut current_id = leaf_id;
        let mut current_result = result;

        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.record(current_result);

            current_result = 1.0 - current_result;
            current_id = node.parent;
        }
    }

    /// Get the root child with the strictly greatest average score.
    /// Ties keep the earliest-created child. Returns None if the root has
    /// no children.
    pub fn best_move(&self) -> Option<(M, NodeId)> {
        let mut best: Option<(M, NodeId, f64)> = None;
        for (mv, child_id) in &self.get(self.root).children {
            let score = self.get(*child_id).score;
            match best {
                Some((_, _, best_score)) if score <= best_score => {}
                _ => best = Some((*mv, *child_id, score)),
            }
        }

        best.map(|(mv, id, _)| (mv, id))
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visit_count,
            root_score: root.score,
            max_depth: self.compute_max_depth(),
        }
    }

    fn compute_max_depth(&self) -> u32 {
        // Walk with an explicit stack; deep trees would overflow recursion
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 0u32)];
        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(self.get(id).children.iter().map(|(_, c)| (*c, depth + 1)));
        }
        max_depth
    }
}

impl<M: Copy + PartialEq> Default for MctsTree<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_score: f64,
    pub max_depth: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree() {
        let tree = MctsTree::<u8>::new();

        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), NodeId(0));

        let root = tree.get(tree.root());
        assert!(root.parent.is_none());
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_add_child() {
        let mut tree = MctsTree::new();

        let child_id = tree.add_child(tree.root(), 5u8);

        assert_eq!(tree.len(), 2);
        assert_eq!(child_id, NodeId(1));

        let root = tree.get(tree.root());
        assert_eq!(root.children, vec![(5, NodeId(1))]);

        let child = tree.get(child_id);
        assert_eq!(child.parent, tree.root());
        assert_eq!(child.mv, Some(5));
        assert_eq!(tree.child(tree.root(), 5), Some(child_id));
        assert_eq!(tree.child(tree.root(), 6), None);
    }

    #[test]
    fn test_backpropagate() {
        let mut tree = MctsTree::new();

        // Create a chain: root -> child -> grandchild
        let child_id = tree.add_child(tree.root(), 0u8);
        let grandchild_id = tree.add_child(child_id, 1u8);

        // Backpropagate a win from the grandchild
        tree.backpropagate(grandchild_id, 1.0);

        // Check visits
        assert_eq!(tree.get(grandchild_id).visit_count, 1);
        assert_eq!(tree.get(child_id).visit_count, 1);
        assert_eq!(tree.get(tree.root()).visit_count, 1);

        // Check scores (flipped at each level)
        assert!((tree.get(grandchild_id).score - 1.0).abs() < 1e-12);
        assert!(tree.get(child_id).score.abs() < 1e-12);
        assert!((tree.get(tree.root()).score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_backpropagate_draw_is_symmetric() {
        let mut tree = MctsTree::new();
        let child_id = tree.add_child(tree.root(), 0u8);

        tree.backpropagate(child_id, 0.5);
        tree.backpropagate(child_id, 1.0);

        assert!((tree.get(child_id).score - 0.75).abs() < 1e-12);
        assert!((tree.get(tree.root()).score - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_select_child_prefers_higher_score() {
        let mut tree = MctsTree::new();
        let c1 = tree.add_child(tree.root(), 0u8);
        let c2 = tree.add_child(tree.root(), 1u8);

        tree.backpropagate(c1, 0.0);
        tree.backpropagate(c2, 1.0);

        assert_eq!(tree.select_child(tree.root(), 0.0), Some(c2));
    }

    #[test]
    fn test_select_child_explores_less_visited() {
        let mut tree = MctsTree::new();
        let c1 = tree.add_child(tree.root(), 0u8);
        let c2 = tree.add_child(tree.root(), 1u8);

        // c1: mean 0.6 over 9 visits, c2: mean 0.5 over 1 visit
        for _ in 0..9 {
            tree.backpropagate(c1, 0.6);
        }
        tree.backpropagate(c2, 0.5);

        // Root has 10 visits.
        // c1: 0.6 + 1.0 * sqrt(10/9) ~ 1.654, c2: 0.5 + 1.0 * sqrt(10) ~ 3.662
        assert_eq!(tree.select_child(tree.root(), 1.0), Some(c2));
        assert_eq!(tree.select_child(tree.root(), 0.0), Some(c1));
    }

    #[test]
    fn test_select_child_ties_keep_first() {
        let mut tree = MctsTree::new();
        let c1 = tree.add_child(tree.root(), 0u8);
        let c2 = tree.add_child(tree.root(), 1u8);

        tree.backpropagate(c1, 0.5);
        tree.backpropagate(c2, 0.5);

        assert_eq!(tree.select_child(tree.root(), 0.1), Some(c1));
    }

    #[test]
    fn test_select_child_without_children() {
        let tree = MctsTree::<u8>::new();
        assert_eq!(tree.select_child(tree.root(), 0.1), None);
    }

    #[test]
    fn test_best_move() {
        let mut tree = MctsTree::new();
        assert_eq!(tree.best_move(), None);

        let c1 = tree.add_child(tree.root(), 10u8);
        let c2 = tree.add_child(tree.root(), 20u8);
        let c3 = tree.add_child(tree.root(), 30u8);

        tree.backpropagate(c1, 0.5);
        tree.backpropagate(c2, 1.0);
        tree.backpropagate(c3, 1.0);

        // c2 and c3 tie on score; the earlier one wins
        assert_eq!(tree.best_move(), Some((20, c2)));
    }

    #[test]
    fn test_children_iteration_order() {
        let mut tree = MctsTree::new();
        tree.add_child(tree.root(), 3u8);
        tree.add_child(tree.root(), 1u8);
        tree.add_child(tree.root(), 2u8);

        let moves: Vec<u8> = tree.children(tree.root()).map(|(mv, _)| mv).collect();
        assert_eq!(moves, vec![3, 1, 2]);
    }

    #[test]
    fn test_tree_stats() {
        let mut tree = MctsTree::new();
        let child = tree.add_child(tree.root(), 0u8);
        let grandchild = tree.add_child(child, 1u8);
        tree.add_child(tree.root(), 2u8);
        tree.backpropagate(grandchild, 0.5);

        let stats = tree.stats();
        assert_eq!(stats.total_nodes, 4);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.root_visits, 1);
        assert!((stats.root_score - 0.5).abs() < 1e-12);
    }
}
