//! MCTS tree node representation.
//!
//! Each node represents a game position reached by playing a move from the
//! parent. Nodes store the statistics used for selection and the final move
//! choice.

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode<M> {
    /// Parent node index (NONE for root). A back-reference only: the parent
    /// owns this node through its `children` list.
    pub parent: NodeId,

    /// Move that led to this node from parent (None for root)
    pub mv: Option<M>,

    /// Number of results backpropagated through this node
    pub visit_count: u32,

    /// Running mean of those results, in [0, 1]
    pub score: f64,

    /// Children as (move, NodeId) pairs in creation order.
    /// A move appears at most once.
    pub children: Vec<(M, NodeId)>,
}

impl<M: Copy + PartialEq> MctsNode<M> {
    /// Create a new root node.
    pub fn new_root() -> Self {
        Self {
            parent: NodeId::NONE,
            mv: None,
            visit_count: 0,
            score: 0.0,
            children: Vec::new(),
        }
    }

    /// Create a new, unvisited child node.
    pub fn new_child(parent: NodeId, mv: M) -> Self {
        Self {
            parent,
            mv: Some(mv),
            visit_count: 0,
            score: 0.0,
            children: Vec::new(),
        }
    }

    /// Merge one playout result into the running mean.
    #[inline]
    pub fn record(&mut self, result: f64) {
        let visits = self.visit_count as f64;
        self.score = (self.score * visits + result) / (visits + 1.0);
        self.visit_count += 1;
    }

    /// Selection score seen from the parent:
    /// `score + c * sqrt(parent_visits / visits)`.
    ///
    /// The exploration term has no logarithm on the parent visits; search
    /// behaviour depends on this exact form.
    #[inline]
    pub fn ucb_score(&self, parent_visits: u32, exploration: f64) -> f64 {
        let ratio = parent_visits as f64 / self.visit_count as f64;
        self.score + exploration * ratio.sqrt()
    }

    /// Look up the child reached by `mv`.
    pub fn child(&self, mv: M) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(child_mv, _)| *child_mv == mv)
            .map(|(_, id)| *id)
    }

    /// Check if this node has any children yet.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
