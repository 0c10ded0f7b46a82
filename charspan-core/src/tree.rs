//! Arena-based binary tree and mirror-symmetry check
//!
//! Nodes live in a flat arena and address each other by index, with absent
//! children as `None`. The symmetry walk uses an explicit work stack instead
//! of recursion, so arbitrarily unbalanced trees cannot exhaust the call
//! stack.

use smallvec::SmallVec;

/// Index of a node inside a [`TreeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A binary tree node: a value plus optional child references.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Node payload
    pub value: i64,
    /// Left child, if any
    pub left: Option<NodeId>,
    /// Right child, if any
    pub right: Option<NodeId>,
}

/// Flat node storage for binary trees.
///
/// Children must be inserted before their parent references them, which
/// `insert` enforces; an arena therefore never contains a dangling id.
#[derive(Debug, Clone, Default)]
pub struct TreeArena {
    nodes: Vec<TreeNode>,
}

impl TreeArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node and return its id.
    ///
    /// # Panics
    ///
    /// Panics if either child id does not refer to an existing node; ids
    /// are only ever handed out by this arena, so a violation is a caller
    /// bug rather than an input condition.
    pub fn insert(&mut self, value: i64, left: Option<NodeId>, right: Option<NodeId>) -> NodeId {
        for child in [left, right].into_iter().flatten() {
            assert!(child.0 < self.nodes.len(), "child id from another arena");
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode { value, left, right });
        id
    }

    /// Insert a node with no children.
    pub fn leaf(&mut self, value: i64) -> NodeId {
        self.insert(value, None, None)
    }

    /// Borrow the node behind `id`.
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the tree rooted at `root` is a mirror image of itself.
    ///
    /// An absent tree is trivially symmetric. Two subtrees mirror each other
    /// when their root values match and the outer pair of children mirrors
    /// as does the inner pair.
    pub fn is_symmetric(&self, root: Option<NodeId>) -> bool {
        let root = match root {
            Some(id) => id,
            None => return true,
        };

        // Pairs of subtrees that still need mirror comparison.
        let node = self.node(root);
        let mut pending: SmallVec<[(Option<NodeId>, Option<NodeId>); 16]> =
            SmallVec::new();
        pending.push((node.left, node.right));

        while let Some(pair) = pending.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    let (a, b) = (self.node(a), self.node(b));
                    if a.value != b.value {
                        return false;
                    }
                    pending.push((a.left, b.right));
                    pending.push((a.right, b.left));
                }
                // One side present, the other absent: shapes differ.
                _ => return false,
            }
        }
        true
    }
}
