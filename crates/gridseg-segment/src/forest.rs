//! Disjoint-set forest over grid cells
//!
//! Union-find structure augmented with per-root statistics for greedy
//! graph segmentation: each root tracks the size of its set and the
//! maximum edge weight known to exist inside the set (the "internal
//! difference"). Parent links are flat-array indices, so the forest is a
//! plain arena with no node allocation or deallocation after construction.

/// Union-find forest with per-root size and internal difference.
///
/// `size` and `internal_diff` are maintained only for roots; after a
/// union the absorbed root's entries go stale and are never read again.
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<u32>,
    internal_diff: Vec<f64>,
}

impl DisjointSetForest {
    /// Create a forest of `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            size: vec![1; len],
            internal_diff: vec![0.0; len],
        }
    }

    /// Number of nodes in the forest.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the forest has no nodes.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the root of `node`, compressing the walked path.
    ///
    /// Iterative two-pass compression: walk to the root, then repoint
    /// every visited node directly at it. Bounded stack usage even on
    /// pathological chains.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`, recording `weight` as the
    /// merged set's internal difference.
    ///
    /// Union by rank; the surviving root's size becomes the sum of both
    /// sizes. Because the caller consumes edges in ascending weight order,
    /// the triggering weight is exactly the maximum edge weight inside the
    /// merged set, so it overwrites the internal difference rather than
    /// being folded into a max. Returns the surviving root.
    ///
    /// Callers must not union two nodes that already share a root.
    pub fn union(&mut self, a: usize, b: usize, weight: f64) -> usize {
        let mut first = self.find(a);
        let mut second = self.find(b);
        debug_assert_ne!(first, second, "union of nodes already in one set");

        if self.rank[first] < self.rank[second] {
            std::mem::swap(&mut first, &mut second);
        }
        if self.rank[first] == self.rank[second] {
            self.rank[first] += 1;
        }
        self.parent[second] = first;
        self.size[first] += self.size[second];
        self.internal_diff[first] = weight;
        first
    }

    /// Size of the set rooted at `root`.
    ///
    /// Only meaningful when `root` is a root.
    #[inline]
    pub fn size_of(&self, root: usize) -> u32 {
        debug_assert_eq!(self.parent[root], root, "size_of on non-root");
        self.size[root]
    }

    /// Internal difference of the set rooted at `root`.
    ///
    /// Only meaningful when `root` is a root.
    #[inline]
    pub fn internal_diff_of(&self, root: usize) -> f64 {
        debug_assert_eq!(self.parent[root], root, "internal_diff_of on non-root");
        self.internal_diff[root]
    }

    /// Number of distinct roots (current set count).
    pub fn root_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(node, &parent)| node == parent)
            .count()
    }

    /// Repoint every node directly at its root.
    ///
    /// After this pass `parent[node]` is the canonical representative for
    /// every node, so the partition can be read without further mutation.
    pub fn compress_all(&mut self) {
        for node in 0..self.parent.len() {
            let root = self.find(node);
            self.parent[node] = root;
        }
    }

    /// Root of `node` without path compression.
    ///
    /// Valid as a canonical representative only after
    /// [`DisjointSetForest::compress_all`].
    #[inline]
    pub fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }
}
