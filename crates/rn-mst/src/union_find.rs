//! Disjoint-set forest over dense `0..n` element indices.
//!
//! Owned by a single spanning-forest build and dropped with it; not shared
//! between threads.

/// Union by rank with full path compression.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent:     Vec<usize>,
    rank:       Vec<u32>,
    components: usize,
}

impl DisjointSet {
    /// `n` singleton sets, one per element.
    pub fn new(n: usize) -> Self {
        Self {
            parent:     (0..n).collect(),
            rank:       vec![0; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets remaining.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Representative of `x`'s set.  Every node on the walked path is
    /// re-pointed directly at the root.
    ///
    /// # Panics
    /// If `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets of `x` and `y`.  Returns `false` when they were
    /// already joined.
    ///
    /// The lower-rank root goes under the higher-rank one.  On equal rank
    /// `y`'s root goes under `x`'s and `x`'s root gains one rank.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less    => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal   => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        self.components -= 1;
        true
    }

    /// `true` when `x` and `y` share a set.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// The full partition.  Groups are ordered by their smallest member and
    /// members within a group ascend.
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let n = self.len();
        // slot[root] = position of root's group in `out`.
        let mut slot = vec![usize::MAX; n];
        let mut out: Vec<Vec<usize>> = Vec::with_capacity(self.components);
        for x in 0..n {
            let root = self.find(x);
            if slot[root] == usize::MAX {
                slot[root] = out.len();
                out.push(Vec::new());
            }
            out[slot[root]].push(x);
        }
        out
    }
}
