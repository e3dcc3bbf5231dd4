//! Union-find (disjoint set union) used to reject cycle-closing edges.
//!
//! `find` is iterative and compresses the whole path it walks, so deep
//! chains never grow the call stack. `union` attaches the lower-rank root
//! beneath the higher-rank one.

use crate::error::{Result, check_vertex};
use crate::graph::VertexId;

/// Partition of `0..len` into disjoint sets.
///
/// # Examples
/// ```
/// use graphlab_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(sets.union(2, 3)?);
/// assert!(!sets.union(1, 0)?);
/// assert!(sets.same_set(0, 1)?);
/// assert!(!sets.same_set(1, 2)?);
/// assert_eq!(sets.component_count(), 2);
/// # Ok::<(), graphlab_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<VertexId>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of `element`'s set, re-parenting every
    /// element on the walked path directly onto it.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`](crate::GraphError::VertexOutOfRange)
    /// when `element >= self.len()`.
    pub fn find(&mut self, element: VertexId) -> Result<VertexId> {
        check_vertex(element, self.len())?;
        let root = self.root_of(element);

        let mut cursor = element;
        while cursor != root {
            match self.parent.get_mut(cursor) {
                Some(link) => cursor = std::mem::replace(link, root),
                None => break,
            }
        }
        Ok(root)
    }

    /// Merges the sets containing `left` and `right`, returning whether a
    /// merge happened.
    ///
    /// Both elements already sharing a set is a no-op that yields `false`.
    /// On a rank tie `left`'s root survives and its rank grows by one.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`](crate::GraphError::VertexOutOfRange)
    /// when either element is out of range; the partition is left untouched.
    pub fn union(&mut self, left: VertexId, right: VertexId) -> Result<bool> {
        check_vertex(left, self.len())?;
        check_vertex(right, self.len())?;
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank_of(left_root);
        let right_rank = self.rank_of(right_root);
        let (survivor, absorbed) = if left_rank < right_rank {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };
        if let Some(link) = self.parent.get_mut(absorbed) {
            *link = survivor;
        }
        if left_rank == right_rank
            && let Some(rank) = self.rank.get_mut(survivor)
        {
            *rank = rank.saturating_add(1);
        }
        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a set.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`](crate::GraphError::VertexOutOfRange)
    /// when either element is out of range.
    pub fn same_set(&mut self, left: VertexId, right: VertexId) -> Result<bool> {
        check_vertex(left, self.len())?;
        check_vertex(right, self.len())?;
        Ok(self.find(left)? == self.find(right)?)
    }

    fn root_of(&self, mut element: VertexId) -> VertexId {
        while let Some(&parent) = self.parent.get(element)
            && parent != element
        {
            element = parent;
        }
        element
    }

    fn rank_of(&self, root: VertexId) -> u8 {
        self.rank.get(root).copied().unwrap_or_default()
    }
}
