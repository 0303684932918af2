use generational_arena::{Arena, Index};
use tracing::{instrument, warn};

use crate::domain::entities::Vampire;
use crate::domain::error::{DomainError, TreeResult};

/// Handle of a vampire in a [`Bloodline`].
pub type VampireId = Index;

/// Tree node in the arena-based bloodline.
#[derive(Debug)]
pub struct TreeNode {
    /// Vampire stored at this node
    pub data: Vampire,
    /// Index of the creator in the arena, None for roots
    pub creator: Option<VampireId>,
    /// Indices of offspring in the arena, oldest-added first
    pub offspring: Vec<VampireId>,
}

/// Arena-based bloodline holding one or more vampire trees.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// The arena owns every node; `creator` links are plain indices and never keep
/// a node alive. Nodes are never removed, so arena order is insertion order.
#[derive(Debug)]
pub struct Bloodline {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
}

impl Default for Bloodline {
    fn default() -> Self {
        Self::new()
    }
}

impl Bloodline {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Inserts a standalone vampire (no creator, no offspring).
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, vampire: Vampire) -> VampireId {
        self.arena.insert(TreeNode {
            data: vampire,
            creator: None,
            offspring: Vec::new(),
        })
    }

    /// Appends `child` to the offspring of `creator` and makes `creator` its creator.
    ///
    /// The caller must not link a vampire under one of its own descendants.
    /// Adding a child that already has a creator re-points its `creator` but
    /// leaves it in the old creator's offspring list.
    #[instrument(level = "trace", skip(self))]
    pub fn add_offspring(&mut self, creator: VampireId, child: VampireId) -> TreeResult<()> {
        if !self.arena.contains(creator) {
            return Err(DomainError::UnknownVampire(creator));
        }
        let child_node = self.node_mut(child)?;
        let previous = child_node.creator.replace(creator);
        if let Some(previous) = previous.filter(|p| *p != creator) {
            warn!(
                child = %child_node.data,
                ?previous,
                "vampire already had a creator, overwriting"
            );
        }
        self.node_mut(creator)?.offspring.push(child);
        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, id: VampireId) -> Option<&TreeNode> {
        self.arena.get(id)
    }

    fn node(&self, id: VampireId) -> TreeResult<&TreeNode> {
        self.arena.get(id).ok_or(DomainError::UnknownVampire(id))
    }

    fn node_mut(&mut self, id: VampireId) -> TreeResult<&mut TreeNode> {
        self.arena.get_mut(id).ok_or(DomainError::UnknownVampire(id))
    }

    pub fn vampire(&self, id: VampireId) -> TreeResult<&Vampire> {
        Ok(&self.node(id)?.data)
    }

    pub fn creator(&self, id: VampireId) -> TreeResult<Option<VampireId>> {
        Ok(self.node(id)?.creator)
    }

    pub fn offspring(&self, id: VampireId) -> TreeResult<&[VampireId]> {
        Ok(&self.node(id)?.offspring)
    }

    /// Number of direct offspring (not descendants).
    pub fn offspring_count(&self, id: VampireId) -> TreeResult<usize> {
        Ok(self.node(id)?.offspring.len())
    }

    pub fn is_root(&self, id: VampireId) -> TreeResult<bool> {
        Ok(self.node(id)?.creator.is_none())
    }

    /// All vampires without a creator, in insertion order.
    #[instrument(level = "trace", skip(self))]
    pub fn roots(&self) -> Vec<VampireId> {
        self.arena
            .iter()
            .filter(|(_, node)| node.creator.is_none())
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Iterates over the creator chain of `id`, nearest first, excluding `id` itself.
    #[instrument(level = "trace", skip(self))]
    pub fn ancestors(&self, id: VampireId) -> TreeResult<Ancestors<'_>> {
        let node = self.node(id)?;
        Ok(Ancestors {
            bloodline: self,
            next: node.creator,
        })
    }

    /// Number of creator links between `id` and its root; roots have depth 0.
    #[instrument(level = "debug", skip(self))]
    pub fn depth_from_root(&self, id: VampireId) -> TreeResult<usize> {
        Ok(self.ancestors(id)?.count())
    }

    /// True iff `id` is strictly closer to its root than `other`.
    #[instrument(level = "debug", skip(self))]
    pub fn is_more_senior_than(&self, id: VampireId, other: VampireId) -> TreeResult<bool> {
        Ok(self.depth_from_root(id)? < self.depth_from_root(other)?)
    }

    /// Nearest vampire that is an ancestor of both `a` and `b`.
    ///
    /// A vampire counts as its own ancestor, so if one is a direct ancestor of
    /// the other, that one is returned. `None` if `a` and `b` live in disjoint
    /// trees.
    #[instrument(level = "debug", skip(self))]
    pub fn closest_common_ancestor(
        &self,
        a: VampireId,
        b: VampireId,
    ) -> TreeResult<Option<VampireId>> {
        let mut depth_a = self.depth_from_root(a)?;
        let mut depth_b = self.depth_from_root(b)?;
        let mut current_a = Some(a);
        let mut current_b = Some(b);

        while depth_a > depth_b {
            current_a = current_a.and_then(|idx| self.creator_of(idx));
            depth_a -= 1;
        }
        while depth_b > depth_a {
            current_b = current_b.and_then(|idx| self.creator_of(idx));
            depth_b -= 1;
        }

        // same depth now, climb in lockstep
        while current_a != current_b {
            current_a = current_a.and_then(|idx| self.creator_of(idx));
            current_b = current_b.and_then(|idx| self.creator_of(idx));
        }

        Ok(current_a)
    }

    fn creator_of(&self, id: VampireId) -> Option<VampireId> {
        self.arena.get(id).and_then(|node| node.creator)
    }

    /// Pre-order traversal of the subtree rooted at `from`: the vampire itself,
    /// then each offspring subtree in insertion order.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_preorder(&self, from: VampireId) -> TreeResult<PreOrderIterator<'_>> {
        self.node(from)?;
        Ok(PreOrderIterator::new(self, from))
    }

    /// First vampire named `name` in pre-order from `from` (inclusive).
    #[instrument(level = "debug", skip(self))]
    pub fn find_by_name(&self, from: VampireId, name: &str) -> TreeResult<Option<VampireId>> {
        Ok(self
            .iter_preorder(from)?
            .find(|(_, node)| node.data.name() == name)
            .map(|(idx, _)| idx))
    }

    /// Size of the subtree rooted at `id`, not counting `id` itself.
    #[instrument(level = "debug", skip(self))]
    pub fn count_descendants(&self, id: VampireId) -> TreeResult<usize> {
        Ok(self.iter_preorder(id)?.count().saturating_sub(1))
    }

    /// All vampires in the subtree rooted at `from` (inclusive) matching
    /// `predicate`, in pre-order.
    #[instrument(level = "debug", skip(self, predicate))]
    pub fn collect_where<P>(&self, from: VampireId, mut predicate: P) -> TreeResult<Vec<VampireId>>
    where
        P: FnMut(&Vampire) -> bool,
    {
        Ok(self
            .iter_preorder(from)?
            .filter(|(_, node)| predicate(&node.data))
            .map(|(idx, _)| idx)
            .collect())
    }
}

/// Iterator over the creator chain of a vampire.
pub struct Ancestors<'a> {
    bloodline: &'a Bloodline,
    next: Option<VampireId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = VampireId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.bloodline.creator_of(current);
        Some(current)
    }
}

pub struct PreOrderIterator<'a> {
    bloodline: &'a Bloodline,
    stack: Vec<VampireId>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(bloodline: &'a Bloodline, from: VampireId) -> Self {
        Self {
            bloodline,
            stack: vec![from],
        }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (VampireId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.bloodline.get_node(current_idx) {
                // Push offspring in reverse order for left-to-right traversal
                for &child in node.offspring.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
