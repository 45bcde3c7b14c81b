use std::collections::BTreeMap;

use log::info;

use crate::domain::hash::HashMethod;
use crate::domain::proof::MerkleProof;
use crate::domain::tree::MerkleTree;
use crate::error::{MerkleError, Result};

/// Per-list trees keyed by a numeric list id (token id in the minting use
/// case). Each id owns a fully independent tree; there is no cross-list
/// sharing. The registry is an explicit value constructed by the caller
/// from whatever source holds the lists, not process-wide state.
///
/// Replacing a list rebuilds that id's tree from scratch; the previous tree
/// value is dropped, never mutated, so readers holding a clone are unaffected.
#[derive(Debug)]
pub struct WhitelistRegistry<Method: HashMethod> {
    trees: BTreeMap<u64, MerkleTree<Method>>,
}

impl<Method: HashMethod> Default for WhitelistRegistry<Method> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Method: HashMethod> WhitelistRegistry<Method> {
    pub fn new() -> Self {
        Self {
            trees: BTreeMap::new(),
        }
    }

    /// Build a registry from `(id, member list)` pairs in one pass.
    pub fn from_lists<I>(lists: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u64, Vec<Vec<u8>>)>,
    {
        let mut registry = Self::new();
        for (id, members) in lists {
            registry.set_list(id, &members)?;
        }
        Ok(registry)
    }

    /// Build (or replace) the tree for `id` from a full member list.
    pub fn set_list(&mut self, id: u64, members: &[Vec<u8>]) -> Result<()> {
        let tree = MerkleTree::from_members(members)?;
        info!(
            "list {} committed: {} members, root {}",
            id,
            tree.leaf_count(),
            tree.root_hex()
        );
        self.trees.insert(id, tree);
        Ok(())
    }

    /// Drop the tree for `id`. Returns whether the id was present.
    pub fn remove_list(&mut self, id: u64) -> bool {
        self.trees.remove(&id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.trees.keys().copied()
    }

    pub fn tree(&self, id: u64) -> Option<&MerkleTree<Method>> {
        self.trees.get(&id)
    }

    /// The published commitment for `id`, if that list exists.
    pub fn root(&self, id: u64) -> Option<Vec<u8>> {
        self.trees.get(&id).map(|tree| tree.root())
    }

    pub fn root_hex(&self, id: u64) -> Option<String> {
        self.trees.get(&id).map(|tree| tree.root_hex())
    }

    /// Generate a membership proof for `member` against list `id`. Fails
    /// with `NotFound` for an unknown id or an absent member.
    pub fn proof(&self, id: u64, member: &[u8]) -> Result<MerkleProof<Method>> {
        self.trees
            .get(&id)
            .ok_or(MerkleError::NotFound)?
            .proof_for(member)
    }
}
