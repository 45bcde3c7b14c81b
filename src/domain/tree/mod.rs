use std::marker::PhantomData;
use std::time::Instant;

use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

use crate::domain::hash::HashMethod;
use crate::domain::proof::MerkleProof;
use crate::error::{MerkleError, Result};

/// A static membership tree over a list of member byte-strings.
///
/// The leaf layer is sorted by digest value and every pair is combined under
/// the sorted-pair rule, so the root is a pure function of the leaf multiset:
/// permuting the member list never changes the root. An odd node at the end
/// of a level is promoted unpaired to the next level. Both conventions are
/// part of the published commitment and must not change once a root is out.
///
/// A tree is immutable once built; membership changes mean building a fresh
/// tree and republishing its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree<Method: HashMethod> {
    levels: Vec<Vec<Vec<u8>>>, // levels[0] is the sorted leaf layer, last is the root layer
    root: Vec<u8>,
    method: PhantomData<Method>,
}

impl<Method: HashMethod> MerkleTree<Method> {
    /// Build a tree from raw member byte-strings. Each member is hashed into
    /// a leaf; duplicate members produce duplicate leaves (no dedup).
    ///
    /// An empty member list yields the all-zero sentinel root.
    pub fn from_members(members: &[Vec<u8>]) -> Result<Self> {
        let leaves: Vec<Vec<u8>> = members
            .par_iter()
            .map(|member| Method::hash_leaf(member))
            .collect();
        Self::from_leaf_hashes(leaves)
    }

    /// Build a tree from already-hashed leaves, e.g. when leaf digests come
    /// from an external pipeline.
    pub fn from_leaf_hashes(leaves: Vec<Vec<u8>>) -> Result<Self> {
        for leaf in &leaves {
            if leaf.len() != Method::DIGEST_SIZE {
                return Err(MerkleError::InvalidInput(format!(
                    "leaf digest must be {} bytes, got {}",
                    Method::DIGEST_SIZE,
                    leaf.len()
                )));
            }
        }

        let start = Instant::now();
        let mut levels: Vec<Vec<Vec<u8>>> = Vec::new();
        let mut current: Vec<Vec<u8>> = leaves.into_iter().sorted().collect();

        while current.len() > 1 {
            let next: Vec<Vec<u8>> = current
                .par_chunks(2)
                .map(|pair| {
                    if let [left, right] = pair {
                        Method::hash_nodes(left, right)
                    } else {
                        // odd node at the end of the level: promote unchanged
                        pair[0].clone()
                    }
                })
                .collect();
            levels.push(current);
            current = next;
        }

        let root = current.first().cloned().unwrap_or_else(Method::empty_root);
        levels.push(current);
        debug!(
            "built tree with {} leaves in {:?}",
            levels[0].len(),
            start.elapsed()
        );

        Ok(Self {
            levels,
            root,
            method: PhantomData,
        })
    }

    /// The published commitment for this member set.
    pub fn root(&self) -> Vec<u8> {
        self.root.clone()
    }

    pub fn root_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.root))
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Leaf digests in their sorted layer order.
    pub fn leaves(&self) -> impl Iterator<Item = &Vec<u8>> {
        self.levels[0].iter()
    }

    /// Position of a leaf digest in the leaf layer, or `NotFound`.
    pub fn leaf_index(&self, hash: &[u8]) -> Result<usize> {
        self.levels[0]
            .iter()
            .position(|leaf| leaf == hash)
            .ok_or(MerkleError::NotFound)
    }

    /// Generate the sibling path for a raw member. Fails with `NotFound`
    /// when the member's leaf digest is not in the tree.
    pub fn proof_for(&self, member: &[u8]) -> Result<MerkleProof<Method>> {
        let index = self.leaf_index(&Method::hash_leaf(member))?;
        self.proof_at(index)
    }

    /// Generate the sibling path for the leaf at `index`, leaf-to-root.
    /// A level where the node was promoted unpaired contributes no sibling.
    pub fn proof_at(&self, index: usize) -> Result<MerkleProof<Method>> {
        if index >= self.levels[0].len() {
            return Err(MerkleError::NotFound);
        }

        let mut steps = Vec::new();
        let mut node = index;

        // Walk every level below the root layer.
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = if node % 2 == 0 { node + 1 } else { node - 1 };
            if sibling < level.len() {
                steps.push(level[sibling].clone());
            }
            node /= 2;
        }

        Ok(MerkleProof::new(steps))
    }
}
