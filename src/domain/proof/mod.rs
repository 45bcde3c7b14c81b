use std::marker::PhantomData;

use crate::domain::hash::HashMethod;
use crate::error::{MerkleError, Result};

/// An ordered sequence of sibling digests from leaf to root. Together with
/// the leaf's own hash and the sorted-pair combine rule it is sufficient to
/// recompute the root; no direction flags are needed because the combine
/// step sorts its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleProof<Method>
where
    Method: HashMethod,
{
    pub steps: Vec<Vec<u8>>,
    method: PhantomData<Method>,
}

impl<Method: HashMethod> MerkleProof<Method> {
    pub fn new(steps: Vec<Vec<u8>>) -> Self {
        Self {
            steps,
            method: PhantomData,
        }
    }

    /// Return the sibling hashes in leaf-to-root order.
    pub fn proof_hashes(&self) -> Vec<Vec<u8>> {
        self.steps.clone()
    }

    /// Render the proof as `0x`-prefixed hex strings, the serialization
    /// handed to address owners.
    pub fn to_hex(&self) -> Vec<String> {
        self.steps
            .iter()
            .map(|step| format!("0x{}", hex::encode(step)))
            .collect()
    }

    /// Compute the root implied by this proof for `leaf_hash` by folding the
    /// sibling digests upward.
    ///
    /// Fails with `MalformedProof` only when the leaf hash or a step is not
    /// a well-formed digest; a proof that merely lands on the wrong root is
    /// not an error here.
    pub fn root(&self, leaf_hash: &[u8]) -> Result<Vec<u8>> {
        if leaf_hash.len() != Method::DIGEST_SIZE {
            return Err(MerkleError::MalformedProof(format!(
                "leaf hash must be {} bytes, got {}",
                Method::DIGEST_SIZE,
                leaf_hash.len()
            )));
        }

        let mut current = leaf_hash.to_vec();
        for sibling in &self.steps {
            if sibling.len() != Method::DIGEST_SIZE {
                return Err(MerkleError::MalformedProof(format!(
                    "proof element must be {} bytes, got {}",
                    Method::DIGEST_SIZE,
                    sibling.len()
                )));
            }
            current = Method::hash_nodes(sibling, &current);
        }
        Ok(current)
    }

    /// Verify this proof against a known root. Safe to call with only the
    /// `(leaf, proof, root)` triple; no tree or member list is required.
    /// A wrong or incomplete proof is a normal `Ok(false)`.
    pub fn verify(&self, root: &[u8], leaf_hash: &[u8]) -> Result<bool> {
        Ok(self.root(leaf_hash)? == root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hash::keccak::Keccak256Sorted;
    use crate::domain::hash::HashMethod;

    type Proof = MerkleProof<Keccak256Sorted>;

    #[test]
    fn test_no_steps_proof() {
        // A proof with no siblings means the leaf is the root itself.
        let proof = Proof::new(vec![]);
        let leaf_hash = Keccak256Sorted::hash_leaf(b"single_member");

        assert!(
            proof.verify(&leaf_hash, &leaf_hash).unwrap(),
            "No-step proof must succeed when leaf == root"
        );

        let other_root = Keccak256Sorted::hash_leaf(b"something_else");
        assert!(
            !proof.verify(&other_root, &leaf_hash).unwrap(),
            "No-step proof must fail when leaf != root"
        );
    }

    #[test]
    fn test_single_step_is_order_independent() {
        let leaf_hash = Keccak256Sorted::hash_leaf(b"member");
        let sibling_hash = Keccak256Sorted::hash_leaf(b"sibling");

        let proof = Proof::new(vec![sibling_hash.clone()]);
        let root = Keccak256Sorted::hash_nodes(&sibling_hash, &leaf_hash);

        assert!(
            proof.verify(&root, &leaf_hash).unwrap(),
            "One-step proof must reproduce the combined root"
        );

        // The sorted-pair rule makes both argument orders produce the
        // same parent, so the "swapped" root is the same value.
        let swapped = Keccak256Sorted::hash_nodes(&leaf_hash, &sibling_hash);
        assert!(proof.verify(&swapped, &leaf_hash).unwrap());
    }

    #[test]
    fn test_multi_step_proof() {
        // Manually built 4-leaf structure:
        //         R
        //       /   \
        //     N1     N2
        //    /  \   /  \
        //   A    B C    D
        let a = Keccak256Sorted::hash_leaf(b"A");
        let b = Keccak256Sorted::hash_leaf(b"B");
        let c = Keccak256Sorted::hash_leaf(b"C");
        let d = Keccak256Sorted::hash_leaf(b"D");

        let n1 = Keccak256Sorted::hash_nodes(&a, &b);
        let n2 = Keccak256Sorted::hash_nodes(&c, &d);
        let r = Keccak256Sorted::hash_nodes(&n1, &n2);

        // Path for leaf B: sibling A, then sibling N2.
        let proof = Proof::new(vec![a.clone(), n2.clone()]);
        assert!(
            proof.verify(&r, &b).unwrap(),
            "Manually built multi-step proof must match the final root"
        );

        let fake_root = Keccak256Sorted::hash_leaf(b"fake_root");
        assert!(!proof.verify(&fake_root, &b).unwrap(), "Wrong root must fail");
    }

    #[test]
    fn test_wrong_length_step_is_malformed() {
        let leaf_hash = Keccak256Sorted::hash_leaf(b"member");
        let proof = Proof::new(vec![vec![0xAB; 31]]);

        let result = proof.verify(&leaf_hash, &leaf_hash);
        assert!(
            matches!(result, Err(MerkleError::MalformedProof(_))),
            "A 31-byte proof element must be rejected as malformed, got {result:?}"
        );
    }

    #[test]
    fn test_wrong_length_leaf_is_malformed() {
        let sibling = Keccak256Sorted::hash_leaf(b"sibling");
        let proof = Proof::new(vec![sibling.clone()]);

        let result = proof.verify(&sibling, b"short");
        assert!(
            matches!(result, Err(MerkleError::MalformedProof(_))),
            "A leaf hash with the wrong length must be rejected, got {result:?}"
        );
    }

    #[test]
    fn test_to_hex_rendering() {
        let sibling = Keccak256Sorted::hash_leaf(b"sibling");
        let proof = Proof::new(vec![sibling.clone()]);

        let rendered = proof.to_hex();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0], format!("0x{}", hex::encode(&sibling)));
    }
}
