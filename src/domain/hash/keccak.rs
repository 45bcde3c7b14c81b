use sha3::{digest::FixedOutput, Digest, Keccak256};

use super::HashMethod;

/// Single Keccak-256 for leaves and nodes, with sorted-pair combining.
/// This matches EVM-side verifiers, which hash `keccak256(min || max)`.
#[derive(Debug, Clone, Copy)]
pub struct Keccak256Sorted;

impl HashMethod for Keccak256Sorted {
    const DIGEST_SIZE: usize = 32;

    fn hash_leaf(data: &[u8]) -> Vec<u8> {
        let mut hasher = Keccak256::new();
        hasher.update(data);
        hasher.finalize_fixed().to_vec()
    }

    fn hash_nodes(left: &[u8], right: &[u8]) -> Vec<u8> {
        let mut hasher = Keccak256::new();
        if left.le(right) {
            hasher.update(left);
            hasher.update(right);
        } else {
            hasher.update(right);
            hasher.update(left);
        }
        hasher.finalize_fixed().to_vec()
    }
}
