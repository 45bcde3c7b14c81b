use sha2::{digest::FixedOutput, Digest, Sha256};

use super::HashMethod;

/// Single SHA-256 for leaves and nodes, with sorted-pair combining. An
/// alternative to [`Keccak256Sorted`](super::keccak::Keccak256Sorted) for
/// deployments that do not need EVM-compatible digests.
#[derive(Debug, Clone, Copy)]
pub struct Sha256Sorted;

impl HashMethod for Sha256Sorted {
    const DIGEST_SIZE: usize = 32;

    fn hash_leaf(data: &[u8]) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize_fixed().to_vec()
    }

    fn hash_nodes(left: &[u8], right: &[u8]) -> Vec<u8> {
        let mut hasher = Sha256::new();
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
